//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - assembles an attribute map from files, flags, and `--set` pairs
//! - builds/resolves the record and prints the rendered path

use clap::Parser;

use serde_json::{Value, json};

use crate::attrs::AttrMap;
use crate::cli::{Cli, Command, RenderArgs};
use crate::domain::FileName;
use crate::error::NamerError;

/// Entry point for the `mockpath` binary.
pub fn run() -> Result<(), NamerError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Render(args) => handle_render(args, ResolveMode::AsIs),
        Command::Resolve(args) => handle_render(args, ResolveMode::FillDefaults),
        Command::Attrs => handle_attrs(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResolveMode {
    AsIs,
    FillDefaults,
}

fn handle_render(args: RenderArgs, mode: ResolveMode) -> Result<(), NamerError> {
    let attrs = attr_map_from_args(&args)?;

    let mut record = FileName::default();
    match mode {
        ResolveMode::AsIs => record.update(&attrs)?,
        ResolveMode::FillDefaults => record.resolve_defaults(&attrs)?,
    }

    println!("{}", record.full_path().display());
    Ok(())
}

fn handle_attrs() -> Result<(), NamerError> {
    let defaults = serde_json::to_string_pretty(&FileName::default()).map_err(|e| {
        NamerError::Io {
            message: format!("Failed to serialize default record: {e}"),
        }
    })?;
    println!("attributes: {}", crate::attrs::ATTRIBUTE_NAMES.join(", "));
    println!("{defaults}");
    Ok(())
}

/// Build an attribute map from CLI inputs.
///
/// Precedence, lowest to highest: `--attrs` file, dedicated flags,
/// `--set` pairs. Key validation happens in `update`, so a typo in `--set`
/// fails with the same `UnknownAttribute` a library caller would see.
fn attr_map_from_args(args: &RenderArgs) -> Result<AttrMap, NamerError> {
    let mut map = match &args.attrs {
        Some(path) => crate::io::read_attrs_json(path)?,
        None => AttrMap::new(),
    };

    let mut set = |name: &str, value: Value| {
        map.insert(name.to_string(), value);
    };

    if let Some(generation) = args.generation {
        set("generation", json!(generation.as_str()));
    }
    if let Some(file_type) = &args.file_type {
        set("file_type", json!(file_type));
    }
    if let Some(realization) = args.realization {
        set("realization", json!(realization));
    }
    if args.merged {
        set("realization", Value::Null);
    }
    if let Some(tracer) = &args.tracer {
        set("tracer", json!(tracer));
    }
    if let Some(complete) = args.complete {
        set("completeness", json!(complete));
    }
    if let Some(tag) = &args.fiber_assign {
        set("completeness", json!(tag));
    }
    if let Some(region) = &args.region {
        set("region", json!(region));
    }
    if let Some(zrange) = &args.zrange {
        set("redshift_range", json!(zrange));
    }
    if let Some(z) = args.z {
        set("redshift_point", json!(z));
    }
    if let Some(weighting) = &args.weighting {
        set("weighting", json!(weighting));
    }
    if let Some(nran) = args.nran {
        set("random_count", json!(nran));
    }
    if let Some(los) = &args.los {
        set("line_of_sight", json!(los));
    }
    if let Some(cellsize) = args.cellsize {
        set("cell_size", json!(cellsize));
    }
    if let Some(nmesh) = args.nmesh {
        set("mesh_count", json!(nmesh));
    }
    if let Some(boxsize) = args.boxsize {
        set("box_size", json!(boxsize));
    }
    if let Some(rpcut) = args.rpcut {
        set("radial_cut", json!(rpcut));
    }
    if let Some(thetacut) = args.thetacut {
        set("angular_cut", json!(thetacut));
    }
    if let Some(direct_edges) = args.direct_edges {
        set("use_direct_edges", json!(direct_edges));
    }
    if let Some(base_dir) = &args.base_dir {
        set("base_dir", json!(base_dir));
    }

    for pair in &args.set {
        let (key, value) = parse_set_pair(pair)?;
        map.insert(key, value);
    }

    Ok(map)
}

/// Parse one `--set key=value` pair. The value is tried as JSON first so
/// numbers, booleans, null, arrays and objects work; anything that is not
/// valid JSON is taken as a plain string.
fn parse_set_pair(pair: &str) -> Result<(String, Value), NamerError> {
    let Some((key, raw)) = pair.split_once('=') else {
        return Err(NamerError::invalid(
            pair,
            "expected KEY=VALUE for --set".to_string(),
        ));
    };
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn render_args(argv: &[&str]) -> RenderArgs {
        let mut full = vec!["mockpath", "render"];
        full.extend_from_slice(argv);
        match Cli::parse_from(full).command {
            Command::Render(args) => args,
            _ => panic!("expected render subcommand"),
        }
    }

    #[test]
    fn set_pairs_parse_json_with_string_fallback() {
        assert_eq!(
            parse_set_pair("cell_size=4").unwrap(),
            ("cell_size".to_string(), json!(4))
        );
        assert_eq!(
            parse_set_pair("tracer=ELG_LOP").unwrap(),
            ("tracer".to_string(), json!("ELG_LOP"))
        );
        assert_eq!(
            parse_set_pair("realization=null").unwrap(),
            ("realization".to_string(), Value::Null)
        );
        assert!(parse_set_pair("no-equals-sign").is_err());
    }

    #[test]
    fn flags_map_onto_attribute_names() {
        let args = render_args(&[
            "--generation",
            "cubic",
            "--file-type",
            "pkpoles",
            "--z",
            "1.1",
            "--nmesh",
            "2048",
            "--rpcut",
            "2.5",
        ]);
        let map = attr_map_from_args(&args).unwrap();

        assert_eq!(map.get("generation"), Some(&json!("cubic")));
        assert_eq!(map.get("file_type"), Some(&json!("pkpoles")));
        assert_eq!(map.get("redshift_point"), Some(&json!(1.1)));
        assert_eq!(map.get("mesh_count"), Some(&json!(2048)));
        assert_eq!(map.get("radial_cut"), Some(&json!(2.5)));
        assert!(!map.contains_key("tracer"));
    }

    #[test]
    fn set_pairs_override_dedicated_flags() {
        let args = render_args(&["--tracer", "ELG", "--set", "tracer=ELG_LOP"]);
        let map = attr_map_from_args(&args).unwrap();
        assert_eq!(map.get("tracer"), Some(&json!("ELG_LOP")));
    }

    #[test]
    fn merged_flag_clears_the_realization() {
        let args = render_args(&["--merged"]);
        let map = attr_map_from_args(&args).unwrap();
        assert_eq!(map.get("realization"), Some(&Value::Null));
    }

    #[test]
    fn typo_in_set_key_surfaces_unknown_attribute() {
        let args = render_args(&["--set", "tracr=ELG"]);
        let map = attr_map_from_args(&args).unwrap();
        let err = FileName::default().update(&map).unwrap_err();
        assert_eq!(
            err,
            NamerError::UnknownAttribute {
                name: "tracr".to_string()
            }
        );
    }
}
