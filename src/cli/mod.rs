//! Command-line parsing for the mock path builder.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the naming logic. Common attributes get dedicated
//! flags; everything else goes through `--set key=json`, which hits the same
//! closed-set validation as library callers.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::Generation;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "mockpath",
    version,
    about = "Canonical path builder for DESI mock clustering outputs"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render a path from the given attributes, as-is.
    Render(RenderArgs),
    /// Fill the generation/tracer default preset, then render.
    Resolve(RenderArgs),
    /// Print the closed attribute set and the default record as JSON.
    Attrs,
}

/// Attribute flags shared by `render` and `resolve`.
#[derive(Debug, Parser, Clone)]
pub struct RenderArgs {
    /// Simulation generation (first, second, cubic).
    #[arg(long, value_enum)]
    pub generation: Option<Generation>,

    /// File type tag, e.g. power, pkpoles, window, corr, wmatrix_smooth_sculpt.
    #[arg(long = "file-type")]
    pub file_type: Option<String>,

    /// Mock realization index.
    #[arg(long)]
    pub realization: Option<u32>,

    /// Use merged realizations (clears the realization index).
    #[arg(long, conflicts_with = "realization")]
    pub merged: bool,

    /// Tracer label (ELG, ELG_LOP, ...).
    #[arg(long)]
    pub tracer: Option<String>,

    /// Completeness flag (true = complete, false = fiber assigned).
    #[arg(long)]
    pub complete: Option<bool>,

    /// Explicit fiber-assignment shortname, used verbatim (overrides --complete).
    #[arg(long = "fiber-assign", value_name = "TAG")]
    pub fiber_assign: Option<String>,

    /// Galactic cap (NGC, SGC, GCcomb).
    #[arg(long)]
    pub region: Option<String>,

    /// Redshift range, e.g. --zrange 0.8 1.6.
    #[arg(long, num_args = 2, value_names = ["LO", "HI"])]
    pub zrange: Option<Vec<f64>>,

    /// Snapshot redshift.
    #[arg(long)]
    pub z: Option<f64>,

    /// Weighting tag, appended verbatim to the filename.
    #[arg(long)]
    pub weighting: Option<String>,

    /// Number of random catalogs.
    #[arg(long)]
    pub nran: Option<u32>,

    /// Line of sight (x, y, z, firstpoint, ...).
    #[arg(long)]
    pub los: Option<String>,

    /// FFT cell size.
    #[arg(long)]
    pub cellsize: Option<u32>,

    /// FFT mesh count.
    #[arg(long)]
    pub nmesh: Option<u32>,

    /// Box size.
    #[arg(long)]
    pub boxsize: Option<u32>,

    /// rp-cut (Mpc/h); 0 disables.
    #[arg(long)]
    pub rpcut: Option<f64>,

    /// theta-cut (degrees); 0 disables.
    #[arg(long)]
    pub thetacut: Option<f64>,

    /// Whether direct pair-count edges were used (named only when a cut is active).
    #[arg(long = "direct-edges")]
    pub direct_edges: Option<bool>,

    /// Directory holding the file (otherwise derived from generation and output kind).
    #[arg(long = "dir")]
    pub base_dir: Option<PathBuf>,

    /// Extra attribute as key=value (repeatable). The value is parsed as
    /// JSON, falling back to a plain string, e.g.
    /// --set tracer=ELG_LOP or --set 'sculpt_attributes={"multipole_orders":[0,2,4],...}'.
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// JSON file holding an attribute map, applied before any flags.
    #[arg(long = "attrs", value_name = "JSON")]
    pub attrs: Option<PathBuf>,
}
