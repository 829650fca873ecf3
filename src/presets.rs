//! Default-preset resolution.
//!
//! `resolve_defaults` fills a record with the conventional values for a
//! (generation, tracer, output kind) combination: tracer label, redshift
//! selection, grid parameters, direct-edge policy, sculpt bundle, and the
//! base directory under the shared mock root. The selection is a decision
//! table over typed enums rather than substring checks, so adding a tracer
//! means adding an arm here.

use serde_json::json;

use crate::attrs::AttrMap;
use crate::domain::{FileName, Generation, OutputKind};
use crate::error::NamerError;

/// Root of the shared mock output tree.
pub const MOCK_ROOT: &str = "/global/cfs/cdirs/desi/users/mpinon";

impl FileName {
    /// Apply `overrides`, then merge the default preset selected by the
    /// resulting generation/tracer/output-kind combination.
    ///
    /// Only "ELG"-prefixed tracers have presets; anything else fails with
    /// [`NamerError::UnsupportedTracer`]. LRG/QSO/BGS presets are an
    /// extension point, not an oversight in the caller's input.
    pub fn resolve_defaults(&mut self, overrides: &AttrMap) -> Result<(), NamerError> {
        self.update(overrides)?;

        if !self.tracer.starts_with("ELG") {
            return Err(NamerError::UnsupportedTracer {
                generation: self.generation,
                tracer: self.tracer.clone(),
            });
        }

        let mut preset = match self.generation {
            Generation::First => self.first_gen_preset(),
            Generation::Second => self.second_gen_preset(),
            Generation::Cubic => self.cubic_preset(),
        };

        let base_dir: std::path::PathBuf = [
            MOCK_ROOT,
            self.generation.folder(),
            self.output_kind().subdir(),
        ]
        .iter()
        .collect();
        preset.insert("base_dir".to_string(), json!(base_dir));

        self.update(&preset)
    }

    fn first_gen_preset(&self) -> AttrMap {
        let mut preset = AttrMap::new();
        preset.insert("tracer".to_string(), json!("ELG"));
        preset.insert("redshift_range".to_string(), json!([0.8, 1.6]));
        if self.output_kind() == OutputKind::Power {
            preset.insert("use_direct_edges".to_string(), json!(false));
        }
        preset
    }

    fn second_gen_preset(&self) -> AttrMap {
        let mut preset = AttrMap::new();
        preset.insert("tracer".to_string(), json!("ELG_LOP"));
        preset.insert("redshift_range".to_string(), json!([0.8, 1.6]));
        if self.output_kind() == OutputKind::Power {
            preset.insert("cell_size".to_string(), json!(4));
            preset.insert("use_direct_edges".to_string(), json!(true));
            if self.sculpt_requested() {
                preset.insert(
                    "sculpt_attributes".to_string(),
                    json!({
                        "multipole_orders": [0, 2, 4],
                        "kobs_max": 0.4,
                        "kt_max": 0.5,
                        "cap_sigma": 5,
                        "diff_lfactor": 10,
                        "covariance_type": "analytic"
                    }),
                );
            }
        }
        preset
    }

    /// Cubic boxes have no survey geometry: region and redshift range are
    /// cleared and the snapshot redshift selects the grid parameters.
    fn cubic_preset(&self) -> AttrMap {
        let mut preset = AttrMap::new();
        preset.insert("tracer".to_string(), json!("ELG"));
        preset.insert("region".to_string(), json!(null));
        preset.insert("redshift_range".to_string(), json!(null));
        preset.insert("box_size".to_string(), json!(2000));
        match self.redshift_point {
            Some(z) if z == 0.95 => {
                preset.insert("redshift_point".to_string(), json!(0.95));
                preset.insert("cell_size".to_string(), json!(6));
            }
            Some(z) if z != 1.1 => {
                // Snapshot without a dedicated grid preset: keep the
                // requested redshift, leave grid parameters alone.
                preset.insert("redshift_point".to_string(), json!(z));
            }
            _ => {
                preset.insert("redshift_point".to_string(), json!(1.1));
                preset.insert("mesh_count".to_string(), json!(2048));
            }
        }
        preset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs::AttrMap;
    use serde_json::{Value, json};
    use std::path::Path;

    fn map(entries: &[(&str, Value)]) -> AttrMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn second_gen_power_preset() {
        let mut record = FileName::default();
        record
            .resolve_defaults(&map(&[
                ("generation", json!("second")),
                ("tracer", json!("ELG")),
                ("file_type", json!("power")),
            ]))
            .unwrap();

        assert_eq!(record.tracer, "ELG_LOP");
        assert_eq!(record.redshift_range, Some((0.8, 1.6)));
        assert_eq!(record.cell_size, Some(4));
        assert!(record.use_direct_edges);
        assert_eq!(record.sculpt_attributes, None);
        assert_eq!(
            record.base_dir.as_deref(),
            Some(Path::new(
                "/global/cfs/cdirs/desi/users/mpinon/secondGenMocksY1/pk"
            ))
        );
    }

    #[test]
    fn second_gen_corr_preset_goes_under_xi() {
        let mut record = FileName::default();
        record
            .resolve_defaults(&map(&[("file_type", json!("corr"))]))
            .unwrap();

        assert_eq!(record.tracer, "ELG_LOP");
        assert_eq!(record.cell_size, None);
        assert_eq!(
            record.base_dir.as_deref(),
            Some(Path::new(
                "/global/cfs/cdirs/desi/users/mpinon/secondGenMocksY1/xi"
            ))
        );
    }

    #[test]
    fn second_gen_sculpt_file_type_fills_sculpt_bundle() {
        let mut record = FileName::default();
        record
            .resolve_defaults(&map(&[("file_type", json!("wmatrix_smooth_sculpt"))]))
            .unwrap();

        let sculpt = record.sculpt_attributes.expect("sculpt bundle");
        assert_eq!(sculpt.multipole_orders, vec![0, 2, 4]);
        assert_eq!(sculpt.kobs_max, 0.4);
        assert_eq!(sculpt.kt_max, 0.5);
        assert_eq!(sculpt.cap_sigma, 5);
        assert_eq!(sculpt.diff_lfactor, 10);
        assert_eq!(sculpt.covariance_type, "analytic");
    }

    #[test]
    fn first_gen_power_disables_direct_edges() {
        let mut record = FileName::default();
        record
            .resolve_defaults(&map(&[("generation", json!("first"))]))
            .unwrap();

        assert_eq!(record.tracer, "ELG");
        assert!(!record.use_direct_edges);
        assert_eq!(
            record.base_dir.as_deref(),
            Some(Path::new(
                "/global/cfs/cdirs/desi/users/mpinon/firstGenMocksY1/pk"
            ))
        );
    }

    #[test]
    fn cubic_defaults_to_snapshot_1_1() {
        let mut record = FileName::default();
        record
            .resolve_defaults(&map(&[("generation", json!("cubic"))]))
            .unwrap();

        assert_eq!(record.redshift_point, Some(1.1));
        assert_eq!(record.redshift_range, None);
        assert_eq!(record.region, None);
        assert_eq!(record.mesh_count, Some(2048));
        assert_eq!(record.box_size, Some(2000));
        assert_eq!(
            record.base_dir.as_deref(),
            Some(Path::new(
                "/global/cfs/cdirs/desi/users/mpinon/cubicSecondGenMocks/pk"
            ))
        );
    }

    #[test]
    fn cubic_snapshot_0_95_switches_grid_parameters() {
        let mut record = FileName::default();
        record
            .resolve_defaults(&map(&[
                ("generation", json!("cubic")),
                ("redshift_point", json!(0.95)),
            ]))
            .unwrap();

        assert_eq!(record.redshift_point, Some(0.95));
        assert_eq!(record.cell_size, Some(6));
        assert_eq!(record.mesh_count, None);
        assert_eq!(record.box_size, Some(2000));
    }

    #[test]
    fn cubic_unlisted_snapshot_keeps_requested_redshift() {
        let mut record = FileName::default();
        record
            .resolve_defaults(&map(&[
                ("generation", json!("cubic")),
                ("redshift_point", json!(2.5)),
            ]))
            .unwrap();

        assert_eq!(record.redshift_point, Some(2.5));
        assert_eq!(record.mesh_count, None);
        assert_eq!(record.cell_size, None);
        assert_eq!(record.box_size, Some(2000));
    }

    #[test]
    fn non_elg_tracer_is_unsupported() {
        let mut record = FileName::default();
        let err = record
            .resolve_defaults(&map(&[
                ("generation", json!("first")),
                ("tracer", json!("LRG")),
            ]))
            .unwrap_err();

        assert_eq!(
            err,
            NamerError::UnsupportedTracer {
                generation: Generation::First,
                tracer: "LRG".to_string()
            }
        );
    }

    #[test]
    fn elg_variant_tracers_are_accepted() {
        let mut record = FileName::default();
        record
            .resolve_defaults(&map(&[("tracer", json!("ELG_LOPnotqso"))]))
            .unwrap();
        // The preset still normalizes the label for the second generation.
        assert_eq!(record.tracer, "ELG_LOP");
    }
}
