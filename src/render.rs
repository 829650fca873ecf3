//! Path rendering.
//!
//! Formatting lives in one place so the naming convention is auditable at a
//! glance: each segment helper below corresponds to one chunk of the final
//! filename. Rendering is a pure read of the record — it never mutates it,
//! and identical records always produce identical strings.

use std::fmt::Display;
use std::path::PathBuf;

use crate::domain::{Completeness, FileName, Generation, SculptAttrs};
use crate::presets::MOCK_ROOT;

impl FileName {
    /// Render the record into `(directory, filename)`.
    ///
    /// The directory is `base_dir` when set, otherwise derived from the
    /// generation folder and output kind under [`MOCK_ROOT`].
    pub fn render_path(&self) -> (PathBuf, String) {
        let dir = match &self.base_dir {
            Some(dir) => dir.clone(),
            None => [
                MOCK_ROOT,
                self.generation.folder(),
                self.output_kind().subdir(),
            ]
            .iter()
            .collect(),
        };

        let cut = self.cut_segment();
        // Direct pair-count edges are only worth naming when a cut is active.
        let direct = if !cut.is_empty() && self.use_direct_edges {
            "_directedges_max5000"
        } else {
            ""
        };

        let filename = format!(
            "{ftype}{mock}_{tracer}{comp}{region}{z}{weighting}{nran}{los}{cell}{mesh}{boxsize}{cut}{direct}{sculpt}.npy",
            ftype = self.file_type,
            mock = opt_segment("mock", &self.realization),
            tracer = self.tracer,
            comp = self.completeness_segment(),
            region = opt_segment("", &self.region),
            z = self.redshift_segment(),
            weighting = self.weighting.as_deref().unwrap_or(""),
            nran = opt_segment("nran", &self.random_count),
            los = opt_segment("los", &self.line_of_sight),
            cell = opt_segment("cellsize", &self.cell_size),
            mesh = opt_segment("nmesh", &self.mesh_count),
            boxsize = opt_segment("boxsize", &self.box_size),
            sculpt = sculpt_segment(self.sculpt_attributes.as_ref()),
        );

        (dir, filename)
    }

    /// Full path: directory joined with the filename.
    pub fn full_path(&self) -> PathBuf {
        let (dir, filename) = self.render_path();
        dir.join(filename)
    }

    /// At most one cut is active; radial wins if both are nonzero (policy,
    /// not an error).
    fn cut_segment(&self) -> String {
        if self.radial_cut != 0.0 {
            format!("_rpcut{:.1}", self.radial_cut)
        } else if self.angular_cut != 0.0 {
            format!("_thetacut{:.2}", self.angular_cut)
        } else {
            String::new()
        }
    }

    fn completeness_segment(&self) -> String {
        match &self.completeness {
            Completeness::Tag(tag) => tag.clone(),
            Completeness::Flag(complete) => match self.generation {
                Generation::First => {
                    if *complete { "_complete" } else { "" }.to_string()
                }
                Generation::Second => {
                    if *complete { "_complete" } else { "_ffa" }.to_string()
                }
                // Cubic boxes have no fiber assignment at all.
                Generation::Cubic => String::new(),
            },
        }
    }

    /// Range wins over point; a snapshot redshift gets three decimals.
    fn redshift_segment(&self) -> String {
        if let Some((lo, hi)) = self.redshift_range {
            format!("_z{lo:.1}-{hi:.1}")
        } else if let Some(z) = self.redshift_point {
            format!("_z{z:.3}")
        } else {
            String::new()
        }
    }
}

/// `_label{value}` when present, nothing when absent.
fn opt_segment<T: Display>(label: &str, value: &Option<T>) -> String {
    match value {
        Some(value) => format!("_{label}{value}"),
        None => String::new(),
    }
}

fn sculpt_segment(sculpt: Option<&SculptAttrs>) -> String {
    let Some(sculpt) = sculpt else {
        return String::new();
    };
    let orders: String = sculpt
        .multipole_orders
        .iter()
        .map(|order| order.to_string())
        .collect();
    format!(
        "_ells{orders}_kobsmax{:.1}_ktmax{:.1}_capsig{}_difflfac{}_{}cov",
        sculpt.kobs_max, sculpt.kt_max, sculpt.cap_sigma, sculpt.diff_lfactor, sculpt.covariance_type,
    )
}
