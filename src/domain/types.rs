//! Attribute record and supporting enums.
//!
//! These types are intentionally lightweight and serializable so a record can
//! be:
//!
//! - assembled from CLI flags or a JSON attribute map
//! - inspected as JSON (`mockpath attrs`)
//! - rendered into a canonical output path

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Generation of the Abacus mock suite a file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Generation {
    First,
    Second,
    /// Cubic-box mocks (periodic volume, no survey geometry).
    Cubic,
}

impl Generation {
    pub fn as_str(self) -> &'static str {
        match self {
            Generation::First => "first",
            Generation::Second => "second",
            Generation::Cubic => "cubic",
        }
    }

    /// Folder name under the shared mock root.
    pub fn folder(self) -> &'static str {
        match self {
            Generation::First => "firstGenMocksY1",
            Generation::Second => "secondGenMocksY1",
            Generation::Cubic => "cubicSecondGenMocks",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "first" => Some(Generation::First),
            "second" => Some(Generation::Second),
            "cubic" => Some(Generation::Cubic),
            _ => None,
        }
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of clustering statistic a file holds, derived from `file_type`.
///
/// Correlation-function outputs live under `xi/`, everything else under `pk/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Power,
    Correlation,
}

impl OutputKind {
    pub fn subdir(self) -> &'static str {
        match self {
            OutputKind::Power => "pk",
            OutputKind::Correlation => "xi",
        }
    }
}

/// Fiber-assignment completeness of the catalog behind a file.
///
/// Either a plain flag (complete vs. fiber-assigned, spelled out per
/// generation at render time) or an explicit shortname for the assignment
/// method, used verbatim in the filename (e.g. "_complete", "_ffa").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Completeness {
    Flag(bool),
    Tag(String),
}

/// Attributes of Pat's window-sculpting transformation (change of basis
/// applied to window matrices).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SculptAttrs {
    /// Multipole orders entering the transformation, e.g. `[0, 2, 4]`.
    pub multipole_orders: Vec<u32>,
    pub kobs_max: f64,
    pub kt_max: f64,
    pub cap_sigma: i64,
    pub diff_lfactor: i64,
    /// Covariance flavor, e.g. "analytic".
    pub covariance_type: String,
}

/// The attribute record: everything that determines one output path.
///
/// Created with [`Default`] values, mutated through `update` /
/// `resolve_defaults`, and read by `render_path`. The set of attributes is
/// closed; `update` rejects anything not listed in
/// [`crate::attrs::ATTRIBUTE_NAMES`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileName {
    /// Directory holding the file. `None` means: derive from generation and
    /// output kind at render time.
    pub base_dir: Option<PathBuf>,
    pub generation: Generation,
    /// File type tag, e.g. "power", "pkpoles", "window", "corr",
    /// "wmatrix_smooth_sculpt". Substrings "corr" and "sculpt" carry meaning.
    pub file_type: String,
    /// Mock realization index; `None` means merged realizations.
    pub realization: Option<u32>,
    /// Tracer label ("ELG", "LRG", "QSO", "BGS", or a suite-specific variant
    /// such as "ELG_LOP").
    pub tracer: String,
    pub completeness: Completeness,
    /// Galactic cap (NGC, SGC, GCcomb); `None` for cubic boxes.
    pub region: Option<String>,
    /// Redshift range; takes precedence over `redshift_point` in names.
    pub redshift_range: Option<(f64, f64)>,
    /// Snapshot redshift, used when no range is set.
    pub redshift_point: Option<f64>,
    /// Weighting tag appended verbatim (callers include their own separator).
    pub weighting: Option<String>,
    pub random_count: Option<u32>,
    pub line_of_sight: Option<String>,
    pub cell_size: Option<u32>,
    pub mesh_count: Option<u32>,
    pub box_size: Option<u32>,
    /// rp-cut in Mpc/h; 0 means inactive. At most one of `radial_cut` /
    /// `angular_cut` is active; radial wins if both are set.
    pub radial_cut: f64,
    /// theta-cut in degrees; 0 means inactive.
    pub angular_cut: f64,
    /// Whether direct pair-count edges were used; only named when a cut is
    /// active.
    pub use_direct_edges: bool,
    pub sculpt_attributes: Option<SculptAttrs>,
}

impl Default for FileName {
    fn default() -> Self {
        Self {
            base_dir: None,
            generation: Generation::Second,
            file_type: "power".to_string(),
            realization: Some(0),
            tracer: "ELG".to_string(),
            completeness: Completeness::Flag(true),
            region: Some("GCcomb".to_string()),
            redshift_range: None,
            redshift_point: None,
            weighting: None,
            random_count: None,
            line_of_sight: None,
            cell_size: None,
            mesh_count: None,
            box_size: None,
            radial_cut: 0.0,
            angular_cut: 0.0,
            use_direct_edges: true,
            sculpt_attributes: None,
        }
    }
}

impl FileName {
    /// Output kind implied by `file_type`.
    pub fn output_kind(&self) -> OutputKind {
        if self.file_type.contains("corr") {
            OutputKind::Correlation
        } else {
            OutputKind::Power
        }
    }

    /// Whether `file_type` asks for the sculpted-window variant.
    pub fn sculpt_requested(&self) -> bool {
        self.file_type.contains("sculpt")
    }
}
