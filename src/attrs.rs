//! Closed-set attribute updates.
//!
//! A [`FileName`] can be patched from a string-keyed map of JSON values (the
//! shape produced by `--set` flags, `--attrs` files, or library callers).
//! The attribute set is closed: a key outside [`ATTRIBUTE_NAMES`] fails the
//! whole call, and so does a known key with a wrong-shaped value. Updates are
//! atomic — the record is untouched unless every key parses.

use serde_json::Value;

use crate::domain::{Completeness, FileName, Generation, SculptAttrs};
use crate::error::NamerError;

/// A string-keyed attribute patch.
pub type AttrMap = serde_json::Map<String, Value>;

/// The closed attribute set, in the fixed positional order.
pub const ATTRIBUTE_NAMES: [&str; 19] = [
    "base_dir",
    "generation",
    "file_type",
    "realization",
    "tracer",
    "completeness",
    "region",
    "redshift_range",
    "redshift_point",
    "weighting",
    "random_count",
    "line_of_sight",
    "cell_size",
    "mesh_count",
    "box_size",
    "radial_cut",
    "angular_cut",
    "use_direct_edges",
    "sculpt_attributes",
];

impl FileName {
    /// Build a record from an attribute map, starting from defaults.
    pub fn from_attrs(attrs: &AttrMap) -> Result<Self, NamerError> {
        let mut record = Self::default();
        record.update(attrs)?;
        Ok(record)
    }

    /// Build a record from positional values (in [`ATTRIBUTE_NAMES`] order),
    /// overlaid with explicit keyword overrides. Overrides win.
    pub fn from_positional(values: &[Value], overrides: &AttrMap) -> Result<Self, NamerError> {
        let mut merged = AttrMap::new();
        for (name, value) in ATTRIBUTE_NAMES.iter().zip(values) {
            merged.insert(name.to_string(), value.clone());
        }
        for (name, value) in overrides {
            merged.insert(name.clone(), value.clone());
        }
        Self::from_attrs(&merged)
    }

    /// Merge an attribute patch into the record.
    ///
    /// Atomic: all keys are validated and parsed against a scratch copy
    /// before anything is committed, so a failed call never leaves a
    /// half-applied record behind. Parsed values are owned by the record;
    /// the caller's map can be mutated or dropped afterwards.
    pub fn update(&mut self, attrs: &AttrMap) -> Result<(), NamerError> {
        let mut next = self.clone();
        for (name, value) in attrs {
            next.set_attr(name, value)?;
        }
        *self = next;
        Ok(())
    }

    fn set_attr(&mut self, name: &str, value: &Value) -> Result<(), NamerError> {
        match name {
            "base_dir" => {
                // An empty string means "derive at render time", same as null.
                self.base_dir = as_opt_string(name, value)?
                    .filter(|s| !s.is_empty())
                    .map(Into::into);
            }
            "generation" => {
                let s = as_string(name, value)?;
                self.generation = Generation::parse(&s).ok_or_else(|| {
                    NamerError::invalid(name, format!("expected first/second/cubic, got '{s}'"))
                })?;
            }
            "file_type" => self.file_type = as_string(name, value)?,
            "realization" => self.realization = as_opt_u32(name, value)?,
            "tracer" => self.tracer = as_string(name, value)?,
            "completeness" => {
                self.completeness = match value {
                    Value::Bool(b) => Completeness::Flag(*b),
                    Value::String(s) => Completeness::Tag(s.clone()),
                    other => {
                        return Err(NamerError::invalid(
                            name,
                            format!("expected bool or string, got {other}"),
                        ));
                    }
                };
            }
            "region" => self.region = as_opt_string(name, value)?,
            "redshift_range" => self.redshift_range = as_opt_range(name, value)?,
            "redshift_point" => self.redshift_point = as_opt_f64(name, value)?,
            "weighting" => self.weighting = as_opt_string(name, value)?,
            "random_count" => self.random_count = as_opt_u32(name, value)?,
            "line_of_sight" => self.line_of_sight = as_opt_string(name, value)?,
            "cell_size" => self.cell_size = as_opt_u32(name, value)?,
            "mesh_count" => self.mesh_count = as_opt_u32(name, value)?,
            "box_size" => self.box_size = as_opt_u32(name, value)?,
            "radial_cut" => self.radial_cut = as_f64(name, value)?,
            "angular_cut" => self.angular_cut = as_f64(name, value)?,
            "use_direct_edges" => self.use_direct_edges = as_bool(name, value)?,
            "sculpt_attributes" => {
                self.sculpt_attributes = match value {
                    Value::Null => None,
                    other => Some(
                        serde_json::from_value::<SculptAttrs>(other.clone())
                            .map_err(|e| NamerError::invalid(name, e.to_string()))?,
                    ),
                };
            }
            _ => {
                return Err(NamerError::UnknownAttribute {
                    name: name.to_string(),
                });
            }
        }
        Ok(())
    }
}

fn as_string(name: &str, value: &Value) -> Result<String, NamerError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(NamerError::invalid(
            name,
            format!("expected string, got {other}"),
        )),
    }
}

fn as_opt_string(name: &str, value: &Value) -> Result<Option<String>, NamerError> {
    match value {
        Value::Null => Ok(None),
        other => as_string(name, other).map(Some),
    }
}

fn as_bool(name: &str, value: &Value) -> Result<bool, NamerError> {
    value
        .as_bool()
        .ok_or_else(|| NamerError::invalid(name, format!("expected bool, got {value}")))
}

fn as_f64(name: &str, value: &Value) -> Result<f64, NamerError> {
    value
        .as_f64()
        .ok_or_else(|| NamerError::invalid(name, format!("expected number, got {value}")))
}

fn as_opt_f64(name: &str, value: &Value) -> Result<Option<f64>, NamerError> {
    match value {
        Value::Null => Ok(None),
        other => as_f64(name, other).map(Some),
    }
}

fn as_opt_u32(name: &str, value: &Value) -> Result<Option<u32>, NamerError> {
    match value {
        Value::Null => Ok(None),
        other => {
            let n = other.as_u64().and_then(|n| u32::try_from(n).ok());
            n.map(Some).ok_or_else(|| {
                NamerError::invalid(name, format!("expected non-negative integer, got {other}"))
            })
        }
    }
}

fn as_opt_range(name: &str, value: &Value) -> Result<Option<(f64, f64)>, NamerError> {
    match value {
        Value::Null => Ok(None),
        Value::Array(items) if items.len() == 2 => {
            let lo = as_f64(name, &items[0])?;
            let hi = as_f64(name, &items[1])?;
            Ok(Some((lo, hi)))
        }
        other => Err(NamerError::invalid(
            name,
            format!("expected [lo, hi] pair, got {other}"),
        )),
    }
}
