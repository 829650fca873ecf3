//! Read attribute maps from disk.
//!
//! An attribute file is a single JSON object of attribute→value, the same
//! shape `update` accepts. Key validation happens in `update`, not here.

use std::fs::File;
use std::path::Path;

use serde_json::Value;

use crate::attrs::AttrMap;
use crate::error::NamerError;

/// Read a JSON attribute map.
pub fn read_attrs_json(path: &Path) -> Result<AttrMap, NamerError> {
    let file = File::open(path).map_err(|e| NamerError::Io {
        message: format!("Failed to open attribute file '{}': {e}", path.display()),
    })?;
    let value: Value = serde_json::from_reader(file).map_err(|e| NamerError::Io {
        message: format!("Invalid attribute JSON in '{}': {e}", path.display()),
    })?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(NamerError::Io {
            message: format!(
                "Attribute file '{}' must hold a JSON object, got {other}",
                path.display()
            ),
        }),
    }
}
