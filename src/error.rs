use crate::domain::Generation;

/// Error type for attribute updates and default resolution.
///
/// Variants carry enough context for a caller to report the problem without
/// re-deriving it; `exit_code` maps each failure class to a process exit code
/// for the `mockpath` binary.
#[derive(Clone, PartialEq)]
pub enum NamerError {
    /// A key outside the closed attribute set was supplied to `update`.
    UnknownAttribute { name: String },
    /// No default preset exists for this generation/tracer combination.
    ///
    /// Only "ELG"-prefixed tracers have presets today; LRG/QSO/BGS are a
    /// planned extension, not a typo in the caller's input.
    UnsupportedTracer { generation: Generation, tracer: String },
    /// A known attribute was given a value of the wrong shape.
    InvalidValue { name: String, detail: String },
    /// Filesystem or JSON failure while loading an attribute file.
    Io { message: String },
}

impl NamerError {
    pub fn invalid(name: &str, detail: impl Into<String>) -> Self {
        Self::InvalidValue {
            name: name.to_string(),
            detail: detail.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            NamerError::UnknownAttribute { .. } | NamerError::InvalidValue { .. } => 2,
            NamerError::UnsupportedTracer { .. } => 3,
            NamerError::Io { .. } => 4,
        }
    }
}

impl std::fmt::Display for NamerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NamerError::UnknownAttribute { name } => {
                write!(
                    f,
                    "Unknown attribute '{name}'; supported attributes: {}",
                    crate::attrs::ATTRIBUTE_NAMES.join(", ")
                )
            }
            NamerError::UnsupportedTracer { generation, tracer } => {
                write!(
                    f,
                    "No default preset for tracer '{tracer}' with generation '{generation}' \
                     (only ELG-prefixed tracers are supported)"
                )
            }
            NamerError::InvalidValue { name, detail } => {
                write!(f, "Invalid value for attribute '{name}': {detail}")
            }
            NamerError::Io { message } => write!(f, "{message}"),
        }
    }
}

impl std::fmt::Debug for NamerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NamerError({self})")
    }
}

impl std::error::Error for NamerError {}
