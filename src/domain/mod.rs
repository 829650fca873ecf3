//! Domain types for the naming convention.
//!
//! This module defines:
//!
//! - the simulation/output enums (`Generation`, `OutputKind`, `Completeness`)
//! - the window-sculpting attribute bundle (`SculptAttrs`)
//! - the attribute record itself (`FileName`)

pub mod types;

pub use types::*;
