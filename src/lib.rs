//! `mock-paths` library crate.
//!
//! Canonical filesystem paths for DESI Y1 mock clustering outputs, built from
//! a closed set of descriptive attributes. The binary (`mockpath`) is a thin
//! wrapper around this library so that:
//!
//! - the naming convention is testable without spawning processes
//! - the record type is reusable from analysis pipelines and scripts

pub mod app;
pub mod attrs;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod presets;
pub mod render;
