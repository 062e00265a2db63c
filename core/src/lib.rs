//! Core fuzzy-logic gate classification for the Rust radar QC platform.
//!
//! The modules mirror the legacy CMAC gate-identification pipeline while
//! providing typed category configuration, an explicit category ordering,
//! and well-defined processing stages.

pub mod config;
pub mod math;
pub mod prelude;
pub mod processing;
pub mod scan_interface;
pub mod telemetry;

pub use prelude::{ClassifyError, ClassifyResult, ScoreSet};
