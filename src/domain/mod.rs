//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - raw input observations (`TrackSample`)
//! - evaluated track geometry (`TrackPoint`)
//! - simulation configuration and per-step output (`SimConfig`, `SimStep`)
//! - the portable curve-file schema (`CurveFile`)

pub mod types;

pub use types::*;
