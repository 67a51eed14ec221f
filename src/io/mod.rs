//! Input/output helpers.
//!
//! - Tracker-export ingest + validation (`ingest`)
//! - simulated-series CSV export (`export`)
//! - curve JSON write (`curve`)

pub mod curve;
pub mod export;
pub mod ingest;

pub use curve::*;
pub use export::*;
pub use ingest::*;
