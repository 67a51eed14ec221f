//! Polynomial least-squares fitting of the track shape.

pub mod fitter;

pub use fitter::*;
