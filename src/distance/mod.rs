//! Travel-time matrix.
//!
//! Provides the dense "finish one load, then do another" matrix that every
//! routing decision reads from.

mod matrix;

pub use matrix::DistanceMatrix;
