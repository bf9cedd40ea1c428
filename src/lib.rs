//! # u-dispatch
//!
//! Pickup/dropoff dispatch planning: assigns every load to a driver so that
//! each driver's tour from HQ and back stays within a time budget, while
//! minimizing fixed driver overhead plus total drive time.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Load, Schedule, Solution, WeightSet, DispatchProblem)
//! - [`distance`] — Load-to-load travel time matrix
//! - [`scheme`] — Weighted scheme selection and next-load policies
//! - [`constructive`] — Route building and fleet planning
//! - [`evaluation`] — Solution validation and cost evaluation
//! - [`search`] — Random-restart search over weight configurations
//! - [`parse`] — Load file parser
//! - [`config`] — Budget, overhead, seed and thread settings
//! - [`random`] — Random draw abstraction
//! - [`error`] — Error types

pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod parse;
pub mod random;
pub mod scheme;
pub mod search;
