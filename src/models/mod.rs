//! Domain model types for pickup/dropoff dispatch.
//!
//! Provides the core abstractions: loads with pickup and dropoff points,
//! driver schedules, complete solutions, and the scheme weights that drive
//! the randomized search.

mod load;
mod problem;
mod schedule;
mod solution;
mod weights;

pub use load::{Load, Point};
pub use problem::DispatchProblem;
pub use schedule::Schedule;
pub use solution::Solution;
pub use weights::{PlanEntry, SearchPlan, WeightSet};
