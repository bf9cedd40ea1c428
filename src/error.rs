//! Error types.

use thiserror::Error;

/// Why a candidate solution is not a partition of the loads.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A load appears in more than one schedule (or twice in one).
    #[error("load {load_id} is assigned more than once")]
    DuplicateAssignment { load_id: usize },

    /// The number of distinct assigned loads differs from the load count.
    #[error("expected {expected} assigned loads, found {actual}")]
    CountMismatch { expected: usize, actual: usize },

    /// A load in range was never assigned to a driver.
    #[error("load {load_id} is not assigned to any driver")]
    MissingAssignment { load_id: usize },
}

/// Failure of a single planning run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The route builder produced an empty route while loads were left.
    #[error("route construction stalled with {remaining} loads unassigned")]
    RouteConstructionStalled { remaining: usize },
}

/// Why the one-load-per-driver baseline cannot seed the search.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BaselineError {
    /// The one-load-per-driver solution is not a partition.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// A single load's round trip from HQ exceeds the budget.
    #[error("load {load_id} needs {minutes:.2} minutes for a round trip, budget is {budget}")]
    BudgetExceeded {
        load_id: usize,
        minutes: f64,
        budget: f64,
    },
}

/// Errors surfaced by the dispatch API.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Load IDs are not exactly `1..=expected`.
    #[error("invalid load id {found}: ids must be unique and cover 1..={expected}")]
    InvalidLoadId { found: usize, expected: usize },

    /// No feasible solution exists, so there is nothing to improve on.
    #[error("baseline solution is infeasible")]
    InfeasibleBaseline(#[source] BaselineError),

    #[error("failed to build search thread pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
