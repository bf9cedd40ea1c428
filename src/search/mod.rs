//! Random-restart search over planner configurations.
//!
//! - [`SearchOrchestrator`] — Baseline plus repeated planning, sequential or
//!   on a rayon pool with one seeded RNG per trial
//! - [`solve`] — Runs a search as described by a [`DispatchConfig`](crate::config::DispatchConfig)

mod orchestrator;

pub use orchestrator::{solve, SearchOrchestrator, SearchOutcome};
