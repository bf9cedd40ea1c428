//! Constructive heuristics for building dispatch solutions.
//!
//! - [`RouteBuilder`] — One driver's route under a time budget, driven by
//!   randomly selected schemes, never ending past the last safe return point
//! - [`FleetPlanner`] — Repeats the route builder until every load is covered

mod fleet_planner;
mod route_builder;

pub use fleet_planner::FleetPlanner;
pub use route_builder::RouteBuilder;
