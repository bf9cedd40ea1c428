//! Multi-driver planning by repeated route construction.

use std::collections::BTreeSet;

use tracing::debug;

use crate::error::PlanError;
use crate::models::{DispatchProblem, Solution};
use crate::random::RandomSource;
use crate::scheme::SchemeSelector;

use super::RouteBuilder;

/// Covers every load by building one route after another, each over the
/// loads the previous routes left unassigned.
///
/// # Examples
///
/// ```
/// use u_dispatch::constructive::FleetPlanner;
/// use u_dispatch::models::{DispatchProblem, Load, Point, WeightSet};
/// use u_dispatch::random::create_rng;
/// use u_dispatch::scheme::SchemeSelector;
///
/// let problem = DispatchProblem::new(vec![
///     Load::new(1, Point::new(100.0, 0.0), Point::new(101.0, 0.0)),
///     Load::new(2, Point::new(-100.0, 0.0), Point::new(-101.0, 0.0)),
/// ])
/// .unwrap();
///
/// // Each round trip is ~202; two of them never fit into 300.
/// let planner = FleetPlanner::new(&problem, 300.0);
/// let selector = SchemeSelector::new(WeightSet::greedy());
/// let solution = planner.plan(&selector, &mut create_rng(1)).unwrap();
/// assert_eq!(solution.num_drivers(), 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FleetPlanner<'a> {
    problem: &'a DispatchProblem,
    builder: RouteBuilder<'a>,
}

impl<'a> FleetPlanner<'a> {
    /// Creates a planner with the given per-driver budget.
    pub fn new(problem: &'a DispatchProblem, budget: f64) -> Self {
        Self {
            problem,
            builder: RouteBuilder::new(problem.distances(), budget),
        }
    }

    /// Plans a full solution.
    ///
    /// Fails with [`PlanError::RouteConstructionStalled`] when a route comes
    /// back empty while loads remain; no partial assignment is returned.
    pub fn plan<R: RandomSource>(
        &self,
        selector: &SchemeSelector,
        rng: &mut R,
    ) -> Result<Solution, PlanError> {
        let mut pool: BTreeSet<usize> = (1..=self.problem.num_loads()).collect();
        let mut solution = Solution::new();

        while !pool.is_empty() {
            let schedule = self.builder.build(&pool, selector, rng);
            if schedule.is_empty() {
                return Err(PlanError::RouteConstructionStalled {
                    remaining: pool.len(),
                });
            }
            for id in schedule.load_ids() {
                pool.remove(id);
            }
            debug!(driver = solution.num_drivers(), %schedule, remaining = pool.len(), "planned route");
            solution.add_schedule(schedule);
        }

        Ok(solution)
    }
}
