//! Single-driver route construction.
//!
//! # Algorithm
//!
//! Starting at HQ, repeatedly pick a scheme, let its policy choose the next
//! load among those still reachable within the budget, and commit it to a
//! speculative route. Whenever the driver could still get home in time from
//! the current position, the speculative route is copied into the fallback.
//! The fallback is what gets returned, so a route never ends somewhere the
//! driver cannot return from.
//!
//! # Complexity
//!
//! O(n²) per route where n = number of candidate loads.

use std::collections::BTreeSet;

use tracing::trace;

use crate::distance::DistanceMatrix;
use crate::models::Schedule;
use crate::random::RandomSource;
use crate::scheme::{select_next_load, Scheme, SchemeSelector};

/// A route prefix together with the minutes it took, excluding the trip home.
#[derive(Debug, Clone, Default)]
struct RouteSnapshot {
    loads: Vec<usize>,
    minutes: f64,
}

impl RouteSnapshot {
    fn push(&mut self, load_id: usize, minutes: f64) {
        self.loads.push(load_id);
        self.minutes += minutes;
    }

    fn into_schedule(self) -> Schedule {
        Schedule::from_ids(self.loads)
    }
}

/// Builds one driver's schedule under a time budget.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use u_dispatch::constructive::RouteBuilder;
/// use u_dispatch::models::{DispatchProblem, Load, Point, WeightSet};
/// use u_dispatch::random::create_rng;
/// use u_dispatch::scheme::SchemeSelector;
///
/// let problem = DispatchProblem::new(vec![
///     Load::new(1, Point::new(10.0, 0.0), Point::new(11.0, 0.0)),
///     Load::new(2, Point::new(20.0, 0.0), Point::new(21.0, 0.0)),
/// ])
/// .unwrap();
///
/// let builder = RouteBuilder::new(problem.distances(), 720.0);
/// let selector = SchemeSelector::new(WeightSet::greedy());
/// let pool: BTreeSet<usize> = [1, 2].into_iter().collect();
///
/// let schedule = builder.build(&pool, &selector, &mut create_rng(1));
/// assert_eq!(schedule.load_ids(), &[1, 2]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RouteBuilder<'a> {
    distances: &'a DistanceMatrix,
    budget: f64,
}

impl<'a> RouteBuilder<'a> {
    /// Creates a builder over the given matrix and per-driver budget.
    pub fn new(distances: &'a DistanceMatrix, budget: f64) -> Self {
        Self { distances, budget }
    }

    /// Per-driver time budget.
    pub fn budget(&self) -> f64 {
        self.budget
    }

    /// Builds a route through some of the loads in `pool`.
    ///
    /// The returned schedule always gets back to HQ strictly within the
    /// budget. It is empty when `pool` is empty or when no load in it can be
    /// served and brought home in time.
    pub fn build<R: RandomSource>(
        &self,
        pool: &BTreeSet<usize>,
        selector: &SchemeSelector,
        rng: &mut R,
    ) -> Schedule {
        let mut pool = pool.clone();
        let hq = self.distances.hq_row();
        let varied_start = selector.weights().varied_start();

        let mut current = 0;
        let mut speculative = RouteSnapshot::default();
        let mut fallback = RouteSnapshot::default();
        let mut reachable = Vec::with_capacity(pool.len());

        while speculative.minutes < self.budget {
            let row = self.distances.row(current);

            if speculative.minutes + row[0] < self.budget {
                fallback = speculative.clone();
            }

            reachable.clear();
            reachable.extend(
                pool.iter()
                    .copied()
                    .filter(|&id| id != current && speculative.minutes + row[id] < self.budget),
            );
            if reachable.is_empty() {
                trace!(current, "no reachable loads left");
                return fallback.into_schedule();
            }

            let at_hq = current == 0;
            let scheme = if at_hq && varied_start {
                Scheme::Random
            } else {
                selector.select_scheme(at_hq, rng)
            };
            if scheme == Scheme::Unknown {
                trace!(current, "scheme selection failed");
                return fallback.into_schedule();
            }

            let next = select_next_load(scheme, &reachable, row, hq, rng);
            trace!(current, %scheme, next, minutes = speculative.minutes);
            if next == 0 {
                break;
            }

            speculative.push(next, row[next]);
            pool.remove(&next);
            current = next;
        }

        if speculative.minutes + self.distances.get(current, 0) < self.budget {
            fallback = speculative;
        }
        fallback.into_schedule()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DispatchProblem, Load, Point, WeightSet};
    use crate::random::create_rng;
    use crate::random::scripted::ScriptedSource;

    /// Loads strung along the x-axis, each 1 long, 10 apart.
    fn line_problem(n: usize) -> DispatchProblem {
        let loads = (1..=n)
            .map(|i| {
                let x = 10.0 * i as f64;
                Load::new(i, Point::new(x, 0.0), Point::new(x + 1.0, 0.0))
            })
            .collect();
        DispatchProblem::new(loads).expect("valid")
    }

    fn pool(ids: &[usize]) -> BTreeSet<usize> {
        ids.iter().copied().collect()
    }

    #[test]
    fn test_empty_pool() {
        let problem = line_problem(2);
        let builder = RouteBuilder::new(problem.distances(), 720.0);
        let selector = SchemeSelector::new(WeightSet::greedy());
        let schedule = builder.build(&BTreeSet::new(), &selector, &mut ScriptedSource::new());
        assert!(schedule.is_empty());
    }

    #[test]
    fn test_greedy_takes_all_in_order() {
        let problem = line_problem(4);
        let builder = RouteBuilder::new(problem.distances(), 720.0);
        let selector = SchemeSelector::new(WeightSet::greedy());
        let schedule = builder.build(&pool(&[1, 2, 3, 4]), &selector, &mut create_rng(0));
        assert_eq!(schedule.load_ids(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_budget_cuts_route() {
        // 0->1: 11, 1->2: 10, 2->3: 10; home from 2 is 21, from 3 is 31.
        // Budget 50: [1,2] needs 21 + 21 = 42, [1,2,3] needs 31 + 31 = 62.
        let problem = line_problem(3);
        let builder = RouteBuilder::new(problem.distances(), 50.0);
        let selector = SchemeSelector::new(WeightSet::greedy());
        let schedule = builder.build(&pool(&[1, 2, 3]), &selector, &mut create_rng(0));
        assert_eq!(schedule.load_ids(), &[1, 2]);
    }

    #[test]
    fn test_unreachable_single_load() {
        // Round trip 11 + 11 = 22 does not fit a budget of 20.
        let problem = line_problem(1);
        let builder = RouteBuilder::new(problem.distances(), 20.0);
        let selector = SchemeSelector::new(WeightSet::greedy());
        let schedule = builder.build(&pool(&[1]), &selector, &mut create_rng(0));
        assert!(schedule.is_empty());
    }

    #[test]
    fn test_budget_is_strict() {
        // Round trip is exactly 22.
        let problem = line_problem(1);
        let selector = SchemeSelector::new(WeightSet::greedy());
        let tight = RouteBuilder::new(problem.distances(), 22.0);
        assert!(tight
            .build(&pool(&[1]), &selector, &mut create_rng(0))
            .is_empty());
        let loose = RouteBuilder::new(problem.distances(), 22.5);
        assert_eq!(
            loose
                .build(&pool(&[1]), &selector, &mut create_rng(0))
                .load_ids(),
            &[1]
        );
    }

    #[test]
    fn test_home_scheme_ends_route() {
        // At HQ: draw 1 -> greedy (hq table [1,1,1,1]). Away: draw 1 -> home.
        let problem = line_problem(3);
        let builder = RouteBuilder::new(problem.distances(), 720.0);
        let selector = SchemeSelector::new(WeightSet::new(1, 1, 0, 0, 0));
        let mut rng = ScriptedSource::new().with_ints(&[1, 1]);
        let schedule = builder.build(&pool(&[1, 2, 3]), &selector, &mut rng);
        assert_eq!(schedule.load_ids(), &[1]);
        assert!(rng.is_exhausted());
    }

    #[test]
    fn test_unknown_scheme_returns_fallback() {
        // Only Home-weight zero and nothing else: away from HQ selection fails.
        let problem = line_problem(3);
        let builder = RouteBuilder::new(problem.distances(), 720.0);
        let selector = SchemeSelector::new(WeightSet::new(0, 0, 0, 0, 0));
        let schedule = builder.build(&pool(&[1, 2, 3]), &selector, &mut ScriptedSource::new());
        // At HQ all-zero weights default to greedy; then selection is Unknown.
        assert_eq!(schedule.load_ids(), &[1]);
    }

    #[test]
    fn test_varied_start_picks_first_load_uniformly() {
        let problem = line_problem(4);
        let builder = RouteBuilder::new(problem.distances(), 720.0);
        let selector = SchemeSelector::new(WeightSet::greedy().with_varied_start(true));
        // Random index 2 of [1,2,3,4] -> load 3, then greedy draws.
        let mut rng = ScriptedSource::new().with_ints(&[2, 1, 1, 1]);
        let schedule = builder.build(&pool(&[1, 2, 3, 4]), &selector, &mut rng);
        assert_eq!(schedule.load_ids()[0], 3);
        assert_eq!(schedule.len(), 4);
    }

    #[test]
    fn test_returned_routes_fit_budget() {
        let problem = line_problem(8);
        let budget = 120.0;
        let builder = RouteBuilder::new(problem.distances(), budget);
        let selector = SchemeSelector::new(WeightSet::new(10, 45, 45, 50, 50));
        let mut rng = create_rng(77);
        for _ in 0..200 {
            let schedule = builder.build(&pool(&[1, 2, 3, 4, 5, 6, 7, 8]), &selector, &mut rng);
            let mut prev = 0;
            let mut minutes = 0.0;
            for &id in schedule.load_ids() {
                minutes += problem.distances().get(prev, id);
                prev = id;
            }
            minutes += problem.distances().get(prev, 0);
            assert!(minutes < budget, "{schedule} takes {minutes}");
        }
    }
}
