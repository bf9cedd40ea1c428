//! Multi-trial random-restart search.

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::config::DispatchConfig;
use crate::constructive::FleetPlanner;
use crate::error::{BaselineError, DispatchError};
use crate::evaluation::SolutionEvaluator;
use crate::models::{DispatchProblem, SearchPlan, Solution};
use crate::random::{create_rng, trial_seed, RandomSource};
use crate::scheme::SchemeSelector;

/// Result of a search.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Lowest-cost valid solution found.
    pub solution: Solution,
    /// Its cost.
    pub cost: f64,
    /// Cost of the one-load-per-driver baseline.
    pub baseline_cost: f64,
    /// Number of planner invocations.
    pub trials: usize,
    /// Trials that stalled or produced an invalid solution.
    pub discarded: usize,
    /// Times a trial replaced the best so far, in trial order.
    pub improvements: usize,
    /// Index of the trial that produced `solution`; `None` for the baseline.
    pub best_trial: Option<usize>,
}

#[derive(Debug)]
struct Candidate {
    trial: usize,
    solution: Solution,
    cost: f64,
}

/// Lower cost wins; on an exact tie the earlier trial wins.
fn better(a: Option<Candidate>, b: Option<Candidate>) -> Option<Candidate> {
    match (a, b) {
        (Some(a), Some(b)) => {
            if b.cost < a.cost || (b.cost == a.cost && b.trial < a.trial) {
                Some(b)
            } else {
                Some(a)
            }
        }
        (a, None) => a,
        (None, b) => b,
    }
}

/// Runs the planner under every configuration of a [`SearchPlan`] and keeps
/// the cheapest valid solution, starting from the one-load-per-driver
/// baseline.
///
/// # Examples
///
/// ```
/// use u_dispatch::config::DispatchConfig;
/// use u_dispatch::models::{DispatchProblem, Load, Point, SearchPlan, WeightSet};
/// use u_dispatch::random::create_rng;
/// use u_dispatch::search::SearchOrchestrator;
///
/// let problem = DispatchProblem::new(vec![
///     Load::new(1, Point::new(10.0, 0.0), Point::new(11.0, 0.0)),
///     Load::new(2, Point::new(20.0, 0.0), Point::new(21.0, 0.0)),
/// ])
/// .unwrap();
///
/// let config = DispatchConfig::default();
/// let search = SearchOrchestrator::new(&problem, &config);
/// let plan = SearchPlan::new().with_entry(WeightSet::greedy(), 1);
///
/// let outcome = search.run(&plan, &mut create_rng(42)).unwrap();
/// assert_eq!(outcome.solution.to_string(), "[1,2]\n");
/// assert!(outcome.cost < outcome.baseline_cost);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SearchOrchestrator<'a> {
    problem: &'a DispatchProblem,
    planner: FleetPlanner<'a>,
    evaluator: SolutionEvaluator<'a>,
}

impl<'a> SearchOrchestrator<'a> {
    /// Creates an orchestrator for `problem` under `config`'s budget and
    /// per-driver overhead.
    pub fn new(problem: &'a DispatchProblem, config: &DispatchConfig) -> Self {
        Self {
            problem,
            planner: FleetPlanner::new(problem, config.budget()),
            evaluator: SolutionEvaluator::new(
                problem,
                config.budget(),
                config.overhead_per_driver(),
            ),
        }
    }

    /// The evaluator used to score candidates.
    pub fn evaluator(&self) -> &SolutionEvaluator<'a> {
        &self.evaluator
    }

    /// One driver per load, with its cost.
    ///
    /// Fails if the baseline does not validate or some load cannot be served
    /// within the budget even on its own: then no feasible solution exists.
    pub fn baseline(&self) -> Result<(Solution, f64), DispatchError> {
        let solution = Solution::one_load_per_driver(self.problem.num_loads());
        self.evaluator
            .validate(&solution)
            .map_err(|e| DispatchError::InfeasibleBaseline(e.into()))?;

        let budget = self.evaluator.budget();
        let unservable = self
            .problem
            .loads()
            .iter()
            .filter(|load| !load.is_hq())
            .find(|load| load.round_trip() > budget);
        if let Some(load) = unservable {
            return Err(DispatchError::InfeasibleBaseline(
                BaselineError::BudgetExceeded {
                    load_id: load.id(),
                    minutes: load.round_trip(),
                    budget,
                },
            ));
        }

        let cost = self.evaluator.cost(&solution);
        Ok((solution, cost))
    }

    /// Plans, validates and costs one candidate. `None` if it is discarded.
    fn try_candidate<R: RandomSource>(
        &self,
        trial: usize,
        selector: &SchemeSelector,
        rng: &mut R,
    ) -> Option<(Solution, f64)> {
        let solution = match self.planner.plan(selector, rng) {
            Ok(solution) => solution,
            Err(e) => {
                warn!(trial, weights = %selector.weights(), "discarding trial: {e}");
                return None;
            }
        };
        match self.evaluator.evaluate(&solution) {
            Ok(cost) => {
                debug!(trial, weights = %selector.weights(), drivers = solution.num_drivers(), cost, "candidate");
                Some((solution, cost))
            }
            Err(e) => {
                warn!(trial, weights = %selector.weights(), "discarding trial: {e}");
                None
            }
        }
    }

    /// Runs every trial of `plan` in order on a single random stream.
    ///
    /// A candidate replaces the best only if strictly cheaper, so the first
    /// solution found wins exact ties.
    pub fn run<R: RandomSource>(
        &self,
        plan: &SearchPlan,
        rng: &mut R,
    ) -> Result<SearchOutcome, DispatchError> {
        let (mut best_solution, baseline_cost) = self.baseline()?;
        info!(drivers = best_solution.num_drivers(), cost = baseline_cost, "baseline");

        let mut best_cost = baseline_cost;
        let mut best_trial = None;
        let mut trial = 0;
        let mut discarded = 0;
        let mut improvements = 0;

        for entry in plan.entries() {
            let selector = SchemeSelector::new(entry.weights);
            for _ in 0..entry.repeat {
                match self.try_candidate(trial, &selector, rng) {
                    Some((solution, cost)) if cost < best_cost => {
                        info!(trial, weights = %entry.weights, drivers = solution.num_drivers(), cost, "new best");
                        best_solution = solution;
                        best_cost = cost;
                        best_trial = Some(trial);
                        improvements += 1;
                    }
                    Some(_) => {}
                    None => discarded += 1,
                }
                trial += 1;
            }
        }

        info!(trials = trial, discarded, improvements, cost = best_cost, "search finished");
        Ok(SearchOutcome {
            solution: best_solution,
            cost: best_cost,
            baseline_cost,
            trials: trial,
            discarded,
            improvements,
            best_trial,
        })
    }

    /// Runs the trials of `plan` on `threads` workers.
    ///
    /// Trial `i` draws from its own RNG seeded with `trial_seed(seed, i)`,
    /// so the outcome depends on `seed` alone, not on scheduling or the
    /// thread count. Workers reduce to the cheapest candidate (earliest trial
    /// on ties) and keep only each trial's cost alongside it. The baseline
    /// beats any trial of equal cost.
    pub fn run_parallel(
        &self,
        plan: &SearchPlan,
        seed: u64,
        threads: usize,
    ) -> Result<SearchOutcome, DispatchError> {
        let (baseline, baseline_cost) = self.baseline()?;
        info!(drivers = baseline.num_drivers(), cost = baseline_cost, threads, "baseline");

        let trials: Vec<_> = plan.trials().collect();

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads.max(1))
            .build()?;

        let (found, mut costs) = pool.install(|| {
            trials
                .par_iter()
                .enumerate()
                .map(|(trial, &weights)| {
                    let mut rng = create_rng(trial_seed(seed, trial as u64));
                    let selector = SchemeSelector::new(*weights);
                    let candidate = self
                        .try_candidate(trial, &selector, &mut rng)
                        .map(|(solution, cost)| Candidate {
                            trial,
                            solution,
                            cost,
                        });
                    let cost = candidate.as_ref().map(|c| c.cost);
                    (candidate, vec![(trial, cost)])
                })
                .reduce(
                    || (None, Vec::new()),
                    |(a, mut costs_a), (b, costs_b)| {
                        costs_a.extend(costs_b);
                        (better(a, b), costs_a)
                    },
                )
        });
        costs.sort_unstable_by_key(|&(trial, _)| trial);

        let mut running = baseline_cost;
        let mut discarded = 0;
        let mut improvements = 0;
        for (_, cost) in &costs {
            match *cost {
                Some(cost) if cost < running => {
                    running = cost;
                    improvements += 1;
                }
                Some(_) => {}
                None => discarded += 1,
            }
        }

        let (solution, cost, best_trial) = match found {
            Some(c) if c.cost < baseline_cost => {
                info!(trial = c.trial, drivers = c.solution.num_drivers(), cost = c.cost, "new best");
                (c.solution, c.cost, Some(c.trial))
            }
            _ => (baseline, baseline_cost, None),
        };

        info!(trials = trials.len(), discarded, improvements, cost, "search finished");
        Ok(SearchOutcome {
            solution,
            cost,
            baseline_cost,
            trials: trials.len(),
            discarded,
            improvements,
            best_trial,
        })
    }
}

/// Searches `problem` with `plan` as configured.
///
/// Uses the configured seed, or draws one from the thread RNG (logged so the
/// run can be repeated). One thread runs [`SearchOrchestrator::run`]; more
/// run [`SearchOrchestrator::run_parallel`]. The two modes consume randomness
/// differently and need not agree for the same seed.
pub fn solve(
    problem: &DispatchProblem,
    plan: &SearchPlan,
    config: &DispatchConfig,
) -> Result<SearchOutcome, DispatchError> {
    let seed = config.seed().unwrap_or_else(rand::random);
    let threads = config.threads().number_of_threads();
    info!(
        seed,
        threads,
        loads = problem.num_loads(),
        budget = config.budget(),
        trials = plan.total_trials(),
        "starting search"
    );

    let search = SearchOrchestrator::new(problem, config);
    if threads <= 1 {
        search.run(plan, &mut create_rng(seed))
    } else {
        search.run_parallel(plan, seed, threads)
    }
}
