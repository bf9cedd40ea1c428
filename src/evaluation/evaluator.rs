//! Solution validation and cost.

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::models::{DispatchProblem, Load, Point, Schedule, Solution};

/// Checks that `solution` assigns every load in `1..num_coordinates` exactly
/// once.
///
/// Duplicates are reported first, then a count mismatch, then the first
/// missing load.
///
/// # Examples
///
/// ```
/// use u_dispatch::error::ValidationError;
/// use u_dispatch::evaluation::validate_solution;
/// use u_dispatch::models::Solution;
///
/// let ok = Solution::from(vec![vec![2, 1], vec![3]]);
/// assert!(validate_solution(&ok, 4).is_ok());
///
/// let dup = Solution::from(vec![vec![1, 2], vec![2, 3]]);
/// assert_eq!(
///     validate_solution(&dup, 4),
///     Err(ValidationError::DuplicateAssignment { load_id: 2 })
/// );
/// ```
pub fn validate_solution(
    solution: &Solution,
    num_coordinates: usize,
) -> Result<(), ValidationError> {
    let num_loads = num_coordinates.saturating_sub(1);

    let mut seen = HashSet::with_capacity(num_loads);
    for schedule in solution.schedules() {
        for &load_id in schedule.load_ids() {
            if !seen.insert(load_id) {
                return Err(ValidationError::DuplicateAssignment { load_id });
            }
        }
    }

    if seen.len() != num_loads {
        return Err(ValidationError::CountMismatch {
            expected: num_loads,
            actual: seen.len(),
        });
    }

    if let Some(load_id) = (1..=num_loads).find(|id| !seen.contains(id)) {
        return Err(ValidationError::MissingAssignment { load_id });
    }

    Ok(())
}

/// Scores solutions: a fixed overhead per driver plus total driving time,
/// or infinity if any driver overruns the budget.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{DispatchProblem, Load, Point, Solution};
/// use u_dispatch::evaluation::SolutionEvaluator;
///
/// let problem = DispatchProblem::new(vec![
///     Load::new(1, Point::new(3.0, 4.0), Point::new(6.0, 8.0)),
/// ])
/// .unwrap();
/// let evaluator = SolutionEvaluator::new(&problem, 720.0, 500.0);
///
/// let sol = Solution::from(vec![vec![1]]);
/// // 5 (to pickup) + 5 (leg) + 10 (home)
/// assert!((evaluator.cost(&sol) - 520.0).abs() < 1e-10);
///
/// let strict = SolutionEvaluator::new(&problem, 15.0, 500.0);
/// assert_eq!(strict.cost(&sol), f64::INFINITY);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SolutionEvaluator<'a> {
    loads: &'a [Load],
    budget: f64,
    overhead_per_driver: f64,
}

impl<'a> SolutionEvaluator<'a> {
    /// Creates an evaluator for the given instance.
    pub fn new(problem: &'a DispatchProblem, budget: f64, overhead_per_driver: f64) -> Self {
        Self {
            loads: problem.loads(),
            budget,
            overhead_per_driver,
        }
    }

    /// Per-driver time budget.
    pub fn budget(&self) -> f64 {
        self.budget
    }

    /// Fixed cost of deploying one driver.
    pub fn overhead_per_driver(&self) -> f64 {
        self.overhead_per_driver
    }

    /// Validates `solution` against this instance's load count.
    pub fn validate(&self, solution: &Solution) -> Result<(), ValidationError> {
        validate_solution(solution, self.loads.len())
    }

    /// Driving time of one schedule: HQ → each pickup → its dropoff → … → HQ.
    ///
    /// # Panics
    ///
    /// Panics if the schedule names a load that does not exist.
    pub fn schedule_travel_time(&self, schedule: &Schedule) -> f64 {
        let mut minutes = 0.0;
        let mut position = Point::origin();
        for &id in schedule.load_ids() {
            let load = &self.loads[id];
            minutes += position.distance_to(&load.pickup());
            minutes += load.leg_length();
            position = load.dropoff();
        }
        minutes + position.distance_to(&Point::origin())
    }

    /// Total cost of `solution`.
    ///
    /// `overhead_per_driver * drivers + total driving time`, or
    /// `f64::INFINITY` as soon as one schedule exceeds the budget. Does not
    /// check the partition; see [`validate`](Self::validate).
    pub fn cost(&self, solution: &Solution) -> f64 {
        let mut driven = 0.0;
        for schedule in solution.schedules() {
            let minutes = self.schedule_travel_time(schedule);
            if minutes > self.budget {
                return f64::INFINITY;
            }
            driven += minutes;
        }
        self.overhead_per_driver * solution.num_drivers() as f64 + driven
    }

    /// Validates and then costs `solution`.
    pub fn evaluate(&self, solution: &Solution) -> Result<f64, ValidationError> {
        self.validate(solution)?;
        Ok(self.cost(solution))
    }
}
