//! Solution type.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Schedule;

/// A complete assignment of loads to drivers.
///
/// Each schedule is one driver. A solution is only meaningful once it has
/// been validated (see [`SolutionEvaluator`](crate::evaluation::SolutionEvaluator)).
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Schedule, Solution};
///
/// let mut sol = Solution::new();
/// sol.add_schedule(Schedule::from_ids(vec![1, 3]));
/// sol.add_schedule(Schedule::from_ids(vec![2]));
/// assert_eq!(sol.num_drivers(), 2);
/// assert_eq!(sol.to_string(), "[1,3]\n[2]\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Solution {
    schedules: Vec<Schedule>,
}

impl Solution {
    /// Creates an empty solution.
    pub fn new() -> Self {
        Self {
            schedules: Vec::new(),
        }
    }

    /// One driver per load: `[[1], [2], ..., [num_loads]]`.
    ///
    /// Always a valid partition. It is feasible whenever every single load's
    /// round trip fits the budget.
    ///
    /// ```
    /// use u_dispatch::models::Solution;
    ///
    /// let sol = Solution::one_load_per_driver(3);
    /// assert_eq!(sol.to_string(), "[1]\n[2]\n[3]\n");
    /// ```
    pub fn one_load_per_driver(num_loads: usize) -> Self {
        Self {
            schedules: (1..=num_loads)
                .map(|id| Schedule::from_ids(vec![id]))
                .collect(),
        }
    }

    /// Adds a driver's schedule.
    pub fn add_schedule(&mut self, schedule: Schedule) {
        self.schedules.push(schedule);
    }

    /// Returns the schedules in this solution.
    pub fn schedules(&self) -> &[Schedule] {
        &self.schedules
    }

    /// Number of drivers deployed.
    pub fn num_drivers(&self) -> usize {
        self.schedules.len()
    }

    /// Returns `true` if no driver is deployed.
    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }
}

impl From<Vec<Vec<usize>>> for Solution {
    fn from(schedules: Vec<Vec<usize>>) -> Self {
        Self {
            schedules: schedules.into_iter().map(Schedule::from_ids).collect(),
        }
    }
}

/// One schedule per line.
impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for schedule in &self.schedules {
            writeln!(f, "{schedule}")?;
        }
        Ok(())
    }
}
