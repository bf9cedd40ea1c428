//! Dispatch configuration.

use serde::{Deserialize, Serialize};

/// Default per-driver budget: 12 hours, in minutes.
pub const DEFAULT_BUDGET: f64 = 720.0;

/// Default fixed cost of deploying one driver.
pub const DEFAULT_OVERHEAD_PER_DRIVER: f64 = 500.0;

/// Worker threads for the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Threads {
    /// Run trials one after another on the calling thread.
    #[default]
    Single,
    /// One worker per available core.
    Auto,
    /// A fixed number of workers.
    Multi(usize),
}

impl Threads {
    /// Number of worker threads this setting resolves to (at least 1).
    pub fn number_of_threads(&self) -> usize {
        match self {
            Threads::Single => 1,
            Threads::Multi(num) => (*num).max(1),
            Threads::Auto => std::thread::available_parallelism().map_or(1, |n| n.get()),
        }
    }
}

impl From<usize> for Threads {
    /// `0` means [`Threads::Auto`], `1` means [`Threads::Single`].
    fn from(n: usize) -> Self {
        match n {
            0 => Threads::Auto,
            1 => Threads::Single,
            n => Threads::Multi(n),
        }
    }
}

/// Budget, objective and execution settings for a search.
///
/// # Examples
///
/// ```
/// use u_dispatch::config::{DispatchConfig, Threads};
///
/// let config = DispatchConfig::default()
///     .with_budget(600.0)
///     .with_seed(7)
///     .with_threads(Threads::Multi(4));
///
/// assert_eq!(config.budget(), 600.0);
/// assert_eq!(config.overhead_per_driver(), 500.0);
/// assert_eq!(config.seed(), Some(7));
/// assert_eq!(config.threads().number_of_threads(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchConfig {
    budget: f64,
    overhead_per_driver: f64,
    seed: Option<u64>,
    threads: Threads,
}

impl DispatchConfig {
    /// Sets the per-driver time budget (minutes).
    pub fn with_budget(mut self, budget: f64) -> Self {
        self.budget = budget;
        self
    }

    /// Sets the fixed cost charged per deployed driver.
    pub fn with_overhead_per_driver(mut self, overhead: f64) -> Self {
        self.overhead_per_driver = overhead;
        self
    }

    /// Seeds the search for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the worker thread count.
    pub fn with_threads(mut self, threads: Threads) -> Self {
        self.threads = threads;
        self
    }

    /// Per-driver time budget.
    pub fn budget(&self) -> f64 {
        self.budget
    }

    /// Fixed cost per driver.
    pub fn overhead_per_driver(&self) -> f64 {
        self.overhead_per_driver
    }

    /// Search seed, if fixed.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Worker threads.
    pub fn threads(&self) -> Threads {
        self.threads
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            budget: DEFAULT_BUDGET,
            overhead_per_driver: DEFAULT_OVERHEAD_PER_DRIVER,
            seed: None,
            threads: Threads::Single,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DispatchConfig::default();
        assert_eq!(config.budget(), 720.0);
        assert_eq!(config.overhead_per_driver(), 500.0);
        assert_eq!(config.seed(), None);
        assert_eq!(config.threads(), Threads::Single);
    }

    #[test]
    fn test_threads_from_count() {
        assert_eq!(Threads::from(0), Threads::Auto);
        assert_eq!(Threads::from(1), Threads::Single);
        assert_eq!(Threads::from(8), Threads::Multi(8));
        assert_eq!(Threads::Multi(0).number_of_threads(), 1);
        assert!(Threads::Auto.number_of_threads() >= 1);
    }
}
