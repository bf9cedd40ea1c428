//! Scheme weights and search plans.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Relative sampling weights for the five next-load schemes.
///
/// Weights are relative: `(0, 1, 0, 0, 0)` and `(0, 7, 0, 0, 0)` both mean
/// "always greedy nearest".
///
/// # Examples
///
/// ```
/// use u_dispatch::models::WeightSet;
///
/// let w = WeightSet::new(10, 90, 100, 0, 0);
/// assert!(!w.varied_start());
/// assert_eq!(w.to_string(), "10,90,100,0,0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightSet {
    pub home: u32,
    pub greedy_nearest: u32,
    pub onway_nearest: u32,
    pub weighted_nearest: u32,
    pub random: u32,
    /// Draw the first load of every route uniformly instead of by weight.
    #[serde(default)]
    pub varied_start: bool,
}

impl WeightSet {
    /// Creates a weight set in (home, greedy, onway, weighted, random) order.
    pub fn new(
        home: u32,
        greedy_nearest: u32,
        onway_nearest: u32,
        weighted_nearest: u32,
        random: u32,
    ) -> Self {
        Self {
            home,
            greedy_nearest,
            onway_nearest,
            weighted_nearest,
            random,
            varied_start: false,
        }
    }

    /// Always pick the nearest reachable load.
    pub fn greedy() -> Self {
        Self::new(0, 1, 0, 0, 0)
    }

    /// Sets the varied-start flag.
    pub fn with_varied_start(mut self, varied_start: bool) -> Self {
        self.varied_start = varied_start;
        self
    }

    /// Returns the varied-start flag.
    pub fn varied_start(&self) -> bool {
        self.varied_start
    }
}

impl fmt::Display for WeightSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{}",
            self.home, self.greedy_nearest, self.onway_nearest, self.weighted_nearest, self.random
        )?;
        if self.varied_start {
            write!(f, " (varied start)")?;
        }
        Ok(())
    }
}

/// One search configuration: a weight set tried `repeat` times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanEntry {
    pub weights: WeightSet,
    pub repeat: usize,
}

impl PlanEntry {
    /// Creates a new plan entry.
    pub fn new(weights: WeightSet, repeat: usize) -> Self {
        Self { weights, repeat }
    }
}

/// Ordered list of weight sets the search tries.
///
/// Order matters only for tie-breaking (first found wins) and for
/// reproducibility under a fixed seed.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{SearchPlan, WeightSet};
///
/// let plan = SearchPlan::new()
///     .with_entry(WeightSet::greedy(), 1)
///     .with_entry(WeightSet::new(10, 0, 0, 0, 190), 20);
/// assert_eq!(plan.entries().len(), 2);
/// assert_eq!(plan.total_trials(), 21);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchPlan {
    entries: Vec<PlanEntry>,
}

impl SearchPlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a weight set to try `repeat` times.
    pub fn with_entry(mut self, weights: WeightSet, repeat: usize) -> Self {
        self.entries.push(PlanEntry::new(weights, repeat));
        self
    }

    /// Returns the entries in order.
    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    /// Total number of planner invocations this plan requests.
    pub fn total_trials(&self) -> usize {
        self.entries.iter().map(|e| e.repeat).sum()
    }

    /// Expands the plan into one weight set per trial, in execution order.
    pub fn trials(&self) -> impl Iterator<Item = &WeightSet> + '_ {
        self.entries
            .iter()
            .flat_map(|e| std::iter::repeat(&e.weights).take(e.repeat))
    }
}

impl Default for SearchPlan {
    /// Deterministic greedy runs first, then randomized mixtures.
    fn default() -> Self {
        Self::new()
            .with_entry(WeightSet::new(0, 1, 0, 0, 0), 1)
            .with_entry(WeightSet::new(0, 0, 1, 0, 0), 1)
            .with_entry(WeightSet::new(0, 0, 0, 1, 0), 20)
            .with_entry(WeightSet::new(0, 0, 0, 0, 1), 20)
            .with_entry(WeightSet::new(10, 90, 100, 0, 0), 20)
            .with_entry(WeightSet::new(10, 0, 0, 190, 0), 20)
            .with_entry(WeightSet::new(10, 0, 0, 0, 190), 20)
            .with_entry(WeightSet::new(10, 45, 45, 100, 0), 20)
            .with_entry(WeightSet::new(10, 45, 45, 0, 100), 20)
            .with_entry(WeightSet::new(100, 16, 16, 18, 50), 20)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_display() {
        let w = WeightSet::greedy().with_varied_start(true);
        assert_eq!(w.to_string(), "0,1,0,0,0 (varied start)");
    }

    #[test]
    fn test_default_plan() {
        let plan = SearchPlan::default();
        assert_eq!(plan.entries().len(), 10);
        assert_eq!(plan.entries()[0].weights, WeightSet::greedy());
        assert_eq!(plan.total_trials(), 2 + 8 * 20);
        assert_eq!(plan.trials().count(), plan.total_trials());
    }

    #[test]
    fn test_trials_order() {
        let a = WeightSet::new(0, 1, 0, 0, 0);
        let b = WeightSet::new(0, 0, 1, 0, 0);
        let plan = SearchPlan::new().with_entry(a, 2).with_entry(b, 1);
        let trials: Vec<WeightSet> = plan.trials().copied().collect();
        assert_eq!(trials, vec![a, a, b]);
    }

    #[test]
    fn test_plan_json() {
        let json = r#"[
            {"weights": {"home": 0, "greedy_nearest": 1, "onway_nearest": 0,
                         "weighted_nearest": 0, "random": 0}, "repeat": 1},
            {"weights": {"home": 10, "greedy_nearest": 0, "onway_nearest": 0,
                         "weighted_nearest": 0, "random": 190, "varied_start": true},
             "repeat": 5}
        ]"#;
        let plan: SearchPlan = serde_json::from_str(json).expect("valid plan");
        assert_eq!(plan.entries().len(), 2);
        assert!(!plan.entries()[0].weights.varied_start());
        assert!(plan.entries()[1].weights.varied_start());
        assert_eq!(plan.total_trials(), 6);

        let back = serde_json::to_string(&plan).expect("serializable");
        let again: SearchPlan = serde_json::from_str(&back).expect("round trip");
        assert_eq!(plan, again);
    }
}
