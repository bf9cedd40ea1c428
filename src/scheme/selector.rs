//! Weighted scheme selection.

use std::fmt;

use crate::models::WeightSet;
use crate::random::RandomSource;

/// Strategy governing one next-load decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// Selection could not resolve a category; the builder falls back.
    Unknown,
    /// Return to HQ now.
    Home,
    /// Nearest reachable load.
    GreedyNearest,
    /// Nearest load that is closer to us than to HQ.
    OnwayNearest,
    /// Inverse-distance weighted random load.
    WeightedNearest,
    /// Uniformly random load.
    Random,
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Scheme::Unknown => "unknown",
            Scheme::Home => "home",
            Scheme::GreedyNearest => "greedy_nearest",
            Scheme::OnwayNearest => "onway_nearest",
            Scheme::WeightedNearest => "weighted_nearest",
            Scheme::Random => "random",
        };
        f.write_str(name)
    }
}

const AWAY_SCHEMES: [Scheme; 5] = [
    Scheme::Home,
    Scheme::GreedyNearest,
    Scheme::OnwayNearest,
    Scheme::WeightedNearest,
    Scheme::Random,
];

const HQ_SCHEMES: [Scheme; 4] = [
    Scheme::GreedyNearest,
    Scheme::OnwayNearest,
    Scheme::WeightedNearest,
    Scheme::Random,
];

/// Samples a [`Scheme`] with probability proportional to its weight.
///
/// Keeps two cumulative goalpost tables: all five schemes for use away from
/// HQ, and the four non-Home schemes for use at HQ (going home from HQ is not
/// a decision). A draw `r` in `[1, total]` selects the first scheme whose
/// goalpost is `>= r`.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::WeightSet;
/// use u_dispatch::random::create_rng;
/// use u_dispatch::scheme::{Scheme, SchemeSelector};
///
/// let selector = SchemeSelector::new(WeightSet::greedy());
/// let mut rng = create_rng(42);
/// assert_eq!(selector.select_scheme(true, &mut rng), Scheme::GreedyNearest);
/// assert_eq!(selector.select_scheme(false, &mut rng), Scheme::GreedyNearest);
/// ```
#[derive(Debug, Clone)]
pub struct SchemeSelector {
    weights: WeightSet,
    away_goalposts: [u64; 5],
    hq_goalposts: [u64; 4],
}

impl SchemeSelector {
    /// Precomputes goalposts for the given weights.
    pub fn new(weights: WeightSet) -> Self {
        let away = [
            weights.home,
            weights.greedy_nearest,
            weights.onway_nearest,
            weights.weighted_nearest,
            weights.random,
        ];

        let mut away_goalposts = [0u64; 5];
        let mut sum = 0u64;
        for (post, &w) in away_goalposts.iter_mut().zip(away.iter()) {
            sum += w as u64;
            *post = sum;
        }

        let mut hq_goalposts = [0u64; 4];
        let mut sum = 0u64;
        for (post, &w) in hq_goalposts.iter_mut().zip(away[1..].iter()) {
            sum += w as u64;
            *post = sum;
        }

        Self {
            weights,
            away_goalposts,
            hq_goalposts,
        }
    }

    /// The weights this selector samples from.
    pub fn weights(&self) -> &WeightSet {
        &self.weights
    }

    /// Draws a scheme.
    ///
    /// With all applicable weights zero no draw is made: at HQ this yields
    /// [`Scheme::GreedyNearest`], elsewhere [`Scheme::Unknown`].
    pub fn select_scheme<R: RandomSource>(&self, at_hq: bool, rng: &mut R) -> Scheme {
        if at_hq {
            pick(&self.hq_goalposts, &HQ_SCHEMES, rng).unwrap_or(Scheme::GreedyNearest)
        } else {
            pick(&self.away_goalposts, &AWAY_SCHEMES, rng).unwrap_or(Scheme::Unknown)
        }
    }
}

fn pick<R: RandomSource>(goalposts: &[u64], schemes: &[Scheme], rng: &mut R) -> Option<Scheme> {
    let total = goalposts.last().copied().unwrap_or(0);
    if total == 0 {
        return None;
    }
    let draw = rng.uniform_int(1, total);
    goalposts
        .iter()
        .position(|&post| draw <= post)
        .map(|i| schemes[i])
}
