//! Next-load selection policies.
//!
//! Every policy maps the reachable loads to one of them, or to `0` meaning
//! "return to HQ now". `current` and `hq` are matrix rows: the travel time to
//! each load from the current position and from HQ respectively. Reachable
//! loads arrive in ascending ID order, which makes tie-breaking deterministic.

use crate::random::RandomSource;

use super::Scheme;

/// Dispatches to the policy for `scheme`.
///
/// [`Scheme::Unknown`] sends the driver home.
///
/// # Examples
///
/// ```
/// use u_dispatch::random::create_rng;
/// use u_dispatch::scheme::{select_next_load, Scheme};
///
/// let current = [0.0, 4.0, 2.0, 9.0];
/// let hq = [0.0, 1.0, 8.0, 1.0];
/// let mut rng = create_rng(0);
///
/// assert_eq!(select_next_load(Scheme::Home, &[1, 2, 3], &current, &hq, &mut rng), 0);
/// assert_eq!(select_next_load(Scheme::GreedyNearest, &[1, 2, 3], &current, &hq, &mut rng), 2);
/// assert_eq!(select_next_load(Scheme::OnwayNearest, &[1, 3], &current, &hq, &mut rng), 1);
/// ```
pub fn select_next_load<R: RandomSource>(
    scheme: Scheme,
    reachable: &[usize],
    current: &[f64],
    hq: &[f64],
    rng: &mut R,
) -> usize {
    match scheme {
        Scheme::Home => select_home(),
        Scheme::GreedyNearest => select_nearest(reachable, current),
        Scheme::OnwayNearest => select_onway_nearest(reachable, current, hq),
        Scheme::WeightedNearest => select_weighted_nearest(reachable, current, rng),
        Scheme::Random => select_random(reachable, rng),
        Scheme::Unknown => 0,
    }
}

/// Always go home.
pub fn select_home() -> usize {
    0
}

/// Nearest reachable load; the first one wins ties.
pub fn select_nearest(reachable: &[usize], current: &[f64]) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for &id in reachable {
        if current[id] < best_distance {
            best = id;
            best_distance = current[id];
        }
    }
    best
}

/// Nearest load that is closer to us than to HQ.
///
/// Serving such a load is "on the way"; anything else would be cheaper for a
/// fresh driver. Falls back to [`select_nearest`] when none qualifies.
pub fn select_onway_nearest(reachable: &[usize], current: &[f64], hq: &[f64]) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for &id in reachable {
        if current[id] < hq[id] && current[id] < best_distance {
            best = id;
            best_distance = current[id];
        }
    }
    if best == 0 {
        return select_nearest(reachable, current);
    }
    best
}

/// Inverse-distance weighted sampling.
///
/// With distances `d_i` summing to `S`, load `i` gets weight `S - d_i`. The
/// weights sum to `S * (k - 1)` for `k` candidates, so a real drawn in
/// `[0, S * (k - 1))` is located among the cumulative weights. If every
/// candidate sits at distance zero the pick is uniform.
pub fn select_weighted_nearest<R: RandomSource>(
    reachable: &[usize],
    current: &[f64],
    rng: &mut R,
) -> usize {
    match reachable {
        [] => return 0,
        [only] => return *only,
        _ => {}
    }

    let sum: f64 = reachable.iter().map(|&id| current[id]).sum();
    let weights_sum = sum * (reachable.len() - 1) as f64;
    if weights_sum <= 0.0 || weights_sum.is_nan() {
        return select_random(reachable, rng);
    }

    let choice = rng.uniform_real(0.0, weights_sum);
    let mut goalpost = 0.0;
    for &id in reachable {
        goalpost += sum - current[id];
        if choice < goalpost {
            return id;
        }
    }
    // Rounding can leave the last goalpost a hair below `weights_sum`.
    reachable[reachable.len() - 1]
}

/// Uniformly random reachable load.
pub fn select_random<R: RandomSource>(reachable: &[usize], rng: &mut R) -> usize {
    match reachable {
        [] => 0,
        [only] => *only,
        _ => {
            let index = rng.uniform_int(0, reachable.len() as u64 - 1) as usize;
            reachable[index]
        }
    }
}
