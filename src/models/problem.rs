//! Dispatch problem instance.

use crate::distance::DistanceMatrix;
use crate::error::DispatchError;

use super::Load;

/// A dispatch instance: the coordinate list (HQ at index 0) and the
/// travel-time matrix built from it.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{DispatchProblem, Load, Point};
///
/// let problem = DispatchProblem::new(vec![
///     Load::new(2, Point::new(0.0, 5.0), Point::new(0.0, 10.0)),
///     Load::new(1, Point::new(3.0, 4.0), Point::new(6.0, 8.0)),
/// ])
/// .unwrap();
///
/// assert_eq!(problem.num_loads(), 2);
/// assert_eq!(problem.num_coordinates(), 3);
/// assert!(problem.load(0).is_hq());
/// assert_eq!(problem.load(1).pickup(), Point::new(3.0, 4.0));
/// assert!((problem.distances().get(0, 1) - 10.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct DispatchProblem {
    loads: Vec<Load>,
    distances: DistanceMatrix,
}

impl DispatchProblem {
    /// Builds an instance from loads with IDs `1..=N` in any order.
    ///
    /// HQ is added at index 0. Fails if IDs are duplicated, zero, or leave
    /// gaps.
    pub fn new(mut loads: Vec<Load>) -> Result<Self, DispatchError> {
        let expected = loads.len();
        loads.sort_by_key(|l| l.id());
        for (i, load) in loads.iter().enumerate() {
            if load.id() != i + 1 {
                return Err(DispatchError::InvalidLoadId {
                    found: load.id(),
                    expected,
                });
            }
        }

        let mut coordinates = Vec::with_capacity(expected + 1);
        coordinates.push(Load::hq());
        coordinates.extend(loads);
        let distances = DistanceMatrix::from_loads(&coordinates);

        Ok(Self {
            loads: coordinates,
            distances,
        })
    }

    /// All coordinates, HQ first.
    pub fn loads(&self) -> &[Load] {
        &self.loads
    }

    /// The load with the given ID (0 = HQ).
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    pub fn load(&self, id: usize) -> &Load {
        &self.loads[id]
    }

    /// Number of loads (excluding HQ).
    pub fn num_loads(&self) -> usize {
        self.loads.len() - 1
    }

    /// Number of coordinates (loads plus HQ).
    pub fn num_coordinates(&self) -> usize {
        self.loads.len()
    }

    /// The travel-time matrix.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }
}
