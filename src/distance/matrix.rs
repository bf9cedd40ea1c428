//! Dense travel-time matrix over loads.

use crate::models::Load;

/// A dense n×n travel-time matrix stored in row-major order.
///
/// Entry `(from, to)` is the time needed to do load `to` entirely right after
/// finishing load `from`: the empty drive from `from`'s dropoff to `to`'s
/// pickup plus `to`'s own pickup→dropoff leg. Index 0 is HQ, so `(from, 0)`
/// is the drive home and row 0 holds the cost of starting each load from HQ.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Load, Point};
/// use u_dispatch::distance::DistanceMatrix;
///
/// let loads = vec![
///     Load::hq(),
///     Load::new(1, Point::new(3.0, 4.0), Point::new(3.0, 8.0)),
/// ];
/// let dm = DistanceMatrix::from_loads(&loads);
/// // HQ -> pickup (5) + pickup -> dropoff (4)
/// assert!((dm.get(0, 1) - 9.0).abs() < 1e-10);
/// // dropoff (3,8) -> HQ
/// assert!((dm.get(1, 0) - 73f64.sqrt()).abs() < 1e-10);
/// assert_eq!(dm.size(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes the matrix from the coordinate list (index 0 = HQ).
    ///
    /// The diagonal stays zero.
    pub fn from_loads(loads: &[Load]) -> Self {
        let n = loads.len();
        let mut dm = Self::new(n);
        for (to, to_load) in loads.iter().enumerate() {
            let leg = to_load.leg_length();
            for (from, from_load) in loads.iter().enumerate() {
                if from == to {
                    continue;
                }
                let switch = from_load.dropoff().distance_to(&to_load.pickup());
                dm.set(from, to, switch + leg);
            }
        }
        dm
    }

    /// Returns the travel time from `from` to doing all of `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the travel time from `from` to `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// All travel times out of `from`, indexed by destination.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// Travel times from HQ to each load.
    pub fn hq_row(&self) -> &[f64] {
        self.row(0)
    }

    /// Number of locations in this matrix (HQ included).
    pub fn size(&self) -> usize {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;

    fn sample_loads() -> Vec<Load> {
        vec![
            Load::hq(),
            Load::new(1, Point::new(3.0, 4.0), Point::new(6.0, 8.0)),
            Load::new(2, Point::new(6.0, 8.0), Point::new(0.0, 0.0)),
        ]
    }

    #[test]
    fn test_from_loads() {
        let dm = DistanceMatrix::from_loads(&sample_loads());
        assert_eq!(dm.size(), 3);
        // HQ -> (3,4) = 5, leg = 5
        assert!((dm.get(0, 1) - 10.0).abs() < 1e-10);
        // HQ -> (6,8) = 10, leg = 10
        assert!((dm.get(0, 2) - 20.0).abs() < 1e-10);
        // 1's dropoff is 2's pickup, so only 2's leg remains
        assert!((dm.get(1, 2) - 10.0).abs() < 1e-10);
        // (0,0) -> (3,4) = 5, leg = 5
        assert!((dm.get(2, 1) - 10.0).abs() < 1e-10);
        // home from 1's dropoff (6,8)
        assert!((dm.get(1, 0) - 10.0).abs() < 1e-10);
        // 2 ends at HQ
        assert!(dm.get(2, 0).abs() < 1e-10);
    }

    #[test]
    fn test_diagonal_zero() {
        let dm = DistanceMatrix::from_loads(&sample_loads());
        for i in 0..dm.size() {
            assert_eq!(dm.get(i, i), 0.0);
        }
    }

    #[test]
    fn test_row_matches_get() {
        let dm = DistanceMatrix::from_loads(&sample_loads());
        for from in 0..dm.size() {
            let row = dm.row(from);
            assert_eq!(row.len(), dm.size());
            for (to, &d) in row.iter().enumerate() {
                assert_eq!(d, dm.get(from, to));
            }
        }
        assert_eq!(dm.hq_row(), dm.row(0));
    }

    #[test]
    fn test_set_get() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 1, 42.0);
        assert_eq!(dm.get(0, 1), 42.0);
        assert_eq!(dm.get(1, 0), 0.0);
    }
}
