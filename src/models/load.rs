//! Point and load types.

use serde::{Deserialize, Serialize};

/// A location in the plane.
///
/// Travel time between two points is their Euclidean distance (speed = 1).
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Point;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin, where HQ is located.
    pub fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A pickup/dropoff task (or HQ).
///
/// Load 0 is HQ: both of its points sit at the origin. Every other load is
/// served by driving to `pickup` and then to `dropoff`.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Load, Point};
///
/// let hq = Load::hq();
/// assert_eq!(hq.id(), 0);
/// assert!(hq.is_hq());
///
/// let load = Load::new(1, Point::new(0.0, 3.0), Point::new(4.0, 3.0));
/// assert_eq!(load.id(), 1);
/// assert!((load.leg_length() - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Load {
    id: usize,
    pickup: Point,
    dropoff: Point,
}

impl Load {
    /// Creates a new load.
    pub fn new(id: usize, pickup: Point, dropoff: Point) -> Self {
        Self {
            id,
            pickup,
            dropoff,
        }
    }

    /// Creates the HQ sentinel (id=0, both points at the origin).
    pub fn hq() -> Self {
        Self::new(0, Point::origin(), Point::origin())
    }

    /// Load ID (0 = HQ).
    pub fn id(&self) -> usize {
        self.id
    }

    /// Returns `true` for the HQ sentinel.
    pub fn is_hq(&self) -> bool {
        self.id == 0
    }

    /// Where the load is picked up.
    pub fn pickup(&self) -> Point {
        self.pickup
    }

    /// Where the load is dropped off.
    pub fn dropoff(&self) -> Point {
        self.dropoff
    }

    /// Travel time of the loaded pickup→dropoff leg.
    pub fn leg_length(&self) -> f64 {
        self.pickup.distance_to(&self.dropoff)
    }

    /// Round trip HQ → pickup → dropoff → HQ.
    ///
    /// A load whose round trip does not fit the budget can never be served.
    pub fn round_trip(&self) -> f64 {
        Point::origin().distance_to(&self.pickup)
            + self.leg_length()
            + self.dropoff.distance_to(&Point::origin())
    }
}
