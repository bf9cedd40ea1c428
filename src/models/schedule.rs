//! Schedule type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An ordered sequence of loads served by a single driver.
///
/// A schedule starts and ends at HQ (not stored in `load_ids`).
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Schedule;
///
/// let mut schedule = Schedule::new();
/// schedule.push(3);
/// schedule.push(1);
/// assert_eq!(schedule.len(), 2);
/// assert_eq!(schedule.load_ids(), &[3, 1]);
/// assert_eq!(schedule.to_string(), "[3,1]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    load_ids: Vec<usize>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self {
            load_ids: Vec::new(),
        }
    }

    /// Creates a schedule from load IDs in visitation order.
    pub fn from_ids(load_ids: Vec<usize>) -> Self {
        Self { load_ids }
    }

    /// Appends a load to the end of this schedule.
    pub fn push(&mut self, load_id: usize) {
        self.load_ids.push(load_id);
    }

    /// Returns the load IDs in visitation order.
    pub fn load_ids(&self) -> &[usize] {
        &self.load_ids
    }

    /// Returns the number of loads (excluding HQ).
    pub fn len(&self) -> usize {
        self.load_ids.len()
    }

    /// Returns `true` if this schedule serves no loads.
    pub fn is_empty(&self) -> bool {
        self.load_ids.is_empty()
    }
}

impl From<Vec<usize>> for Schedule {
    fn from(load_ids: Vec<usize>) -> Self {
        Self::from_ids(load_ids)
    }
}

/// Renders as `[id,id,...]` without spaces.
impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, id) in self.load_ids.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{id}")?;
        }
        write!(f, "]")
    }
}
