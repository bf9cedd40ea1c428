//! Load file parser.
//!
//! # Format
//!
//! ```text
//! loadNumber pickup dropoff
//! 1 (-50.1,80.0) (90.1,12.2)
//! 2 (-24.5,-19.2) (98.5,1.8)
//! ```
//!
//! The first line is a header and is skipped. Blank lines are ignored.

use thiserror::Error;
use tracing::debug;

use crate::models::{Load, Point};

/// A problem in the load file, with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: expected `id (x,y) (x,y)`, found {found:?}")]
    Malformed { line: usize, found: String },

    #[error("line {line}: invalid load id {value:?}")]
    InvalidId { line: usize, value: String },

    #[error("line {line}: invalid coordinate {value:?}")]
    InvalidCoordinate { line: usize, value: String },

    #[error("line {line}: load id {id} appears more than once")]
    DuplicateId { line: usize, id: usize },

    #[error("load ids must be 1..={count}, found {id}")]
    IdOutOfRange { id: usize, count: usize },
}

/// Parses the load file contents.
///
/// Loads are returned sorted by ID. IDs must be exactly `1..=N`.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Point;
/// use u_dispatch::parse::parse_loads;
///
/// let text = "loadNumber pickup dropoff\n\
///             2 (0,5) (0,10)\n\
///             1 (-1.5,2) (3,4)\n";
/// let loads = parse_loads(text).unwrap();
/// assert_eq!(loads.len(), 2);
/// assert_eq!(loads[0].id(), 1);
/// assert_eq!(loads[0].pickup(), Point::new(-1.5, 2.0));
/// assert_eq!(loads[1].dropoff(), Point::new(0.0, 10.0));
/// ```
pub fn parse_loads(text: &str) -> Result<Vec<Load>, ParseError> {
    let mut loads: Vec<(usize, Load)> = Vec::new();

    for (index, raw) in text.lines().enumerate().skip(1) {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        loads.push((line, parse_line(line, trimmed)?));
    }

    loads.sort_by_key(|(_, l)| l.id());
    let count = loads.len();
    for (i, (line, load)) in loads.iter().enumerate() {
        if i > 0 && loads[i - 1].1.id() == load.id() {
            return Err(ParseError::DuplicateId {
                line: *line,
                id: load.id(),
            });
        }
    }
    for (i, (_, load)) in loads.iter().enumerate() {
        if load.id() != i + 1 {
            return Err(ParseError::IdOutOfRange {
                id: load.id(),
                count,
            });
        }
    }

    debug!(loads = count, "parsed load file");
    Ok(loads.into_iter().map(|(_, l)| l).collect())
}

fn parse_line(line: usize, text: &str) -> Result<Load, ParseError> {
    let malformed = || ParseError::Malformed {
        line,
        found: text.to_string(),
    };

    let mut fields = text.split_whitespace();
    let (Some(id), Some(pickup), Some(dropoff), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(malformed());
    };

    let id: usize = id.parse().map_err(|_| ParseError::InvalidId {
        line,
        value: id.to_string(),
    })?;
    let pickup = parse_point(line, pickup).ok_or_else(malformed)??;
    let dropoff = parse_point(line, dropoff).ok_or_else(malformed)??;

    Ok(Load::new(id, pickup, dropoff))
}

/// `None` if the field is not shaped like `(x,y)`.
fn parse_point(line: usize, field: &str) -> Option<Result<Point, ParseError>> {
    let inner = field.strip_prefix('(').unwrap_or(field);
    let inner = inner.strip_suffix(')').unwrap_or(inner);
    let (x, y) = inner.split_once(',')?;

    let coordinate = |value: &str| {
        value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ParseError::InvalidCoordinate {
                line,
                value: value.to_string(),
            })
    };

    Some(coordinate(x).and_then(|x| Ok(Point::new(x, coordinate(y)?))))
}
