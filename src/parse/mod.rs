//! Input parsing.

mod input;

pub use input::{parse_loads, ParseError};
