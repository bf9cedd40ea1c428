//! Solution validation and cost evaluation.

mod evaluator;

pub use evaluator::{validate_solution, SolutionEvaluator};
