/// Core evaluation logic and the runtime store.
///
/// Contains the `Interpreter`, which walks a checked program, executes its
/// outermost statement list and records every assignment.
pub mod core;

/// Binary operator evaluation.
///
/// Implements `+`, `-`, `*`, the integer `DIV` and the real `/`, including
/// promotion of mixed operands and overflow and division-by-zero checks.
pub mod binary;

/// Unary operator evaluation.
///
/// Implements prefix `+` and `-`.
pub mod unary;

pub use self::core::{EvalResult, Interpreter};
