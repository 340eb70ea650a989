use crate::util::position::Position;

/// Represents all errors that can occur while executing a program.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuntimeError {
    /// The right operand of `DIV` or `/` evaluated to zero.
    #[error("Error on {position}: Division by zero.")]
    DivisionByZero {
        /// Position of the division operator.
        position: Position,
    },
    /// Integer arithmetic overflowed 64 bits.
    #[error("Error on {position}: Integer overflow while trying to compute result.")]
    Overflow {
        /// Position of the operator.
        position: Position,
    },
    /// A declared variable was read before any assignment to it executed.
    #[error("Error on {position}: Variable '{name}' is used before it is assigned.")]
    UnassignedVariable {
        /// The variable's name.
        name:     String,
        /// Where it is read.
        position: Position,
    },
}

impl RuntimeError {
    /// Where the error occurred.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::DivisionByZero { position }
            | Self::Overflow { position }
            | Self::UnassignedVariable { position, .. } => *position,
        }
    }
}
