use crate::{error::LexError, util::position::Position};

/// Represents all errors that can occur during parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// The lexer failed while the parser was pulling the next token.
    #[error(transparent)]
    Lexical(#[from] LexError),
    /// Found a token other than the one the grammar requires here.
    #[error("Error on {position}: Expected {expected}, found {found}.")]
    UnexpectedToken {
        /// Description of what the grammar allows at this point.
        expected: String,
        /// The token encountered.
        found:    String,
        /// Where the token starts.
        position: Position,
    },
    /// Reached the end of input while the grammar still required a token.
    #[error("Error on {position}: Unexpected end of input, expected {expected}.")]
    UnexpectedEndOfInput {
        /// Description of what the grammar allows at this point.
        expected: String,
        /// End-of-input position.
        position: Position,
    },
    /// Found extra tokens after the program's closing `.`.
    #[error("Error on {position}: Extra tokens after the end of the program: {token}.")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Where it starts.
        position: Position,
    },
    /// Expressions or compound statements are nested too deeply.
    #[error("Error on {position}: Nesting is deeper than {limit} levels.")]
    NestingTooDeep {
        /// The maximum supported depth.
        limit:    usize,
        /// Where the limit was exceeded.
        position: Position,
    },
}

impl ParseError {
    /// Where the error occurred.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Lexical(err) => err.position(),
            Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position, .. }
            | Self::UnexpectedTrailingTokens { position, .. }
            | Self::NestingTooDeep { position, .. } => *position,
        }
    }
}
