use crate::util::position::Position;

/// Represents all errors that can occur while scanning source text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A character that does not begin any token.
    #[error("Error on {position}: Unrecognized character '{character}'.")]
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// Where it was found.
        position:  Position,
    },
    /// A `{` comment that is never closed.
    #[error("Error on {position}: Comment is never closed with '}}'.")]
    UnterminatedComment {
        /// Where the comment starts.
        position: Position,
    },
    /// An integer literal that does not fit into a 64-bit signed integer.
    #[error("Error on {position}: Integer literal {literal} is out of range.")]
    IntegerOutOfRange {
        /// The literal as written.
        literal:  String,
        /// Where the literal starts.
        position: Position,
    },
}

impl LexError {
    /// Where the error occurred.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnrecognizedCharacter { position, .. }
            | Self::UnterminatedComment { position }
            | Self::IntegerOutOfRange { position, .. } => *position,
        }
    }
}
