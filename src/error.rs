/// Lexical errors.
///
/// Raised while scanning the source text: characters that start no token,
/// unterminated comments and integer literals that do not fit an `i64`.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all errors raised while matching the token stream against the
/// grammar: unexpected tokens, premature end of input, trailing tokens after
/// the final `.` and excessive nesting.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all errors that can be raised while executing a checked program,
/// such as division by zero or integer overflow.
pub mod runtime_error;
/// Semantic errors.
///
/// Raised by the static pass when a name is declared twice in one scope or
/// referenced without any visible declaration.
pub mod semantic_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use semantic_error::{ErrorCode, SemanticError};

/// Any failure of the lex → parse → check → run pipeline.
///
/// The four categories stay distinguishable so that callers can tell a
/// malformed program from one that merely failed while running.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source contains text that is not a token.
    #[error(transparent)]
    Lexical(LexError),
    /// The token stream does not match the grammar.
    #[error(transparent)]
    Syntax(ParseError),
    /// The static pass rejected the program.
    #[error(transparent)]
    Semantic(#[from] SemanticError),
    /// Execution failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl From<LexError> for Error {
    fn from(err: LexError) -> Self {
        Self::Lexical(err)
    }
}

impl From<ParseError> for Error {
    /// Lexical failures surface through the parser, which pulls tokens on
    /// demand; they are reported as their own category.
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::Lexical(err) => Self::Lexical(err),
            other => Self::Syntax(other),
        }
    }
}
