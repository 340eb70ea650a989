use crate::util::position::Position;

/// Stable tag naming the class of a [`SemanticError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// A name was declared twice in the same scope.
    DuplicateDeclaration,
    /// A name was used without any visible declaration.
    UndeclaredIdentifier,
}

/// Represents all errors raised by the static pass.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SemanticError {
    /// The name is already declared in the same scope.
    #[error("Error on {position}: Duplicate identifier '{name}' in scope '{scope}'.")]
    DuplicateDeclaration {
        /// The redeclared name.
        name:     String,
        /// Name of the scope holding both declarations.
        scope:    String,
        /// Where the second declaration appears.
        position: Position,
    },
    /// The name is not declared in the current scope or any enclosing one.
    #[error("Error on {position}: Identifier '{name}' not found.")]
    UndeclaredIdentifier {
        /// The unresolved name.
        name:     String,
        /// Where it is referenced.
        position: Position,
    },
}

impl SemanticError {
    /// The class of this error.
    ///
    /// ```
    /// use pascalette::{
    ///     error::{ErrorCode, SemanticError},
    ///     util::position::Position,
    /// };
    ///
    /// let err = SemanticError::UndeclaredIdentifier { name:     "x".to_string(),
    ///                                                  position: Position::new(4, 2), };
    /// assert_eq!(err.code(), ErrorCode::UndeclaredIdentifier);
    /// ```
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::DuplicateDeclaration { .. } => ErrorCode::DuplicateDeclaration,
            Self::UndeclaredIdentifier { .. } => ErrorCode::UndeclaredIdentifier,
        }
    }

    /// The identifier the error is about.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::DuplicateDeclaration { name, .. } | Self::UndeclaredIdentifier { name, .. } => {
                name
            },
        }
    }

    /// Where the error occurred.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::DuplicateDeclaration { position, .. }
            | Self::UndeclaredIdentifier { position, .. } => *position,
        }
    }
}
