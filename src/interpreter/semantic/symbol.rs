use std::fmt;

use crate::ast::TypeSpec;

/// A declared name.
///
/// Variables and procedures live in separate namespaces of a scope, so a
/// procedure may share its name with a variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Symbol {
    /// A variable and its declared type.
    Variable {
        /// The variable's name.
        name:      String,
        /// Its declared type.
        type_spec: TypeSpec,
    },
    /// A procedure.
    Procedure {
        /// The procedure's name.
        name: String,
    },
}

impl Symbol {
    /// The declared name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Variable { name, .. } | Self::Procedure { name } => name,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variable { name, type_spec } => write!(f, "<VarSymbol(name='{name}', type='{type_spec}')>"),
            Self::Procedure { name } => write!(f, "<ProcedureSymbol(name='{name}')>"),
        }
    }
}
