/// Parser state and primitives.
///
/// Holds the [`core::Parser`] itself: the on-demand token cursor, the `eat`
/// primitive, nesting-depth accounting and the `parse` entry point that
/// rejects trailing tokens.
pub mod core;

/// Declaration parsing.
///
/// Implements the `program`, `block`, `declarations`, `variable_declaration`,
/// `procedure_declaration` and `type_spec` rules.
pub mod declaration;

/// Statement parsing.
///
/// Implements `compound_statement`, `statement_list`, `statement`,
/// `assignment_statement` and `variable`.
pub mod statement;

/// Expression parsing.
///
/// Implements the precedence-ordered `expr`, `term` and `factor` rules,
/// including right-recursive unary operators and parenthesized groups.
pub mod expression;

pub use self::core::{MAX_NESTING_DEPTH, ParseResult, Parser};
