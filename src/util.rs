/// Source positions.
///
/// Defines the 1-based line/column pair that tokens, AST nodes and every error
/// carry so that callers can point at the offending source text.
pub mod position;
