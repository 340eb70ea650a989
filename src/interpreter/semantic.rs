/// Symbols.
///
/// Defines the static identity of a declared name: a variable with its type,
/// or a procedure.
pub mod symbol;

/// Scoped symbol tables.
///
/// One table per program or procedure block. Tables live in an arena and
/// refer to their enclosing scope by index, never by ownership.
pub mod scope;

/// The static pass.
///
/// Walks the AST, builds the scope chain, and rejects duplicate declarations
/// and references to undeclared variables before anything is executed.
pub mod builder;

pub use builder::{SemanticResult, SymbolTableBuilder};
pub use scope::{ScopeArena, ScopeId, ScopedSymbolTable};
pub use symbol::Symbol;
