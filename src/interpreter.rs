/// The evaluator module executes a checked program.
///
/// The evaluator walks the statement list of the program's own block,
/// evaluates expressions and records every assignment in a flat store.
/// Procedure bodies are never executed.
///
/// # Responsibilities
/// - Evaluates expressions with integer and real arithmetic.
/// - Applies assignments to the runtime store in source order.
/// - Reports runtime errors such as division by zero or integer overflow.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// carrying its kind, the text it was read from and its position. Keywords
/// are matched without regard to case and `{ ... }` comments are skipped.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Recognizes integer and real constants, identifiers, keywords and
///   punctuation.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with one method per grammar rule. It consumes
/// the lexer one token at a time and produces a [`crate::ast::Program`].
///
/// # Responsibilities
/// - Converts tokens into owned AST nodes.
/// - Validates the grammar, reporting the expected and found token.
/// - Bounds nesting depth so hostile input cannot exhaust the stack.
pub mod parser;
/// The semantic module checks declarations and name usage.
///
/// It builds one scoped symbol table per program and procedure, links each
/// to the scope it is declared in and resolves every variable reference
/// through that chain.
///
/// # Responsibilities
/// - Rejects names declared twice in the same scope.
/// - Rejects variable references with no visible declaration.
pub mod semantic;
/// The value module defines the runtime data types for evaluation.
///
/// It declares [`value::Number`], the result of every expression, and
/// [`value::GlobalMemory`], the store that holds the program's bindings.
pub mod value;
