//! # pascalette
//!
//! pascalette is an interpreter for a small subset of Pascal written in Rust.
//! It lexes, parses, statically checks and evaluates programs made of
//! variable and procedure declarations, assignments and arithmetic over
//! `INTEGER` and `REAL` values.
//!
//! The pipeline is exposed in stages: [`parse`] builds the syntax tree,
//! [`check`] additionally validates declarations and scopes, and [`run`]
//! executes the program and returns its final bindings.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    error::Error,
    interpreter::{
        evaluator::Interpreter, lexer::Lexer, parser::Parser, semantic::SymbolTableBuilder,
        value::GlobalMemory,
    },
};

/// Defines the structure of parsed programs.
///
/// This module declares the node types that represent a program as a tree:
/// declarations, statements and expressions. The tree is built by the parser,
/// checked by the semantic pass and walked by the evaluator.
///
/// # Responsibilities
/// - Defines one type per language construct.
/// - Attaches source positions to nodes for error reporting.
pub mod ast;
/// Provides the error types of every stage.
///
/// Each stage has its own error enum carrying the offending token or name
/// and its position. The crate-level [`error::Error`] wraps them all.
///
/// # Responsibilities
/// - Defines error enums for the lexer, parser, semantic pass and evaluator.
/// - Renders every error with the line and column it occurred at.
pub mod error;
/// Orchestrates the stages of program execution.
///
/// This module ties together lexing, parsing, semantic checking, evaluation
/// and the runtime value types.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, semantic pass and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities shared by every stage.
///
/// Currently holds [`util::position::Position`], the line and column that
/// tokens, nodes and errors carry.
pub mod util;

/// Parses `source` into a syntax tree.
///
/// # Errors
/// `Error::Lexical` or `Error::Syntax` if the source is not a well-formed
/// program.
///
/// # Example
/// ```
/// let program = pascalette::parse("PROGRAM Demo; BEGIN END.").unwrap();
/// assert_eq!(program.name, "Demo");
///
/// assert!(pascalette::parse("PROGRAM Demo; BEGIN a := 10 * ; END.").is_err());
/// ```
pub fn parse(source: &str) -> Result<Program, Error> {
    let mut parser = Parser::new(Lexer::new(source))?;
    Ok(parser.parse()?)
}

/// Parses `source` and checks its declarations and name usage.
///
/// # Errors
/// Any error from [`parse`], or `Error::Semantic` for a duplicate declaration
/// or an undeclared identifier.
///
/// # Example
/// ```
/// use pascalette::error::Error;
///
/// assert!(pascalette::check("PROGRAM Demo; VAR a : INTEGER; BEGIN a := 1 END.").is_ok());
///
/// let err = pascalette::check("PROGRAM Demo; BEGIN a := 1 END.").unwrap_err();
/// assert!(matches!(err, Error::Semantic(_)));
/// ```
pub fn check(source: &str) -> Result<Program, Error> {
    let program = parse(source)?;
    SymbolTableBuilder::new().visit(&program)?;
    Ok(program)
}

/// Runs the whole pipeline on `source` and returns the final bindings.
///
/// The program is only executed once it has passed [`check`].
///
/// # Errors
/// Any error from [`check`], or `Error::Runtime` if execution fails.
///
/// # Example
/// ```
/// use pascalette::interpreter::value::Number;
///
/// let source = "PROGRAM Demo;
///               VAR a, b : INTEGER;
///               BEGIN
///                  a := 7;
///                  b := a DIV 2
///               END.";
///
/// let memory = pascalette::run(source).unwrap();
/// assert_eq!(memory.get("b"), Some(&Number::Integer(3)));
/// ```
pub fn run(source: &str) -> Result<GlobalMemory, Error> {
    let program = check(source)?;
    let mut interpreter = Interpreter::new();
    interpreter.interpret(&program)?;
    Ok(interpreter.into_memory())
}
