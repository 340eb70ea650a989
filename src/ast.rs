use std::fmt;

use crate::util::position::Position;

/// A numeric literal as written in the source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    /// An `INTEGER_CONST` such as `42`.
    Integer(i64),
    /// A `REAL_CONST` such as `3.14`.
    Real(f64),
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

/// The declared type of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeSpec {
    /// `INTEGER`
    Integer,
    /// `REAL`
    Real,
}

impl fmt::Display for TypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => f.write_str("INTEGER"),
            Self::Real => f.write_str("REAL"),
        }
    }
}

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `DIV`, integer division truncating toward zero.
    IntegerDiv,
    /// `/`, real division.
    FloatDiv,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => f.write_str("+"),
            Self::Sub => f.write_str("-"),
            Self::Mul => f.write_str("*"),
            Self::IntegerDiv => f.write_str("DIV"),
            Self::FloatDiv => f.write_str("/"),
        }
    }
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// `+`, identity.
    Plus,
    /// `-`, negation.
    Minus,
}

/// The root of the tree: `PROGRAM name; block.`
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The program's name.
    pub name:     String,
    /// Its declarations and main statement list.
    pub block:    Block,
    /// Position of the program name.
    pub position: Position,
}

/// Declarations followed by a compound statement. Used by both the program
/// and every procedure.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Variable and procedure declarations, in source order.
    pub declarations:       Vec<Declaration>,
    /// The `BEGIN ... END` body.
    pub compound_statement: Compound,
}

/// One entry of a declaration section.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    /// A single variable. `a, b : INTEGER` yields two of these.
    Variable(VarDecl),
    /// A nested procedure.
    Procedure(ProcedureDecl),
}

/// `name : type`
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    /// The declared name.
    pub name:      String,
    /// The declared type.
    pub type_spec: TypeSpec,
    /// Position of the name.
    pub position:  Position,
}

/// `PROCEDURE name; block;`
#[derive(Debug, Clone, PartialEq)]
pub struct ProcedureDecl {
    /// The procedure's name.
    pub name:     String,
    /// Its own declarations and body.
    pub block:    Block,
    /// Position of the name.
    pub position: Position,
}

/// `BEGIN statement; ...; statement END`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Compound {
    /// The statements, in execution order.
    pub children: Vec<Statement>,
}

/// A statement inside a compound statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A nested `BEGIN ... END`.
    Compound(Compound),
    /// `variable := expr`
    Assign(Assign),
    /// The empty statement, e.g. before `END` after a trailing `;`.
    NoOp,
}

/// `target := value`
#[derive(Debug, Clone, PartialEq)]
pub struct Assign {
    /// The variable being written.
    pub target:   Variable,
    /// The expression producing the value.
    pub value:    Expr,
    /// Position of the `:=` token.
    pub position: Position,
}

/// A reference to a variable by name.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    /// The name as written.
    pub name:     String,
    /// Where the reference appears.
    pub position: Position,
}

/// An arithmetic expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Num {
        /// The literal value.
        value:    Literal,
        /// Position of the literal.
        position: Position,
    },
    /// A variable read.
    Variable(Variable),
    /// `left op right`
    BinOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Position of the operator.
        position: Position,
    },
    /// `op expr`
    UnaryOp {
        /// The operator.
        op:       UnaryOperator,
        /// The operand.
        expr:     Box<Self>,
        /// Position of the operator.
        position: Position,
    },
}

impl Expr {
    /// Gets the source position of `self`.
    /// ## Example
    /// ```
    /// use pascalette::{
    ///     ast::{Expr, Literal},
    ///     util::position::Position,
    /// };
    ///
    /// let expr = Expr::Num { value:    Literal::Integer(3),
    ///                        position: Position::new(5, 9), };
    ///
    /// assert_eq!(expr.position(), Position::new(5, 9));
    /// ```
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Num { position, .. }
            | Self::Variable(Variable { position, .. })
            | Self::BinOp { position, .. }
            | Self::UnaryOp { position, .. } => *position,
        }
    }
}
