use std::fmt;

use crate::ast::Literal;

/// The value of an evaluated expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit floating-point number.
    Real(f64),
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<Literal> for Number {
    fn from(literal: Literal) -> Self {
        match literal {
            Literal::Integer(value) => Self::Integer(value),
            Literal::Real(value) => Self::Real(value),
        }
    }
}

impl Number {
    /// Converts the number to an `f64`.
    ///
    /// Integers beyond ±2^53 round to the nearest representable real.
    ///
    /// # Example
    /// ```
    /// use pascalette::interpreter::value::Number;
    ///
    /// assert_eq!(Number::Integer(3).as_real(), 3.0);
    /// assert_eq!(Number::Real(2.5).as_real(), 2.5);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_real(self) -> f64 {
        match self {
            Self::Integer(value) => value as f64,
            Self::Real(value) => value,
        }
    }

    /// Returns `true` for integer zero and for real zero of either sign.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(value) => value == 0,
            Self::Real(value) => value == 0.0,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Real(value) if value.fract() == 0.0 && value.is_finite() => write!(f, "{value:.1}"),
            Self::Real(value) => write!(f, "{value}"),
        }
    }
}
