use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Number,
    },
    util::position::Position,
};

impl Interpreter {
    /// Evaluates a binary operation between two numbers.
    ///
    /// `+`, `-` and `*` stay integral when both operands are integers and
    /// promote to real otherwise. `DIV` truncates toward zero, staying
    /// integral for integer operands. `/` always produces a real.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Position of the operator, for error reporting.
    ///
    /// # Errors
    /// - `RuntimeError::DivisionByZero` when the right operand of `DIV` or `/`
    ///   is zero.
    /// - `RuntimeError::Overflow` when integer arithmetic leaves the 64-bit
    ///   range.
    ///
    /// # Example
    /// ```
    /// use pascalette::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::Interpreter, value::Number},
    ///     util::position::Position,
    /// };
    ///
    /// let at = Position::default();
    ///
    /// let quotient = Interpreter::eval_binary(BinaryOperator::IntegerDiv,
    ///                                         Number::Integer(-7),
    ///                                         Number::Integer(2),
    ///                                         at).unwrap();
    /// assert_eq!(quotient, Number::Integer(-3));
    ///
    /// let ratio = Interpreter::eval_binary(BinaryOperator::FloatDiv,
    ///                                      Number::Integer(8),
    ///                                      Number::Integer(4),
    ///                                      at).unwrap();
    /// assert_eq!(ratio, Number::Real(2.0));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: Number,
                       right: Number,
                       position: Position)
                       -> EvalResult<Number> {
        use BinaryOperator::{Add, FloatDiv, IntegerDiv, Mul, Sub};
        use Number::Integer;

        match (op, left, right) {
            (IntegerDiv | FloatDiv, _, divisor) if divisor.is_zero() => {
                Err(RuntimeError::DivisionByZero { position })
            },

            (IntegerDiv, Integer(a), Integer(b)) => Self::checked(a.checked_div(b), position),
            (IntegerDiv, ..) => Ok(Self::promote(left, right, |a, b| (a / b).trunc())),

            (Add, Integer(a), Integer(b)) => Self::checked(a.checked_add(b), position),
            (Sub, Integer(a), Integer(b)) => Self::checked(a.checked_sub(b), position),
            (Mul, Integer(a), Integer(b)) => Self::checked(a.checked_mul(b), position),

            (Add, ..) => Ok(Self::promote(left, right, |a, b| a + b)),
            (Sub, ..) => Ok(Self::promote(left, right, |a, b| a - b)),
            (Mul, ..) => Ok(Self::promote(left, right, |a, b| a * b)),
            (FloatDiv, ..) => Ok(Self::promote(left, right, |a, b| a / b)),
        }
    }

    fn checked(result: Option<i64>, position: Position) -> EvalResult<Number> {
        result.map(Number::Integer)
              .ok_or(RuntimeError::Overflow { position })
    }

    fn promote(left: Number, right: Number, op: impl FnOnce(f64, f64) -> f64) -> Number {
        Number::Real(op(left.as_real(), right.as_real()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::value::Number::{Integer, Real};

    fn eval(op: BinaryOperator, left: Number, right: Number) -> EvalResult<Number> {
        Interpreter::eval_binary(op, left, right, Position::new(2, 7))
    }

    #[test]
    fn integer_arithmetic_stays_integral() {
        assert_eq!(eval(BinaryOperator::Add, Integer(2), Integer(7)).unwrap(), Integer(9));
        assert_eq!(eval(BinaryOperator::Sub, Integer(2), Integer(7)).unwrap(), Integer(-5));
        assert_eq!(eval(BinaryOperator::Mul, Integer(6), Integer(7)).unwrap(), Integer(42));
    }

    #[test]
    fn mixed_operands_promote_to_real() {
        assert_eq!(eval(BinaryOperator::Add, Real(2.5), Integer(1)).unwrap(), Real(3.5));
        assert_eq!(eval(BinaryOperator::Sub, Integer(1), Real(0.5)).unwrap(), Real(0.5));
        assert_eq!(eval(BinaryOperator::Mul, Real(2.0), Real(3.0)).unwrap(), Real(6.0));
    }

    #[test]
    fn integer_division_truncates_toward_zero() {
        assert_eq!(eval(BinaryOperator::IntegerDiv, Integer(7), Integer(2)).unwrap(), Integer(3));
        assert_eq!(eval(BinaryOperator::IntegerDiv, Integer(-7), Integer(2)).unwrap(), Integer(-3));
        assert_eq!(eval(BinaryOperator::IntegerDiv, Integer(7), Integer(-2)).unwrap(), Integer(-3));
        assert_eq!(eval(BinaryOperator::IntegerDiv, Integer(1), Integer(4)).unwrap(), Integer(0));
    }

    #[test]
    fn real_division_always_yields_real() {
        assert_eq!(eval(BinaryOperator::FloatDiv, Integer(8), Integer(4)).unwrap(), Real(2.0));
        assert_eq!(eval(BinaryOperator::FloatDiv, Integer(1), Integer(4)).unwrap(), Real(0.25));
        assert_eq!(eval(BinaryOperator::FloatDiv, Real(1.5), Real(0.5)).unwrap(), Real(3.0));
    }

    #[test]
    fn division_by_zero_is_reported_at_the_operator() {
        for op in [BinaryOperator::IntegerDiv, BinaryOperator::FloatDiv] {
            assert_eq!(eval(op, Integer(1), Integer(0)).unwrap_err(),
                       RuntimeError::DivisionByZero { position: Position::new(2, 7) });
        }
        assert!(matches!(eval(BinaryOperator::FloatDiv, Real(1.0), Real(0.0)),
                         Err(RuntimeError::DivisionByZero { .. })));
        assert!(matches!(eval(BinaryOperator::FloatDiv, Integer(1), Real(-0.0)),
                         Err(RuntimeError::DivisionByZero { .. })));
    }

    #[test]
    fn integer_division_of_reals_truncates_to_a_real() {
        assert_eq!(eval(BinaryOperator::IntegerDiv, Real(7.5), Integer(2)).unwrap(), Real(3.0));
        assert_eq!(eval(BinaryOperator::IntegerDiv, Integer(7), Real(2.0)).unwrap(), Real(3.0));
        assert_eq!(eval(BinaryOperator::IntegerDiv, Real(-7.5), Real(2.0)).unwrap(), Real(-3.0));
        assert!(matches!(eval(BinaryOperator::IntegerDiv, Real(7.5), Real(0.0)),
                         Err(RuntimeError::DivisionByZero { .. })));
    }

    #[test]
    fn overflow_is_an_error() {
        assert_eq!(eval(BinaryOperator::Add, Integer(i64::MAX), Integer(1)).unwrap_err(),
                   RuntimeError::Overflow { position: Position::new(2, 7) });
        assert!(eval(BinaryOperator::Sub, Integer(i64::MIN), Integer(1)).is_err());
        assert!(eval(BinaryOperator::Mul, Integer(i64::MAX), Integer(2)).is_err());
        assert!(eval(BinaryOperator::IntegerDiv, Integer(i64::MIN), Integer(-1)).is_err());
    }

    #[test]
    fn huge_integers_promote_to_the_nearest_real() {
        assert_eq!(eval(BinaryOperator::FloatDiv, Integer(9_007_199_254_740_993), Integer(1)).unwrap(),
                   Real(9_007_199_254_740_992.0));
        assert_eq!(eval(BinaryOperator::Add, Integer(i64::MAX), Real(0.5)).unwrap(),
                   Real(9_223_372_036_854_775_808.0));
    }
}
