use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Number,
    },
    util::position::Position,
};

impl Interpreter {
    /// Evaluates a prefix operator.
    ///
    /// `+` returns its operand unchanged; `-` negates it without changing its
    /// kind.
    ///
    /// # Errors
    /// `RuntimeError::Overflow` when negating `i64::MIN`.
    ///
    /// # Example
    /// ```
    /// use pascalette::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::Interpreter, value::Number},
    ///     util::position::Position,
    /// };
    ///
    /// let v = Interpreter::eval_unary(UnaryOperator::Minus, Number::Real(2.5), Position::default());
    /// assert_eq!(v.unwrap(), Number::Real(-2.5));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: Number, position: Position) -> EvalResult<Number> {
        match (op, value) {
            (UnaryOperator::Plus, value) => Ok(value),
            (UnaryOperator::Minus, Number::Integer(n)) => {
                n.checked_neg()
                 .map(Number::Integer)
                 .ok_or(RuntimeError::Overflow { position })
            },
            (UnaryOperator::Minus, Number::Real(r)) => Ok(Number::Real(-r)),
        }
    }
}
