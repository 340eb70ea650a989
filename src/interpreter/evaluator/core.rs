use crate::{
    ast::{Assign, Block, Compound, Expr, Program, Statement, Variable},
    error::RuntimeError,
    interpreter::value::{GlobalMemory, Number},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Executes a program and keeps its runtime state.
///
/// The interpreter assumes that the program has already passed the static
/// pass. Declarations execute nothing and procedure bodies are never run;
/// only the program's own statement list is executed, and every assignment
/// lands in one flat [`GlobalMemory`].
///
/// ## Usage
///
/// Create one `Interpreter` per run, call [`Interpreter::interpret`], then
/// read the bindings through [`Interpreter::memory`]. If execution fails,
/// assignments that completed before the failure remain in the store.
#[derive(Debug, Default)]
pub struct Interpreter {
    memory: GlobalMemory,
}

impl Interpreter {
    /// Creates an interpreter with an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes `program` to completion.
    ///
    /// # Errors
    /// Returns the first [`RuntimeError`] raised, such as division by zero.
    ///
    /// # Example
    /// ```
    /// use pascalette::interpreter::{
    ///     evaluator::Interpreter, lexer::Lexer, parser::Parser, value::Number,
    /// };
    ///
    /// let source = "PROGRAM P; VAR a : INTEGER; BEGIN a := 7 DIV 2 END.";
    /// let program = Parser::new(Lexer::new(source)).unwrap().parse().unwrap();
    ///
    /// let mut interpreter = Interpreter::new();
    /// interpreter.interpret(&program).unwrap();
    /// assert_eq!(interpreter.get("a"), Some(Number::Integer(3)));
    /// ```
    pub fn interpret(&mut self, program: &Program) -> EvalResult<()> {
        self.visit_block(&program.block)
    }

    /// The runtime store.
    #[must_use]
    pub const fn memory(&self) -> &GlobalMemory {
        &self.memory
    }

    /// The value currently bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Number> {
        self.memory.get(name).copied()
    }

    /// Consumes the interpreter and returns its store.
    #[must_use]
    pub fn into_memory(self) -> GlobalMemory {
        self.memory
    }

    fn visit_block(&mut self, block: &Block) -> EvalResult<()> {
        // Declarations have no runtime effect.
        self.visit_compound(&block.compound_statement)
    }

    fn visit_compound(&mut self, compound: &Compound) -> EvalResult<()> {
        compound.children
                .iter()
                .try_for_each(|statement| self.visit_statement(statement))
    }

    fn visit_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        match statement {
            Statement::Compound(compound) => self.visit_compound(compound),
            Statement::Assign(assign) => self.visit_assign(assign),
            Statement::NoOp => Ok(()),
        }
    }

    fn visit_assign(&mut self, assign: &Assign) -> EvalResult<()> {
        let value = self.eval(&assign.value)?;
        tracing::debug!(name = %assign.target.name, %value, "assign");
        self.memory.assign(&assign.target.name, value);
        Ok(())
    }

    /// Evaluates an expression against the current store.
    ///
    /// Operands of a binary operation are evaluated left to right.
    ///
    /// # Errors
    /// Any [`RuntimeError`] raised by an operator, or
    /// `RuntimeError::UnassignedVariable` for a variable that has not been
    /// assigned yet.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Number> {
        match expr {
            Expr::Num { value, .. } => Ok(Number::from(*value)),
            Expr::Variable(variable) => self.eval_variable(variable),
            Expr::BinOp { left,
                          op,
                          right,
                          position, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, left, right, *position)
            },
            Expr::UnaryOp { op, expr, position } => {
                let value = self.eval(expr)?;
                Self::eval_unary(*op, value, *position)
            },
        }
    }

    fn eval_variable(&self, variable: &Variable) -> EvalResult<Number> {
        self.get(&variable.name)
            .ok_or_else(|| RuntimeError::UnassignedVariable { name:     variable.name.clone(),
                                                              position: variable.position, })
    }
}
