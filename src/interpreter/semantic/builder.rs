use crate::{
    ast::{Assign, Block, Compound, Declaration, Expr, ProcedureDecl, Program, Statement, VarDecl,
          Variable},
    error::SemanticError,
    interpreter::semantic::{
        scope::{ScopeArena, ScopeId},
        symbol::Symbol,
    },
    util::position::Position,
};

/// Result type used by the static pass.
pub type SemanticResult<T> = Result<T, SemanticError>;

/// Builds the scope chain of a program and checks every name against it.
///
/// A new scope is opened for the program and for each procedure, linked to
/// the scope it is declared in. Declarations are inserted into the current
/// scope; every variable reference must resolve in the current scope or one
/// of its enclosing scopes. Scopes are discarded once their block has been
/// checked.
///
/// The visitors take the id of the scope they run in, so a declaration can
/// never be visited without an open scope.
#[derive(Debug, Default)]
pub struct SymbolTableBuilder {
    scopes: ScopeArena,
}

impl SymbolTableBuilder {
    /// Creates a builder with no open scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks `program`, completing silently if it is statically well formed.
    ///
    /// # Errors
    /// - `SemanticError::DuplicateDeclaration` when a name is declared twice
    ///   in one scope.
    /// - `SemanticError::UndeclaredIdentifier` when a variable is referenced
    ///   without a visible declaration.
    ///
    /// # Example
    /// ```
    /// use pascalette::{
    ///     error::ErrorCode,
    ///     interpreter::{lexer::Lexer, parser::Parser, semantic::SymbolTableBuilder},
    /// };
    ///
    /// let source = "PROGRAM P; VAR x : INTEGER; BEGIN y := x END.";
    /// let program = Parser::new(Lexer::new(source)).unwrap().parse().unwrap();
    ///
    /// let err = SymbolTableBuilder::new().visit(&program).unwrap_err();
    /// assert_eq!(err.code(), ErrorCode::UndeclaredIdentifier);
    /// assert_eq!(err.name(), "y");
    /// ```
    pub fn visit(&mut self, program: &Program) -> SemanticResult<()> {
        self.scopes = ScopeArena::default();
        self.visit_program(program)
    }

    fn visit_program(&mut self, program: &Program) -> SemanticResult<()> {
        let scope = self.enter_scope(&program.name, None);
        self.visit_block(&program.block, scope)?;
        self.leave_scope();
        Ok(())
    }

    fn visit_block(&mut self, block: &Block, scope: ScopeId) -> SemanticResult<()> {
        for declaration in &block.declarations {
            match declaration {
                Declaration::Variable(var_decl) => self.visit_var_decl(var_decl, scope)?,
                Declaration::Procedure(procedure) => self.visit_procedure_decl(procedure, scope)?,
            }
        }
        self.visit_compound(&block.compound_statement, scope)
    }

    fn visit_var_decl(&mut self, var_decl: &VarDecl, scope: ScopeId) -> SemanticResult<()> {
        let symbol = Symbol::Variable { name:      var_decl.name.clone(),
                                        type_spec: var_decl.type_spec, };
        self.declare(symbol, scope, var_decl.position)
    }

    fn visit_procedure_decl(&mut self,
                            procedure: &ProcedureDecl,
                            scope: ScopeId)
                            -> SemanticResult<()> {
        let symbol = Symbol::Procedure { name: procedure.name.clone() };
        self.declare(symbol, scope, procedure.position)?;

        let inner = self.enter_scope(&procedure.name, Some(scope));
        self.visit_block(&procedure.block, inner)?;
        self.leave_scope();
        Ok(())
    }

    fn visit_compound(&self, compound: &Compound, scope: ScopeId) -> SemanticResult<()> {
        compound.children
                .iter()
                .try_for_each(|statement| self.visit_statement(statement, scope))
    }

    fn visit_statement(&self, statement: &Statement, scope: ScopeId) -> SemanticResult<()> {
        match statement {
            Statement::Compound(compound) => self.visit_compound(compound, scope),
            Statement::Assign(assign) => self.visit_assign(assign, scope),
            Statement::NoOp => Ok(()),
        }
    }

    /// The right-hand side is checked before the target.
    fn visit_assign(&self, assign: &Assign, scope: ScopeId) -> SemanticResult<()> {
        self.visit_expr(&assign.value, scope)?;
        self.visit_variable(&assign.target, scope)
    }

    fn visit_expr(&self, expr: &Expr, scope: ScopeId) -> SemanticResult<()> {
        match expr {
            Expr::Num { .. } => Ok(()),
            Expr::Variable(variable) => self.visit_variable(variable, scope),
            Expr::BinOp { left, right, .. } => {
                self.visit_expr(left, scope)?;
                self.visit_expr(right, scope)
            },
            Expr::UnaryOp { expr, .. } => self.visit_expr(expr, scope),
        }
    }

    fn visit_variable(&self, variable: &Variable, scope: ScopeId) -> SemanticResult<()> {
        match self.scopes[scope].lookup(&variable.name, &self.scopes) {
            Some(symbol) => {
                tracing::trace!(name = %variable.name, %symbol, "resolved variable");
                Ok(())
            },
            None => Err(SemanticError::UndeclaredIdentifier { name:     variable.name.clone(),
                                                              position: variable.position, }),
        }
    }

    /// Inserts `symbol` into `scope`.
    fn declare(&mut self, symbol: Symbol, scope: ScopeId, position: Position) -> SemanticResult<()> {
        let table = &mut self.scopes[scope];

        if table.insert(symbol.clone()) {
            Ok(())
        } else {
            Err(SemanticError::DuplicateDeclaration { name: symbol.name().to_string(),
                                                      scope: table.scope_name.clone(),
                                                      position })
        }
    }

    fn enter_scope(&mut self, name: &str, enclosing: Option<ScopeId>) -> ScopeId {
        let id = self.scopes.push(name, enclosing);
        tracing::debug!(scope = name, level = self.scopes[id].scope_level, "enter scope");
        id
    }

    fn leave_scope(&mut self) {
        if let Some(scope) = self.scopes.pop() {
            tracing::debug!(scope = %scope.scope_name, level = scope.scope_level, "leave scope");
            tracing::trace!("\n{scope}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::ErrorCode,
        interpreter::{lexer::Lexer, parser::Parser},
    };

    fn check(source: &str) -> SemanticResult<()> {
        let program = Parser::new(Lexer::new(source)).and_then(|mut p| p.parse())
                                                     .unwrap_or_else(|e| panic!("parse failed: {e}"));
        SymbolTableBuilder::new().visit(&program)
    }

    #[test]
    fn well_formed_program_passes() {
        check("PROGRAM T; VAR a, b : INTEGER; BEGIN a := 1; b := a * 2 END.").unwrap();
    }

    #[test]
    fn shadowing_across_scopes_is_legal() {
        check(
              "PROGRAM Part12;
VAR
   number : INTEGER;
   a, b   : INTEGER;
   y      : REAL;
PROCEDURE P1;
VAR
   a : REAL;
   k : INTEGER;
   PROCEDURE P2;
   VAR
      a, z : INTEGER;
   BEGIN
      z := 777;
   END;
BEGIN
END;
BEGIN
   number := 2;
   a := number;
   b := 10 * a + 10 * number DIV 4;
   y := 20 / 7 + 3.14
END.",
        ).unwrap();
    }

    #[test]
    fn redeclaration_in_same_scope_fails() {
        let err = check("PROGRAM T; VAR a : INTEGER; a : REAL; BEGIN END.").unwrap_err();
        assert_eq!(err.code(), ErrorCode::DuplicateDeclaration);
        assert_eq!(err,
                   SemanticError::DuplicateDeclaration { name:     "a".to_string(),
                                                         scope:    "T".to_string(),
                                                         position: Position::new(1, 29), });
    }

    #[test]
    fn redeclaration_in_one_declaration_list_fails() {
        let err = check("PROGRAM T; VAR x, y, x : INTEGER; BEGIN END.").unwrap_err();
        assert_eq!(err.code(), ErrorCode::DuplicateDeclaration);
        assert_eq!(err.name(), "x");
    }

    #[test]
    fn redeclaration_inside_a_procedure_names_that_scope() {
        let err = check("PROGRAM T; PROCEDURE P; VAR k, k : REAL; BEGIN END; BEGIN END.").unwrap_err();
        assert!(matches!(err, SemanticError::DuplicateDeclaration { ref scope, .. } if scope == "P"));
    }

    #[test]
    fn duplicate_procedures_fail() {
        let err = check("PROGRAM T; PROCEDURE P; BEGIN END; PROCEDURE P; BEGIN END; BEGIN END.").unwrap_err();
        assert_eq!(err.code(), ErrorCode::DuplicateDeclaration);
        assert_eq!(err.name(), "P");
    }

    #[test]
    fn procedure_and_variable_may_share_a_name() {
        check("PROGRAM T; VAR P : INTEGER; PROCEDURE P; BEGIN END; BEGIN P := 1 END.").unwrap();
    }

    #[test]
    fn procedure_name_is_not_a_variable() {
        let err = check("PROGRAM T; VAR a : INTEGER; PROCEDURE P; BEGIN END; BEGIN a := P END.").unwrap_err();
        assert_eq!(err.code(), ErrorCode::UndeclaredIdentifier);
    }

    #[test]
    fn undeclared_target_fails() {
        let err = check("PROGRAM T; BEGIN x := 1 END.").unwrap_err();
        assert_eq!(err,
                   SemanticError::UndeclaredIdentifier { name:     "x".to_string(),
                                                         position: Position::new(1, 18), });
    }

    #[test]
    fn undeclared_operand_deep_in_an_expression_fails() {
        let err = check("PROGRAM T; VAR a : INTEGER; BEGIN BEGIN a := -(1 + (2 * q)) END END.").unwrap_err();
        assert_eq!(err.name(), "q");
    }

    #[test]
    fn right_hand_side_is_reported_before_the_target() {
        let err = check("PROGRAM T; BEGIN x := y END.").unwrap_err();
        assert_eq!(err.name(), "y");
    }

    #[test]
    fn inner_declarations_are_invisible_outside() {
        let err = check("PROGRAM T; PROCEDURE P; VAR k : INTEGER; BEGIN k := 1 END; BEGIN k := 2 END.").unwrap_err();
        assert_eq!(err.code(), ErrorCode::UndeclaredIdentifier);
        assert_eq!(err.name(), "k");
    }

    #[test]
    fn outer_declarations_are_visible_in_nested_procedures() {
        check("PROGRAM T; VAR g : INTEGER;
               PROCEDURE P1; PROCEDURE P2; BEGIN g := g + 1 END; BEGIN g := 0 END;
               BEGIN END.").unwrap();
    }

    #[test]
    fn sibling_procedure_scopes_are_separate() {
        let err = check("PROGRAM T;
               PROCEDURE A; VAR x : INTEGER; BEGIN x := 1 END;
               PROCEDURE B; BEGIN x := 2 END;
               BEGIN END.").unwrap_err();
        assert_eq!(err.name(), "x");
    }

    #[test]
    fn builder_can_be_reused_after_a_failure() {
        let mut builder = SymbolTableBuilder::new();
        let bad = Parser::new(Lexer::new("PROGRAM T; PROCEDURE P; BEGIN x := 1 END; BEGIN END."))
            .and_then(|mut p| p.parse())
            .unwrap();
        let good = Parser::new(Lexer::new("PROGRAM T; VAR x : INTEGER; BEGIN x := 1 END."))
            .and_then(|mut p| p.parse())
            .unwrap();

        assert!(builder.visit(&bad).is_err());
        builder.visit(&good).unwrap();
    }

    #[test]
    fn declarations_land_in_the_scope_being_visited() {
        let err = check("PROGRAM T; VAR k : INTEGER;
               PROCEDURE P1; VAR k : REAL;
                  PROCEDURE P2; VAR k, k : INTEGER; BEGIN END;
               BEGIN END;
               BEGIN END.").unwrap_err();
        assert!(matches!(err, SemanticError::DuplicateDeclaration { ref scope, .. } if scope == "P2"));
    }

    #[test]
    fn every_scope_is_closed_after_a_successful_visit() {
        let program = Parser::new(Lexer::new("PROGRAM T; PROCEDURE P; PROCEDURE Q; BEGIN END; BEGIN END; BEGIN END."))
            .and_then(|mut p| p.parse())
            .unwrap();
        let mut builder = SymbolTableBuilder::new();

        builder.visit(&program).unwrap();
        assert!(builder.scopes.is_empty());
    }
}
