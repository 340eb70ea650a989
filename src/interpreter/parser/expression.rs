use crate::{
    ast::{BinaryOperator, Expr, Literal, UnaryOperator},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`.
    ///
    /// Grammar: `expr := term ((PLUS | MINUS) term)*`
    pub(in crate::interpreter::parser) fn expr(&mut self) -> ParseResult<Expr> {
        let mut left = self.term()?;

        loop {
            let op = match self.current().kind {
                TokenKind::Plus => BinaryOperator::Add,
                TokenKind::Minus => BinaryOperator::Sub,
                _ => break,
            };
            let position = self.advance()?.position;
            let right = self.term()?;
            left = Expr::BinOp { left: Box::new(left),
                                 op,
                                 right: Box::new(right),
                                 position };
        }

        Ok(left)
    }

    /// Parses multiplication-level expressions.
    ///
    /// Handles left-associative operators: `*`, `DIV` and `/`.
    ///
    /// Grammar: `term := factor ((MUL | INTEGER_DIV | FLOAT_DIV) factor)*`
    fn term(&mut self) -> ParseResult<Expr> {
        let mut left = self.factor()?;

        loop {
            let op = match self.current().kind {
                TokenKind::Mul => BinaryOperator::Mul,
                TokenKind::IntegerDiv => BinaryOperator::IntegerDiv,
                TokenKind::FloatDiv => BinaryOperator::FloatDiv,
                _ => break,
            };
            let position = self.advance()?.position;
            let right = self.factor()?;
            left = Expr::BinOp { left: Box::new(left),
                                 op,
                                 right: Box::new(right),
                                 position };
        }

        Ok(left)
    }

    /// Parses a factor: a unary operation, a literal, a parenthesized
    /// expression or a variable.
    ///
    /// Unary operators are right-recursive, so `- - 3` parses as
    /// `-(-(3))`.
    ///
    /// Grammar:
    /// ```text
    ///     factor := PLUS factor
    ///             | MINUS factor
    ///             | INTEGER_CONST
    ///             | REAL_CONST
    ///             | LPAREN expr RPAREN
    ///             | variable
    /// ```
    fn factor(&mut self) -> ParseResult<Expr> {
        let position = self.current().position;

        match self.current().kind {
            TokenKind::Plus | TokenKind::Minus => {
                let op = if self.advance()?.kind == TokenKind::Plus {
                    UnaryOperator::Plus
                } else {
                    UnaryOperator::Minus
                };
                let expr = self.nested(Self::factor)?;
                Ok(Expr::UnaryOp { op,
                                   expr: Box::new(expr),
                                   position })
            },
            TokenKind::IntegerConst(value) => {
                self.advance()?;
                Ok(Expr::Num { value: Literal::Integer(value),
                               position })
            },
            TokenKind::RealConst(value) => {
                self.advance()?;
                Ok(Expr::Num { value: Literal::Real(value),
                               position })
            },
            TokenKind::LParen => {
                self.advance()?;
                let expr = self.nested(Self::expr)?;
                self.eat(&TokenKind::RParen)?;
                Ok(expr)
            },
            TokenKind::Id(_) => Ok(Expr::Variable(self.variable()?)),
            _ => Err(self.unexpected("an expression")),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        ast::{Assign, BinaryOperator, Declaration, Expr, Literal, Program, Statement, TypeSpec,
              UnaryOperator, Variable},
        error::ParseError,
        interpreter::{
            lexer::Lexer,
            parser::{MAX_NESTING_DEPTH, ParseResult, Parser},
        },
        util::position::Position,
    };

    fn parse(source: &str) -> ParseResult<Program> {
        Parser::new(Lexer::new(source))?.parse()
    }

    fn parse_expr(expr: &str) -> Expr {
        let program = parse(&format!("PROGRAM T; VAR a, b : INTEGER; BEGIN a := {expr} END."))
            .unwrap_or_else(|e| panic!("failed to parse {expr:?}: {e}"));

        match &program.block.compound_statement.children[0] {
            Statement::Assign(Assign { value, .. }) => value.clone(),
            other => panic!("expected an assignment, found {other:?}"),
        }
    }

    /// Renders an expression fully parenthesized so that tree shape can be
    /// compared without positions.
    fn shape(expr: &Expr) -> String {
        match expr {
            Expr::Num { value: Literal::Integer(v), .. } => v.to_string(),
            Expr::Num { value: Literal::Real(v), .. } => v.to_string(),
            Expr::Variable(Variable { name, .. }) => name.clone(),
            Expr::BinOp { left, op, right, .. } => {
                format!("({} {op} {})", shape(left), shape(right))
            },
            Expr::UnaryOp { op: UnaryOperator::Plus,
                            expr,
                            .. } => format!("(+{})", shape(expr)),
            Expr::UnaryOp { op: UnaryOperator::Minus,
                            expr,
                            .. } => format!("(-{})", shape(expr)),
        }
    }

    #[test]
    fn precedence_and_left_associativity() {
        assert_eq!(shape(&parse_expr("2 + 7 * 4")), "(2 + (7 * 4))");
        assert_eq!(shape(&parse_expr("7 - 8 DIV 4")), "(7 - (8 DIV 4))");
        assert_eq!(shape(&parse_expr("1 - 2 - 3")), "((1 - 2) - 3)");
        assert_eq!(shape(&parse_expr("8 / 4 * 2")), "((8 / 4) * 2)");
        assert_eq!(shape(&parse_expr("(1 + 2) * b")), "((1 + 2) * b)");
    }

    #[test]
    fn unary_operators_nest_right_to_left() {
        assert_eq!(shape(&parse_expr("- - - 3")), "(-(-(-3)))");
        assert_eq!(shape(&parse_expr("5 - - - + - 3")), "(5 - (-(-(+(-3)))))");
    }

    #[test]
    fn operator_positions_are_recorded() {
        let expr = parse_expr("1 +\n 2");
        assert!(matches!(expr, Expr::BinOp { op: BinaryOperator::Add, .. }));
        assert_eq!(expr.position(), Position::new(1, 45));
    }

    #[test]
    fn program_structure() {
        let program = parse(
                            "PROGRAM Part12;
VAR
   a, b : INTEGER;
   y    : REAL;
PROCEDURE P1;
VAR
   a : REAL;
   PROCEDURE P2;
   BEGIN END;
BEGIN END;
BEGIN
   a := 1;
   BEGIN y := 2.5 END;
END.",
        ).unwrap();

        assert_eq!(program.name, "Part12");
        let names: Vec<_> = program.block
                                   .declarations
                                   .iter()
                                   .map(|d| match d {
                                       Declaration::Variable(v) => {
                                           format!("{}:{}", v.name, v.type_spec)
                                       },
                                       Declaration::Procedure(p) => format!("proc {}", p.name),
                                   })
                                   .collect();
        assert_eq!(names, vec!["a:INTEGER", "b:INTEGER", "y:REAL", "proc P1"]);

        let Declaration::Procedure(p1) = &program.block.declarations[3] else {
            panic!("expected P1");
        };
        assert_eq!(p1.block.declarations.len(), 2);
        assert!(matches!(&p1.block.declarations[0],
                         Declaration::Variable(v) if v.type_spec == TypeSpec::Real));

        let statements = &program.block.compound_statement.children;
        assert_eq!(statements.len(), 3);
        assert!(matches!(statements[0], Statement::Assign(_)));
        assert!(matches!(statements[1], Statement::Compound(_)));
        assert_eq!(statements[2], Statement::NoOp);
    }

    #[test]
    fn empty_program_body_is_a_single_no_op() {
        let program = parse("PROGRAM Empty; BEGIN END.").unwrap();
        assert_eq!(program.block.compound_statement.children, vec![Statement::NoOp]);
    }

    #[test]
    fn missing_operand_is_rejected() {
        let err = parse("PROGRAM T; VAR a : INTEGER; BEGIN a := 10 * ; END.").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { ref found, .. } if found == "';'"));
    }

    #[test]
    fn group_after_primary_is_rejected() {
        let err = parse("PROGRAM T; VAR a : INTEGER; BEGIN a := 1 (1 + 2); END.").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { ref found, .. } if found == "'('"));
    }

    #[test]
    fn missing_separator_between_statements_is_rejected() {
        let err = parse("PROGRAM T; VAR a : INTEGER; BEGIN a := 1 a := 2 END.").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { ref expected, .. } if expected == "';' or 'END'"));
    }

    #[test]
    fn var_section_needs_a_declaration() {
        assert!(parse("PROGRAM T; VAR BEGIN END.").is_err());
    }

    #[test]
    fn premature_end_of_input() {
        let err = parse("PROGRAM T; BEGIN a := 1").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEndOfInput { .. }));
    }

    #[test]
    fn trailing_tokens_are_rejected() {
        let err = parse("PROGRAM T; BEGIN END. END").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedTrailingTokens { ref token, .. } if token == "'END'"));
    }

    #[test]
    fn lexical_errors_surface_through_the_parser() {
        let err = parse("PROGRAM T; BEGIN a := 1 % 2 END.").unwrap_err();
        assert!(matches!(err, ParseError::Lexical(_)));
    }

    #[test]
    fn nesting_is_limited() {
        let ok = format!("{}1{}", "(".repeat(MAX_NESTING_DEPTH - 1), ")".repeat(MAX_NESTING_DEPTH - 1));
        assert_eq!(shape(&parse_expr(&ok)), "1");

        let too_deep = format!("{}1{}", "(".repeat(MAX_NESTING_DEPTH + 1), ")".repeat(MAX_NESTING_DEPTH + 1));
        let err = parse(&format!("PROGRAM T; VAR a : INTEGER; BEGIN a := {too_deep} END.")).unwrap_err();
        assert!(matches!(err, ParseError::NestingTooDeep { .. }));

        let unary = "-".repeat(MAX_NESTING_DEPTH + 1);
        let err = parse(&format!("PROGRAM T; VAR a : INTEGER; BEGIN a := {unary}1 END.")).unwrap_err();
        assert!(matches!(err, ParseError::NestingTooDeep { .. }));
    }

    #[test]
    fn procedure_nesting_is_limited() {
        let nest = |n: usize| {
            format!("PROGRAM T; {}{}BEGIN END.", "PROCEDURE P; ".repeat(n), "BEGIN END; ".repeat(n))
        };

        assert!(parse(&nest(16)).is_ok());
        let err = parse(&nest(MAX_NESTING_DEPTH + 1)).unwrap_err();
        assert!(matches!(err, ParseError::NestingTooDeep { .. }));
    }
}
