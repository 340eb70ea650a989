use crate::{
    ast::{Assign, Compound, Statement, Variable},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a `BEGIN ... END` compound statement.
    ///
    /// Grammar: `compound_statement := BEGIN statement_list END`
    pub(in crate::interpreter::parser) fn compound_statement(&mut self) -> ParseResult<Compound> {
        self.nested(|parser| {
                parser.eat(&TokenKind::Begin)?;
                let children = parser.statement_list()?;
                parser.eat(&TokenKind::End)?;
                Ok(Compound { children })
            })
    }

    /// Parses statements separated by semicolons.
    ///
    /// Grammar: `statement_list := statement (SEMI statement)*`
    ///
    /// An identifier right after a statement means a separator is missing,
    /// e.g. `a := 1 b := 2`; it is reported here rather than as a missing
    /// `END`.
    fn statement_list(&mut self) -> ParseResult<Vec<Statement>> {
        let mut statements = vec![self.statement()?];

        while self.current().kind == TokenKind::Semi {
            self.advance()?;
            statements.push(self.statement()?);
        }

        if matches!(self.current().kind, TokenKind::Id(_)) {
            return Err(self.unexpected("';' or 'END'"));
        }

        Ok(statements)
    }

    /// Parses a single statement.
    ///
    /// Grammar:
    /// ```text
    ///     statement := compound_statement
    ///                | assignment_statement
    ///                | empty
    /// ```
    fn statement(&mut self) -> ParseResult<Statement> {
        match self.current().kind {
            TokenKind::Begin => Ok(Statement::Compound(self.compound_statement()?)),
            TokenKind::Id(_) => Ok(Statement::Assign(self.assignment_statement()?)),
            _ => Ok(Statement::NoOp),
        }
    }

    /// Grammar: `assignment_statement := variable ASSIGN expr`
    fn assignment_statement(&mut self) -> ParseResult<Assign> {
        let target = self.variable()?;
        let position = self.eat(&TokenKind::Assign)?.position;
        let value = self.expr()?;

        Ok(Assign { target,
                    value,
                    position })
    }

    /// Grammar: `variable := ID`
    pub(in crate::interpreter::parser) fn variable(&mut self) -> ParseResult<Variable> {
        let (name, position) = self.eat_identifier()?;
        Ok(Variable { name, position })
    }
}
