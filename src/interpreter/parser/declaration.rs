use crate::{
    ast::{Block, Declaration, ProcedureDecl, Program, TypeSpec, VarDecl},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses the whole program.
    ///
    /// Grammar: `program := PROGRAM variable SEMI block DOT`
    pub(in crate::interpreter::parser) fn program(&mut self) -> ParseResult<Program> {
        self.eat(&TokenKind::Program)?;
        let (name, position) = self.eat_identifier()?;
        self.eat(&TokenKind::Semi)?;
        let block = self.block()?;
        self.eat(&TokenKind::Dot)?;

        Ok(Program { name,
                     block,
                     position })
    }

    /// Parses declarations followed by the block's body.
    ///
    /// Grammar: `block := declarations compound_statement`
    fn block(&mut self) -> ParseResult<Block> {
        let declarations = self.declarations()?;
        let compound_statement = self.compound_statement()?;

        Ok(Block { declarations,
                   compound_statement })
    }

    /// Parses any number of `VAR` sections followed by any number of
    /// procedures.
    ///
    /// Grammar:
    /// ```text
    ///     declarations := (VAR (variable_declaration SEMI)+)*
    ///                     procedure_declaration*
    /// ```
    /// Each `VAR` must introduce at least one declaration.
    fn declarations(&mut self) -> ParseResult<Vec<Declaration>> {
        let mut declarations = Vec::new();

        while self.current().kind == TokenKind::Var {
            self.advance()?;
            loop {
                declarations.extend(self.variable_declaration()?
                                        .into_iter()
                                        .map(Declaration::Variable));
                self.eat(&TokenKind::Semi)?;

                if !matches!(self.current().kind, TokenKind::Id(_)) {
                    break;
                }
            }
        }

        while self.current().kind == TokenKind::Procedure {
            declarations.push(Declaration::Procedure(self.procedure_declaration()?));
        }

        Ok(declarations)
    }

    /// Parses one declaration line, producing a node per declared name.
    ///
    /// Grammar: `variable_declaration := ID (COMMA ID)* COLON type_spec`
    fn variable_declaration(&mut self) -> ParseResult<Vec<VarDecl>> {
        let mut names = vec![self.eat_identifier()?];

        while self.current().kind == TokenKind::Comma {
            self.advance()?;
            names.push(self.eat_identifier()?);
        }

        self.eat(&TokenKind::Colon)?;
        let type_spec = self.type_spec()?;

        Ok(names.into_iter()
                .map(|(name, position)| VarDecl { name,
                                                  type_spec,
                                                  position })
                .collect())
    }

    /// Grammar: `procedure_declaration := PROCEDURE ID SEMI block SEMI`
    fn procedure_declaration(&mut self) -> ParseResult<ProcedureDecl> {
        self.eat(&TokenKind::Procedure)?;
        let (name, position) = self.eat_identifier()?;
        self.eat(&TokenKind::Semi)?;
        let block = self.nested(Self::block)?;
        self.eat(&TokenKind::Semi)?;

        Ok(ProcedureDecl { name,
                           block,
                           position })
    }

    /// Grammar: `type_spec := INTEGER | REAL`
    fn type_spec(&mut self) -> ParseResult<TypeSpec> {
        let type_spec = match self.current().kind {
            TokenKind::Integer => TypeSpec::Integer,
            TokenKind::Real => TypeSpec::Real,
            _ => return Err(self.unexpected("a type ('INTEGER' or 'REAL')")),
        };
        self.advance()?;
        Ok(type_spec)
    }
}
