use crate::{
    ast::Program,
    error::ParseError,
    interpreter::lexer::{Lexer, Token, TokenKind},
    util::position::Position,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Maximum nesting of parenthesized groups, unary operators and compound
/// statements.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Recursive-descent parser over an on-demand token stream.
///
/// The parser holds exactly one token of lookahead. Each grammar rule is a
/// method (spread over the sibling modules) that consumes precisely the
/// tokens of its rule through [`Parser::eat`].
pub struct Parser<'src> {
    lexer:   Lexer<'src>,
    current: Token,
    depth:   usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser and reads the first token.
    ///
    /// # Errors
    /// Returns `ParseError::Lexical` if the very first token cannot be
    /// scanned.
    pub fn new(mut lexer: Lexer<'src>) -> ParseResult<Self> {
        let current = lexer.next_token()?;
        Ok(Self { lexer,
                  current,
                  depth: 0 })
    }

    /// Parses a complete program.
    ///
    /// The whole token stream must be consumed: anything after the program's
    /// final `.` is an error.
    ///
    /// # Errors
    /// Returns a [`ParseError`] on the first token that does not fit the
    /// grammar, or a lexical error surfaced while reading ahead.
    ///
    /// # Example
    /// ```
    /// use pascalette::interpreter::{lexer::Lexer, parser::Parser};
    ///
    /// let mut parser = Parser::new(Lexer::new("PROGRAM P; BEGIN END.")).unwrap();
    /// let program = parser.parse().unwrap();
    /// assert_eq!(program.name, "P");
    ///
    /// let mut parser = Parser::new(Lexer::new("PROGRAM P; BEGIN END. x")).unwrap();
    /// assert!(parser.parse().is_err());
    /// ```
    pub fn parse(&mut self) -> ParseResult<Program> {
        let program = self.program()?;

        if self.current.kind != TokenKind::Eof {
            return Err(ParseError::UnexpectedTrailingTokens { token:    self.current
                                                                            .kind
                                                                            .to_string(),
                                                              position: self.current.position, });
        }

        tracing::debug!(program = %program.name,
                        declarations = program.block.declarations.len(),
                        "parsed program");
        Ok(program)
    }

    /// The token under the cursor.
    pub(in crate::interpreter::parser) const fn current(&self) -> &Token {
        &self.current
    }

    /// Consumes the current token unconditionally and returns it.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> ParseResult<Token> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Consumes the current token if it is of the `expected` kind.
    ///
    /// Literal values are ignored when comparing kinds.
    pub(in crate::interpreter::parser) fn eat(&mut self,
                                              expected: &TokenKind)
                                              -> ParseResult<Token> {
        if self.current.kind.same_kind(expected) {
            self.advance()
        } else {
            Err(self.unexpected(expected.to_string()))
        }
    }

    /// Consumes an identifier and returns its name and position.
    pub(in crate::interpreter::parser) fn eat_identifier(&mut self)
                                                         -> ParseResult<(String, Position)> {
        let position = self.current.position;
        if let TokenKind::Id(name) = &self.current.kind {
            let name = name.clone();
            self.advance()?;
            return Ok((name, position));
        }
        Err(self.unexpected("an identifier"))
    }

    /// Builds the error for the current token not being `expected`.
    pub(in crate::interpreter::parser) fn unexpected(&self,
                                                     expected: impl Into<String>)
                                                     -> ParseError {
        let expected = expected.into();
        let position = self.current.position;

        if self.current.kind == TokenKind::Eof {
            ParseError::UnexpectedEndOfInput { expected, position }
        } else {
            ParseError::UnexpectedToken { expected,
                                          found: self.current.kind.to_string(),
                                          position }
        }
    }

    /// Runs `parse` one nesting level deeper, failing once
    /// [`MAX_NESTING_DEPTH`] is exceeded.
    pub(in crate::interpreter::parser) fn nested<T>(&mut self,
                                                    parse: impl FnOnce(&mut Self) -> ParseResult<T>)
                                                    -> ParseResult<T> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep { limit:    MAX_NESTING_DEPTH,
                                                    position: self.current.position, });
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }
}
