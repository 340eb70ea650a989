use std::fmt;

use logos::Logos;

use crate::{error::LexError, util::position::Position};

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// The kind of a lexical token, together with its literal value where it has
/// one.
///
/// The `logos` derive recognizes everything except [`TokenKind::Eof`], which
/// [`Lexer::next_token`] synthesizes once the source is exhausted. Reserved
/// words are matched case-insensitively; because `logos` always prefers the
/// longest match, `BEGINNING` still lexes as an identifier.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexErrorKind)]
pub enum TokenKind {
    /// Real literal tokens, such as `3.14`.
    #[regex(r"[0-9]+\.[0-9]+", parse_real)]
    RealConst(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    IntegerConst(i64),
    /// `PROGRAM`
    #[token("program", ignore(case))]
    Program,
    /// `VAR`
    #[token("var", ignore(case))]
    Var,
    /// `PROCEDURE`
    #[token("procedure", ignore(case))]
    Procedure,
    /// `INTEGER`
    #[token("integer", ignore(case))]
    Integer,
    /// `REAL`
    #[token("real", ignore(case))]
    Real,
    /// `BEGIN`
    #[token("begin", ignore(case))]
    Begin,
    /// `END`
    #[token("end", ignore(case))]
    End,
    /// `DIV`
    #[token("div", ignore(case))]
    IntegerDiv,
    /// Identifier tokens, kept exactly as written.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Id(String),
    /// `:=`
    #[token(":=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Mul,
    /// `/`
    #[token("/")]
    FloatDiv,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `;`
    #[token(";")]
    Semi,
    /// `.`
    #[token(".")]
    Dot,
    /// `:`
    #[token(":")]
    Colon,
    /// `,`
    #[token(",")]
    Comma,
    /// `{ Comments. }`, which may span several lines.
    #[regex(r"\{[^}]*\}", |lex| {
        let comment = lex.slice();
        if let Some(last) = comment.rfind('\n') {
            lex.extras.line += comment.matches('\n').count();
            lex.extras.line_start = lex.span().start + last + 1;
        }
        logos::Skip
    })]
    Comment,
    /// Line breaks.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
    /// End of input.
    Eof,
}

impl TokenKind {
    /// Returns `true` if both kinds are the same variant, ignoring any literal
    /// value they carry.
    ///
    /// ```
    /// use pascalette::interpreter::lexer::TokenKind;
    ///
    /// assert!(TokenKind::Id("a".into()).same_kind(&TokenKind::Id("b".into())));
    /// assert!(!TokenKind::Plus.same_kind(&TokenKind::Minus));
    /// ```
    #[must_use]
    pub fn same_kind(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RealConst(value) => write!(f, "real constant {value}"),
            Self::IntegerConst(value) => write!(f, "integer constant {value}"),
            Self::Id(name) => write!(f, "identifier '{name}'"),
            Self::Program => f.write_str("'PROGRAM'"),
            Self::Var => f.write_str("'VAR'"),
            Self::Procedure => f.write_str("'PROCEDURE'"),
            Self::Integer => f.write_str("'INTEGER'"),
            Self::Real => f.write_str("'REAL'"),
            Self::Begin => f.write_str("'BEGIN'"),
            Self::End => f.write_str("'END'"),
            Self::IntegerDiv => f.write_str("'DIV'"),
            Self::Assign => f.write_str("':='"),
            Self::Plus => f.write_str("'+'"),
            Self::Minus => f.write_str("'-'"),
            Self::Mul => f.write_str("'*'"),
            Self::FloatDiv => f.write_str("'/'"),
            Self::LParen => f.write_str("'('"),
            Self::RParen => f.write_str("')'"),
            Self::Semi => f.write_str("';'"),
            Self::Dot => f.write_str("'.'"),
            Self::Colon => f.write_str("':'"),
            Self::Comma => f.write_str("','"),
            Self::Comment => f.write_str("comment"),
            Self::NewLine => f.write_str("newline"),
            Self::Ignored => f.write_str("whitespace"),
            Self::Eof => f.write_str("end of input"),
        }
    }
}

/// A single lexical unit: its kind (and literal value), the source text it
/// was produced from, and where that text starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What was recognized.
    pub kind:     TokenKind,
    /// The exact source slice, e.g. `begin` for a lower-case `BEGIN`.
    pub lexeme:   String,
    /// Line and column of the first character.
    pub position: Position,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line and the byte offset at which it starts so that
/// every token can be given a line/column position.
#[derive(Debug)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// Failure kinds reported by the `logos` state machine. They are turned into
/// positioned [`LexError`]s by [`Lexer::next_token`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    /// No pattern matched at this point.
    #[default]
    Unrecognized,
    /// An integer literal does not fit into an `i64`.
    IntegerOutOfRange,
}

/// On-demand tokenizer over a source string.
///
/// The lexer never backtracks: every call to [`Lexer::next_token`] moves
/// strictly forward until it reports [`TokenKind::Eof`], which it then keeps
/// returning.
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, TokenKind>,
    done:  bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner: TokenKind::lexer(source),
               done:  false, }
    }

    /// Returns the next token, or an [`TokenKind::Eof`] token once the input
    /// is exhausted.
    ///
    /// # Errors
    /// Returns a [`LexError`] for characters that start no token, for an
    /// unterminated `{` comment, and for integer literals outside the `i64`
    /// range.
    ///
    /// # Example
    /// ```
    /// use pascalette::interpreter::lexer::{Lexer, TokenKind};
    ///
    /// let mut lexer = Lexer::new("a := 3.14");
    /// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Id("a".into()));
    /// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Assign);
    /// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::RealConst(3.14));
    /// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
    /// ```
    pub fn next_token(&mut self) -> LexResult<Token> {
        let Some(next) = self.inner.next() else {
            self.done = true;
            let end = self.inner.source().len();
            return Ok(Token { kind:     TokenKind::Eof,
                              lexeme:   String::new(),
                              position: self.position_at(end), });
        };

        let position = self.position_at(self.inner.span().start);
        let lexeme = self.inner.slice();

        match next {
            Ok(kind) => {
                tracing::trace!(%kind, %position, "lexed token");
                Ok(Token { kind,
                           lexeme: lexeme.to_string(),
                           position })
            },
            Err(LexErrorKind::IntegerOutOfRange) => {
                Err(LexError::IntegerOutOfRange { literal: lexeme.to_string(),
                                                  position })
            },
            Err(LexErrorKind::Unrecognized) if lexeme.starts_with('{') => {
                Err(LexError::UnterminatedComment { position })
            },
            Err(LexErrorKind::Unrecognized) => {
                let character = lexeme.chars().next().unwrap_or_default();
                Err(LexError::UnrecognizedCharacter { character, position })
            },
        }
    }

    fn position_at(&self, offset: usize) -> Position {
        let extras = &self.inner.extras;
        Position::new(extras.line, offset.saturating_sub(extras.line_start) + 1)
    }
}

impl Iterator for Lexer<'_> {
    type Item = LexResult<Token>;

    /// Yields tokens up to and including [`TokenKind::Eof`], or up to the
    /// first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let token = self.next_token();
        if token.is_err() {
            self.done = true;
        }
        Some(token)
    }
}

/// Parses a real literal from the current token slice.
fn parse_real(lex: &logos::Lexer<TokenKind>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an integer literal from the current token slice.
///
/// # Errors
/// `LexErrorKind::IntegerOutOfRange` if the literal does not fit an `i64`.
fn parse_integer(lex: &logos::Lexer<TokenKind>) -> Result<i64, LexErrorKind> {
    lex.slice()
       .parse()
       .map_err(|_| LexErrorKind::IntegerOutOfRange)
}
