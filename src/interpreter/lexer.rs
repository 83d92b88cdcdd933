use std::{
    io::{BufRead, Cursor},
    mem::discriminant,
};

use logos::Logos;
use ordered_float::OrderedFloat;

use crate::error::LexError;

/// Result type used by the token stream.
pub type LexResult<T> = Result<T, LexError>;

/// Represents a lexical token in the calculator input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone)]
#[logos(skip r"[ \t\f\r\n]+")]
pub enum Token {
    /// Numeric literal tokens, such as `3.14`, `.5`, `2.`, `7` or `2.1e-10`.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(OrderedFloat<f64>),
    /// `let`
    #[token("let")]
    Let,
    /// `exit`
    #[token("exit")]
    Quit,
    /// Identifier tokens such as `x` or `rate2`.
    ///
    /// An uppercase `R` always lexes as the root operator, so identifiers never
    /// start with it.
    #[regex(r"[A-QS-Za-z][A-Za-z0-9]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `;`
    #[token(";")]
    Print,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `R`
    #[token("R")]
    Root,
    /// `!`
    #[token("!")]
    Bang,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `?`
    #[token("?")]
    Help,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Identifier(name) => write!(f, "'{name}'"),
            Self::Let => write!(f, "'let'"),
            Self::Quit => write!(f, "'exit'"),
            Self::Print => write!(f, "';'"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::Percent => write!(f, "'%'"),
            Self::Caret => write!(f, "'^'"),
            Self::Root => write!(f, "'R'"),
            Self::Bang => write!(f, "'!'"),
            Self::Equals => write!(f, "'='"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::LBrace => write!(f, "'{{'"),
            Self::RBrace => write!(f, "'}}'"),
            Self::Help => write!(f, "'?'"),
        }
    }
}

/// Parses a floating-point literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(OrderedFloat<f64>)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<OrderedFloat<f64>> {
    lex.slice().parse().ok().map(OrderedFloat)
}

/// A pull-based stream of tokens over a line-oriented character source.
///
/// The stream reads one line at a time from its reader and hands out tokens on
/// demand, so an interactive session only blocks when the grammar actually
/// needs another token. One token can be pushed back to be read again by the
/// next [`TokenStream::get`].
///
/// Tokens never span lines: numbers and identifiers end at whitespace, and a
/// line break is whitespace.
pub struct TokenStream<R> {
    source:   R,
    buffer:   String,
    position: usize,
    line:     usize,
    pushback: Option<Token>,
}

impl TokenStream<Cursor<String>> {
    /// Creates a token stream over an in-memory string.
    ///
    /// # Example
    /// ```
    /// use deskcalc::interpreter::lexer::{Token, TokenStream};
    ///
    /// let mut tokens = TokenStream::from_source("let x");
    /// assert_eq!(tokens.get().unwrap(), Some(Token::Let));
    /// assert_eq!(tokens.get().unwrap(), Some(Token::Identifier("x".into())));
    /// assert_eq!(tokens.get().unwrap(), None);
    /// ```
    #[must_use]
    pub fn from_source(source: &str) -> Self {
        Self::new(Cursor::new(source.to_string()))
    }
}

impl<R: BufRead> TokenStream<R> {
    /// Creates a token stream that reads from `source`.
    pub fn new(source: R) -> Self {
        Self { source,
               buffer: String::new(),
               position: 0,
               line: 0,
               pushback: None }
    }

    /// The line the stream is currently reading, starting at 1.
    ///
    /// Before anything has been read this is `0`.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns the next token.
    ///
    /// A token waiting in the pushback buffer is returned first. Otherwise
    /// whitespace is skipped, reading further lines as needed, and the next
    /// lexeme is classified.
    ///
    /// # Returns
    /// - `Ok(Some(token))` for the next token.
    /// - `Ok(None)` once the source is exhausted.
    ///
    /// # Errors
    /// - `LexError::BadToken` if the next character starts no token. The
    ///   character is consumed, so the following call continues after it.
    /// - `LexError::Io` if reading the source fails.
    ///
    /// # Example
    /// ```
    /// use deskcalc::{
    ///     error::LexError,
    ///     interpreter::lexer::{Token, TokenStream},
    /// };
    ///
    /// let mut tokens = TokenStream::from_source("8R3 $");
    /// assert_eq!(tokens.get().unwrap(), Some(Token::Number(8.0.into())));
    /// assert_eq!(tokens.get().unwrap(), Some(Token::Root));
    /// assert_eq!(tokens.get().unwrap(), Some(Token::Number(3.0.into())));
    /// assert!(matches!(tokens.get(), Err(LexError::BadToken { .. })));
    /// assert_eq!(tokens.get().unwrap(), None);
    /// ```
    pub fn get(&mut self) -> LexResult<Option<Token>> {
        if let Some(token) = self.pushback.take() {
            return Ok(Some(token));
        }

        loop {
            if self.position >= self.buffer.len() && !self.fill()? {
                return Ok(None);
            }

            let (lexed, consumed) = {
                let rest = &self.buffer[self.position..];
                let mut lexer = Token::lexer(rest);
                match lexer.next() {
                    None => (None, rest.len()),
                    Some(Ok(token)) => (Some(Ok(token)), lexer.span().end),
                    Some(Err(())) => {
                        let span = lexer.span();
                        let mut end = span.end.max(span.start + 1);
                        while !rest.is_char_boundary(end) {
                            end += 1;
                        }
                        (Some(Err(rest[span.start..end].to_string())), end)
                    },
                }
            };
            self.position += consumed;

            match lexed {
                None => {},
                Some(Ok(token)) => return Ok(Some(token)),
                Some(Err(token)) => {
                    return Err(LexError::BadToken { token,
                                                    line: self.line });
                },
            }
        }
    }

    /// Puts a token back so that the next [`TokenStream::get`] returns it.
    ///
    /// # Errors
    /// Returns `LexError::PutbackFull` if a token is already waiting.
    ///
    /// # Example
    /// ```
    /// use deskcalc::{
    ///     error::LexError,
    ///     interpreter::lexer::{Token, TokenStream},
    /// };
    ///
    /// let mut tokens = TokenStream::from_source("");
    /// tokens.putback(Token::Plus).unwrap();
    /// assert!(matches!(tokens.putback(Token::Minus), Err(LexError::PutbackFull { .. })));
    /// assert_eq!(tokens.get().unwrap(), Some(Token::Plus));
    /// ```
    pub fn putback(&mut self, token: Token) -> LexResult<()> {
        if self.pushback.is_some() {
            return Err(LexError::PutbackFull { line: self.line });
        }
        self.pushback = Some(token);
        Ok(())
    }

    /// Discards tokens up to and including the next one of the same kind as
    /// `kind`.
    ///
    /// Kinds compare by variant only, so any `Token::Number` matches any other.
    /// The pushback buffer is checked first and always left empty. Bad
    /// characters met while discarding are skipped. Stops quietly when the
    /// input ends.
    ///
    /// # Errors
    /// Returns `LexError::Io` if reading the source fails.
    ///
    /// # Example
    /// ```
    /// use deskcalc::interpreter::lexer::{Token, TokenStream};
    ///
    /// let mut tokens = TokenStream::from_source("1 + $ ) ; 2");
    /// tokens.ignore(&Token::Print).unwrap();
    /// assert_eq!(tokens.get().unwrap(), Some(Token::Number(2.0.into())));
    /// ```
    pub fn ignore(&mut self, kind: &Token) -> LexResult<()> {
        if let Some(token) = self.pushback.take()
           && discriminant(&token) == discriminant(kind)
        {
            return Ok(());
        }

        loop {
            match self.get() {
                Ok(Some(token)) if discriminant(&token) == discriminant(kind) => return Ok(()),
                Ok(Some(_)) | Err(LexError::BadToken { .. }) => {},
                Ok(None) => return Ok(()),
                Err(e) => return Err(e),
            }
        }
    }

    /// Replaces the line buffer with the next line of the source.
    ///
    /// Returns `false` once the source is exhausted.
    fn fill(&mut self) -> LexResult<bool> {
        self.buffer.clear();
        self.position = 0;
        if self.source.read_line(&mut self.buffer)? == 0 {
            return Ok(false);
        }
        self.line += 1;
        Ok(true)
    }
}
