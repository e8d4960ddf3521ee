use std::fmt;

/// The closed set of token kinds produced by the scanner.
///
/// Several kinds (`Dot`, `PlusPlus`, `Question`, the `class`/`fun`/loop
/// keywords, ...) are recognized so that the scanner covers the whole lexical
/// surface of the language, even though the parser only consumes a subset of
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Single-character tokens.
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Semicolon,
    Slash,
    Star,
    Colon,

    // One or two character tokens.
    Dot,
    DotDot,
    Minus,
    MinusMinus,
    Plus,
    PlusPlus,
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
    Question,
    QuestionQuestion,
    QuestionDot,

    // Literals.
    Identifier,
    String,
    Number,

    // Keywords.
    And,
    Break,
    Class,
    Continue,
    Do,
    Else,
    False,
    For,
    Fun,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    Eof,
}

impl TokenKind {
    /// Returns `true` for kinds that open a new declaration or statement.
    ///
    /// The parser stops discarding tokens at one of these while recovering
    /// from a syntax error.
    #[must_use]
    pub const fn starts_statement(self) -> bool {
        matches!(self,
                 Self::Class
                 | Self::Fun
                 | Self::Var
                 | Self::For
                 | Self::If
                 | Self::While
                 | Self::Print
                 | Self::Return)
    }
}

/// The parsed value carried by literal-bearing tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// A number literal such as `10` or `2.5`.
    Number(f64),
    /// A string literal, without its surrounding quotes.
    String(String),
}

/// A single lexical unit.
///
/// Tokens are created once by the scanner and never mutated. `line` and
/// `column` are both 1-based; `column` points at the first character of the
/// lexeme.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind:    TokenKind,
    /// The exact source text of the token.
    pub lexeme:  String,
    pub literal: Option<Literal>,
    pub line:    usize,
    pub column:  usize,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind,
               lexeme: impl Into<String>,
               literal: Option<Literal>,
               line: usize,
               column: usize)
               -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               literal,
               line,
               column }
    }

    /// Builds the end-of-input marker for the given position.
    #[must_use]
    pub fn eof(line: usize, column: usize) -> Self {
        Self::new(TokenKind::Eof, "", None, line, column)
    }

    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.literal {
            Some(Literal::Number(n)) => write!(f, "{:?} {} {n}", self.kind, self.lexeme),
            Some(Literal::String(s)) => write!(f, "{:?} {} {s}", self.kind, self.lexeme),
            None => write!(f, "{:?} {}", self.kind, self.lexeme),
        }
    }
}
