use logos::{Lexer, Logos, Skip};
use tracing::{debug, instrument};

use crate::{
    diagnostics::Diagnostics,
    error::LexicalError,
    interpreter::token::{Literal, Token, TokenKind},
};

/// Raw token recognized by the logos state machine.
///
/// Trivia (newlines and comments) are variants too, because their callbacks
/// have to keep the line bookkeeping in [`LexerExtras`] up to date; they are
/// skipped by those callbacks and never reach [`scan`].
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(extras = LexerExtras)]
#[logos(error = LexicalError)]
#[logos(skip r"[ \t\r\f]+")]
pub enum RawToken {
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `{`
    #[token("{")]
    LeftBrace,
    /// `}`
    #[token("}")]
    RightBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `/`
    #[token("/")]
    Slash,
    /// `*`
    #[token("*")]
    Star,
    /// `:`
    #[token(":")]
    Colon,
    /// `.`
    #[token(".")]
    Dot,
    /// `..`
    #[token("..")]
    DotDot,
    /// `-`
    #[token("-")]
    Minus,
    /// `--`
    #[token("--")]
    MinusMinus,
    /// `+`
    #[token("+")]
    Plus,
    /// `++`
    #[token("++")]
    PlusPlus,
    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `=`
    #[token("=")]
    Equal,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `?`
    #[token("?")]
    Question,
    /// `??`
    #[token("??")]
    QuestionQuestion,
    /// `?.`
    #[token("?.")]
    QuestionDot,

    /// String literal tokens such as `"hello"`. May span several lines.
    #[token("\"", scan_string)]
    String,
    /// Number literal tokens such as `10` or `2.5`.
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,
    /// Identifier tokens such as `total` or `_tmp1`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Identifier,

    #[token("and")]
    And,
    #[token("break")]
    Break,
    #[token("class")]
    Class,
    #[token("continue")]
    Continue,
    #[token("do")]
    Do,
    #[token("else")]
    Else,
    #[token("false")]
    False,
    #[token("for")]
    For,
    #[token("fun")]
    Fun,
    #[token("if")]
    If,
    #[token("nil")]
    Nil,
    #[token("or")]
    Or,
    #[token("print")]
    Print,
    #[token("return")]
    Return,
    #[token("super")]
    Super,
    #[token("this")]
    This,
    #[token("true")]
    True,
    #[token("var")]
    Var,
    #[token("while")]
    While,

    /// `// Comments.`
    #[token("//", skip_line_comment)]
    LineComment,
    /// `/* Block comments, possibly spanning lines. */`
    #[token("/*", skip_block_comment)]
    BlockComment,
    #[token("\n", skip_newline)]
    NewLine,
}

impl RawToken {
    /// Maps a raw token to its public kind, or `None` for trivia.
    #[must_use]
    pub const fn kind(self) -> Option<TokenKind> {
        Some(match self {
            Self::LeftParen => TokenKind::LeftParen,
            Self::RightParen => TokenKind::RightParen,
            Self::LeftBrace => TokenKind::LeftBrace,
            Self::RightBrace => TokenKind::RightBrace,
            Self::Comma => TokenKind::Comma,
            Self::Semicolon => TokenKind::Semicolon,
            Self::Slash => TokenKind::Slash,
            Self::Star => TokenKind::Star,
            Self::Colon => TokenKind::Colon,
            Self::Dot => TokenKind::Dot,
            Self::DotDot => TokenKind::DotDot,
            Self::Minus => TokenKind::Minus,
            Self::MinusMinus => TokenKind::MinusMinus,
            Self::Plus => TokenKind::Plus,
            Self::PlusPlus => TokenKind::PlusPlus,
            Self::Bang => TokenKind::Bang,
            Self::BangEqual => TokenKind::BangEqual,
            Self::Equal => TokenKind::Equal,
            Self::EqualEqual => TokenKind::EqualEqual,
            Self::Greater => TokenKind::Greater,
            Self::GreaterEqual => TokenKind::GreaterEqual,
            Self::Less => TokenKind::Less,
            Self::LessEqual => TokenKind::LessEqual,
            Self::Question => TokenKind::Question,
            Self::QuestionQuestion => TokenKind::QuestionQuestion,
            Self::QuestionDot => TokenKind::QuestionDot,
            Self::String => TokenKind::String,
            Self::Number => TokenKind::Number,
            Self::Identifier => TokenKind::Identifier,
            Self::And => TokenKind::And,
            Self::Break => TokenKind::Break,
            Self::Class => TokenKind::Class,
            Self::Continue => TokenKind::Continue,
            Self::Do => TokenKind::Do,
            Self::Else => TokenKind::Else,
            Self::False => TokenKind::False,
            Self::For => TokenKind::For,
            Self::Fun => TokenKind::Fun,
            Self::If => TokenKind::If,
            Self::Nil => TokenKind::Nil,
            Self::Or => TokenKind::Or,
            Self::Print => TokenKind::Print,
            Self::Return => TokenKind::Return,
            Self::Super => TokenKind::Super,
            Self::This => TokenKind::This,
            Self::True => TokenKind::True,
            Self::Var => TokenKind::Var,
            Self::While => TokenKind::While,
            Self::LineComment | Self::BlockComment | Self::NewLine => return None,
        })
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line and the byte offset where it starts, so that a
/// 1-based column can be derived for any span. Both are updated only when a
/// newline character is consumed.
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

impl LexerExtras {
    /// Returns the 1-based column of the byte `offset` on the current line.
    #[must_use]
    pub fn column_of(&self, source: &str, offset: usize) -> usize {
        source.get(self.line_start..offset)
              .map_or(1, |text| text.chars().count() + 1)
    }

    /// Advances the line bookkeeping past every newline in `text`, which
    /// starts at byte `start` of the source.
    pub fn consume_newlines(&mut self, text: &str, start: usize) {
        for (index, _) in text.match_indices('\n') {
            self.line += 1;
            self.line_start = start + index + 1;
        }
    }
}

fn skip_newline(lex: &mut Lexer<RawToken>) -> Skip {
    lex.extras.line += 1;
    lex.extras.line_start = lex.span().end;
    Skip
}

fn skip_line_comment(lex: &mut Lexer<RawToken>) -> Skip {
    let remainder = lex.remainder();
    lex.bump(remainder.find('\n').unwrap_or(remainder.len()));
    Skip
}

/// Block comments do not nest; one left open runs to the end of the input.
fn skip_block_comment(lex: &mut Lexer<RawToken>) -> Skip {
    let remainder = lex.remainder();
    lex.bump(remainder.find("*/").map_or(remainder.len(), |end| end + 2));

    let (text, start) = (lex.slice(), lex.span().start);
    lex.extras.consume_newlines(text, start);
    Skip
}

/// Consumes a string body up to the closing quote.
///
/// Newlines inside the literal are left for [`scan`] to account for, after it
/// has recorded the position of the opening quote.
fn scan_string(lex: &mut Lexer<RawToken>) -> Result<(), LexicalError> {
    let remainder = lex.remainder();
    if let Some(end) = remainder.find('"') {
        lex.bump(end + 1);
        Ok(())
    } else {
        lex.bump(remainder.len());
        Err(LexicalError::UnterminatedString)
    }
}

/// Parses the literal payload for literal-bearing kinds.
fn literal_for(kind: TokenKind, lexeme: &str) -> Option<Literal> {
    match kind {
        TokenKind::Number => lexeme.parse().ok().map(Literal::Number),
        TokenKind::String => {
            lexeme.get(1..lexeme.len() - 1)
                  .map(|body| Literal::String(body.to_string()))
        },
        _ => None,
    }
}

/// Scans `source` into a token sequence terminated by [`TokenKind::Eof`].
///
/// Scanning never fails outright. Each unrecognized character and each
/// unterminated string is reported to `diagnostics` and skipped, so one call
/// can surface several lexical errors.
///
/// # Example
/// ```
/// use treelox::{
///     diagnostics::Diagnostics,
///     interpreter::{lexer::scan, token::TokenKind},
/// };
///
/// let mut diagnostics = Diagnostics::new();
/// let tokens = scan("var a = 10;", &mut diagnostics);
///
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Var,
///             TokenKind::Identifier,
///             TokenKind::Equal,
///             TokenKind::Number,
///             TokenKind::Semicolon,
///             TokenKind::Eof]);
/// assert!(!diagnostics.had_error());
/// ```
#[instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn scan(source: &str, diagnostics: &mut Diagnostics) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer_with_extras(source, LexerExtras::default());

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let lexeme = lexer.slice();
        let line = lexer.extras.line;
        let column = lexer.extras.column_of(source, span.start);

        match result {
            Ok(raw) => {
                if let Some(kind) = raw.kind() {
                    tokens.push(Token::new(kind, lexeme, literal_for(kind, lexeme), line, column));
                }
            },
            Err(error) => diagnostics.error(line, column, error.describe(lexeme)),
        }

        lexer.extras.consume_newlines(lexeme, span.start);
    }

    let line = lexer.extras.line;
    let column = lexer.extras.column_of(source, source.len());
    tokens.push(Token::eof(line, column));

    debug!(count = tokens.len(), "scanned tokens");
    tokens
}
