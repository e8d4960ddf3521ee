use pretty_assertions::assert_eq;
use treelox::{
    diagnostics::Diagnostics,
    interpreter::{
        lexer::scan,
        token::{Literal, Token, TokenKind},
    },
};

fn scan_ok(source: &str) -> Vec<Token> {
    let mut diagnostics = Diagnostics::new();
    let tokens = scan(source, &mut diagnostics);
    assert!(diagnostics.is_empty(), "unexpected diagnostics for {source:?}");
    tokens
}

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}

fn positions(tokens: &[Token]) -> Vec<(usize, usize)> {
    tokens.iter().map(|t| (t.line, t.column)).collect()
}

fn messages(diagnostics: &Diagnostics) -> Vec<String> {
    diagnostics.iter().map(ToString::to_string).collect()
}

#[test]
fn digits_scan_to_a_single_number() {
    for source in ["0", "7", "12345", "000042"] {
        let tokens = scan_ok(source);

        assert_eq!(kinds(&tokens), [TokenKind::Number, TokenKind::Eof]);
        let expected: f64 = source.parse().unwrap();
        assert_eq!(tokens[0].literal, Some(Literal::Number(expected)));
        assert_eq!(tokens[0].lexeme, source);
    }
}

#[test]
fn fractional_numbers() {
    let tokens = scan_ok("2.5 0.125");

    assert_eq!(kinds(&tokens),
               [TokenKind::Number, TokenKind::Number, TokenKind::Eof]);
    assert_eq!(tokens[0].literal, Some(Literal::Number(2.5)));
    assert_eq!(tokens[1].literal, Some(Literal::Number(0.125)));
}

#[test]
fn variable_declaration_tokens() {
    let tokens = scan_ok("var a = 10;");

    assert_eq!(kinds(&tokens),
               [TokenKind::Var,
                TokenKind::Identifier,
                TokenKind::Equal,
                TokenKind::Number,
                TokenKind::Semicolon,
                TokenKind::Eof]);
    assert_eq!(positions(&tokens), [(1, 1), (1, 5), (1, 7), (1, 9), (1, 11), (1, 12)]);
    assert_eq!(tokens[1].lexeme, "a");
    assert_eq!(tokens[3].literal, Some(Literal::Number(10.0)));
}

#[test]
fn one_and_two_character_operators() {
    let tokens = scan_ok("! != = == < <= > >= - -- + ++ . .. ? ?? ?. : , / *");

    assert_eq!(kinds(&tokens),
               [TokenKind::Bang,
                TokenKind::BangEqual,
                TokenKind::Equal,
                TokenKind::EqualEqual,
                TokenKind::Less,
                TokenKind::LessEqual,
                TokenKind::Greater,
                TokenKind::GreaterEqual,
                TokenKind::Minus,
                TokenKind::MinusMinus,
                TokenKind::Plus,
                TokenKind::PlusPlus,
                TokenKind::Dot,
                TokenKind::DotDot,
                TokenKind::Question,
                TokenKind::QuestionQuestion,
                TokenKind::QuestionDot,
                TokenKind::Colon,
                TokenKind::Comma,
                TokenKind::Slash,
                TokenKind::Star,
                TokenKind::Eof]);
}

#[test]
fn keywords_and_identifiers() {
    let tokens = scan_ok("or orchid while _while nil nil2 print");

    assert_eq!(kinds(&tokens),
               [TokenKind::Or,
                TokenKind::Identifier,
                TokenKind::While,
                TokenKind::Identifier,
                TokenKind::Nil,
                TokenKind::Identifier,
                TokenKind::Print,
                TokenKind::Eof]);
}

#[test]
fn string_literal_drops_quotes() {
    let tokens = scan_ok("\"hello world\"");

    assert_eq!(kinds(&tokens), [TokenKind::String, TokenKind::Eof]);
    assert_eq!(tokens[0].lexeme, "\"hello world\"");
    assert_eq!(tokens[0].literal, Some(Literal::String("hello world".to_string())));
}

#[test]
fn multi_line_string_advances_line() {
    let tokens = scan_ok("\"a\nb\" x");

    assert_eq!(kinds(&tokens),
               [TokenKind::String, TokenKind::Identifier, TokenKind::Eof]);
    assert_eq!(tokens[0].literal, Some(Literal::String("a\nb".to_string())));
    assert_eq!(positions(&tokens), [(1, 1), (2, 4), (2, 5)]);
}

#[test]
fn comments_are_skipped_and_lines_tracked() {
    let tokens = scan_ok("// note\n1 /* a\nb */ 2 // trailing");

    assert_eq!(kinds(&tokens),
               [TokenKind::Number, TokenKind::Number, TokenKind::Eof]);
    assert_eq!(&positions(&tokens)[..2], [(2, 1), (3, 6)]);
}

#[test]
fn slash_is_not_a_comment() {
    let tokens = scan_ok("8 / 2");

    assert_eq!(kinds(&tokens),
               [TokenKind::Number, TokenKind::Slash, TokenKind::Number, TokenKind::Eof]);
}

#[test]
fn unterminated_block_comment_runs_to_end() {
    let tokens = scan_ok("1 /* never closed\n2");

    assert_eq!(kinds(&tokens), [TokenKind::Number, TokenKind::Eof]);
}

#[test]
fn unexpected_characters_are_each_reported() {
    let mut diagnostics = Diagnostics::new();
    let tokens = scan("@ 1 #", &mut diagnostics);

    assert_eq!(kinds(&tokens), [TokenKind::Number, TokenKind::Eof]);
    assert!(diagnostics.had_error());
    assert_eq!(messages(&diagnostics),
               ["[line 1:1] Error: Unexpected character: @",
                "[line 1:5] Error: Unexpected character: #"]);
}

#[test]
fn unterminated_string_is_reported() {
    let mut diagnostics = Diagnostics::new();
    let tokens = scan("print \"abc", &mut diagnostics);

    assert_eq!(kinds(&tokens), [TokenKind::Print, TokenKind::Eof]);
    assert_eq!(messages(&diagnostics), ["[line 1:7] Error: Unterminated string."]);
}

#[test]
fn empty_source_is_just_end_of_input() {
    let tokens = scan_ok("");

    assert_eq!(kinds(&tokens), [TokenKind::Eof]);
    assert_eq!(positions(&tokens), [(1, 1)]);
}
