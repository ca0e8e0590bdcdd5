//! Unit tests for the lexer module.
//!
//! Covers keywords and their synonyms, names, numbers in their three
//! spellings, subscripts, operators and the error cases.

use super::{lexer::tokenize, tokens::TokenKind};
use crate::errors::errors::{ErrorImpl, ErrorKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).unwrap().iter().map(|token| token.kind).collect()
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("sum product integrate derivate from to of left right limit at when approaches approx").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Sum);
    assert_eq!(tokens[1].kind, TokenKind::Product);
    assert_eq!(tokens[2].kind, TokenKind::Integrate);
    assert_eq!(tokens[3].kind, TokenKind::Derivate);
    assert_eq!(tokens[4].kind, TokenKind::From);
    assert_eq!(tokens[5].kind, TokenKind::To);
    assert_eq!(tokens[6].kind, TokenKind::Of);
    assert_eq!(tokens[7].kind, TokenKind::Left);
    assert_eq!(tokens[8].kind, TokenKind::Right);
    assert_eq!(tokens[9].kind, TokenKind::Limit);
    assert_eq!(tokens[10].kind, TokenKind::At);
    assert_eq!(tokens[11].kind, TokenKind::When);
    assert_eq!(tokens[12].kind, TokenKind::Approaches);
    assert_eq!(tokens[13].kind, TokenKind::Approx);
    assert_eq!(tokens[14].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_synonyms() {
    assert_eq!(
        kinds("integral antiderivative antiderivatives"),
        vec![TokenKind::Integrate, TokenKind::Integrate, TokenKind::Integrate, TokenKind::EOF]
    );
    assert_eq!(
        kinds("derivative differentiate differential differentials"),
        vec![TokenKind::Derivate, TokenKind::Derivate, TokenKind::Derivate, TokenKind::Derivate, TokenKind::EOF]
    );
    assert_eq!(kinds("sums lim"), vec![TokenKind::Sum, TokenKind::Limit, TokenKind::EOF]);
    assert_eq!(
        kinds("approximate evaluate numeric"),
        vec![TokenKind::Approx, TokenKind::Approx, TokenKind::Approx, TokenKind::EOF]
    );
}

#[test]
fn test_tokenize_keywords_case_insensitive() {
    let tokens = tokenize("SUM Integral OF").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Sum);
    assert_eq!(tokens[0].value, "SUM");
    assert_eq!(tokens[1].kind, TokenKind::Integrate);
    assert_eq!(tokens[2].kind, TokenKind::Of);
}

#[test]
fn test_tokenize_names() {
    let tokens = tokenize("x foo Bar2 sumx").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Name);
    assert_eq!(tokens[0].value, "x");
    assert_eq!(tokens[1].value, "foo");
    assert_eq!(tokens[2].kind, TokenKind::Name);
    assert_eq!(tokens[2].value, "Bar2");
    // A keyword only matches as a whole word.
    assert_eq!(tokens[3].kind, TokenKind::Name);
    assert_eq!(tokens[3].value, "sumx");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 3.14 1,5 .5 0").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].value, "1,5");
    assert_eq!(tokens[3].value, ".5");
    assert_eq!(tokens[4].value, "0");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_negative_number() {
    let tokens = tokenize("-3 * x").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "-3");
    assert_eq!(tokens[1].kind, TokenKind::Infix);

    let tokens = tokenize("x*-2").unwrap();
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].value, "-2");
}

#[test]
fn test_tokenize_minus_after_operand_is_infix() {
    assert_eq!(
        kinds("x-1"),
        vec![TokenKind::Name, TokenKind::Infix, TokenKind::Number, TokenKind::EOF]
    );
    assert_eq!(
        kinds("(x) -1"),
        vec![
            TokenKind::LeftParen,
            TokenKind::Name,
            TokenKind::RightParen,
            TokenKind::Infix,
            TokenKind::Number,
            TokenKind::EOF
        ]
    );
}

#[test]
fn test_tokenize_subscript() {
    let tokens = tokenize("x_12").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Name);
    assert_eq!(tokens[1].kind, TokenKind::Underscore);
    assert_eq!(tokens[2].kind, TokenKind::Natural);
    assert_eq!(tokens[2].value, "12");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_natural_only_after_underscore() {
    assert_eq!(kinds("12"), vec![TokenKind::Number, TokenKind::EOF]);
    // Naturals have no leading zero, so this falls back to a number.
    assert_eq!(
        kinds("x_0"),
        vec![TokenKind::Name, TokenKind::Underscore, TokenKind::Number, TokenKind::EOF]
    );
}

#[test]
fn test_tokenize_operators() {
    let tokens = tokenize("a - b + c * d / e ^ f !").unwrap();

    let operators: Vec<&str> = tokens
        .iter()
        .filter(|token| token.kind == TokenKind::Infix)
        .map(|token| token.value.as_str())
        .collect();
    assert_eq!(operators, vec!["-", "+", "*", "/", "^"]);
    assert_eq!(tokens[11].kind, TokenKind::Postfix);
    assert_eq!(tokens[11].value, "!");
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("f(x, y)"),
        vec![
            TokenKind::Name,
            TokenKind::LeftParen,
            TokenKind::Name,
            TokenKind::Comma,
            TokenKind::Name,
            TokenKind::RightParen,
            TokenKind::EOF
        ]
    );
}

#[test]
fn test_tokenize_comma_needs_integer_part() {
    assert_eq!(
        kinds("f(x,5)"),
        vec![
            TokenKind::Name,
            TokenKind::LeftParen,
            TokenKind::Name,
            TokenKind::Comma,
            TokenKind::Number,
            TokenKind::RightParen,
            TokenKind::EOF
        ]
    );

    let tokens = tokenize(",5").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Comma);
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].value, "5");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_spans() {
    let tokens = tokenize("sum  ab").unwrap();

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 3);
    assert_eq!(tokens[1].span.start.0, 5);
    assert_eq!(tokens[1].span.end.0, 7);
    assert_eq!(tokens[2].span.start.0, 7);
}

#[test]
fn test_tokenize_empty() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
    assert_eq!(kinds("   "), vec![TokenKind::EOF]);
}

#[test]
fn test_tokenize_unrecognized_token() {
    let error = tokenize("x + $").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Lex);
    assert_eq!(error.get_position().0, 4);
    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnrecognisedToken { token: "$".to_string() }
    );
}

#[test]
fn test_tokenize_rejects_other_whitespace() {
    assert!(tokenize("x\ty").is_err());
    assert!(tokenize("x\n").is_err());
}

#[test]
fn test_tokenize_rejects_non_ascii() {
    let error = tokenize("x + é").unwrap_err();
    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnrecognisedToken { token: "é".to_string() }
    );
}
