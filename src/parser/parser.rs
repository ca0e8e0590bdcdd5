//! Parser state and entry point.
//!
//! A `Parser` owns the token stream of one sentence and the cursor into it.
//! Handler tables are shared and read-only (see `lookups`), so each call to
//! `parse` is independent of any other.

use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span, MK_TOKEN,
};

use super::{expr::parse_expr, lookups::BindingPower};

/// Parsing state for a single sentence.
pub struct Parser {
    /// The tokens to parse, always terminated by `EOF`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens.last().map(|token| token.span.end).unwrap_or(Position(0));
            tokens.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), Span { start: end, end }));
        }

        Parser { tokens, pos: 0 }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the previous one. The cursor
    /// never moves past `EOF`.
    pub fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if token.kind != TokenKind::EOF {
            self.pos += 1;
        }
        token
    }

    /// Consumes the current token if it has the given kind.
    pub fn accept(&mut self, kind: TokenKind) -> bool {
        if self.current_token_kind() == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    /// The error to report for the current token when it fits nowhere.
    pub fn unexpected(&self) -> Error {
        let token = self.current_token();
        let error = if token.kind == TokenKind::EOF {
            ErrorImpl::UnexpectedEndOfInput
        } else {
            ErrorImpl::UnexpectedToken {
                token: token.value.clone(),
            }
        };

        Error::new(error, token.span.start)
    }

    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            Err(self.unexpected())
        } else {
            Ok(self.advance())
        }
    }

    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Position of the current token in the sentence.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start
    }
}

/// Parses a full token stream into one expression.
///
/// Fails if the stream does not form exactly one expression.
pub fn parse(tokens: Vec<Token>) -> Result<Expr, Error> {
    let mut parser = Parser::new(tokens);
    let expr = parse_expr(&mut parser, BindingPower::Default)?;

    if parser.has_tokens() {
        return Err(parser.unexpected());
    }

    Ok(expr)
}
