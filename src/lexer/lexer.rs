use lazy_static::lazy_static;
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &str);
pub type RegexGuard = fn(&Lexer) -> bool;

pub struct RegexPattern {
    regex: Regex,
    guard: Option<RegexGuard>,
    handler: RegexHandler,
}

impl RegexPattern {
    fn new(regex: &str, guard: Option<RegexGuard>, handler: RegexHandler) -> Self {
        RegexPattern {
            regex: Regex::new(&format!("^(?:{})", regex)).expect("lexer pattern must compile"),
            guard,
            handler,
        }
    }
}

const DECIMAL: &str = "[0-9]+[.,][0-9]+|\\.[0-9]+|[0-9]+";

lazy_static! {
    // Tried in order; the first pattern whose guard passes and which matches
    // at the current position wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern::new(" +", None, skip_handler),
        RegexPattern::new("[a-zA-Z][a-zA-Z0-9]*", None, symbol_handler),
        RegexPattern::new("[1-9][0-9]*", Some(follows_underscore), MK_DEFAULT_HANDLER!(TokenKind::Natural)),
        RegexPattern::new(&format!("-(?:{})", DECIMAL), Some(expects_operand), MK_DEFAULT_HANDLER!(TokenKind::Number)),
        RegexPattern::new(DECIMAL, None, MK_DEFAULT_HANDLER!(TokenKind::Number)),
        RegexPattern::new("\\(", None, MK_DEFAULT_HANDLER!(TokenKind::LeftParen)),
        RegexPattern::new("\\)", None, MK_DEFAULT_HANDLER!(TokenKind::RightParen)),
        RegexPattern::new("_", None, MK_DEFAULT_HANDLER!(TokenKind::Underscore)),
        RegexPattern::new(",", None, MK_DEFAULT_HANDLER!(TokenKind::Comma)),
        RegexPattern::new("!", None, MK_DEFAULT_HANDLER!(TokenKind::Postfix)),
        RegexPattern::new("[-+*/^]", None, MK_DEFAULT_HANDLER!(TokenKind::Infix)),
    ];
}

/// Per-call lexing state.
pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            tokens: vec![],
            source: String::from(source),
            pos: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn last_kind(&self) -> Option<TokenKind> {
        self.tokens.last().map(|token| token.kind)
    }
}

fn follows_underscore(lexer: &Lexer) -> bool {
    lexer.last_kind() == Some(TokenKind::Underscore)
}

fn expects_operand(lexer: &Lexer) -> bool {
    !lexer.last_kind().is_some_and(|kind| kind.ends_operand())
}

fn skip_handler(lexer: &mut Lexer, matched: &str) {
    lexer.advance_n(matched.len());
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) {
    let span = Span {
        start: Position(lexer.pos as u32),
        end: Position((lexer.pos + matched.len()) as u32),
    };

    if let Some(kind) = RESERVED_LOOKUP.get(matched.to_lowercase().as_str()) {
        lexer.push(MK_TOKEN!(*kind, String::from(matched), span));
    } else {
        lexer.push(MK_TOKEN!(TokenKind::Name, String::from(matched), span));
    }

    lexer.advance_n(matched.len());
}

pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let mut matched = false;

        for pattern in PATTERNS.iter() {
            if let Some(guard) = pattern.guard {
                if !guard(&lex) {
                    continue;
                }
            }

            let found = pattern
                .regex
                .find(lex.remainder())
                .map(|found| String::from(found.as_str()));

            if let Some(text) = found {
                (pattern.handler)(&mut lex, &text);
                matched = true;
                break;
            }
        }

        if !matched {
            let token = lex.remainder().chars().next().map(String::from).unwrap_or_default();
            return Err(Error::new(ErrorImpl::UnrecognisedToken { token }, Position(lex.pos as u32)));
        }
    }

    let end = Position(lex.pos as u32);
    lex.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), Span { start: end, end }));
    Ok(lex.tokens)
}
