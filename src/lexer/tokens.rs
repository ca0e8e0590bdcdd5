use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    /// Surface words mapped onto keyword tokens. Keys are lower case; the
    /// lexer lower-cases a word before looking it up.
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("sum", TokenKind::Sum);
        map.insert("sums", TokenKind::Sum);
        map.insert("summation", TokenKind::Sum);
        map.insert("product", TokenKind::Product);
        map.insert("products", TokenKind::Product);
        map.insert("integrate", TokenKind::Integrate);
        map.insert("integral", TokenKind::Integrate);
        map.insert("integrals", TokenKind::Integrate);
        map.insert("antiderivative", TokenKind::Integrate);
        map.insert("antiderivatives", TokenKind::Integrate);
        map.insert("primitive", TokenKind::Integrate);
        map.insert("derivate", TokenKind::Derivate);
        map.insert("derivative", TokenKind::Derivate);
        map.insert("derivatives", TokenKind::Derivate);
        map.insert("differentiate", TokenKind::Derivate);
        map.insert("differential", TokenKind::Derivate);
        map.insert("differentials", TokenKind::Derivate);
        map.insert("from", TokenKind::From);
        map.insert("to", TokenKind::To);
        map.insert("of", TokenKind::Of);
        map.insert("left", TokenKind::Left);
        map.insert("right", TokenKind::Right);
        map.insert("limit", TokenKind::Limit);
        map.insert("limits", TokenKind::Limit);
        map.insert("lim", TokenKind::Limit);
        map.insert("at", TokenKind::At);
        map.insert("when", TokenKind::When);
        map.insert("approaches", TokenKind::Approaches);
        map.insert("approach", TokenKind::Approaches);
        map.insert("tends", TokenKind::Approaches);
        map.insert("approx", TokenKind::Approx);
        map.insert("approximate", TokenKind::Approx);
        map.insert("approximation", TokenKind::Approx);
        map.insert("approximately", TokenKind::Approx);
        map.insert("evaluate", TokenKind::Approx);
        map.insert("numeric", TokenKind::Approx);
        map.insert("numerical", TokenKind::Approx);
        map.insert("numerically", TokenKind::Approx);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Name,
    Natural,
    Number,

    LeftParen,
    RightParen,
    Underscore,
    Comma,

    Infix,   // - + * / ^
    Postfix, // !

    // Reserved
    Sum,
    Product,
    Integrate,
    Derivate,
    From,
    To,
    Of,
    Left,
    Right,
    Limit,
    At,
    When,
    Approaches,
    Approx,
}

impl TokenKind {
    /// Whether a token of this kind can end an operand. A `-` following
    /// one of these is subtraction rather than a sign.
    pub fn ends_operand(&self) -> bool {
        matches!(
            self,
            TokenKind::Name
                | TokenKind::Natural
                | TokenKind::Number
                | TokenKind::RightParen
                | TokenKind::Postfix
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Name | TokenKind::Natural | TokenKind::Number | TokenKind::Infix => {
                write!(f, "{} ({})", self.kind, self.value)
            }
            _ => write!(f, "{}", self.kind),
        }
    }
}
