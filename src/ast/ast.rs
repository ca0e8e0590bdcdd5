use std::{collections::BTreeSet, fmt::Display};

use crate::errors::errors::ErrorImpl;

use super::expressions::{
    ApproxExpr, BoundedExpr, CallExpr, DerivativeExpr, InfixExpr, LimitExpr, NumberExpr,
    ParenExpr, PostfixExpr, VariableExpr,
};

/// A node of the expression tree.
///
/// Trees are built bottom-up by the parser and never mutated afterwards.
/// Equality is structural.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Variable(VariableExpr),
    Number(NumberExpr),
    Paren(ParenExpr),
    Call(CallExpr),
    Infix(InfixExpr),
    Postfix(PostfixExpr),
    Bounded(BoundedExpr),
    Derivative(DerivativeExpr),
    Limit(LimitExpr),
    Approx(ApproxExpr),
}

impl Expr {
    /// Identifiers occurring in this subtree that no enclosing construct binds.
    pub fn free_vars(&self) -> BTreeSet<String> {
        crate::resolver::resolver::free_vars(self)
    }
}

/// A numeric literal, kept integral unless it was written with a decimal
/// separator.
///
/// Integers are never evaluated, so they keep their digits at any length.
#[derive(Debug, Clone, PartialEq)]
pub enum NumberValue {
    /// Canonical digits: optional `-`, no leading zeros, `0` unsigned.
    Integer(String),
    Float(f64),
}

impl NumberValue {
    pub fn integer(value: i64) -> NumberValue {
        NumberValue::Integer(value.to_string())
    }

    /// `1.5` and `1,5` are floats, `5` stays an integer.
    pub fn from_lexeme(lexeme: &str) -> Result<NumberValue, ErrorImpl> {
        let error = || ErrorImpl::NumberParseError {
            token: String::from(lexeme),
        };

        if lexeme.contains('.') {
            lexeme.parse().map(NumberValue::Float).map_err(|_| error())
        } else if lexeme.contains(',') {
            lexeme
                .replace(',', ".")
                .parse()
                .map(NumberValue::Float)
                .map_err(|_| error())
        } else {
            canonical_digits(lexeme)
                .map(NumberValue::Integer)
                .ok_or_else(error)
        }
    }
}

fn canonical_digits(lexeme: &str) -> Option<String> {
    let (negative, digits) = match lexeme.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, lexeme),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let digits = digits.trim_start_matches('0');
    Some(match (negative, digits.is_empty()) {
        (_, true) => String::from("0"),
        (true, false) => format!("-{}", digits),
        (false, false) => String::from(digits),
    })
}

impl Display for NumberValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumberValue::Integer(value) => write!(f, "{}", value),
            // Floats always keep a decimal point, so 2.0 does not read as 2.
            NumberValue::Float(value) if value.is_finite() && value.fract() == 0.0 => {
                write!(f, "{:.1}", value)
            }
            NumberValue::Float(value) => write!(f, "{}", value),
        }
    }
}

/// A variable name usable as a bound variable: non-empty, starting with a
/// letter, then letters, digits or subscript underscores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(String);

impl Identifier {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Identifier {
    type Error = ErrorImpl;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        let mut chars = name.chars();
        let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

        if valid {
            Ok(Identifier(name))
        } else {
            Err(ErrorImpl::InvalidIdentifier { name })
        }
    }
}

impl TryFrom<&str> for Identifier {
    type Error = ErrorImpl;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        Identifier::try_from(String::from(name))
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Operators binding one variable over an optional range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundedKind {
    Sum,
    Product,
    Integral,
}

impl BoundedKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            BoundedKind::Sum => "Sum",
            BoundedKind::Product => "Product",
            BoundedKind::Integral => "Integrate",
        }
    }
}

/// Side a limit is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LimitDirection {
    None,
    Left,
    Right,
}

impl LimitDirection {
    pub fn display_name(&self) -> &'static str {
        match self {
            LimitDirection::None => "Limit",
            LimitDirection::Left => "LLimit",
            LimitDirection::Right => "RLimit",
        }
    }
}
