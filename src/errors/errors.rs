use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A failed translation: what went wrong and where in the sentence.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

/// The three failure classes a translation can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lex,
    Syntax,
    Inference,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorKind::Lex,
            ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::UnexpectedEndOfInput
            | ErrorImpl::NumberParseError { .. }
            | ErrorImpl::InvalidIdentifier { .. } => ErrorKind::Syntax,
            ErrorImpl::CannotInferBoundVariable { .. } => ErrorKind::Inference,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedEndOfInput => "UnexpectedEndOfInput",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::InvalidIdentifier { .. } => "InvalidIdentifier",
            ErrorImpl::CannotInferBoundVariable { .. } => "CannotInferBoundVariable",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`", token))
            }
            ErrorImpl::UnexpectedEndOfInput => ErrorTip::Suggestion(String::from(
                "The phrase ended before the expression was complete",
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::InvalidIdentifier { name } => ErrorTip::Suggestion(format!(
                "`{}` cannot be used as a variable name",
                name
            )),
            ErrorImpl::CannotInferBoundVariable { expression, hint } => {
                ErrorTip::Suggestion(format!(
                    "Could not tell which variable `{}` is over (tried {}), try naming it explicitly",
                    expression, hint
                ))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.internal_error, self.position.0)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("invalid identifier: {name:?}")]
    InvalidIdentifier { name: String },
    #[error("cannot infer bound variable of {expression:?} (hint {hint:?})")]
    CannotInferBoundVariable { expression: String, hint: String },
}
