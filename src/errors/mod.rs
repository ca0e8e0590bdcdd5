//! Error types for the translator.
//!
//! Every stage (lexing, parsing, bound-variable inference) reports failures
//! through the same `Error` value:
//!
//! - `ErrorImpl` names the specific failure
//! - `ErrorKind` groups failures into lex, syntax and inference classes
//! - `ErrorTip` gives a human-readable hint for the CLI

pub mod errors;
