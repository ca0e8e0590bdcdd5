//! Lexical analysis for natural-language math phrases.
//!
//! Converts a sentence into a stream of tokens for the parser:
//!
//! - Keyword recognition through a case-insensitive reserved-word table
//! - Names, subscript naturals and numbers (with `.` or `,` decimals)
//! - Single-character structural and operator tokens
//! - Byte positions on every token for error reporting

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
