#![allow(clippy::module_inception)]

//! Translates short natural-language math phrases ("sum i from y to z",
//! "integral of f(x, y)") into canonical notation ("Sum(i, i, y, z)",
//! "Integrate(f(x, y), y)").
//!
//! Text flows through the lexer, the parser (which consults the resolver
//! for implicit bound variables) and the serializer.

use std::fmt::Write;

use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::parse,
    serializer::serializer::output,
};

pub mod ast;
pub mod errors;
pub mod handler;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod resolver;
pub mod serializer;

extern crate regex;

/// Byte offset into the translated sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Parses a sentence into its expression tree.
pub fn build_tree(source: &str) -> Result<Expr, Error> {
    parse(tokenize(source)?)
}

/// Translates a sentence into canonical notation.
pub fn translate(source: &str) -> Result<String, Error> {
    Ok(output(&build_tree(source)?))
}

/// Renders an error against the sentence it came from.
pub fn display_error(error: &Error, source: &str) -> String {
    /*
        Error: message
           |
         1 | sum a*b
           | ^
    */

    let mut rendered = String::new();
    let position = (error.get_position().0 as usize).min(source.len());

    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(rendered, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(rendered, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(source);
    let arrows = position.saturating_sub(removed_whitespace) + 1;

    let _ = writeln!(rendered, "  |");
    let _ = writeln!(rendered, "1 | {}", line_text_removed.trim_end());
    let _ = write!(rendered, "  | {:->arrows$}", "^");

    rendered
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches(' ');
    (trimmed, string.len() - trimmed.len())
}
