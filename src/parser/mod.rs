//! Parser module for building the expression tree.
//!
//! Transforms a token stream into an `Expr` with a Pratt parser:
//!
//! - NUD (null denotation) handlers for names, numbers, groups and the
//!   keyword-led constructs (sum, integral, limit, ...)
//! - LED (left denotation) handlers for the infix operators
//! - Binding powers fixing precedence: `^` over `*` `/` over `+` `-`
//!
//! Operators without an explicit variable call into the resolver while the
//! node is being built.

pub mod expr;
pub mod lookups;
pub mod parser;
