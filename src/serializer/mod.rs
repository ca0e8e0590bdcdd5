//! Canonical-notation output.
//!
//! Turns an expression tree into the pseudo-call notation consumed
//! downstream, e.g. `Sum(i, i, 1, Infinity)` or `diff(f(x, y), y)`.

pub mod serializer;
