//! Free-variable analysis and bound-variable inference.
//!
//! Phrases such as "sum i^j" leave the summation variable implicit. The
//! resolver computes the free variables of an operator's body and picks one
//! using a per-operator preference list.

pub mod resolver;
