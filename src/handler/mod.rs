//! The boundary with the question-answering pipeline.
//!
//! Wraps `translate` so that failures and no-op translations produce no
//! answer instead of an error, and records this module in the request trace.

pub mod handler;

#[cfg(test)]
mod tests;
