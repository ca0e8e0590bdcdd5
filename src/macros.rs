//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for single-character tokens

/// Creates a Token instance.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a default lexer handler for fixed single-token patterns.
///
/// The generated handler pushes a token of the given kind whose value is the
/// matched text, then advances the lexer past it.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^\\(").unwrap(),
///     guard: None,
///     handler: MK_DEFAULT_HANDLER!(TokenKind::LeftParen),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |lexer: &mut Lexer, matched: &str| {
            lexer.push(MK_TOKEN!(
                $kind,
                String::from(matched),
                Span {
                    start: Position(lexer.pos as u32),
                    end: Position((lexer.pos + matched.len()) as u32),
                }
            ));
            lexer.advance_n(matched.len());
        }
    };
}
