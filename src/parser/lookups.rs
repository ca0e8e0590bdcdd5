use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{ast::ast::Expr, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Additive,
    Multiplicative,
    Power,
    Primary,
}

pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser, Expr, BindingPower) -> Result<Expr, Error>;

// Infix entries are keyed by operator character since every infix operator
// shares one token kind.
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<char, LEDHandler>;
pub type BPLookup = HashMap<char, BindingPower>;

#[derive(Default)]
pub struct Lookups {
    nud_lookup: NUDLookup,
    led_lookup: LEDLookup,
    binding_power_lookup: BPLookup,
}

impl Lookups {
    /// Registers a left denotation (infix) handler for an operator.
    pub fn led(&mut self, operator: char, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(operator, binding_power);
        self.led_lookup.insert(operator, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    pub fn get_nud(&self, kind: TokenKind) -> Option<NUDHandler> {
        self.nud_lookup.get(&kind).copied()
    }

    pub fn get_led(&self, operator: char) -> Option<LEDHandler> {
        self.led_lookup.get(&operator).copied()
    }

    pub fn get_bp(&self, operator: char) -> BindingPower {
        self.binding_power_lookup
            .get(&operator)
            .copied()
            .unwrap_or(BindingPower::Default)
    }
}

pub fn create_token_lookups() -> Lookups {
    let mut lookups = Lookups::default();

    // Additive and multiplicative
    lookups.led('+', BindingPower::Additive, parse_infix_expr);
    lookups.led('-', BindingPower::Additive, parse_infix_expr);
    lookups.led('*', BindingPower::Multiplicative, parse_infix_expr);
    lookups.led('/', BindingPower::Multiplicative, parse_infix_expr);
    lookups.led('^', BindingPower::Power, parse_infix_expr);

    // Literals, names and grouping
    lookups.nud(TokenKind::Number, parse_number_expr);
    lookups.nud(TokenKind::Name, parse_name_expr);
    lookups.nud(TokenKind::LeftParen, parse_grouping_expr);

    // Operators with a body
    lookups.nud(TokenKind::Sum, parse_bounded_expr);
    lookups.nud(TokenKind::Product, parse_bounded_expr);
    lookups.nud(TokenKind::Integrate, parse_bounded_expr);
    lookups.nud(TokenKind::Derivate, parse_derivative_expr);
    lookups.nud(TokenKind::Limit, parse_limit_expr);
    lookups.nud(TokenKind::Left, parse_limit_expr);
    lookups.nud(TokenKind::Right, parse_limit_expr);
    lookups.nud(TokenKind::Approx, parse_approx_expr);

    lookups
}

lazy_static! {
    pub static ref LOOKUPS: Lookups = create_token_lookups();
}
