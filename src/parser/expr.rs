use crate::{
    ast::{
        ast::{BoundedKind, Expr, Identifier, LimitDirection, NumberValue},
        expressions::BoundedExpr,
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    resolver::resolver::{bounded_hint, guess_variable, DERIVATIVE_HINT, LIMIT_HINT},
};

use super::{
    lookups::{BindingPower, LOOKUPS},
    parser::Parser,
};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let nud = LOOKUPS
        .get_nud(parser.current_token_kind())
        .ok_or_else(|| parser.unexpected())?;
    let mut left = nud(parser)?;

    // While the next operator binds tighter than the caller, keep extending lhs
    while let Some(operator) = current_infix(parser) {
        let operator_bp = LOOKUPS.get_bp(operator);
        if operator_bp <= bp {
            break;
        }

        let led = LOOKUPS.get_led(operator).ok_or_else(|| parser.unexpected())?;
        left = led(parser, left, operator_bp)?;
    }

    Ok(left)
}

fn current_infix(parser: &Parser) -> Option<char> {
    let token = parser.current_token();
    if token.kind == TokenKind::Infix {
        token.value.chars().next()
    } else {
        None
    }
}

pub fn parse_infix_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance();
    let operator = operator_token.value.chars().next().unwrap_or_default();

    // `^` is right-associative: let an equal-power operator continue the rhs.
    let right_bp = if operator == '^' {
        BindingPower::Multiplicative
    } else {
        bp
    };
    let right = parse_expr(parser, right_bp)?;

    Ok(Expr::infix(left, operator, right))
}

/// Wraps `operand` in a factorial if one follows it.
fn parse_postfix(parser: &mut Parser, operand: Expr) -> Expr {
    if parser.current_token_kind() == TokenKind::Postfix {
        let operator = parser.advance().value.chars().next().unwrap_or('!');
        Expr::postfix(operand, operator)
    } else {
        operand
    }
}

pub fn parse_number_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.expect(TokenKind::Number)?;
    let value = NumberValue::from_lexeme(&token.value)
        .map_err(|error| Error::new(error, token.span.start))?;

    Ok(parse_postfix(parser, Expr::number(value)))
}

/// A name with any number of `_<natural>` subscripts, joined into one name.
fn parse_variable_name(parser: &mut Parser) -> Result<String, Error> {
    let mut name = parser.expect(TokenKind::Name)?.value;

    while parser.accept(TokenKind::Underscore) {
        let index = parser.expect(TokenKind::Natural)?;
        name = format!("{}_{}", name, index.value);
    }

    Ok(name)
}

pub fn parse_name_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let name = parse_variable_name(parser)?;

    match parser.current_token_kind() {
        TokenKind::LeftParen => {
            parser.advance();
            let mut arguments = vec![parse_expr(parser, BindingPower::Default)?];

            while parser.accept(TokenKind::Comma) {
                arguments.push(parse_expr(parser, BindingPower::Default)?);
            }

            parser.expect(TokenKind::RightParen)?;
            Ok(Expr::call(name, arguments))
        }
        TokenKind::Of => {
            parser.advance();
            let argument = parse_expr(parser, BindingPower::Default)?;
            Ok(Expr::call(name, vec![argument]))
        }
        _ => Ok(parse_postfix(parser, Expr::variable(name))),
    }
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::LeftParen)?;
    let inner = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::RightParen)?;

    Ok(parse_postfix(parser, Expr::paren(inner)))
}

/// Parses the body of an operator, skipping an optional leading `of`.
fn parse_body(parser: &mut Parser) -> Result<Expr, Error> {
    parser.accept(TokenKind::Of);
    parse_expr(parser, BindingPower::Default)
}

pub fn parse_bounded_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.get_position();
    let kind = match parser.advance().kind {
        TokenKind::Sum => BoundedKind::Sum,
        TokenKind::Product => BoundedKind::Product,
        _ => BoundedKind::Integral,
    };

    let body = parse_body(parser)?;
    let bound_var = guess_variable(&body, bounded_hint(kind), start)?;
    let mut bounded = BoundedExpr::new(kind, body, bound_var);

    if parser.accept(TokenKind::From) {
        let lower = parse_expr(parser, BindingPower::Default)?;
        parser.expect(TokenKind::To)?;
        let upper = parse_expr(parser, BindingPower::Default)?;
        bounded = bounded.with_range(lower, upper);
    }

    Ok(Expr::Bounded(bounded))
}

pub fn parse_derivative_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.expect(TokenKind::Derivate)?.span.start;
    let body = parse_body(parser)?;
    let bound_var = guess_variable(&body, DERIVATIVE_HINT, start)?;

    Ok(Expr::derivative(body, bound_var))
}

pub fn parse_limit_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.get_position();
    let direction = if parser.accept(TokenKind::Left) {
        LimitDirection::Left
    } else if parser.accept(TokenKind::Right) {
        LimitDirection::Right
    } else {
        LimitDirection::None
    };

    parser.expect(TokenKind::Limit)?;
    let body = parse_body(parser)?;

    match parser.current_token_kind() {
        TokenKind::At => {
            parser.advance();
            let point = parse_expr(parser, BindingPower::Default)?;
            let bound_var = guess_variable(&body, LIMIT_HINT, start)?;
            Ok(Expr::limit(direction, body, bound_var, Some(point)))
        }
        TokenKind::When => {
            parser.advance();
            let name_position = parser.get_position();
            let bound_var = Identifier::try_from(parse_variable_name(parser)?)
                .map_err(|error| Error::new(error, name_position))?;
            parser.expect(TokenKind::Approaches)?;
            parser.accept(TokenKind::To);
            let point = parse_expr(parser, BindingPower::Default)?;
            Ok(Expr::limit(direction, body, bound_var, Some(point)))
        }
        _ => {
            let bound_var = guess_variable(&body, LIMIT_HINT, start)?;
            Ok(Expr::limit(direction, body, bound_var, None))
        }
    }
}

pub fn parse_approx_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::Approx)?;
    let body = parse_expr(parser, BindingPower::Default)?;

    Ok(Expr::approx(body))
}
