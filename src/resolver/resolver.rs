use std::collections::BTreeSet;

use crate::{
    ast::ast::{BoundedKind, Expr, Identifier},
    errors::errors::{Error, ErrorImpl},
    Position,
};

// Preference order used when a body has several free variables. The order is
// part of the observable behaviour; do not reorder.
pub const SUM_HINT: &[&str] = &["l", "k", "j", "i", "m", "n"];
pub const PRODUCT_HINT: &[&str] = SUM_HINT;
pub const INTEGRAL_HINT: &[&str] = &["w", "v", "u", "t", "z", "y", "x"];
pub const DERIVATIVE_HINT: &[&str] = &["t", "z", "y", "x"];
pub const LIMIT_HINT: &[&str] = &["t", "z", "y", "x", "l", "k", "j", "i", "m", "n"];

pub fn bounded_hint(kind: BoundedKind) -> &'static [&'static str] {
    match kind {
        BoundedKind::Sum => SUM_HINT,
        BoundedKind::Product => PRODUCT_HINT,
        BoundedKind::Integral => INTEGRAL_HINT,
    }
}

/// Collects the identifiers of `expr` not bound by a construct inside it.
/// Function names of calls are not variables.
pub fn free_vars(expr: &Expr) -> BTreeSet<String> {
    let mut vars = BTreeSet::new();
    collect_free_vars(expr, &mut Vec::new(), &mut vars);
    vars
}

// One walk over the tree; `bound` holds the variables of the enclosing binders.
fn collect_free_vars<'a>(expr: &'a Expr, bound: &mut Vec<&'a str>, vars: &mut BTreeSet<String>) {
    match expr {
        Expr::Variable(variable) => {
            if !bound.contains(&variable.name.as_str()) {
                vars.insert(variable.name.clone());
            }
        }
        Expr::Number(_) => {}
        Expr::Paren(paren) => collect_free_vars(&paren.inner, bound, vars),
        Expr::Call(call) => {
            for argument in &call.arguments {
                collect_free_vars(argument, bound, vars);
            }
        }
        Expr::Infix(infix) => {
            collect_free_vars(&infix.left, bound, vars);
            collect_free_vars(&infix.right, bound, vars);
        }
        Expr::Postfix(postfix) => collect_free_vars(&postfix.operand, bound, vars),
        Expr::Bounded(bounded) => collect_bound(&bounded.body, &bounded.bound_var, bound, vars),
        Expr::Derivative(derivative) => collect_bound(&derivative.body, &derivative.bound_var, bound, vars),
        Expr::Limit(limit) => collect_bound(&limit.body, &limit.bound_var, bound, vars),
        Expr::Approx(approx) => collect_free_vars(&approx.body, bound, vars),
    }
}

fn collect_bound<'a>(
    body: &'a Expr,
    bound_var: &'a Identifier,
    bound: &mut Vec<&'a str>,
    vars: &mut BTreeSet<String>,
) {
    bound.push(bound_var.as_str());
    collect_free_vars(body, bound, vars);
    bound.pop();
}

/// Picks the variable an operator without an explicit one ranges over.
///
/// A body with a single free variable uses it; otherwise the first entry of
/// `hint` that is free in the body wins.
pub fn guess_variable(body: &Expr, hint: &[&str], position: Position) -> Result<Identifier, Error> {
    let vars = free_vars(body);

    let guessed = if vars.len() == 1 {
        vars.into_iter().next()
    } else {
        hint.iter()
            .find(|name| vars.contains(**name))
            .map(|name| String::from(*name))
    };

    match guessed {
        Some(name) => Identifier::try_from(name).map_err(|error| Error::new(error, position)),
        None => Err(Error::new(
            ErrorImpl::CannotInferBoundVariable {
                expression: body.to_string(),
                hint: hint.join(", "),
            },
            position,
        )),
    }
}
