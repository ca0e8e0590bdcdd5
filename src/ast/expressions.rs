use super::ast::{BoundedKind, Expr, Identifier, LimitDirection, NumberValue};

/// The symbolic constant bounds and limit points default to.
pub const INFINITY: &str = "Infinity";

// LEAVES

/// Variable Expression
/// An identifier, subscripts included (`x_1`).
#[derive(Debug, Clone, PartialEq)]
pub struct VariableExpr {
    pub name: String,
}

/// Number Expression
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub value: NumberValue,
}

// COMPOSITES

/// Parenthesised Expression
/// Kept in the tree so the parentheses survive into the output.
#[derive(Debug, Clone, PartialEq)]
pub struct ParenExpr {
    pub inner: Box<Expr>,
}

/// Call Expression
/// `f(x, y)` or `f of x`; always at least one argument.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub function_name: String,
    pub arguments: Vec<Expr>,
}

/// Infix Expression
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpr {
    pub left: Box<Expr>,
    pub operator: char,
    pub right: Box<Expr>,
}

/// Postfix Expression
#[derive(Debug, Clone, PartialEq)]
pub struct PostfixExpr {
    pub operand: Box<Expr>,
    pub operator: char,
}

// BINDERS

/// Bounded Expression
/// Sum, product or integral over `bound_var`. Bounds are either both
/// present or both absent.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundedExpr {
    pub kind: BoundedKind,
    pub body: Box<Expr>,
    pub bound_var: Identifier,
    pub lower: Option<Box<Expr>>,
    pub upper: Option<Box<Expr>>,
}

impl BoundedExpr {
    /// Builds the operator with its default bounds: `1` to `Infinity` for
    /// sums and products, none for integrals.
    pub fn new(kind: BoundedKind, body: Expr, bound_var: Identifier) -> Self {
        let (lower, upper) = match kind {
            BoundedKind::Sum | BoundedKind::Product => (
                Some(Box::new(Expr::number(NumberValue::integer(1)))),
                Some(Box::new(Expr::variable(INFINITY))),
            ),
            BoundedKind::Integral => (None, None),
        };

        BoundedExpr {
            kind,
            body: Box::new(body),
            bound_var,
            lower,
            upper,
        }
    }

    pub fn with_range(self, lower: Expr, upper: Expr) -> Self {
        BoundedExpr {
            lower: Some(Box::new(lower)),
            upper: Some(Box::new(upper)),
            ..self
        }
    }
}

/// Derivative Expression
#[derive(Debug, Clone, PartialEq)]
pub struct DerivativeExpr {
    pub body: Box<Expr>,
    pub bound_var: Identifier,
}

/// Limit Expression
/// The point defaults to `Infinity`.
#[derive(Debug, Clone, PartialEq)]
pub struct LimitExpr {
    pub direction: LimitDirection,
    pub body: Box<Expr>,
    pub bound_var: Identifier,
    pub point: Box<Expr>,
}

/// Approximation Expression
#[derive(Debug, Clone, PartialEq)]
pub struct ApproxExpr {
    pub body: Box<Expr>,
}

impl Expr {
    pub fn variable(name: impl Into<String>) -> Expr {
        Expr::Variable(VariableExpr { name: name.into() })
    }

    pub fn number(value: NumberValue) -> Expr {
        Expr::Number(NumberExpr { value })
    }

    pub fn paren(inner: Expr) -> Expr {
        Expr::Paren(ParenExpr {
            inner: Box::new(inner),
        })
    }

    pub fn call(function_name: impl Into<String>, arguments: Vec<Expr>) -> Expr {
        Expr::Call(CallExpr {
            function_name: function_name.into(),
            arguments,
        })
    }

    pub fn infix(left: Expr, operator: char, right: Expr) -> Expr {
        Expr::Infix(InfixExpr {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    pub fn postfix(operand: Expr, operator: char) -> Expr {
        Expr::Postfix(PostfixExpr {
            operand: Box::new(operand),
            operator,
        })
    }

    pub fn derivative(body: Expr, bound_var: Identifier) -> Expr {
        Expr::Derivative(DerivativeExpr {
            body: Box::new(body),
            bound_var,
        })
    }

    pub fn limit(direction: LimitDirection, body: Expr, bound_var: Identifier, point: Option<Expr>) -> Expr {
        Expr::Limit(LimitExpr {
            direction,
            body: Box::new(body),
            bound_var,
            point: Box::new(point.unwrap_or_else(|| Expr::variable(INFINITY))),
        })
    }

    pub fn approx(body: Expr) -> Expr {
        Expr::Approx(ApproxExpr {
            body: Box::new(body),
        })
    }
}
