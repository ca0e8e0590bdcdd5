use std::fmt::Display;

use crate::ast::ast::Expr;

/// Renders a tree in canonical notation.
pub fn output(expr: &Expr) -> String {
    match expr {
        Expr::Variable(variable) => variable.name.clone(),
        Expr::Number(number) => number.value.to_string(),
        Expr::Paren(paren) => format!("({})", output(&paren.inner)),
        Expr::Call(call) => pseudo_call(
            &call.function_name,
            call.arguments.iter().map(output).collect(),
        ),
        Expr::Infix(infix) => format!(
            "{}{}{}",
            output(&infix.left),
            infix.operator,
            output(&infix.right)
        ),
        Expr::Postfix(postfix) => format!("{}{}", output(&postfix.operand), postfix.operator),
        Expr::Bounded(bounded) => {
            let mut arguments = vec![output(&bounded.body), bounded.bound_var.to_string()];
            if let (Some(lower), Some(upper)) = (&bounded.lower, &bounded.upper) {
                arguments.push(output(lower));
                arguments.push(output(upper));
            }
            pseudo_call(bounded.kind.display_name(), arguments)
        }
        Expr::Derivative(derivative) => pseudo_call(
            "diff",
            vec![output(&derivative.body), derivative.bound_var.to_string()],
        ),
        Expr::Limit(limit) => pseudo_call(
            limit.direction.display_name(),
            vec![
                output(&limit.body),
                limit.bound_var.to_string(),
                output(&limit.point),
            ],
        ),
        Expr::Approx(approx) => pseudo_call("Approx", vec![output(&approx.body)]),
    }
}

fn pseudo_call(name: &str, arguments: Vec<String>) -> String {
    format!("{}({})", name, arguments.join(", "))
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", output(self))
    }
}
