use crate::expr::naive::Expr;
use crate::expr::ExprFrame;
use recursion_schemes::{cata, MappableFrame, PartiallyApplied};

/// Evaluate one layer. Arithmetic wraps on overflow, and an empty `max` is `i64::MIN`.
pub fn compute(expr: ExprFrame<i64>) -> i64 {
    match expr {
        ExprFrame::Add(a, b) => a.wrapping_add(b),
        ExprFrame::Sub(a, b) => a.wrapping_sub(b),
        ExprFrame::Mul(a, b) => a.wrapping_mul(b),
        ExprFrame::Max(xs) => xs.into_iter().max().unwrap_or(i64::MIN),
        ExprFrame::LiteralInt(x) => x,
    }
}

pub fn print(expr: ExprFrame<String>) -> String {
    expr.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExprError {
    #[error("integer overflow evaluating {op}")]
    Overflow { op: &'static str },
    #[error("max of no arguments")]
    EmptyMax,
}

/// [`compute`] without the wrapping: fails on overflow or an empty `max`
pub fn try_compute(expr: ExprFrame<i64>) -> Result<i64, ExprError> {
    match expr {
        ExprFrame::Add(a, b) => a.checked_add(b).ok_or(ExprError::Overflow { op: "+" }),
        ExprFrame::Sub(a, b) => a.checked_sub(b).ok_or(ExprError::Overflow { op: "-" }),
        ExprFrame::Mul(a, b) => a.checked_mul(b).ok_or(ExprError::Overflow { op: "*" }),
        ExprFrame::Max(xs) => xs.into_iter().max().ok_or(ExprError::EmptyMax),
        ExprFrame::LiteralInt(x) => Ok(x),
    }
}

/// number of nodes in the expression
pub fn size(expr: ExprFrame<usize>) -> usize {
    match expr {
        ExprFrame::Add(a, b) | ExprFrame::Sub(a, b) | ExprFrame::Mul(a, b) => 1 + a + b,
        ExprFrame::Max(xs) => 1 + xs.into_iter().sum::<usize>(),
        ExprFrame::LiteralInt(_) => 1,
    }
}

/// r-algebra: [`print`], with each operator prefixed by the size of the subexpression it heads
pub fn para_print(expr: ExprFrame<(&Expr, String)>) -> String {
    let is_literal = matches!(expr, ExprFrame::LiteralInt(_));
    let mut own_size = 1;
    let printed = print(ExprFrame::<PartiallyApplied>::map_frame(
        expr,
        |(orig, s): (&Expr, String)| {
            own_size += cata(orig, size);
            s
        },
    ));

    if is_literal {
        printed
    } else {
        format!("[{}]{}", own_size, printed)
    }
}

fn precedence(expr: &Expr) -> u8 {
    match expr {
        Expr::Add(..) | Expr::Sub(..) => 1,
        Expr::Mul(..) => 2,
        Expr::Max(_) | Expr::LiteralInt(_) => 3,
    }
}

/// r-algebra: print with only the parentheses needed to preserve evaluation order,
/// deciding per child by looking at the shape of the original subexpression.
pub fn print_minimal(expr: ExprFrame<(&Expr, String)>) -> String {
    let wrap = |(orig, s): (&Expr, String), at_least: u8| {
        if precedence(orig) < at_least {
            format!("({})", s)
        } else {
            s
        }
    };

    match expr {
        ExprFrame::Add(a, b) => format!("{} + {}", wrap(a, 1), wrap(b, 1)),
        // subtraction isn't associative: `a - (b - c)` keeps its parens
        ExprFrame::Sub(a, b) => format!("{} - {}", wrap(a, 1), wrap(b, 2)),
        ExprFrame::Mul(a, b) => format!("{} * {}", wrap(a, 2), wrap(b, 2)),
        ExprFrame::Max(xs) => {
            let args: Vec<String> = xs.into_iter().map(|(_, s)| s).collect();
            format!("max({})", args.join(","))
        }
        ExprFrame::LiteralInt(x) => x.to_string(),
    }
}

pub fn naive_compute(expr: &Expr) -> i64 {
    match expr {
        Expr::Add(a, b) => naive_compute(a).wrapping_add(naive_compute(b)),
        Expr::Sub(a, b) => naive_compute(a).wrapping_sub(naive_compute(b)),
        Expr::Mul(a, b) => naive_compute(a).wrapping_mul(naive_compute(b)),
        Expr::Max(xs) => xs.iter().map(naive_compute).max().unwrap_or(i64::MIN),
        Expr::LiteralInt(x) => *x,
    }
}
