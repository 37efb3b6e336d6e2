//! Expression tree and evaluation.

use std::collections::BTreeSet;

/// Binary operators, in source notation: `+ - * / ^`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

/// Built-in unary functions (the names the visualizer's math library
/// exposes; `log` is the natural logarithm there, so it maps to [`Func::Ln`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Func {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Exp,
    Ln,
    Log10,
    Log2,
    Sqrt,
    Abs,
}

impl Func {
    pub(crate) fn from_name(name: &str) -> Option<Func> {
        Some(match name {
            "sin" => Func::Sin,
            "cos" => Func::Cos,
            "tan" => Func::Tan,
            "asin" => Func::Asin,
            "acos" => Func::Acos,
            "atan" => Func::Atan,
            "sinh" => Func::Sinh,
            "cosh" => Func::Cosh,
            "tanh" => Func::Tanh,
            "exp" => Func::Exp,
            "ln" | "log" => Func::Ln,
            "log10" => Func::Log10,
            "log2" => Func::Log2,
            "sqrt" => Func::Sqrt,
            "abs" => Func::Abs,
            _ => return None,
        })
    }

    pub(crate) fn apply(self, v: f64) -> f64 {
        match self {
            Func::Sin => v.sin(),
            Func::Cos => v.cos(),
            Func::Tan => v.tan(),
            Func::Asin => v.asin(),
            Func::Acos => v.acos(),
            Func::Atan => v.atan(),
            Func::Sinh => v.sinh(),
            Func::Cosh => v.cosh(),
            Func::Tanh => v.tanh(),
            Func::Exp => v.exp(),
            Func::Ln => v.ln(),
            Func::Log10 => v.log10(),
            Func::Log2 => v.log2(),
            Func::Sqrt => v.sqrt(),
            Func::Abs => v.abs(),
        }
    }
}

/// A node in the parsed expression tree.
///
/// `pi` and `e` are folded to [`Ast::Number`] at parse time; there is no
/// constant node.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Ast {
    Number(f64),
    Variable(String),
    Neg(Box<Ast>),
    Binary(BinOp, Box<Ast>, Box<Ast>),
    Call(Func, Box<Ast>),
}

impl Ast {
    /// Evaluate with `var` bound to `value`.
    ///
    /// Total: domain violations produce IEEE-754 `NaN`/infinities, and any
    /// variable other than `var` evaluates to `NaN`.
    pub(crate) fn eval(&self, var: &str, value: f64) -> f64 {
        match self {
            Ast::Number(n) => *n,
            Ast::Variable(name) => {
                if name == var {
                    value
                } else {
                    f64::NAN
                }
            }
            Ast::Neg(inner) => -inner.eval(var, value),
            Ast::Binary(op, lhs, rhs) => {
                let l = lhs.eval(var, value);
                let r = rhs.eval(var, value);
                match op {
                    BinOp::Add => l + r,
                    BinOp::Sub => l - r,
                    BinOp::Mul => l * r,
                    BinOp::Div => l / r,
                    BinOp::Pow => l.powf(r),
                }
            }
            Ast::Call(func, arg) => func.apply(arg.eval(var, value)),
        }
    }

    pub(crate) fn collect_variables(&self, out: &mut BTreeSet<String>) {
        match self {
            Ast::Number(_) => {}
            Ast::Variable(name) => {
                out.insert(name.clone());
            }
            Ast::Neg(inner) => inner.collect_variables(out),
            Ast::Binary(_, lhs, rhs) => {
                lhs.collect_variables(out);
                rhs.collect_variables(out);
            }
            Ast::Call(_, arg) => arg.collect_variables(out),
        }
    }

    /// Whether any [`Ast::Variable`] node named `var` occurs in the tree.
    pub(crate) fn depends_on(&self, var: &str) -> bool {
        match self {
            Ast::Number(_) => false,
            Ast::Variable(name) => name == var,
            Ast::Neg(inner) => inner.depends_on(var),
            Ast::Binary(_, lhs, rhs) => lhs.depends_on(var) || rhs.depends_on(var),
            Ast::Call(_, arg) => arg.depends_on(var),
        }
    }
}
