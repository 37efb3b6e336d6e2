//! `optiviz-expr` — parsing, evaluation, and symbolic differentiation of
//! one-dimensional mathematical expressions.
//!
//! This crate is **pure domain** logic (no IO, no HTTP). It covers the
//! grammar the visualizer's users actually type (`x*x - 4`, `(x-2)^2`,
//! `sin(x) * exp(-x)`, ...): numbers with scientific notation, the
//! operators `+ - * / ^` with conventional precedence, parentheses, the
//! constants `pi` and `e`, and the standard unary function table. `log` is
//! the natural logarithm, matching the math library the reference frontend
//! ships. Multiplication is always explicit.

mod ast;
mod derivative;
mod error;
mod parser;
mod token;

pub use error::ExprError;

use std::collections::BTreeSet;

use ast::Ast;

/// A parsed, immutable expression.
///
/// Parsing is the only fallible step; evaluation is total (IEEE-754
/// `NaN`/infinity semantics) and differentiation always succeeds.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    root: Ast,
}

impl Expr {
    /// Parse `src` into an expression tree.
    pub fn parse(src: &str) -> Result<Self, ExprError> {
        Ok(Self {
            root: parser::parse(src)?,
        })
    }

    /// Evaluate with `var` bound to `value`.
    ///
    /// Domain violations (`ln` of a negative, `0/0`, ...) follow IEEE-754,
    /// and a variable other than `var` evaluates to `NaN`. Callers that
    /// want a hard failure on stray variables should check
    /// [`Expr::variables`] up front.
    pub fn eval(&self, var: &str, value: f64) -> f64 {
        self.root.eval(var, value)
    }

    /// The set of free variables, in lexical order.
    pub fn variables(&self) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        self.root.collect_variables(&mut out);
        out
    }

    /// Symbolic derivative with respect to `var`.
    pub fn derivative(&self, var: &str) -> Expr {
        Expr {
            root: derivative::differentiate(&self.root, var),
        }
    }
}
