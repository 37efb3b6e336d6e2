//! Symbolic differentiation.
//!
//! Derivative trees are assembled through folding constructors (constant
//! folding plus the usual identities: `0 + u`, `1 * u`, `u ^ 1`, ...), so
//! repeated Newton-style evaluation of a derivative stays cheap even for
//! nested expressions.

use crate::ast::{Ast, BinOp, Func};

/// d/d`var` of `ast`.
pub(crate) fn differentiate(ast: &Ast, var: &str) -> Ast {
    match ast {
        Ast::Number(_) => num(0.0),
        Ast::Variable(name) => num(if name == var { 1.0 } else { 0.0 }),
        Ast::Neg(inner) => neg(differentiate(inner, var)),
        Ast::Binary(BinOp::Add, lhs, rhs) => {
            add(differentiate(lhs, var), differentiate(rhs, var))
        }
        Ast::Binary(BinOp::Sub, lhs, rhs) => {
            sub(differentiate(lhs, var), differentiate(rhs, var))
        }
        Ast::Binary(BinOp::Mul, lhs, rhs) => add(
            mul(differentiate(lhs, var), (**rhs).clone()),
            mul((**lhs).clone(), differentiate(rhs, var)),
        ),
        Ast::Binary(BinOp::Div, lhs, rhs) => div(
            sub(
                mul(differentiate(lhs, var), (**rhs).clone()),
                mul((**lhs).clone(), differentiate(rhs, var)),
            ),
            pow((**rhs).clone(), num(2.0)),
        ),
        Ast::Binary(BinOp::Pow, base, exponent) => diff_pow(base, exponent, var),
        Ast::Call(func, arg) => mul(outer_derivative(*func, arg), differentiate(arg, var)),
    }
}

fn diff_pow(base: &Ast, exponent: &Ast, var: &str) -> Ast {
    let base_varies = base.depends_on(var);
    let exponent_varies = exponent.depends_on(var);

    if !base_varies && !exponent_varies {
        return num(0.0);
    }
    if !exponent_varies {
        // d(u^c) = c * u^(c-1) * u'
        return mul(
            mul(
                exponent.clone(),
                pow(base.clone(), sub(exponent.clone(), num(1.0))),
            ),
            differentiate(base, var),
        );
    }
    if !base_varies {
        // d(c^v) = c^v * ln(c) * v'
        return mul(
            mul(pow(base.clone(), exponent.clone()), call(Func::Ln, base.clone())),
            differentiate(exponent, var),
        );
    }
    // u^v with both sides varying, via u^v = exp(v * ln u):
    // d(u^v) = u^v * (v' * ln u + v * u' / u)
    mul(
        pow(base.clone(), exponent.clone()),
        add(
            mul(differentiate(exponent, var), call(Func::Ln, base.clone())),
            div(
                mul(exponent.clone(), differentiate(base, var)),
                base.clone(),
            ),
        ),
    )
}

/// Derivative of the outer function evaluated at `arg` (chain rule's f'(u)).
fn outer_derivative(func: Func, arg: &Ast) -> Ast {
    let u = || arg.clone();
    match func {
        Func::Sin => call(Func::Cos, u()),
        Func::Cos => neg(call(Func::Sin, u())),
        Func::Tan => div(num(1.0), pow(call(Func::Cos, u()), num(2.0))),
        Func::Asin => div(num(1.0), call(Func::Sqrt, sub(num(1.0), pow(u(), num(2.0))))),
        Func::Acos => neg(div(
            num(1.0),
            call(Func::Sqrt, sub(num(1.0), pow(u(), num(2.0)))),
        )),
        Func::Atan => div(num(1.0), add(num(1.0), pow(u(), num(2.0)))),
        Func::Sinh => call(Func::Cosh, u()),
        Func::Cosh => call(Func::Sinh, u()),
        Func::Tanh => sub(num(1.0), pow(call(Func::Tanh, u()), num(2.0))),
        Func::Exp => call(Func::Exp, u()),
        Func::Ln => div(num(1.0), u()),
        Func::Log10 => div(num(1.0), mul(u(), num(std::f64::consts::LN_10))),
        Func::Log2 => div(num(1.0), mul(u(), num(std::f64::consts::LN_2))),
        Func::Sqrt => div(num(1.0), mul(num(2.0), call(Func::Sqrt, u()))),
        // d|u| = u / |u| (undefined at 0, where this yields NaN).
        Func::Abs => div(u(), call(Func::Abs, u())),
    }
}

// Folding constructors.

fn num(n: f64) -> Ast {
    Ast::Number(n)
}

fn add(lhs: Ast, rhs: Ast) -> Ast {
    match (lhs, rhs) {
        (Ast::Number(a), Ast::Number(b)) => num(a + b),
        (Ast::Number(z), rhs) if z == 0.0 => rhs,
        (lhs, Ast::Number(z)) if z == 0.0 => lhs,
        (lhs, rhs) => Ast::Binary(BinOp::Add, Box::new(lhs), Box::new(rhs)),
    }
}

fn sub(lhs: Ast, rhs: Ast) -> Ast {
    match (lhs, rhs) {
        (Ast::Number(a), Ast::Number(b)) => num(a - b),
        (lhs, Ast::Number(z)) if z == 0.0 => lhs,
        (Ast::Number(z), rhs) if z == 0.0 => neg(rhs),
        (lhs, rhs) => Ast::Binary(BinOp::Sub, Box::new(lhs), Box::new(rhs)),
    }
}

fn mul(lhs: Ast, rhs: Ast) -> Ast {
    match (lhs, rhs) {
        (Ast::Number(a), Ast::Number(b)) => num(a * b),
        (Ast::Number(z), _) | (_, Ast::Number(z)) if z == 0.0 => num(0.0),
        (Ast::Number(o), rhs) if o == 1.0 => rhs,
        (lhs, Ast::Number(o)) if o == 1.0 => lhs,
        (lhs, rhs) => Ast::Binary(BinOp::Mul, Box::new(lhs), Box::new(rhs)),
    }
}

fn div(lhs: Ast, rhs: Ast) -> Ast {
    match (lhs, rhs) {
        (Ast::Number(a), Ast::Number(b)) => num(a / b),
        (Ast::Number(z), _) if z == 0.0 => num(0.0),
        (lhs, Ast::Number(o)) if o == 1.0 => lhs,
        (lhs, rhs) => Ast::Binary(BinOp::Div, Box::new(lhs), Box::new(rhs)),
    }
}

fn pow(base: Ast, exponent: Ast) -> Ast {
    match (base, exponent) {
        (Ast::Number(a), Ast::Number(b)) => num(a.powf(b)),
        (_, Ast::Number(z)) if z == 0.0 => num(1.0),
        (base, Ast::Number(o)) if o == 1.0 => base,
        (base, exponent) => Ast::Binary(BinOp::Pow, Box::new(base), Box::new(exponent)),
    }
}

fn neg(inner: Ast) -> Ast {
    match inner {
        Ast::Number(n) => num(-n),
        Ast::Neg(inner) => *inner,
        inner => Ast::Neg(Box::new(inner)),
    }
}

fn call(func: Func, arg: Ast) -> Ast {
    match arg {
        Ast::Number(n) => num(func.apply(n)),
        arg => Ast::Call(func, Box::new(arg)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use proptest::prelude::*;

    fn d(src: &str) -> Ast {
        differentiate(&parse(src).unwrap(), "x")
    }

    fn d_at(src: &str, x: f64) -> f64 {
        d(src).eval("x", x)
    }

    #[test]
    fn polynomial_rule() {
        assert_eq!(d_at("x^2 - 4", 3.0), 6.0);
        assert_eq!(d_at("x*x - 4", 3.0), 6.0);
        assert_eq!(d_at("7", 12.0), 0.0);
        assert_eq!(d_at("x", 12.0), 1.0);
    }

    #[test]
    fn constants_drop_out_entirely() {
        // The folded tree of a constant's derivative is literally zero, not
        // an unevaluated sum of zeros.
        assert_eq!(d("3 * 4 + 2"), Ast::Number(0.0));
        assert_eq!(d("y + 1"), Ast::Number(0.0));
    }

    #[test]
    fn product_rule() {
        // d(x * sin x) = sin x + x cos x
        let x: f64 = 1.3;
        let want = x.sin() + x * x.cos();
        assert!((d_at("x * sin(x)", x) - want).abs() < 1e-12);
    }

    #[test]
    fn quotient_rule() {
        // d(1 / x) = -1 / x^2
        assert!((d_at("1 / x", 2.0) - (-0.25)).abs() < 1e-12);
    }

    #[test]
    fn chain_rule() {
        // d(sin(x^2)) = 2x cos(x^2)
        let x: f64 = 0.7;
        let want = 2.0 * x * (x * x).cos();
        assert!((d_at("sin(x^2)", x) - want).abs() < 1e-12);
    }

    #[test]
    fn constant_base_power_uses_log_rule() {
        // d(2^x) = 2^x ln 2
        let x = 3.0;
        let want = 2f64.powf(x) * 2f64.ln();
        assert!((d_at("2^x", x) - want).abs() < 1e-12);
    }

    #[test]
    fn variable_base_and_exponent() {
        // d(x^x) = x^x (ln x + 1)
        let x: f64 = 2.0;
        let want = x.powf(x) * (x.ln() + 1.0);
        assert!((d_at("x^x", x) - want).abs() < 1e-12);
    }

    #[test]
    fn abs_derivative_is_sign() {
        assert_eq!(d_at("abs(x)", -2.0), -1.0);
        assert_eq!(d_at("abs(x)", 2.0), 1.0);
        assert!(d_at("abs(x)", 0.0).is_nan());
    }

    #[test]
    fn constant_exponent_avoids_log_of_base() {
        // The constant-exponent rule must hold at u = 0, where the generic
        // exp/ln form would divide by zero: d(x^2) at 0 is 0.
        assert_eq!(d_at("x^2", 0.0), 0.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: on a family of smooth expressions, the symbolic
        /// derivative agrees with a central difference quotient.
        #[test]
        fn derivative_matches_central_difference(
            a in -5.0f64..5.0,
            b in -5.0f64..5.0,
            x in 0.5f64..3.0,
        ) {
            let src = format!("{a} * x^3 + {b} * sin(x) + exp(x / 2) + sqrt(x)");
            let expr = parse(&src).unwrap();
            let deriv = differentiate(&expr, "x");

            let h = 1e-6;
            let numeric = (expr.eval("x", x + h) - expr.eval("x", x - h)) / (2.0 * h);
            let symbolic = deriv.eval("x", x);

            prop_assert!(
                (symbolic - numeric).abs() <= 1e-4 * (1.0 + symbolic.abs()),
                "symbolic {} vs numeric {} for {}",
                symbolic,
                numeric,
                src
            );
        }
    }
}
