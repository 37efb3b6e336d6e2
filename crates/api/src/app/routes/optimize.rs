//! `/api/optimize/*`: the four solver routes.
//!
//! Every route accepts the same body shape and differs only in how it
//! reads `initialGuess` and which kernel it runs. `optimizationType`
//! selects between a user-typed expression and a cubic spline through
//! in-body data points; the resulting f64 closure feeds the kernel either
//! way.

use axum::{http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde_json::json;

use optiviz_expr::Expr;
use optiviz_solver::{central_difference, CubicSpline};

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/bisection", post(bisection))
        .route("/golden-search", post(golden_search))
        .route("/newton-raphson", post(newton_raphson))
        .route("/secant", post(secant))
}

/// The function a kernel iterates over.
enum Target {
    Function(Expr),
    Data(CubicSpline),
}

impl Target {
    fn eval(&self, x: f64) -> f64 {
        match self {
            Target::Function(expr) => expr.eval("x", x),
            Target::Data(spline) => spline.at(x),
        }
    }
}

/// Resolve the request into an evaluable target, enforcing the
/// per-mode required fields (with their fixed error strings) before any
/// deeper validation.
fn resolve_target(body: &dto::OptimizeRequest) -> Result<Target, axum::response::Response> {
    match body.optimization_type.as_deref() {
        Some("function") => match (body.expression(), body.initial_guess.as_ref()) {
            (Some(src), Some(_)) => {
                let expr = Expr::parse(src)
                    .map_err(|e| errors::json_error(StatusCode::BAD_REQUEST, e.to_string()))?;

                let stray: Vec<String> = expr
                    .variables()
                    .into_iter()
                    .filter(|v| v != "x")
                    .collect();
                if !stray.is_empty() {
                    return Err(errors::json_error(
                        StatusCode::BAD_REQUEST,
                        format!(
                            "Expression may only use the variable x (found: {}).",
                            stray.join(", ")
                        ),
                    ));
                }
                Ok(Target::Function(expr))
            }
            _ => Err(errors::json_error(
                StatusCode::BAD_REQUEST,
                "Expression and initial guess are required for function optimization.",
            )),
        },
        Some("data") => match (body.data.as_deref(), body.initial_guess.as_ref()) {
            (Some(data), Some(_)) => {
                let spline = CubicSpline::new(data)
                    .map_err(|e| errors::json_error(StatusCode::BAD_REQUEST, e.to_string()))?;
                Ok(Target::Data(spline))
            }
            _ => Err(errors::json_error(
                StatusCode::BAD_REQUEST,
                "Data and initial guess are required for data optimization.",
            )),
        },
        _ => Err(errors::json_error(
            StatusCode::BAD_REQUEST,
            "Invalid optimization type.",
        )),
    }
}

fn steps_response(steps: impl serde::Serialize) -> axum::response::Response {
    Json(json!({ "steps": steps })).into_response()
}

pub async fn bisection(Json(body): Json<dto::OptimizeRequest>) -> axum::response::Response {
    let target = match resolve_target(&body) {
        Ok(t) => t,
        Err(resp) => return resp,
    };
    let Some((a, b)) = body.bracket_guess() else {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "Initial guess must be an object with numeric a and b.",
        );
    };

    let steps = optiviz_solver::bisection(|x| target.eval(x), a, b, body.options());
    steps_response(steps)
}

pub async fn golden_search(Json(body): Json<dto::OptimizeRequest>) -> axum::response::Response {
    let target = match resolve_target(&body) {
        Ok(t) => t,
        Err(resp) => return resp,
    };
    let Some((a, b)) = body.bracket_guess() else {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "Initial guess must be an object with numeric a and b.",
        );
    };

    let steps = optiviz_solver::golden_section(|x| target.eval(x), a, b, body.options());
    steps_response(steps)
}

pub async fn newton_raphson(Json(body): Json<dto::OptimizeRequest>) -> axum::response::Response {
    let target = match resolve_target(&body) {
        Ok(t) => t,
        Err(resp) => return resp,
    };
    let Some(x0) = body.scalar_guess() else {
        return errors::json_error(StatusCode::BAD_REQUEST, "Initial guess must be a number.");
    };
    let opts = body.options();

    // Function mode differentiates symbolically; data mode falls back to a
    // central difference over the spline.
    let steps = match &target {
        Target::Function(expr) => {
            let deriv = expr.derivative("x");
            optiviz_solver::newton_raphson(
                |x| expr.eval("x", x),
                |x| deriv.eval("x", x),
                x0,
                opts,
            )
        }
        Target::Data(spline) => {
            let f = |x| spline.at(x);
            optiviz_solver::newton_raphson(f, central_difference(f, 1e-5), x0, opts)
        }
    };
    steps_response(steps)
}

pub async fn secant(Json(body): Json<dto::OptimizeRequest>) -> axum::response::Response {
    let target = match resolve_target(&body) {
        Ok(t) => t,
        Err(resp) => return resp,
    };
    let Some((x0, x1)) = body.window_guess() else {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "Initial guess must be an object with numeric x0 and x1.",
        );
    };

    let steps = optiviz_solver::secant(|x| target.eval(x), x0, x1, body.options());
    steps_response(steps)
}
