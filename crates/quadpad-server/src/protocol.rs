// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use quadpad_app::{Coefficients, Root, SolveReport, SolveResponse};
use serde_json::Value;

use crate::solver::{Solution, SolutionRoot};

const COEFFICIENT_NAMES: [&str; 3] = ["a", "b", "c"];

/// Reads `{"params": {"a", "b", "c"}}`. Numbers and numeric strings are
/// accepted; extra keys are ignored.
pub fn parse_request(body: &str) -> Result<Coefficients> {
    let data: Value = serde_json::from_str(body).context("invalid JSON")?;

    let Some(params) = data.get("params") else {
        bail!("missing 'params' key in request");
    };
    let Some(params) = params.as_object() else {
        bail!("'params' must be an object");
    };

    let missing: Vec<&str> = COEFFICIENT_NAMES
        .iter()
        .copied()
        .filter(|name| !params.contains_key(*name))
        .collect();
    if !missing.is_empty() {
        bail!("missing coefficients: {}", missing.join(", "));
    }

    Ok(Coefficients::new(
        coefficient(params, "a")?,
        coefficient(params, "b")?,
        coefficient(params, "c")?,
    ))
}

fn coefficient(params: &serde_json::Map<String, Value>, name: &str) -> Result<f64> {
    let value = match params.get(name) {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
    .ok_or_else(|| anyhow!("coefficient {name} is not a number"))?;

    if !value.is_finite() {
        bail!("coefficient {name} must be finite");
    }
    Ok(value)
}

pub fn message_for(solution: &Solution) -> &'static str {
    match solution.roots.as_slice() {
        [SolutionRoot::AnyNumber] => "Success! Infinitely many solutions",
        [] => "Success! No real roots",
        [_] => "Success! One root",
        _ => "Success! Two roots",
    }
}

pub fn create_response(solution: &Solution, error: Option<&str>) -> Result<String> {
    let roots: Vec<Root> = solution.roots.iter().map(|root| root.to_wire()).collect();
    let response = SolveResponse {
        result: Some(SolveReport {
            roots,
            discriminant: solution.discriminant,
            message: message_for(solution).to_owned(),
        }),
        error: error.map(str::to_owned),
    };
    serde_json::to_string(&response).context("encode solve response")
}

pub fn error_response(message: &str) -> Result<String> {
    let response = SolveResponse {
        result: Some(SolveReport {
            roots: Vec::new(),
            discriminant: 0.0,
            message: "Error".to_owned(),
        }),
        error: Some(message.to_owned()),
    };
    serde_json::to_string(&response).context("encode error response")
}
