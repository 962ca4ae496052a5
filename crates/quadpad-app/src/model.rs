// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Path and query marker of the solve endpoint, relative to the solver base URL.
pub const SOLVE_PATH: &str = "/calculate?quadratic";

/// Wire marker for "every real number is a root".
pub const ANY_NUMBER_SENTINEL: &str = "Любое число";

const ANY_NUMBER_ALIASES: [&str; 2] = [ANY_NUMBER_SENTINEL, "any number"];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Coefficients {
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Parses each field independently; unparseable text becomes NaN.
    pub fn parse_fields(a: &str, b: &str, c: &str) -> Self {
        Self {
            a: parse_coefficient(a),
            b: parse_coefficient(b),
            c: parse_coefficient(c),
        }
    }
}

/// Float parse over the longest numeric prefix of `text`, so `"5."` reads as
/// 5 and `"1.2.3"` as 1.2. Anything without a leading number is NaN.
pub fn parse_coefficient(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let end = numeric_prefix_len(trimmed);
    trimmed[..end].parse().unwrap_or(f64::NAN)
}

fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let int_digits = end - int_start;

    let mut frac_digits = 0;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        frac_digits = frac_end - frac_start;
        if frac_digits > 0 {
            end = frac_end;
        }
    }

    if int_digits + frac_digits == 0 {
        return 0;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    end
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolveRequest {
    pub params: Coefficients,
}

impl SolveRequest {
    pub const fn new(params: Coefficients) -> Self {
        Self { params }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Root {
    Number(f64),
    AnyNumber,
    /// Complex root as formatted by the solver, e.g. `(1+2j)`.
    Text(String),
}

impl Root {
    pub fn is_any_number_marker(text: &str) -> bool {
        ANY_NUMBER_ALIASES.contains(&text)
    }
}

impl Serialize for Root {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(value) => serializer.serialize_f64(*value),
            Self::AnyNumber => serializer.serialize_str(ANY_NUMBER_SENTINEL),
            Self::Text(text) => serializer.serialize_str(text),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRoot {
    Number(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Root {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawRoot::deserialize(deserializer)? {
            RawRoot::Number(value) => Self::Number(value),
            RawRoot::Text(text) if Self::is_any_number_marker(&text) => Self::AnyNumber,
            RawRoot::Text(text) => Self::Text(text),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveReport {
    pub roots: Vec<Root>,
    pub discriminant: f64,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveResponse {
    #[serde(default)]
    pub result: Option<SolveReport>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SolveOutcome {
    Solved(SolveReport),
    /// The solver answered with an `error` field.
    Rejected(String),
    /// Transport or decode failure before a usable answer arrived.
    Failed(String),
}

impl SolveResponse {
    pub fn into_outcome(self) -> SolveOutcome {
        if let Some(error) = self.error
            && !error.is_empty()
        {
            return SolveOutcome::Rejected(error);
        }

        match self.result {
            Some(report) => SolveOutcome::Solved(report),
            None => SolveOutcome::Failed("response carried neither result nor error".to_owned()),
        }
    }
}
