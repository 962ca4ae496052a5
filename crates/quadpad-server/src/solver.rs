// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use quadpad_app::{Coefficients, Root};

const SNAP_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolutionRoot {
    Real(f64),
    Complex { re: f64, im: f64 },
    AnyNumber,
}

impl SolutionRoot {
    pub fn to_wire(self) -> Root {
        match self {
            Self::Real(value) => Root::Number(value),
            Self::Complex { re, im } => Root::Text(format_complex(re, im)),
            Self::AnyNumber => Root::AnyNumber,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub roots: Vec<SolutionRoot>,
    pub discriminant: f64,
}

/// Solves `a·x² + b·x + c = 0`, falling back to the linear case when `a` is
/// zero. Complex roots are returned as such rather than dropped.
pub fn solve_quadratic(coefficients: Coefficients) -> Solution {
    let Coefficients { a, b, c } = coefficients;

    if a == 0.0 {
        let roots = if b != 0.0 {
            vec![SolutionRoot::Real(-c / b)]
        } else if c == 0.0 {
            vec![SolutionRoot::AnyNumber]
        } else {
            Vec::new()
        };
        return Solution {
            roots,
            discriminant: 0.0,
        };
    }

    let discriminant = b * b - 4.0 * a * c;
    let denominator = 2.0 * a;

    if discriminant == 0.0 {
        return Solution {
            roots: vec![SolutionRoot::Real(-b / denominator)],
            discriminant,
        };
    }

    let roots = if discriminant > 0.0 {
        let sqrt_d = discriminant.sqrt();
        vec![
            classify(-b + sqrt_d, 0.0, denominator),
            classify(-b - sqrt_d, 0.0, denominator),
        ]
    } else {
        let sqrt_d = (-discriminant).sqrt();
        vec![
            classify(-b, sqrt_d, denominator),
            classify(-b, -sqrt_d, denominator),
        ]
    };

    Solution {
        roots,
        discriminant,
    }
}

fn classify(re_numerator: f64, im_numerator: f64, denominator: f64) -> SolutionRoot {
    let re = snap(re_numerator / denominator);
    let im = snap(im_numerator / denominator);
    if im == 0.0 {
        SolutionRoot::Real(re)
    } else {
        SolutionRoot::Complex { re, im }
    }
}

fn snap(value: f64) -> f64 {
    if value.abs() <= SNAP_TOLERANCE {
        0.0
    } else {
        value
    }
}

/// `1j`, `-2.5j` for purely imaginary values, `(1+2j)` otherwise.
pub fn format_complex(re: f64, im: f64) -> String {
    if re == 0.0 {
        return format!("{im}j");
    }
    let sign = if im < 0.0 { '-' } else { '+' };
    format!("({re}{sign}{}j)", im.abs())
}
