// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::{Root, SolveOutcome, SolveReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "ru" => Some(Self::Ru),
            _ => None,
        }
    }

    const fn strings(self) -> &'static Strings {
        match self {
            Self::En => &EN,
            Self::Ru => &RU,
        }
    }
}

struct Strings {
    computing: &'static str,
    error: &'static str,
    discriminant: &'static str,
    roots: &'static str,
    root: &'static str,
    any_number: &'static str,
    no_real_roots: &'static str,
}

const EN: Strings = Strings {
    computing: "Computing...",
    error: "Error",
    discriminant: "discriminant",
    roots: "roots",
    root: "root",
    any_number: "any number",
    no_real_roots: "no real roots",
};

const RU: Strings = Strings {
    computing: "Вычисление...",
    error: "Ошибка",
    discriminant: "Дискриминант",
    roots: "Корни",
    root: "Корень",
    any_number: "Любое число",
    no_real_roots: "Нет действительных корней",
};

/// Formats a number in its shortest round-trip form: no trailing `.0`,
/// `NaN` and `Infinity` spelled out, negative zero shown as `0`. Magnitudes
/// below 1e-6 or from 1e21 up switch to exponent form (`1e-7`, `1.5e+21`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let scientific = format!("{:e}", value.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    format!("{sign}{}", place_digits(&digits, exponent + 1))
}

/// Lays out significant `digits` whose decimal point sits after position
/// `point` (value = 0.digits × 10^point).
fn place_digits(digits: &str, point: i32) -> String {
    let count = digits.len() as i32;
    if count <= point && point <= 21 {
        return format!("{digits}{}", "0".repeat((point - count) as usize));
    }
    if 0 < point && point <= 21 {
        let (whole, fraction) = digits.split_at(point as usize);
        return format!("{whole}.{fraction}");
    }
    if -6 < point && point <= 0 {
        return format!("0.{}{digits}", "0".repeat((-point) as usize));
    }

    let exponent = point - 1;
    let exponent_sign = if exponent < 0 { '-' } else { '+' };
    let (first, rest) = digits.split_at(1);
    let mantissa = if rest.is_empty() {
        first.to_owned()
    } else {
        format!("{first}.{rest}")
    };
    format!("{mantissa}e{exponent_sign}{}", exponent.abs())
}

fn format_root(root: &Root, locale: Locale) -> String {
    match root {
        Root::Number(value) => format_number(*value),
        Root::AnyNumber => locale.strings().any_number.to_owned(),
        Root::Text(text) => text.clone(),
    }
}

pub fn render_roots_line(roots: &[Root], locale: Locale) -> String {
    let strings = locale.strings();
    match roots {
        [Root::AnyNumber, ..] => format!("{}: {}", strings.roots, strings.any_number),
        [] => format!("{}: {}", strings.roots, strings.no_real_roots),
        [only] => format!("{}: {}", strings.root, format_root(only, locale)),
        [first, second, ..] => format!(
            "{}: {}, {}",
            strings.roots,
            format_root(first, locale),
            format_root(second, locale)
        ),
    }
}

pub fn render_report(report: &SolveReport, locale: Locale) -> Vec<String> {
    vec![
        report.message.clone(),
        format!(
            "{}: {}",
            locale.strings().discriminant,
            format_number(report.discriminant)
        ),
        render_roots_line(&report.roots, locale),
    ]
}

pub fn render_outcome(outcome: &SolveOutcome, locale: Locale) -> Vec<String> {
    match outcome {
        SolveOutcome::Solved(report) => render_report(report, locale),
        SolveOutcome::Rejected(message) | SolveOutcome::Failed(message) => {
            vec![format!("{}: {message}", locale.strings().error)]
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultPanel {
    #[default]
    Empty,
    Pending {
        request_id: u64,
    },
    Resolved {
        request_id: u64,
        outcome: SolveOutcome,
    },
}

impl ResultPanel {
    pub fn lines(&self, locale: Locale) -> Vec<String> {
        match self {
            Self::Empty => Vec::new(),
            Self::Pending { .. } => vec![locale.strings().computing.to_owned()],
            Self::Resolved { outcome, .. } => render_outcome(outcome, locale),
        }
    }
}

/// One step of a submit: issued, then answered.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveEvent {
    Started { request_id: u64 },
    Finished { request_id: u64, outcome: SolveOutcome },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub request_id: u64,
    /// A newer request had been issued before this one finished.
    pub stale: bool,
}

/// Result area plus the request counter. Completions are written in the
/// order they arrive; a stale completion still overwrites the panel.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultArea {
    panel: ResultPanel,
    last_issued: u64,
}

impl ResultArea {
    pub fn panel(&self) -> &ResultPanel {
        &self.panel
    }

    pub fn last_issued(&self) -> u64 {
        self.last_issued
    }

    pub fn begin(&mut self) -> u64 {
        let request_id = self.last_issued.saturating_add(1);
        self.apply(SolveEvent::Started { request_id });
        request_id
    }

    /// Returns the completion for `Finished`, nothing for `Started`.
    pub fn apply(&mut self, event: SolveEvent) -> Option<Completion> {
        match event {
            SolveEvent::Started { request_id } => {
                self.last_issued = self.last_issued.max(request_id);
                self.panel = ResultPanel::Pending { request_id };
                None
            }
            SolveEvent::Finished {
                request_id,
                outcome,
            } => Some(self.finish(request_id, outcome)),
        }
    }

    pub fn finish(&mut self, request_id: u64, outcome: SolveOutcome) -> Completion {
        self.panel = ResultPanel::Resolved {
            request_id,
            outcome,
        };
        Completion {
            request_id,
            stale: request_id < self.last_issued,
        }
    }

    pub fn lines(&self, locale: Locale) -> Vec<String> {
        self.panel.lines(locale)
    }
}
