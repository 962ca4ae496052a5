// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::Coefficients;

pub const DEFAULT_FIELD_TEXT: &str = "0";

pub const NEXT_LABEL: &str = "Следующий";
pub const SOLVE_LABEL: &str = "Решить";
pub const CLEAR_LABEL: &str = "C";
pub const SIGN_LABEL: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    A,
    B,
    C,
}

impl FieldName {
    pub const ALL: [Self; 3] = [Self::A, Self::B, Self::C];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
        }
    }

    pub const fn next(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::C,
            Self::C => Self::A,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Idle,
    Active,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub text: String,
    pub highlight: Highlight,
}

impl Field {
    fn new(text: &str, highlight: Highlight) -> Self {
        let text = if text.is_empty() {
            DEFAULT_FIELD_TEXT
        } else {
            text
        };
        Self {
            text: text.to_owned(),
            highlight,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadCommand {
    Next,
    Solve,
    Clear,
    ToggleSign,
    Append(char),
}

impl KeypadCommand {
    /// Maps a button label to its command. Labels that are neither a known
    /// command nor a single character have no meaning and map to `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            NEXT_LABEL | "Next" => Some(Self::Next),
            SOLVE_LABEL | "Solve" => Some(Self::Solve),
            CLEAR_LABEL => Some(Self::Clear),
            SIGN_LABEL => Some(Self::ToggleSign),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Some(Self::Append(ch)),
                    _ => None,
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum KeypadEvent {
    FieldChanged { field: FieldName, text: String },
    CursorMoved { from: FieldName, to: FieldName },
    SolveRequested(Coefficients),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadState {
    fields: [Field; 3],
    cursor: FieldName,
}

impl Default for KeypadState {
    fn default() -> Self {
        Self::with_texts([DEFAULT_FIELD_TEXT; 3])
    }
}

impl KeypadState {
    /// Starts with the given texts for `a`, `b`, `c` and `a` active. Empty
    /// texts fall back to `"0"`.
    pub fn with_texts(texts: [&str; 3]) -> Self {
        let [a, b, c] = texts;
        Self {
            fields: [
                Field::new(a, Highlight::Active),
                Field::new(b, Highlight::Idle),
                Field::new(c, Highlight::Idle),
            ],
            cursor: FieldName::A,
        }
    }

    pub fn cursor(&self) -> FieldName {
        self.cursor
    }

    pub fn field(&self, name: FieldName) -> &Field {
        &self.fields[name.index()]
    }

    pub fn text(&self, name: FieldName) -> &str {
        &self.field(name).text
    }

    pub fn coefficients(&self) -> Coefficients {
        Coefficients::parse_fields(
            self.text(FieldName::A),
            self.text(FieldName::B),
            self.text(FieldName::C),
        )
    }

    pub fn press(&mut self, label: &str) -> Vec<KeypadEvent> {
        match KeypadCommand::from_label(label) {
            Some(command) => self.dispatch(command),
            None => Vec::new(),
        }
    }

    pub fn dispatch(&mut self, command: KeypadCommand) -> Vec<KeypadEvent> {
        match command {
            KeypadCommand::Next => {
                let from = self.cursor;
                let to = from.next();
                self.fields[from.index()].highlight = Highlight::Completed;
                self.fields[to.index()].highlight = Highlight::Active;
                self.cursor = to;
                vec![KeypadEvent::CursorMoved { from, to }]
            }
            KeypadCommand::Solve => vec![KeypadEvent::SolveRequested(self.coefficients())],
            KeypadCommand::Clear => self.set_active_text(DEFAULT_FIELD_TEXT.to_owned()),
            KeypadCommand::ToggleSign => {
                let current = self.text(self.cursor);
                let toggled = match current.strip_prefix('-') {
                    Some(rest) if !rest.is_empty() => rest.to_owned(),
                    Some(_) => DEFAULT_FIELD_TEXT.to_owned(),
                    None => format!("-{current}"),
                };
                self.set_active_text(toggled)
            }
            KeypadCommand::Append(ch) => {
                let current = self.text(self.cursor);
                let appended = if current == DEFAULT_FIELD_TEXT {
                    ch.to_string()
                } else {
                    format!("{current}{ch}")
                };
                self.set_active_text(appended)
            }
        }
    }

    fn set_active_text(&mut self, text: String) -> Vec<KeypadEvent> {
        let field = self.cursor;
        self.fields[field.index()].text = text.clone();
        vec![KeypadEvent::FieldChanged { field, text }]
    }
}
