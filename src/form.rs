//! Room form: per-field validation, touched tracking and submission

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::RoomSpec;

/// Leading decimal number (or `Infinity`), the way browsers read number
/// inputs: trailing junk after a valid prefix is ignored.
static NUMBER_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([+-]?(?:Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?))")
        .expect("valid number regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Length,
    Width,
    Budget,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Length, Field::Width, Field::Budget];

    fn index(self) -> usize {
        match self {
            Field::Length => 0,
            Field::Width => 1,
            Field::Budget => 2,
        }
    }

    /// Inclusive accepted range.
    pub fn range(self) -> (f64, f64) {
        match self {
            Field::Length | Field::Width => (3.0, 15.0),
            Field::Budget => (500.0, 10000.0),
        }
    }

    fn required_message(self) -> &'static str {
        match self {
            Field::Length => "Room length is required",
            Field::Width => "Room width is required",
            Field::Budget => "Budget is required",
        }
    }

    fn range_message(self) -> String {
        let (min, max) = self.range();
        match self {
            Field::Length => format!("Length must be between {min}-{max} meters"),
            Field::Width => format!("Width must be between {min}-{max} meters"),
            Field::Budget => format!("Budget must be between ${min}-${max}"),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Field::Length => "length",
            Field::Width => "width",
            Field::Budget => "budget",
        };
        f.write_str(s)
    }
}

/// Parse the numeric prefix of `input`; `None` when there is none.
pub fn parse_number(input: &str) -> Option<f64> {
    let caps = NUMBER_PREFIX_RE.captures(input)?;
    caps[1].parse().ok()
}

/// Validate one raw value. An empty string means the field is valid.
pub fn validate_field(field: Field, value: &str) -> String {
    if value.is_empty() {
        return field.required_message().to_string();
    }
    let Some(number) = parse_number(value) else {
        return "Please enter a valid number".to_string();
    };
    let (min, max) = field.range();
    if number < min || number > max {
        return field.range_message();
    }
    String::new()
}

#[derive(Debug, Clone, Default)]
struct FieldState {
    /// Text as entered; this is what gets submitted.
    input: String,
    /// Text shown in the control, normalised on blur.
    display: String,
    error: String,
    touched: bool,
}

/// Submission rejected; holds the message for every failing field.
#[derive(Debug, Clone, PartialEq)]
pub struct FormErrors {
    pub errors: BTreeMap<Field, String>,
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid room details")?;
        for (field, message) in &self.errors {
            write!(f, "\n  {}: {}", field, message)?;
        }
        Ok(())
    }
}

impl std::error::Error for FormErrors {}

impl FormErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}

/// State of the three-field room form.
#[derive(Debug, Clone, Default)]
pub struct RoomForm {
    fields: [FieldState; 3],
}

impl RoomForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a keystroke. Re-validates only fields already touched.
    pub fn change(&mut self, field: Field, value: impl Into<String>) {
        let state = &mut self.fields[field.index()];
        state.input = value.into();
        state.display = state.input.clone();
        if state.touched {
            state.error = validate_field(field, &state.input);
        }
    }

    /// Mark the field touched and validate it. The budget display is
    /// rounded to whole units; the submitted value is unaffected.
    pub fn blur(&mut self, field: Field) {
        let state = &mut self.fields[field.index()];
        state.touched = true;
        state.error = validate_field(field, &state.input);

        if field == Field::Budget && !state.input.is_empty() {
            if let Some(number) = parse_number(&state.input) {
                state.display = if number.is_finite() {
                    format!("{:.0}", number.round())
                } else if number > 0.0 {
                    "Infinity".to_string()
                } else {
                    "-Infinity".to_string()
                };
            }
        }
    }

    /// Validate every field regardless of touched state and, if all pass,
    /// produce the room specification.
    pub fn submit(&mut self) -> Result<RoomSpec, FormErrors> {
        let mut errors = BTreeMap::new();
        for field in Field::ALL {
            let state = &mut self.fields[field.index()];
            state.touched = true;
            state.error = validate_field(field, &state.input);
            if !state.error.is_empty() {
                errors.insert(field, state.error.clone());
            }
        }
        if !errors.is_empty() {
            return Err(FormErrors { errors });
        }

        let value = |field: Field| parse_number(&self.fields[field.index()].input).unwrap_or(0.0);
        Ok(RoomSpec {
            length: value(Field::Length),
            width: value(Field::Width),
            budget: value(Field::Budget),
        })
    }

    /// True when every field has a value and no recorded error.
    pub fn can_submit(&self) -> bool {
        self.fields
            .iter()
            .all(|state| !state.input.is_empty() && state.error.is_empty())
    }

    pub fn display_value(&self, field: Field) -> &str {
        &self.fields[field.index()].display
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.fields[field.index()].touched
    }

    /// Error to show next to the field: only once it has been touched.
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        let state = &self.fields[field.index()];
        (state.touched && !state.error.is_empty()).then_some(state.error.as_str())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
