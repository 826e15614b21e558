use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::config::FormVariant;
use crate::i18n::{t, Lang};

/// Deliberately permissive: something, `@`, something, `.`, something.
/// U+FEFF counts as whitespace, as it does for browsers.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$")
        .expect("email pattern compiles")
});

fn is_blank(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_whitespace() || c == '\u{feff}')
}

/// The required fields of the contact form, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn error_id(self) -> String {
        format!("{}-error", self.id())
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Field::Name => "form.name",
            Field::Email => "form.email",
            Field::Message => "form.message",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Field::Name => 0,
            Field::Email => 1,
            Field::Message => 2,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(Field),
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

impl FieldError {
    fn key(self) -> &'static str {
        match self {
            FieldError::Required(Field::Name) => "form.error.name_required",
            FieldError::Required(Field::Email) => "form.error.email_required",
            FieldError::Required(Field::Message) => "form.error.message_required",
            FieldError::InvalidEmail => "form.error.email_invalid",
        }
    }

    /// Text shown next to the field.
    pub fn message(self, variant: FormVariant, lang: Lang) -> String {
        match variant {
            FormVariant::Plain => self.to_string(),
            FormVariant::Bilingual => t(lang, self.key()),
        }
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Check one field on its own.
pub fn validate_field(field: Field, value: &str) -> Result<(), FieldError> {
    if is_blank(value) {
        return Err(FieldError::Required(field));
    }
    if field == Field::Email && !is_valid_email(value) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }
}

/// Failures of one submission, in evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    failures: Vec<(Field, FieldError)>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failures(&self) -> &[(Field, FieldError)] {
        &self.failures
    }

    /// Where keyboard focus goes after a blocked submission.
    pub fn first_invalid(&self) -> Option<Field> {
        self.failures.first().map(|(field, _)| *field)
    }
}

pub fn validate_submission(values: &FormValues) -> ValidationReport {
    let failures = Field::ALL
        .iter()
        .filter_map(|&field| {
            validate_field(field, values.get(field))
                .err()
                .map(|err| (field, err))
        })
        .collect();
    ValidationReport { failures }
}

/// Error text currently attached to each field; `None` means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotations {
    messages: [Option<String>; 3],
}

impl Annotations {
    pub fn mark(&mut self, field: Field, message: String) {
        self.messages[field.index()] = Some(message);
    }

    pub fn clear(&mut self, field: Field) {
        self.messages[field.index()] = None;
    }

    pub fn clear_all(&mut self) {
        self.messages = Default::default();
    }

    pub fn is_invalid(&self, field: Field) -> bool {
        self.messages[field.index()].is_some()
    }

    pub fn message(&self, field: Field) -> Option<&str> {
        self.messages[field.index()].as_deref()
    }

    pub fn count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_some()).count()
    }

    /// Replace every annotation with the failures of `report`.
    pub fn apply_report(&mut self, report: &ValidationReport, variant: FormVariant, lang: Lang) {
        self.clear_all();
        for (field, err) in report.failures() {
            self.mark(*field, err.message(variant, lang));
        }
    }

    /// Record the outcome of re-checking a single field.
    pub fn apply_check(
        &mut self,
        field: Field,
        outcome: Result<(), FieldError>,
        variant: FormVariant,
        lang: Lang,
    ) {
        match outcome {
            Ok(()) => self.clear(field),
            Err(err) => self.mark(field, err.message(variant, lang)),
        }
    }

    /// Typing into an invalid field drops its error without re-validating.
    /// Returns whether anything changed.
    pub fn edited(&mut self, field: Field) -> bool {
        if !self.is_invalid(field) {
            return false;
        }
        self.clear(field);
        true
    }
}
