use std::{collections::BTreeMap, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::{ContactSubmission, Field};

/// Structural email check: `local@domain.tld`, no whitespace, a single `@`.
pub(crate) static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidFormat,
    /// Message returned by the server for this field.
    Rejected(String),
}

impl FieldError {
    pub fn message(&self, field: Field) -> String {
        match (self, field) {
            (FieldError::Required, Field::Name) => "Name is required".to_owned(),
            (FieldError::Required, Field::Email) => "Email is required".to_owned(),
            (FieldError::Required, Field::Message) => "Message is required".to_owned(),
            (FieldError::InvalidFormat, _) => "Invalid email format".to_owned(),
            (FieldError::Rejected(message), _) => message.to_owned(),
        }
    }
}

/// Per-field validation failures. Only failing fields are present.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.0.insert(field, error);
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(|error| error.message(field))
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn merge(&mut self, other: ValidationErrors) {
        self.0.extend(other.0);
    }

    /// Field name to message pairs, as sent over the wire.
    pub fn messages(&self) -> BTreeMap<String, String> {
        self.0
            .iter()
            .map(|(field, error)| (field.to_string(), error.message(*field)))
            .collect()
    }

    /// Rebuilds errors from a `{field: message}` map, skipping unknown fields.
    pub fn from_messages<K, V>(messages: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut errors = Self::new();
        for (field, message) in messages {
            if let Ok(field) = Field::from_str(field.as_ref()) {
                errors.insert(field, FieldError::Rejected(message.into()));
            }
        }
        errors
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages = self
            .0
            .iter()
            .map(|(field, error)| format!("{field}: {}", error.message(*field)))
            .collect::<Vec<_>>();

        write!(f, "{}", messages.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, error) in &self.0 {
            map.serialize_entry(field.as_ref(), &error.message(*field))?;
        }
        map.end()
    }
}

/// Local form rules. Every field is checked, all violations are reported.
pub fn validate(submission: &ContactSubmission) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if submission.name.trim().is_empty() {
        errors.insert(Field::Name, FieldError::Required);
    }

    if submission.email.trim().is_empty() {
        errors.insert(Field::Email, FieldError::Required);
    } else if !is_valid_email(&submission.email) {
        errors.insert(Field::Email, FieldError::InvalidFormat);
    }

    if submission.message.trim().is_empty() {
        errors.insert(Field::Message, FieldError::Required);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
