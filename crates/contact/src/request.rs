use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{ContactSubmission, Field, FieldError, ValidationErrors, validation::EMAIL_PATTERN};

/// JSON body accepted by the contact endpoint.
///
/// Missing fields deserialize as empty strings so that they surface as
/// field errors rather than as a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ContactRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[serde(default)]
    // validator's rule alone accepts single-label domains such as `a@b`
    #[validate(
        email(message = "Invalid email format"),
        regex(path = *EMAIL_PATTERN, message = "Invalid email format")
    )]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

impl ContactRequest {
    /// Runs the schema and maps failures onto [`ValidationErrors`].
    pub fn check(&self) -> Result<(), ValidationErrors> {
        let Err(validation_errors) = self.validate() else {
            return Ok(());
        };

        let mut errors = ValidationErrors::new();

        for (field, field_errors) in validation_errors.field_errors() {
            let name: &str = &field;
            let Ok(field) = Field::from_str(name) else {
                continue;
            };

            let Some(first) = field_errors.first() else {
                continue;
            };

            let error = match &*first.code {
                "length" => FieldError::Required,
                "email" | "regex" => FieldError::InvalidFormat,
                _ => FieldError::Rejected(
                    first
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "Validation failed".to_owned()),
                ),
            };

            errors.insert(field, error);
        }

        Err(errors)
    }
}

impl From<ContactSubmission> for ContactRequest {
    fn from(value: ContactSubmission) -> Self {
        Self {
            name: value.name,
            email: value.email,
            message: value.message,
        }
    }
}

impl From<&ContactSubmission> for ContactRequest {
    fn from(value: &ContactSubmission) -> Self {
        value.clone().into()
    }
}
