use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Contact form field, addressed by its lowercase name.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Message,
}

/// The name/email/message triple typed into the contact form.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Overwrites a single field. No validation happens here.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_field_parses_lowercase_names() {
        assert_eq!(Field::from_str("name").unwrap(), Field::Name);
        assert_eq!(Field::from_str("email").unwrap(), Field::Email);
        assert_eq!(Field::from_str("message").unwrap(), Field::Message);
        assert!(Field::from_str("subject").is_err());
        assert_eq!(Field::Email.to_string(), "email");
    }

    #[test]
    fn test_set_overwrites_only_target_field() {
        let mut submission = ContactSubmission::new("Alice", "alice@example.com", "Hi");
        submission.set(Field::Message, "Hello again");

        assert_eq!(submission.get(Field::Name), "Alice");
        assert_eq!(submission.get(Field::Email), "alice@example.com");
        assert_eq!(submission.get(Field::Message), "Hello again");
    }
}
