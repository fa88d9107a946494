use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

pub const MIN_MESSAGE_LEN: usize = 10;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Message must be at least {} characters", MIN_MESSAGE_LEN)]
    TooShort,
}

/// Field-scoped validation errors, keyed in form order.
pub type FormErrors = BTreeMap<Field, FieldError>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn check(&self, field: Field) -> Option<FieldError> {
        let value = self.value(field).trim();
        if value.is_empty() {
            return Some(FieldError::Required(field.label()));
        }
        match field {
            Field::Email if !EMAIL_RE.is_match(value) => Some(FieldError::InvalidEmail),
            Field::Message if value.chars().count() < MIN_MESSAGE_LEN => {
                Some(FieldError::TooShort)
            }
            _ => None,
        }
    }

    /// Every failing field with its error. Empty when the form is valid.
    pub fn validate(&self) -> FormErrors {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.check(field).map(|err| (field, err)))
            .collect()
    }

    /// Plain-text mail body, before encoding.
    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name.trim(),
            self.email.trim(),
            self.message.trim()
        )
    }

    /// Builds the `mailto:` URI addressed to `recipient`, or the errors that
    /// block it.
    pub fn mailto(&self, recipient: &str) -> Result<String, FormErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            urlencoding::encode(self.subject.trim()),
            urlencoding::encode(&self.body())
        ))
    }
}
