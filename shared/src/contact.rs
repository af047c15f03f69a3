use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const NAME_MAX_CHARS: usize = 100;
pub const EMAIL_MAX_CHARS: usize = 255;
pub const MESSAGE_MAX_CHARS: usize = 1000;

// Local part may not start with '.', and '..' is rejected separately since the
// regex engine has no lookahead.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\s\-()]{10,20}$").expect("phone pattern is valid"));

/// A field of the contact form, in the order the form shows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
        }
    }

    /// Checks an already trimmed value. Rules run in order required, format,
    /// length and the first failure wins.
    pub fn check(self, value: &str) -> Result<(), FieldError> {
        match self {
            Field::Name => {
                required(value, "Name is required")?;
                max_chars(value, NAME_MAX_CHARS, "Name must be less than 100 characters")
            }
            Field::Email => {
                required(value, "Email is required")?;
                if !is_valid_email(value) {
                    return Err(FieldError::invalid("Please enter a valid email address"));
                }
                max_chars(value, EMAIL_MAX_CHARS, "Email must be less than 255 characters")
            }
            Field::Phone => {
                required(value, "Phone number is required")?;
                if !PHONE_RE.is_match(value) {
                    return Err(FieldError::invalid("Please enter a valid phone number"));
                }
                Ok(())
            }
            Field::Message => {
                required(value, "Message is required")?;
                max_chars(value, MESSAGE_MAX_CHARS, "Message must be less than 1000 characters")
            }
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    RequiredFieldMissing,
    InvalidFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    fn required(message: &str) -> Self {
        Self {
            kind: FieldErrorKind::RequiredFieldMissing,
            message: message.to_string(),
        }
    }

    fn invalid(message: &str) -> Self {
        Self {
            kind: FieldErrorKind::InvalidFormat,
            message: message.to_string(),
        }
    }
}

fn required(value: &str, message: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::required(message));
    }
    Ok(())
}

fn max_chars(value: &str, max: usize, message: &str) -> Result<(), FieldError> {
    if value.chars().count() > max {
        return Err(FieldError::invalid(message));
    }
    Ok(())
}

fn is_valid_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_RE.is_match(value)
}

/// One error per invalid field, keyed and ordered by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(transparent)]
#[error("invalid contact form fields: {}", self.field_list())]
pub struct ValidationErrors(BTreeMap<Field, FieldError>);

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn message(&self, field: Field) -> Option<&str> {
        self.get(field).map(|e| e.message.as_str())
    }

    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.0.insert(field, error);
    }

    pub fn remove(&mut self, field: Field) -> Option<FieldError> {
        self.0.remove(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }

    fn field_list(&self) -> String {
        self.0
            .keys()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Body of a `422` answer from the contact endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFailure {
    pub error: String,
    pub fields: ValidationErrors,
}

impl ValidationFailure {
    pub const MESSAGE: &'static str = "Validation failed";

    pub fn new(fields: ValidationErrors) -> Self {
        Self {
            error: Self::MESSAGE.to_string(),
            fields,
        }
    }
}

/// Strips surrounding whitespace the way browsers trim form values, which
/// also drops the zero width no-break space (U+FEFF).
pub fn trim_input(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Raw, untrimmed values as typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
}

impl ContactInput {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Message => self.message = value,
        }
    }

    pub fn check_field(&self, field: Field) -> Result<(), FieldError> {
        field.check(trim_input(self.get(field)))
    }

    pub fn validate(&self) -> Result<ContactSubmission, ValidationErrors> {
        validate(self)
    }
}

/// A contact request that passed every field rule. Values are trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    name: String,
    email: String,
    phone: String,
    message: String,
}

impl ContactSubmission {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Validates all four fields independently. Either every field passes and a
/// submission is returned, or each failing field gets exactly one error.
pub fn validate(input: &ContactInput) -> Result<ContactSubmission, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    for field in Field::ALL {
        if let Err(error) = input.check_field(field) {
            errors.insert(field, error);
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ContactSubmission {
        name: trim_input(&input.name).to_string(),
        email: trim_input(&input.email).to_string(),
        phone: trim_input(&input.phone).to_string(),
        message: trim_input(&input.message).to_string(),
    })
}
