//! Field values held by the contact form.

use crate::error::FormError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One named, independently editable input of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Message];

    /// Input name as it appears in the payload.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "phone" => Ok(Field::Phone),
            "message" => Ok(Field::Message),
            other => Err(FormError::UnknownField(other.to_string())),
        }
    }
}

/// Current contents of the four form fields.
///
/// `None` means the field was never provided. Serializes to the submission
/// payload: every key is always present and absent values become `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormValues {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

impl FormValues {
    /// Create a form with every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value of a field, if it has been provided.
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Phone => self.phone.as_deref(),
            Field::Message => self.message.as_deref(),
        }
    }

    /// Produce a copy with one field replaced and every other field unchanged.
    pub fn with_field(&self, field: Field, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = Some(value.into());
        match field {
            Field::Name => next.name = value,
            Field::Email => next.email = value,
            Field::Phone => next.phone = value,
            Field::Message => next.message = value,
        }
        next
    }

    /// Whether the field has ever been assigned a value.
    pub fn is_present(&self, field: Field) -> bool {
        self.get(field).is_some()
    }
}
