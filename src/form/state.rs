//! Holder for the authoritative form values.

use super::values::{Field, FormValues};
use crate::error::FormError;

/// Owns the current `FormValues` and counts change notifications.
///
/// Every update swaps in a fresh `FormValues`; callers holding an earlier
/// snapshot keep seeing the old values.
#[derive(Debug, Default)]
pub struct FormState {
    values: FormValues,
    renders: u64,
}

impl FormState {
    /// Create a holder with every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current values.
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Snapshot of the current values for a submission.
    pub fn snapshot(&self) -> FormValues {
        self.values.clone()
    }

    /// Number of change notifications emitted so far.
    pub fn renders(&self) -> u64 {
        self.renders
    }

    /// Replace one field's value, leaving every other field unchanged.
    ///
    /// Always emits a change notification, even when the value is unchanged.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.values = self.values.with_field(field, value);
        self.renders += 1;

        tracing::trace!(
            field = %field,
            value = ?self.values.get(field),
            renders = self.renders,
            "Form field changed"
        );
    }

    /// Input change handler: resolve the input name and update that field.
    pub fn set_input(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let field: Field = name.parse()?;
        self.set_field(field, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_field_updates_one_field() {
        let mut state = FormState::new();
        state.set_field(Field::Name, "Ada");

        assert_eq!(state.values().get(Field::Name), Some("Ada"));
        assert_eq!(state.values().email, None);
        assert_eq!(state.renders(), 1);
    }

    #[test]
    fn test_same_value_twice_is_idempotent() {
        let mut state = FormState::new();
        state.set_field(Field::Email, "ada@example.com");
        let before = state.snapshot();

        state.set_field(Field::Email, "ada@example.com");

        assert_eq!(state.values(), &before);
        assert_eq!(state.renders(), 2);
    }

    #[test]
    fn test_snapshot_is_not_aliased() {
        let mut state = FormState::new();
        state.set_field(Field::Phone, "123");
        let snapshot = state.snapshot();

        state.set_field(Field::Phone, "456");

        assert_eq!(snapshot.phone.as_deref(), Some("123"));
        assert_eq!(state.values().phone.as_deref(), Some("456"));
    }

    #[test]
    fn test_set_input_rejects_unknown_name() {
        let mut state = FormState::new();
        let result = state.set_input("company", "Acme");

        assert_eq!(result, Err(FormError::UnknownField("company".to_string())));
        assert_eq!(state.renders(), 0);
        assert_eq!(state.values(), &FormValues::new());
    }

    #[test]
    fn test_set_input_by_name() {
        let mut state = FormState::new();
        state.set_input("message", "Hello there").unwrap();
        assert_eq!(state.values().message.as_deref(), Some("Hello there"));
    }
}
