//! Form data: the field values, the holder that owns them, and the validation gate.
//!
//! `FormValues` is replaced wholesale on every change, never patched in place.
//! The validation gate only checks presence; a field that was typed into and
//! then cleared still counts as provided.

pub mod state;
pub mod validation;
pub mod values;

pub use state::FormState;
pub use validation::{validate, ValidationError};
pub use values::{Field, FormValues};
