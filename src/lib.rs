//! Contact form client - the submission pipeline behind a four-field contact form.
//!
//! The form holds a name, email, phone number and free-text message. On submit
//! the first three are checked for presence, then the values are POSTed as JSON
//! to a configurable endpoint, following any redirect the server issues.
//!
//! # Architecture
//!
//! - **form**: Field values, the state holder and the validation gate
//! - **controller**: Runs validation, the request and the notifications
//! - **client**: `ureq` transport plus its async wrapper
//! - **notify**: Notifier trait and the shared toast queue
//! - **navigation**: Navigator trait and a recording implementation
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types
//! - **metrics**: Submission counters and HTTP timing

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod metrics;
pub mod navigation;
pub mod notify;

pub use client::{FormClient, SubmitResponse};
pub use config::Config;
pub use controller::{SubmissionController, SubmissionOutcome, SubmitAttempt, SUBMITTED_MESSAGE};
pub use error::{ConfigError, FormError, SubmitError};
pub use form::{validate, Field, FormState, FormValues, ValidationError};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use navigation::{Navigator, PageLocation};
pub use notify::{Notifier, Severity, Toast, ToastQueue};
