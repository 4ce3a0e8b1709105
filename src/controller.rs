//! Submission controller: validation gate, request, notification.
//!
//! A submit intent is checked against the validation gate first. A blocked
//! submit raises one error toast and stops. Otherwise the request is started
//! as a tokio task and the success toast is raised straight away, before the
//! server has answered. When the task resolves it may navigate (redirected
//! success) or log (rejection, transport failure); it never raises a toast.

use crate::client::{FormTransport, SubmitResponse};
use crate::error::SubmitError;
use crate::form::{validate, FormState, FormValues, ValidationError};
use crate::metrics::Metrics;
use crate::navigation::Navigator;
use crate::notify::Notifier;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Toast raised as soon as a submission is issued.
pub const SUBMITTED_MESSAGE: &str = "Form Submitted Successfully";

/// How a submission resolved once the transport returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Status in [200, 400), no redirect followed
    Delivered { status: u16 },

    /// Status in [200, 400) after a redirect; the page navigated to `location`
    Redirected { status: u16, location: String },

    /// Status outside [200, 400)
    Rejected { status: u16, status_text: String },

    /// The request never completed
    Failed { reason: String },
}

impl SubmissionOutcome {
    /// Whether the server acknowledged the submission.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Delivered { .. } | Self::Redirected { .. })
    }
}

/// Result of a submit intent.
#[derive(Debug)]
pub enum SubmitAttempt {
    /// A required field is missing; no request was made
    Blocked(ValidationError),

    /// The request is in flight
    Submitted(PendingSubmission),
}

impl SubmitAttempt {
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked(_))
    }
}

/// Handle to an in-flight submission.
///
/// Dropping it does not cancel the request.
#[derive(Debug)]
pub struct PendingSubmission {
    handle: JoinHandle<SubmissionOutcome>,
}

impl PendingSubmission {
    /// Whether the request has resolved.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the submission to resolve.
    pub async fn outcome(self) -> SubmissionOutcome {
        match self.handle.await {
            Ok(outcome) => outcome,
            Err(e) => SubmissionOutcome::Failed {
                reason: SubmitError::Task(e.to_string()).to_string(),
            },
        }
    }
}

/// Runs the submission pipeline for one form.
///
/// The notifier and navigator are shared services owned by the host page.
#[derive(Clone)]
pub struct SubmissionController {
    transport: Arc<dyn FormTransport>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    metrics: Metrics,
}

impl SubmissionController {
    pub fn new(
        transport: Arc<dyn FormTransport>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
        metrics: Metrics,
    ) -> Self {
        Self {
            transport,
            notifier,
            navigator,
            metrics,
        }
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Submit the values currently held by `state`. Field values are left as they are.
    pub fn submit_form(&self, state: &FormState) -> SubmitAttempt {
        self.submit(state.values())
    }

    /// Validate and, if every required field is present, post the values.
    ///
    /// Must be called from within a tokio runtime. Does not wait for the
    /// response; await the returned `PendingSubmission` to observe it.
    pub fn submit(&self, values: &FormValues) -> SubmitAttempt {
        self.metrics.record_submission();

        if let Err(err) = validate(values) {
            self.metrics.record_blocked();
            tracing::debug!(field = %err.field(), "Submission blocked");
            self.notifier.error(&err.to_string());
            return SubmitAttempt::Blocked(err);
        }

        let transport = self.transport.clone();
        let navigator = self.navigator.clone();
        let metrics = self.metrics.clone();
        let values = values.clone();

        let handle = tokio::spawn(async move {
            let result = transport.submit(&values).await;
            resolve(result, navigator.as_ref(), &metrics)
        });

        self.notifier.success(SUBMITTED_MESSAGE);

        SubmitAttempt::Submitted(PendingSubmission { handle })
    }
}

/// Turn a transport result into an outcome, navigating or logging as needed.
fn resolve(
    result: Result<SubmitResponse, SubmitError>,
    navigator: &dyn Navigator,
    metrics: &Metrics,
) -> SubmissionOutcome {
    match result {
        Ok(response) if response.is_success() => {
            tracing::info!(
                status = response.status,
                redirected = response.redirected,
                "Form submission accepted"
            );
            if response.redirected {
                metrics.record_redirected();
                navigator.navigate(&response.url);
                SubmissionOutcome::Redirected {
                    status: response.status,
                    location: response.url,
                }
            } else {
                metrics.record_delivered();
                SubmissionOutcome::Delivered {
                    status: response.status,
                }
            }
        }
        Ok(response) => rejected(response.status, response.status_text, metrics),
        Err(SubmitError::Status {
            status,
            status_text,
        }) => rejected(status, status_text, metrics),
        Err(e) => {
            metrics.record_failed();
            tracing::warn!(error = %e, "POST form request failed");
            SubmissionOutcome::Failed {
                reason: e.to_string(),
            }
        }
    }
}

fn rejected(status: u16, status_text: String, metrics: &Metrics) -> SubmissionOutcome {
    metrics.record_rejected();
    tracing::warn!(status, status_text = %status_text, "Form submission failed");
    SubmissionOutcome::Rejected {
        status,
        status_text,
    }
}
