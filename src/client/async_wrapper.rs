//! Async wrapper around the synchronous FormClient.
//!
//! The blocking POST runs on tokio's blocking pool via `spawn_blocking`, so a
//! single-threaded host keeps handling input while a submission is outstanding.

use crate::client::{FormClient, SubmitResponse};
use crate::error::{SubmitError, SubmitResult};
use crate::form::FormValues;
use async_trait::async_trait;
use std::sync::Arc;

/// Transport used by the submission controller.
///
/// Implementations must follow redirects and report the final response.
#[async_trait]
pub trait FormTransport: Send + Sync {
    async fn submit(&self, values: &FormValues) -> SubmitResult<SubmitResponse>;
}

/// Async wrapper around synchronous FormClient.
#[derive(Clone)]
pub struct AsyncFormClientImpl {
    client: Arc<FormClient>,
}

impl AsyncFormClientImpl {
    pub fn new(client: FormClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl FormTransport for AsyncFormClientImpl {
    async fn submit(&self, values: &FormValues) -> SubmitResult<SubmitResponse> {
        let client = self.client.clone();
        let values = values.clone();

        tokio::task::spawn_blocking(move || client.submit(&values))
            .await
            .map_err(|e| SubmitError::Task(format!("Task join error: {}", e)))?
    }
}
