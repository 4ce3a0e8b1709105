use async_trait::async_trait;
use contact_form::client::FormTransport;
use contact_form::error::{SubmitError, SubmitResult};
use contact_form::{FormValues, SubmitResponse};
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;

#[derive(Clone)]
enum Answer {
    Response(SubmitResponse),
    Status(u16, String),
    Transport(String),
}

/// Transport that records submissions and answers with a canned result.
///
/// When gated, each call waits for one `release()` before answering.
#[derive(Clone)]
pub struct MockTransport {
    calls: Arc<Mutex<Vec<FormValues>>>,
    answer: Answer,
    gate: Option<Arc<Semaphore>>,
}

impl MockTransport {
    /// Answers every call with `200 OK` from the submit URL.
    pub fn ok() -> Self {
        Self::responding(SubmitResponse {
            status: 200,
            status_text: "OK".to_string(),
            url: "http://localhost:8080/submit-form".to_string(),
            redirected: false,
        })
    }

    pub fn responding(response: SubmitResponse) -> Self {
        Self::with_answer(Answer::Response(response))
    }

    pub fn status(status: u16, status_text: &str) -> Self {
        Self::with_answer(Answer::Status(status, status_text.to_string()))
    }

    pub fn unreachable(reason: &str) -> Self {
        Self::with_answer(Answer::Transport(reason.to_string()))
    }

    fn with_answer(answer: Answer) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            answer,
            gate: None,
        }
    }

    /// Hold every answer until `release()` is called.
    pub fn gated(mut self) -> Self {
        self.gate = Some(Arc::new(Semaphore::new(0)));
        self
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(1);
        }
    }

    pub fn calls(&self) -> Vec<FormValues> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl FormTransport for MockTransport {
    async fn submit(&self, values: &FormValues) -> SubmitResult<SubmitResponse> {
        self.calls.lock().unwrap().push(values.clone());

        if let Some(gate) = &self.gate {
            if let Ok(permit) = gate.acquire().await {
                permit.forget();
            }
        }

        match &self.answer {
            Answer::Response(response) => Ok(response.clone()),
            Answer::Status(status, status_text) => Err(SubmitError::Status {
                status: *status,
                status_text: status_text.clone(),
            }),
            Answer::Transport(reason) => Err(SubmitError::Transport(reason.clone())),
        }
    }
}
