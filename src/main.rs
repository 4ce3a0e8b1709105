//! Contact form - terminal host
//!
//! Hosts one contact form on the terminal: each stdin line is either a field
//! update (`name=Ada`), `submit`, `show` or `quit`. Toasts are printed to
//! stdout as they are raised; logs go to stderr.

use anyhow::Result;
use contact_form::client::{AsyncFormClientImpl, FormTransport};
use contact_form::controller::{PendingSubmission, SubmitAttempt};
use contact_form::{
    Config, FormClient, FormState, Metrics, PageLocation, SubmissionController, ToastQueue,
};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize logging (stderr only, stdout is the page)
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Submitting contact form to {}", config.submit_url);

    let metrics = Metrics::new();
    let toasts = ToastQueue::new(config.toast_ttl());
    let location = PageLocation::new();
    let transport = Arc::new(AsyncFormClientImpl::new(FormClient::new(
        &config,
        metrics.clone(),
    ))) as Arc<dyn FormTransport>;

    let controller = SubmissionController::new(
        transport,
        Arc::new(toasts.clone()),
        Arc::new(location.clone()),
        metrics.clone(),
    );

    toasts.mount();
    let mut events = toasts.subscribe();
    let printer = tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(toast) => println!("[{}] {}", toast.severity, toast.message),
                Err(RecvError::Lagged(skipped)) => warn!(skipped, "Toast printer lagged"),
                Err(RecvError::Closed) => break,
            }
        }
    });

    let mut state = FormState::new();
    let mut pending: Vec<PendingSubmission> = Vec::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "" => continue,
            "quit" | "exit" => break,
            "submit" => {
                if let SubmitAttempt::Submitted(submission) = controller.submit_form(&state) {
                    pending.retain(|p| !p.is_finished());
                    pending.push(submission);
                }
            }
            "show" => {
                println!("{:#?}", state.values());
                if let Some(url) = location.current() {
                    println!("location: {}", url);
                }
            }
            _ => match line.split_once('=') {
                Some((field, value)) => {
                    if let Err(e) = state.set_input(field.trim(), value) {
                        println!("{}", e);
                    }
                }
                None => println!("expected <field>=<value>, submit, show or quit"),
            },
        }
    }

    info!(
        outstanding = pending.len(),
        "Waiting for outstanding submissions"
    );
    let outcomes = futures::future::join_all(pending.into_iter().map(PendingSubmission::outcome))
        .await;
    for outcome in outcomes {
        info!(?outcome, "Submission resolved");
    }

    toasts.unmount();
    printer.abort();

    let summary = metrics.summary();
    info!(
        submissions = summary.submissions_total,
        blocked = summary.submissions_blocked,
        delivered = summary.submissions_delivered,
        redirected = summary.submissions_redirected,
        rejected = summary.submissions_rejected,
        failed = summary.submissions_failed,
        http_avg_ms = summary.http_duration_avg_ms,
        "Contact form closed"
    );

    Ok(())
}
