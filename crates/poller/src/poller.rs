use std::time::Duration;

use chrono::Utc;

use hwbot_common::error::BotError;
use hwbot_common::types::PollState;
use hwbot_notifier::Notifier;

use crate::api::HomeworkApiClient;
use crate::status::{parse_record, parse_status};
use crate::validator::validate_response;

/// Result of a single polling step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The API reported no status changes.
    Empty,
    /// A new status message was delivered.
    Notified(String),
    /// The latest status matches the last delivered message; nothing sent.
    Unchanged,
    /// The cycle failed; carries the failure notice that was attempted.
    Failed(String),
}

/// Polls the homework API on a fixed cadence and relays status changes.
pub struct HomeworkPoller<N: Notifier> {
    client: HomeworkApiClient,
    notifier: N,
    retry_period: Duration,
    state: PollState,
}

impl<N: Notifier> HomeworkPoller<N> {
    pub fn new(client: HomeworkApiClient, notifier: N, retry_period: Duration) -> Self {
        Self {
            client,
            notifier,
            retry_period,
            state: PollState::new(now_unix()),
        }
    }

    /// Start polling from a specific unix time instead of "now".
    pub fn with_start_timestamp(mut self, timestamp: i64) -> Self {
        self.state.next_timestamp = timestamp;
        self
    }

    pub fn state(&self) -> &PollState {
        &self.state
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Alternate between polling and sleeping forever.
    ///
    /// Per-cycle failures are reported and absorbed; the only way out is
    /// cancelling the future.
    pub async fn run(&mut self) {
        tracing::info!(
            from_date = self.state.next_timestamp,
            retry_period_secs = self.retry_period.as_secs(),
            "Homework poller started"
        );

        loop {
            let outcome = self.poll_once().await;
            tracing::debug!(?outcome, next_timestamp = self.state.next_timestamp, "Cycle finished");
            tokio::time::sleep(self.retry_period).await;
        }
    }

    /// Run one fetch → validate → extract → notify step.
    pub async fn poll_once(&mut self) -> CycleOutcome {
        match self.check_for_updates().await {
            Ok(outcome) => outcome,
            Err(e) => self.report_failure(e).await,
        }
    }

    async fn check_for_updates(&mut self) -> Result<CycleOutcome, BotError> {
        let payload = self.client.fetch(self.state.next_timestamp).await?;
        let response = validate_response(&payload)?;

        // Only the most recent record is reported.
        let Some(latest) = response.homeworks.last() else {
            tracing::info!(from_date = self.state.next_timestamp, "No status changes yet");
            self.state.next_timestamp = now_unix();
            return Ok(CycleOutcome::Empty);
        };

        let message = parse_status(&parse_record(latest)?)?;

        if self.state.last_notified_message.as_deref() == Some(message.as_str()) {
            tracing::debug!(message = %message, "Status unchanged, skipping notification");
            self.state.next_timestamp = now_unix();
            return Ok(CycleOutcome::Unchanged);
        }

        self.notifier.notify(&message).await?;
        tracing::info!(message = %message, "Status change notified");

        self.state.last_notified_message = Some(message.clone());
        self.state.next_timestamp = now_unix();
        Ok(CycleOutcome::Notified(message))
    }

    /// Best-effort failure notice. `next_timestamp` is left untouched so the
    /// next cycle asks for the same window again.
    async fn report_failure(&self, error: BotError) -> CycleOutcome {
        let notice = format!("Program failure: {error}");
        tracing::error!(error = %error, "Polling cycle failed");

        if let Err(delivery) = self.notifier.notify(&notice).await {
            tracing::warn!(error = %delivery, "Failure notice could not be delivered");
        }

        CycleOutcome::Failed(notice)
    }
}

fn now_unix() -> i64 {
    Utc::now().timestamp()
}
