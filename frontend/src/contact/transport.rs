use std::future::Future;

use fortisecure_shared::{ContactSubmission, ValidationErrors, ValidationFailure};
use futures::future::{abortable, select, AbortHandle, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use thiserror::Error;
use web_sys::{AbortController, AbortSignal};

/// How a validated submission leaves the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitMode {
    /// Waits a fixed delay and always succeeds.
    Simulated { delay_ms: u32 },
    Backend {
        endpoint: String,
        timeout_ms: u32,
        retry: RetryPolicy,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay_ms: u32,
    pub max_delay_ms: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms: 500,
            max_delay_ms: 4_000,
        }
    }
}

impl RetryPolicy {
    /// Wait after the failed `attempt` (1-based) before trying again.
    pub fn backoff_ms(&self, attempt: u32) -> u32 {
        let exponent = attempt.saturating_sub(1).min(16);
        self.base_delay_ms
            .saturating_mul(1u32 << exponent)
            .min(self.max_delay_ms)
    }

    pub fn should_retry(&self, attempt: u32, error: &SubmissionError) -> bool {
        attempt < self.max_attempts && error.is_retryable()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("The server took too long to respond.")]
    Timeout,
    #[error("Network error: {0}")]
    Network(String),
    #[error("Please correct the highlighted fields.")]
    Rejected(ValidationErrors),
    #[error("Server responded with status {0}.")]
    Server(u16),
    #[error("The submission was cancelled.")]
    Cancelled,
}

impl SubmissionError {
    /// True only when the server cannot have relayed the inquiry yet.
    ///
    /// A timed out POST may still be relayed server side, so it is never
    /// repeated. A failed fetch never produced a response, and a 5xx is what
    /// the API answers when its relay failed.
    pub fn is_retryable(&self) -> bool {
        match self {
            SubmissionError::Network(_) => true,
            SubmissionError::Server(status) => *status >= 500,
            SubmissionError::Timeout
            | SubmissionError::Rejected(_)
            | SubmissionError::Cancelled => false,
        }
    }
}

/// Stops a running delivery: pending backoff waits and the fetch itself.
pub struct DeliveryHandle {
    abort: AbortHandle,
    controller: Option<AbortController>,
}

impl DeliveryHandle {
    pub fn cancel(&self) {
        self.abort.abort();
        if let Some(controller) = &self.controller {
            controller.abort();
        }
    }
}

/// Starts delivering `submission`. The returned future resolves to
/// `Err(SubmissionError::Cancelled)` once the handle is cancelled, and no
/// further attempt is made after that.
pub fn start(
    mode: SubmitMode,
    submission: ContactSubmission,
) -> (impl Future<Output = Result<(), SubmissionError>>, DeliveryHandle) {
    let controller = match AbortController::new() {
        Ok(controller) => Some(controller),
        Err(e) => {
            warn!("AbortController unavailable, fetches cannot be aborted: {:?}", e);
            None
        }
    };
    let signal = controller.as_ref().map(AbortController::signal);

    let delivery = async move {
        run(
            &mode,
            || post_once(&mode, signal.as_ref(), &submission),
            |ms| TimeoutFuture::new(ms),
        )
        .await
    };

    let (delivery, abort) = abortable(delivery);
    let future = async move { delivery.await.unwrap_or(Err(SubmissionError::Cancelled)) };

    (future, DeliveryHandle { abort, controller })
}

/// Drives one delivery. `post` performs a single attempt and `sleep` waits the
/// given number of milliseconds.
pub async fn run<P, PF, S, SF>(
    mode: &SubmitMode,
    mut post: P,
    mut sleep: S,
) -> Result<(), SubmissionError>
where
    P: FnMut() -> PF,
    PF: Future<Output = Result<(), SubmissionError>>,
    S: FnMut(u32) -> SF,
    SF: Future<Output = ()>,
{
    match mode {
        SubmitMode::Simulated { delay_ms } => {
            sleep(*delay_ms).await;
            info!("Simulated contact submission finished after {}ms", delay_ms);
            Ok(())
        }
        SubmitMode::Backend { retry, .. } => {
            let mut attempt = 1;
            loop {
                match post().await {
                    Ok(()) => {
                        info!("Contact submission accepted on attempt {}", attempt);
                        return Ok(());
                    }
                    Err(e) if retry.should_retry(attempt, &e) => {
                        let wait = retry.backoff_ms(attempt);
                        warn!(
                            "Contact submission attempt {} failed: {}, retrying in {}ms",
                            attempt, e, wait
                        );
                        sleep(wait).await;
                        attempt += 1;
                    }
                    Err(e) => {
                        warn!("Contact submission failed after {} attempt(s): {}", attempt, e);
                        return Err(e);
                    }
                }
            }
        }
    }
}

async fn post_once(
    mode: &SubmitMode,
    signal: Option<&AbortSignal>,
    submission: &ContactSubmission,
) -> Result<(), SubmissionError> {
    let SubmitMode::Backend {
        endpoint,
        timeout_ms,
        ..
    } = mode
    else {
        return Ok(());
    };

    let request = Request::post(endpoint)
        .abort_signal(signal)
        .json(submission)
        .map_err(|e| SubmissionError::Network(e.to_string()))?;

    let send = Box::pin(request.send());
    let timeout = Box::pin(TimeoutFuture::new(*timeout_ms));
    let response = match select(send, timeout).await {
        Either::Left((result, _)) => result.map_err(|e| SubmissionError::Network(e.to_string()))?,
        Either::Right(_) => return Err(SubmissionError::Timeout),
    };

    let status = response.status();
    if (200..300).contains(&status) {
        return Ok(());
    }
    let body = response.text().await.unwrap_or_default();
    Err(classify_failure(status, &body))
}

/// Maps a non-2xx answer from the contact API to an error.
fn classify_failure(status: u16, body: &str) -> SubmissionError {
    if status == 422 {
        if let Ok(failure) = serde_json::from_str::<ValidationFailure>(body) {
            return SubmissionError::Rejected(failure.fields);
        }
    }
    SubmissionError::Server(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::pin::Pin;
    use std::task::{Context, Poll};

    use fortisecure_shared::Field;
    use futures::executor::block_on;
    use futures::future::ready;

    fn backend() -> SubmitMode {
        SubmitMode::Backend {
            endpoint: "/api/contact".into(),
            timeout_ms: 15_000,
            retry: RetryPolicy::default(),
        }
    }

    /// Pending for one poll, like a real timer would be.
    struct YieldOnce(bool);

    impl Future for YieldOnce {
        type Output = ();

        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
            if self.0 {
                Poll::Ready(())
            } else {
                self.0 = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }
    }

    #[test]
    fn backoff_doubles_then_caps() {
        let policy = RetryPolicy::default();

        let delays: Vec<u32> = (1..=6).map(|a| policy.backoff_ms(a)).collect();

        assert_eq!(delays, vec![500, 1_000, 2_000, 4_000, 4_000, 4_000]);
    }

    #[test]
    fn backoff_survives_huge_attempt_numbers() {
        let policy = RetryPolicy {
            max_attempts: u32::MAX,
            base_delay_ms: u32::MAX / 2,
            max_delay_ms: u32::MAX,
        };

        assert_eq!(policy.backoff_ms(u32::MAX), u32::MAX);
    }

    #[test]
    fn only_failures_before_relay_are_retried() {
        let policy = RetryPolicy::default();

        assert!(policy.should_retry(2, &SubmissionError::Network("offline".into())));
        assert!(policy.should_retry(1, &SubmissionError::Server(502)));
        assert!(!policy.should_retry(1, &SubmissionError::Timeout));
        assert!(!policy.should_retry(1, &SubmissionError::Server(404)));
        assert!(!policy.should_retry(1, &SubmissionError::Cancelled));
        assert!(!policy.should_retry(1, &SubmissionError::Rejected(ValidationErrors::default())));
    }

    #[test]
    fn retries_stop_at_max_attempts() {
        let policy = RetryPolicy::default();

        assert!(policy.should_retry(2, &SubmissionError::Server(503)));
        assert!(!policy.should_retry(3, &SubmissionError::Server(503)));
    }

    #[test]
    fn simulated_mode_waits_then_succeeds() {
        let waits = RefCell::new(Vec::new());
        let posts = Cell::new(0);

        let result = block_on(run(
            &SubmitMode::Simulated { delay_ms: 1_500 },
            || {
                posts.set(posts.get() + 1);
                ready(Ok(()))
            },
            |ms| {
                waits.borrow_mut().push(ms);
                ready(())
            },
        ));

        assert_eq!(result, Ok(()));
        assert_eq!(waits.into_inner(), vec![1_500]);
        assert_eq!(posts.get(), 0);
    }

    #[test]
    fn transient_failures_back_off_until_success() {
        let waits = RefCell::new(Vec::new());
        let posts = Cell::new(0);

        let result = block_on(run(
            &backend(),
            || {
                posts.set(posts.get() + 1);
                ready(if posts.get() < 3 {
                    Err(SubmissionError::Server(502))
                } else {
                    Ok(())
                })
            },
            |ms| {
                waits.borrow_mut().push(ms);
                ready(())
            },
        ));

        assert_eq!(result, Ok(()));
        assert_eq!(posts.get(), 3);
        assert_eq!(waits.into_inner(), vec![500, 1_000]);
    }

    #[test]
    fn gives_up_after_max_attempts() {
        let posts = Cell::new(0);

        let result = block_on(run(
            &backend(),
            || {
                posts.set(posts.get() + 1);
                ready(Err(SubmissionError::Network("offline".into())))
            },
            |_| ready(()),
        ));

        assert_eq!(result, Err(SubmissionError::Network("offline".into())));
        assert_eq!(posts.get(), 3);
    }

    #[test]
    fn timed_out_post_is_sent_once() {
        let posts = Cell::new(0);

        let result = block_on(run(
            &backend(),
            || {
                posts.set(posts.get() + 1);
                ready(Err(SubmissionError::Timeout))
            },
            |_| ready(()),
        ));

        assert_eq!(result, Err(SubmissionError::Timeout));
        assert_eq!(posts.get(), 1);
    }

    #[test]
    fn cancelled_delivery_makes_no_further_attempts() {
        let posts = Cell::new(0);
        let handle = RefCell::new(None::<AbortHandle>);

        let backend = backend();
        let delivery = run(
            &backend,
            || {
                posts.set(posts.get() + 1);
                // The visitor cancels while the first attempt is failing.
                if let Some(abort) = handle.borrow().as_ref() {
                    abort.abort();
                }
                ready(Err(SubmissionError::Server(503)))
            },
            |_| YieldOnce(false),
        );
        let (delivery, abort) = abortable(delivery);
        *handle.borrow_mut() = Some(abort);

        let result = block_on(delivery);

        assert!(result.is_err(), "delivery should report the abort");
        assert_eq!(posts.get(), 1);
    }

    #[test]
    fn rejected_body_from_api_becomes_field_errors() {
        let body = r#"{
            "error": "Validation failed",
            "fields": {
                "email": { "kind": "invalid_format", "message": "Please enter a valid email address" },
                "name": { "kind": "required_field_missing", "message": "Name is required" }
            }
        }"#;

        let SubmissionError::Rejected(errors) = classify_failure(422, body) else {
            panic!("expected field errors");
        };

        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.message(Field::Email),
            Some("Please enter a valid email address")
        );
        assert_eq!(errors.message(Field::Name), Some("Name is required"));
    }

    #[test]
    fn unreadable_or_other_failures_keep_status() {
        assert_eq!(classify_failure(422, "not json"), SubmissionError::Server(422));
        assert_eq!(
            classify_failure(502, r#"{"error":"Could not deliver message"}"#),
            SubmissionError::Server(502)
        );
        assert_eq!(classify_failure(404, ""), SubmissionError::Server(404));
    }
}
