use fortisecure_shared::WhatsAppChannel;

use crate::contact::transport::{RetryPolicy, SubmitMode};

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL, API is served from the same origin
}

pub const WHATSAPP_NUMBER: &str = "+91 8745060006";

/// Stand-in latency when the site is built without a backend.
pub const SIMULATED_SUBMIT_DELAY_MS: u32 = 1_500;
/// Outlasts the API's relay timeout so a slow relay answers before the
/// browser gives up on the request.
pub const SUBMIT_TIMEOUT_MS: u32 = 15_000;
pub const TOAST_DURATION_MS: u32 = 4_000;

pub fn whatsapp() -> WhatsAppChannel {
    WhatsAppChannel::new(WHATSAPP_NUMBER)
}

/// Builds with `FORTISECURE_OFFLINE_CONTACT` set keep the fixed-delay simulated
/// submission, everything else posts to the API.
pub fn submit_mode() -> SubmitMode {
    if option_env!("FORTISECURE_OFFLINE_CONTACT").is_some() {
        return SubmitMode::Simulated {
            delay_ms: SIMULATED_SUBMIT_DELAY_MS,
        };
    }

    SubmitMode::Backend {
        endpoint: format!("{}/api/contact", get_backend_url()),
        timeout_ms: SUBMIT_TIMEOUT_MS,
        retry: RetryPolicy::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fortisecure_shared::DEFAULT_RELAY_TIMEOUT_SECS;

    #[test]
    fn browser_waits_longer_than_the_relay() {
        let relay_ms = DEFAULT_RELAY_TIMEOUT_SECS * 1_000;

        assert!(u64::from(SUBMIT_TIMEOUT_MS) >= relay_ms + 2_000);
    }

    #[test]
    fn backend_mode_posts_to_contact_endpoint() {
        let SubmitMode::Backend { endpoint, timeout_ms, retry } = submit_mode() else {
            // Offline builds keep the simulated delay.
            assert_eq!(
                submit_mode(),
                SubmitMode::Simulated { delay_ms: SIMULATED_SUBMIT_DELAY_MS }
            );
            return;
        };

        assert!(endpoint.ends_with("/api/contact"));
        assert_eq!(timeout_ms, SUBMIT_TIMEOUT_MS);
        assert_eq!(retry, RetryPolicy::default());
    }
}
