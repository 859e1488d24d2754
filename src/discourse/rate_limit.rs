//! Retry wrapper shared by every Discourse API call.
//!
//! A request is reissued for as long as the forum answers `429 Too Many
//! Requests`, sleeping for the `extras.wait_seconds` hint the forum sends
//! along. There is no attempt limit; the server's hint is trusted as-is.

use std::time::Duration;

use serde_json::Value;

use crate::{
    discourse::transport::{HttpResponse, TransportError},
    infra::contracts::Sleeper,
};

const TOO_MANY_REQUESTS: u16 = 429;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitPolicy {
    /// Wait applied when a 429 body carries no usable `wait_seconds`.
    pub fallback_wait: Duration,
}

impl Default for RateLimitPolicy {
    fn default() -> Self {
        Self {
            fallback_wait: Duration::from_secs(10),
        }
    }
}

impl RateLimitPolicy {
    pub fn execute<F>(
        &self,
        operation: &'static str,
        sleeper: &dyn Sleeper,
        mut attempt: F,
    ) -> Result<HttpResponse, TransportError>
    where
        F: FnMut() -> Result<HttpResponse, TransportError>,
    {
        loop {
            let response = attempt()?;
            tracing::debug!(
                operation,
                status = response.status,
                reason = %response.reason,
                "HTTP request completed"
            );

            let payload = serde_json::from_str::<Value>(&response.body).ok();
            if let Some(errors) = payload
                .as_ref()
                .and_then(|body| body.get("errors"))
                .and_then(Value::as_array)
            {
                for error in errors {
                    tracing::error!(operation, error = %error, "Discourse API reported an error");
                }
            }

            if response.status != TOO_MANY_REQUESTS {
                return Ok(response);
            }

            let wait = payload
                .as_ref()
                .and_then(wait_hint)
                .unwrap_or(self.fallback_wait);
            tracing::debug!(
                operation,
                wait_seconds = wait.as_secs_f64(),
                "rate limit reached, Discourse API requested a delay"
            );
            sleeper.sleep(wait);
        }
    }
}

fn wait_hint(payload: &Value) -> Option<Duration> {
    let seconds = payload.get("extras")?.get("wait_seconds")?.as_f64()?;
    Duration::try_from_secs_f64(seconds).ok()
}
