//! Bounded retries around a `TextGenerator`.
//!
//! Any service failure or blank response counts as a failed attempt. After the
//! last attempt the caller gets a `GenerationError` carrying the attempt count
//! and the last failure message.

use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, warn};

use crate::llm_client::{strip_code_fences, LlmError, TextGenerator};

const DEFAULT_MAX_ATTEMPTS: u32 = 3;
const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    /// Delay before the second attempt; doubled for each later one. Zero disables backoff.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay: DEFAULT_BASE_DELAY,
        }
    }
}

impl RetryPolicy {
    /// Wait before `attempt` (1-based). The first attempt never waits.
    pub fn delay_before(&self, attempt: u32) -> Duration {
        if attempt <= 1 {
            return Duration::ZERO;
        }
        self.base_delay * 2u32.saturating_pow(attempt - 2)
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("Text generation failed after {attempts} attempt(s): {message}")]
pub struct GenerationError {
    pub attempts: u32,
    pub message: String,
}

/// Runs `operation` until it succeeds or the policy's attempts are used up.
///
/// `operation` receives the 1-based attempt number.
pub async fn retry<T, E, F, Fut>(policy: &RetryPolicy, mut operation: F) -> Result<T, GenerationError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let attempts = policy.max_attempts.max(1);
    let mut last_error = String::new();

    for attempt in 1..=attempts {
        let delay = policy.delay_before(attempt);
        if !delay.is_zero() {
            debug!("Retrying generation after {}ms", delay.as_millis());
            tokio::time::sleep(delay).await;
        }

        match operation(attempt).await {
            Ok(value) => return Ok(value),
            Err(e) => {
                warn!(attempt, max_attempts = attempts, error = %e, "Generation attempt failed");
                last_error = e.to_string();
            }
        }
    }

    Err(GenerationError {
        attempts,
        message: last_error,
    })
}

/// The retrying front door to the text generation service.
#[derive(Clone)]
pub struct GenerativeTextAdapter {
    service: Arc<dyn TextGenerator>,
    policy: RetryPolicy,
}

impl GenerativeTextAdapter {
    pub fn new(service: Arc<dyn TextGenerator>, policy: RetryPolicy) -> Self {
        Self { service, policy }
    }

    /// First non-blank response, with code fences stripped and whitespace trimmed.
    pub async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        retry(&self.policy, |_attempt| self.attempt(prompt)).await
    }

    async fn attempt(&self, prompt: &str) -> Result<String, LlmError> {
        let raw = self.service.complete(prompt).await?;
        let text = strip_code_fences(&raw).trim();
        if text.is_empty() {
            return Err(LlmError::EmptyContent);
        }
        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::ScriptedGenerator;
    use tokio::time::Instant;

    fn adapter(generator: Arc<ScriptedGenerator>, policy: RetryPolicy) -> GenerativeTextAdapter {
        GenerativeTextAdapter::new(generator, policy)
    }

    fn immediate() -> RetryPolicy {
        RetryPolicy {
            base_delay: Duration::ZERO,
            ..Default::default()
        }
    }

    #[test]
    fn test_backoff_doubles_from_base() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_before(1), Duration::ZERO);
        assert_eq!(policy.delay_before(2), Duration::from_millis(500));
        assert_eq!(policy.delay_before(3), Duration::from_millis(1000));
        assert_eq!(immediate().delay_before(3), Duration::ZERO);
    }

    #[tokio::test]
    async fn test_succeeds_on_third_attempt() {
        let mut script = ScriptedGenerator::failing(2);
        script.push(Ok("Third time lucky.".to_string()));
        let generator = Arc::new(ScriptedGenerator::new(script));

        let text = adapter(generator.clone(), immediate())
            .generate("prompt")
            .await
            .unwrap();

        assert_eq!(text, "Third time lucky.");
        assert_eq!(generator.calls(), 3);
    }

    #[tokio::test]
    async fn test_exhaustion_reports_attempts_and_last_error() {
        let generator = Arc::new(ScriptedGenerator::new(ScriptedGenerator::failing(3)));

        let err = adapter(generator.clone(), immediate())
            .generate("prompt")
            .await
            .unwrap_err();

        assert_eq!(err.attempts, 3);
        assert!(err.message.contains("model overloaded"));
        assert_eq!(generator.calls(), 3);
    }

    #[tokio::test]
    async fn test_blank_response_counts_as_failure() {
        let generator = Arc::new(ScriptedGenerator::new(vec![
            Ok("   \n".to_string()),
            Ok("```\n```".to_string()),
            Ok("```text\nA focused summary.\n```".to_string()),
        ]));

        let text = adapter(generator.clone(), immediate())
            .generate("prompt")
            .await
            .unwrap();

        assert_eq!(text, "A focused summary.");
        assert_eq!(generator.calls(), 3);
    }

    #[tokio::test]
    async fn test_first_success_stops_retrying() {
        let generator = Arc::new(ScriptedGenerator::new(vec![
            Ok("  Done.  ".to_string()),
            Ok("never requested".to_string()),
        ]));

        let text = adapter(generator.clone(), immediate())
            .generate("prompt")
            .await
            .unwrap();

        assert_eq!(text, "Done.");
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_backoff_waits_between_attempts() {
        let generator = Arc::new(ScriptedGenerator::new(ScriptedGenerator::failing(3)));
        let started = Instant::now();

        let _ = adapter(generator, RetryPolicy::default())
            .generate("prompt")
            .await;

        // 500 ms before attempt 2, 1000 ms before attempt 3.
        assert!(started.elapsed() >= Duration::from_millis(1500));
    }
}
