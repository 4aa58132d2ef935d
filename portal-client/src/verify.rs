//! Identity verification client
//!
//! Email one-time-code issuance and confirmation against the hosted
//! verification service. The service owns code generation, delivery and
//! expiry (codes are valid for a few minutes); the portal only relays
//! the vendor's input and reports the outcome.

use crate::{ClientConfig, ClientError, ClientResult};
use serde::{Deserialize, Serialize};

/// Outcome of a code confirmation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// The address is verified.
    Complete,
    /// Wrong or expired code; `message` is the service's explanation.
    Failed { message: String },
}

impl VerifyOutcome {
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

#[derive(Serialize)]
struct SendCodeRequest<'a> {
    email: &'a str,
    strategy: &'a str,
}

#[derive(Serialize)]
struct AttemptRequest<'a> {
    email: &'a str,
    code: &'a str,
}

#[derive(Deserialize)]
struct AttemptResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
}

/// Client for the email verification service.
#[derive(Debug, Clone)]
pub struct VerifyClient {
    client: reqwest::Client,
    base_url: String,
}

impl VerifyClient {
    pub fn new(config: &ClientConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.verify_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Ask the service to email a one-time code to `email`.
    pub async fn send_code(&self, email: &str) -> ClientResult<()> {
        let response = self
            .client
            .post(format!("{}/v1/verifications/email", self.base_url))
            .json(&SendCodeRequest {
                email,
                strategy: "email_code",
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            tracing::warn!(%status, "OTP send rejected by verification service");
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: extract_message(&body)
                    .unwrap_or_else(|| "OTP sending failed. Please check your email address.".to_string()),
            });
        }
        Ok(())
    }

    /// Confirm the code the vendor typed.
    pub async fn check_code(&self, email: &str, code: &str) -> ClientResult<VerifyOutcome> {
        let response = self
            .client
            .post(format!("{}/v1/verifications/email/attempt", self.base_url))
            .json(&AttemptRequest { email, code })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Ok(VerifyOutcome::Failed {
                message: extract_message(&body)
                    .unwrap_or_else(|| "Invalid OTP. Please try again.".to_string()),
            });
        }

        let attempt: AttemptResponse = response.json().await?;
        if attempt.status == "complete" {
            Ok(VerifyOutcome::Complete)
        } else {
            Ok(VerifyOutcome::Failed {
                message: attempt
                    .message
                    .unwrap_or_else(|| "OTP verification incomplete. Please try again.".to_string()),
            })
        }
    }
}

fn extract_message(body: &str) -> Option<String> {
    serde_json::from_str::<shared::response::ApiErrorBody>(body)
        .ok()
        .and_then(shared::response::ApiErrorBody::into_message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_predicates() {
        assert!(VerifyOutcome::Complete.is_complete());
        assert!(
            !VerifyOutcome::Failed {
                message: "expired".into()
            }
            .is_complete()
        );
    }

    #[test]
    fn message_extraction_handles_plain_text() {
        assert_eq!(extract_message("not json"), None);
        assert_eq!(
            extract_message(r#"{"message":"Code expired"}"#).as_deref(),
            Some("Code expired")
        );
    }
}
