use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use watchpost_api::restful::DeliveryDetail;

use crate::configs::Push;

#[derive(Debug, thiserror::Error)]
pub enum PushError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Push provider rejected the batch: {message}")]
    Gateway {
        code: Option<String>,
        message: String,
    },
}

impl PushError {
    pub fn code(&self) -> Option<String> {
        match self {
            PushError::Network(_) => None,
            PushError::Gateway { code, .. } => code.clone(),
        }
    }
}

/// Seam to the push-messaging provider.
///
/// One call delivers one `{title, body}` payload to a batch of tokens and
/// reports a per-token outcome. Per-token failure is data, not an error;
/// `Err` is reserved for the batch itself not reaching the provider.
#[async_trait]
pub trait PushGateway: Send + Sync {
    async fn send_multicast(
        &self,
        tokens: &[String],
        title: &str,
        body: &str,
    ) -> Result<Vec<DeliveryDetail>, PushError>;
}

#[derive(Debug, Deserialize)]
struct MulticastResponse {
    responses: Vec<TokenOutcome>,
}

#[derive(Debug, Deserialize)]
struct TokenOutcome {
    success: bool,
    error: Option<OutcomeError>,
}

#[derive(Debug, Deserialize)]
struct OutcomeError {
    code: Option<String>,
    message: Option<String>,
}

/// Provider-backed gateway speaking the multicast HTTP contract.
pub struct HttpPushGateway {
    client: reqwest::Client,
    push: Push,
}

impl HttpPushGateway {
    pub fn new(push: Push) -> Self {
        Self {
            client: reqwest::Client::new(),
            push,
        }
    }
}

#[async_trait]
impl PushGateway for HttpPushGateway {
    async fn send_multicast(
        &self,
        tokens: &[String],
        title: &str,
        body: &str,
    ) -> Result<Vec<DeliveryDetail>, PushError> {
        let message = json!({
            "tokens": tokens,
            "notification": {
                "title": title,
                "body": body,
            },
            "android": { "priority": "high" },
            "apns": {
                "headers": { "apns-priority": "10" },
                "payload": { "aps": { "sound": "default" } },
            },
        });

        let mut request = self.client.post(&self.push.endpoint).json(&message);
        if let Some(api_key) = &self.push.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(PushError::Gateway {
                code: Some(status.as_u16().to_string()),
                message,
            });
        }

        let batch: MulticastResponse = response.json().await?;
        if batch.responses.len() != tokens.len() {
            return Err(PushError::Gateway {
                code: None,
                message: format!(
                    "provider answered {} outcomes for {} tokens",
                    batch.responses.len(),
                    tokens.len()
                ),
            });
        }

        let details = tokens
            .iter()
            .zip(batch.responses)
            .map(|(token, outcome)| DeliveryDetail {
                token: token.clone(),
                success: outcome.success,
                error_code: outcome.error.as_ref().and_then(|e| e.code.clone()),
                error_msg: outcome.error.and_then(|e| e.message),
            })
            .collect();

        Ok(details)
    }
}

#[cfg(any(test, feature = "mock"))]
pub use mock::MockPushGateway;

#[cfg(any(test, feature = "mock"))]
mod mock {
    use std::collections::HashSet;
    use std::sync::Mutex;

    use super::*;

    /// One recorded multicast call.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct PushCall {
        pub tokens: Vec<String>,
        pub title: String,
        pub body: String,
    }

    /// In-process gateway for tests: records every batch and fails the
    /// tokens it was told to, the way an expired registration would.
    #[derive(Default)]
    pub struct MockPushGateway {
        calls: Mutex<Vec<PushCall>>,
        failing: Mutex<HashSet<String>>,
    }

    impl MockPushGateway {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn fail_token(&self, token: &str) {
            self.failing.lock().unwrap().insert(token.to_string());
        }

        pub fn calls(&self) -> Vec<PushCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PushGateway for MockPushGateway {
        async fn send_multicast(
            &self,
            tokens: &[String],
            title: &str,
            body: &str,
        ) -> Result<Vec<DeliveryDetail>, PushError> {
            self.calls.lock().unwrap().push(PushCall {
                tokens: tokens.to_vec(),
                title: title.to_string(),
                body: body.to_string(),
            });

            let failing = self.failing.lock().unwrap();
            Ok(tokens
                .iter()
                .map(|token| {
                    if failing.contains(token) {
                        DeliveryDetail {
                            token: token.clone(),
                            success: false,
                            error_code: Some(
                                "messaging/registration-token-not-registered".to_string(),
                            ),
                            error_msg: Some("Requested entity was not found.".to_string()),
                        }
                    } else {
                        DeliveryDetail {
                            token: token.clone(),
                            success: true,
                            error_code: None,
                            error_msg: None,
                        }
                    }
                })
                .collect())
        }
    }
}
