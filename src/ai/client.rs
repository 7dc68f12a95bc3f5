use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::AiConfig;
use crate::constants::{AI_DISABLED_REPLY, AI_ERROR_REPLY};
use crate::error::{AssistantError, Result};
use crate::utils::truncate_str;

/// Answers free text that no intent rule matched.
///
/// Implementations always produce a reply; failures become a fixed
/// sentinel string rather than an error.
pub trait ChatBackend: Send + Sync {
    fn ask(&self, text: &str) -> impl Future<Output = String> + Send;
}

/// Async client for an OpenRouter-compatible chat-completions API.
pub struct OpenRouterClient {
    client: Client,
    config: AiConfig,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl OpenRouterClient {
    pub fn new(config: AiConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_default();
        Self { client, config }
    }

    /// Whether requests will actually be sent.
    pub fn is_ready(&self) -> bool {
        self.config.enabled && self.config.api_key.is_some()
    }

    /// Single non-streaming completion for `text`.
    async fn complete(&self, text: &str) -> Result<String> {
        let key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| AssistantError::Remote("no API key configured".into()))?;

        let body = serde_json::json!({
            "model": self.config.model,
            "messages": [
                {"role": "system", "content": self.config.system_prompt},
                {"role": "user", "content": text},
            ],
        });

        let response = self
            .client
            .post(&self.config.api_url)
            .header("Authorization", format!("Bearer {}", key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| AssistantError::Remote(format!("failed to connect: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response.text().await.unwrap_or_default();
            return Err(AssistantError::Remote(format!(
                "API error {}: {}",
                status,
                truncate_str(&body_text, 300)
            )));
        }

        let parsed: CompletionResponse = response
            .json()
            .await
            .map_err(|e| AssistantError::Remote(format!("unexpected response body: {}", e)))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| AssistantError::Remote("response had no choices".into()))
    }
}

impl ChatBackend for OpenRouterClient {
    async fn ask(&self, text: &str) -> String {
        if !self.config.enabled {
            return AI_DISABLED_REPLY.to_string();
        }
        match self.complete(text).await {
            Ok(reply) => {
                debug!(chars = reply.len(), "chat reply received");
                reply
            }
            Err(e) => {
                warn!(error = %e, "chat fallback failed");
                AI_ERROR_REPLY.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use std::sync::mpsc;
    use std::thread;

    /// One-shot HTTP stub. Returns its base URL and a receiver for the
    /// request body it saw.
    fn stub_server(status: u16, body: &'static str) -> (String, mpsc::Receiver<String>) {
        let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
        let url = format!("http://{}/chat", server.server_addr().to_ip().unwrap());
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            if let Ok(mut request) = server.recv() {
                let mut seen = String::new();
                let _ = request.as_reader().read_to_string(&mut seen);
                let _ = tx.send(seen);
                let response = tiny_http::Response::from_string(body).with_status_code(status);
                let _ = request.respond(response);
            }
        });
        (url, rx)
    }

    fn config(url: String) -> AiConfig {
        AiConfig {
            api_url: url,
            api_key: Some("sk-or-test".into()),
            timeout_secs: 5,
            ..AiConfig::default()
        }
    }

    #[tokio::test]
    async fn returns_first_choice_content() {
        let (url, seen) = stub_server(
            200,
            r#"{"choices":[{"message":{"role":"assistant","content":"Hello, Sir."}}]}"#,
        );
        let client = OpenRouterClient::new(config(url));
        assert_eq!(client.ask("hello").await, "Hello, Sir.");

        let request: serde_json::Value = serde_json::from_str(&seen.recv().unwrap()).unwrap();
        assert_eq!(request["messages"][0]["role"], "system");
        assert_eq!(request["messages"][1]["content"], "hello");
        assert_eq!(request["model"], crate::constants::DEFAULT_AI_MODEL);
    }

    #[tokio::test]
    async fn error_status_yields_sentinel() {
        let (url, _seen) = stub_server(500, r#"{"error":"boom"}"#);
        let client = OpenRouterClient::new(config(url));
        assert_eq!(client.ask("hello").await, AI_ERROR_REPLY);
    }

    #[tokio::test]
    async fn malformed_body_yields_sentinel() {
        let (url, _seen) = stub_server(200, r#"{"choices":[]}"#);
        let client = OpenRouterClient::new(config(url));
        assert_eq!(client.ask("hello").await, AI_ERROR_REPLY);
    }

    #[tokio::test]
    async fn missing_key_skips_the_request() {
        let client = OpenRouterClient::new(AiConfig::default());
        assert!(!client.is_ready());
        assert_eq!(client.ask("hello").await, AI_ERROR_REPLY);
    }

    #[tokio::test]
    async fn disabled_client_says_so() {
        let client = OpenRouterClient::new(AiConfig {
            enabled: false,
            ..AiConfig::default()
        });
        assert_eq!(client.ask("hello").await, AI_DISABLED_REPLY);
    }
}
