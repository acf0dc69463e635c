//! Toy info dispatcher
//!
//! Builds and sends the single outbound chat-completions request and
//! decodes the answer in two stages: the transport envelope first,
//! then the JSON document embedded in the message content. Each stage
//! has its own error kind so a provider fault is never mistaken for a
//! malformed model answer.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::error::{Result, ScoutError};
use crate::toy::ToyInfo;

/// Truncation limit for error bodies carried into logs
const ERROR_BODY_LIMIT: usize = 500;

/// Request body for the chat-completions endpoint
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

/// One message in the request conversation
#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

/// Response envelope from the provider
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: AnswerMessage,
}

#[derive(Debug, Deserialize)]
struct AnswerMessage {
    content: String,
}

/// Fixed system instruction for every request
pub fn system_prompt() -> &'static str {
    "You are a helpful assistant that provides information about toys."
}

/// User instruction embedding the raw query and requesting the
/// four-key JSON answer shape
pub fn user_prompt(query: &str) -> String {
    format!(
        "Provide a detailed description, price comparison from multiple sites, \
         developmental benefits, and reviews for the toy: {}. Format the response \
         as JSON with keys: description, priceComparison, developmentalBenefits, \
         and reviews.",
        query
    )
}

/// Stage one: parse the chat-completions envelope and extract the
/// first choice's message content
pub fn decode_envelope(body: &str) -> Result<String> {
    let response: ChatResponse = serde_json::from_str(body).map_err(ScoutError::envelope)?;
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or(ScoutError::EmptyChoices)
}

/// Stage two: parse the embedded answer text as a `ToyInfo` document
pub fn decode_payload(content: &str) -> Result<ToyInfo> {
    serde_json::from_str(content).map_err(ScoutError::payload)
}

/// Client for the hosted toy-info API
#[derive(Debug, Clone)]
pub struct ToyInfoClient {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl ToyInfoClient {
    /// Create a new client from explicit API settings
    pub fn new(api: &ApiConfig, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: api.endpoint.clone(),
            model: api.model.clone(),
            api_key: api_key.into(),
        }
    }

    /// The model identifier sent with each request
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Fetch toy info for one query
    ///
    /// Issues exactly one POST; no retry, no explicit timeout, no
    /// cancellation. The HTTP stack's own request lifetime is the
    /// only bound.
    pub async fn fetch_toy_info(&self, query: &str) -> Result<ToyInfo> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt().to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt(query),
                },
            ],
        };

        debug!(endpoint = %self.endpoint, model = %self.model, "sending toy info request");

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_text = response.text().await.unwrap_or_default();
            // Truncate to avoid dumping whole provider error pages into logs
            let truncated = if error_text.len() > ERROR_BODY_LIMIT {
                let mut end = ERROR_BODY_LIMIT;
                while !error_text.is_char_boundary(end) {
                    end -= 1;
                }
                format!("{}...", &error_text[..end])
            } else {
                error_text
            };
            warn!(status, "toy info request rejected");
            return Err(ScoutError::http(status, truncated));
        }

        let body = response.text().await?;
        let content = decode_envelope(&body)?;
        decode_payload(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_info() -> ToyInfo {
        ToyInfo {
            description: "A red ball".to_string(),
            price_comparison: "$5-$10".to_string(),
            developmental_benefits: "Hand-eye coordination".to_string(),
            reviews: "4.5 stars".to_string(),
        }
    }

    #[test]
    fn test_user_prompt_embeds_query_and_keys() {
        let prompt = user_prompt("red ball");
        assert!(prompt.contains("the toy: red ball"));
        assert!(prompt.contains("JSON"));
        assert!(prompt.contains("priceComparison"));
        assert!(prompt.contains("developmentalBenefits"));
    }

    #[test]
    fn test_request_body_shape() {
        let request = ChatRequest {
            model: "sonar".to_string(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt().to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt("wooden blocks"),
                },
            ],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "sonar");
        let messages = json["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[1]["role"], "user");
        assert!(messages[1]["content"]
            .as_str()
            .unwrap()
            .contains("wooden blocks"));
    }

    #[test]
    fn test_decode_envelope_extracts_first_choice() {
        let body = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "first"}},
                {"message": {"role": "assistant", "content": "second"}}
            ]
        }"#;
        assert_eq!(decode_envelope(body).unwrap(), "first");
    }

    #[test]
    fn test_decode_envelope_rejects_non_json() {
        let err = decode_envelope("<html>gateway timeout</html>").unwrap_err();
        assert!(matches!(err, ScoutError::Envelope { .. }));
    }

    #[test]
    fn test_decode_envelope_rejects_empty_choices() {
        let err = decode_envelope(r#"{"choices": []}"#).unwrap_err();
        assert!(matches!(err, ScoutError::EmptyChoices));
    }

    #[test]
    fn test_decode_payload_parses_four_fields() {
        let content = r#"{"description":"A red ball","priceComparison":"$5-$10","developmentalBenefits":"Hand-eye coordination","reviews":"4.5 stars"}"#;
        assert_eq!(decode_payload(content).unwrap(), sample_info());
    }

    #[test]
    fn test_decode_payload_rejects_prose() {
        let err = decode_payload("Sure! Here is the info you asked for.").unwrap_err();
        assert!(matches!(err, ScoutError::Payload { .. }));
    }

    #[test]
    fn test_decode_payload_rejects_missing_key() {
        let err = decode_payload(r#"{"description":"A red ball"}"#).unwrap_err();
        assert!(matches!(err, ScoutError::Payload { .. }));
    }

    #[test]
    fn test_two_stage_decode_round_trip() {
        // Envelope nests the payload as a JSON-encoded string, the way
        // the provider returns it
        let inner = serde_json::to_string(&sample_info()).unwrap();
        let body = serde_json::to_string(&serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": inner}}]
        }))
        .unwrap();

        let content = decode_envelope(&body).unwrap();
        let info = decode_payload(&content).unwrap();
        assert_eq!(info, sample_info());
    }
}
