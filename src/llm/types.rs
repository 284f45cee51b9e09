//! Rust types for the Gemini `generateContent` REST API.
//!
//! Wire types are serde-serializable to the camelCase JSON the API expects.
//! [`GenerateRequest`] and [`ModelEvent`] are the crate-facing types.

use serde::{Deserialize, Serialize};

/// Role of the user turn in `contents`.
pub const ROLE_USER: &str = "user";
/// Role the API assigns to model turns.
pub const ROLE_MODEL: &str = "model";

/// A piece of conversation content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// Content made of a single text part.
    pub fn text(role: Option<&str>, text: impl Into<String>) -> Self {
        Self {
            role: role.map(String::from),
            parts: vec![Part {
                text: Some(text.into()),
            }],
        }
    }
}

/// A single part of a content block. Non-text parts deserialize with `text: None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Tool attached to a request.
#[derive(Debug, Clone, Serialize)]
pub struct Tool {
    #[serde(rename = "google_search")]
    pub google_search: GoogleSearch,
}

/// Google Search grounding tool. Serializes as `{}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GoogleSearch {}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
}

/// Request body for `generateContent` and `streamGenerateContent`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
    pub generation_config: GenerationConfig,
}

/// Response body (or one streamed chunk).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Token usage reported by the API.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: Option<u32>,
    #[serde(default)]
    pub candidates_token_count: Option<u32>,
    #[serde(default)]
    pub total_token_count: Option<u32>,
}

/// Error envelope returned with non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub message: String,
}

/// What the caller wants generated.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    /// Model identifier, e.g. `gemini-2.0-flash`.
    pub model: String,
    /// Agent instruction, sent as the system instruction.
    pub system_instruction: String,
    /// Conversation history, oldest first.
    pub contents: Vec<Content>,
    /// Attach the Google Search grounding tool.
    pub google_search: bool,
    pub temperature: f32,
}

impl GenerateRequest {
    /// Convert into the JSON body sent over the wire.
    pub fn to_wire(&self) -> GenerateContentRequest {
        let system_instruction = if self.system_instruction.is_empty() {
            None
        } else {
            Some(Content::text(None, self.system_instruction.clone()))
        };

        let tools = if self.google_search {
            vec![Tool {
                google_search: GoogleSearch::default(),
            }]
        } else {
            Vec::new()
        };

        GenerateContentRequest {
            system_instruction,
            contents: self.contents.clone(),
            tools,
            generation_config: GenerationConfig {
                temperature: self.temperature,
            },
        }
    }
}

/// One event produced while the model answers.
///
/// Unary calls produce a single non-partial event. Streaming calls produce
/// one partial event per chunk followed by a non-partial event carrying the
/// full aggregated text.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelEvent {
    pub content: Option<Content>,
    pub partial: bool,
    pub finish_reason: Option<String>,
}

impl ModelEvent {
    /// Build an event from the first candidate of a response.
    pub fn from_response(response: GenerateContentResponse, partial: bool) -> Self {
        let candidate = response.candidates.into_iter().next();
        match candidate {
            Some(c) => Self {
                content: c.content,
                partial,
                finish_reason: c.finish_reason,
            },
            None => Self {
                content: None,
                partial,
                finish_reason: None,
            },
        }
    }

    /// Text parts of this event, in order. Parts without text are skipped.
    pub fn text_parts(&self) -> impl Iterator<Item = &str> {
        self.content
            .iter()
            .flat_map(|c| c.parts.iter())
            .filter_map(|p| p.text.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_camel_case() {
        let req = GenerateRequest {
            model: "gemini-2.0-flash".into(),
            system_instruction: "You are ErrorDetector".into(),
            contents: vec![Content::text(Some(ROLE_USER), "fn main() {}")],
            google_search: true,
            temperature: 0.5,
        };

        let json = serde_json::to_value(req.to_wire()).unwrap();
        assert_eq!(
            json["systemInstruction"]["parts"][0]["text"],
            "You are ErrorDetector"
        );
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "fn main() {}");
        assert_eq!(json["tools"][0]["google_search"], serde_json::json!({}));
        assert_eq!(json["generationConfig"]["temperature"], 0.5);
        assert!(json.get("model").is_none());
    }

    #[test]
    fn request_without_tools_omits_field() {
        let req = GenerateRequest {
            model: "m".into(),
            system_instruction: String::new(),
            contents: vec![],
            google_search: false,
            temperature: 0.0,
        };

        let json = serde_json::to_value(req.to_wire()).unwrap();
        assert!(json.get("tools").is_none());
        assert!(json.get("systemInstruction").is_none());
    }

    #[test]
    fn response_deserializes_and_skips_non_text_parts() {
        let body = r#"{
            "candidates": [{
                "content": {"role": "model", "parts": [
                    {"text": "first"},
                    {"functionCall": {"name": "google_search", "args": {}}},
                    {"text": "second"}
                ]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 10, "totalTokenCount": 30}
        }"#;

        let resp: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.usage_metadata.unwrap().total_token_count, Some(30));

        let resp: GenerateContentResponse = serde_json::from_str(body).unwrap();
        let event = ModelEvent::from_response(resp, false);
        assert_eq!(event.finish_reason.as_deref(), Some("STOP"));
        assert_eq!(event.text_parts().collect::<Vec<_>>(), vec!["first", "second"]);
    }

    #[test]
    fn empty_response_yields_empty_event() {
        let resp: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        let event = ModelEvent::from_response(resp, false);
        assert!(event.content.is_none());
        assert_eq!(event.text_parts().count(), 0);
    }
}
