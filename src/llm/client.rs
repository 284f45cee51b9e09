//! HTTP client for the Gemini REST API.
//!
//! No agent awareness: takes a [`GenerateRequest`], returns [`ModelEvent`]s.

use super::types::{ApiErrorBody, GenerateContentResponse, GenerateRequest, ModelEvent, Part};
use super::types::{Content, ROLE_MODEL};
use async_trait::async_trait;
use futures::StreamExt;
use std::time::Duration;
use tracing::debug;

/// Default public endpoint.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Errors from model calls.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request timed out after {0}s")]
    Timeout(u64),

    #[error("cannot connect to the model API at {0}")]
    Connect(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// A hosted generative model.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Issue one request and return every event of the answer, in order.
    async fn generate(&self, request: &GenerateRequest) -> Result<Vec<ModelEvent>, LlmError>;
}

/// Connection settings for [`GeminiClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout_seconds: u64,
    /// Use `streamGenerateContent` with server-sent events.
    pub stream: bool,
}

/// Gemini API client.
#[derive(Debug)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    timeout_seconds: u64,
    stream: bool,
}

impl GeminiClient {
    pub fn new(config: ClientConfig) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            api_key: config.api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout_seconds: config.timeout_seconds,
            stream: config.stream,
        })
    }

    fn endpoint(&self, model: &str, method: &str) -> String {
        format!("{}/v1beta/models/{}:{}", self.base_url, model, method)
    }

    fn classify(&self, e: reqwest::Error) -> LlmError {
        if e.is_timeout() {
            LlmError::Timeout(self.timeout_seconds)
        } else if e.is_connect() {
            LlmError::Connect(self.base_url.clone())
        } else {
            LlmError::Http(e)
        }
    }

    /// Errors raised while reading a response body. Only decode failures
    /// mean the body itself was bad.
    fn body_error(&self, e: reqwest::Error) -> LlmError {
        if e.is_decode() {
            LlmError::InvalidResponse(format!("failed to parse response: {e}"))
        } else {
            self.classify(e)
        }
    }

    async fn post(&self, url: &str, request: &GenerateRequest) -> Result<reqwest::Response, LlmError> {
        debug!("POST {} ({} content blocks)", url, request.contents.len());

        let response = self
            .http
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request.to_wire())
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "(no body)".into());
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| b.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }

    async fn generate_unary(&self, request: &GenerateRequest) -> Result<Vec<ModelEvent>, LlmError> {
        let url = self.endpoint(&request.model, "generateContent");
        let response = self.post(&url, request).await?;

        let parsed: GenerateContentResponse =
            response.json().await.map_err(|e| self.body_error(e))?;

        if let Some(ref usage) = parsed.usage_metadata {
            debug!(
                "Token usage: prompt={:?} candidates={:?} total={:?}",
                usage.prompt_token_count, usage.candidates_token_count, usage.total_token_count
            );
        }

        Ok(vec![ModelEvent::from_response(parsed, false)])
    }

    async fn generate_streaming(
        &self,
        request: &GenerateRequest,
    ) -> Result<Vec<ModelEvent>, LlmError> {
        let url = format!(
            "{}?alt=sse",
            self.endpoint(&request.model, "streamGenerateContent")
        );
        let response = self.post(&url, request).await?;

        let mut stream = response.bytes_stream();
        let mut decoder = SseDecoder::default();
        let mut events = Vec::new();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| self.body_error(e))?;
            for payload in decoder.push(&chunk) {
                events.push(parse_chunk(&payload)?);
            }
        }
        if let Some(payload) = decoder.finish() {
            events.push(parse_chunk(&payload)?);
        }

        debug!("Received {} streamed chunks", events.len());
        let final_event = aggregate(&events);
        events.push(final_event);

        Ok(events)
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate(&self, request: &GenerateRequest) -> Result<Vec<ModelEvent>, LlmError> {
        if self.stream {
            self.generate_streaming(request).await
        } else {
            self.generate_unary(request).await
        }
    }
}

fn parse_chunk(payload: &str) -> Result<ModelEvent, LlmError> {
    let parsed: GenerateContentResponse = serde_json::from_str(payload)
        .map_err(|e| LlmError::InvalidResponse(format!("failed to parse stream chunk: {e}")))?;
    Ok(ModelEvent::from_response(parsed, true))
}

/// Merge partial chunks into the final, complete event.
fn aggregate(partials: &[ModelEvent]) -> ModelEvent {
    let text: String = partials.iter().flat_map(|e| e.text_parts()).collect();
    let finish_reason = partials.iter().rev().find_map(|e| e.finish_reason.clone());

    let parts = if text.is_empty() {
        Vec::new()
    } else {
        vec![Part { text: Some(text) }]
    };

    ModelEvent {
        content: Some(Content {
            role: Some(ROLE_MODEL.to_string()),
            parts,
        }),
        partial: false,
        finish_reason,
    }
}

/// Incremental decoder for `text/event-stream` bodies.
///
/// Only `data:` fields matter here; other fields and comments are dropped.
#[derive(Debug, Default)]
struct SseDecoder {
    buffer: Vec<u8>,
    data: Vec<String>,
}

impl SseDecoder {
    /// Feed bytes, returning the payloads of every event completed by them.
    fn push(&mut self, bytes: &[u8]) -> Vec<String> {
        self.buffer.extend_from_slice(bytes);
        let mut completed = Vec::new();

        while let Some(pos) = self.buffer.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=pos).collect();
            let line = String::from_utf8_lossy(&line);
            let line = line.trim_end_matches(['\n', '\r']);
            if let Some(payload) = self.handle_line(line) {
                completed.push(payload);
            }
        }

        completed
    }

    /// Flush whatever is left once the body ends.
    fn finish(&mut self) -> Option<String> {
        let rest = std::mem::take(&mut self.buffer);
        let rest = String::from_utf8_lossy(&rest);
        let rest = rest.trim_end_matches(['\n', '\r']);
        if !rest.is_empty() {
            if let Some(payload) = self.handle_line(rest) {
                return Some(payload);
            }
        }
        self.dispatch()
    }

    fn handle_line(&mut self, line: &str) -> Option<String> {
        if line.is_empty() {
            return self.dispatch();
        }
        if let Some(value) = line.strip_prefix("data:") {
            self.data.push(value.strip_prefix(' ').unwrap_or(value).to_string());
        }
        None
    }

    fn dispatch(&mut self) -> Option<String> {
        if self.data.is_empty() {
            return None;
        }
        let payload = self.data.join("\n");
        self.data.clear();
        Some(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::types::ROLE_USER;
    use wiremock::matchers::{body_partial_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, stream: bool) -> GeminiClient {
        GeminiClient::new(ClientConfig {
            api_key: "test-key".into(),
            base_url: server.uri(),
            timeout_seconds: 5,
            stream,
        })
        .unwrap()
    }

    fn request() -> GenerateRequest {
        GenerateRequest {
            model: "gemini-2.0-flash".into(),
            system_instruction: "You are ErrorDetector".into(),
            contents: vec![Content::text(Some(ROLE_USER), "print('hi')")],
            google_search: true,
            temperature: 0.2,
        }
    }

    #[test]
    fn endpoint_strips_trailing_slash() {
        let client = GeminiClient::new(ClientConfig {
            api_key: "k".into(),
            base_url: "http://localhost:8080/".into(),
            timeout_seconds: 1,
            stream: false,
        })
        .unwrap();
        assert_eq!(
            client.endpoint("gemini-2.0-flash", "generateContent"),
            "http://localhost:8080/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[tokio::test]
    async fn unary_call_returns_single_final_event() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(serde_json::json!({
                "systemInstruction": {"parts": [{"text": "You are ErrorDetector"}]},
                "contents": [{"role": "user", "parts": [{"text": "print('hi')"}]}],
                "tools": [{"google_search": {}}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{
                    "content": {"role": "model", "parts": [{"text": "No errors found."}]},
                    "finishReason": "STOP"
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let events = client_for(&server, false).generate(&request()).await.unwrap();

        assert_eq!(events.len(), 1);
        assert!(!events[0].partial);
        assert_eq!(events[0].text_parts().collect::<String>(), "No errors found.");
    }

    #[tokio::test]
    async fn api_error_carries_status_and_message() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": {
                    "code": 400,
                    "message": "API key not valid. Please pass a valid API key.",
                    "status": "INVALID_ARGUMENT"
                }
            })))
            .mount(&server)
            .await;

        let err = client_for(&server, false)
            .generate(&request())
            .await
            .unwrap_err();

        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 400);
                assert!(message.contains("API key not valid"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_invalid_response() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server, false)
            .generate(&request())
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn timeout_is_not_reported_as_bad_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("{}")
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let client = GeminiClient::new(ClientConfig {
            api_key: "test-key".into(),
            base_url: server.uri(),
            timeout_seconds: 1,
            stream: false,
        })
        .unwrap();

        let err = client
            .http
            .post(client.endpoint("gemini-2.0-flash", "generateContent"))
            .send()
            .await
            .unwrap_err();
        assert!(err.is_timeout());
        assert!(matches!(client.body_error(err), LlmError::Timeout(1)));

        let err = client.generate(&request()).await.unwrap_err();
        assert!(matches!(err, LlmError::Timeout(1)));
    }

    #[tokio::test]
    async fn streaming_call_aggregates_chunks() {
        let server = MockServer::start().await;

        let body = concat!(
            "data: {\"candidates\":[{\"content\":{\"role\":\"model\",\"parts\":[{\"text\":\"Hello \"}]}}]}\r\n\r\n",
            "data: {\"candidates\":[{\"content\":{\"role\":\"model\",\"parts\":[{\"text\":\"world\"}]},\"finishReason\":\"STOP\"}]}\r\n\r\n",
        );

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.0-flash:streamGenerateContent"))
            .and(query_param("alt", "sse"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/event-stream"))
            .expect(1)
            .mount(&server)
            .await;

        let events = client_for(&server, true).generate(&request()).await.unwrap();

        assert_eq!(events.len(), 3);
        assert!(events[0].partial && events[1].partial);
        let last = events.last().unwrap();
        assert!(!last.partial);
        assert_eq!(last.finish_reason.as_deref(), Some("STOP"));
        assert_eq!(last.text_parts().collect::<String>(), "Hello world");
    }

    #[test]
    fn sse_decoder_handles_split_chunks() {
        let mut decoder = SseDecoder::default();

        assert!(decoder.push(b"data: {\"a\":").is_empty());
        assert!(decoder.push(b" 1}\r\n").is_empty());
        let done = decoder.push(b"\r\ndata: {\"b\": 2}\n\n: comment\n");
        assert_eq!(done, vec!["{\"a\": 1}".to_string(), "{\"b\": 2}".to_string()]);
        assert_eq!(decoder.finish(), None);
    }

    #[test]
    fn sse_decoder_flushes_unterminated_event() {
        let mut decoder = SseDecoder::default();
        assert!(decoder.push(b"data: {\"c\": 3}").is_empty());
        assert_eq!(decoder.finish(), Some("{\"c\": 3}".to_string()));
    }

    #[test]
    fn aggregate_of_no_chunks_is_empty_final_event() {
        let event = aggregate(&[]);
        assert!(!event.partial);
        assert_eq!(event.text_parts().count(), 0);
    }

    #[test]
    fn error_display() {
        let err = LlmError::Api {
            status: 403,
            message: "permission denied".into(),
        };
        assert_eq!(err.to_string(), "API error (status 403): permission denied");
        assert_eq!(LlmError::Timeout(30).to_string(), "request timed out after 30s");
    }
}
