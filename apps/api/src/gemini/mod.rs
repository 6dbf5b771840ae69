//! Gemini client — the single point of entry for insight-generation calls.
//!
//! All outbound calls to the generateContent API go through this module.
//! The API key is injected at construction. One attempt per request:
//! no retry, no backoff — a failed or slow upstream call fails the
//! whole orchestration.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

use crate::models::insight::InsightPayload;

const GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1/models/gemini-2.0-flash:generateContent";

#[derive(Debug, Error)]
pub enum InsightError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream error (status {status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("Failed to parse insight payload: {detail}; raw text was: {raw}")]
    MalformedResponse { detail: String, raw: String },
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

// Response types are deliberately lenient: every level defaults, so a
// response missing the candidates path deserializes to an empty shape
// instead of failing outright.
#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorEnvelope {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// Seam over the insight generator so orchestration can be tested without
/// outbound calls. Carried in `AppState` as `Arc<dyn InsightGenerator>`.
#[async_trait]
pub trait InsightGenerator: Send + Sync {
    async fn generate_insights(&self, industry: &str) -> Result<InsightPayload, InsightError>;
}

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }
}

#[async_trait]
impl InsightGenerator for GeminiClient {
    /// Issues a single generateContent call for the given industry and
    /// parses the response into a validated `InsightPayload`.
    async fn generate_insights(&self, industry: &str) -> Result<InsightPayload, InsightError> {
        let prompt = prompts::insight_prompt(industry);

        let request_body = GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: &prompt }],
            }],
        };

        let response = self
            .client
            .post(format!("{GEMINI_API_URL}?key={}", self.api_key))
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // Prefer the structured error message when the body carries one.
            let message = serde_json::from_str::<GeminiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(InsightError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateResponse =
            serde_json::from_str(&body).map_err(|e| InsightError::MalformedResponse {
                detail: e.to_string(),
                raw: body.clone(),
            })?;

        // The expected path may be absent (e.g. a safety-filtered response);
        // substitute an empty object, which then fails payload validation.
        let raw_text = parsed
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
            .unwrap_or_else(|| {
                warn!("Gemini response for '{industry}' carried no text part; substituting {{}}");
                "{}"
            });

        debug!(
            "Gemini call for industry '{industry}' returned {} bytes of payload text",
            raw_text.len()
        );

        parse_insight_payload(raw_text)
    }
}

/// Strips ```json / ``` code-fence markers anywhere in the text and trims.
/// Idempotent: stripping twice equals stripping once.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// Cleans a raw model payload and validates it into an `InsightPayload`.
/// The cleaned text rides along in the error for diagnostics.
pub fn parse_insight_payload(raw_text: &str) -> Result<InsightPayload, InsightError> {
    let cleaned = strip_code_fences(raw_text);
    serde_json::from_str(&cleaned).map_err(|e| InsightError::MalformedResponse {
        detail: e.to_string(),
        raw: cleaned,
    })
}
