//! Google Gemini API provider implementation.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{GlossaError, Result};

use super::prompts;
use super::provider::{
    ChatContext, ChatMessage, ChatRole, CorrectionResult, ExplanationResult, LanguageModel,
    LlmConfig,
};

/// Gemini API endpoint base.
const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Environment variable holding the API key.
const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Google Gemini provider.
#[derive(Debug)]
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    config: LlmConfig,
}

impl GeminiProvider {
    /// Create a new Gemini provider with the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, LlmConfig::default())
    }

    /// Create a new Gemini provider with custom configuration.
    pub fn with_config(api_key: impl Into<String>, config: LlmConfig) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(GlossaError::CredentialMissing {
                provider: "gemini".to_string(),
                env_var: API_KEY_VAR.to_string(),
            });
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| GlossaError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            config,
        })
    }

    /// Create from the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_VAR).map_err(|_| GlossaError::CredentialMissing {
            provider: "gemini".to_string(),
            env_var: API_KEY_VAR.to_string(),
        })?;
        Self::new(api_key)
    }

    /// Build headers for API requests.
    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(&self.api_key)
                .map_err(|e| GlossaError::Config(format!("Invalid API key: {}", e)))?,
        );
        Ok(headers)
    }

    /// Send a generateContent request and extract the response text.
    fn generate(&self, system: Option<&str>, contents: Vec<Value>) -> Result<String> {
        let mut body = json!({
            "contents": contents,
            "generationConfig": {
                "temperature": self.config.temperature,
                "maxOutputTokens": self.config.max_tokens,
            }
        });
        if let Some(system) = system {
            body["systemInstruction"] = json!({ "parts": [{ "text": system }] });
        }

        let url = format!("{}/{}:generateContent", API_BASE, self.config.model);
        let response = self
            .client
            .post(&url)
            .headers(self.build_headers()?)
            .json(&body)
            .send()
            .map_err(|e| GlossaError::Api {
                provider: "gemini".to_string(),
                message: format!("request failed: {}", e),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().unwrap_or_default();
            return Err(GlossaError::Api {
                provider: "gemini".to_string(),
                message: format!("{}: {}", status, error_text),
            });
        }

        let api_response: ApiResponse = response.json().map_err(|e| GlossaError::Api {
            provider: "gemini".to_string(),
            message: format!("failed to parse API response: {}", e),
        })?;

        api_response
            .candidates
            .into_iter()
            .flat_map(|c| c.content.parts)
            .find_map(|part| part.text)
            .ok_or_else(|| GlossaError::ModelResponse("No text in API response".to_string()))
    }

    /// Wrap a single user prompt as a contents array.
    fn user_contents(prompt: &str) -> Vec<Value> {
        vec![json!({ "role": "user", "parts": [{ "text": prompt }] })]
    }

    /// Parse JSON from a model response, tolerating markdown code fences.
    fn parse_json_response<T: for<'de> Deserialize<'de>>(&self, response: &str) -> Result<T> {
        serde_json::from_str(extract_json(response))
            .map_err(|e| GlossaError::ModelResponse(format!("{}", e)))
    }
}

/// Strip a markdown code fence around a JSON payload, if present.
fn extract_json(response: &str) -> &str {
    if response.contains("```json") {
        response
            .split("```json")
            .nth(1)
            .and_then(|s| s.split("```").next())
            .map(|s| s.trim())
            .unwrap_or(response)
    } else if response.contains("```") {
        response
            .split("```")
            .nth(1)
            .map(|s| s.trim())
            .unwrap_or(response)
    } else {
        response.trim()
    }
}

impl LanguageModel for GeminiProvider {
    fn correct(&self, text: &str) -> Result<CorrectionResult> {
        let prompt = prompts::correction_prompt(text);
        let response = self.generate(
            Some(prompts::system_prompt()),
            Self::user_contents(&prompt),
        )?;
        self.parse_json_response(&response)
    }

    fn explain(&self, text: &str) -> Result<ExplanationResult> {
        let prompt = prompts::explanation_prompt(text);
        let response = self.generate(
            Some(prompts::system_prompt()),
            Self::user_contents(&prompt),
        )?;
        self.parse_json_response(&response)
    }

    fn chat(
        &self,
        context: &ChatContext,
        history: &[ChatMessage],
        message: &str,
    ) -> Result<String> {
        // The grounding context opens the conversation as a user turn with
        // a canned model acknowledgement, matching the chat API's
        // alternating-role contract.
        let mut contents = Vec::with_capacity(history.len() + 3);
        contents.push(json!({
            "role": "user",
            "parts": [{ "text": prompts::chat_system_prompt(context) }]
        }));
        contents.push(json!({
            "role": "model",
            "parts": [{ "text": prompts::chat_ack(context) }]
        }));
        for msg in history {
            let role = match msg.role {
                ChatRole::User => "user",
                ChatRole::Model => "model",
            };
            contents.push(json!({ "role": role, "parts": [{ "text": msg.content }] }));
        }
        contents.push(json!({ "role": "user", "parts": [{ "text": message }] }));

        let response = self.generate(None, contents)?;
        Ok(response.trim().to_string())
    }

    fn config(&self) -> &LlmConfig {
        &self.config
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

/// Gemini API response structure.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

/// One response candidate.
#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

/// Content of a candidate.
#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

/// One content part.
#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}
