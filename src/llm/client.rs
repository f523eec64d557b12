//! OpenRouter chat-completions client.

use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;
use reqwest::blocking::Client;
use serde_json::{Value, json};

use super::{AnalysisBackend, LlmReply};
use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};

const TEMPERATURE: f64 = 0.3;
const MAX_TOKENS: u32 = 500;

const SYSTEM_PROMPT: &str = "\
You are an experienced technical support specialist.
Analyze the user's problem description and provide a structured analysis.

Analysis steps:
1. Determine the request priority (high/medium/low):
    - HIGH: critical problems (system down, data loss, security threats)
    - MEDIUM: important issues with temporary workarounds, functionality
      questions, errors in non-critical components
    - LOW: informational requests, documentation questions, improvement
      suggestions
2. Formulate a brief summary of the problem (1-2 sentences)
3. Provide a solution recommendation or next step

Response format - strictly JSON:
{
    \"priority\": \"high|medium|low\",
    \"summary\": \"brief problem summary in English\",
    \"recommendation\": \"specific solution recommendation in English\"
}

Be specific in recommendations. If the problem requires an urgent solution,
mention it.";

pub struct OpenRouterClient {
    http: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenRouterClient {
    pub fn new(cfg: &AppConfig) -> AppResult<Self> {
        let api_key = cfg
            .openrouter_api_key
            .clone()
            .ok_or_else(|| AppError::Config("OPENROUTER_API_KEY not set".to_string()))?;
        let http = Client::builder()
            .timeout(Duration::from_secs(cfg.llm_timeout_secs))
            .build()?;
        Ok(Self {
            http,
            api_key,
            base_url: cfg.openrouter_base_url.clone(),
            model: cfg.openrouter_model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self, path: &str) -> String {
        if self.base_url.ends_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Posts one chat request and extracts the reply text. Transport
    /// failures, bad statuses, and empty replies all come back as
    /// `AppError::Llm`; callers treat them uniformly.
    fn chat(&self, body: Value) -> AppResult<String> {
        let response = self
            .http
            .post(self.endpoint("chat/completions"))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .map_err(|e| AppError::Llm(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().unwrap_or_default();
            return Err(AppError::Llm(format!("API error ({status}): {text}")));
        }

        let json: Value = response
            .json()
            .map_err(|e| AppError::Llm(format!("invalid response body: {e}")))?;
        let content = json["choices"][0]["message"]["content"]
            .as_str()
            .unwrap_or("")
            .trim()
            .to_string();
        if content.is_empty() {
            return Err(AppError::Llm("model returned empty content".to_string()));
        }
        Ok(content)
    }

    /// One-token ping used by `sheetlens test --llm`.
    pub fn test_connection(&self) -> AppResult<String> {
        self.chat(json!({
            "model": self.model,
            "messages": [
                {"role": "user", "content": "Reply with one word: 'Working'"}
            ],
            "max_tokens": 10,
        }))
    }
}

impl AnalysisBackend for OpenRouterClient {
    fn analyze(&self, description: &str, category: &str) -> AppResult<LlmReply> {
        let category = if category.is_empty() {
            "Not specified"
        } else {
            category
        };
        let user_prompt = format!(
            "User request:\n\n[\nCategory:\n{category}\n\nProblem description:\n{description}\n]\n\n\
             Analyze this request according to the instructions above."
        );

        let content = self.chat(json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": user_prompt},
            ],
            "temperature": TEMPERATURE,
            "max_tokens": MAX_TOKENS,
            "response_format": {"type": "json_object"},
        }))?;

        serde_json::from_str(strip_fence(&content))
            .map_err(|e| AppError::Llm(format!("model returned invalid JSON: {e}")))
    }
}

/// Models that ignore response_format tend to wrap the JSON in a Markdown
/// code fence; unwrap it before parsing.
fn strip_fence(content: &str) -> &str {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    let fence = FENCE
        .get_or_init(|| Regex::new(r"(?s)^```(?:json)?\s*(.*?)\s*```$").expect("valid regex"));
    match fence.captures(content.trim()) {
        Some(caps) => caps.get(1).map(|m| m.as_str()).unwrap_or(content),
        None => content.trim(),
    }
}
