//! Application configuration: read once from the environment at startup
//! (after an optional `.env` file), immutable for the rest of the run and
//! passed explicitly to each component.

use std::env;
use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Deserialize;

use crate::errors::{AppError, AppResult};

const DEFAULT_SHEET_NAME: &str = "Sheet1";
const DEFAULT_CATEGORY_COLUMN: &str = "3";
const DEFAULT_DESCRIPTION_COLUMN: &str = "4";
const DEFAULT_OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";
const DEFAULT_OPENROUTER_MODEL: &str = "mistralai/devstral-2512:free";
const DEFAULT_LLM_TIMEOUT_SECS: u64 = 30;
const DEFAULT_LLM_REQUEST_DELAY_MS: u64 = 500;

/// The range read from the sheet caps columns at Z.
pub const MAX_COLUMN_INDEX: usize = 26;

/// Column selector: 1-based position or header name lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSelector {
    Index(usize),
    Name(String),
}

impl ColumnSelector {
    pub fn parse(raw: &str) -> AppResult<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(AppError::Config("empty column selector".to_string()));
        }
        match raw.parse::<usize>() {
            Ok(n) if (1..=MAX_COLUMN_INDEX).contains(&n) => Ok(Self::Index(n)),
            Ok(n) => Err(AppError::Config(format!(
                "column index out of range 1-{MAX_COLUMN_INDEX}: {n}"
            ))),
            Err(_) => Ok(Self::Name(raw.to_string())),
        }
    }
}

impl fmt::Display for ColumnSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(n) => write!(f, "#{n}"),
            Self::Name(name) => write!(f, "'{name}'"),
        }
    }
}

/// Decoded Google service-account key; only the fields the OAuth flow uses.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccount {
    #[serde(rename = "type")]
    pub account_type: String,
    pub project_id: String,
    pub private_key: String,
    pub client_email: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    "https://oauth2.googleapis.com/token".to_string()
}

#[derive(Debug)]
pub struct AppConfig {
    pub spreadsheet_id: Option<String>,
    pub sheet_name: String,
    pub category_column: ColumnSelector,
    pub description_column: ColumnSelector,
    pub status_column: Option<ColumnSelector>,
    pub credentials: Option<ServiceAccount>,
    pub openrouter_api_key: Option<String>,
    pub openrouter_base_url: String,
    pub openrouter_model: String,
    pub llm_timeout_secs: u64,
    pub llm_request_delay_ms: u64,
    pub debug: bool,
}

impl AppConfig {
    /// Loads `.env` when present, then the process environment. Format
    /// errors (bad Base64, malformed credentials, bad column selector) are
    /// fatal here, before any row is read.
    pub fn load() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let spreadsheet_id = read_optional("SPREADSHEET_ID");
        if let Some(id) = &spreadsheet_id {
            if id.len() < 10 {
                return Err(AppError::Config(format!(
                    "SPREADSHEET_ID looks too short: '{id}'"
                )));
            }
        }

        let credentials = match read_optional("GOOGLE_CREDENTIALS_BASE64") {
            Some(raw) => Some(decode_service_account(&raw)?),
            None => None,
        };

        let status_column = match read_optional("STATUS_COLUMN") {
            Some(raw) => Some(ColumnSelector::parse(&raw)?),
            None => None,
        };

        Ok(Self {
            spreadsheet_id,
            sheet_name: read_or("SHEET_NAME", DEFAULT_SHEET_NAME),
            category_column: ColumnSelector::parse(&read_or(
                "CATEGORY_COLUMN",
                DEFAULT_CATEGORY_COLUMN,
            ))?,
            description_column: ColumnSelector::parse(&read_or(
                "DESCRIPTION_COLUMN",
                DEFAULT_DESCRIPTION_COLUMN,
            ))?,
            status_column,
            credentials,
            openrouter_api_key: read_optional("OPENROUTER_API_KEY"),
            openrouter_base_url: read_or("OPENROUTER_BASE_URL", DEFAULT_OPENROUTER_BASE_URL),
            openrouter_model: read_or("OPENROUTER_MODEL", DEFAULT_OPENROUTER_MODEL),
            llm_timeout_secs: read_parsed("LLM_TIMEOUT_SECS", DEFAULT_LLM_TIMEOUT_SECS)?,
            llm_request_delay_ms: read_parsed(
                "LLM_REQUEST_DELAY_MS",
                DEFAULT_LLM_REQUEST_DELAY_MS,
            )?,
            debug: read_optional("DEBUG")
                .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        })
    }

    /// LLM analysis runs only when an API key is configured.
    pub fn is_llm_enabled(&self) -> bool {
        self.openrouter_api_key.is_some()
    }

    /// Credentials and spreadsheet id, required only when the run actually
    /// uses the API row source.
    pub fn sheets(&self) -> AppResult<(&ServiceAccount, &str)> {
        let account = self.credentials.as_ref().ok_or_else(|| {
            AppError::Config("GOOGLE_CREDENTIALS_BASE64 not set, API mode unavailable".to_string())
        })?;
        let id = self.spreadsheet_id.as_deref().ok_or_else(|| {
            AppError::Config("SPREADSHEET_ID not set, API mode unavailable".to_string())
        })?;
        Ok((account, id))
    }

    /// Service account email, shown in access-denied hints and summaries.
    pub fn service_email(&self) -> Option<&str> {
        self.credentials.as_ref().map(|c| c.client_email.as_str())
    }
}

/// Empty values and unreplaced placeholders ("your-api-key" etc.) count as
/// unset, matching the .env templates this tool is configured from.
fn read_optional(key: &str) -> Option<String> {
    let value = env::var(key).ok()?;
    let value = value.trim().to_string();
    if value.is_empty() || value.contains("your") {
        None
    } else {
        Some(value)
    }
}

fn read_or(key: &str, default: &str) -> String {
    read_optional(key).unwrap_or_else(|| default.to_string())
}

fn read_parsed(key: &str, default: u64) -> AppResult<u64> {
    match read_optional(key) {
        Some(raw) => raw
            .parse::<u64>()
            .map_err(|_| AppError::Config(format!("{key} is not a number: '{raw}'"))),
        None => Ok(default),
    }
}

/// Strict Base64 → JSON → required-field validation. Anything short of a
/// complete service-account key is rejected up front.
fn decode_service_account(raw: &str) -> AppResult<ServiceAccount> {
    let bytes = BASE64
        .decode(raw.trim())
        .map_err(|e| AppError::Credentials(format!("GOOGLE_CREDENTIALS_BASE64 is not valid Base64: {e}")))?;
    let account: ServiceAccount = serde_json::from_slice(&bytes)
        .map_err(|e| AppError::Credentials(format!("decoded key is not a service-account JSON: {e}")))?;

    if account.account_type != "service_account" {
        return Err(AppError::Credentials(format!(
            "unexpected account type '{}'",
            account.account_type
        )));
    }
    for (field, value) in [
        ("project_id", &account.project_id),
        ("private_key", &account.private_key),
        ("client_email", &account.client_email),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::Credentials(format!("missing field: {field}")));
        }
    }
    Ok(account)
}
