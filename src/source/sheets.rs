//! Google Sheets row source over the v4 values API, authenticated with a
//! service-account JWT exchanged for a bearer token.

use std::time::Duration;

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use serde::Serialize;
use serde_json::Value;

use crate::config::{AppConfig, ServiceAccount};
use crate::errors::{AppError, AppResult};
use crate::source::Row;

const SHEETS_ENDPOINT: &str = "https://sheets.googleapis.com/v4/spreadsheets";
const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets.readonly";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const TOKEN_TTL_SECS: i64 = 3600;
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// All columns the classifier may be pointed at fit in A:Z.
const READ_RANGE: &str = "A:Z";

#[derive(Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

/// Spreadsheet metadata returned by a connection test.
pub struct SheetInfo {
    pub title: String,
    pub sheet_titles: Vec<String>,
    pub target_exists: bool,
}

pub struct SheetsClient<'a> {
    http: Client,
    account: &'a ServiceAccount,
    spreadsheet_id: &'a str,
    sheet_name: &'a str,
}

impl<'a> SheetsClient<'a> {
    pub fn new(cfg: &'a AppConfig) -> AppResult<Self> {
        let (account, spreadsheet_id) = cfg.sheets()?;
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            http,
            account,
            spreadsheet_id,
            sheet_name: &cfg.sheet_name,
        })
    }

    /// Signs a short-lived JWT with the service-account key and exchanges it
    /// at the token endpoint for a bearer token.
    fn access_token(&self) -> AppResult<String> {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            iss: &self.account.client_email,
            scope: SHEETS_SCOPE,
            aud: &self.account.token_uri,
            iat: now,
            exp: now + TOKEN_TTL_SECS,
        };
        let key = EncodingKey::from_rsa_pem(self.account.private_key.as_bytes())
            .map_err(|e| AppError::Credentials(format!("unusable private key: {e}")))?;
        let assertion = encode(&Header::new(Algorithm::RS256), &claims, &key)
            .map_err(|e| AppError::Credentials(format!("failed to sign token request: {e}")))?;

        let response = self
            .http
            .post(&self.account.token_uri)
            .form(&[
                ("grant_type", JWT_BEARER_GRANT),
                ("assertion", assertion.as_str()),
            ])
            .send()?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            return Err(AppError::Sheets(format!(
                "token exchange failed ({status}): {body}"
            )));
        }

        let json: Value = response.json()?;
        json["access_token"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| AppError::Sheets("token response missing access_token".to_string()))
    }

    /// Fetches the configured sheet as raw rows, header first. An empty
    /// sheet comes back as an empty table, not an error.
    pub fn fetch_rows(&self) -> AppResult<Vec<Row>> {
        let token = self.access_token()?;
        let url = format!(
            "{SHEETS_ENDPOINT}/{}/values/{}!{READ_RANGE}",
            self.spreadsheet_id, self.sheet_name
        );
        let response = self
            .http
            .get(&url)
            .query(&[
                ("valueRenderOption", "FORMATTED_VALUE"),
                ("dateTimeRenderOption", "FORMATTED_STRING"),
            ])
            .bearer_auth(&token)
            .send()?;
        let response = self.check_status(response)?;

        let json: Value = response.json()?;
        let Some(values) = json["values"].as_array() else {
            return Ok(Vec::new());
        };
        Ok(values
            .iter()
            .map(|row| {
                row.as_array()
                    .map(|cells| cells.iter().map(cell_to_string).collect())
                    .unwrap_or_default()
            })
            .collect())
    }

    /// Reads the spreadsheet metadata: document title, tab names, and
    /// whether the configured tab is among them.
    pub fn test_connection(&self) -> AppResult<SheetInfo> {
        let token = self.access_token()?;
        let url = format!("{SHEETS_ENDPOINT}/{}", self.spreadsheet_id);
        let response = self.http.get(&url).bearer_auth(&token).send()?;
        let response = self.check_status(response)?;

        let json: Value = response.json()?;
        let title = json["properties"]["title"]
            .as_str()
            .unwrap_or("Unknown")
            .to_string();
        let sheet_titles: Vec<String> = json["sheets"]
            .as_array()
            .map(|sheets| {
                sheets
                    .iter()
                    .filter_map(|s| s["properties"]["title"].as_str())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        let target_exists = sheet_titles.iter().any(|t| t == self.sheet_name);
        Ok(SheetInfo {
            title,
            sheet_titles,
            target_exists,
        })
    }

    /// Maps API failures onto actionable messages. 404 and 403 are the two
    /// setups mistakes users actually hit.
    fn check_status(&self, response: Response) -> AppResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let detail = response
            .text()
            .ok()
            .and_then(|body| serde_json::from_str::<Value>(&body).ok())
            .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
            .unwrap_or_else(|| status.to_string());
        Err(match status {
            StatusCode::NOT_FOUND => AppError::Sheets(format!(
                "spreadsheet not found, check SPREADSHEET_ID: {detail}"
            )),
            StatusCode::FORBIDDEN => AppError::Sheets(format!(
                "no access to spreadsheet, share it with '{}': {detail}",
                self.account.client_email
            )),
            _ => AppError::Sheets(format!("Sheets API error ({status}): {detail}")),
        })
    }
}

/// The values API returns strings for FORMATTED_VALUE, but empty cells and
/// unformatted numbers can still come through as other JSON types.
fn cell_to_string(cell: &Value) -> String {
    match cell {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
