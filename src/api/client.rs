use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Method;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use yansi::Paint;

use crate::error::ApiError;

static SILENT: AtomicBool = AtomicBool::new(false);

pub fn set_silent(silent: bool) {
    SILENT.store(silent, Ordering::Relaxed);
}

fn log_output(msg: String) {
    if !SILENT.load(Ordering::Relaxed) {
        println!("{}", msg);
    }
}

/// Everything needed to reach the deployment backend.
#[derive(Clone, Debug)]
pub struct ApiConnection {
    pub client: reqwest::Client,
    pub api_base_url: String,
    pub api_token: String,
}

impl ApiConnection {
    pub fn new(api_base_url: impl Into<String>, api_token: impl Into<String>) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .user_agent(format!("Keel/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(format!("failed to create HTTP client: {}", e)))?;
        Ok(Self {
            client,
            api_base_url: api_base_url.into(),
            api_token: api_token.into(),
        })
    }
}

fn mask_token(token: &str) -> String {
    let visible: String = token.chars().take(4).collect();
    format!("{}…", visible)
}

fn log_request(conn: &ApiConnection, method: &Method, url: &str, body: Option<&Value>) {
    let mut parts = Vec::new();
    parts.push(Paint::new("curl").fg(yansi::Color::Green).bold().to_string());
    parts.push(format!("-X {}", Paint::new(method.as_str()).fg(yansi::Color::Yellow).bold()));
    parts.push(format!("'{}'", Paint::new(url).fg(yansi::Color::Cyan)));
    parts.push(format!(
        "{} {}",
        Paint::new("-H").fg(yansi::Color::Magenta),
        Paint::new("'Accept: application/json'").fg(yansi::Color::Magenta)
    ));
    if !conn.api_token.is_empty() {
        parts.push(format!(
            "{} {}",
            Paint::new("-H").fg(yansi::Color::Magenta),
            Paint::new(format!("'Authorization: Bearer {}'", mask_token(&conn.api_token))).fg(yansi::Color::Magenta)
        ));
    }
    if let Some(d) = body {
        let json_str = serde_json::to_string_pretty(d).unwrap_or_default();
        let escaped_json = json_str.replace('\'', "'\\''");
        parts.push(format!(
            "{} {}",
            Paint::new("-H").fg(yansi::Color::Magenta),
            Paint::new("'Content-Type: application/json'").fg(yansi::Color::Magenta)
        ));
        parts.push(format!(
            "{} {}",
            Paint::new("-d").fg(yansi::Color::Blue),
            Paint::new(format!("'{}'", escaped_json)).fg(yansi::Color::White)
        ));
    }
    log_output(format!("Request:\n{}", parts.join(" ")));
}

/// Sends one request to the backend and decodes the JSON answer.
///
/// Non-2xx answers with a JSON body come back as `ApiError::Rejected`; any
/// other non-2xx answer is `ApiError::UnexpectedStatus` with the raw text.
pub async fn api_call(
    conn: &ApiConnection,
    method: Method,
    endpoint: &str,
    body: Option<&Value>,
) -> Result<Value, ApiError> {
    let url = format!("{}{}", conn.api_base_url, endpoint);
    log_request(conn, &method, &url, body);

    let mut req = conn
        .client
        .request(method.clone(), &url)
        .header(ACCEPT, "application/json");
    if !conn.api_token.is_empty() {
        req = req.header(AUTHORIZATION, format!("Bearer {}", conn.api_token));
    }
    if let Some(b) = body {
        req = req.json(b);
    }

    let resp = req.send().await.map_err(|e| {
        tracing::error!(%e, %method, endpoint, "Backend request failed");
        ApiError::Network(e.to_string())
    })?;
    let status = resp.status();
    let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;

    let response_str = Paint::new(format!("{} {}", status.as_u16(), text)).rgb(100, 100, 100).to_string();
    log_output(format!("Response:\n{}", response_str));

    let parsed = if text.trim().is_empty() {
        Ok(Value::Null)
    } else {
        serde_json::from_str::<Value>(&text)
    };

    if status.is_success() {
        parsed.map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        tracing::warn!(status = status.as_u16(), %method, endpoint, "Backend rejected request");
        match parsed {
            Ok(body) if !body.is_null() => Err(ApiError::Rejected {
                status: status.as_u16(),
                body,
            }),
            _ => Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
                body: text,
            }),
        }
    }
}

/// Collection endpoints answer either with a bare array or `{"data": [...]}`.
pub(crate) fn unwrap_collection(payload: Value) -> Value {
    match payload {
        Value::Object(mut obj) if obj.get("data").map(Value::is_array).unwrap_or(false) => {
            obj.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// Single records may be wrapped as `{"data": {...}}`.
pub(crate) fn unwrap_record(payload: Value) -> Value {
    match payload {
        Value::Object(mut obj) if !obj.contains_key("id") && obj.get("data").map(Value::is_object).unwrap_or(false) => {
            obj.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}
