use std::env;
use std::path::Path;
use std::time::Duration;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_API_BASE_URL: &str = "";
pub const DEFAULT_API_TOKEN: &str = "";
pub const DEFAULT_PUBLIC_BASE_URL: &str = "";

pub const FALLBACK_BASE_URL: &str = "http://localhost:8000";

// Backend endpoints, relative to API_BASE_URL
pub const PROJECTS_ENDPOINT: &str = "/api/projects";
pub const ACCOUNT_PROVIDERS_ENDPOINT: &str = "/api/account-providers";

pub const PROJECT_CREATED_MESSAGE: &str = "Project created successfully.";

// Session bookkeeping for the web dashboard
pub const DEFAULT_SESSION_IDLE_SECS: u64 = 30 * 60;
pub const DEFAULT_MAX_SESSIONS: usize = 1_000;
pub const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        if let Err(e) = dotenvy::from_path(Path::new(path)) {
            tracing::warn!(%e, path, "Could not load env file");
        }
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_api_base_url() -> String {
    sanitize_base_url(&env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()))
}

pub fn get_api_token() -> String {
    env::var("API_TOKEN")
        .map(|t| t.trim().to_string())
        .unwrap_or_else(|_| DEFAULT_API_TOKEN.to_string())
}

/// Unlike the API base URL this has no fallback: an empty value means the
/// page carries no canonical link.
pub fn get_public_base_url() -> String {
    env::var("PUBLIC_BASE_URL")
        .unwrap_or_else(|_| DEFAULT_PUBLIC_BASE_URL.to_string())
        .trim()
        .trim_end_matches('/')
        .to_string()
}

/// How long a dashboard session may sit unused before it is dropped.
pub fn get_session_idle_timeout() -> Duration {
    let secs = env::var("SESSION_IDLE_SECS")
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_SESSION_IDLE_SECS);
    Duration::from_secs(secs)
}

/// Upper bound on dashboard sessions held in memory at once.
pub fn get_max_sessions() -> usize {
    env::var("MAX_SESSIONS")
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_MAX_SESSIONS)
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        FALLBACK_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}
