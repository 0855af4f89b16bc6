use std::env;

/// Fixed base URL used whenever the process runs in test mode.
pub const TEST_API_BASE_URL: &str = "http://localhost:8080";
/// Default base URL for local development.
pub const DEV_API_BASE_URL: &str = "http://localhost:8080";
/// In production the API sits behind a reverse proxy on a relative path.
pub const PROD_API_BASE_PATH: &str = "/api";

pub const APP_ENV_VAR: &str = "APP_ENV";
pub const API_BASE_URL_VAR: &str = "API_BASE_URL";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiMode {
    Development,
    Production,
    Test,
}

impl ApiMode {
    pub fn from_env() -> Self {
        env::var(APP_ENV_VAR)
            .map(|v| Self::from_name(&v))
            .unwrap_or(ApiMode::Development)
    }

    /// Unknown names fall back to Development rather than failing.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => ApiMode::Production,
            "test" => ApiMode::Test,
            _ => ApiMode::Development,
        }
    }
}

/// One step in the fallback chain. Returns None to pass to the next provider.
type Provider = fn(ApiMode, Option<&str>) -> Option<String>;

/// Evaluated left-to-right, first match wins.
const PROVIDERS: [Provider; 3] = [test_mode_url, injected_override, build_mode_default];

fn test_mode_url(mode: ApiMode, _override_url: Option<&str>) -> Option<String> {
    (mode == ApiMode::Test).then(|| TEST_API_BASE_URL.to_string())
}

fn injected_override(_mode: ApiMode, override_url: Option<&str>) -> Option<String> {
    override_url
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn build_mode_default(mode: ApiMode, _override_url: Option<&str>) -> Option<String> {
    let url = match mode {
        ApiMode::Production => PROD_API_BASE_PATH,
        ApiMode::Development | ApiMode::Test => DEV_API_BASE_URL,
    };
    Some(url.to_string())
}

/// Resolves the API base URL for the given mode. Total: a missing or
/// unreadable override simply falls through to the build-mode default, and
/// repeated calls with an unchanged environment return the same value.
pub fn resolve_api_base_url(mode: ApiMode) -> String {
    // A non-UTF-8 value surfaces as VarError and is treated as absent.
    let override_url = env::var(API_BASE_URL_VAR).ok();
    resolve_with(mode, override_url.as_deref())
}

fn resolve_with(mode: ApiMode, override_url: Option<&str>) -> String {
    PROVIDERS
        .iter()
        .find_map(|provider| provider(mode, override_url))
        .unwrap_or_else(|| DEV_API_BASE_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_ignores_override() {
        let url = resolve_with(ApiMode::Test, Some("http://elsewhere:9999"));
        assert_eq!(url, TEST_API_BASE_URL);
    }

    #[test]
    fn override_wins_outside_test_mode() {
        let url = resolve_with(ApiMode::Development, Some("http://staging.clinic.local"));
        assert_eq!(url, "http://staging.clinic.local");
        let url = resolve_with(ApiMode::Production, Some("http://staging.clinic.local"));
        assert_eq!(url, "http://staging.clinic.local");
    }

    #[test]
    fn empty_override_falls_through() {
        assert_eq!(resolve_with(ApiMode::Development, Some("")), DEV_API_BASE_URL);
        assert_eq!(resolve_with(ApiMode::Development, Some("   ")), DEV_API_BASE_URL);
    }

    #[test]
    fn absent_override_uses_build_mode_default() {
        assert_eq!(resolve_with(ApiMode::Development, None), DEV_API_BASE_URL);
        assert_eq!(resolve_with(ApiMode::Production, None), PROD_API_BASE_PATH);
    }

    #[test]
    fn resolution_is_idempotent() {
        let first = resolve_api_base_url(ApiMode::Development);
        let second = resolve_api_base_url(ApiMode::Development);
        assert_eq!(first, second);
    }

    #[test]
    fn mode_names_parse_loosely() {
        assert_eq!(ApiMode::from_name("production"), ApiMode::Production);
        assert_eq!(ApiMode::from_name("PROD"), ApiMode::Production);
        assert_eq!(ApiMode::from_name(" test "), ApiMode::Test);
        assert_eq!(ApiMode::from_name("development"), ApiMode::Development);
        assert_eq!(ApiMode::from_name("anything-else"), ApiMode::Development);
    }
}
