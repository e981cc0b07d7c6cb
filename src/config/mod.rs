// src/config/mod.rs
use crate::health::CheckError;
use std::ffi::OsString;
use std::time::Duration;

/// Environment variable holding the URL to check.
pub const HEALTH_URL_ENV: &str = "DEPLOYED_HEALTH_URL";

/// Bound on the whole round trip: connect, headers and body.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub url: String,
    pub timeout: Duration,
}

impl Config {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, CheckError> {
        Self::from_os_value(std::env::var_os(HEALTH_URL_ENV))
    }

    /// Like [`Config::from_value`], for a value taken straight from the OS.
    ///
    /// A set but non-unicode value is passed on lossily rather than reported
    /// as unset; the HTTP client decides whether it is a usable URL.
    pub fn from_os_value(value: Option<OsString>) -> Result<Self, CheckError> {
        Self::from_value(value.map(|v| v.to_string_lossy().into_owned()))
    }

    /// Build a configuration from the raw variable value.
    ///
    /// The URL is not parsed here; a malformed one surfaces later as a
    /// request error from the HTTP client.
    pub fn from_value(value: Option<String>) -> Result<Self, CheckError> {
        match value {
            Some(url) if !url.is_empty() => Ok(Self {
                url,
                timeout: DEFAULT_TIMEOUT,
            }),
            _ => Err(CheckError::Config(HEALTH_URL_ENV)),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_value_is_config_error() {
        let err = Config::from_value(None).unwrap_err();
        assert!(matches!(err, CheckError::Config(HEALTH_URL_ENV)));
        assert_eq!(err.to_string(), "DEPLOYED_HEALTH_URL is not set");
    }

    #[test]
    fn test_empty_value_is_config_error() {
        let err = Config::from_value(Some(String::new())).unwrap_err();
        assert!(matches!(err, CheckError::Config(_)));
    }

    #[test]
    fn test_value_is_kept_verbatim_with_fixed_timeout() {
        let config = Config::from_value(Some("not even a url".to_string())).unwrap();
        assert_eq!(config.url, "not even a url");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_unset_os_value_is_config_error() {
        assert!(matches!(
            Config::from_os_value(None),
            Err(CheckError::Config(HEALTH_URL_ENV))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_unicode_os_value_is_passed_on() {
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(b"http://localhost/\xffhealth".to_vec());
        let config = Config::from_os_value(Some(raw)).unwrap();
        assert_eq!(config.url, "http://localhost/\u{FFFD}health");
    }

    #[test]
    fn test_with_timeout_overrides_bound() {
        let config = Config::from_value(Some("http://localhost/health".to_string()))
            .unwrap()
            .with_timeout(Duration::from_millis(250));
        assert_eq!(config.timeout, Duration::from_millis(250));
    }
}
