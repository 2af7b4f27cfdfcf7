use std::env;

use crate::error::{ClientError, Result};

/// Public NZDPU host serving the coverage API.
pub const DEFAULT_BASE_URL: &str = "https://nzdpu.com";

/// Environment variable holding the registry access key.
pub const API_KEY_VAR: &str = "NZDPU_API_KEY";

/// Optional environment variable overriding the registry host.
pub const BASE_URL_VAR: &str = "NZDPU_BASE_URL";

/// Connection settings for one registry.
///
/// Passed explicitly into [`HistoryFetcher`](crate::HistoryFetcher); the
/// environment is only consulted when the caller opts in via
/// [`RegistryConfig::from_env`].
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Scheme and host (plus optional port), without a trailing path.
    pub base_url: String,
    /// Ready-to-send access key. Obtaining and rotating credentials is the
    /// caller's concern.
    pub api_key: String,
}

impl RegistryConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Configuration for the public registry host.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self::new(DEFAULT_BASE_URL, api_key)
    }

    /// Read `NZDPU_API_KEY` (required) and `NZDPU_BASE_URL` (optional host
    /// override) from the process environment. Blank values count as unset.
    pub fn from_env() -> Result<Self> {
        let api_key = read_env(API_KEY_VAR).ok_or(ClientError::MissingEnv(API_KEY_VAR))?;
        let base_url = read_env(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Ok(Self { base_url, api_key })
    }
}

fn read_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::sync::Mutex;

    // Environment mutations are process-wide, so these tests take turns.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct EnvGuard {
        saved: Vec<(&'static str, Option<OsString>)>,
    }

    impl EnvGuard {
        fn clear(keys: &[&'static str]) -> Self {
            let mut saved = Vec::new();
            for &key in keys {
                saved.push((key, env::var_os(key)));
                env::remove_var(key);
            }
            Self { saved }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, value) in self.saved.drain(..) {
                match value {
                    Some(v) => env::set_var(key, v),
                    None => env::remove_var(key),
                }
            }
        }
    }

    #[test]
    fn with_api_key_targets_the_public_host() {
        let config = RegistryConfig::with_api_key("key-abc");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api_key, "key-abc");
    }

    #[test]
    fn from_env_requires_the_api_key() {
        let _lock = ENV_LOCK.lock().expect("ENV_LOCK");
        let _guard = EnvGuard::clear(&[API_KEY_VAR, BASE_URL_VAR]);

        let err = RegistryConfig::from_env().expect_err("missing key must fail");
        assert!(matches!(err, ClientError::MissingEnv(name) if name == API_KEY_VAR));
    }

    #[test]
    fn from_env_defaults_to_the_public_host() {
        let _lock = ENV_LOCK.lock().expect("ENV_LOCK");
        let _guard = EnvGuard::clear(&[API_KEY_VAR, BASE_URL_VAR]);
        env::set_var(API_KEY_VAR, "key-123");

        let config = RegistryConfig::from_env().expect("config");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api_key, "key-123");
    }

    #[test]
    fn from_env_honors_the_host_override() {
        let _lock = ENV_LOCK.lock().expect("ENV_LOCK");
        let _guard = EnvGuard::clear(&[API_KEY_VAR, BASE_URL_VAR]);
        env::set_var(API_KEY_VAR, "  key-456  ");
        env::set_var(BASE_URL_VAR, "http://127.0.0.1:8080");

        let config = RegistryConfig::from_env().expect("config");
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.api_key, "key-456");
    }

    #[test]
    fn blank_override_falls_back_to_the_default() {
        let _lock = ENV_LOCK.lock().expect("ENV_LOCK");
        let _guard = EnvGuard::clear(&[API_KEY_VAR, BASE_URL_VAR]);
        env::set_var(API_KEY_VAR, "key-789");
        env::set_var(BASE_URL_VAR, "   ");

        let config = RegistryConfig::from_env().expect("config");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
