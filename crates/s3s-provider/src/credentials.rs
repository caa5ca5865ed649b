//! Credential resolution
//!
//! Each credential is resolved independently from, in order:
//!
//! 1. the explicit argument, if non-empty;
//! 2. the environment variable named after the upper-cased lookup name;
//! 3. the same lookup name in the `Credentials` config section.
//!
//! A credential found nowhere is absent, which is not an error here. Anonymous
//! requests need no credentials; signing code rejects missing ones when it must.

use crate::config::{CREDENTIALS_SECTION, ConfigSource};
use crate::env::EnvSource;

use std::fmt;

use subtle::ConstantTimeEq;
use tracing::debug;
use zeroize::Zeroize;

/// Where a credential was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    Explicit,
    Environment,
    Config,
}

/// Resolves one credential by its lookup name.
///
/// # Example
/// ```
/// use s3s_provider::config::BotoConfig;
/// use s3s_provider::credentials::{resolve_credential, CredentialSource};
/// use s3s_provider::env::MapEnv;
///
/// let env = MapEnv::new().with("AWS_ACCESS_KEY_ID", "from-env");
/// let config = BotoConfig::parse("[Credentials]\naws_access_key_id = from-config\n").unwrap();
///
/// let (value, source) = resolve_credential(None, "aws_access_key_id", &env, &config).unwrap();
/// assert_eq!(value, "from-env");
/// assert_eq!(source, CredentialSource::Environment);
///
/// let (value, _) = resolve_credential(Some("explicit"), "aws_access_key_id", &env, &config).unwrap();
/// assert_eq!(value, "explicit");
/// ```
#[must_use]
pub fn resolve_credential(
    explicit: Option<&str>,
    key_name: &str,
    env: &dyn EnvSource,
    config: &dyn ConfigSource,
) -> Option<(String, CredentialSource)> {
    let found = if let Some(value) = explicit.filter(|s| !s.is_empty()) {
        Some((value.to_owned(), CredentialSource::Explicit))
    } else if let Some(value) = env.var(&key_name.to_ascii_uppercase()) {
        Some((value, CredentialSource::Environment))
    } else {
        config
            .option(CREDENTIALS_SECTION, key_name)
            .map(|value| (value, CredentialSource::Config))
    };

    match &found {
        Some((_, source)) => debug!(key = key_name, ?source, "resolved credential"),
        None => debug!(key = key_name, "credential not found"),
    }

    found
}

/// A secret access key.
///
/// The value is redacted in `Debug` output and wiped from memory on drop.
#[derive(Clone)]
pub struct SecretKey(String);

impl SecretKey {
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl From<String> for SecretKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SecretKey {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_bytes().ct_eq(other.0.as_bytes()).into()
    }
}

impl Eq for SecretKey {}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[SENSITIVE-SECRET-KEY]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::BotoConfig;
    use crate::env::MapEnv;

    const KEY: &str = "gs_access_key_id";

    fn sources() -> (MapEnv, BotoConfig) {
        let env = MapEnv::new().with("GS_ACCESS_KEY_ID", "env-value");
        let mut config = BotoConfig::new();
        config.set(CREDENTIALS_SECTION, KEY, "config-value");
        (env, config)
    }

    #[test]
    fn explicit_wins() {
        let (env, config) = sources();
        let ans = resolve_credential(Some("arg-value"), KEY, &env, &config);
        assert_eq!(ans, Some(("arg-value".to_owned(), CredentialSource::Explicit)));
    }

    #[test]
    fn empty_explicit_falls_through() {
        let (env, config) = sources();
        let ans = resolve_credential(Some(""), KEY, &env, &config);
        assert_eq!(ans, Some(("env-value".to_owned(), CredentialSource::Environment)));
    }

    #[test]
    fn environment_beats_config() {
        let (env, config) = sources();
        let ans = resolve_credential(None, KEY, &env, &config);
        assert_eq!(ans, Some(("env-value".to_owned(), CredentialSource::Environment)));
    }

    #[test]
    fn lowercase_env_name_is_ignored() {
        let (_, config) = sources();
        let env = MapEnv::new().with(KEY, "lowercase");
        let ans = resolve_credential(None, KEY, &env, &config);
        assert_eq!(ans, Some(("config-value".to_owned(), CredentialSource::Config)));
    }

    #[test]
    fn config_only_credentials_section() {
        let env = MapEnv::new();
        let mut config = BotoConfig::new();
        config.set("Boto", KEY, "wrong-section");
        assert_eq!(resolve_credential(None, KEY, &env, &config), None);
    }

    #[test]
    fn absent_everywhere() {
        assert_eq!(resolve_credential(None, KEY, &MapEnv::new(), &BotoConfig::new()), None);
    }

    #[test]
    fn secret_key_redacted() {
        let key = SecretKey::from("wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY");
        assert_eq!(format!("{key:?}"), "[SENSITIVE-SECRET-KEY]");
        assert_eq!(key.expose(), "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY");
        assert_eq!(key, SecretKey::from(String::from("wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY")));
        assert_ne!(key, SecretKey::from("other"));
    }
}
