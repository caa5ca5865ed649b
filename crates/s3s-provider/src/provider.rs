//! Provider resolution

use crate::acl::AclKind;
use crate::config::{BotoConfig, CREDENTIALS_SECTION, ConfigSource};
use crate::credentials::{SecretKey, resolve_credential};
use crate::env::{EnvSource, ProcessEnv};
use crate::error::UnknownProviderError;
use crate::header::{HeaderBindings, HeaderRole};
use crate::profile::{self, ProviderProfile};

use tracing::{debug, warn};

/// A provider with its credentials, host override and header bindings resolved.
///
/// All fields are set during construction and never change afterwards, so a
/// `Provider` can be shared read-only between threads.
///
/// The only ways to build one are [`Provider::resolve`], [`Provider::resolve_with`]
/// and [`default_provider`], so its name is always a row of
/// [`PROFILES`](crate::profile::PROFILES).
///
/// ```compile_fail
/// use s3s_provider::Provider;
/// use s3s_provider::config::BotoConfig;
/// use s3s_provider::env::MapEnv;
/// use s3s_provider::profile::AWS;
///
/// let _ = Provider::from_profile(&AWS, None, None, &MapEnv::new(), &BotoConfig::new());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provider {
    profile: &'static ProviderProfile,
    access_key: Option<String>,
    secret_key: Option<SecretKey>,
    host: Option<String>,
}

impl Provider {
    /// Resolves `name` against the process environment and the default boto config files.
    ///
    /// A config file that cannot be read or parsed is logged and ignored.
    ///
    /// # Errors
    /// Returns [`UnknownProviderError`] if `name` is not a known provider.
    pub fn resolve(name: &str, access_key: Option<&str>, secret_key: Option<&str>) -> Result<Self, UnknownProviderError> {
        let profile = profile::lookup(name)?;
        let env = ProcessEnv;
        let config = load_default_config(&env);
        Ok(Self::from_profile(profile, access_key, secret_key, &env, &config))
    }

    /// Resolves `name` against the given environment and config sources.
    ///
    /// # Errors
    /// Returns [`UnknownProviderError`] if `name` is not a known provider.
    ///
    /// # Example
    /// ```
    /// use s3s_provider::Provider;
    /// use s3s_provider::config::BotoConfig;
    /// use s3s_provider::env::MapEnv;
    ///
    /// let env = MapEnv::new().with("GS_SECRET_ACCESS_KEY", "secret");
    /// let config = BotoConfig::parse("[Credentials]\ngs_host = storage.example.com\n").unwrap();
    ///
    /// let provider = Provider::resolve_with("google", Some("access"), None, &env, &config).unwrap();
    /// assert_eq!(provider.access_key(), Some("access"));
    /// assert_eq!(provider.secret_key().map(|s| s.expose()), Some("secret"));
    /// assert_eq!(provider.host(), Some("storage.example.com"));
    /// assert_eq!(provider.headers().storage_class_header, None);
    /// ```
    pub fn resolve_with(
        name: &str,
        access_key: Option<&str>,
        secret_key: Option<&str>,
        env: &dyn EnvSource,
        config: &dyn ConfigSource,
    ) -> Result<Self, UnknownProviderError> {
        let profile = profile::lookup(name)?;
        Ok(Self::from_profile(profile, access_key, secret_key, env, config))
    }

    /// Resolves credentials and host for a profile taken from the table. Never fails.
    #[must_use]
    pub(crate) fn from_profile(
        profile: &'static ProviderProfile,
        access_key: Option<&str>,
        secret_key: Option<&str>,
        env: &dyn EnvSource,
        config: &dyn ConfigSource,
    ) -> Self {
        let keys = profile.credential_keys;
        let access_key = resolve_credential(access_key, keys.access_key, env, config).map(|(value, _)| value);
        let secret_key = resolve_credential(secret_key, keys.secret_key, env, config).map(|(value, _)| SecretKey::from(value));

        let host = config.option(CREDENTIALS_SECTION, &profile.host_option());
        if let Some(host) = &host {
            debug!(provider = profile.name, %host, "host overridden by config");
        }

        Self {
            profile,
            access_key,
            secret_key,
            host,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.profile.name
    }

    #[must_use]
    pub fn profile(&self) -> &'static ProviderProfile {
        self.profile
    }

    #[must_use]
    pub fn access_key(&self) -> Option<&str> {
        self.access_key.as_deref()
    }

    #[must_use]
    pub fn secret_key(&self) -> Option<&SecretKey> {
        self.secret_key.as_ref()
    }

    /// Returns `true` if both the access key and the secret key were found.
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        self.access_key.is_some() && self.secret_key.is_some()
    }

    /// Host override from the config file. Callers apply their own default when absent.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    #[must_use]
    pub fn acl_kind(&self) -> AclKind {
        self.profile.acl_kind
    }

    #[must_use]
    pub fn canned_acls(&self) -> &'static [&'static str] {
        self.profile.canned_acls
    }

    #[must_use]
    pub fn is_canned_acl(&self, acl: &str) -> bool {
        self.profile.is_canned_acl(acl)
    }

    #[must_use]
    pub fn headers(&self) -> &'static HeaderBindings {
        &self.profile.headers
    }

    /// Header name for `role`, or `None` if this provider does not support it.
    #[must_use]
    pub fn header(&self, role: HeaderRole) -> Option<&'static str> {
        self.profile.headers.get(role)
    }
}

/// Returns a freshly resolved `"aws"` provider.
///
/// Nothing is cached: every call reads the environment and config files again.
#[must_use]
pub fn default_provider() -> Provider {
    let env = ProcessEnv;
    let config = load_default_config(&env);
    Provider::from_profile(&profile::AWS, None, None, &env, &config)
}

fn load_default_config(env: &dyn EnvSource) -> BotoConfig {
    match BotoConfig::load_default(env) {
        Ok(config) => config,
        Err(err) => {
            warn!(%err, "ignoring unusable config file");
            BotoConfig::new()
        }
    }
}
