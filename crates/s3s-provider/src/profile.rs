//! Static provider table
//!
//! Each supported provider is one [`ProviderProfile`] row. Providers differ only
//! in data, so there is a single table rather than a type per provider.
//!
//! Adding a provider means adding one complete row: every header role must be
//! bound, using `None` for roles the provider does not support.

use crate::acl::{AclKind, GS_CANNED_ACLS, S3_CANNED_ACLS};
use crate::error::UnknownProviderError;
use crate::header::HeaderBindings;

const AWS_HEADER_PREFIX: &str = "x-amz-";
const GOOG_HEADER_PREFIX: &str = "x-goog-";

/// Names under which a provider's credentials are looked up.
///
/// The same name is used as the option in the `Credentials` config section, and
/// upper-cased as the environment variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialKeys {
    pub access_key: &'static str,
    pub secret_key: &'static str,
}

/// One row of the provider table.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct ProviderProfile {
    /// Provider id
    pub name: &'static str,
    pub credential_keys: CredentialKeys,
    pub acl_kind: AclKind,
    pub canned_acls: &'static [&'static str],
    /// Short token used to build the host override option `{host_key}_host`
    pub host_key: &'static str,
    pub headers: HeaderBindings,
}

impl ProviderProfile {
    /// Config option that overrides the provider host.
    ///
    /// # Examples
    /// ```
    /// # use s3s_provider::profile::AWS;
    /// assert_eq!(AWS.host_option(), "s3_host");
    /// ```
    #[must_use]
    pub fn host_option(&self) -> String {
        format!("{}_host", self.host_key)
    }

    #[must_use]
    pub fn is_canned_acl(&self, acl: &str) -> bool {
        self.canned_acls.contains(&acl)
    }
}

pub static AWS: ProviderProfile = ProviderProfile {
    name: "aws",
    credential_keys: CredentialKeys {
        access_key: "aws_access_key_id",
        secret_key: "aws_secret_access_key",
    },
    acl_kind: AclKind::PolicyBased,
    canned_acls: S3_CANNED_ACLS,
    host_key: "s3",
    headers: HeaderBindings {
        header_prefix: Some(AWS_HEADER_PREFIX),
        metadata_prefix: Some(const_str::concat!(AWS_HEADER_PREFIX, "meta-")),
        acl_header: Some(const_str::concat!(AWS_HEADER_PREFIX, "acl")),
        auth_header: Some("AWS"),
        copy_source_header: Some(const_str::concat!(AWS_HEADER_PREFIX, "copy-source")),
        copy_source_version_id_header: Some(const_str::concat!(AWS_HEADER_PREFIX, "copy-source-version-id")),
        date_header: Some(const_str::concat!(AWS_HEADER_PREFIX, "date")),
        delete_marker_header: Some(const_str::concat!(AWS_HEADER_PREFIX, "delete-marker")),
        metadata_directive_header: Some(const_str::concat!(AWS_HEADER_PREFIX, "metadata-directive")),
        security_token_header: Some(const_str::concat!(AWS_HEADER_PREFIX, "security-token")),
        storage_class_header: Some(const_str::concat!(AWS_HEADER_PREFIX, "storage-class")),
        mfa_header: Some(const_str::concat!(AWS_HEADER_PREFIX, "mfa")),
        version_id_header: Some(const_str::concat!(AWS_HEADER_PREFIX, "version-id")),
    },
};

pub static GOOGLE: ProviderProfile = ProviderProfile {
    name: "google",
    credential_keys: CredentialKeys {
        access_key: "gs_access_key_id",
        secret_key: "gs_secret_access_key",
    },
    acl_kind: AclKind::AclListBased,
    canned_acls: GS_CANNED_ACLS,
    host_key: "gs",
    headers: HeaderBindings {
        header_prefix: Some(GOOG_HEADER_PREFIX),
        metadata_prefix: Some(const_str::concat!(GOOG_HEADER_PREFIX, "meta-")),
        acl_header: Some(const_str::concat!(GOOG_HEADER_PREFIX, "acl")),
        auth_header: Some("GOOG1"),
        copy_source_header: Some(const_str::concat!(GOOG_HEADER_PREFIX, "copy-source")),
        copy_source_version_id_header: Some(const_str::concat!(GOOG_HEADER_PREFIX, "copy-source-version-id")),
        date_header: Some(const_str::concat!(GOOG_HEADER_PREFIX, "date")),
        delete_marker_header: Some(const_str::concat!(GOOG_HEADER_PREFIX, "delete-marker")),
        metadata_directive_header: Some(const_str::concat!(GOOG_HEADER_PREFIX, "metadata-directive")),
        security_token_header: Some(const_str::concat!(GOOG_HEADER_PREFIX, "security-token")),
        storage_class_header: None,
        mfa_header: None,
        version_id_header: Some(const_str::concat!(GOOG_HEADER_PREFIX, "version-id")),
    },
};

/// All known providers.
pub static PROFILES: &[&ProviderProfile] = &[&AWS, &GOOGLE];

/// Finds the profile of the provider `name`.
///
/// # Errors
/// Returns [`UnknownProviderError`] if no profile has this name.
///
/// # Examples
/// ```
/// # use s3s_provider::profile::lookup;
/// assert_eq!(lookup("google").unwrap().host_key, "gs");
/// assert!(lookup("azure").is_err());
/// ```
pub fn lookup(name: &str) -> Result<&'static ProviderProfile, UnknownProviderError> {
    PROFILES
        .iter()
        .copied()
        .find(|p| p.name == name)
        .ok_or_else(|| UnknownProviderError::new(name))
}
