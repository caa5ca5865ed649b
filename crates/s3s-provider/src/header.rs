//! Provider header bindings
//!
//! Every provider names the same set of protocol headers differently
//! (`x-amz-acl` vs `x-goog-acl`). A [`HeaderRole`] is the logical purpose of a
//! header, and [`HeaderBindings`] maps each role to the literal header name one
//! provider uses.
//!
//! A role bound to `None` is not supported by that provider. No header should be
//! sent for it, and an empty string is never used to mean the same thing.

use std::fmt;

/// Logical purpose of a provider-specific header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderRole {
    /// Common prefix of all provider headers
    Prefix,
    /// Prefix of user metadata headers
    MetadataPrefix,
    Acl,
    /// Scheme tag of the `Authorization` header
    Auth,
    CopySource,
    CopySourceVersionId,
    Date,
    DeleteMarker,
    MetadataDirective,
    SecurityToken,
    StorageClass,
    Mfa,
    VersionId,
}

impl HeaderRole {
    pub const ALL: [HeaderRole; 13] = [
        Self::Prefix,
        Self::MetadataPrefix,
        Self::Acl,
        Self::Auth,
        Self::CopySource,
        Self::CopySourceVersionId,
        Self::Date,
        Self::DeleteMarker,
        Self::MetadataDirective,
        Self::SecurityToken,
        Self::StorageClass,
        Self::Mfa,
        Self::VersionId,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prefix => "header-prefix",
            Self::MetadataPrefix => "metadata-prefix",
            Self::Acl => "acl-header",
            Self::Auth => "auth-header",
            Self::CopySource => "copy-source-header",
            Self::CopySourceVersionId => "copy-source-version-id-header",
            Self::Date => "date-header",
            Self::DeleteMarker => "delete-marker-header",
            Self::MetadataDirective => "metadata-directive-header",
            Self::SecurityToken => "security-token-header",
            Self::StorageClass => "storage-class",
            Self::Mfa => "mfa-header",
            Self::VersionId => "version-id-header",
        }
    }
}

impl fmt::Display for HeaderRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Header names of one provider, one field per [`HeaderRole`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderBindings {
    pub header_prefix: Option<&'static str>,
    pub metadata_prefix: Option<&'static str>,
    pub acl_header: Option<&'static str>,
    pub auth_header: Option<&'static str>,
    pub copy_source_header: Option<&'static str>,
    pub copy_source_version_id_header: Option<&'static str>,
    pub date_header: Option<&'static str>,
    pub delete_marker_header: Option<&'static str>,
    pub metadata_directive_header: Option<&'static str>,
    pub security_token_header: Option<&'static str>,
    pub storage_class_header: Option<&'static str>,
    pub mfa_header: Option<&'static str>,
    pub version_id_header: Option<&'static str>,
}

impl HeaderBindings {
    /// Returns the header name bound to `role`, or `None` if the provider does not support it.
    #[must_use]
    pub const fn get(&self, role: HeaderRole) -> Option<&'static str> {
        match role {
            HeaderRole::Prefix => self.header_prefix,
            HeaderRole::MetadataPrefix => self.metadata_prefix,
            HeaderRole::Acl => self.acl_header,
            HeaderRole::Auth => self.auth_header,
            HeaderRole::CopySource => self.copy_source_header,
            HeaderRole::CopySourceVersionId => self.copy_source_version_id_header,
            HeaderRole::Date => self.date_header,
            HeaderRole::DeleteMarker => self.delete_marker_header,
            HeaderRole::MetadataDirective => self.metadata_directive_header,
            HeaderRole::SecurityToken => self.security_token_header,
            HeaderRole::StorageClass => self.storage_class_header,
            HeaderRole::Mfa => self.mfa_header,
            HeaderRole::VersionId => self.version_id_header,
        }
    }

    #[must_use]
    pub const fn is_supported(&self, role: HeaderRole) -> bool {
        self.get(role).is_some()
    }

    /// Iterates over all roles in [`HeaderRole::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (HeaderRole, Option<&'static str>)> + '_ {
        HeaderRole::ALL.into_iter().map(|role| (role, self.get(role)))
    }

    /// Builds the header name carrying the user metadata entry `key`.
    ///
    /// # Examples
    /// ```
    /// # use s3s_provider::profile::AWS;
    /// assert_eq!(AWS.headers.metadata_header("color").as_deref(), Some("x-amz-meta-color"));
    /// ```
    #[must_use]
    pub fn metadata_header(&self, key: &str) -> Option<String> {
        self.metadata_prefix.map(|prefix| format!("{prefix}{key}"))
    }

    /// Returns the metadata key of a user metadata header, matching the prefix ASCII case-insensitively.
    ///
    /// # Examples
    /// ```
    /// # use s3s_provider::profile::GOOGLE;
    /// assert_eq!(GOOGLE.headers.strip_metadata_prefix("X-Goog-Meta-Color"), Some("Color"));
    /// assert_eq!(GOOGLE.headers.strip_metadata_prefix("x-amz-meta-color"), None);
    /// ```
    #[must_use]
    pub fn strip_metadata_prefix<'a>(&self, header: &'a str) -> Option<&'a str> {
        let prefix = self.metadata_prefix?;
        let head = header.get(..prefix.len())?;
        if head.eq_ignore_ascii_case(prefix) {
            header.get(prefix.len()..)
        } else {
            None
        }
    }
}
