//! ACL representations and canned ACL strings

use serde::{Deserialize, Serialize};

/// Which ACL document model a provider uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AclKind {
    /// `AccessControlPolicy` with an owner and a grant list (S3)
    PolicyBased,
    /// Bare `AccessControlList` of entries (Google Cloud Storage)
    AclListBased,
}

/// Canned ACLs accepted by S3 in `x-amz-acl`.
pub const S3_CANNED_ACLS: &[&str] = &[
    "private",
    "public-read",
    "public-read-write",
    "authenticated-read",
    "bucket-owner-read",
    "bucket-owner-full-control",
    "log-delivery-write",
];

/// Canned ACLs accepted by Google Cloud Storage in `x-goog-acl`.
pub const GS_CANNED_ACLS: &[&str] = &[
    "private",
    "public-read",
    "project-private",
    "public-read-write",
    "authenticated-read",
    "bucket-owner-read",
    "bucket-owner-full-control",
];
