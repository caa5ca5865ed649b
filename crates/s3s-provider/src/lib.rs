//! Storage Provider Profiles
//!
//! `s3s-provider` tells an S3-compatible client how a storage provider spells its
//! protocol: which header names it expects, which scheme tag goes in the
//! `Authorization` header, which ACL model and canned ACLs it accepts, and where
//! its credentials come from.
//!
//! # Providers
//!
//! | id       | header prefix | auth    | ACL model   | host option |
//! |----------|---------------|---------|-------------|-------------|
//! | `aws`    | `x-amz-`      | `AWS`   | policy      | `s3_host`   |
//! | `google` | `x-goog-`     | `GOOG1` | ACL list    | `gs_host`   |
//!
//! # Credentials
//!
//! The access key and the secret key are resolved independently from the
//! explicit argument, then the upper-cased environment variable, then the
//! `Credentials` section of the boto config file. See [`credentials`].
//!
//! # Example
//!
//! ```
//! use s3s_provider::Provider;
//! use s3s_provider::header::HeaderRole;
//!
//! let provider = Provider::resolve("google", Some("GOOGTS7C7FUP3AIRVJTE"), Some("secret")).unwrap();
//! assert_eq!(provider.header(HeaderRole::Acl), Some("x-goog-acl"));
//! assert_eq!(provider.header(HeaderRole::StorageClass), None);
//! assert_eq!(provider.access_key(), Some("GOOGTS7C7FUP3AIRVJTE"));
//!
//! assert!(Provider::resolve("azure", None, None).is_err());
//! ```

#![allow(
    clippy::bool_assert_comparison, // I don't like `assert!(!expression)`. It's very misleading.
    clippy::module_name_repetitions,
)]

mod error;

pub mod acl;
pub mod config;
pub mod credentials;
pub mod env;
pub mod header;
pub mod profile;
pub mod provider;

pub use self::error::*;
pub use self::provider::{Provider, default_provider};
