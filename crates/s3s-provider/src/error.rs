use std::fmt;
use std::io;
use std::path::PathBuf;

/// The provider id does not match any row of the provider table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown storage provider: {name:?}")]
pub struct UnknownProviderError {
    name: String,
}

impl UnknownProviderError {
    pub(crate) fn new(name: &str) -> Self {
        Self { name: name.to_owned() }
    }

    /// The provider id that failed to resolve.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// What went wrong on a config line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseConfigErrorKind {
    /// An option or continuation line appeared before any `[section]` header.
    MissingSectionHeader,
    /// The line is neither a section header nor a `key = value` option.
    InvalidLine,
}

impl fmt::Display for ParseConfigErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSectionHeader => f.write_str("missing section header"),
            Self::InvalidLine => f.write_str("invalid line"),
        }
    }
}

/// [`BotoConfig::parse`](crate::config::BotoConfig::parse)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {kind}")]
pub struct ParseConfigError {
    line: usize,
    kind: ParseConfigErrorKind,
}

impl ParseConfigError {
    pub(crate) fn new(line: usize, kind: ParseConfigErrorKind) -> Self {
        Self { line, kind }
    }

    /// 1-based line number
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    #[must_use]
    pub fn kind(&self) -> ParseConfigErrorKind {
        self.kind
    }
}

/// Errors from loading config files explicitly.
///
/// Provider resolution never returns this: an unusable config file is logged
/// and treated as empty there.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseConfigError,
    },
}
