//! Error taxonomy for the plugin.
//!
//! Two kinds exist: configuration errors raised while resolving the payload,
//! and action failures raised when an external tool invocation reports a bad
//! exit. Filesystem errors while writing config files propagate unmodified
//! through `anyhow` and are not classified here.

use thiserror::Error;

/// A required payload field is absent or malformed.
///
/// Only the first failing field is reported; the check order is fixed
/// (user, private key, server, org) so error messages are stable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Required varg is missing or empty.
    #[error("Missing '{0}'")]
    MissingField(&'static str),

    /// Credential does not look like PEM key material.
    #[error("failed to load private key starting with: {0}")]
    InvalidKey(String),

    /// The `type` varg named an upload target we do not know.
    #[error("unknown upload target '{0}'")]
    UnknownTarget(String),
}

/// An external tool invocation signaled failure.
///
/// Each planned action kind carries its own message so build logs identify
/// which stage of the upload died. The run aborts on the first of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("failed to retrieve cookbooks for {manifest}")]
    DependencyInstall { manifest: String },

    #[error("failed to upload cookbooks for {manifest}")]
    CookbookUpload { manifest: String },

    #[error("failed to upload roles, environments and data bags")]
    DataUpload,

    #[error("failed to share cookbook {name}")]
    Share { name: String },
}
