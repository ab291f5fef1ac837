//! Raw build payload types.
//!
//! The CI system hands the plugin a single JSON document describing the build
//! workspace and the user-supplied plugin arguments (`vargs`). Every optional
//! varg is an `Option` so the resolver can tell "absent" apart from "present
//! but false" when applying defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct Payload {
    pub workspace: Workspace,
    #[serde(default)]
    pub vargs: Vargs,
}

#[derive(Debug, Deserialize)]
pub struct Workspace {
    pub path: PathBuf,
    /// Network credentials the CI system cloned the repo with, when present.
    pub netrc: Option<NetrcEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NetrcEntry {
    pub machine: String,
    pub login: String,
    pub password: String,
}

/// User-supplied plugin arguments, all optional at this layer.
#[derive(Debug, Default, Deserialize)]
pub struct Vargs {
    pub user: Option<String>,
    pub private_key: Option<String>,
    pub server: Option<String>,
    pub org: Option<String>,
    /// Upload target: "server" (default) or "supermarket".
    #[serde(rename = "type")]
    pub target: Option<String>,
    pub ssl_verify: Option<bool>,
    pub freeze: Option<bool>,
    pub recursive: Option<bool>,
    pub debug: Option<bool>,
    /// Dependency manifests to install/upload, in order.
    pub berks_files: Option<Vec<String>>,
}

pub fn parse(raw: &str) -> Result<Payload> {
    serde_json::from_str(raw).context("parse build payload JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_payload_without_vargs() {
        let payload = parse(r#"{"workspace":{"path":"/build"}}"#).expect("parse");
        assert_eq!(payload.workspace.path, PathBuf::from("/build"));
        assert!(payload.workspace.netrc.is_none());
        assert!(payload.vargs.user.is_none());
    }

    #[test]
    fn distinguishes_absent_from_explicit_false() {
        let payload = parse(
            r#"{"workspace":{"path":"/build"},"vargs":{"ssl_verify":false}}"#,
        )
        .expect("parse");
        assert_eq!(payload.vargs.ssl_verify, Some(false));
        assert_eq!(payload.vargs.freeze, None);
    }

    #[test]
    fn parses_netrc_triple() {
        let payload = parse(
            r#"{"workspace":{"path":"/build","netrc":{"machine":"m","login":"l","password":"p"}}}"#,
        )
        .expect("parse");
        let netrc = payload.workspace.netrc.expect("netrc");
        assert_eq!(netrc.machine, "m");
        assert_eq!(netrc.login, "l");
        assert_eq!(netrc.password, "p");
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(parse("{not json").is_err());
    }
}
