//! Workspace classification and cookbook metadata parsing.
//!
//! The classifier answers the three questions the upload plan hinges on:
//! which dependency manifests are usable, whether the workspace is a single
//! packaged cookbook, and whether org data directories exist. Predicates are
//! recomputed from the file tree on demand and never raise; an unreadable or
//! missing workspace simply classifies as having nothing.

use anyhow::{anyhow, Context, Result};
use regex::Regex;
use std::fs;
use std::path::Path;

/// File at the workspace root declaring a single named cookbook.
pub const PACKAGE_METADATA_FILE: &str = "metadata.rb";

/// Directory names that count as organizational data.
pub const ORG_DATA_DIRS: [&str; 3] = ["roles", "environments", "data_bags"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceSnapshot {
    /// Manifests from the configured list whose descriptor or lock exists.
    pub locked_manifests: Vec<String>,
    pub has_package_metadata: bool,
    pub has_organizational_data: bool,
}

pub fn classify(workspace: &Path, berks_files: &[String]) -> WorkspaceSnapshot {
    WorkspaceSnapshot {
        locked_manifests: berks_files
            .iter()
            .filter(|manifest| manifest_present(workspace, manifest))
            .cloned()
            .collect(),
        has_package_metadata: workspace.join(PACKAGE_METADATA_FILE).is_file(),
        has_organizational_data: ORG_DATA_DIRS
            .iter()
            .any(|dir| workspace.join(dir).is_dir()),
    }
}

/// A manifest counts as present when either it or its lock companion exists.
fn manifest_present(workspace: &Path, manifest: &str) -> bool {
    workspace.join(manifest).exists() || workspace.join(format!("{manifest}.lock")).exists()
}

/// Name and version declared by the workspace's `metadata.rb`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookbookMetadata {
    pub name: String,
    pub version: Option<String>,
}

/// Parse the cookbook name (and version, when declared) out of `metadata.rb`.
pub fn read_cookbook_metadata(workspace: &Path) -> Result<CookbookMetadata> {
    let path = workspace.join(PACKAGE_METADATA_FILE);
    let content =
        fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;

    let name = metadata_field(&content, "name")
        .ok_or_else(|| anyhow!("{} does not declare a cookbook name", path.display()))?;
    let version = metadata_field(&content, "version");

    Ok(CookbookMetadata { name, version })
}

fn metadata_field(content: &str, field: &str) -> Option<String> {
    let pattern = Regex::new(&format!(r#"(?m)^\s*{field}\s+['"]([^'"]+)['"]"#))
        .expect("regex for metadata field");
    pattern
        .captures(content)
        .map(|cap| cap[1].to_string())
}
