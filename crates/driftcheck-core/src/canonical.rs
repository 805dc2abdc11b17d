//! Canonical program-ID loader.
//!
//! `Anchor.toml` is the single source of truth. Its `[programs.<cluster>]`
//! table maps each logical program name to the address every other artifact
//! must agree with. Everything downstream treats this mapping as ground truth
//! and never mutates or re-reads it mid-run.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{DriftError, Result};

/// Ordered mapping from logical program name to canonical identifier.
///
/// Backed by a `BTreeMap` so iteration is lexicographic regardless of how the
/// config file orders its keys, which keeps report output reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalMap {
    entries: BTreeMap<String, String>,
}

impl CanonicalMap {
    /// Look up the canonical identifier for a logical name.
    pub fn get(&self, logical_name: &str) -> Option<&str> {
        self.entries.get(logical_name).map(String::as_str)
    }

    /// Iterate entries in lexicographic key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, id)| (name.as_str(), id.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for CanonicalMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Load the canonical mapping from the `[programs.<cluster>]` table of an
/// Anchor-style TOML config.
///
/// A missing file, malformed TOML, a missing table, or a non-string entry is
/// fatal: there is no fallback source of truth.
pub fn load_canonical(path: &Path, cluster: &str) -> Result<CanonicalMap> {
    let text = fs::read_to_string(path).map_err(|source| DriftError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    let doc: toml::Value = toml::from_str(&text).map_err(|source| DriftError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;

    let table = doc
        .get("programs")
        .and_then(|programs| programs.get(cluster))
        .and_then(toml::Value::as_table)
        .ok_or_else(|| DriftError::MissingTable {
            table: format!("programs.{cluster}"),
        })?;

    let mut entries = BTreeMap::new();
    for (name, value) in table {
        let id = value
            .as_str()
            .ok_or_else(|| DriftError::NonStringEntry { name: name.clone() })?;
        entries.insert(name.clone(), id.to_string());
    }

    debug!(
        count = entries.len(),
        cluster, "loaded canonical program IDs"
    );
    Ok(CanonicalMap { entries })
}
