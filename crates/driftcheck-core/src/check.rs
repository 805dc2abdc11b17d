//! Per-artifact consistency checking.
//!
//! An [`Artifact`] names one file expected to carry duplicated program IDs
//! and the bindings to look for in it. Checking an artifact reads the file
//! once, runs every binding's search rule against the text, and classifies
//! each result against the canonical value. Nothing here short-circuits: a
//! drifted or missing ID becomes an outcome and the scan moves on, so one
//! run surfaces every discrepancy.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::canonical::CanonicalMap;
use crate::error::{DriftError, Result};
use crate::extract::{ExtractionResult, SearchRule};

/// Classified result of comparing one embedded ID against canonical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// Embedded value equals the canonical identifier.
    Match,
    /// Embedded value was found but differs from canonical.
    Mismatch { found: String },
    /// The search rule matched nothing in the artifact text.
    NotFound,
    /// The artifact file itself is absent (tolerated in partial checkouts).
    ArtifactMissing,
}

impl CheckStatus {
    /// Whether this outcome counts toward the failure verdict.
    /// ArtifactMissing is a warning, not a failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Mismatch { .. } | Self::NotFound)
    }
}

/// One comparison outcome, append-only once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// Human-readable artifact label (e.g. "SDK constants.ts").
    pub artifact: String,
    /// Canonical logical name the comparison is keyed on.
    pub logical_name: String,
    /// Canonical identifier at check time.
    pub expected: String,
    pub status: CheckStatus,
}

/// Binds one canonical logical name to the rule that locates its duplicate
/// inside an artifact.
#[derive(Debug, Clone)]
pub struct Binding {
    pub logical_name: String,
    pub rule: SearchRule,
}

impl Binding {
    pub fn new(logical_name: &str, rule: SearchRule) -> Self {
        Self {
            logical_name: logical_name.to_string(),
            rule,
        }
    }
}

/// A file expected to embed one or more canonical program IDs.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub label: String,
    /// Path relative to the project root.
    pub path: PathBuf,
    pub bindings: Vec<Binding>,
}

impl Artifact {
    pub fn new(label: &str, path: impl Into<PathBuf>, bindings: Vec<Binding>) -> Self {
        Self {
            label: label.to_string(),
            path: path.into(),
            bindings,
        }
    }
}

/// Check every binding of one artifact against the canonical map.
///
/// An absent file yields one `ArtifactMissing` outcome per binding; any other
/// read failure is fatal. A binding whose logical name has no canonical entry
/// is a fatal configuration error: there is no expected value to compare
/// against.
pub fn check_artifact(
    root: &Path,
    artifact: &Artifact,
    canonical: &CanonicalMap,
) -> Result<Vec<CheckOutcome>> {
    let full_path = root.join(&artifact.path);
    debug!(artifact = %artifact.label, path = %full_path.display(), "checking artifact");

    let text = match fs::read_to_string(&full_path) {
        Ok(text) => Some(text),
        Err(err) if err.kind() == ErrorKind::NotFound => None,
        Err(source) => {
            return Err(DriftError::ArtifactRead {
                path: full_path,
                source,
            })
        }
    };

    let mut outcomes = Vec::with_capacity(artifact.bindings.len());
    for binding in &artifact.bindings {
        let expected = canonical
            .get(&binding.logical_name)
            .ok_or_else(|| DriftError::UnknownLogicalName(binding.logical_name.clone()))?;

        let status = match &text {
            None => CheckStatus::ArtifactMissing,
            Some(text) => match binding.rule.extract(text) {
                ExtractionResult::NotFound => CheckStatus::NotFound,
                ExtractionResult::Found(found) if found == expected => CheckStatus::Match,
                ExtractionResult::Found(found) => CheckStatus::Mismatch { found },
            },
        };

        outcomes.push(CheckOutcome {
            artifact: artifact.label.clone(),
            logical_name: binding.logical_name.clone(),
            expected: expected.to_string(),
            status,
        });
    }

    Ok(outcomes)
}
