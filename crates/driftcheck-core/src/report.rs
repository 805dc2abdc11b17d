//! Streaming console reporter and verdict aggregation.
//!
//! One line per outcome, written as the outcome is produced rather than
//! buffered to the end, with a fixed marker per status (✅ match, ❌ counted
//! failure, ⚠️ warning) for quick scanning. The reporter is the only stateful
//! accumulator in the run and its outcome list is append-only.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::canonical::CanonicalMap;
use crate::check::{CheckOutcome, CheckStatus};
use crate::error::Result;

/// Final run verdict, derived deterministically from the outcome sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictReport {
    pub outcomes: Vec<CheckOutcome>,
    /// Count of Mismatch and NotFound outcomes.
    pub failure_count: usize,
    /// 0 when `failure_count == 0`, 1 otherwise.
    pub exit_code: u8,
}

impl VerdictReport {
    pub fn passed(&self) -> bool {
        self.failure_count == 0
    }
}

/// Writes the line-oriented report and accumulates outcomes.
///
/// Generic over the output sink so tests can capture the rendered report in
/// a buffer and assert on it byte for byte.
pub struct Reporter<W: Write> {
    out: W,
    outcomes: Vec<CheckOutcome>,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            outcomes: Vec::new(),
        }
    }

    /// Print the canonical audit listing, sorted by logical name regardless
    /// of how the config file orders its keys.
    pub fn canonical_listing(&mut self, cluster: &str, canonical: &CanonicalMap) -> Result<()> {
        writeln!(self.out, "=== Anchor.toml {cluster} IDs ===")?;
        for (name, id) in canonical.iter() {
            writeln!(self.out, "  {name:<25} = {id}")?;
        }
        Ok(())
    }

    /// Print the header for one artifact's outcome block.
    pub fn section(&mut self, label: &str) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "=== {label} check ===")?;
        Ok(())
    }

    /// Render one outcome line and append it to the run's outcome list.
    pub fn record(&mut self, outcome: CheckOutcome) -> Result<()> {
        match &outcome.status {
            CheckStatus::Match => {
                writeln!(self.out, "  ✅ {}: {}", outcome.logical_name, outcome.expected)?;
            }
            CheckStatus::Mismatch { found } => {
                writeln!(
                    self.out,
                    "  ❌ {}: {} != {}",
                    outcome.logical_name, found, outcome.expected
                )?;
            }
            CheckStatus::NotFound => {
                writeln!(self.out, "  ❌ {}: NOT FOUND", outcome.logical_name)?;
            }
            CheckStatus::ArtifactMissing => {
                writeln!(
                    self.out,
                    "  ⚠️  {}: artifact not found (skipped)",
                    outcome.logical_name
                )?;
            }
        }
        self.outcomes.push(outcome);
        Ok(())
    }

    /// Print the final summary and produce the verdict.
    ///
    /// On failure the digest names every counted failure with enough detail
    /// (artifact, logical name, expected, found) to fix the drift without
    /// re-running the tool.
    pub fn finish(mut self) -> Result<VerdictReport> {
        let failures: Vec<&CheckOutcome> = self
            .outcomes
            .iter()
            .filter(|outcome| outcome.status.is_failure())
            .collect();

        if failures.is_empty() {
            writeln!(self.out)?;
            writeln!(self.out, "✅ All program IDs consistent")?;
        } else {
            writeln!(self.out)?;
            writeln!(self.out, "❌ FAILED — {} inconsistencies:", failures.len())?;
            for outcome in &failures {
                match &outcome.status {
                    CheckStatus::Mismatch { found } => writeln!(
                        self.out,
                        "  • {} {}: {} != {}",
                        outcome.artifact, outcome.logical_name, found, outcome.expected
                    )?,
                    CheckStatus::NotFound => writeln!(
                        self.out,
                        "  • {} {}: not found (expected {})",
                        outcome.artifact, outcome.logical_name, outcome.expected
                    )?,
                    CheckStatus::Match | CheckStatus::ArtifactMissing => unreachable!(),
                }
            }
        }

        let failure_count = failures.len();
        let exit_code = u8::from(failure_count > 0);
        Ok(VerdictReport {
            outcomes: self.outcomes,
            failure_count,
            exit_code,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(logical_name: &str, status: CheckStatus) -> CheckOutcome {
        CheckOutcome {
            artifact: "SDK constants.ts".to_string(),
            logical_name: logical_name.to_string(),
            expected: "Expected111".to_string(),
            status,
        }
    }

    #[test]
    fn test_all_match_verdict() {
        let mut buf = Vec::new();
        let mut reporter = Reporter::new(&mut buf);
        reporter
            .record(outcome("human_registry", CheckStatus::Match))
            .expect("record");
        let report = reporter.finish().expect("finish");

        assert!(report.passed());
        assert_eq!(report.exit_code, 0);
        assert_eq!(report.failure_count, 0);

        let text = String::from_utf8(buf).expect("utf8");
        assert!(text.contains("✅ human_registry: Expected111"));
        assert!(text.contains("All program IDs consistent"));
    }

    #[test]
    fn test_failure_digest_lists_every_counted_failure() {
        let mut buf = Vec::new();
        let mut reporter = Reporter::new(&mut buf);
        reporter
            .record(outcome(
                "agent_registry",
                CheckStatus::Mismatch {
                    found: "Wrong222".to_string(),
                },
            ))
            .expect("record");
        reporter
            .record(outcome("delegation", CheckStatus::NotFound))
            .expect("record");
        let report = reporter.finish().expect("finish");

        assert_eq!(report.failure_count, 2);
        assert_eq!(report.exit_code, 1);

        let text = String::from_utf8(buf).expect("utf8");
        assert!(text.contains("FAILED — 2 inconsistencies"));
        assert!(text.contains("• SDK constants.ts agent_registry: Wrong222 != Expected111"));
        assert!(text.contains("• SDK constants.ts delegation: not found (expected Expected111)"));
    }

    #[test]
    fn test_missing_artifact_is_warning_only() {
        let mut buf = Vec::new();
        let mut reporter = Reporter::new(&mut buf);
        reporter
            .record(outcome("receipts", CheckStatus::ArtifactMissing))
            .expect("record");
        let report = reporter.finish().expect("finish");

        assert_eq!(report.failure_count, 0);
        assert_eq!(report.exit_code, 0);

        let text = String::from_utf8(buf).expect("utf8");
        assert!(text.contains("⚠️  receipts: artifact not found (skipped)"));
        assert!(text.contains("All program IDs consistent"));
    }

    #[test]
    fn test_canonical_listing_sorted() {
        let canonical: CanonicalMap = [
            ("receipts".to_string(), "R111".to_string()),
            ("agent_registry".to_string(), "A111".to_string()),
        ]
        .into_iter()
        .collect();

        let mut buf = Vec::new();
        let mut reporter = Reporter::new(&mut buf);
        reporter
            .canonical_listing("devnet", &canonical)
            .expect("listing");

        let text = String::from_utf8(buf).expect("utf8");
        let agent_pos = text.find("agent_registry").expect("agent line");
        let receipts_pos = text.find("receipts").expect("receipts line");
        assert!(agent_pos < receipts_pos);
        assert!(text.starts_with("=== Anchor.toml devnet IDs ==="));
    }
}
