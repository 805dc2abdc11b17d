//! End-to-end check run: Loader → Checker → Reporter.

use std::io::Write;
use std::path::Path;

use tracing::{debug, info};

use crate::canonical::load_canonical;
use crate::check::check_artifact;
use crate::error::Result;
use crate::layout::{manifest, CLUSTER, CONFIG_PATH};
use crate::report::{Reporter, VerdictReport};

/// Run the full consistency check against a project checkout.
///
/// `root` is the project root the fixed artifact paths are resolved against;
/// the rendered report streams to `out` as outcomes are produced. Returns
/// the final verdict, or an error only for fatal load-time conditions (see
/// [`crate::DriftError`]) — drifted, missing, or unmatchable IDs are
/// outcomes inside the verdict, never errors.
pub fn run_check<W: Write>(root: &Path, out: W) -> Result<VerdictReport> {
    let canonical = load_canonical(&root.join(CONFIG_PATH), CLUSTER)?;

    let mut reporter = Reporter::new(out);
    reporter.canonical_listing(CLUSTER, &canonical)?;

    for artifact in manifest() {
        reporter.section(&artifact.label)?;
        for outcome in check_artifact(root, &artifact, &canonical)? {
            debug!(
                artifact = %outcome.artifact,
                logical_name = %outcome.logical_name,
                "outcome produced"
            );
            reporter.record(outcome)?;
        }
    }

    let report = reporter.finish()?;
    info!(
        failures = report.failure_count,
        exit_code = report.exit_code,
        "consistency check complete"
    );
    Ok(report)
}
