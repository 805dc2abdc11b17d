//! driftcheck - cross-artifact program-ID consistency checking
//!
//! The deployment platform forces every program address to be duplicated
//! across independently edited files: the canonical `Anchor.toml`, the SDK
//! constants, the KYC issuer service, and each program's own `declare_id!()`.
//! This crate detects drift between those copies:
//! - Loads the canonical `[programs.devnet]` table (single source of truth)
//! - Extracts candidate IDs from each artifact via narrow lexical rules
//! - Classifies every comparison (match / mismatch / not found / missing file)
//! - Streams a human-readable report and computes the pass/fail verdict

pub mod canonical;
pub mod check;
pub mod error;
pub mod extract;
pub mod layout;
pub mod report;
pub mod runner;

// Re-export key types
pub use canonical::{load_canonical, CanonicalMap};
pub use check::{check_artifact, Artifact, Binding, CheckOutcome, CheckStatus};
pub use error::{DriftError, Result};
pub use extract::{ExtractionResult, SearchRule};
pub use report::{Reporter, VerdictReport};
pub use runner::run_check;
