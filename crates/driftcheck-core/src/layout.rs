//! Fixed artifact manifest for the workspace layout.
//!
//! The set of files carrying duplicated program IDs is known at build time;
//! nothing here is discovered dynamically. The rename table is an explicit
//! static mapping between canonical snake_case names and the camelCase keys
//! the SDK constants file uses.

use crate::check::{Artifact, Binding};
use crate::extract::SearchRule;

/// Canonical config, relative to the project root.
pub const CONFIG_PATH: &str = "Anchor.toml";

/// Cluster whose program table is the source of truth.
pub const CLUSTER: &str = "devnet";

/// canonical logical name ↔ SDK constants key.
const SDK_RENAMES: &[(&str, &str)] = &[
    ("human_registry", "humanRegistry"),
    ("agent_registry", "agentRegistry"),
    ("delegation", "delegation"),
    ("receipts", "receipts"),
];

/// Named constant the KYC issuer service pins the registry program to.
const ISSUER_CONSTANT: &str = "HUMAN_REGISTRY_PROGRAM_ID";

/// Programs whose on-chain sources declare their own ID. Sorted; a partial
/// checkout may omit any of these.
const PROGRAMS: &[&str] = &["agent_registry", "delegation", "human_registry", "receipts"];

/// Build the full artifact set, in the order it is checked and reported.
pub fn manifest() -> Vec<Artifact> {
    let mut artifacts = Vec::with_capacity(2 + PROGRAMS.len());

    artifacts.push(Artifact::new(
        "SDK constants.ts",
        "packages/sdk/src/constants.ts",
        SDK_RENAMES
            .iter()
            .map(|(logical_name, key)| {
                Binding::new(logical_name, SearchRule::typed_constant(key))
            })
            .collect(),
    ));

    artifacts.push(Artifact::new(
        "KYC issuer.ts",
        "services/kyc-issuer/src/issuer.ts",
        vec![Binding::new(
            "human_registry",
            SearchRule::named_constant(ISSUER_CONSTANT),
        )],
    ));

    for program in PROGRAMS {
        artifacts.push(Artifact::new(
            &format!("program {program}"),
            format!("programs/{program}/src/lib.rs"),
            vec![Binding::new(program, SearchRule::declare_id())],
        ));
    }

    artifacts
}
