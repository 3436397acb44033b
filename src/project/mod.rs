pub mod manifest;
pub mod stats;

pub use manifest::{dependency_names, load_dependencies};
pub use stats::{scan_sources, SourceStats, DEFAULT_MAX_FILES, EXCLUDED_DIRS};

use log::debug;
use std::collections::BTreeSet;
use std::path::Path;

/// Project-relative paths whose existence the detection rules consult.
pub const PROBED_PATHS: &[&str] = &[
    // framework
    "next.config.js",
    "next.config.mjs",
    "nuxt.config.ts",
    "nuxt.config.js",
    "src/app",
    "app",
    "pages",
    "src/pages",
    "config/index.ts",
    "config/index.js",
    // language
    "tsconfig.json",
    // style
    "tailwind.config.js",
    "tailwind.config.ts",
    // package manager
    "pnpm-lock.yaml",
    "yarn.lock",
    "package-lock.json",
    "bun.lockb",
    "bun.lock",
];

/// Everything the classifiers look at, gathered once per run.
///
/// Detection rules only see this value, never the filesystem, so rule sets
/// can be exercised with hand-built signals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectSignals {
    dependencies: BTreeSet<String>,
    present: BTreeSet<String>,
    stats: SourceStats,
}

impl ProjectSignals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `package.json`, probe [`PROBED_PATHS`] and scan sources under `root`.
    pub fn collect(root: &Path, max_files: usize) -> Self {
        let dependencies = load_dependencies(root);
        let present: BTreeSet<String> = PROBED_PATHS
            .iter()
            .filter(|rel| root.join(rel).exists())
            .map(|rel| rel.to_string())
            .collect();
        debug!(
            "{} dependencies, present paths: {:?}",
            dependencies.len(),
            present
        );

        Self {
            dependencies,
            present,
            stats: scan_sources(root, max_files),
        }
    }

    pub fn with_dependency(mut self, name: impl Into<String>) -> Self {
        self.dependencies.insert(name.into());
        self
    }

    pub fn with_path(mut self, rel: impl Into<String>) -> Self {
        self.present.insert(rel.into());
        self
    }

    pub fn with_stats(mut self, stats: SourceStats) -> Self {
        self.stats = stats;
        self
    }

    pub fn has_dependency(&self, name: &str) -> bool {
        self.dependencies.contains(name)
    }

    pub fn has_any_dependency(&self, names: &[&str]) -> bool {
        names.iter().any(|name| self.has_dependency(name))
    }

    pub fn has_dependency_prefix(&self, prefix: &str) -> bool {
        self.dependencies.iter().any(|name| name.starts_with(prefix))
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.present.contains(rel)
    }

    pub fn any_exists(&self, rels: &[&str]) -> bool {
        rels.iter().any(|rel| self.exists(rel))
    }

    pub fn dependencies(&self) -> &BTreeSet<String> {
        &self.dependencies
    }

    pub fn stats(&self) -> &SourceStats {
        &self.stats
    }
}
