use log::debug;
use serde::Serialize;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Default bound on the number of files counted in one scan.
pub const DEFAULT_MAX_FILES: usize = 4000;

/// Directories that never hold hand-written sources.
pub const EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    ".next",
    ".nuxt",
    "dist",
    "build",
    "coverage",
    "out",
    ".turbo",
];

/// Per-suffix file counts for a project tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourceStats {
    pub ts: usize,
    pub tsx: usize,
    pub js: usize,
    pub jsx: usize,
    pub vue: usize,
    pub svelte: usize,
    pub scss: usize,
    pub less: usize,
    pub css: usize,
    pub module_css: usize,
    pub module_scss: usize,
    pub module_less: usize,
}

impl SourceStats {
    /// Count one file by name. A `.module.scss` file counts both as `scss`
    /// and as `module_scss`.
    pub fn record(&mut self, file_name: &str) {
        let lower = file_name.to_ascii_lowercase();

        let extension = Path::new(&lower)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");
        match extension {
            "ts" => self.ts += 1,
            "tsx" => self.tsx += 1,
            "js" => self.js += 1,
            "jsx" => self.jsx += 1,
            "vue" => self.vue += 1,
            "svelte" => self.svelte += 1,
            "scss" => self.scss += 1,
            "less" => self.less += 1,
            "css" => self.css += 1,
            _ => {}
        }

        if lower.ends_with(".module.css") {
            self.module_css += 1;
        } else if lower.ends_with(".module.scss") {
            self.module_scss += 1;
        } else if lower.ends_with(".module.less") {
            self.module_less += 1;
        }
    }

    pub fn ts_total(&self) -> usize {
        self.ts + self.tsx
    }

    pub fn js_total(&self) -> usize {
        self.js + self.jsx
    }

    pub fn module_total(&self) -> usize {
        self.module_css + self.module_scss + self.module_less
    }
}

fn is_excluded(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map(|name| EXCLUDED_DIRS.contains(&name))
            .unwrap_or(false)
}

/// Walk `root` and count source files, stopping after `max_files` files.
///
/// Entries are visited in file-name order so that a truncated scan always
/// covers the same files. Unreadable entries are skipped.
pub fn scan_sources(root: &Path, max_files: usize) -> SourceStats {
    let mut stats = SourceStats::default();
    let mut scanned = 0usize;

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_excluded(entry));

    for entry in walker.filter_map(|entry| entry.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        if scanned >= max_files {
            debug!("source scan stopped at {} files under {}", max_files, root.display());
            break;
        }
        scanned += 1;

        if let Some(name) = entry.file_name().to_str() {
            stats.record(name);
        }
    }

    debug!("scanned {} files under {}", scanned, root.display());
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_by_suffix() {
        let mut stats = SourceStats::default();
        for name in ["App.tsx", "index.TS", "main.js", "Card.module.scss", "theme.less", "README.md"] {
            stats.record(name);
        }

        assert_eq!(stats.tsx, 1);
        assert_eq!(stats.ts, 1);
        assert_eq!(stats.js, 1);
        assert_eq!(stats.scss, 1);
        assert_eq!(stats.module_scss, 1);
        assert_eq!(stats.less, 1);
        assert_eq!(stats.ts_total(), 2);
        assert_eq!(stats.module_total(), 1);
    }
}
