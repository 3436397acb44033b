use log::{debug, warn};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// `package.json` blocks whose keys count as dependencies.
const DEPENDENCY_BLOCKS: &[&str] = &["dependencies", "devDependencies", "peerDependencies"];

/// Dependency names declared in `<root>/package.json`.
///
/// A missing, unreadable or malformed manifest yields an empty set.
pub fn load_dependencies(root: &Path) -> BTreeSet<String> {
    let manifest = root.join("package.json");
    if !manifest.exists() {
        debug!("no package.json under {}", root.display());
        return BTreeSet::new();
    }

    let content = match fs::read_to_string(&manifest) {
        Ok(content) => content,
        Err(e) => {
            warn!("failed to read {}: {}", manifest.display(), e);
            return BTreeSet::new();
        }
    };

    match serde_json::from_str::<Value>(&content) {
        Ok(value) => dependency_names(&value),
        Err(e) => {
            warn!("ignoring malformed {}: {}", manifest.display(), e);
            BTreeSet::new()
        }
    }
}

/// Union of the dependency blocks of a parsed manifest. Blocks that are not
/// objects are ignored.
pub fn dependency_names(manifest: &Value) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    for block in DEPENDENCY_BLOCKS {
        if let Some(entries) = manifest.get(block).and_then(Value::as_object) {
            names.extend(entries.keys().cloned());
        }
    }
    names
}
