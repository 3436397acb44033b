use crate::classify::{FirstMatch, PackageManager, Resolution};
use crate::project::ProjectSignals;

/// Lockfiles in priority order.
pub fn package_manager_resolver() -> FirstMatch<PackageManager, ProjectSignals> {
    FirstMatch::<_, ProjectSignals>::new(PackageManager::Npm, |_| "fallback: no lockfile".to_string())
        .arm(PackageManager::Pnpm, |s| {
            s.exists("pnpm-lock.yaml")
                .then(|| "file: pnpm-lock.yaml".to_string())
        })
        .arm(PackageManager::Yarn, |s| {
            s.exists("yarn.lock").then(|| "file: yarn.lock".to_string())
        })
        .arm(PackageManager::Npm, |s| {
            s.exists("package-lock.json")
                .then(|| "file: package-lock.json".to_string())
        })
        .arm(PackageManager::Bun, |s| {
            s.any_exists(&["bun.lockb", "bun.lock"])
                .then(|| "file: bun lock".to_string())
        })
}

pub fn detect_package_manager(signals: &ProjectSignals) -> Resolution<PackageManager> {
    package_manager_resolver().resolve(signals, None)
}
