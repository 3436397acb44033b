//! Deterministic output-path suggestion for a restored design.
//!
//! A pure lookup over the classified framework and language plus the
//! requested scope. The overwrite policy is advisory: it only feeds
//! `needs_confirmation`, nothing is ever written.

pub mod naming;

pub use naming::{to_kebab_case, to_pascal_case};

use crate::classify::{Framework, Language, Selection};
use crate::detect::{detect_framework, detect_language};
use crate::error::ScanError;
use crate::project::{ProjectSignals, DEFAULT_MAX_FILES};
use clap::ValueEnum;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Page,
    #[default]
    Component,
    /// Treated as a component when choosing a path.
    Section,
}

impl Scope {
    pub fn normalized(self) -> Scope {
        match self {
            Scope::Section => Scope::Component,
            other => other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Scope::Page => "page",
            Scope::Component => "component",
            Scope::Section => "section",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OverwritePolicy {
    #[default]
    Ask,
    Replace,
    Patch,
    New,
}

impl OverwritePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            OverwritePolicy::Ask => "ask",
            OverwritePolicy::Replace => "replace",
            OverwritePolicy::Patch => "patch",
            OverwritePolicy::New => "new",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetOptions {
    pub framework: Selection<Framework>,
    pub language: Selection<Language>,
    pub scope: Scope,
    pub target: Option<PathBuf>,
    pub name: String,
    pub overwrite: OverwritePolicy,
    pub max_files: usize,
}

impl Default for TargetOptions {
    fn default() -> Self {
        Self {
            framework: Selection::Auto,
            language: Selection::Auto,
            scope: Scope::Component,
            target: None,
            name: naming::DEFAULT_COMPONENT_NAME.to_string(),
            overwrite: OverwritePolicy::Ask,
            max_files: DEFAULT_MAX_FILES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetReport {
    pub framework: Framework,
    pub language: Language,
    pub scope: Scope,
    pub recommended_path: String,
    pub recommended_path_abs: String,
    pub path_exists: bool,
    pub overwrite: OverwritePolicy,
    pub needs_confirmation: bool,
    pub confirmation_reasons: Vec<String>,
    pub reasoning: Vec<String>,
}

pub fn choose_extension(framework: Framework, language: Language) -> &'static str {
    match framework {
        Framework::Vue | Framework::Nuxt => "vue",
        Framework::Svelte => "svelte",
        Framework::Vanilla => "html",
        Framework::Next | Framework::React | Framework::Taro => match language {
            Language::TypeScript => "tsx",
            Language::JavaScript => "jsx",
        },
    }
}

/// The decision table. `exists` answers for project-relative paths.
pub fn default_path(
    exists: impl Fn(&str) -> bool,
    framework: Framework,
    scope: Scope,
    name: &str,
    extension: &str,
) -> PathBuf {
    let component = to_pascal_case(name);
    let route = to_kebab_case(name);
    let page = scope.normalized() == Scope::Page;

    let path = match framework {
        Framework::Next if page => {
            if exists("src/app") {
                format!("src/app/{}/page.{}", route, extension)
            } else if exists("app") {
                format!("app/{}/page.{}", route, extension)
            } else if exists("src/pages") {
                format!("src/pages/{}.{}", route, extension)
            } else {
                format!("pages/{}.{}", route, extension)
            }
        }
        Framework::Next => format!("src/components/{}.{}", component, extension),

        Framework::React if page => format!("src/pages/{}.{}", component, extension),
        Framework::React => format!("src/components/{}.{}", component, extension),

        Framework::Nuxt if page => format!("pages/{}.vue", route),
        Framework::Nuxt => format!("components/{}.vue", component),

        Framework::Vue if page => format!("src/views/{}.vue", component),
        Framework::Vue => format!("src/components/{}.vue", component),

        Framework::Taro if page => format!("src/pages/{}/index.{}", route, extension),
        Framework::Taro => format!("src/components/{}/index.{}", component, extension),

        Framework::Svelte if page => {
            if exists("src/routes") {
                format!("src/routes/{}/+page.svelte", route)
            } else {
                format!("src/pages/{}.svelte", route)
            }
        }
        Framework::Svelte => {
            if exists("src/lib") {
                format!("src/lib/{}.svelte", component)
            } else {
                format!("src/components/{}.svelte", component)
            }
        }

        Framework::Vanilla if page => {
            if exists("src/pages") {
                format!("src/pages/{}.html", route)
            } else {
                format!("pages/{}.html", route)
            }
        }
        Framework::Vanilla => format!("components/{}.html", route),
    };

    PathBuf::from(path)
}

/// Advisory check of the overwrite policy against the chosen path.
pub fn confirmation_reasons(
    framework: Framework,
    framework_forced: bool,
    path_exists: bool,
    overwrite: OverwritePolicy,
) -> Vec<String> {
    let mut reasons = Vec::new();

    if framework == Framework::Vanilla && !framework_forced {
        reasons.push("framework fallback to vanilla".to_string());
    }

    match overwrite {
        OverwritePolicy::Ask | OverwritePolicy::New if path_exists => {
            reasons.push(format!("target exists and overwrite={}", overwrite.as_str()));
        }
        OverwritePolicy::Patch if !path_exists => {
            reasons.push("overwrite=patch but target file does not exist".to_string());
        }
        _ => {}
    }

    reasons
}

/// Classify the project under `root` and suggest where the restored design
/// should live.
pub fn suggest_target(root: &Path, options: &TargetOptions) -> Result<TargetReport, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::ProjectRootNotFound(root.to_path_buf()));
    }
    let root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());

    let signals = ProjectSignals::collect(&root, options.max_files);
    let framework = detect_framework(&signals, options.framework.forced()).winner;
    let language = detect_language(&signals, options.language.forced()).value;
    let extension = choose_extension(framework, language);
    let scope = options.scope.normalized();

    let mut reasoning = Vec::new();
    reasoning.push(match options.framework {
        Selection::Auto => format!("framework inferred as {}", framework),
        Selection::Forced(_) => format!("framework override applied: {}", framework),
    });
    reasoning.push(match options.language {
        Selection::Auto => format!("language inferred as {}", language),
        Selection::Forced(_) => format!("language override applied: {}", language),
    });

    // an empty path counts as no target at all
    let explicit = options
        .target
        .as_ref()
        .filter(|target| !target.as_os_str().is_empty());

    let (relative, absolute) = match explicit {
        Some(target) => {
            reasoning.push("explicit target path provided".to_string());
            if target.is_absolute() {
                let relative = target
                    .strip_prefix(&root)
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|_| target.clone());
                (relative, target.clone())
            } else {
                (target.clone(), root.join(target))
            }
        }
        None => {
            reasoning.push(format!(
                "target path suggested from framework={} scope={}",
                framework,
                scope.as_str()
            ));
            let relative = default_path(
                |rel| root.join(rel).exists(),
                framework,
                scope,
                &options.name,
                extension,
            );
            let absolute = root.join(&relative);
            (relative, absolute)
        }
    };

    let path_exists = absolute.exists();
    let confirmation_reasons = confirmation_reasons(
        framework,
        !options.framework.is_auto(),
        path_exists,
        options.overwrite,
    );
    info!("suggested {} for {}", relative.display(), root.display());

    Ok(TargetReport {
        framework,
        language,
        scope: options.scope,
        recommended_path: relative.display().to_string(),
        recommended_path_abs: absolute.display().to_string(),
        path_exists,
        overwrite: options.overwrite,
        needs_confirmation: !confirmation_reasons.is_empty(),
        confirmation_reasons,
        reasoning,
    })
}
