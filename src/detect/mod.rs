pub mod framework;
pub mod language;
pub mod package_manager;
pub mod style;

pub use framework::{detect_framework, framework_classifier};
pub use language::{detect_language, language_resolver};
pub use package_manager::{detect_package_manager, package_manager_resolver};
pub use style::{detect_style_system, style_classifier};

use crate::classify::{
    round2, Framework, Language, PackageManager, Scores, Selection, StyleSystem,
};
use crate::error::ScanError;
use crate::project::{ProjectSignals, SourceStats, DEFAULT_MAX_FILES};
use log::info;
use serde::Serialize;
use std::path::Path;

/// Caller-supplied choices that bypass detection per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectOptions {
    pub framework: Selection<Framework>,
    pub style: Selection<StyleSystem>,
    pub language: Selection<Language>,
    pub max_files: usize,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            framework: Selection::Auto,
            style: Selection::Auto,
            language: Selection::Auto,
            max_files: DEFAULT_MAX_FILES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackEvidence {
    pub framework: Vec<String>,
    pub language: Vec<String>,
    pub style_system: Vec<String>,
    pub package_manager: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostics {
    pub framework_scores: Scores<Framework>,
    pub source_stats: SourceStats,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framework: Option<Framework>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_system: Option<StyleSystem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
}

impl Overrides {
    pub fn is_empty(&self) -> bool {
        self.framework.is_none() && self.style_system.is_none() && self.language.is_none()
    }
}

/// The classification report for one project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackReport {
    pub framework: Framework,
    pub language: Language,
    pub style_system: StyleSystem,
    pub package_manager: PackageManager,
    /// Mean of the framework and style confidences.
    pub confidence: f64,
    pub evidence: StackEvidence,
    pub diagnostics: Diagnostics,
    #[serde(skip_serializing_if = "Overrides::is_empty")]
    pub overrides: Overrides,
}

/// Run every classifier over already-collected signals.
pub fn detect_stack(signals: &ProjectSignals, options: &DetectOptions) -> StackReport {
    let framework = detect_framework(signals, options.framework.forced());
    let style = detect_style_system(signals, options.style.forced());
    let language = detect_language(signals, options.language.forced());
    let package_manager = detect_package_manager(signals);

    let confidence = round2(((framework.confidence + style.confidence) / 2.0).min(0.99));

    let overrides = Overrides {
        framework: options.framework.forced(),
        style_system: options.style.forced(),
        language: options.language.forced(),
    };

    StackReport {
        framework: framework.winner,
        language: language.value,
        style_system: style.winner,
        package_manager: package_manager.value,
        confidence,
        evidence: StackEvidence {
            framework: framework.evidence,
            language: language.evidence,
            style_system: style.evidence,
            package_manager: package_manager.evidence,
        },
        diagnostics: Diagnostics {
            framework_scores: framework.scores,
            source_stats: signals.stats().clone(),
        },
        overrides,
    }
}

/// Validate `root`, collect its signals and classify it.
pub fn detect_project(root: &Path, options: &DetectOptions) -> Result<StackReport, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::ProjectRootNotFound(root.to_path_buf()));
    }

    info!("detecting stack for {}", root.display());
    let signals = ProjectSignals::collect(root, options.max_files);
    Ok(detect_stack(&signals, options))
}
