use crate::classify::{Classification, ConfidenceModel, Rule, StyleSystem, WeightedClassifier};
use crate::project::ProjectSignals;

pub const CSS_BASELINE: f64 = 0.2;

pub const STYLE_CONFIDENCE: ConfidenceModel<StyleSystem> = ConfidenceModel {
    base: 0.45,
    slope: 0.35,
    ceiling: 0.98,
    close_margin: 0.2,
    close_penalty: 0.10,
    baseline: None,
};

pub fn style_classifier() -> WeightedClassifier<StyleSystem, ProjectSignals> {
    use StyleSystem::*;

    WeightedClassifier::<StyleSystem, ProjectSignals>::new(STYLE_CONFIDENCE)
        .with_baseline(Css, CSS_BASELINE)
        .with_rule(Rule::when(Tailwind, 1.0, "dependency: tailwindcss", |s| {
            s.has_dependency("tailwindcss")
        }))
        .with_rule(Rule::when(Tailwind, 0.5, "config: tailwind.config.*", |s| {
            s.any_exists(&["tailwind.config.js", "tailwind.config.ts"])
        }))
        .with_rule(Rule::described(
            CssModules,
            0.9,
            |s| format!("source: module style files {}", s.stats().module_total()),
            |s| s.stats().module_total() > 0,
        ))
        .with_rule(Rule::when(Scss, 0.7, "source/dependency: scss or sass", |s| {
            s.stats().scss > 0 || s.has_dependency("sass")
        }))
        .with_rule(Rule::when(Less, 0.7, "source/dependency: less", |s| {
            s.stats().less > 0 || s.has_dependency("less")
        }))
        .with_rule(Rule::when(StyledComponents, 1.0, "dependency: styled-components", |s| {
            s.has_dependency("styled-components")
        }))
        .with_rule(Rule::when(Emotion, 1.0, "dependency: emotion", |s| {
            s.has_any_dependency(&["@emotion/react", "@emotion/styled"])
        }))
}

pub fn detect_style_system(
    signals: &ProjectSignals,
    choice: Option<StyleSystem>,
) -> Classification<StyleSystem> {
    style_classifier().resolve(signals, choice)
}
