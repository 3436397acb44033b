use crate::classify::{
    BaselineConfidence, Classification, ConfidenceModel, Framework, Rule, WeightedClassifier,
};
use crate::project::ProjectSignals;

/// Prior for "nothing else detected".
pub const VANILLA_BASELINE: f64 = 0.2;

pub const FRAMEWORK_CONFIDENCE: ConfidenceModel<Framework> = ConfidenceModel {
    base: 0.45,
    slope: 0.28,
    ceiling: 0.98,
    close_margin: 0.25,
    close_penalty: 0.12,
    baseline: Some(BaselineConfidence {
        label: Framework::Vanilla,
        baseline: VANILLA_BASELINE,
        with_signal: 0.55,
        without_signal: 0.35,
    }),
};

/// The framework rule table. Rules are additive: a `pages` directory rewards
/// next, react and nuxt alike.
pub fn framework_classifier() -> WeightedClassifier<Framework, ProjectSignals> {
    use Framework::*;

    WeightedClassifier::<Framework, ProjectSignals>::new(FRAMEWORK_CONFIDENCE)
        .with_baseline(Vanilla, VANILLA_BASELINE)
        // dependencies
        .with_rule(Rule::when(Next, 1.2, "dependency: next", |s| s.has_dependency("next")))
        .with_rule(Rule::when(React, 0.9, "dependency: react", |s| s.has_dependency("react")))
        .with_rule(Rule::when(React, 0.3, "dependency: react-dom", |s| {
            s.has_dependency("react-dom")
        }))
        .with_rule(Rule::when(React, 0.2, "dependency: react-router", |s| {
            s.has_any_dependency(&["react-router", "react-router-dom"])
        }))
        .with_rule(Rule::when(Nuxt, 1.2, "dependency: nuxt", |s| s.has_dependency("nuxt")))
        .with_rule(Rule::when(Vue, 0.9, "dependency: vue", |s| s.has_dependency("vue")))
        .with_rule(Rule::when(Vue, 0.2, "dependency: vue-router", |s| {
            s.has_dependency("vue-router")
        }))
        .with_rule(Rule::when(Taro, 1.3, "dependency: @tarojs/*", |s| {
            s.has_dependency_prefix("@tarojs/")
        }))
        .with_rule(Rule::when(Svelte, 1.0, "dependency: svelte", |s| s.has_dependency("svelte")))
        .with_rule(Rule::when(Svelte, 0.5, "dependency: @sveltejs/kit", |s| {
            s.has_dependency("@sveltejs/kit")
        }))
        // config files and layout
        .with_rule(Rule::when(Next, 0.4, "config: next.config.*", |s| {
            s.any_exists(&["next.config.js", "next.config.mjs"])
        }))
        .with_rule(Rule::when(Nuxt, 0.4, "config: nuxt.config.*", |s| {
            s.any_exists(&["nuxt.config.ts", "nuxt.config.js"])
        }))
        .with_rule(Rule::when(Next, 0.3, "dir: app router structure", |s| {
            s.any_exists(&["src/app", "app"])
        }))
        .with_rule(Rule::when(Next, 0.1, "dir: pages structure", has_pages_dir))
        .with_rule(Rule::when(React, 0.1, "dir: pages structure", has_pages_dir))
        .with_rule(Rule::when(Nuxt, 0.1, "dir: pages structure", has_pages_dir))
        .with_rule(Rule::when(Taro, 0.3, "config: taro-like config/index.*", |s| {
            s.any_exists(&["config/index.ts", "config/index.js"])
        }))
}

fn has_pages_dir(signals: &ProjectSignals) -> bool {
    signals.any_exists(&["pages", "src/pages"])
}

pub fn detect_framework(signals: &ProjectSignals, choice: Option<Framework>) -> Classification<Framework> {
    framework_classifier().resolve(signals, choice)
}
