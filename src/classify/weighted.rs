use super::evidence::EvidenceStore;
use super::labels::Label;
use log::debug;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Confidence reported whenever an outcome is forced from outside.
pub const OVERRIDE_CONFIDENCE: f64 = 0.99;
/// Lowest confidence any classifier may report.
pub const MIN_CONFIDENCE: f64 = 0.1;

/// Round to two decimal places using the exact binary value, so `0.435`
/// (stored as 0.43499...) becomes `0.43`.
pub fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// Per-label scores in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scores<L> {
    entries: Vec<(L, f64)>,
}

impl<L: Label> Scores<L> {
    /// Every label of the axis at zero.
    pub fn zeroed() -> Self {
        Self {
            entries: L::ALL.iter().map(|label| (*label, 0.0)).collect(),
        }
    }

    pub fn get(&self, label: L) -> f64 {
        self.entries
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, score)| *score)
            .unwrap_or(0.0)
    }

    /// Scores only ever grow; negative contributions are ignored.
    pub fn add(&mut self, label: L, points: f64) {
        if points <= 0.0 {
            return;
        }
        if let Some(entry) = self.entries.iter_mut().find(|(l, _)| *l == label) {
            entry.1 += points;
        }
    }

    /// Labels sorted by score, highest first. The sort is stable, so equal
    /// scores keep declaration order.
    pub fn ranked(&self) -> Vec<(L, f64)> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }

    pub fn iter(&self) -> impl Iterator<Item = (L, f64)> + '_ {
        self.entries.iter().copied()
    }
}

impl<L: Label> Serialize for Scores<L> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, score) in &self.entries {
            map.serialize_entry(label.as_str(), &round2(*score))?;
        }
        map.end()
    }
}

/// Human-readable justification attached to a rule.
pub enum Reason<I> {
    Fixed(&'static str),
    Computed(fn(&I) -> String),
}

/// A predicate over the input bundle that, when it holds, adds a fixed
/// weight to one label.
pub struct Rule<L, I> {
    pub label: L,
    pub weight: f64,
    predicate: fn(&I) -> bool,
    reason: Reason<I>,
}

impl<L: Label, I> Rule<L, I> {
    pub fn when(label: L, weight: f64, reason: &'static str, predicate: fn(&I) -> bool) -> Self {
        Self {
            label,
            weight,
            predicate,
            reason: Reason::Fixed(reason),
        }
    }

    /// Like [`Rule::when`], but the reason is rendered from the input.
    pub fn described(label: L, weight: f64, reason: fn(&I) -> String, predicate: fn(&I) -> bool) -> Self {
        Self {
            label,
            weight,
            predicate,
            reason: Reason::Computed(reason),
        }
    }

    pub fn evaluate(&self, input: &I) -> Option<String> {
        if !(self.predicate)(input) {
            return None;
        }
        Some(match &self.reason {
            Reason::Fixed(text) => (*text).to_string(),
            Reason::Computed(render) => render(input),
        })
    }
}

/// Confidence reported when the baseline label wins without rival evidence.
#[derive(Debug, Clone, Copy)]
pub struct BaselineConfidence<L> {
    pub label: L,
    pub baseline: f64,
    /// The baseline label gathered evidence of its own.
    pub with_signal: f64,
    /// The baseline label won purely by absence of other signals.
    pub without_signal: f64,
}

/// Maps the winning score and its margin to a calibrated confidence.
#[derive(Debug, Clone, Copy)]
pub struct ConfidenceModel<L> {
    pub base: f64,
    pub slope: f64,
    pub ceiling: f64,
    pub close_margin: f64,
    pub close_penalty: f64,
    pub baseline: Option<BaselineConfidence<L>>,
}

impl<L: Label> ConfidenceModel<L> {
    pub fn confidence(&self, winner: L, top: f64, runner_up: f64) -> f64 {
        if let Some(baseline) = &self.baseline {
            if baseline.label == winner {
                let raw = if top > baseline.baseline {
                    baseline.with_signal
                } else {
                    baseline.without_signal
                };
                return finish(raw);
            }
        }

        let mut confidence = (self.base + top * self.slope).min(self.ceiling);
        if top - runner_up < self.close_margin {
            confidence -= self.close_penalty;
        }
        finish(confidence)
    }
}

fn finish(confidence: f64) -> f64 {
    round2(confidence).max(MIN_CONFIDENCE)
}

/// Outcome of one classification run.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification<L> {
    pub winner: L,
    pub confidence: f64,
    pub evidence: Vec<String>,
    pub scores: Scores<L>,
    pub forced: bool,
}

impl<L: Label> Classification<L> {
    /// Bypass scoring: the label is taken as given.
    pub fn forced(label: L, scores: Scores<L>) -> Self {
        Self {
            winner: label,
            confidence: OVERRIDE_CONFIDENCE,
            evidence: vec![format!("override: {}={}", L::OVERRIDE_KEY, label)],
            scores,
            forced: true,
        }
    }
}

/// Scores a fixed candidate set against independent, additive rules.
pub struct WeightedClassifier<L, I> {
    baseline: Scores<L>,
    rules: Vec<Rule<L, I>>,
    model: ConfidenceModel<L>,
}

impl<L: Label, I> WeightedClassifier<L, I> {
    pub fn new(model: ConfidenceModel<L>) -> Self {
        Self {
            baseline: Scores::zeroed(),
            rules: Vec::new(),
            model,
        }
    }

    pub fn with_baseline(mut self, label: L, score: f64) -> Self {
        self.baseline.add(label, score);
        self
    }

    pub fn with_rule(mut self, rule: Rule<L, I>) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[Rule<L, I>] {
        &self.rules
    }

    pub fn baseline(&self) -> &Scores<L> {
        &self.baseline
    }

    /// Force `choice` when given, otherwise score the input. A forced choice
    /// never evaluates a rule.
    pub fn resolve(&self, input: &I, choice: Option<L>) -> Classification<L> {
        match choice {
            Some(label) => {
                debug!("{}: override {}", L::AXIS, label);
                Classification::forced(label, self.baseline.clone())
            }
            None => self.classify(input),
        }
    }

    pub fn classify(&self, input: &I) -> Classification<L> {
        let mut scores = self.baseline.clone();
        let mut store = EvidenceStore::new();

        for rule in &self.rules {
            if let Some(reason) = rule.evaluate(input) {
                debug!("{}: {} +{:.2} ({})", L::AXIS, rule.label, rule.weight, reason);
                scores.add(rule.label, rule.weight);
                store.record(rule.label, rule.weight, reason);
            }
        }

        let mut ranked = scores.ranked().into_iter();
        let (winner, top) = ranked.next().unwrap_or((L::ALL[0], 0.0));
        let runner_up = ranked.next().map(|(_, score)| score).unwrap_or(0.0);

        let confidence = self.model.confidence(winner, top, runner_up);
        let mut evidence = store.reasons_for(winner);
        if evidence.is_empty() {
            evidence.push(format!("fallback: {}={}", L::AXIS, winner));
        }

        Classification {
            winner,
            confidence,
            evidence,
            scores,
            forced: false,
        }
    }
}
