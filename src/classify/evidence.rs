use super::labels::Label;

/// One scored justification recorded while a classifier runs.
#[derive(Debug, Clone, PartialEq)]
pub struct EvidenceItem<L> {
    pub label: L,
    pub weight: f64,
    pub reason: String,
}

/// Append-only log of evidence, kept in insertion order for audit output.
#[derive(Debug, Clone)]
pub struct EvidenceStore<L> {
    items: Vec<EvidenceItem<L>>,
}

impl<L> Default for EvidenceStore<L> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<L: Label> EvidenceStore<L> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, label: L, weight: f64, reason: impl Into<String>) {
        self.items.push(EvidenceItem {
            label,
            weight,
            reason: reason.into(),
        });
    }

    /// Reasons recorded for `label`, in the order they were recorded.
    pub fn reasons_for(&self, label: L) -> Vec<String> {
        self.items
            .iter()
            .filter(|item| item.label == label)
            .map(|item| item.reason.clone())
            .collect()
    }

    /// Sum of recorded weights for `label`.
    pub fn total_for(&self, label: L) -> f64 {
        self.items
            .iter()
            .filter(|item| item.label == label)
            .map(|item| item.weight)
            .sum()
    }

    pub fn items(&self) -> &[EvidenceItem<L>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
