pub mod evidence;
pub mod first_match;
pub mod labels;
pub mod weighted;

pub use evidence::{EvidenceItem, EvidenceStore};
pub use first_match::{FirstMatch, Resolution};
pub use labels::{Framework, Label, Language, PackageManager, Selection, StyleSystem};
pub use weighted::{
    round2, BaselineConfidence, Classification, ConfidenceModel, Rule, Scores, WeightedClassifier,
    MIN_CONFIDENCE, OVERRIDE_CONFIDENCE,
};
