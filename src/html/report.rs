use super::inspector::{DraftInspector, InteractiveElement, RootChild};
use crate::css::{extract_tokens, unique_limited, DesignTokens};
use serde::Serialize;

pub const ASSET_LIMIT: usize = 50;
pub const TOP_TAG_LIMIT: usize = 15;
pub const TOP_CLASS_LIMIT: usize = 30;
/// Classes seen fewer times than this are one-off noise.
pub const REPEATED_CLASS_MIN: usize = 2;
pub const INTERACTIVE_SAMPLE_LIMIT: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassCount {
    pub class: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalAssets {
    pub images: Vec<String>,
    pub stylesheets: Vec<String>,
    pub scripts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub element_count: usize,
    pub unique_tags: usize,
    pub top_tags: Vec<TagCount>,
    pub semantic_sections: Vec<TagCount>,
    pub interactive_elements: usize,
    pub external_assets: ExternalAssets,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Structure {
    pub root_children: Vec<RootChild>,
    pub repeated_classes: Vec<ClassCount>,
    pub sample_interactive: Vec<InteractiveElement>,
}

/// Everything learned from one HTML draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inspection {
    pub summary: Summary,
    pub tokens: DesignTokens,
    pub structure: Structure,
}

/// An [`Inspection`] tagged with the file it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectionReport {
    pub html_path: String,
    #[serde(flatten)]
    pub inspection: Inspection,
}

impl DraftInspector {
    /// Shape the accumulated state into a report. Sampling and capping
    /// happen here, never during the walk.
    pub fn summarize(&self) -> Inspection {
        let top_tags = self
            .tags
            .most_common(Some(TOP_TAG_LIMIT))
            .into_iter()
            .map(|(tag, count)| TagCount { tag, count })
            .collect();

        let semantic_sections = self
            .semantic_sections
            .most_common(None)
            .into_iter()
            .map(|(tag, count)| TagCount { tag, count })
            .collect();

        let repeated_classes = self
            .classes
            .most_common(Some(TOP_CLASS_LIMIT))
            .into_iter()
            .filter(|(_, count)| *count >= REPEATED_CLASS_MIN)
            .map(|(class, count)| ClassCount { class, count })
            .collect();

        let external_assets = ExternalAssets {
            images: unique_limited(self.images.iter().map(String::as_str), ASSET_LIMIT),
            stylesheets: unique_limited(self.stylesheets.iter().map(String::as_str), ASSET_LIMIT),
            scripts: unique_limited(self.scripts.iter().map(String::as_str), ASSET_LIMIT),
        };

        Inspection {
            summary: Summary {
                element_count: self.tags.total(),
                unique_tags: self.tags.len(),
                top_tags,
                semantic_sections,
                interactive_elements: self.interactive.len(),
                external_assets,
            },
            tokens: extract_tokens(&self.combined_css()),
            structure: Structure {
                root_children: self.root_children.clone(),
                repeated_classes,
                sample_interactive: self
                    .interactive
                    .iter()
                    .take(INTERACTIVE_SAMPLE_LIMIT)
                    .cloned()
                    .collect(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_off_classes_are_not_reported() {
        let mut inspector = DraftInspector::new();
        inspector.feed(r#"<p class="lead x"></p><p class="lead"></p>"#);

        let inspection = inspector.summarize();
        assert_eq!(
            inspection.structure.repeated_classes,
            vec![ClassCount { class: "lead".to_string(), count: 2 }]
        );
        assert_eq!(inspection.summary.top_tags[0], TagCount { tag: "p".to_string(), count: 2 });
    }

    #[test]
    fn test_assets_are_deduplicated() {
        let mut inspector = DraftInspector::new();
        inspector.feed(
            r#"<img src="a.png"><img src=" a.png "><link rel="Stylesheet" href="s.css"><link rel="icon" href="i.ico"><script src="app.js"></script>"#,
        );

        let assets = inspector.summarize().summary.external_assets;
        assert_eq!(assets.images, vec!["a.png"]);
        assert_eq!(assets.stylesheets, vec!["s.css"]);
        assert_eq!(assets.scripts, vec!["app.js"]);
    }
}
