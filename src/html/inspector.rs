use super::frequency::FrequencyTable;
use super::lexer::{Attributes, Lexer, Token};
use serde::Serialize;

pub const SEMANTIC_TAGS: &[&str] = &[
    "header", "main", "section", "footer", "nav", "article", "aside", "form",
];

pub const INTERACTIVE_TAGS: &[&str] = &["button", "a", "input", "select", "textarea", "summary"];

/// How many direct children of `body` are sampled.
pub const ROOT_CHILD_LIMIT: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractiveElement {
    pub tag: String,
    pub id: String,
    pub class: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootChild {
    pub tag: String,
    pub id: String,
    pub class: String,
}

/// Single-pass walker over an HTML tag stream.
///
/// Keeps an open-tag stack, frequency tables and the raw style text it
/// meets. Closing tags are matched innermost-first anywhere in the stack,
/// so unbalanced markup never derails the walk.
#[derive(Debug, Default)]
pub struct DraftInspector {
    pub(crate) tags: FrequencyTable,
    pub(crate) classes: FrequencyTable,
    pub(crate) semantic_sections: FrequencyTable,
    pub(crate) interactive: Vec<InteractiveElement>,
    pub(crate) images: Vec<String>,
    pub(crate) stylesheets: Vec<String>,
    pub(crate) scripts: Vec<String>,
    pub(crate) inline_styles: Vec<String>,
    pub(crate) style_blocks: Vec<String>,
    pub(crate) root_children: Vec<RootChild>,
    in_style: bool,
    style_buffer: String,
    stack: Vec<String>,
}

impl DraftInspector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, html: &str) {
        for token in Lexer::new(html) {
            match token {
                Token::StartTag {
                    name,
                    attrs,
                    self_closing,
                } => {
                    self.handle_start_tag(&name, &attrs);
                    if self_closing && self.stack.last() == Some(&name) {
                        self.stack.pop();
                    }
                }
                Token::EndTag(name) => self.handle_end_tag(&name),
                Token::Text(text) => self.handle_text(&text),
                Token::Eof => break,
            }
        }
    }

    pub fn handle_start_tag(&mut self, tag: &str, attrs: &Attributes) {
        self.tags.increment(tag);

        let class = attrs.get("class").unwrap_or("");
        for name in class.split_whitespace() {
            self.classes.increment(name);
        }

        if SEMANTIC_TAGS.contains(&tag) {
            self.semantic_sections.increment(tag);
        }

        let is_interactive = INTERACTIVE_TAGS.contains(&tag)
            || attrs.non_empty("onclick").is_some()
            || attrs.get("role") == Some("button");
        if is_interactive {
            self.interactive.push(InteractiveElement {
                tag: tag.to_string(),
                id: attrs.get("id").unwrap_or("").to_string(),
                class: class.to_string(),
                role: attrs.get("role").unwrap_or("").to_string(),
            });
        }

        match tag {
            "img" => {
                if let Some(src) = attrs.non_empty("src") {
                    self.images.push(src.to_string());
                }
            }
            "link" => {
                let rel = attrs.get("rel").unwrap_or("").to_ascii_lowercase();
                if let Some(href) = attrs.non_empty("href").filter(|_| rel.contains("stylesheet")) {
                    self.stylesheets.push(href.to_string());
                }
            }
            "script" => {
                if let Some(src) = attrs.non_empty("src") {
                    self.scripts.push(src.to_string());
                }
            }
            _ => {}
        }

        if let Some(style) = attrs.non_empty("style") {
            self.inline_styles.push(style.to_string());
        }

        if self.parent() == Some("body") && self.root_children.len() < ROOT_CHILD_LIMIT {
            self.root_children.push(RootChild {
                tag: tag.to_string(),
                id: attrs.get("id").unwrap_or("").to_string(),
                class: class.to_string(),
            });
        }

        if tag == "style" {
            self.in_style = true;
            self.style_buffer.clear();
        }

        self.stack.push(tag.to_string());
    }

    pub fn handle_end_tag(&mut self, tag: &str) {
        if tag == "style" && self.in_style {
            self.in_style = false;
            let body = self.style_buffer.trim();
            if !body.is_empty() {
                self.style_blocks.push(body.to_string());
            }
            self.style_buffer.clear();
        }

        if let Some(idx) = self.stack.iter().rposition(|open| open == tag) {
            self.stack.remove(idx);
        }
    }

    /// Only text inside `<style>` is kept; prose is ignored.
    pub fn handle_text(&mut self, text: &str) {
        if self.in_style {
            self.style_buffer.push_str(text);
        }
    }

    fn parent(&self) -> Option<&str> {
        self.stack.last().map(String::as_str)
    }

    /// Currently open tags, innermost last.
    pub fn open_tags(&self) -> &[String] {
        &self.stack
    }

    pub fn tag_count(&self, tag: &str) -> usize {
        self.tags.get(tag)
    }

    pub fn class_count(&self, class: &str) -> usize {
        self.classes.get(class)
    }

    pub fn interactive_elements(&self) -> &[InteractiveElement] {
        &self.interactive
    }

    pub fn root_children(&self) -> &[RootChild] {
        &self.root_children
    }

    /// Inline styles followed by `<style>` bodies, newline separated.
    pub fn combined_css(&self) -> String {
        self.inline_styles
            .iter()
            .chain(self.style_blocks.iter())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
