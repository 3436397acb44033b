use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;

/// Per-class cap on extracted tokens.
pub const TOKEN_LIMIT: usize = 40;

// Function names are matched as written; property names case-insensitively.
static COLOR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"#[0-9a-fA-F]{3,8}\b|rgba?\([^)]*\)|hsla?\([^)]*\)").unwrap()
});

static FONT_SIZE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)font-size\s*:\s*([^;}{]+)").unwrap()
});

static SPACING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:margin|padding|gap|row-gap|column-gap)\s*:\s*([^;}{]+)").unwrap()
});

static RADIUS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)border-radius\s*:\s*([^;}{]+)").unwrap()
});

static SHADOW_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)box-shadow\s*:\s*([^;}{]+)").unwrap()
});

/// Design tokens mined from raw style text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DesignTokens {
    pub colors: Vec<String>,
    pub font_sizes: Vec<String>,
    pub spacings: Vec<String>,
    pub radii: Vec<String>,
    pub shadows: Vec<String>,
}

pub fn extract_tokens(css: &str) -> DesignTokens {
    let colors = COLOR_REGEX.find_iter(css).map(|m| m.as_str());

    DesignTokens {
        colors: unique_limited(colors, TOKEN_LIMIT),
        font_sizes: unique_limited(declaration_values(&FONT_SIZE_REGEX, css), TOKEN_LIMIT),
        spacings: unique_limited(declaration_values(&SPACING_REGEX, css), TOKEN_LIMIT),
        radii: unique_limited(declaration_values(&RADIUS_REGEX, css), TOKEN_LIMIT),
        shadows: unique_limited(declaration_values(&SHADOW_REGEX, css), TOKEN_LIMIT),
    }
}

fn declaration_values<'r, 't>(regex: &'r Regex, css: &'t str) -> impl Iterator<Item = &'t str> + 'r
where
    't: 'r,
{
    regex
        .captures_iter(css)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Trim, drop blanks and exact duplicates, keep first-seen order, stop at
/// `limit` entries.
pub fn unique_limited<'a, I>(items: I, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    let mut result = Vec::new();

    for item in items {
        if result.len() >= limit {
            break;
        }
        let normalized = item.trim();
        if normalized.is_empty() || !seen.insert(normalized) {
            continue;
        }
        result.push(normalized.to_string());
    }

    result
}
