use once_cell::sync::Lazy;
use regex::Regex;

pub const DEFAULT_COMPONENT_NAME: &str = "RestoredDesign";
pub const DEFAULT_ROUTE_NAME: &str = "restored-design";

static SEPARATOR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9]+").unwrap());

static CAMEL_HUMP_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());

/// `"hero banner-v2"` → `"HeroBannerV2"`.
pub fn to_pascal_case(value: &str) -> String {
    let name: String = SEPARATOR_REGEX
        .split(value)
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| {
            let mut chars = chunk.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect();

    if name.is_empty() {
        DEFAULT_COMPONENT_NAME.to_string()
    } else {
        name
    }
}

/// `"HeroBanner v2"` → `"hero-banner-v2"`.
pub fn to_kebab_case(value: &str) -> String {
    let split = CAMEL_HUMP_REGEX.replace_all(value, "$1-$2");
    let dashed = SEPARATOR_REGEX.replace_all(&split, "-");
    let normalized = dashed.trim_matches('-').to_lowercase();

    if normalized.is_empty() {
        DEFAULT_ROUTE_NAME.to_string()
    } else {
        normalized
    }
}
