use draftscope::html::{inspect, inspect_file};
use draftscope::ScanError;
use std::fs;
use tempfile::TempDir;

const LANDING: &str = r#"<!DOCTYPE html>
<html>
<head>
  <link rel="stylesheet" href="/main.css" />
  <style>
    .hero { font-size: 32px; padding: 24px 16px; color: #FFF; }
    .card { border-radius: 8px; box-shadow: 0 1px 2px rgba(0,0,0,.2); background: #ffffff; }
  </style>
</head>
<body>
  <header class="top"><nav><a href="/">Home</a></nav></header>
  <main>
    <section class="card"><img src="/a.png" /><button class="btn">Buy</button></section>
    <section class="card"><img src="/a.png" /><button class="btn">Buy</button></section>
  </main>
  <footer style="margin: 0 auto;"></footer>
  <script src="/app.js"></script>
</body>
</html>"#;

#[test]
fn test_landing_page_summary() {
    let inspection = inspect(LANDING);
    let summary = &inspection.summary;

    let sum: usize = summary.top_tags.iter().map(|t| t.count).sum();
    assert!(sum <= summary.element_count);
    assert_eq!(summary.interactive_elements, 3);
    assert_eq!(summary.external_assets.images, vec!["/a.png"]);
    assert_eq!(summary.external_assets.stylesheets, vec!["/main.css"]);
    assert_eq!(summary.external_assets.scripts, vec!["/app.js"]);

    let semantic: Vec<_> = summary
        .semantic_sections
        .iter()
        .map(|s| (s.tag.as_str(), s.count))
        .collect();
    assert_eq!(
        semantic,
        vec![("section", 2), ("header", 1), ("nav", 1), ("main", 1), ("footer", 1)]
    );
}

#[test]
fn test_landing_page_tokens() {
    let tokens = inspect(LANDING).tokens;

    assert_eq!(tokens.colors, vec!["#FFF", "rgba(0,0,0,.2)", "#ffffff"]);
    assert_eq!(tokens.font_sizes, vec!["32px"]);
    assert_eq!(tokens.spacings, vec!["0 auto", "24px 16px"]);
    assert_eq!(tokens.radii, vec!["8px"]);
    assert_eq!(tokens.shadows, vec!["0 1px 2px rgba(0,0,0,.2)"]);
}

#[test]
fn test_landing_page_structure() {
    let structure = inspect(LANDING).structure;

    let roots: Vec<_> = structure.root_children.iter().map(|c| c.tag.as_str()).collect();
    assert_eq!(roots, vec!["header", "main", "footer", "script"]);
    assert_eq!(structure.root_children[0].class, "top");

    let repeated: Vec<_> = structure
        .repeated_classes
        .iter()
        .map(|c| (c.class.as_str(), c.count))
        .collect();
    assert_eq!(repeated, vec![("card", 2), ("btn", 2)]);
    assert_eq!(structure.sample_interactive[0].tag, "a");
}

#[test]
fn test_void_tags_without_slash_stay_open() {
    // an unclosed <img> stays the innermost open tag, so its later siblings
    // are no longer direct children of body
    let inspection = inspect(r#"<body><img src="x.png"><p></p></body>"#);
    let roots: Vec<_> = inspection.structure.root_children.iter().map(|c| c.tag.as_str()).collect();
    assert_eq!(roots, vec!["img"]);
}

fn crowded_page(groups: usize) -> String {
    let mut html = String::from("<body>");
    for i in 0..groups {
        html.push_str(&format!(
            r#"<button class="k{i}" style="margin: {i}px; color: #{i:03x};"><img src="/img/{i}.png" /></button><t{i} class="k{i}"></t{i}>"#,
            i = i
        ));
    }
    html.push_str("</body>");
    html
}

#[test]
fn test_report_lists_are_capped() {
    let inspection = inspect(&crowded_page(60));

    assert_eq!(inspection.summary.interactive_elements, 60);
    assert_eq!(inspection.structure.sample_interactive.len(), 20);
    assert_eq!(inspection.structure.root_children.len(), 30);
    assert_eq!(inspection.structure.root_children[1].tag, "t0");
    assert_eq!(inspection.summary.external_assets.images.len(), 50);
    assert_eq!(inspection.summary.external_assets.images[49], "/img/49.png");
    assert_eq!(inspection.summary.unique_tags, 63);
    assert_eq!(inspection.summary.top_tags.len(), 15);
    assert_eq!(inspection.structure.repeated_classes.len(), 30);
    assert!(inspection.structure.repeated_classes.iter().all(|c| c.count == 2));
    assert_eq!(inspection.tokens.spacings.len(), 40);
    assert_eq!(inspection.tokens.spacings[39], "39px");
    assert_eq!(inspection.tokens.colors.len(), 40);
}

#[test]
fn test_named_entities_in_asset_urls() {
    let inspection = inspect(r#"<img src="a&copy;b.png"><script src="s.js?a=1&amp;b=2"></script>"#);
    assert_eq!(inspection.summary.external_assets.images, vec!["a\u{a9}b.png"]);
    assert_eq!(inspection.summary.external_assets.scripts, vec!["s.js?a=1&b=2"]);
}

#[test]
fn test_element_count_matches_tag_totals() {
    let inspection = inspect("<ul><li>a</li><li>b</li><li class='x y'>c</li></ul>");
    assert_eq!(inspection.summary.element_count, 4);
    assert_eq!(inspection.summary.unique_tags, 2);
}

#[test]
fn test_malformed_markup_does_not_fail() {
    let inspection = inspect("<div><span></div><p <b>unterminated");
    assert!(inspection.summary.element_count >= 2);
}

#[test]
fn test_inspect_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("draft.HTML");
    fs::write(&path, "<body><main></main></body>").unwrap();

    let report = inspect_file(&path).unwrap();
    assert!(report.html_path.ends_with("draft.HTML"));

    let json = serde_json::to_value(&report).unwrap();
    assert!(json.get("summary").is_some());
    assert!(json.get("tokens").is_some());
    assert!(json.get("structure").is_some());
}

#[test]
fn test_inspect_file_validation() {
    let dir = TempDir::new().unwrap();

    let err = inspect_file(&dir.path().join("missing.html")).unwrap_err();
    assert!(matches!(err, ScanError::HtmlNotFound(_)));

    let text = dir.path().join("draft.txt");
    fs::write(&text, "<p></p>").unwrap();
    let err = inspect_file(&text).unwrap_err();
    assert_eq!(err.to_string(), "input must be a .html file");
}
