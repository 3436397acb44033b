use crate::classify::{FirstMatch, Language, Resolution};
use crate::project::ProjectSignals;

/// tsconfig first, then the ts-versus-js file balance.
pub fn language_resolver() -> FirstMatch<Language, ProjectSignals> {
    FirstMatch::<_, ProjectSignals>::new(Language::JavaScript, |s| {
        format!(
            "source: js files {} >= ts files {}",
            s.stats().js_total(),
            s.stats().ts_total()
        )
    })
    .arm(Language::TypeScript, |s| {
        s.exists("tsconfig.json")
            .then(|| "file: tsconfig.json".to_string())
    })
    .arm(Language::TypeScript, |s| {
        let (ts, js) = (s.stats().ts_total(), s.stats().js_total());
        (ts > js).then(|| format!("source: ts files {} > js files {}", ts, js))
    })
}

pub fn detect_language(signals: &ProjectSignals, choice: Option<Language>) -> Resolution<Language> {
    language_resolver().resolve(signals, choice)
}
