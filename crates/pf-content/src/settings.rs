//! Key-value page settings stored alongside the certificates.

use std::collections::BTreeMap;

/// Setting key → id of the element whose text it replaces.
pub const PAGE_TEXT_TARGETS: &[(&str, &str)] = &[
    ("hero_name", "heroName"),
    ("hero_description", "heroDescription"),
    ("mission", "missionText"),
    ("vision", "visionText"),
];

/// Two-column rows to a map. Empty keys are skipped, later rows win.
pub fn parse_settings_rows<R: AsRef<[String]>>(rows: &[R]) -> BTreeMap<String, String> {
    let mut out = BTreeMap::new();
    for row in rows {
        let row = row.as_ref();
        let Some(key) = row.first().map(|k| k.trim()) else {
            continue;
        };
        if key.is_empty() {
            continue;
        }
        let value = row.get(1).map(|v| v.trim()).unwrap_or_default();
        out.insert(key.to_owned(), value.to_owned());
    }
    out
}

/// `(element id, text)` pairs for the keys present in `settings`.
pub fn page_text_updates(settings: &BTreeMap<String, String>) -> Vec<(&'static str, String)> {
    PAGE_TEXT_TARGETS
        .iter()
        .filter_map(|(key, id)| settings.get(*key).map(|v| (*id, v.clone())))
        .collect()
}
