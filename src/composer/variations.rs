//! Split model output into its labelled variations.

use std::sync::OnceLock;

use regex::Regex;

fn delimiter() -> Option<&'static Regex> {
    static DELIMITER: OnceLock<Option<Regex>> = OnceLock::new();
    DELIMITER
        .get_or_init(|| {
            Regex::new(r"---\s*\n\*\*(?:Variation|Version) \d+\*\*[ \t]*\r?\n?").ok()
        })
        .as_ref()
}

/// Split generated text on `---` + `**Variation N**` (or `**Version N**`)
/// markers.
///
/// Parts are trimmed; empty parts and a closing `---` are dropped. Text
/// without any marker comes back as a single part.
pub fn parse_variations(output: &str) -> Vec<String> {
    let parts: Vec<&str> = match delimiter() {
        Some(re) => re.split(output).collect(),
        None => vec![output],
    };
    parts
        .into_iter()
        .map(|part| part.trim().trim_end_matches("---").trim())
        .filter(|part| !part.is_empty())
        .map(str::to_owned)
        .collect()
}
