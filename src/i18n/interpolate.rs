//! `{{name}}` placeholder substitution.
//!
//! Each substitution replaces every literal `{{name}}` occurrence in one
//! left-to-right pass. Replaced text is never rescanned, and placeholders with
//! no matching substitution are left as-is.

use crate::i18n::tree::render_value;
use regex::Regex;
use serde_json::Value;
use std::cmp::Reverse;
use std::sync::OnceLock;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

/// Apply every substitution to `template`.
///
/// When placeholders overlap (for example `{{a}}` and `{{{a}}` in
/// `"{{{a}}}"`), the leftmost match wins, then the longest, then the one whose
/// name sorts first. The order of `vars` never affects the result for distinct
/// names.
///
/// # Arguments
/// * `template` - Rendered translation text
/// * `vars` - Substitution names and values
///
/// # Returns
/// The text with every matched `{{name}}` replaced by the rendered value.
pub fn interpolate(template: &str, vars: &[(String, Value)]) -> String {
    if vars.is_empty() || !template.contains("{{") {
        return template.to_string();
    }

    // Matches are collected against the template only, so a substituted value
    // containing `{{other}}` is never expanded by a later key.
    let mut candidates: Vec<(usize, usize, &str, String)> = Vec::new();
    for (name, value) in vars {
        let placeholder = format!("{{{{{name}}}}}");
        let rendered = render_value(value);
        for (start, _) in template.match_indices(placeholder.as_str()) {
            candidates.push((start, start + placeholder.len(), name.as_str(), rendered.clone()));
        }
    }

    candidates.sort_by(|a, b| {
        a.0.cmp(&b.0)
            .then_with(|| Reverse(a.1).cmp(&Reverse(b.1)))
            .then_with(|| a.2.cmp(b.2))
    });

    let mut text = String::with_capacity(template.len());
    let mut cursor = 0;
    for (start, end, _, rendered) in candidates {
        if start < cursor {
            continue;
        }
        text.push_str(&template[cursor..start]);
        text.push_str(&rendered);
        cursor = end;
    }
    text.push_str(&template[cursor..]);
    text
}

/// Names of all `{{name}}` placeholders in `text`, in order of appearance.
pub fn placeholders(text: &str) -> Vec<&str> {
    let regex =
        PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{\{([^{}]+)\}\}").expect("valid regex"));

    regex
        .captures_iter(text)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str()))
        .collect()
}

/// Placeholders in `template` that no entry in `vars` will fill.
///
/// Scans the template before substitution, so placeholder text carried in by a
/// substituted value is not reported.
pub fn unresolved_placeholders<'a>(template: &'a str, vars: &[(String, Value)]) -> Vec<&'a str> {
    placeholders(template)
        .into_iter()
        .filter(|name| !vars.iter().any(|(var, _)| var == name))
        .collect()
}
