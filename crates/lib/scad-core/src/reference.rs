//! Reference lookup resolution.
//!
//! Both entry points share the same three-way shape: empty input yields a
//! menu, a known key yields the formatted body, and anything else yields a
//! not-found message listing every valid key so the caller can self-correct.
//! Inputs are normalized by trimming and lowercasing before lookup.

use std::fmt::Write as _;

use crate::knowledge;

/// The fixed syntax reference served by `get_scad_syntax`.
#[must_use]
pub const fn syntax_reference() -> &'static str {
    knowledge::SYNTAX_RULES
}

/// Resolves a reference category request to its response text.
///
/// The detailed tier is consulted before the quick tier. The two key sets
/// are disjoint, but the order is fixed so resolution stays deterministic.
#[must_use]
pub fn resolve_category(raw: &str) -> String {
    let key = raw.trim().to_lowercase();
    if key.is_empty() {
        return category_menu();
    }

    if let Some(body) = knowledge::detailed_category(&key) {
        let title = knowledge::display_name(&key)
            .map_or_else(|| key.to_uppercase(), str::to_string);
        return format!("{title}\n{body}");
    }

    if let Some(body) = knowledge::quick_category(&key) {
        return format!("🔧 {} Functions:\n{body}", key.to_uppercase());
    }

    let available: Vec<&str> = knowledge::category_keys().collect();
    format!(
        "❌ Category '{key}' not found. Available: {}",
        available.join(", ")
    )
}

/// Resolves a quick-help topic request to its response text.
#[must_use]
pub fn resolve_quick_help(raw: &str) -> String {
    let key = raw.trim().to_lowercase();
    if key.is_empty() {
        let topics: Vec<&str> = knowledge::topic_keys().collect();
        return format!(
            "🔧 Quick OpenSCAD Reference - Available topics:\n- {}",
            topics.join("\n- ")
        );
    }

    if let Some(snippet) = knowledge::quick_help_topic(&key) {
        return format!("🔧 {}:\n{snippet}", capitalize(&key));
    }

    let available: Vec<&str> = knowledge::topic_keys().collect();
    format!(
        "❌ Topic '{key}' not found. Available: {}",
        available.join(", ")
    )
}

fn category_menu() -> String {
    let mut output = String::from("📚 Available OpenSCAD Reference Categories:\n\n");
    for key in knowledge::category_keys() {
        let description = knowledge::CATEGORY_DESCRIPTIONS
            .iter()
            .find(|(name, _)| *name == key)
            .map_or("", |(_, text)| *text);
        let _ = writeln!(output, "• {key} - {description}");
    }
    output
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_lookup_is_case_and_whitespace_insensitive() {
        for (key, _) in knowledge::DETAILED_CATEGORIES {
            let plain = resolve_category(key);
            assert_eq!(plain, resolve_category(&key.to_uppercase()));
            assert_eq!(plain, resolve_category(&format!("  {key}  ")));
        }
    }

    #[test]
    fn empty_category_lists_every_key_once() {
        let menu = resolve_category("");
        for key in knowledge::category_keys() {
            let needle = format!("• {key} - ");
            assert_eq!(
                menu.matches(&needle).count(),
                1,
                "menu should list {key} exactly once"
            );
        }
    }

    #[test]
    fn unknown_category_lists_all_valid_keys() {
        let response = resolve_category("bogus");
        assert!(response.starts_with("❌"));
        for key in knowledge::category_keys() {
            assert!(response.contains(key), "not-found message should list {key}");
        }
    }

    #[test]
    fn detailed_category_gets_friendly_title() {
        let response = resolve_category("syntax");
        assert!(response.starts_with("📝 Syntax and Rules\n"));
        assert!(response.contains("FLOW CONTROL SYNTAX"));
    }

    #[test]
    fn quick_category_gets_uppercase_header() {
        let response = resolve_category("3d");
        assert!(response.starts_with("🔧 3D Functions:\n"));
        assert!(response.contains("polyhedron()"));
    }

    #[test]
    fn quick_help_matches_and_misses() {
        let hit = resolve_quick_help(" CUBE ");
        assert!(hit.starts_with("🔧 Cube:\n"));
        assert!(hit.contains("cube([10,20,5], center=true);"));

        let miss = resolve_quick_help("torus");
        assert!(miss.starts_with("❌"));
        for topic in knowledge::topic_keys() {
            assert!(miss.contains(topic));
        }
    }

    #[test]
    fn empty_quick_help_lists_topics() {
        let menu = resolve_quick_help("");
        for topic in knowledge::topic_keys() {
            assert!(menu.contains(&format!("- {topic}")));
        }
    }

    #[test]
    fn syntax_reference_is_the_syntax_body() {
        assert!(syntax_reference().contains("Foundational Syntax and Rules"));
    }
}
