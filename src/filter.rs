//! Project filtering by technology tag.
//!
//! Buttons are generated from whatever tags the rendered project cards carry.
//! Matching is a case-insensitive substring test: an active term matches a
//! card when any of its tags contains the term, so `script` selects
//! `TypeScript` and `JavaScript` cards alike.

use std::collections::BTreeSet;

use crate::dom::{Document, Element};
use crate::error::Result;
use crate::sections::html_escape;

pub const CONTAINER: &str = "#filterButtons";

const BUTTON_STYLE: &str = "background: var(--bg-tertiary); color: var(--text-primary); border: 1px solid var(--border); padding: 0.5rem 1rem; margin: 0.25rem; border-radius: 20px; cursor: pointer;";

/// Lowercase terms currently selected, in the order they were activated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActiveFilters {
    terms: Vec<String>,
}

impl ActiveFilters {
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Flip membership of `term` (lowercased). Returns true if now active.
    pub fn toggle(&mut self, term: &str) -> bool {
        let term = term.to_lowercase();
        if self.terms.contains(&term) {
            self.terms.retain(|t| *t != term);
            false
        } else {
            self.terms.push(term);
            true
        }
    }

    /// Whether a card with these tags stays visible.
    pub fn matches<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        if self.terms.is_empty() {
            return true;
        }
        tags.iter().any(|tag| {
            let tag = tag.as_ref().to_lowercase();
            self.terms.iter().any(|term| tag.contains(term.as_str()))
        })
    }
}

fn card_tags(card: &Element) -> Vec<String> {
    card.query_selector_all(".tech-tag")
        .into_iter()
        .map(|t| t.text_content().trim().to_string())
        .collect()
}

/// Distinct tags across all project cards, sorted.
pub fn collect_technologies(doc: &Document) -> Vec<String> {
    doc.query_selector_all(".project-card")
        .into_iter()
        .flat_map(card_tags)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Fill the filter container with one toggle per distinct tag.
/// Returns the number of buttons, or `None` when the page has no container.
pub fn generate_filter_buttons(doc: &mut Document) -> Result<Option<usize>> {
    let techs = collect_technologies(doc);
    let Some(container) = doc.query_selector_mut(CONTAINER) else {
        return Ok(None);
    };

    let buttons: String = techs
        .iter()
        .map(|tech| {
            format!(
                r#"<button class="filter-btn" data-filter="{}" style="{}">{}</button>"#,
                html_escape(&tech.to_lowercase()),
                BUTTON_STYLE,
                html_escape(tech)
            )
        })
        .collect();
    container.set_inner_html(&buttons)?;

    Ok(Some(techs.len()))
}

/// Restyle the clicked button: the one labelled `label`, or failing that the
/// first one bound to `term`. Buttons whose tags differ only by case share a
/// term but keep their own styling.
pub fn restyle_button(doc: &mut Document, label: &str, term: &str, selected: bool) {
    let (background, color) = if selected {
        ("var(--accent)", "var(--bg-primary)")
    } else {
        ("var(--bg-tertiary)", "var(--text-primary)")
    };
    let target = {
        let buttons = doc.query_selector_all(".filter-btn");
        buttons
            .iter()
            .position(|b| b.text_content() == label)
            .or_else(|| buttons.iter().position(|b| b.attr("data-filter") == Some(term)))
    };
    let Some(target) = target else {
        return;
    };

    let mut index = 0;
    doc.for_each_match_mut(".filter-btn", |button| {
        if index == target {
            button.set_style("background", background);
            button.set_style("color", color);
        }
        index += 1;
    });
}

/// Show or hide every project card for the current filter set.
pub fn apply_visibility(doc: &mut Document, filters: &ActiveFilters) {
    doc.for_each_match_mut(".project-card", |card| {
        let visible = filters.matches(card_tags(card).as_slice());
        card.set_style("display", if visible { "block" } else { "none" });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_lowercases_and_removes() {
        let mut filters = ActiveFilters::default();
        assert!(filters.toggle("React"));
        assert_eq!(filters.terms(), &["react".to_string()]);
        assert!(!filters.toggle("react"));
        assert!(filters.is_empty());
    }

    #[test]
    fn test_empty_set_matches_everything() {
        let filters = ActiveFilters::default();
        assert!(filters.matches::<&str>(&[]));
        assert!(filters.matches(&["Go"]));
    }

    #[test]
    fn test_substring_match() {
        let mut filters = ActiveFilters::default();
        filters.toggle("script");
        assert!(filters.matches(&["TypeScript"]));
        assert!(filters.matches(&["Rust", "JavaScript"]));
        assert!(!filters.matches(&["Rust"]));
    }

    fn button_backgrounds(doc: &Document) -> Vec<(String, Option<String>)> {
        doc.query_selector_all(".filter-btn")
            .into_iter()
            .map(|b| (b.text_content(), b.style("background")))
            .collect()
    }

    #[test]
    fn test_restyles_only_clicked_case_variant() {
        let mut doc = Document::parse(
            r#"<div><div class="project-card"><span class="tech-tag">React</span><span class="tech-tag">react</span></div><div id="filterButtons"></div></div>"#,
        )
        .unwrap();
        assert_eq!(generate_filter_buttons(&mut doc).unwrap(), Some(2));

        restyle_button(&mut doc, "react", "react", true);
        let styles = button_backgrounds(&doc);
        assert_eq!(styles[0], ("React".to_string(), Some("var(--bg-tertiary)".to_string())));
        assert_eq!(styles[1], ("react".to_string(), Some("var(--accent)".to_string())));
    }

    #[test]
    fn test_restyle_falls_back_to_term() {
        let mut doc = Document::parse(
            r#"<div><div class="project-card"><span class="tech-tag">Go</span></div><div id="filterButtons"></div></div>"#,
        )
        .unwrap();
        generate_filter_buttons(&mut doc).unwrap();
        restyle_button(&mut doc, "GO", "go", true);
        assert_eq!(
            button_backgrounds(&doc),
            vec![("Go".to_string(), Some("var(--accent)".to_string()))]
        );
    }

    #[test]
    fn test_any_term_is_enough() {
        let mut filters = ActiveFilters::default();
        filters.toggle("react");
        filters.toggle("go");
        assert!(filters.matches(&["Go"]));
        assert!(filters.matches(&["React", "Node"]));
        assert!(!filters.matches(&["Python"]));
    }
}
