use std::collections::HashMap;

use crate::dom::Document;

/// A section counts as reached this many units before its top edge.
pub const TRIGGER_MARGIN: f64 = 100.0;

/// Vertical position of each section, supplied by whoever lays the page out.
pub trait Layout {
    fn offset_top(&self, section_id: &str) -> Option<f64>;
}

impl Layout for HashMap<String, f64> {
    fn offset_top(&self, section_id: &str) -> Option<f64> {
        self.get(section_id).copied()
    }
}

/// The last section, in document order, whose top (less the margin) has
/// been scrolled past.
pub fn current_section<'a>(sections: &[(&'a str, f64)], scroll_y: f64) -> Option<&'a str> {
    sections
        .iter()
        .filter(|(_, top)| scroll_y >= top - TRIGGER_MARGIN)
        .map(|(id, _)| *id)
        .last()
}

/// Recompute the current section and move the `active` class onto its
/// navigation link. Sections without an id or a known offset are skipped.
pub fn update(doc: &mut Document, layout: &dyn Layout, scroll_y: f64) -> Option<String> {
    let current = {
        let sections: Vec<(&str, f64)> = doc
            .query_selector_all("section")
            .into_iter()
            .filter_map(|s| {
                let id = s.id()?;
                Some((id, layout.offset_top(id)?))
            })
            .collect();
        current_section(&sections, scroll_y).map(str::to_string)
    };

    doc.for_each_match_mut(".nav-link", |link| {
        link.remove_class("active");
        if current.is_some() && link.attr("data-section") == current.as_deref() {
            link.add_class("active");
        }
    });

    current
}

#[cfg(test)]
mod tests {
    use super::*;

    const OFFSETS: [(&str, f64); 3] = [("home", 0.0), ("about", 800.0), ("projects", 1600.0)];

    #[test]
    fn test_picks_lowest_passed_section() {
        assert_eq!(current_section(&OFFSETS, 850.0), Some("about"));
        assert_eq!(current_section(&OFFSETS, 0.0), Some("home"));
        assert_eq!(current_section(&OFFSETS, 3000.0), Some("projects"));
    }

    #[test]
    fn test_margin_pre_triggers() {
        assert_eq!(current_section(&OFFSETS, 699.0), Some("home"));
        assert_eq!(current_section(&OFFSETS, 700.0), Some("about"));
        assert_eq!(current_section(&OFFSETS, 1500.0), Some("projects"));
    }

    #[test]
    fn test_nothing_reached() {
        let offsets = [("about", 500.0)];
        assert_eq!(current_section(&offsets, 10.0), None);
    }

    #[test]
    fn test_update_moves_active_link() {
        let mut doc = Document::parse(
            r#"<body><ul id="nav-menu">
<li><button class="nav-link active" data-section="home">Home</button></li>
<li><button class="nav-link" data-section="about">About</button></li>
</ul><main id="main-content"><section id="home"></section><section id="about"></section></main></body>"#,
        )
        .unwrap();
        let layout: HashMap<String, f64> =
            [("home".to_string(), 0.0), ("about".to_string(), 800.0)].into();

        assert_eq!(update(&mut doc, &layout, 850.0).as_deref(), Some("about"));
        let active = doc.query_selector_all(".nav-link.active");
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].attr("data-section"), Some("about"));
    }
}
