//! Theme selection.
//!
//! The chosen theme is written as `data-theme` on `<body>` and persisted
//! under the `theme` preference so the next page load starts with it.

use log::info;
use std::sync::Arc;

use crate::dom::Document;
use crate::error::Result;
use crate::models::preference::PreferenceStore;

pub const THEME_KEY: &str = "theme";
pub const DEFAULT_THEME: &str = "github";

pub struct ThemeController {
    store: Arc<dyn PreferenceStore>,
    default: String,
}

impl ThemeController {
    pub fn with_default(store: Arc<dyn PreferenceStore>, default: &str) -> Self {
        ThemeController {
            store,
            default: default.to_string(),
        }
    }

    /// Persisted theme, or the default when nothing is stored.
    pub fn saved(&self) -> String {
        self.store.get_or(THEME_KEY, &self.default)
    }

    /// Apply the saved theme to the page root. Returns the theme applied.
    pub fn load(&self, doc: &mut Document) -> Result<String> {
        let theme = self.saved();
        doc.body_mut()?.set_attr("data-theme", &theme);
        Ok(theme)
    }

    pub fn change_theme(&self, doc: &mut Document, name: &str) -> Result<()> {
        doc.body_mut()?.set_attr("data-theme", name);
        self.store.set(THEME_KEY, name)?;
        info!("Theme changed to {}", name);
        Ok(())
    }
}

/// Mark the selector option for `name` as selected.
pub fn sync_selector(doc: &mut Document, name: &str) {
    doc.for_each_match_mut(".theme-selector select option", |option| {
        if option.attr("value") == Some(name) {
            option.set_attr("selected", "");
        } else {
            option.remove_attr("selected");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_selector_selects_one_option() {
        let mut doc = Document::parse(
            r#"<div class="theme-selector"><select><option value="github" selected="">GitHub</option><option value="dracula">Dracula</option></select></div>"#,
        )
        .unwrap();
        sync_selector(&mut doc, "dracula");
        let selected = doc.query_selector_all("option");
        assert_eq!(selected[0].attr("selected"), None);
        assert_eq!(selected[1].attr("selected"), Some(""));
    }
}
