pub mod public;

use std::sync::Arc;

use crate::error::Result;
use crate::models::preference::PreferenceStore;
use crate::models::site::SiteConfig;
use crate::page::{Event, Page};
use crate::theme::ThemeController;

/// Everything the preview server needs to rebuild the page per request.
/// The configuration is loaded once at launch and never changes.
pub struct Preview {
    pub config: Option<Arc<SiteConfig>>,
    pub skeleton: String,
    pub store: Arc<dyn PreferenceStore>,
    pub default_theme: String,
}

impl Preview {
    /// A freshly loaded page with `events` replayed in order.
    pub fn page(&self, events: Vec<Event>) -> Result<Page> {
        let theme = ThemeController::with_default(Arc::clone(&self.store), &self.default_theme);
        let mut page = Page::from_skeleton(&self.skeleton, theme)?;
        page.init_theme()?;

        if let Some(ref config) = self.config {
            page.render(Arc::clone(config))?;
        }
        for event in events {
            page.dispatch(event)?;
        }
        Ok(page)
    }
}
