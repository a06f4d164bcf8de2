//! The live page: the presentation tree plus the UI state layered on it.
//!
//! Boot order mirrors a browser load. The saved theme is applied first, then
//! the configuration is fetched; only when it arrives are the static anchors,
//! navigation and sections rendered. Post-render steps (filter buttons,
//! theme-selector sync, scroll spy) sit in the task queue until the nodes
//! they need exist.

use log::{error, info};
use std::collections::HashMap;
use std::sync::Arc;

use crate::dom::Document;
use crate::error::{Error, Result};
use crate::filter::{self, ActiveFilters};
use crate::form::{self, ContactField, ContactSubmission};
use crate::loader::{self, ConfigSource};
use crate::models::site::SiteConfig;
use crate::render;
use crate::scroll_spy;
use crate::tasks::{Deferred, TaskQueue};
use crate::theme::{self, ThemeController};

/// Base page shipped with the binary.
pub const SKELETON: &str = include_str!("../website/skeleton.html");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootState {
    /// Configuration not loaded; the skeleton's loading state is all there is.
    Unrendered,
    Rendered,
}

/// User interactions the page reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    NavClick(String),
    Scroll { y: f64 },
    FilterClick(String),
    ToggleMenu,
    ChangeTheme(String),
    SubmitContact(ContactSubmission),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Ignored,
    /// The host should smooth-scroll to this section.
    ScrollTo(String),
    ActiveSection(Option<String>),
    FilterToggled { term: String, selected: bool },
    MenuOpen(bool),
    ThemeChanged(String),
    Validated(Vec<ContactField>),
}

pub struct Page {
    doc: Document,
    config: Option<Arc<SiteConfig>>,
    state: BootState,
    theme: ThemeController,
    filters: ActiveFilters,
    tasks: TaskQueue,
    scroll_spy: bool,
    layout: HashMap<String, f64>,
}

impl Page {
    pub fn new(doc: Document, theme: ThemeController) -> Self {
        Page {
            doc,
            config: None,
            state: BootState::Unrendered,
            theme,
            filters: ActiveFilters::default(),
            tasks: TaskQueue::default(),
            scroll_spy: false,
            layout: HashMap::new(),
        }
    }

    pub fn from_skeleton(skeleton: &str, theme: ThemeController) -> Result<Self> {
        Ok(Page::new(Document::parse(skeleton)?, theme))
    }

    /// Apply the persisted theme and queue the selector sync.
    pub fn init_theme(&mut self) -> Result<()> {
        let applied = self.theme.load(&mut self.doc)?;
        info!("Applied saved theme: {}", applied);
        self.tasks.schedule(Deferred::SyncThemeSelector);
        self.flush()
    }

    /// Full load: theme, configuration, render. A configuration that cannot
    /// be fetched or parsed is logged and leaves the page unrendered.
    pub async fn boot(&mut self, source: &ConfigSource) -> Result<BootState> {
        self.init_theme()?;

        let config = match loader::load(source).await {
            Ok(config) => config,
            Err(e) => {
                error!("Error loading config from {}: {}", source, e);
                return Ok(self.state);
            }
        };

        self.render(Arc::new(config))?;
        Ok(self.state)
    }

    /// Render an already-loaded configuration into the page.
    pub fn render(&mut self, config: Arc<SiteConfig>) -> Result<()> {
        render::update_static_elements(&config, &mut self.doc)?;
        render::create_navigation(&config, &mut self.doc)?;
        render::create_sections(&config, &mut self.doc)?;

        self.config = Some(config);
        self.state = BootState::Rendered;
        self.tasks.schedule(Deferred::GenerateFilterButtons);
        self.tasks.schedule(Deferred::EnableScrollSpy);
        self.tasks.schedule(Deferred::SyncThemeSelector);
        self.flush()
    }

    /// Run every queued task whose dependency is now in the tree.
    pub fn flush(&mut self) -> Result<()> {
        for task in self.tasks.take_ready(&self.doc) {
            match task {
                Deferred::GenerateFilterButtons => {
                    if let Some(count) = filter::generate_filter_buttons(&mut self.doc)? {
                        info!("Generated {} filter buttons", count);
                    }
                }
                Deferred::SyncThemeSelector => {
                    let saved = self.theme.saved();
                    theme::sync_selector(&mut self.doc, &saved);
                }
                Deferred::EnableScrollSpy => self.scroll_spy = true,
            }
        }
        Ok(())
    }

    pub fn dispatch(&mut self, event: Event) -> Result<Outcome> {
        match event {
            Event::NavClick(id) => self.scroll_to_section(&id),
            Event::Scroll { y } => {
                if !self.scroll_spy {
                    return Ok(Outcome::Ignored);
                }
                let current = scroll_spy::update(&mut self.doc, &self.layout, y);
                Ok(Outcome::ActiveSection(current))
            }
            Event::FilterClick(tech) => {
                let term = tech.to_lowercase();
                let selected = self.filters.toggle(&term);
                filter::restyle_button(&mut self.doc, &tech, &term, selected);
                filter::apply_visibility(&mut self.doc, &self.filters);
                Ok(Outcome::FilterToggled { term, selected })
            }
            Event::ToggleMenu => {
                let open = self.doc.require_mut(".nav-links")?.toggle_class("show");
                Ok(Outcome::MenuOpen(open))
            }
            Event::ChangeTheme(name) => {
                self.theme.change_theme(&mut self.doc, &name)?;
                theme::sync_selector(&mut self.doc, &name);
                Ok(Outcome::ThemeChanged(name))
            }
            Event::SubmitContact(submission) => {
                let invalid = form::validate(&submission);
                form::show_errors(&mut self.doc, &invalid);
                Ok(Outcome::Validated(invalid))
            }
        }
    }

    fn scroll_to_section(&mut self, id: &str) -> Result<Outcome> {
        if self.doc.get_element_by_id(id).is_none() {
            return Err(Error::MissingAnchor(format!("#{}", id)));
        }
        self.doc.require_mut(".nav-links")?.remove_class("show");
        Ok(Outcome::ScrollTo(id.to_string()))
    }

    /// Section offsets reported by the host's layout, used by scroll spy.
    pub fn set_layout(&mut self, layout: HashMap<String, f64>) {
        self.layout = layout;
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn config(&self) -> Option<&SiteConfig> {
        self.config.as_deref()
    }

    pub fn state(&self) -> BootState {
        self.state
    }

    pub fn active_filters(&self) -> &ActiveFilters {
        &self.filters
    }

    pub fn pending_tasks(&self) -> &[Deferred] {
        self.tasks.pending()
    }

    pub fn scroll_spy_enabled(&self) -> bool {
        self.scroll_spy
    }

    pub fn to_html(&self) -> String {
        self.doc.to_html()
    }
}
