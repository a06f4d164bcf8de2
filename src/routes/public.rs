use rocket::form::Form;
use rocket::http::Status;
use rocket::response::content::RawHtml;
use rocket::serde::json::Json;
use rocket::State;

use super::Preview;
use crate::error::{Error, Result};
use crate::form::ContactSubmission;
use crate::models::site::SiteConfig;
use crate::page::{BootState, Event, Page};

fn respond(page: Result<Page>) -> std::result::Result<RawHtml<String>, Status> {
    match page {
        Ok(page) => {
            if page.state() == BootState::Unrendered {
                log::warn!("Serving unrendered page: no configuration loaded");
            }
            Ok(RawHtml(page.to_html()))
        }
        Err(Error::MissingAnchor(anchor)) => {
            log::warn!("Preview requested missing anchor {}", anchor);
            Err(Status::NotFound)
        }
        Err(e) => {
            log::error!("Failed to render page: {}", e);
            Err(Status::InternalServerError)
        }
    }
}

// ── Page ───────────────────────────────────────────────

/// Theme change, filter clicks, menu toggle and navigation, in that order.
#[get("/?<filter>&<theme>&<menu>&<section>")]
pub fn index(
    preview: &State<Preview>,
    filter: Vec<String>,
    theme: Option<String>,
    menu: Option<bool>,
    section: Option<String>,
) -> std::result::Result<RawHtml<String>, Status> {
    let mut events = Vec::new();
    if let Some(theme) = theme {
        events.push(Event::ChangeTheme(theme));
    }
    events.extend(filter.into_iter().map(Event::FilterClick));
    if menu.unwrap_or(false) {
        events.push(Event::ToggleMenu);
    }
    if let Some(section) = section {
        events.push(Event::NavClick(section));
    }
    respond(preview.page(events))
}

// ── Contact form ───────────────────────────────────────

#[post("/contact", data = "<form>")]
pub fn contact(
    preview: &State<Preview>,
    form: Form<ContactSubmission>,
) -> std::result::Result<RawHtml<String>, Status> {
    respond(preview.page(vec![Event::SubmitContact(form.into_inner())]))
}

// ── Configuration document ─────────────────────────────

#[get("/config.json")]
pub fn config_json(preview: &State<Preview>) -> Option<Json<SiteConfig>> {
    preview.config.as_ref().map(|c| Json(SiteConfig::clone(c)))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![index, contact, config_json]
}
