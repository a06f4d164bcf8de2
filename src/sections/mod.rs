//! Section templates.
//! Each known section id maps to one pure function over the slice of the
//! site configuration it needs. Unknown ids render nothing.

mod about;
mod contact;
mod experience;
mod home;
mod projects;
mod skills;

use crate::models::site::SiteConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Home,
    About,
    Experience,
    Projects,
    Skills,
    Contact,
    Unknown,
}

impl SectionKind {
    pub fn from_id(id: &str) -> Self {
        match id {
            "home" => SectionKind::Home,
            "about" => SectionKind::About,
            "experience" => SectionKind::Experience,
            "projects" => SectionKind::Projects,
            "skills" => SectionKind::Skills,
            "contact" => SectionKind::Contact,
            _ => SectionKind::Unknown,
        }
    }

    /// Extra class on the `<section>` element.
    pub fn class(self) -> Option<&'static str> {
        match self {
            SectionKind::Home => Some("hero"),
            _ => None,
        }
    }

    pub fn render(self, config: &SiteConfig) -> String {
        match self {
            SectionKind::Home => home::render(&config.personal, &config.section("home")),
            SectionKind::About => about::render(&config.personal, &config.section("about")),
            SectionKind::Experience => {
                experience::render(&config.experience, &config.section("experience"))
            }
            SectionKind::Projects => {
                projects::render(&config.projects, &config.section("projects"))
            }
            SectionKind::Skills => skills::render(&config.skills, &config.section("skills")),
            SectionKind::Contact => contact::render(
                &config.personal,
                &config.contact,
                &config.section("contact"),
            ),
            SectionKind::Unknown => String::new(),
        }
    }
}

pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Shared macOS-style window dots used by the code and terminal panels.
const TERMINAL_HEADER: &str = r#"<div class="terminal-header">
    <div class="terminal-dot dot-red"></div>
    <div class="terminal-dot dot-yellow"></div>
    <div class="terminal-dot dot-green"></div>
</div>"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_ids() {
        for id in ["home", "about", "experience", "projects", "skills", "contact"] {
            assert_ne!(SectionKind::from_id(id), SectionKind::Unknown, "{}", id);
        }
        assert_eq!(SectionKind::from_id("blog"), SectionKind::Unknown);
        assert_eq!(SectionKind::from_id("Home"), SectionKind::Unknown);
    }

    #[test]
    fn test_unknown_renders_empty() {
        assert!(SectionKind::Unknown.render(&SiteConfig::default()).is_empty());
    }

    #[test]
    fn test_only_home_is_hero() {
        assert_eq!(SectionKind::Home.class(), Some("hero"));
        assert_eq!(SectionKind::About.class(), None);
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape(r#"<JD /> & "co""#), "&lt;JD /&gt; &amp; &quot;co&quot;");
    }
}
