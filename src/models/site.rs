use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The site configuration document (`config.json`).
/// Loaded once, then shared read-only with every renderer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub site: SiteMeta,
    #[serde(default)]
    pub themes: Vec<ThemeOption>,
    pub personal: Personal,
    #[serde(default)]
    pub section_order: Vec<String>,
    #[serde(default)]
    pub sections: HashMap<String, SectionMeta>,
    #[serde(default)]
    pub experience: Vec<Job>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub contact: Contact,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteMeta {
    pub title: String,
    pub logo: String,
    #[serde(default)]
    pub copyright: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ThemeOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Personal {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub passion: String,
    #[serde(default)]
    pub bio: Vec<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub social: Vec<SocialLink>,
}

/// A labeled figure on the about section, e.g. `5+` / `Years Experience`.
/// Numbers are kept as written in the document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Stat {
    #[serde(deserialize_with = "string_or_number")]
    pub number: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionMeta {
    #[serde(default)]
    pub title: String,
    pub nav_label: String,
    #[serde(default)]
    pub cta: Option<CallToAction>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CallToAction {
    pub primary: String,
    pub secondary: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Job {
    pub title: String,
    pub company: String,
    pub period: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillCategory {
    #[serde(default)]
    pub icon: String,
    pub title: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub message: ContactMessage,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactMessage {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub subtext: String,
}

impl SiteConfig {
    /// Metadata for a section id; ids without an entry get an empty record.
    pub fn section(&self, id: &str) -> SectionMeta {
        self.sections.get(id).cloned().unwrap_or_default()
    }

    /// Navigation label for a section, falling back to the id itself.
    pub fn nav_label<'a>(&'a self, id: &'a str) -> &'a str {
        self.sections
            .get(id)
            .map(|s| s.nav_label.as_str())
            .unwrap_or(id)
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_camel_case_document() {
        let json = r#"{
            "site": {"title": "T", "logo": "<JD />", "copyright": "c"},
            "themes": [{"value": "github", "label": "GitHub"}],
            "personal": {"name": "Jane", "title": "Dev",
                         "stats": [{"number": 50, "label": "Projects"}, {"number": "5+", "label": "Years"}]},
            "sectionOrder": ["home", "about"],
            "sections": {"home": {"navLabel": "Home", "cta": {"primary": "Work", "secondary": "Talk"}},
                         "about": {"title": "About Me", "navLabel": "About"}}
        }"#;
        let config: SiteConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.section_order, vec!["home", "about"]);
        assert_eq!(config.nav_label("about"), "About");
        assert_eq!(config.personal.stats[0].number, "50");
        assert_eq!(config.personal.stats[1].number, "5+");
        assert!(config.projects.is_empty());
        assert_eq!(config.section("home").cta.unwrap().primary, "Work");
    }

    #[test]
    fn test_missing_section_meta_falls_back_to_id() {
        let config = SiteConfig::default();
        assert_eq!(config.nav_label("blog"), "blog");
        assert_eq!(config.section("blog").title, "");
    }

    #[test]
    fn test_nav_label_borrows_from_id_or_config() {
        let mut config = SiteConfig::default();
        config.sections.insert(
            "about".to_string(),
            SectionMeta {
                nav_label: "About Me".to_string(),
                ..SectionMeta::default()
            },
        );
        let ids = vec!["about".to_string(), "blog".to_string()];
        let labels: Vec<&str> = ids.iter().map(|id| config.nav_label(id)).collect();
        assert_eq!(labels, vec!["About Me", "blog"]);
    }
}
