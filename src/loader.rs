use rocket::tokio::fs;
use std::fmt;
use std::path::PathBuf;

use crate::error::Result;
use crate::models::site::SiteConfig;

/// Relative location of the configuration document.
pub const DEFAULT_CONFIG: &str = "./config.json";

/// Where the configuration document lives.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    Path(PathBuf),
    Url(String),
}

impl ConfigSource {
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            ConfigSource::Url(raw.to_string())
        } else {
            ConfigSource::Path(PathBuf::from(raw))
        }
    }
}

impl Default for ConfigSource {
    fn default() -> Self {
        ConfigSource::parse(DEFAULT_CONFIG)
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Path(p) => write!(f, "{}", p.display()),
            ConfigSource::Url(u) => f.write_str(u),
        }
    }
}

/// Fetch and decode the configuration document. Transport and parse
/// failures are both returned; callers decide whether to render at all.
pub async fn load(source: &ConfigSource) -> Result<SiteConfig> {
    match source {
        ConfigSource::Path(path) => {
            let raw = fs::read_to_string(path).await?;
            Ok(serde_json::from_str(&raw)?)
        }
        ConfigSource::Url(url) => {
            let config = reqwest::get(url)
                .await?
                .error_for_status()?
                .json::<SiteConfig>()
                .await?;
            Ok(config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Write;

    #[test]
    fn test_source_detection() {
        assert_eq!(
            ConfigSource::parse("https://example.com/config.json"),
            ConfigSource::Url("https://example.com/config.json".into())
        );
        assert_eq!(
            ConfigSource::parse("site/config.json"),
            ConfigSource::Path(PathBuf::from("site/config.json"))
        );
        assert_eq!(ConfigSource::default().to_string(), "./config.json");
    }

    #[rocket::async_test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"site": {{"title": "T", "logo": "L"}}, "personal": {{"name": "N", "title": "Dev"}}, "sectionOrder": ["home"]}}"#
        )
        .unwrap();
        let source = ConfigSource::Path(file.path().to_path_buf());
        let config = load(&source).await.unwrap();
        assert_eq!(config.site.title, "T");
        assert_eq!(config.section_order, vec!["home"]);
    }

    #[rocket::async_test]
    async fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = ConfigSource::Path(dir.path().join("nope.json"));
        assert!(matches!(load(&source).await, Err(Error::Io(_))));
    }

    #[rocket::async_test]
    async fn test_load_malformed_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let source = ConfigSource::Path(file.path().to_path_buf());
        assert!(matches!(load(&source).await, Err(Error::Parse(_))));
    }
}
