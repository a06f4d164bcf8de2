use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to fetch configuration: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("invalid configuration document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("malformed markup: {0}")]
    Markup(String),

    #[error("missing page anchor `{0}`")]
    MissingAnchor(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("server error: {0}")]
    Server(String),

    #[error("invalid settings file: {0}")]
    Settings(#[from] toml::de::Error),
}

impl From<quick_xml::Error> for Error {
    fn from(e: quick_xml::Error) -> Self {
        Error::Markup(e.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(e: quick_xml::events::attributes::AttrError) -> Self {
        Error::Markup(e.to_string())
    }
}
