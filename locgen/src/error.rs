//! All error types for the locgen crate.
//!
//! Every failure aborts the current generation run. There is no partial
//! success and no retry: callers report the error and regenerate from
//! scratch on the next run.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("template syntax error: {0}")]
    Syntax(String),

    #[error("invalid key shape: {0}")]
    KeyShape(String),

    #[error("duplicate key `{key}` in locale `{locale}`")]
    DuplicateKey { key: String, locale: String },

    #[error("path conflict at `{0}`: key is both a value and a namespace prefix")]
    PathConflict(String),

    #[error("unbound variable `{variable}` in template for `{key}`")]
    UnboundVariable { variable: String, key: String },

    #[error("{platform} backend enabled but locale `{locale}` declares no {platform} tag")]
    MissingLocaleTag { platform: String, locale: String },

    #[error("invalid locale: {0}")]
    InvalidLocale(String),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("XML write error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a new template syntax error
    pub fn syntax(message: impl Into<String>) -> Self {
        Error::Syntax(message.into())
    }

    /// Creates a new key shape error
    pub fn key_shape(message: impl Into<String>) -> Self {
        Error::KeyShape(message.into())
    }
}
