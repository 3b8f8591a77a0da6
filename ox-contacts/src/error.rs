// ox-contacts/src/error.rs
use ox_webdav::WebDavError;
use thiserror::Error;

/// Problems with the user-supplied connection settings, detected before any network activity
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("URL argument is required")]
    MissingUrl,

    #[error("username is required")]
    MissingUsername,

    #[error("This is not a valid HTTP(S) URL: unsupported scheme '{0}'")]
    UnsupportedScheme(String),

    #[error("This is not a valid HTTP(S) URL: {url} ({reason})")]
    InvalidUrl { url: String, reason: String },
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    WebDav(#[from] WebDavError),

    #[error("session already closed")]
    SessionClosed,

    #[error("failed to write vCard output: {0}")]
    Io(#[from] std::io::Error),
}
