// ox-webdav/src/error.rs
use crate::http::HttpError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WebDavError>;

#[derive(Debug, Error)]
pub enum WebDavError {
    /// The request never produced a response (DNS, TCP, TLS, timeout, body read)
    #[error("connection failed: {0}")]
    Connection(#[from] HttpError),

    #[error("207 Multi-Status expected, got {status} {reason}. Not a WebDAV URL?")]
    Protocol { status: u16, reason: String },

    #[error("malformed WebDAV response: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("malformed WebDAV response: {0}")]
    Malformed(String),

    #[error("malformed WebDAV response: <prop> has no <{element}> element")]
    MissingElement { element: &'static str },
}

impl WebDavError {
    /// Status code of a rejected request, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            WebDavError::Protocol { status, .. } => Some(*status),
            WebDavError::Connection(e) => e.status,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_error_message() {
        let err = WebDavError::Protocol {
            status: 401,
            reason: "Unauthorized".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "207 Multi-Status expected, got 401 Unauthorized. Not a WebDAV URL?"
        );
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn test_missing_element_message() {
        let err = WebDavError::MissingElement { element: "module" };
        assert!(err.to_string().contains("<module>"));
        assert_eq!(err.status(), None);
    }
}
