// ox-webdav/src/client.rs
use crate::error::{Result, WebDavError};
use crate::http::{HttpClient, HttpRequest};
use base64::prelude::*;
use tracing::debug;

/// 207 Multi-Status, the only answer a PROPFIND may get
pub const MULTI_STATUS: u16 = 207;

const CONTENT_TYPE: &str = r#"application/xml; charset="utf-8""#;

/// Value of an `Authorization` header for HTTP Basic authentication
pub fn basic_auth(username: &str, password: &str) -> String {
    format!(
        "Basic {}",
        BASE64_STANDARD.encode(format!("{}:{}", username, password))
    )
}

pub struct WebDavClient<C: HttpClient> {
    http: C,
    base_url: String,
    authorization: String,
}

impl<C: HttpClient> WebDavClient<C> {
    /// `base_url` is scheme, authority and base path, without a trailing slash
    pub fn new(http: C, base_url: String, authorization: String) -> Self {
        Self {
            http,
            base_url,
            authorization,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a server-relative path
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Issue a PROPFIND and return the multi-status body
    pub async fn propfind(&self, path: &str, body: String) -> Result<Vec<u8>> {
        let url = self.url_for(path);
        debug!(%url, bytes = body.len(), "PROPFIND");

        let request = HttpRequest {
            method: "PROPFIND",
            url,
            headers: vec![
                ("Authorization", self.authorization.clone()),
                ("Content-Type", CONTENT_TYPE.to_string()),
            ],
            body: body.into_bytes(),
        };

        let response = self.http.send(request).await?;
        debug!(status = response.status, bytes = response.body.len(), "PROPFIND response");

        if response.status != MULTI_STATUS {
            return Err(WebDavError::Protocol {
                status: response.status,
                reason: response.reason,
            });
        }

        Ok(response.body)
    }
}
