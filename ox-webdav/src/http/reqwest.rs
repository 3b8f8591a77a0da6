// ox-webdav/src/http/reqwest.rs
use super::{HttpClient, HttpError, HttpRequest, HttpResponse};
use async_trait::async_trait;
use std::time::Duration;

#[cfg(feature = "reqwest")]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

#[cfg(feature = "reqwest")]
impl ReqwestClient {
    /// Build a client whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> Result<Self, HttpError> {
        let inner = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HttpError::new(e.to_string()))?;

        Ok(Self { inner })
    }
}

#[cfg(feature = "reqwest")]
#[async_trait]
impl HttpClient for ReqwestClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let method = reqwest::Method::from_bytes(request.method.as_bytes())
            .map_err(|e| HttpError::new(format!("invalid method {}: {}", request.method, e)))?;

        let mut req = self.inner.request(method, &request.url);
        for (name, value) in &request.headers {
            req = req.header(*name, value.as_str());
        }

        let resp = req
            .body(request.body)
            .send()
            .await
            .map_err(|e| HttpError::new(e.to_string()))?;

        let status = resp.status();
        let status_code = status.as_u16();

        let body = resp
            .bytes()
            .await
            .map_err(|e| HttpError {
                status: Some(status_code),
                message: e.to_string(),
            })?
            .to_vec();

        Ok(HttpResponse {
            status: status_code,
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}
