use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

use crate::core::{AUTH_HEADER, IfirmaError};

/// Request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Status and raw body of an HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The two calls the submission flow makes.
///
/// `authorization` is the complete `IAPIS ...` header value.
pub trait Transport {
    /// POST a JSON body.
    fn post_json(
        &self,
        url: &str,
        authorization: &str,
        body: Vec<u8>,
    ) -> Result<HttpResponse, IfirmaError>;

    /// GET a PDF document.
    fn get_pdf(&self, url: &str, authorization: &str) -> Result<HttpResponse, IfirmaError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn post_json(
        &self,
        url: &str,
        authorization: &str,
        body: Vec<u8>,
    ) -> Result<HttpResponse, IfirmaError> {
        (**self).post_json(url, authorization, body)
    }

    fn get_pdf(&self, url: &str, authorization: &str) -> Result<HttpResponse, IfirmaError> {
        (**self).get_pdf(url, authorization)
    }
}

/// Blocking `reqwest` transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// # Errors
    ///
    /// Returns `IfirmaError::Transport` if the TLS backend cannot be set up.
    pub fn new(timeout: Duration) -> Result<Self, IfirmaError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("ifaktura/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| IfirmaError::Transport(e.to_string()))?;
        Ok(Self { client })
    }

    fn finish(resp: reqwest::blocking::Response) -> Result<HttpResponse, IfirmaError> {
        let status = resp.status().as_u16();
        let body = resp
            .bytes()
            .map_err(|e| IfirmaError::Transport(e.to_string()))?;
        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}

impl Transport for HttpTransport {
    fn post_json(
        &self,
        url: &str,
        authorization: &str,
        body: Vec<u8>,
    ) -> Result<HttpResponse, IfirmaError> {
        let resp = self
            .client
            .post(url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json; charset=UTF-8")
            .header(AUTH_HEADER, authorization)
            .body(body)
            .send()
            .map_err(|e| IfirmaError::Transport(e.to_string()))?;
        Self::finish(resp)
    }

    fn get_pdf(&self, url: &str, authorization: &str) -> Result<HttpResponse, IfirmaError> {
        let resp = self
            .client
            .get(url)
            .header(ACCEPT, "application/pdf")
            .header(AUTH_HEADER, authorization)
            .send()
            .map_err(|e| IfirmaError::Transport(e.to_string()))?;
        Self::finish(resp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range() {
        let ok = HttpResponse {
            status: 204,
            body: Vec::new(),
        };
        let not_found = HttpResponse {
            status: 404,
            body: Vec::new(),
        };
        assert!(ok.is_success());
        assert!(!not_found.is_success());
    }

    #[test]
    fn client_builds_with_timeout() {
        assert!(HttpTransport::new(DEFAULT_TIMEOUT).is_ok());
    }
}
