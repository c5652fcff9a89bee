//! Items API
//!
//! HTTP access to the items REST endpoints, organized by concern.

mod fetch;
mod item;
#[cfg(test)]
pub(crate) mod testing;

use async_trait::async_trait;

use crate::error::ApiResult;

pub use fetch::FetchTransport;
pub use item::{ItemClient, SaveOutcome};

pub const ACCEPT: &str = "Accept";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

// ========================
// Request / Response
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, &'static str)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Request without a body; only `Accept` is sent.
    pub fn new(method: Method, url: String) -> Self {
        Self {
            method,
            url,
            headers: vec![(ACCEPT, APPLICATION_JSON)],
            body: None,
        }
    }

    /// Attach a JSON body and the matching `Content-Type`.
    pub fn with_json_body(mut self, body: String) -> Self {
        self.headers.push((CONTENT_TYPE, APPLICATION_JSON));
        self.body = Some(body);
        self
    }

    #[cfg(test)]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| *value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// `Location` header, set by the backend on `201 Created`
    pub location: Option<String>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

// ========================
// Transport
// ========================

/// Sends one HTTP request and returns the raw response.
///
/// Futures are not `Send`: everything runs on the browser's event loop.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse>;
}
