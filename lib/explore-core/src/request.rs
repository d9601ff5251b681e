//! Transport-level HTTP request.
//!
//! A [`RenderedRequest`](crate::RenderedRequest) resolved against a base URL
//! and decorated with headers, ready for an [`HttpClient`](crate::HttpClient).
//!
//! # Example
//!
//! ```
//! use explore_core::{Method, Request};
//!
//! let url = "https://daten.sg.ch/api/explore/v2.1/catalog/datasets".parse().unwrap();
//! let request = Request::builder(Method::Get, url)
//!     .header("Content-Type", "application/json")
//!     .build();
//! assert_eq!(request.header("Content-Type"), Some("application/json"));
//! ```

use std::collections::BTreeMap;

use crate::Method;

/// An HTTP request with method, URL and headers. Catalog calls carry no body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    method: Method,
    url: url::Url,
    headers: BTreeMap<String, String>,
}

impl Request {
    /// Creates a new [`RequestBuilder`].
    #[must_use]
    pub fn builder(method: Method, url: url::Url) -> RequestBuilder {
        RequestBuilder::new(method, url)
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Request URL.
    #[must_use]
    pub fn url(&self) -> &url::Url {
        &self.url
    }

    /// Request headers.
    #[must_use]
    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Consume into (method, url, headers).
    #[must_use]
    pub fn into_parts(self) -> (Method, url::Url, BTreeMap<String, String>) {
        (self.method, self.url, self.headers)
    }
}

/// Builder for constructing [`Request`] instances.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    url: url::Url,
    headers: BTreeMap<String, String>,
}

impl RequestBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new(method: Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: BTreeMap::new(),
        }
    }

    /// Sets a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets multiple headers.
    #[must_use]
    pub fn headers<K, V>(mut self, headers: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Builds the [`Request`].
    #[must_use]
    pub fn build(self) -> Request {
        Request {
            method: self.method,
            url: self.url,
            headers: self.headers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_builder_basic() {
        let url = url::Url::parse("https://daten.sg.ch/api/explore/v2.1/catalog/facets")
            .expect("valid URL");
        let request = Request::builder(Method::Get, url)
            .header("Host", "daten.sg.ch")
            .headers([("Content-Type", "application/json")])
            .build();

        assert_eq!(request.method(), Method::Get);
        assert_eq!(
            request.url().as_str(),
            "https://daten.sg.ch/api/explore/v2.1/catalog/facets"
        );
        assert_eq!(request.header("Host"), Some("daten.sg.ch"));
        assert_eq!(request.header("Content-Type"), Some("application/json"));
        assert_eq!(request.headers().len(), 2);
    }

    #[test]
    fn header_overrides_previous_value() {
        let url = url::Url::parse("https://example.com").expect("valid URL");
        let request = Request::builder(Method::Get, url)
            .header("User-Agent", "a")
            .header("User-Agent", "b")
            .build();
        assert_eq!(request.header("User-Agent"), Some("b"));
    }
}
