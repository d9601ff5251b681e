//! HTTP response handling.

use std::collections::HashMap;

use bytes::Bytes;
use serde_json::Value;

use crate::{CallResult, Error};

/// HTTP response with status, headers, and body.
#[derive(Debug, Clone)]
pub struct Response<B = Bytes> {
    status: u16,
    headers: HashMap<String, String>,
    body: B,
}

impl<B> Response<B> {
    /// Creates a new response.
    #[must_use]
    pub fn new(status: u16, headers: HashMap<String, String>, body: B) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Response headers.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Response body.
    #[must_use]
    pub const fn body(&self) -> &B {
        &self.body
    }

    /// Consume into body.
    #[must_use]
    pub fn into_body(self) -> B {
        self.body
    }

    /// Status is 2xx.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

impl Response<Bytes> {
    /// Deserialize the response body as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails.
    pub fn json<T: serde::de::DeserializeOwned>(self) -> crate::Result<T> {
        crate::from_json(&self.body)
    }

    /// Normalize into a [`CallResult`].
    ///
    /// A 2xx body is parsed as JSON (an empty body is `null`); any other
    /// status gives `HTTP Error: {status}` without looking at the body.
    #[must_use]
    pub fn into_call_result(self) -> CallResult {
        if !self.is_success() {
            return Error::http(self.status).into();
        }
        if self.body.is_empty() {
            return CallResult::Success(Value::Null);
        }
        self.json::<Value>().into()
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};
    use serde_json::json;

    use super::*;

    fn response(status: u16, body: &'static str) -> Response {
        Response::new(status, HashMap::new(), Bytes::from_static(body.as_bytes()))
    }

    #[test]
    fn response_basic() {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        let response = Response::new(200, headers, Bytes::from(r#"{"id":1}"#));

        assert_eq!(response.status(), 200);
        assert_eq!(response.header("content-type"), Some("application/json"));
        assert!(response.is_success());
        assert!(!Response::new(404, HashMap::new(), Bytes::new()).is_success());
        assert!(!Response::new(199, HashMap::new(), Bytes::new()).is_success());
        assert!(!Response::new(300, HashMap::new(), Bytes::new()).is_success());
    }

    #[test]
    fn success_is_parsed() {
        let result = response(200, r#"{"total_count": 2, "results": []}"#).into_call_result();
        check!(result == CallResult::Success(json!({"total_count": 2, "results": []})));

        let result = response(201, "[1, 2, 3]").into_call_result();
        check!(result == CallResult::Success(json!([1, 2, 3])));
    }

    #[test]
    fn empty_success_is_null() {
        check!(response(204, "").into_call_result() == CallResult::Success(Value::Null));
    }

    #[test]
    fn whitespace_body_is_not_json() {
        let_assert!(CallResult::Failure(message) = response(200, " \r\n").into_call_result());
        check!(message.starts_with("JSON deserialization error"));
    }

    #[test]
    fn error_status_ignores_body() {
        let result = response(404, r#"{"error_code": "NotFound"}"#).into_call_result();
        check!(result == CallResult::Failure("HTTP Error: 404".to_string()));

        let result = response(500, "<html>oops</html>").into_call_result();
        check!(result == CallResult::Failure("HTTP Error: 500".to_string()));
    }

    #[test]
    fn malformed_success_is_a_parse_failure() {
        let result = response(200, r#"{"results": [1, 2"#).into_call_result();
        let_assert!(CallResult::Failure(message) = result);
        check!(message.starts_with("JSON deserialization error at "));
    }
}
