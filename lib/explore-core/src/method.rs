//! HTTP method of catalog operations.

use derive_more::Display;

/// Request method. Every catalog operation reads, so `GET` is the only one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Method {
    /// Retrieve a resource.
    #[display("GET")]
    Get,
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
        }
    }
}
