//! Body deserialization utilities.

use crate::{Error, Result};

/// Content type sent with every request.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Deserialize JSON bytes, keeping the path of the failing element.
///
/// # Errors
///
/// Returns [`Error::JsonDeserialization`] if the bytes are not valid JSON for `T`.
///
/// # Example
///
/// ```
/// use explore_core::from_json;
///
/// let value: serde_json::Value = from_json(br#"{"total_count": 1}"#).expect("json");
/// assert_eq!(value["total_count"], 1);
///
/// let err = from_json::<serde_json::Value>(b"{").expect_err("truncated");
/// assert!(err.to_string().starts_with("JSON deserialization error"));
/// ```
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let deserializer = &mut serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(deserializer).map_err(|err| {
        let path = err.path().to_string();
        Error::json_deserialization(path, err.into_inner().to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, serde::Deserialize)]
    struct Page {
        #[allow(dead_code)]
        total_count: u64,
    }

    #[test]
    fn from_json_reports_path() {
        let err = from_json::<Page>(br#"{"total_count": "many"}"#).expect_err("type mismatch");
        let Error::JsonDeserialization { path, .. } = err else {
            panic!("unexpected error: {err}");
        };
        assert_eq!(path, "total_count");
    }
}
