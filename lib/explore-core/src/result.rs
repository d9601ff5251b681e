//! The single outcome type of every catalog operation.

use serde_json::Value;

use crate::Error;

/// Outcome of a catalog call.
///
/// Exactly one of payload or message exists. Callers branch on the variant
/// instead of handling errors: HTTP status failures, transport faults and
/// parse failures all end up as [`CallResult::Failure`].
///
/// # Example
///
/// ```
/// use explore_core::CallResult;
///
/// let result = CallResult::Failure("HTTP Error: 404".to_string());
/// match result {
///     CallResult::Success(payload) => println!("{payload}"),
///     CallResult::Failure(message) => assert_eq!(message, "HTTP Error: 404"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum CallResult {
    /// Parsed JSON payload of a 2xx response.
    Success(Value),
    /// Human-readable description of what went wrong.
    Failure(String),
}

impl CallResult {
    /// Returns `true` for [`CallResult::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for [`CallResult::Failure`].
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Payload of a success.
    #[must_use]
    pub const fn payload(&self) -> Option<&Value> {
        match self {
            Self::Success(payload) => Some(payload),
            Self::Failure(_) => None,
        }
    }

    /// Message of a failure.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(message) => Some(message),
        }
    }

    /// Convert into a standard `Result`.
    ///
    /// # Errors
    ///
    /// Returns the failure message.
    pub fn into_result(self) -> std::result::Result<Value, String> {
        match self {
            Self::Success(payload) => Ok(payload),
            Self::Failure(message) => Err(message),
        }
    }
}

impl From<Error> for CallResult {
    fn from(err: Error) -> Self {
        Self::Failure(err.to_string())
    }
}

impl From<crate::Result<Value>> for CallResult {
    fn from(result: crate::Result<Value>) -> Self {
        match result {
            Ok(payload) => Self::Success(payload),
            Err(err) => err.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};
    use serde_json::json;

    use super::*;

    #[test]
    fn success_carries_only_payload() {
        let result = CallResult::Success(json!({"total_count": 3}));
        check!(result.is_success());
        check!(!result.is_failure());
        check!(result.payload() == Some(&json!({"total_count": 3})));
        check!(result.message().is_none());
    }

    #[test]
    fn failure_carries_only_message() {
        let result = CallResult::from(Error::http(404));
        check!(result.is_failure());
        check!(result.payload().is_none());
        check!(result.message() == Some("HTTP Error: 404"));
    }

    #[test]
    fn from_result() {
        let_assert!(CallResult::Success(payload) = CallResult::from(Ok(json!([1, 2]))));
        check!(payload == json!([1, 2]));

        let_assert!(
            CallResult::Failure(message) = CallResult::from(Err(Error::Timeout))
        );
        check!(message == "request timeout");
    }

    #[test]
    fn into_result() {
        check!(CallResult::Success(json!(null)).into_result() == Ok(json!(null)));
        check!(
            CallResult::Failure("boom".to_string()).into_result() == Err("boom".to_string())
        );
    }
}
