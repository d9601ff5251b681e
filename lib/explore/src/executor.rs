//! Call executor.
//!
//! Resolves a [`RenderedRequest`] against the base URL, attaches the fixed
//! header set, performs the exchange and folds every outcome into a
//! [`CallResult`].

use explore_core::header::{CONTENT_TYPE, HOST, USER_AGENT};
use tracing::{debug, warn};
use url::Url;

use crate::config::USER_AGENT as USER_AGENT_VALUE;
use crate::{CallResult, Error, HttpClient, JSON_CONTENT_TYPE, RenderedRequest, Request, Result};

/// Sends rendered requests through an [`HttpClient`].
#[derive(Debug, Clone)]
pub struct Executor<C> {
    client: C,
    base_url: Url,
    headers: Vec<(&'static str, String)>,
}

impl<C> Executor<C> {
    /// Create an executor for `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] if `base_url` has no host to put in
    /// the `Host` header.
    pub fn new(client: C, base_url: Url) -> Result<Self> {
        let host = match (base_url.host_str(), base_url.port()) {
            (Some(host), Some(port)) => format!("{host}:{port}"),
            (Some(host), None) => host.to_string(),
            (None, _) => {
                return Err(Error::invalid_request(format!(
                    "base URL `{base_url}` has no host"
                )));
            }
        };

        let headers = vec![
            (HOST.as_str(), host),
            (CONTENT_TYPE.as_str(), JSON_CONTENT_TYPE.to_string()),
            (USER_AGENT.as_str(), USER_AGENT_VALUE.to_string()),
        ];

        Ok(Self {
            client,
            base_url,
            headers,
        })
    }

    /// Base URL every rendered path is appended to.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Headers sent on every call.
    #[must_use]
    pub fn headers(&self) -> &[(&'static str, String)] {
        &self.headers
    }

    /// The underlying transport.
    #[must_use]
    pub const fn client(&self) -> &C {
        &self.client
    }

    /// Build the transport request for `rendered`.
    ///
    /// # Errors
    ///
    /// Returns an error if the resolved URL does not parse.
    pub fn prepare(&self, rendered: &RenderedRequest) -> Result<Request> {
        let url = rendered.url(&self.base_url)?;
        Ok(Request::builder(rendered.method(), url)
            .headers(self.headers.iter().map(|(name, value)| (*name, value.as_str())))
            .build())
    }
}

impl<C: HttpClient> Executor<C> {
    /// Perform one exchange. Never fails: errors come back as
    /// [`CallResult::Failure`].
    pub async fn execute(&self, rendered: &RenderedRequest) -> CallResult {
        debug!(
            method = %rendered.method(),
            path_and_query = %rendered.path_and_query(),
            "executing request"
        );

        let outcome = match self.prepare(rendered) {
            Ok(request) => match self.client.execute(request).await {
                Ok(response) => response.into_call_result(),
                Err(err) => err.into(),
            },
            Err(err) => err.into(),
        };

        if let CallResult::Failure(message) = &outcome {
            warn!(path = %rendered.path(), %message, "call failed");
        }
        outcome
    }
}
