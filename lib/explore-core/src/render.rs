//! Request rendering.
//!
//! [`render`] is a pure function: identical inputs always produce identical
//! bytes.

use url::Url;

use crate::{Error, Method, ParameterSet, PathTemplate, Result};

/// A fully rendered request: method, encoded path and query string.
///
/// Built once per call and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenderedRequest {
    method: Method,
    path: String,
    query: String,
}

impl RenderedRequest {
    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Path with each substituted segment percent-encoded.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query string, empty or starting with `?`.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Path followed by the query string.
    #[must_use]
    pub fn path_and_query(&self) -> String {
        format!("{}{}", self.path, self.query)
    }

    /// Resolve against `base`, keeping the base path as a prefix.
    ///
    /// `https://host/api/v2.1` + `/catalog/datasets` gives
    /// `https://host/api/v2.1/catalog/datasets`. A query or fragment on
    /// `base` is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] if URL normalization would change the
    /// rendered path.
    pub fn url(&self, base: &Url) -> Result<Url> {
        let path = format!("{}{}", base.path().trim_end_matches('/'), self.path);

        let mut url = base.clone();
        url.set_path(&path);
        url.set_query(self.query.strip_prefix('?'));
        url.set_fragment(None);

        if url.path() != path {
            return Err(Error::invalid_request(format!(
                "path `{}` does not survive URL normalization",
                self.path
            )));
        }
        Ok(url)
    }
}

/// Render `template` with its path arguments and the filtered parameters.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidRequest`] if `path_args` does not match the
/// template's placeholders.
pub fn render(
    method: Method,
    template: PathTemplate,
    path_args: &[&str],
    params: &ParameterSet,
) -> Result<RenderedRequest> {
    Ok(RenderedRequest {
        method,
        path: template.expand(path_args)?,
        query: params.to_query_string(),
    })
}
