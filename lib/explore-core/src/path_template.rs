//! Endpoint path templates.

use crate::encoding::encode_path_segment;
use crate::{Error, Result};

/// A path template with `{name}` placeholders, e.g.
/// `/catalog/datasets/{dataset_id}/records/{record_id}`.
///
/// A placeholder does not have to fill a whole segment:
/// `/catalog/exports/dcat{dcat_ap_format}` is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathTemplate(&'static str);

impl PathTemplate {
    /// Create a new path template.
    #[must_use]
    pub const fn new(template: &'static str) -> Self {
        Self(template)
    }

    /// Get the template string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Placeholder names, in order of appearance.
    pub fn placeholders(&self) -> impl Iterator<Item = &'static str> {
        let template = self.0;
        template
            .match_indices('{')
            .filter_map(move |(start, _)| {
                let rest = template.get(start + 1..)?;
                let end = rest.find('}')?;
                rest.get(..end)
            })
    }

    /// Substitute the placeholders with positional arguments, each encoded as
    /// a single path segment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] if the number of arguments does not
    /// match the number of placeholders, or if an argument would form a `.` or
    /// `..` segment. URL resolution removes those, so the request would reach
    /// another endpoint.
    pub fn expand(&self, args: &[&str]) -> Result<String> {
        let expected = self.placeholders().count();
        if expected != args.len() {
            return Err(Error::invalid_request(format!(
                "path `{}` expects {expected} argument(s), got {}",
                self.0,
                args.len()
            )));
        }

        let mut path = String::with_capacity(self.0.len());
        let mut rest = self.0;
        for arg in args {
            let (Some(open), Some(close)) = (rest.find('{'), rest.find('}')) else {
                break;
            };
            path.push_str(rest.get(..open).unwrap_or_default());
            path.push_str(&encode_path_segment(arg));
            rest = rest.get(close + 1..).unwrap_or_default();
        }
        path.push_str(rest);

        if path.split('/').any(|segment| matches!(segment, "." | "..")) {
            return Err(Error::invalid_request(format!(
                "path `{path}` contains a dot segment"
            )));
        }

        Ok(path)
    }
}

impl std::fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PathTemplate {
    fn as_ref(&self) -> &str {
        self.0
    }
}
