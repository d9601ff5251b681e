//! Percent-encoding for path segments and query values.
//!
//! Both sets escape everything outside the RFC 3986 unreserved characters
//! (`A-Z a-z 0-9 - . _ ~`). A space becomes `%20`, never `+`.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters escaped in a single path segment, `/` included.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Characters escaped in a query parameter value.
pub const QUERY_VALUE_ENCODE_SET: &AsciiSet = PATH_SEGMENT_ENCODE_SET;

/// Encode one path segment so that it can never split the path.
#[must_use]
pub fn encode_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT_ENCODE_SET).to_string()
}

/// Encode a query parameter value. Names are emitted as-is.
#[must_use]
pub fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE_ENCODE_SET).to_string()
}
