//! Core types for the Explore open-data catalog client.
//!
//! This crate turns typed calls into wire requests and responses into a
//! single outcome type, without touching the network:
//! - [`Operation`] and [`Endpoint`] - The endpoint catalog
//! - [`QueryParams`] - Caller-supplied optional parameters
//! - [`ParamSpec`] and [`ParameterSet`] - Declared parameters and the values that go on the wire
//! - [`PathTemplate`] and [`render`] - Path expansion and query rendering into a
//!   [`RenderedRequest`]
//! - [`CallResult`] - `Success(json)` or `Failure(message)`
//! - [`HttpClient`], [`Request`], [`Response`] - The transport seam
//! - [`Error`] and [`Result`] - Internal error handling
//!
//! # Example
//!
//! ```
//! use explore_core::{Operation, QueryParams};
//!
//! let params = QueryParams::new().select("").where_clause("speed>30").limit(25);
//! let request = Operation::QueryDatasetRecords
//!     .render(&["roads"], &params)
//!     .expect("render");
//!
//! assert_eq!(request.path(), "/catalog/datasets/roads/records");
//! assert_eq!(request.query(), "?where=speed%3E30&limit=25");
//! ```

mod body;
mod catalog;
mod client;
pub mod encoding;
mod error;
mod method;
mod param;
mod path_template;
pub mod prelude;
mod query;
mod render;
mod request;
mod response;
mod result;

pub use body::{JSON_CONTENT_TYPE, from_json};
pub use catalog::{Endpoint, Operation};
pub use client::HttpClient;
pub use error::{Error, Result};
pub use method::Method;
pub use param::{Encoding, ParamDefault, ParamKind, ParamSpec, ParamValue, ParameterSet};
pub use path_template::PathTemplate;
pub use query::QueryParams;
pub use render::{RenderedRequest, render};
pub use request::{Request, RequestBuilder};
pub use response::Response;
pub use result::CallResult;

// Re-export http crate types for status codes and headers
pub use http::{StatusCode, header};
