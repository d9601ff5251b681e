//! Async client for OpenDataSoft Explore v2.1 catalogs.
//!
//! Wraps the 14 read-only catalog operations of the St. Gallen open-data
//! portal behind [`ExploreClient`]. Each call renders its request with
//! [`explore_core`], sends it through a pooled hyper transport and resolves to
//! a [`CallResult`]: the parsed JSON payload or a failure message.
//!
//! # Example
//!
//! ```no_run
//! use explore::prelude::*;
//!
//! # async fn run() -> explore::Result<()> {
//! let client = ExploreClient::builder().with_logging().build()?;
//!
//! let params = QueryParams::new().where_clause("publisher = \"Stadt St.Gallen\"");
//! if let CallResult::Success(page) = client.get_catalog_datasets(&params).await {
//!     println!("{} datasets", page["total_count"]);
//! }
//! # Ok(())
//! # }
//! ```

mod api;
mod client;
mod config;
mod connector;
mod executor;
pub mod middleware;
pub mod prelude;

pub use api::{ExploreClient, ExploreClientBuilder};
pub use client::{BoxedService, HyperClient, HyperClientBuilder};
pub use config::{ClientConfig, ClientConfigBuilder, DEFAULT_BASE_URL, USER_AGENT};
pub use connector::https_connector;
pub use executor::Executor;

// Re-export tower for middleware composition
pub use tower;

// Re-export core types
pub use explore_core::{
    CallResult, Endpoint, Error, HttpClient, JSON_CONTENT_TYPE, Method, Operation, ParamKind,
    ParamSpec, ParamValue, QueryParams, RenderedRequest, Request, RequestBuilder, Response,
    Result, from_json,
};

// Re-export http types for status codes and headers
pub use explore_core::{StatusCode, header};
