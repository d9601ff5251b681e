//! Tower middleware layers for the transport.
//!
//! Layers wrap the pooled [`HyperClient`](crate::HyperClient) service and see
//! every transport request after the executor has resolved its URL and fixed
//! headers.
//!
//! ```no_run
//! use explore::HyperClient;
//! use explore::middleware::LoggingLayer;
//!
//! let client = HyperClient::builder()
//!     .layer(LoggingLayer::debug())
//!     .build();
//! ```

mod logging;

pub use logging::{LogLevel, Logging, LoggingLayer};

pub use tower::{Layer, ServiceBuilder};
