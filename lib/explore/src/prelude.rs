//! Prelude module for convenient imports.
//!
//! ```
//! use explore::prelude::*;
//! ```

pub use crate::{
    CallResult, ClientConfig, Error, ExploreClient, HttpClient, HyperClient, Operation,
    QueryParams, Result,
};
