//! Prelude module for convenient imports.
//!
//! ```ignore
//! use explore_core::prelude::*;
//! ```

pub use crate::{
    CallResult, Endpoint, Error, HttpClient, Method, Operation, ParamValue, QueryParams,
    RenderedRequest, Request, Response, Result,
};
