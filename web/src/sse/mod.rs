//! SSE HTTP handler for the web layer.
//!
//! This module contains only the Axum handler for the event stream endpoint.
//! Frame production (Generator, Ticker, StreamRegistry) lives in the `sse`
//! crate so it can be exercised without an HTTP stack.

pub mod handler;
