//! Server-Sent Events stream production.
//!
//! This crate owns the event-stream framing contract and the per-connection
//! producer that feeds it. It knows nothing about routing; the `web` crate
//! turns a frame receiver into an HTTP response.
//!
//! # Architecture
//!
//! - **Frame**: an optional event name plus a single-line payload, serialized as
//!   `event: <name>\ndata: <payload>\n\n` (the `event:` line is omitted for
//!   default events).
//! - **Generator**: a pure state machine yielding the fixed six-frame sequence:
//!   three `error` frames, two timestamp frames and an `end` frame.
//! - **Ticker**: one tokio task per connection that paces the generator on a
//!   timer and sends frames into a bounded channel. The task stops as soon as
//!   the receiving side is dropped.
//! - **StreamRegistry**: tracks live stream tasks so cleanup after a client
//!   disconnect is observable.
//!
//! # Modules
//!
//! - `connection`: StreamRegistry, Registration guard and type-safe ConnectionId
//! - `error`: Error type for frame construction
//! - `frame`: Frame and EventKind definitions
//! - `generator`: The frame sequence state machine
//! - `ticker`: Pacing task and its outcome

pub mod connection;
pub mod error;
pub mod frame;
pub mod generator;
pub mod ticker;

pub use connection::StreamRegistry;
pub use frame::Frame;
pub use ticker::{StreamOutcome, Ticker};
