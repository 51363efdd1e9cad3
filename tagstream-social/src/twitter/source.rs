//! Capability trait separating post production from post consumption.
//!
//! The collector only ever sees a stream of [`StreamEvent`]s, so tests can
//! drive it from an in-memory stream instead of a live connection.

use crate::twitter::types::Post;
use futures::stream::BoxStream;

/// One observable occurrence on a post stream.
#[derive(Debug, Clone)]
pub enum StreamEvent {
    /// A decoded post.
    Post(Post),
    /// A stream-level problem (bad payload, transport hiccup, error status).
    /// Reported and skipped; the stream itself keeps going where it can.
    Degraded(String),
}

/// A producer of post events. The stream ends when the underlying source
/// disconnects; there is no reconnection at this layer.
pub trait PostSource {
    fn posts(&mut self) -> BoxStream<'_, StreamEvent>;
}
