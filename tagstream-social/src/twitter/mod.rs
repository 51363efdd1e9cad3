//! Twitter/X sampled-stream integration surface.
//!
//! Submodules provide the streaming HTTP client, the `PostSource` capability
//! trait, and the typed wire models for stream payloads.

pub mod source;
pub mod stream;
pub mod types;

pub use source::{PostSource, StreamEvent};
pub use stream::{SampleStream, SocialError};
