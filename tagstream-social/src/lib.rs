//! Social network clients used by tagstream.
//!
//! Only the Twitter/X sampled-stream pipeline is implemented. The
//! [`twitter::PostSource`] trait is the seam the collector consumes, so the
//! rest of the workspace never touches the network directly.

pub mod twitter;

pub use twitter::types::Post;
pub use twitter::{PostSource, SampleStream, SocialError, StreamEvent};
