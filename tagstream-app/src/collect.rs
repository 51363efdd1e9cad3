//! Drives a [`PostSource`] and accumulates posts whose text contains the
//! hashtag marker.
//!
//! Degraded stream events are logged and echoed, then skipped; only
//! cancellation or the end of the stream stops collection. Memory growth is
//! unbounded while the stream runs, an accepted limitation.

use futures::StreamExt;
use tagstream_core::analyze::MARKER;
use tagstream_core::PostRow;
use tagstream_social::{PostSource, StreamEvent};
use tokio_util::sync::CancellationToken;

/// Token that trips when the process receives ctrl-c.
pub fn ctrl_c_token() -> CancellationToken {
    let token = CancellationToken::new();
    let trip = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            trip.cancel();
        }
    });
    token
}

/// Collect posts containing [`MARKER`] until the source disconnects or
/// `cancel` trips.
pub async fn collect_matching<S: PostSource>(
    source: &mut S,
    cancel: CancellationToken,
) -> Vec<PostRow> {
    let mut rows = Vec::new();
    let mut events = source.posts();

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::info!(collected = rows.len(), "collection cancelled");
                break;
            }
            event = events.next() => match event {
                None => {
                    tracing::info!(collected = rows.len(), "stream ended");
                    break;
                }
                Some(StreamEvent::Post(post)) => {
                    if post.text.contains(MARKER) {
                        rows.push(PostRow { text: post.text });
                    }
                }
                Some(StreamEvent::Degraded(reason)) => {
                    tracing::warn!(%reason, "stream degraded; continuing");
                    println!("stream error: {reason}");
                }
            }
        }
    }

    rows
}
