//! Client for the Twitter/X v2 sampled stream.
//!
//! The endpoint delivers newline-delimited JSON over a long-lived HTTP
//! response. Bearer tokens are sanitised before use and never logged; log
//! events carry statuses and counts only.

use crate::twitter::source::{PostSource, StreamEvent};
use crate::twitter::types::{Post, StreamMessage};
use async_stream::stream;
use futures::stream::BoxStream;
use futures::StreamExt;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

const SAMPLE_STREAM_URL: &str = "https://api.twitter.com/2/tweets/sample/stream";

#[derive(Debug, Error)]
pub enum SocialError {
    #[error("client build failed: {0}")]
    Build(String),
    #[error("invalid bearer token: {0}")]
    Credential(String),
    #[error("undecodable stream payload: {0}")]
    Decode(String),
}

/// Live connection to the sampled stream, yielding [`StreamEvent`]s.
pub struct SampleStream {
    client: Client,
    bearer: String,
}

impl SampleStream {
    pub fn new(bearer_token: &str) -> Result<Self, SocialError> {
        let bearer = sanitize_bearer(bearer_token)?;
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| SocialError::Build(e.to_string()))?;
        Ok(Self { client, bearer })
    }
}

impl PostSource for SampleStream {
    fn posts(&mut self) -> BoxStream<'_, StreamEvent> {
        let client = self.client.clone();
        let bearer = self.bearer.clone();

        Box::pin(stream! {
            let resp = match client
                .get(SAMPLE_STREAM_URL)
                .bearer_auth(&bearer)
                .send()
                .await
            {
                Ok(resp) => resp,
                Err(e) => {
                    yield StreamEvent::Degraded(format!("connect failed: {e}"));
                    return;
                }
            };

            let status = resp.status();
            if !status.is_success() {
                let body = resp.text().await.unwrap_or_default();
                yield StreamEvent::Degraded(format!(
                    "stream rejected: {status}: {}",
                    snip(&body)
                ));
                return;
            }
            tracing::info!(%status, "sample stream connected");

            let mut chunks = resp.bytes_stream();
            let mut buf: Vec<u8> = Vec::new();
            while let Some(chunk) = chunks.next().await {
                let chunk = match chunk {
                    Ok(chunk) => chunk,
                    Err(e) => {
                        yield StreamEvent::Degraded(format!("transport error: {e}"));
                        continue;
                    }
                };
                buf.extend_from_slice(&chunk);

                while let Some(pos) = buf.iter().position(|&b| b == b'\n') {
                    let line: Vec<u8> = buf.drain(..=pos).collect();
                    let line = String::from_utf8_lossy(&line);
                    let line = line.trim();
                    if line.is_empty() {
                        // keep-alive heartbeat
                        continue;
                    }
                    match decode_line(line) {
                        Ok(post) => yield StreamEvent::Post(post),
                        Err(e) => yield StreamEvent::Degraded(e.to_string()),
                    }
                }
            }
            tracing::info!("sample stream disconnected");
        })
    }
}

/// Decode one non-empty stream line into a [`Post`].
pub fn decode_line(line: &str) -> Result<Post, SocialError> {
    let msg: StreamMessage =
        serde_json::from_str(line).map_err(|e| SocialError::Decode(e.to_string()))?;
    msg.data
        .ok_or_else(|| SocialError::Decode("message carries no data object".into()))
}

fn sanitize_bearer(raw: &str) -> Result<String, SocialError> {
    let mut s = raw
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .to_string();
    s.retain(|ch| !ch.is_ascii_whitespace());

    if s.is_empty() {
        return Err(SocialError::Credential("token is empty".into()));
    }
    if !s.is_ascii() {
        return Err(SocialError::Credential("token contains non-ASCII bytes".into()));
    }
    if s.bytes().any(|b| b < 0x20 || b == 0x7F) {
        return Err(SocialError::Credential(
            "token contains control characters".into(),
        ));
    }
    Ok(s)
}

fn snip(body: &str) -> String {
    let mut snip = body.to_string();
    if snip.len() > 500 {
        snip.truncate(500);
        snip.push_str("...");
    }
    snip
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_well_formed_line() {
        let line = r#"{"data":{"id":"123","text":"hello #world","lang":"en"}}"#;
        let post = decode_line(line).unwrap();
        assert_eq!(post.id, "123");
        assert_eq!(post.text, "hello #world");
        assert_eq!(post.lang.as_deref(), Some("en"));
    }

    #[test]
    fn line_without_data_is_an_error() {
        let line = r#"{"errors":[{"title":"operational-disconnect"}]}"#;
        let err = decode_line(line).unwrap_err();
        assert!(matches!(err, SocialError::Decode(_)));
    }

    #[test]
    fn garbage_line_is_an_error() {
        assert!(decode_line("not json at all").is_err());
    }

    #[test]
    fn sanitize_strips_quotes_and_whitespace() {
        let tok = sanitize_bearer("  \"AAAA bbbb\n\"  ").unwrap();
        assert_eq!(tok, "AAAAbbbb");
    }

    #[test]
    fn sanitize_rejects_empty_and_non_ascii() {
        assert!(sanitize_bearer("   ").is_err());
        assert!(sanitize_bearer("tök").is_err());
    }
}
