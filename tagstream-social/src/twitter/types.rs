use serde::{Deserialize, Serialize};

/// One newline-delimited message from the v2 sampled stream.
///
/// Error payloads and keep-alives carry no `data` member, so the field is
/// optional rather than failing the whole decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamMessage {
    #[serde(default)]
    pub data: Option<Post>,
}

/// The tweet object inside a stream message, reduced to the fields we use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub text: String,

    #[serde(default)]
    pub author_id: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}
