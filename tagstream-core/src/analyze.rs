//! Hashtag extraction and frequency ranking.
//!
//! A token counts as a hashtag iff its first character is [`MARKER`]; the
//! token is taken verbatim, so trailing punctuation, repeated markers, and
//! case differences all produce distinct tags. Ties in the ranking keep
//! first-seen order, which makes the output deterministic for a given input
//! sequence.

use crate::table::HashtagCount;
use std::collections::HashMap;

/// The character that identifies a hashtag token.
pub const MARKER: char = '#';

/// Maximum number of entries in a ranked table.
pub const TOP_LIMIT: usize = 1000;

/// Count hashtag occurrences across `texts` and return the top
/// [`TOP_LIMIT`] tags, count-descending, ties in first-seen order.
pub fn rank_hashtags<'a, I>(texts: I) -> Vec<HashtagCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<&str, u64> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();

    for text in texts {
        for token in text.split_whitespace() {
            if token.starts_with(MARKER) {
                let count = counts.entry(token).or_insert(0);
                if *count == 0 {
                    first_seen.push(token);
                }
                *count += 1;
            }
        }
    }

    let mut ranked: Vec<HashtagCount> = first_seen
        .into_iter()
        .map(|tag| HashtagCount {
            tag: tag.to_string(),
            count: counts[tag],
        })
        .collect();
    // sort_by is stable, so equal counts stay in first-seen order.
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(TOP_LIMIT);
    ranked
}
