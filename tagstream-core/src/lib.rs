//! Core logic for tagstream: hashtag ranking, the guessing game, and the
//! CSV tables both are built on.
//!
//! Everything in here is synchronous and free of network I/O so it can be
//! exercised directly in unit tests; the binary wires it to the stream
//! client and the console.

pub mod analyze;
pub mod game;
pub mod table;

pub use analyze::{rank_hashtags, MARKER, TOP_LIMIT};
pub use game::{parse_choice, Choice, Game, Round, Verdict};
pub use table::{HashtagCount, PostRow, TableError};
