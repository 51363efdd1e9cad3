//! CSV-backed tables: raw collected posts and the ranked hashtag counts.
//!
//! Writes are whole-file and non-transactional; a crash mid-write leaves a
//! truncated file with no recovery path. Missing or corrupt files surface as
//! [`TableError`] and abort the requested action.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// One collected post, persisted under the `Tweet` header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRow {
    #[serde(rename = "Tweet")]
    pub text: String,
}

/// One ranked entry, persisted under the `Hashtag,Count` headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashtagCount {
    #[serde(rename = "Hashtag")]
    pub tag: String,
    #[serde(rename = "Count")]
    pub count: u64,
}

#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read table {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("failed to write table {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

fn load_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, TableError> {
    let read_err = |source: csv::Error| TableError::Read {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = csv::Reader::from_path(path).map_err(&read_err)?;
    reader
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()
        .map_err(read_err)
}

fn save_rows<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), TableError> {
    let write_err = |source: csv::Error| TableError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = csv::Writer::from_path(path).map_err(&write_err)?;
    for row in rows {
        writer.serialize(row).map_err(&write_err)?;
    }
    writer.flush().map_err(|e| write_err(csv::Error::from(e)))
}

/// Load the raw post table (`Tweet` column).
pub fn load_raw(path: &Path) -> Result<Vec<PostRow>, TableError> {
    load_rows(path)
}

/// Persist the raw post table, replacing any previous file.
pub fn save_raw(path: &Path, rows: &[PostRow]) -> Result<(), TableError> {
    save_rows(path, rows)
}

/// Load the ranked hashtag table (`Hashtag,Count` columns).
pub fn load_ranked(path: &Path) -> Result<Vec<HashtagCount>, TableError> {
    load_rows(path)
}

/// Persist the ranked hashtag table, replacing any previous file.
pub fn save_ranked(path: &Path, rows: &[HashtagCount]) -> Result<(), TableError> {
    save_rows(path, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn raw_round_trip_preserves_rows() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("tweets.csv");
        let rows = vec![
            PostRow { text: "I love #cats and #dogs".into() },
            PostRow { text: "plain text, no tags".into() },
            PostRow { text: "quoted, \"tricky\" #value".into() },
        ];

        save_raw(&path, &rows).unwrap();
        let loaded = load_raw(&path).unwrap();
        assert_eq!(loaded, rows);
    }

    #[test]
    fn ranked_round_trip_preserves_order_and_counts() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("top.csv");
        let rows = vec![
            HashtagCount { tag: "#cats".into(), count: 3 },
            HashtagCount { tag: "#dogs".into(), count: 2 },
            HashtagCount { tag: "#rust".into(), count: 2 },
        ];

        save_ranked(&path, &rows).unwrap();
        let loaded = load_ranked(&path).unwrap();
        assert_eq!(loaded, rows);
    }

    #[test]
    fn ranked_file_carries_expected_headers() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("top.csv");
        save_ranked(&path, &[HashtagCount { tag: "#a".into(), count: 1 }]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("Hashtag,Count"));
        assert_eq!(lines.next(), Some("#a,1"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let err = load_ranked(&tmp.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, TableError::Read { .. }));
    }

    #[test]
    fn corrupt_count_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("top.csv");
        std::fs::write(&path, "Hashtag,Count\n#a,notanumber\n").unwrap();
        assert!(load_ranked(&path).is_err());
    }
}
