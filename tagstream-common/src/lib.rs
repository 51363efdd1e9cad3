//! Shared plumbing for the tagstream workspace.
//!
//! Currently this is just the centralised tracing/logging setup in
//! [`observability`] plus the workspace-wide application name. It is kept
//! dependency-light so every crate can pull it in without dragging the
//! async or HTTP stacks along.

pub mod observability;

/// Logical application name, used for log file names and data directories.
pub const APP_NAME: &str = "tagstream";
