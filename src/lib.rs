//! Scoring, ranking and risk detection for operations dashboard snapshots.
//!
//! The `engine` functions are pure and take borrowed data. State changes
//! between cycles go through `driver`, and `report` turns engine output
//! into plain text or JSON.

pub mod driver;
pub mod engine;
pub mod error;
pub mod logging;
pub mod model;
pub mod report;

pub use error::{ScoreError, ScoreResult, SnapshotError};
