//! Working tree status classification
//!
//! This module holds the core of the report: turning per-path fact records
//! into classified, ordered report entries.
//!
//! ## Components
//!
//! - `fact`: per-path fact records and their invariants
//! - `classifier`: the ordered decision tables mapping facts to report entries
//! - `aggregator`: partitioning and ordering of classified entries
//! - `report`: rendering of the grouped report

pub mod aggregator;
pub mod classifier;
pub mod fact;
pub mod report;
