#![forbid(unsafe_code)]
//! Load-once, read-only entity store.
//!
//! The loader materializes the [`DatasetIndex`] from a file-per-entity
//! directory tree at startup; after the final join the index is never
//! mutated, so readers need no locks.

mod index;
mod info;
mod loader;

pub use index::DatasetIndex;
pub use info::{compute_dataset_info, DatasetCounts, DatasetInfo};
pub use loader::{load_dataset, LoadError, LoadReport, LoadStats};

pub const CRATE_NAME: &str = "armory-store";
