//! Snapshot source detection and loading.

mod detect;
mod read;

pub use detect::SnapshotSource;
pub use read::{load_snapshot, parse_snapshot};
