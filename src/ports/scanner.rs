//! Scanner port (trait).
//! Defines the interface for capturing a directory snapshot.

use crate::domain::DirSnapshot;
use anyhow::Result;
use std::path::Path;

/// Port for taking a point-in-time capture of a directory listing.
pub trait DirScanner {
    /// Capture the current state of `root`.
    fn scan(&self, root: &Path) -> Result<DirSnapshot>;
}
