//! File watcher port (trait).
//! The poll loop is the source of truth; the watcher only lets it wake
//! early instead of sleeping out the full interval.

/// Port for OS-level change notification.
pub trait FileWatcher: Send {
    /// Check if the OS has reported changes since the last clear (non-blocking).
    fn has_changes(&self) -> bool;

    /// Clear the changes flag.
    fn clear_changes(&self);
}
