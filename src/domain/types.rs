//! Pure data types for the directory monitoring domain.
//! No I/O; chrono is used for display formatting only.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Metadata record for a single file at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSnapshot {
    pub path: PathBuf,
    pub len: u64,
    /// Last-modified time, epoch milliseconds.
    pub modified_ms: i64,
}

impl FileSnapshot {
    /// The per-file diff predicate: a file counts as changed iff its
    /// size or its mtime differs between two captures.
    pub fn differs_from(&self, other: &FileSnapshot) -> bool {
        self.len != other.len || self.modified_ms != other.modified_ms
    }
}

/// Immutable point-in-time capture of a directory's file listing.
///
/// Keys are root-relative paths with `/` separators, so iteration order
/// (and therefore diff output) is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirSnapshot {
    pub root: PathBuf,
    /// When the capture was taken, epoch milliseconds.
    pub taken_at_ms: i64,
    pub files: BTreeMap<String, FileSnapshot>,
}

impl DirSnapshot {
    pub fn empty(root: PathBuf, taken_at_ms: i64) -> Self {
        Self {
            root,
            taken_at_ms,
            files: BTreeMap::new(),
        }
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn total_len(&self) -> u64 {
        self.files.values().map(|f| f.len).sum()
    }
}

/// The category of a detected change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Created,
    Changed,
    Deleted,
}

impl ChangeKind {
    pub fn label(self) -> &'static str {
        match self {
            ChangeKind::Created => "created",
            ChangeKind::Changed => "changed",
            ChangeKind::Deleted => "deleted",
        }
    }

    /// One-character marker used by the console view.
    pub fn sigil(self) -> char {
        match self {
            ChangeKind::Created => '+',
            ChangeKind::Changed => '~',
            ChangeKind::Deleted => '-',
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One detected change between two snapshots.
///
/// Invariants (upheld by the constructors):
/// - Created: `before` is None, `after` is Some
/// - Deleted: `before` is Some, `after` is None
/// - Changed: both are Some
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub kind: ChangeKind,
    /// Root-relative path key of the affected file.
    pub key: String,
    pub before: Option<FileSnapshot>,
    pub after: Option<FileSnapshot>,
    /// When the change was observed, epoch milliseconds.
    pub observed_at_ms: i64,
}

impl ChangeEvent {
    pub fn created(key: String, after: FileSnapshot, observed_at_ms: i64) -> Self {
        Self {
            kind: ChangeKind::Created,
            key,
            before: None,
            after: Some(after),
            observed_at_ms,
        }
    }

    pub fn changed(
        key: String,
        before: FileSnapshot,
        after: FileSnapshot,
        observed_at_ms: i64,
    ) -> Self {
        Self {
            kind: ChangeKind::Changed,
            key,
            before: Some(before),
            after: Some(after),
            observed_at_ms,
        }
    }

    pub fn deleted(key: String, before: FileSnapshot, observed_at_ms: i64) -> Self {
        Self {
            kind: ChangeKind::Deleted,
            key,
            before: Some(before),
            after: None,
            observed_at_ms,
        }
    }

    /// Size to display for this event: the after-size where one exists,
    /// the before-size for deletions.
    pub fn size(&self) -> u64 {
        self.after
            .as_ref()
            .or(self.before.as_ref())
            .map(|f| f.len)
            .unwrap_or(0)
    }

    pub fn relative_time(&self) -> String {
        let now = chrono::Utc::now().timestamp_millis();
        let diff = (now - self.observed_at_ms) / 1000;

        if diff < 5 {
            "just now".to_string()
        } else if diff < 60 {
            format!("{}s ago", diff)
        } else if diff < 3600 {
            let mins = diff / 60;
            format!("{} minute{} ago", mins, if mins == 1 { "" } else { "s" })
        } else {
            let hours = diff / 3600;
            format!("{} hour{} ago", hours, if hours == 1 { "" } else { "s" })
        }
    }
}

/// Human-readable size for the table and console views.
pub fn human_size(len: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if len < KB {
        format!("{} B", len)
    } else if len < MB {
        format!("{:.1} KB", len as f64 / KB as f64)
    } else if len < GB {
        format!("{:.1} MB", len as f64 / MB as f64)
    } else {
        format!("{:.1} GB", len as f64 / GB as f64)
    }
}
