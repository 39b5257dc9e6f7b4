//! std::fs implementation of the DirScanner port.

use crate::domain::{DirSnapshot, FileSnapshot};
use crate::ports::DirScanner;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Scanner walking a directory tree with `std::fs::read_dir`.
///
/// Unreadable entries and symlinks are skipped rather than failing the
/// whole scan. Only the watched root itself must be readable.
pub struct FsScanner {
    recursive: bool,
    include_hidden: bool,
    ignore: Vec<String>,
}

impl FsScanner {
    pub fn new(recursive: bool, include_hidden: bool, ignore: Vec<String>) -> Self {
        Self {
            recursive,
            include_hidden,
            ignore,
        }
    }

    fn skip_name(&self, name: &str) -> bool {
        if !self.include_hidden && name.starts_with('.') {
            return true;
        }
        self.ignore.iter().any(|pat| pat == name)
    }

    fn walk(
        &self,
        root: &Path,
        dir: &Path,
        files: &mut std::collections::BTreeMap<String, FileSnapshot>,
    ) -> Result<()> {
        let entries = fs::read_dir(dir)
            .with_context(|| format!("Failed to read directory {}", dir.display()))?;

        for entry in entries {
            let Ok(entry) = entry else { continue };
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().into_owned();
            if self.skip_name(&name) {
                continue;
            }

            // symlink_metadata so we never follow links out of the tree
            let Ok(meta) = fs::symlink_metadata(&path) else { continue };

            if meta.is_dir() {
                if self.recursive {
                    // A subtree becoming unreadable mid-poll is not fatal.
                    let _ = self.walk(root, &path, files);
                }
            } else if meta.is_file() {
                files.insert(
                    relative_key(root, &path),
                    FileSnapshot {
                        path: path.clone(),
                        len: meta.len(),
                        modified_ms: modified_ms(&meta),
                    },
                );
            }
        }
        Ok(())
    }
}

impl DirScanner for FsScanner {
    fn scan(&self, root: &Path) -> Result<DirSnapshot> {
        let taken_at_ms = now_ms();
        let mut snapshot = DirSnapshot::empty(root.to_path_buf(), taken_at_ms);
        self.walk(root, root, &mut snapshot.files)?;
        Ok(snapshot)
    }
}

/// Root-relative key with `/` separators, regardless of platform.
fn relative_key(root: &Path, path: &Path) -> String {
    let rel: PathBuf = path.strip_prefix(root).unwrap_or(path).to_path_buf();
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

fn modified_ms(meta: &fs::Metadata) -> i64 {
    meta.modified()
        .ok()
        .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
