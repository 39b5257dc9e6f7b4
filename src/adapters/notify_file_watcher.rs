//! Notify implementation of the FileWatcher port.

use crate::ports::FileWatcher;
use anyhow::{Context, Result};
use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// OS change notification used to wake the poll loop early.
///
/// The flag is only a hint; the next scan still decides what actually
/// changed by diffing snapshots.
pub struct NotifyFileWatcher {
    _watcher: RecommendedWatcher,
    has_changes: Arc<AtomicBool>,
}

impl NotifyFileWatcher {
    /// Watch `root`, setting the flag on any create/modify/remove whose
    /// path does not cross an ignored component.
    pub fn new(root: &Path, recursive: bool, ignore: Vec<String>) -> Result<Self> {
        let has_changes = Arc::new(AtomicBool::new(false));
        let has_changes_clone = has_changes.clone();

        let config = Config::default().with_poll_interval(Duration::from_secs(1));

        let mut watcher = RecommendedWatcher::new(
            move |res: Result<notify::Event, notify::Error>| {
                if let Ok(event) = res {
                    use notify::EventKind::*;
                    match event.kind {
                        Create(_) | Modify(_) | Remove(_) => {
                            let all_ignored = event.paths.iter().all(|p| {
                                p.components().any(|c| {
                                    let name = c.as_os_str().to_string_lossy();
                                    ignore.iter().any(|pat| pat.as_str() == name)
                                })
                            });

                            if !all_ignored {
                                has_changes_clone.store(true, Ordering::SeqCst);
                            }
                        }
                        _ => {}
                    }
                }
            },
            config,
        )
        .context("Failed to create file watcher")?;

        let mode = if recursive {
            RecursiveMode::Recursive
        } else {
            RecursiveMode::NonRecursive
        };
        watcher
            .watch(root, mode)
            .context("Failed to start watching directory")?;

        Ok(Self {
            _watcher: watcher,
            has_changes,
        })
    }
}

impl FileWatcher for NotifyFileWatcher {
    fn has_changes(&self) -> bool {
        self.has_changes.load(Ordering::SeqCst)
    }

    fn clear_changes(&self) {
        self.has_changes.store(false, Ordering::SeqCst);
    }
}
