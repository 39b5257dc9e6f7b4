//! Pure change-recognition logic: set algebra over two snapshot maps.
//! No I/O - all functions are data in, data out.

use super::types::{ChangeEvent, ChangeKind, DirSnapshot};

/// Strategy computing one category of change between two snapshots.
pub trait Recognizer {
    fn recognize(&self, before: &DirSnapshot, after: &DirSnapshot) -> Vec<ChangeEvent>;
}

/// Keys present in `after` but not in `before`.
pub struct CreatedRecognizer;

impl Recognizer for CreatedRecognizer {
    fn recognize(&self, before: &DirSnapshot, after: &DirSnapshot) -> Vec<ChangeEvent> {
        after
            .files
            .iter()
            .filter(|(key, _)| !before.files.contains_key(*key))
            .map(|(key, file)| ChangeEvent::created(key.clone(), file.clone(), after.taken_at_ms))
            .collect()
    }
}

/// Keys present in `before` but not in `after`.
pub struct DeletedRecognizer;

impl Recognizer for DeletedRecognizer {
    fn recognize(&self, before: &DirSnapshot, after: &DirSnapshot) -> Vec<ChangeEvent> {
        before
            .files
            .iter()
            .filter(|(key, _)| !after.files.contains_key(*key))
            .map(|(key, file)| ChangeEvent::deleted(key.clone(), file.clone(), after.taken_at_ms))
            .collect()
    }
}

/// Keys present in both snapshots whose size or mtime differs.
pub struct ChangedRecognizer;

impl Recognizer for ChangedRecognizer {
    fn recognize(&self, before: &DirSnapshot, after: &DirSnapshot) -> Vec<ChangeEvent> {
        after
            .files
            .iter()
            .filter_map(|(key, now)| {
                let prev = before.files.get(key)?;
                if prev.differs_from(now) {
                    Some(ChangeEvent::changed(
                        key.clone(),
                        prev.clone(),
                        now.clone(),
                        after.taken_at_ms,
                    ))
                } else {
                    None
                }
            })
            .collect()
    }
}

/// Run all three recognizers over a snapshot pair.
///
/// Order is deterministic: created first, then changed, then deleted,
/// each group ordered by key (snapshot maps are BTreeMaps).
pub fn recognize_all(before: &DirSnapshot, after: &DirSnapshot) -> Vec<ChangeEvent> {
    let mut events = CreatedRecognizer.recognize(before, after);
    events.extend(ChangedRecognizer.recognize(before, after));
    events.extend(DeletedRecognizer.recognize(before, after));
    events
}

/// Running totals across scans, shown in the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanSummary {
    pub scans: u64,
    pub created: u64,
    pub changed: u64,
    pub deleted: u64,
}

impl ScanSummary {
    /// Fold one scan's events into the totals.
    pub fn tally(&mut self, events: &[ChangeEvent]) {
        self.scans += 1;
        for event in events {
            match event.kind {
                ChangeKind::Created => self.created += 1,
                ChangeKind::Changed => self.changed += 1,
                ChangeKind::Deleted => self.deleted += 1,
            }
        }
    }

    pub fn total_events(&self) -> u64 {
        self.created + self.changed + self.deleted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::FileSnapshot;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn file(len: u64, modified_ms: i64) -> FileSnapshot {
        FileSnapshot {
            path: PathBuf::from("/watched/x"),
            len,
            modified_ms,
        }
    }

    fn snapshot(taken_at_ms: i64, entries: &[(&str, u64, i64)]) -> DirSnapshot {
        let mut snap = DirSnapshot::empty(PathBuf::from("/watched"), taken_at_ms);
        for (key, len, modified) in entries {
            snap.files.insert(key.to_string(), file(*len, *modified));
        }
        snap
    }

    #[test]
    fn identical_snapshots_produce_no_events() {
        let before = snapshot(1, &[("a.txt", 10, 100), ("b.txt", 20, 200)]);
        let after = snapshot(2, &[("a.txt", 10, 100), ("b.txt", 20, 200)]);
        assert_eq!(recognize_all(&before, &after), vec![]);
    }

    #[test]
    fn new_key_is_created() {
        let before = snapshot(1, &[("a.txt", 10, 100)]);
        let after = snapshot(2, &[("a.txt", 10, 100), ("b.txt", 20, 200)]);

        let events = recognize_all(&before, &after);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, ChangeKind::Created);
        assert_eq!(events[0].key, "b.txt");
        assert!(events[0].before.is_none());
        assert_eq!(events[0].after.as_ref().unwrap().len, 20);
        assert_eq!(events[0].observed_at_ms, 2);
    }

    #[test]
    fn missing_key_is_deleted() {
        let before = snapshot(1, &[("a.txt", 10, 100), ("b.txt", 20, 200)]);
        let after = snapshot(2, &[("a.txt", 10, 100)]);

        let events = recognize_all(&before, &after);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, ChangeKind::Deleted);
        assert_eq!(events[0].key, "b.txt");
        assert_eq!(events[0].before.as_ref().unwrap().len, 20);
        assert!(events[0].after.is_none());
    }

    #[test]
    fn size_change_is_changed() {
        let before = snapshot(1, &[("a.txt", 10, 100)]);
        let after = snapshot(2, &[("a.txt", 11, 100)]);

        let events = recognize_all(&before, &after);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, ChangeKind::Changed);
        assert_eq!(events[0].before.as_ref().unwrap().len, 10);
        assert_eq!(events[0].after.as_ref().unwrap().len, 11);
    }

    #[test]
    fn mtime_change_is_changed() {
        let before = snapshot(1, &[("a.txt", 10, 100)]);
        let after = snapshot(2, &[("a.txt", 10, 101)]);

        let events = recognize_all(&before, &after);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, ChangeKind::Changed);
    }

    #[test]
    fn unchanged_intersection_key_is_silent() {
        let before = snapshot(1, &[("a.txt", 10, 100)]);
        let after = snapshot(2, &[("a.txt", 10, 100), ("b.txt", 1, 1)]);

        let events = ChangedRecognizer.recognize(&before, &after);
        assert_eq!(events, vec![]);
    }

    #[test]
    fn empty_before_means_everything_created() {
        let before = snapshot(1, &[]);
        let after = snapshot(2, &[("a.txt", 10, 100), ("b.txt", 20, 200)]);

        let events = recognize_all(&before, &after);
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| e.kind == ChangeKind::Created));
    }

    #[test]
    fn empty_after_means_everything_deleted() {
        let before = snapshot(1, &[("a.txt", 10, 100), ("b.txt", 20, 200)]);
        let after = snapshot(2, &[]);

        let events = recognize_all(&before, &after);
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| e.kind == ChangeKind::Deleted));
    }

    #[test]
    fn combined_events_are_grouped_and_key_ordered() {
        let before = snapshot(1, &[("b.txt", 1, 1), ("d.txt", 2, 2), ("e.txt", 3, 3)]);
        let after = snapshot(
            2,
            &[
                ("a.txt", 9, 9),  // created
                ("c.txt", 9, 9),  // created
                ("b.txt", 5, 1),  // changed (size)
                ("d.txt", 2, 7),  // changed (mtime)
            ],
        );

        let keys: Vec<(ChangeKind, String)> = recognize_all(&before, &after)
            .into_iter()
            .map(|e| (e.kind, e.key))
            .collect();

        assert_eq!(
            keys,
            vec![
                (ChangeKind::Created, "a.txt".to_string()),
                (ChangeKind::Created, "c.txt".to_string()),
                (ChangeKind::Changed, "b.txt".to_string()),
                (ChangeKind::Changed, "d.txt".to_string()),
                (ChangeKind::Deleted, "e.txt".to_string()),
            ]
        );
    }

    #[test]
    fn summary_tallies_per_kind() {
        let before = snapshot(1, &[("a", 1, 1), ("b", 2, 2)]);
        let after = snapshot(2, &[("a", 5, 1), ("c", 3, 3)]);

        let mut summary = ScanSummary::default();
        summary.tally(&recognize_all(&before, &after));
        summary.tally(&recognize_all(&after, &after));

        assert_eq!(summary.scans, 2);
        assert_eq!(summary.created, 1);
        assert_eq!(summary.changed, 1);
        assert_eq!(summary.deleted, 1);
        assert_eq!(summary.total_events(), 3);
    }
}
