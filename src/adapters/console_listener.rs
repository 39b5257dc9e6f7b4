//! Line-printing implementation of the ChangeListener port.

use crate::domain::{human_size, ChangeEvent};
use crate::ports::ChangeListener;
use anyhow::Result;
use chrono::Local;
use std::io::Write;

/// Listener writing one timestamped line per event.
///
/// Generic over the sink so tests can capture output in a Vec<u8>.
pub struct ConsoleListener<W: Write> {
    out: W,
}

impl<W: Write> ConsoleListener<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn format_line(event: &ChangeEvent, clock: &str) -> String {
        format!(
            "{}  {} {:<7}  {}  ({})",
            clock,
            event.kind.sigil(),
            event.kind.label(),
            event.key,
            human_size(event.size()),
        )
    }
}

impl<W: Write> ChangeListener for ConsoleListener<W> {
    fn name(&self) -> &str {
        "console"
    }

    fn on_change(&mut self, event: &ChangeEvent) -> Result<()> {
        let clock = Local::now().format("%H:%M:%S").to_string();
        writeln!(self.out, "{}", Self::format_line(event, &clock))?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FileSnapshot;
    use std::path::PathBuf;

    fn file(len: u64) -> FileSnapshot {
        FileSnapshot {
            path: PathBuf::from("/w/report.csv"),
            len,
            modified_ms: 1,
        }
    }

    #[test]
    fn prints_one_line_per_event() {
        let mut listener = ConsoleListener::new(Vec::new());
        listener
            .on_change(&ChangeEvent::created("report.csv".to_string(), file(2048), 0))
            .unwrap();
        listener
            .on_change(&ChangeEvent::deleted("old.csv".to_string(), file(10), 0))
            .unwrap();

        let out = String::from_utf8(listener.out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("+ created  report.csv  (2.0 KB)"));
        assert!(lines[1].contains("- deleted  old.csv  (10 B)"));
    }

    #[test]
    fn line_format_is_stable() {
        let ev = ChangeEvent::changed("a.txt".to_string(), file(1), file(3), 0);
        let line = ConsoleListener::<Vec<u8>>::format_line(&ev, "12:30:01");
        assert_eq!(line, "12:30:01  ~ changed  a.txt  (3 B)");
    }
}
