//! Application state machine.
//! Uses trait objects for the scanner/listeners/watcher ports, generics
//! for the terminal (due to dyn-compatibility).

use crate::domain::{recognize_all, ChangeEvent, DirSnapshot, ScanSummary};
use crate::ports::{
    dispatch, ChangeListener, DirScanner, FileWatcher, KeyCode, KeyModifiers, Terminal,
    TerminalEvent,
};
use crate::ui;
use anyhow::{Context, Result};
use ratatui::layout::{Constraint, Layout};
use ratatui::widgets::TableState;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Current view in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Events,
    Files,
    Help,
}

/// Application state.
pub struct App<'a> {
    root: PathBuf,
    scanner: &'a dyn DirScanner,
    listeners: Vec<Box<dyn ChangeListener>>,
    watcher: Option<Box<dyn FileWatcher>>,
    interval: Duration,
    max_events: usize,

    pub snapshot: DirSnapshot,
    /// Event log, newest first.
    pub events: VecDeque<ChangeEvent>,
    pub summary: ScanSummary,
    pub view: View,
    previous_view: Option<View>,
    pub selected: usize,
    pub paused: bool,
    rescan_requested: bool,
    pub should_quit: bool,
    last_scan: Instant,
    table_state: TableState,
}

impl<'a> App<'a> {
    /// Take the baseline snapshot and set up the initial state.
    ///
    /// The baseline produces no events: pre-existing files are not a
    /// Created storm, they are the starting point.
    pub fn new(
        root: PathBuf,
        scanner: &'a dyn DirScanner,
        listeners: Vec<Box<dyn ChangeListener>>,
        watcher: Option<Box<dyn FileWatcher>>,
        interval: Duration,
        max_events: usize,
    ) -> Result<Self> {
        let snapshot = scanner
            .scan(&root)
            .with_context(|| format!("Failed to scan {}", root.display()))?;

        Ok(Self {
            root,
            scanner,
            listeners,
            watcher,
            interval,
            max_events,
            snapshot,
            events: VecDeque::new(),
            summary: ScanSummary::default(),
            view: View::Events,
            previous_view: None,
            selected: 0,
            paused: false,
            rescan_requested: false,
            should_quit: false,
            last_scan: Instant::now(),
            table_state: TableState::default(),
        })
    }

    pub fn run<T: Terminal>(&mut self, terminal: &mut T) -> Result<()> {
        while !self.should_quit {
            self.tick()?;
            self.draw(terminal)?;

            if let Some(event) = terminal.poll_event(Duration::from_millis(100))? {
                self.handle_event(event)?;
            }
        }
        Ok(())
    }

    /// Rescan when the interval elapsed, the watcher flagged changes, or
    /// a rescan was requested. Paused means no scanning at all; a watcher
    /// flag raised while paused survives until resume.
    pub fn tick(&mut self) -> Result<()> {
        if self.paused {
            return Ok(());
        }

        let woken = self
            .watcher
            .as_ref()
            .map(|w| w.has_changes())
            .unwrap_or(false);

        if self.rescan_requested || woken || self.last_scan.elapsed() >= self.interval {
            self.scan_now()?;
        }
        Ok(())
    }

    /// One poll step: snapshot, diff against the previous snapshot,
    /// dispatch the events, and fold them into the log and summary.
    pub fn scan_now(&mut self) -> Result<()> {
        // Clear before scanning so changes racing the scan re-raise the flag.
        if let Some(watcher) = &self.watcher {
            watcher.clear_changes();
        }
        self.rescan_requested = false;
        self.last_scan = Instant::now();

        let after = self
            .scanner
            .scan(&self.root)
            .with_context(|| format!("Failed to scan {}", self.root.display()))?;
        let events = recognize_all(&self.snapshot, &after);
        self.snapshot = after;

        dispatch(&mut self.listeners, &events);
        self.summary.tally(&events);

        for event in events {
            self.events.push_front(event);
        }
        self.events.truncate(self.max_events);
        self.clamp_selection();
        Ok(())
    }

    fn draw<T: Terminal>(&mut self, terminal: &mut T) -> Result<()> {
        let root = self.root.display().to_string();
        let events: Vec<&ChangeEvent> = self.events.iter().collect();
        let snapshot = &self.snapshot;
        let summary = &self.summary;
        let view = &self.view;
        let selected = self.selected;
        let paused = self.paused;
        let table_state = &mut self.table_state;

        terminal.draw(|frame| {
            let area = frame.area();
            let chunks = Layout::default()
                .direction(ratatui::layout::Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(area);

            match view {
                View::Events => {
                    ui::events::render(
                        frame,
                        chunks[0],
                        &events,
                        selected,
                        &root,
                        paused,
                        table_state,
                    );
                }
                View::Files => {
                    ui::files::render(frame, chunks[0], snapshot, selected, table_state);
                }
                View::Help => {
                    // Render the events view underneath, then overlay.
                    ui::events::render(
                        frame,
                        chunks[0],
                        &events,
                        selected,
                        &root,
                        paused,
                        table_state,
                    );
                    ui::help::render(frame, area);
                }
            }
            ui::events::render_status(frame, chunks[1], summary, paused);
        })
    }

    fn handle_event(&mut self, event: TerminalEvent) -> Result<()> {
        match event {
            TerminalEvent::Key(key) => self.handle_key(key.code, key.modifiers),
            TerminalEvent::Resize(_, _) => Ok(()),
        }
    }

    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Result<()> {
        // Global quit
        if code == KeyCode::Char('q') && !modifiers.ctrl {
            self.should_quit = true;
            return Ok(());
        }

        // Ctrl+C quit
        if code == KeyCode::Char('c') && modifiers.ctrl {
            self.should_quit = true;
            return Ok(());
        }

        // Help toggle (except when already in help)
        if code == KeyCode::Char('?') && self.view != View::Help {
            self.previous_view = Some(self.view.clone());
            self.view = View::Help;
            return Ok(());
        }

        if self.view == View::Help {
            // Any key closes help
            self.view = self.previous_view.take().unwrap_or(View::Events);
            return Ok(());
        }

        match code {
            KeyCode::Tab => {
                self.view = match self.view {
                    View::Files => View::Events,
                    _ => View::Files,
                };
                self.selected = 0;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.row_count() {
                    self.selected += 1;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Char('g') | KeyCode::Home => {
                self.selected = 0;
            }
            KeyCode::Char('G') | KeyCode::End => {
                self.selected = self.row_count().saturating_sub(1);
            }
            KeyCode::PageDown => {
                self.selected = (self.selected + 10).min(self.row_count().saturating_sub(1));
            }
            KeyCode::PageUp => {
                self.selected = self.selected.saturating_sub(10);
            }
            KeyCode::Char('p') => {
                self.paused = !self.paused;
            }
            KeyCode::Char('r') => {
                self.rescan_requested = true;
            }
            KeyCode::Char('c') => {
                self.events.clear();
                self.selected = 0;
            }
            _ => {}
        }

        Ok(())
    }

    fn row_count(&self) -> usize {
        match self.view {
            View::Files => self.snapshot.file_count(),
            _ => self.events.len(),
        }
    }

    fn clamp_selection(&mut self) {
        let rows = self.row_count();
        if rows == 0 {
            self.selected = 0;
        } else if self.selected >= rows {
            self.selected = rows - 1;
        }
    }
}
