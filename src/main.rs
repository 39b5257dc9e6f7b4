//! dirmon - directory change monitor
//!
//! Polls a directory, diffs successive snapshots into created/changed/
//! deleted events, and shows them in a terminal table or as plain
//! console lines.

mod adapters;
mod app;
mod config;
mod domain;
mod ports;
mod ui;

use adapters::{ConsoleListener, CrosstermTerminal, FsScanner, NotifyFileWatcher};
use anyhow::{ensure, Context, Result};
use clap::Parser;
use config::Config;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, LeaveAlternateScreen},
};
use domain::recognize_all;
use ports::{dispatch, ChangeListener, DirScanner, FileWatcher};
use std::io;
use std::panic;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(name = "dirmon")]
#[command(about = "Watch a directory and report created/changed/deleted files")]
#[command(version)]
struct Args {
    /// Directory to watch (default: current directory)
    path: Option<PathBuf>,

    /// Seconds between scans (default: from config, 2)
    #[arg(short, long)]
    interval: Option<u64>,

    /// Also scan subdirectories
    #[arg(short, long)]
    recursive: bool,

    /// Include hidden files
    #[arg(long)]
    hidden: bool,

    /// Skip entries with this name (repeatable)
    #[arg(long, value_name = "NAME")]
    ignore: Vec<String>,

    /// Print events as plain lines instead of the interactive table
    #[arg(long)]
    console: bool,

    /// Keep at most this many events in the table (default: from config, 1000)
    #[arg(long)]
    max_events: Option<usize>,
}

fn main() -> Result<()> {
    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let args = Args::parse();

    let mut config = Config::load();
    if let Some(secs) = args.interval {
        config.interval_ms = secs.max(1) * 1000;
    }
    if args.recursive {
        config.recursive = true;
    }
    if args.hidden {
        config.include_hidden = true;
    }
    if let Some(max) = args.max_events {
        config.max_events = max.max(1);
    }
    config.ignore.extend(args.ignore.iter().cloned());

    let root = args
        .path
        .unwrap_or_else(|| PathBuf::from("."))
        .canonicalize()
        .context("Failed to resolve watch directory")?;
    ensure!(root.is_dir(), "{} is not a directory", root.display());

    let scanner = FsScanner::new(config.recursive, config.include_hidden, config.ignore.clone());
    let interval = Duration::from_millis(config.interval_ms);

    let watcher: Option<Box<dyn FileWatcher>> =
        match NotifyFileWatcher::new(&root, config.recursive, config.ignore.clone()) {
            Ok(watcher) => Some(Box::new(watcher)),
            Err(e) => {
                eprintln!(
                    "Warning: OS change notification unavailable, polling only: {}",
                    e
                );
                None
            }
        };

    if args.console {
        let listeners: Vec<Box<dyn ChangeListener>> =
            vec![Box::new(ConsoleListener::new(io::stdout()))];
        return run_console(&root, &scanner, listeners, watcher, interval);
    }

    let mut terminal = CrosstermTerminal::new().context("Failed to initialize terminal")?;
    let mut app = app::App::new(
        root,
        &scanner,
        Vec::new(),
        watcher,
        interval,
        config.max_events,
    )
    .context("Failed to take the baseline snapshot")?;

    app.run(&mut terminal)

    // Terminal cleanup happens in Drop
}

/// Plain-line mode: same poll/diff/dispatch loop, no ratatui. Runs until
/// interrupted.
fn run_console(
    root: &std::path::Path,
    scanner: &dyn DirScanner,
    mut listeners: Vec<Box<dyn ChangeListener>>,
    watcher: Option<Box<dyn FileWatcher>>,
    interval: Duration,
) -> Result<()> {
    let mut before = scanner
        .scan(root)
        .with_context(|| format!("Failed to scan {}", root.display()))?;
    println!(
        "Watching {} ({} files), scanning every {}s",
        root.display(),
        before.file_count(),
        interval.as_secs_f64(),
    );

    loop {
        let started = Instant::now();
        while started.elapsed() < interval {
            let woken = watcher.as_ref().map(|w| w.has_changes()).unwrap_or(false);
            if woken {
                break;
            }
            thread::sleep(Duration::from_millis(100));
        }
        if let Some(watcher) = &watcher {
            watcher.clear_changes();
        }

        let after = scanner
            .scan(root)
            .with_context(|| format!("Failed to scan {}", root.display()))?;
        let events = recognize_all(&before, &after);
        dispatch(&mut listeners, &events);
        before = after;
    }
}
