pub mod console_listener;
pub mod crossterm_adapter;
pub mod fs_scanner;
pub mod notify_file_watcher;

pub use console_listener::ConsoleListener;
pub use crossterm_adapter::CrosstermTerminal;
pub use fs_scanner::FsScanner;
pub use notify_file_watcher::NotifyFileWatcher;
