pub mod file_watcher;
pub mod listener;
pub mod scanner;
pub mod terminal;

pub use file_watcher::FileWatcher;
pub use listener::{dispatch, ChangeListener};
pub use scanner::DirScanner;
pub use terminal::{KeyCode, KeyEvent, KeyModifiers, Terminal, TerminalEvent};
