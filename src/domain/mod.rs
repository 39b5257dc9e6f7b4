pub mod recognize;
pub mod types;

pub use recognize::{
    recognize_all, ChangedRecognizer, CreatedRecognizer, DeletedRecognizer, Recognizer,
    ScanSummary,
};
pub use types::{human_size, ChangeEvent, ChangeKind, DirSnapshot, FileSnapshot};
