pub mod events;
pub mod files;
pub mod help;
pub mod styles;
