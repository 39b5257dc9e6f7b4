//! Listener port (trait).
//! Defines the observer interface for change events.

use crate::domain::ChangeEvent;
use anyhow::Result;

/// Port for receiving change events.
///
/// Dispatch is synchronous and in registration order. A listener that
/// returns an error is reported and skipped for that event; the rest of
/// the fan-out still runs.
pub trait ChangeListener {
    /// Name used when reporting a failed dispatch.
    fn name(&self) -> &str;

    /// Handle one event.
    fn on_change(&mut self, event: &ChangeEvent) -> Result<()>;
}

/// Fan one batch of events out to every listener.
pub fn dispatch(listeners: &mut [Box<dyn ChangeListener>], events: &[ChangeEvent]) {
    for event in events {
        for listener in listeners.iter_mut() {
            if let Err(e) = listener.on_change(event) {
                eprintln!("Listener '{}' failed: {:#}", listener.name(), e);
            }
        }
    }
}
