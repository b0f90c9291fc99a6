use crate::key_stream::{EventStatus, KeyEvent};
use crate::{HookMode, USBKeyOut};

mod topsy_turvy;
mod usbkeyboard;

pub use topsy_turvy::{TopsyTurvy, TopsyTurvyConfig};
pub use usbkeyboard::USBKeyboard;

/// Handlers are defined by this trait
///
/// they see one event at a time, may send input to the computer via output,
/// and either pass the (possibly rewritten) event on or declare it Handled.
///
/// pipeline drives an event through the handlers after this one -
/// use it to re-inject events, and mark them as injected
/// so you don't process them again.
pub trait ProcessKeys<T: USBKeyOut> {
    fn process_key(
        &mut self,
        event: KeyEvent,
        pipeline: &mut dyn HandleKeyEvent<T>,
        output: &mut T,
    ) -> EventStatus;

    /// whether this handler is enabled after add_handler
    /// (On for most)
    fn default_mode(&self) -> HookMode {
        HookMode::On
    }
}

/// the re-injection entry point handed to each handler
pub trait HandleKeyEvent<T: USBKeyOut> {
    /// Ok(()) if some handler dealt with the event
    fn handle_key_event(&mut self, event: KeyEvent, output: &mut T) -> Result<(), ()>;
}
