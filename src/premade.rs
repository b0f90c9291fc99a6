//! premade handlers and key lists for various occasions
use crate::handlers::{HandleKeyEvent, ProcessKeys};
use crate::key_codes::{AcceptsKeycode, KeyCode};
use crate::key_stream::{EventStatus, KeyEvent};
use crate::{HandlerID, USBKeyOut};
use no_std_compat::prelude::v1::*;

/// the number row - symbols without shift, digits with.
pub const NUMBER_ROW: [u32; 11] = [
    KeyCode::Kb1 as u32,
    KeyCode::Kb2 as u32,
    KeyCode::Kb3 as u32,
    KeyCode::Kb4 as u32,
    KeyCode::Kb5 as u32,
    KeyCode::Kb6 as u32,
    KeyCode::Kb7 as u32,
    KeyCode::Kb8 as u32,
    KeyCode::Kb9 as u32,
    KeyCode::Kb0 as u32,
    KeyCode::No as u32,
];

/// punctuation whose shifted variant is wanted more often than not
pub const SYMBOL_KEYS: [u32; 5] = [
    KeyCode::SColon as u32,
    KeyCode::Quote as u32,
    KeyCode::LBracket as u32,
    KeyCode::RBracket as u32,
    KeyCode::No as u32,
];

//Internal type for toggle_handler
pub struct ToggleHandler {
    trigger: u32,
    id: HandlerID,
}

impl<T: USBKeyOut> ProcessKeys<T> for ToggleHandler {
    fn process_key(
        &mut self,
        event: KeyEvent,
        _pipeline: &mut dyn HandleKeyEvent<T>,
        output: &mut T,
    ) -> EventStatus {
        if event.keycode != self.trigger {
            return EventStatus::Unhandled(event);
        }
        if event.state.toggled_on() {
            output.state().toggle_handler(self.id);
        }
        EventStatus::Handled
    }
}

/// Toggles a handler on and off when a key is pressed
pub fn toggle_handler(trigger: impl AcceptsKeycode, id: HandlerID) -> Box<ToggleHandler> {
    Box::new(ToggleHandler {
        trigger: trigger.to_u32(),
        id,
    })
}
