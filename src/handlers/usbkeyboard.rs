use crate::handlers::{HandleKeyEvent, ProcessKeys};
use crate::key_codes::{KeyCode, KeyCodeInfo};
use crate::key_stream::{EventStatus, KeyEvent};
use crate::USBKeyOut;
use core::convert::TryFrom;

/// The default bottom layer
///
/// this simulates a bog standard regular USB
/// Keyboard.
/// Just map your keys to the usb keycodes.
///
/// Keys go into the report when pressed and stay there
/// until released - the report itself is sent by whoever
/// drives the scan (or by handlers that need an immediate flush).
#[derive(Default)]
pub struct USBKeyboard {}
impl USBKeyboard {
    pub fn new() -> USBKeyboard {
        USBKeyboard {}
    }
}

impl<T: USBKeyOut> ProcessKeys<T> for USBKeyboard {
    fn process_key(
        &mut self,
        event: KeyEvent,
        _pipeline: &mut dyn HandleKeyEvent<T>,
        output: &mut T,
    ) -> EventStatus {
        if !event.keycode.is_usb_keycode() {
            return EventStatus::Unhandled(event);
        }
        let kc = match KeyCode::try_from(event.keycode) {
            Ok(KeyCode::No) => return EventStatus::Handled,
            Ok(kc) => kc,
            Err(_) => return EventStatus::Unhandled(event), //a gap in the usage table
        };
        if event.state.is_pressed() {
            output.press(kc);
        } else if event.state.toggled_off() {
            output.release(kc);
        }
        EventStatus::Handled
    }
}
