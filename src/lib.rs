//! TopsyTurvy - invert the shift state of selected keys.
//!
//! Press a listed key on its own and the host sees it shifted,
//! press it while holding shift and the host sees it unshifted.
//!
//! The crate brings a minimal host to run the hook in:
//! a [Keyboard] holding a chain of handlers, the [handlers::USBKeyboard]
//! terminal stage, a [matrix::MatrixToStream] to turn switch states into
//! events and a [report::HidReport] boot keyboard report buffer.

#![no_std]

#[macro_use]
mod log;

pub mod handlers;
mod key_codes;
mod key_stream;
pub mod matrix;
pub mod premade;
pub mod report;
#[cfg(test)]
mod test_helpers;

extern crate alloc;
extern crate no_std_compat;

use crate::handlers::{HandleKeyEvent, ProcessKeys};
pub use crate::key_codes::{AcceptsKeycode, KeyCode, KeyCodeInfo};
pub use crate::key_stream::{EventStatus, KeyEvent, KeyState};
use no_std_compat::prelude::v1::*;

/// Whether a handler takes part in the chain.
///
/// An Off slot is a passthrough - events flow past it
/// without the handler ever seeing them.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum HookMode {
    Off,
    On,
}

/// current keyboard state.
#[derive(Debug)]
pub struct KeyboardState {
    enabled_handlers: Vec<HookMode>,
}

impl KeyboardState {
    pub fn new() -> KeyboardState {
        KeyboardState {
            enabled_handlers: Vec::new(),
        }
    }
    pub fn enable_handler(&mut self, no: HandlerID) {
        self.enabled_handlers[no] = HookMode::On;
    }

    pub fn disable_handler(&mut self, no: HandlerID) {
        self.enabled_handlers[no] = HookMode::Off;
    }

    pub fn toggle_handler(&mut self, no: HandlerID) {
        self.enabled_handlers[no] = match self.enabled_handlers[no] {
            HookMode::On => HookMode::Off,
            HookMode::Off => HookMode::On,
        };
    }

    pub fn is_handler_enabled(&self, no: HandlerID) -> bool {
        self.handler_mode(no) == HookMode::On
    }

    pub fn handler_mode(&self, no: HandlerID) -> HookMode {
        self.enabled_handlers[no]
    }
}

impl Default for KeyboardState {
    fn default() -> Self {
        KeyboardState::new()
    }
}

/// the main keyboard struct
///
/// add handlers with add_handler (the USBKeyboard goes last),
/// then pass it to matrix.MatrixToStream.update()
/// to start processing keys.
pub struct Keyboard<'a, T: USBKeyOut> {
    handlers: Vec<Box<dyn ProcessKeys<T> + Send + 'a>>,
    pub output: T,
}

pub type HandlerID = usize;

impl<'a, T: USBKeyOut> Keyboard<'a, T> {
    pub fn new(output: T) -> Keyboard<'a, T> {
        Keyboard {
            handlers: Vec::new(),
            output,
        }
    }

    /// add a handler, return a HandlerID
    /// which you may use for enable_handler/disable_handler
    ///
    /// the handler starts in whatever mode its default_mode says.
    pub fn add_handler(&mut self, handler: Box<dyn ProcessKeys<T> + Send + 'a>) -> HandlerID {
        self.output
            .state()
            .enabled_handlers
            .push(handler.default_mode());
        self.handlers.push(handler);
        self.handlers.len() - 1
    }

    /// run one event through the handler chain
    ///
    /// This returns OK(()) if a handler dealt with the event
    /// and an Err(()) if it fell off the end of the chain.
    /// that way the down stream can decide what to do
    /// (tests: panic. Firmware/MatrixToStream -> drop it)
    pub fn handle_key_event(&mut self, event: KeyEvent) -> Result<(), ()> {
        dispatch(&mut self.handlers, 0, event, &mut self.output)
    }

    /// build and handle an event in one go
    pub fn add_key_event<X: AcceptsKeycode>(
        &mut self,
        keycode: X,
        row: u8,
        col: u8,
        state: KeyState,
    ) -> Result<(), ()> {
        self.handle_key_event(KeyEvent::new(keycode, row, col, state))
    }
}

/// the rest of a handler chain, as seen by the handler in front of it.
struct Pipeline<'p, 'a, T: USBKeyOut> {
    handlers: &'p mut [Box<dyn ProcessKeys<T> + Send + 'a>],
    first_id: HandlerID,
}

impl<'p, 'a, T: USBKeyOut> HandleKeyEvent<T> for Pipeline<'p, 'a, T> {
    fn handle_key_event(&mut self, event: KeyEvent, output: &mut T) -> Result<(), ()> {
        dispatch(&mut *self.handlers, self.first_id, event, output)
    }
}

fn dispatch<'a, T: USBKeyOut>(
    handlers: &mut [Box<dyn ProcessKeys<T> + Send + 'a>],
    first_id: HandlerID,
    event: KeyEvent,
    output: &mut T,
) -> Result<(), ()> {
    let mut event = event;
    let mut id = first_id;
    let mut rest = handlers;
    while let Some((handler, downstream)) = core::mem::take(&mut rest).split_first_mut() {
        if output.state().handler_mode(id) == HookMode::On {
            let mut pipeline = Pipeline {
                handlers: &mut *downstream,
                first_id: id + 1,
            };
            match handler.process_key(event, &mut pipeline, output) {
                EventStatus::Handled => return Ok(()),
                EventStatus::Unhandled(e) => event = e,
            }
        }
        rest = downstream;
        id += 1;
    }
    Err(())
}

/// the handlers use this trait to generate their output
///
/// press/release only change the buffered report,
/// nothing reaches the host before send_report.
pub trait USBKeyOut {
    /// add this USB keycode to the buffered report
    fn press(&mut self, key: KeyCode);
    /// remove this USB keycode from the buffered report
    fn release(&mut self, key: KeyCode);
    /// send the buffered report to the host right away
    fn send_report(&mut self);

    /// retrieve a mutable KeyboardState
    fn state(&mut self) -> &mut KeyboardState;
}

//so the tests 'just work'.
#[cfg(test)]
#[macro_use]
extern crate std;
