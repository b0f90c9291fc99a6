use crate::key_codes::AcceptsKeycode;

/// the state of a key switch in the current scan cycle,
/// relative to the previous one.
///
/// `injected` marks events a handler has put back into the pipeline
/// itself, so it can recognize (and skip) them when they come around.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
pub struct KeyState {
    pub pressed: bool,
    pub was_pressed: bool,
    pub injected: bool,
}

impl KeyState {
    /// key went down this cycle
    pub fn press() -> KeyState {
        KeyState {
            pressed: true,
            was_pressed: false,
            injected: false,
        }
    }
    /// key went up this cycle
    pub fn release() -> KeyState {
        KeyState {
            pressed: false,
            was_pressed: true,
            injected: false,
        }
    }
    /// key is still down
    pub fn held() -> KeyState {
        KeyState {
            pressed: true,
            was_pressed: true,
            injected: false,
        }
    }
    /// key is still up
    pub fn idle() -> KeyState {
        KeyState::default()
    }

    pub fn with_injected(self) -> KeyState {
        KeyState {
            injected: true,
            ..self
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
    pub fn was_pressed(&self) -> bool {
        self.was_pressed
    }
    pub fn toggled_on(&self) -> bool {
        self.pressed && !self.was_pressed
    }
    pub fn toggled_off(&self) -> bool {
        !self.pressed && self.was_pressed
    }
    pub fn is_held(&self) -> bool {
        self.pressed && self.was_pressed
    }
    pub fn is_injected(&self) -> bool {
        self.injected
    }
}

/// one key notification flowing through the hook chain
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct KeyEvent {
    pub keycode: u32,
    pub row: u8,
    pub col: u8,
    pub state: KeyState,
}

impl KeyEvent {
    pub fn new(keycode: impl AcceptsKeycode, row: u8, col: u8, state: KeyState) -> KeyEvent {
        KeyEvent {
            keycode: keycode.to_u32(),
            row,
            col,
            state,
        }
    }

    /// same key, same location, marked as re-injected
    pub fn injected(&self) -> KeyEvent {
        KeyEvent {
            state: self.state.with_injected(),
            ..*self
        }
    }
}

/// What a handler did with an event.
///
/// Unhandled passes the (possibly rewritten) event on to the next handler,
/// Handled means the event has been dealt with and stops here.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum EventStatus {
    Unhandled(KeyEvent),
    Handled,
}
