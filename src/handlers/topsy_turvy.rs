use crate::handlers::{HandleKeyEvent, ProcessKeys};
use crate::key_codes::{AcceptsKeycode, KeyCode};
use crate::key_stream::{EventStatus, KeyEvent};
use crate::{HookMode, USBKeyOut};
use alloc::sync::Arc;
use smallbitvec::{sbvec, SmallBitVec};
use spin::RwLock;

const LEFT_SHIFT: usize = 0;
const RIGHT_SHIFT: usize = 1;

/// The key list of a TopsyTurvy, shared with whoever configured it.
///
/// Keep a clone (see TopsyTurvy::config) before handing the TopsyTurvy
/// to Keyboard::add_handler, and you can still swap the list afterwards.
#[derive(Clone)]
pub struct TopsyTurvyConfig<'a> {
    list: Arc<RwLock<Option<&'a [u32]>>>,
}

impl<'a> TopsyTurvyConfig<'a> {
    pub fn new(list: Option<&'a [u32]>) -> TopsyTurvyConfig<'a> {
        TopsyTurvyConfig {
            list: Arc::new(RwLock::new(list)),
        }
    }

    /// replace the list wholesale - None turns the inversion off
    pub fn configure(&self, list: Option<&'a [u32]>) {
        *self.list.write() = list;
    }

    pub fn list(&self) -> Option<&'a [u32]> {
        *self.list.read()
    }
}

/// Inverts the shift state of the listed keys.
///
/// A listed key pressed without shift is sent with a (left) shift,
/// a listed key pressed while a shift is held is sent without it.
///
/// The list is borrowed, not copied - pass a slice of keycodes,
/// optionally terminated by KeyCode::No. None disables the inversion.
///
/// Starts out disabled, use KeyboardState::enable_handler.
pub struct TopsyTurvy<'a> {
    config: TopsyTurvyConfig<'a>,
    /// which shifts are physically held, left and right
    mod_state: SmallBitVec,
}

impl<'a> TopsyTurvy<'a> {
    pub fn new(list: Option<&'a [u32]>) -> TopsyTurvy<'a> {
        TopsyTurvy::with_config(TopsyTurvyConfig::new(list))
    }

    pub fn with_config(config: TopsyTurvyConfig<'a>) -> TopsyTurvy<'a> {
        TopsyTurvy {
            config,
            mod_state: sbvec![false; 2],
        }
    }

    /// a handle on the list that stays valid once this is installed
    pub fn config(&self) -> TopsyTurvyConfig<'a> {
        self.config.clone()
    }

    /// replace the list wholesale
    pub fn configure(&mut self, list: Option<&'a [u32]>) {
        self.config.configure(list);
    }

    pub fn left_shift_held(&self) -> bool {
        self.mod_state[LEFT_SHIFT]
    }

    pub fn right_shift_held(&self) -> bool {
        self.mod_state[RIGHT_SHIFT]
    }

    fn any_shift_held(&self) -> bool {
        self.left_shift_held() || self.right_shift_held()
    }
}

fn is_listed(list: &[u32], keycode: u32) -> bool {
    let no_key = KeyCode::No.to_u32();
    list.iter()
        .take_while(|k| **k != no_key)
        .any(|k| *k == keycode)
}

impl<'a, T: USBKeyOut> ProcessKeys<T> for TopsyTurvy<'a> {
    fn process_key(
        &mut self,
        event: KeyEvent,
        pipeline: &mut dyn HandleKeyEvent<T>,
        output: &mut T,
    ) -> EventStatus {
        // our own re-injection coming around
        if event.state.is_injected() {
            return EventStatus::Unhandled(event);
        }
        // copied out, so no lock is held while re-injecting
        let list = match self.config.list() {
            Some(list) => list,
            None => return EventStatus::Unhandled(event),
        };

        if event.keycode == KeyCode::LShift.to_u32() {
            self.mod_state.set(LEFT_SHIFT, event.state.is_pressed());
        }
        if event.keycode == KeyCode::RShift.to_u32() {
            self.mod_state.set(RIGHT_SHIFT, event.state.is_pressed());
        }

        if !event.state.toggled_on() && !event.state.toggled_off() {
            return EventStatus::Unhandled(event);
        }
        if !is_listed(list, event.keycode) {
            return EventStatus::Unhandled(event);
        }

        debug!(
            "topsy turvy: inverting {} (shift held: {})",
            event.keycode,
            self.any_shift_held()
        );
        if !self.any_shift_held() {
            if event.state.is_pressed() {
                output.press(KeyCode::LShift);
            }
            pipeline.handle_key_event(event.injected(), output).ok();
            output.send_report();
            // the host's next scan cycle sends this one
            if event.state.toggled_off() {
                output.release(KeyCode::LShift);
            }
        } else {
            output.release(KeyCode::LShift);
            output.release(KeyCode::RShift);
            output.send_report();
            pipeline.handle_key_event(event.injected(), output).ok();
            output.send_report();

            if self.left_shift_held() {
                output.press(KeyCode::LShift);
            }
            if self.right_shift_held() {
                output.press(KeyCode::RShift);
            }
        }
        EventStatus::Handled
    }

    fn default_mode(&self) -> HookMode {
        HookMode::Off
    }
}
