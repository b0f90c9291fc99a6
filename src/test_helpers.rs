use no_std_compat::prelude::v1::*;
use std::panic;

use crate::handlers::HandleKeyEvent;
use crate::key_codes::KeyCode;
use crate::key_stream::KeyEvent;
use crate::{Keyboard, KeyboardState, USBKeyOut};

/// everything a handler did to the output, in order
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum Op {
    Press(KeyCode),
    Release(KeyCode),
    SendReport,
    Reinject(KeyEvent),
}

pub struct KeyOutCatcher {
    keys_registered: Vec<u8>,
    pub reports: Vec<Vec<u8>>,
    pub ops: Vec<Op>,
    state: KeyboardState,
}
impl KeyOutCatcher {
    pub fn new() -> KeyOutCatcher {
        KeyOutCatcher {
            keys_registered: Vec::new(),
            reports: Vec::new(),
            ops: Vec::new(),
            state: KeyboardState::new(),
        }
    }
    // for testing, clear the catcher of reports and ops - the pressed keys stay
    pub fn clear(&mut self) {
        self.reports.clear();
        self.ops.clear();
    }
    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.keys_registered.contains(&key.to_u8())
    }
}
impl USBKeyOut for KeyOutCatcher {
    fn state(&mut self) -> &mut KeyboardState {
        &mut self.state
    }

    fn press(&mut self, key: KeyCode) {
        self.ops.push(Op::Press(key));
        if !self.keys_registered.contains(&key.to_u8()) {
            self.keys_registered.push(key.to_u8());
        }
    }
    fn release(&mut self, key: KeyCode) {
        self.ops.push(Op::Release(key));
        self.keys_registered.retain(|x| *x != key.to_u8());
    }
    fn send_report(&mut self) {
        self.ops.push(Op::SendReport);
        self.reports.push(self.keys_registered.clone());
    }
}

/// stands in for the rest of the chain when testing a single handler
pub struct ReinjectRecorder {}
impl HandleKeyEvent<KeyOutCatcher> for ReinjectRecorder {
    fn handle_key_event(&mut self, event: KeyEvent, output: &mut KeyOutCatcher) -> Result<(), ()> {
        output.ops.push(Op::Reinject(event));
        Ok(())
    }
}

pub fn check_output(keyboard: &Keyboard<KeyOutCatcher>, should: &[&[KeyCode]]) {
    check_reports(&keyboard.output, should)
}

pub fn check_reports(output: &KeyOutCatcher, should: &[&[KeyCode]]) {
    assert_eq!(should.len(), output.reports.len(), "{:?}", output.reports);
    for (ii, report) in should.iter().enumerate() {
        assert_eq!(output.reports[ii].len(), report.len(), "{:?}", output.reports);
        for k in report.iter() {
            assert!(output.reports[ii].contains(&k.to_u8()), "{:?}", output.reports);
        }
    }
}
