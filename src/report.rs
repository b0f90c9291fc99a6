use crate::key_codes::{AcceptsKeycode, KeyCode, KeyCodeInfo};
use crate::{KeyboardState, USBKeyOut};

/// size of a boot protocol keyboard report
pub const REPORT_SIZE: usize = 8;
const KEY_SLOTS: usize = 6;

/// where finished reports go - typically the HID endpoint of the board
pub trait ReportWriter {
    fn write(&mut self, report: &[u8]);
}

/// A boot protocol keyboard report under construction.
///
/// press/release accumulate, send_report writes
/// `[modifiers, 0, k1..k6]` to the writer. The report is kept
/// after sending, so the next one starts from the same keys.
///
/// More than six non-modifier keys don't fit, the extra ones are dropped.
pub struct HidReport<W: ReportWriter> {
    modifiers: u8,
    keys: heapless::Vec<u8, KEY_SLOTS>,
    state: KeyboardState,
    pub writer: W,
}

impl<W: ReportWriter> HidReport<W> {
    pub fn new(writer: W) -> HidReport<W> {
        HidReport {
            modifiers: 0,
            keys: heapless::Vec::new(),
            state: KeyboardState::new(),
            writer,
        }
    }

    /// the report as it would be sent right now
    pub fn report(&self) -> [u8; REPORT_SIZE] {
        let mut report = [0; REPORT_SIZE];
        report[0] = self.modifiers;
        for (slot, key) in report[2..].iter_mut().zip(self.keys.iter()) {
            *slot = *key;
        }
        report
    }

    fn modifier_bit(key: KeyCode) -> u8 {
        1 << (key.to_u32() - KeyCode::LCtrl.to_u32())
    }
}

impl<W: ReportWriter> USBKeyOut for HidReport<W> {
    fn press(&mut self, key: KeyCode) {
        if key == KeyCode::No {
            return;
        }
        if key.to_u32().is_modifier() {
            self.modifiers |= Self::modifier_bit(key);
        } else if !self.keys.contains(&key.to_u8()) && self.keys.push(key.to_u8()).is_err() {
            warn!("report full, dropping keycode {}", key.to_u8());
        }
    }

    fn release(&mut self, key: KeyCode) {
        if key.to_u32().is_modifier() {
            self.modifiers &= !Self::modifier_bit(key);
        } else {
            self.keys.retain(|k| *k != key.to_u8());
        }
    }

    fn send_report(&mut self) {
        let report = self.report();
        self.writer.write(&report);
    }

    fn state(&mut self) -> &mut KeyboardState {
        &mut self.state
    }
}
