use crate::key_stream::{KeyEvent, KeyState};
use crate::{Keyboard, USBKeyOut};
use smallbitvec::{sbvec, SmallBitVec};

/// Turns scanned switch states into key events.
///
/// Keys are numbered row by row, `columns` keys per row;
/// translation maps each of them to a keycode.
/// At most 256 rows, so every location fits the event's u8 row and col.
pub struct MatrixToStream<'a> {
    last_state: SmallBitVec,
    translation: &'a [u32],
    columns: u8,
}

impl<'a> MatrixToStream<'a> {
    pub fn new(translation: &'a [u32], columns: u8) -> MatrixToStream<'a> {
        assert!(columns > 0);
        assert!(translation.len() <= columns as usize * 256);
        MatrixToStream {
            last_state: sbvec![false; translation.len()],
            translation,
            columns,
        }
    }

    /// run one scan cycle through the keyboard
    ///
    /// every key that is down now or was down last cycle becomes an event,
    /// unhandled ones are dropped. The cycle ends with one report.
    pub fn update<T: USBKeyOut>(&mut self, new_state: &SmallBitVec, keyboard: &mut Keyboard<T>) {
        assert!(new_state.len() == self.last_state.len());
        for (ii, (old, new)) in self.last_state.iter().zip(new_state.iter()).enumerate() {
            if !old && !new {
                continue;
            }
            let state = KeyState {
                pressed: new,
                was_pressed: old,
                injected: false,
            };
            let event = KeyEvent {
                keycode: self.translation[ii],
                row: (ii / self.columns as usize) as u8,
                col: (ii % self.columns as usize) as u8,
                state,
            };
            if keyboard.handle_key_event(event).is_err() {
                debug!("no handler for keycode {}", event.keycode);
            }
        }
        keyboard.output.send_report();
        self.last_state = new_state.clone();
    }
}

#[cfg(test)]
mod tests {
    use crate::handlers::{TopsyTurvy, USBKeyboard};
    use crate::key_codes::AcceptsKeycode;
    use crate::key_codes::KeyCode::*;
    use crate::key_stream::KeyEvent;
    use crate::matrix::MatrixToStream;
    use crate::test_helpers::{check_output, KeyOutCatcher, Op};
    use crate::{Keyboard, USBKeyOut};
    use no_std_compat::prelude::v1::*;
    use smallbitvec::sbvec;

    #[test]
    fn test_matrix_to_stream() {
        let trans = [A.to_u32(), Z.to_u32(), 0xF0000];
        let mut matrix = MatrixToStream::new(&trans, 2);
        let mut state = sbvec![false; 3];
        let mut keyboard = Keyboard::new(KeyOutCatcher::new());
        keyboard.add_handler(Box::new(USBKeyboard::new()));
        state.set(0, true);
        matrix.update(&state, &mut keyboard);
        check_output(&keyboard, &[&[A]]);
        matrix.update(&state, &mut keyboard);
        check_output(&keyboard, &[&[A], &[A]]);
        state.set(0, false);
        state.set(1, true);
        matrix.update(&state, &mut keyboard);
        check_output(&keyboard, &[&[A], &[A], &[Z]]);
        state.set(1, false);
        // unhandled keys get dropped, the cycle still reports
        state.set(2, true);
        matrix.update(&state, &mut keyboard);
        check_output(&keyboard, &[&[A], &[A], &[Z], &[]]);
        state.set(2, false);
        matrix.update(&state, &mut keyboard);
        matrix.update(&state, &mut keyboard);
        check_output(&keyboard, &[&[A], &[A], &[Z], &[], &[], &[]]);
    }

    #[test]
    #[should_panic]
    fn test_matrix_needs_columns() {
        let trans = [A.to_u32()];
        MatrixToStream::new(&trans, 0);
    }

    #[test]
    #[should_panic]
    fn test_matrix_rows_fit_u8() {
        let trans = [A.to_u32(); 257];
        MatrixToStream::new(&trans, 1);
    }

    #[test]
    fn test_matrix_last_row() {
        let trans = [A.to_u32(); 256];
        let mut matrix = MatrixToStream::new(&trans, 1);
        let mut state = sbvec![false; 256];
        let mut keyboard = Keyboard::new(KeyOutCatcher::new());
        keyboard.add_handler(Box::new(USBKeyboard::new()));
        state.set(255, true);
        matrix.update(&state, &mut keyboard);
        check_output(&keyboard, &[&[A]]);
    }

    /// records every event it sees
    struct EventLog {
        events: alloc::sync::Arc<spin::RwLock<Vec<KeyEvent>>>,
    }
    impl<T: USBKeyOut> crate::handlers::ProcessKeys<T> for EventLog {
        fn process_key(
            &mut self,
            event: KeyEvent,
            _pipeline: &mut dyn crate::handlers::HandleKeyEvent<T>,
            _output: &mut T,
        ) -> crate::EventStatus {
            self.events.write().push(event);
            crate::EventStatus::Unhandled(event)
        }
    }

    #[test]
    fn test_matrix_locations_and_states() {
        let trans = [A.to_u32(), B.to_u32(), C.to_u32(), D.to_u32()];
        let mut matrix = MatrixToStream::new(&trans, 2);
        let events = alloc::sync::Arc::new(spin::RwLock::new(Vec::new()));
        let mut keyboard = Keyboard::new(KeyOutCatcher::new());
        keyboard.add_handler(Box::new(EventLog {
            events: events.clone(),
        }));
        keyboard.add_handler(Box::new(USBKeyboard::new()));
        let mut state = sbvec![false; 4];
        state.set(3, true);
        matrix.update(&state, &mut keyboard);
        matrix.update(&state, &mut keyboard);
        state.set(3, false);
        matrix.update(&state, &mut keyboard);
        let seen = events.read();
        assert_eq!(seen.len(), 3);
        assert!(seen.iter().all(|e| e.keycode == D.to_u32()));
        assert!(seen.iter().all(|e| e.row == 1 && e.col == 1));
        assert!(seen[0].state.toggled_on());
        assert!(seen[1].state.is_held());
        assert!(seen[2].state.toggled_off());
    }

    #[test]
    fn test_matrix_with_topsy_turvy() {
        let list = [Kb1.to_u32()];
        let trans = [LShift.to_u32(), Kb1.to_u32()];
        let mut matrix = MatrixToStream::new(&trans, 2);
        let mut keyboard = Keyboard::new(KeyOutCatcher::new());
        let id = keyboard.add_handler(Box::new(TopsyTurvy::new(Some(&list))));
        keyboard.add_handler(Box::new(USBKeyboard::new()));
        keyboard.output.state().enable_handler(id);
        let mut state = sbvec![false; 2];

        // Kb1 alone comes out shifted
        state.set(1, true);
        matrix.update(&state, &mut keyboard);
        check_output(&keyboard, &[&[LShift, Kb1], &[LShift, Kb1]]);
        keyboard.output.clear();
        state.set(1, false);
        matrix.update(&state, &mut keyboard);
        // the synthetic shift goes away with the cycle's own report
        check_output(&keyboard, &[&[LShift], &[]]);
        keyboard.output.clear();

        // with shift held it comes out plain
        state.set(0, true);
        matrix.update(&state, &mut keyboard);
        check_output(&keyboard, &[&[LShift]]);
        keyboard.output.clear();
        state.set(1, true);
        matrix.update(&state, &mut keyboard);
        assert_eq!(
            keyboard.output.ops,
            vec![
                Op::Press(LShift),
                Op::Release(LShift),
                Op::Release(RShift),
                Op::SendReport,
                Op::Press(Kb1),
                Op::SendReport,
                Op::Press(LShift),
                Op::SendReport,
            ]
        );
        check_output(&keyboard, &[&[], &[Kb1], &[LShift, Kb1]]);
    }
}
