//! The seam between the keymap and the firmware runtime that owns the HID reports.

use crate::keycode::{HidKeyCode, KeyCode, from_ascii};
use crate::modifier::HidModifiers;

/// A single step of a key sequence sent to the host
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MacroOperation {
    /// Press and release a key
    Tap(KeyCode),
    /// Press a key
    Press(KeyCode),
    /// Release a key
    Release(KeyCode),
    /// A typed character, the bool is whether it needs shift
    Text(HidKeyCode, bool),
}

/// The keyboard runtime: matrix scanning, report generation and persistence live behind this trait.
pub trait KeyboardHost {
    /// Modifiers currently held, as sent in the next report
    fn modifiers(&self) -> HidModifiers;

    /// Replace the held modifiers
    fn set_modifiers(&mut self, modifiers: HidModifiers);

    fn press(&mut self, key: KeyCode);

    fn release(&mut self, key: KeyCode);

    /// Reboot into the bootloader
    fn jump_to_bootloader(&mut self);

    fn tap(&mut self, key: KeyCode) {
        self.press(key);
        self.release(key);
    }

    fn run_macro(&mut self, operations: &[MacroOperation]) {
        for operation in operations {
            match *operation {
                MacroOperation::Tap(key) => self.tap(key),
                MacroOperation::Press(key) => self.press(key),
                MacroOperation::Release(key) => self.release(key),
                MacroOperation::Text(keycode, shifted) => {
                    if shifted {
                        self.press(HidKeyCode::LShift.into());
                        self.tap(keycode.into());
                        self.release(HidKeyCode::LShift.into());
                    } else {
                        self.tap(keycode.into());
                    }
                }
            }
        }
    }

    /// Type an ascii string on an en-us layout
    fn send_string(&mut self, text: &str) {
        for c in text.bytes() {
            let (keycode, shifted) = from_ascii(c);
            if keycode == HidKeyCode::No {
                warn!("Cannot type character {}", c);
                continue;
            }
            self.run_macro(&[MacroOperation::Text(keycode, shifted)]);
        }
    }
}
