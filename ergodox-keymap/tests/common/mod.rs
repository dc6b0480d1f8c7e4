#![allow(dead_code)]

use core::convert::Infallible;
use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin, PinState};
use ergodox_keymap::host::KeyboardHost;
use ergodox_keymap::keycode::{HidKeyCode, KeyCode, to_ascii};
use ergodox_keymap::modifier::HidModifiers;

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// Everything the keymap asked the runtime to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOp {
    Press(KeyCode),
    Release(KeyCode),
    SetModifiers(HidModifiers),
    Bootloader,
}

pub fn press(key: HidKeyCode) -> HostOp {
    HostOp::Press(key.into())
}

pub fn release(key: HidKeyCode) -> HostOp {
    HostOp::Release(key.into())
}

/// A host that records operations and tracks the held modifiers
#[derive(Debug, Default)]
pub struct TestHost {
    pub ops: Vec<HostOp>,
    pub modifiers: HidModifiers,
}

impl TestHost {
    pub fn with_modifiers(modifiers: HidModifiers) -> Self {
        Self {
            ops: Vec::new(),
            modifiers,
        }
    }

    /// Decode the recorded key presses back into the text they type on an en-us layout
    pub fn typed_text(&self) -> String {
        let mut shift = false;
        let mut text = String::new();
        for op in &self.ops {
            match op {
                HostOp::Press(KeyCode::Hid(HidKeyCode::LShift | HidKeyCode::RShift)) => shift = true,
                HostOp::Release(KeyCode::Hid(HidKeyCode::LShift | HidKeyCode::RShift)) => shift = false,
                HostOp::Press(KeyCode::Hid(key)) => {
                    if let Some(c) = to_ascii(*key, shift) {
                        text.push(c as char);
                    }
                }
                _ => {}
            }
        }
        text
    }
}

impl KeyboardHost for TestHost {
    fn modifiers(&self) -> HidModifiers {
        self.modifiers
    }

    fn set_modifiers(&mut self, modifiers: HidModifiers) {
        self.modifiers = modifiers;
        self.ops.push(HostOp::SetModifiers(modifiers));
    }

    fn press(&mut self, key: KeyCode) {
        self.ops.push(HostOp::Press(key));
    }

    fn release(&mut self, key: KeyCode) {
        self.ops.push(HostOp::Release(key));
    }

    fn jump_to_bootloader(&mut self) {
        self.ops.push(HostOp::Bootloader);
    }
}

/// A pin that records the states it was set to, and can be told to fail
#[derive(Clone, Default)]
pub struct RecordingPin {
    pub states: Rc<RefCell<Vec<PinState>>>,
    pub fail: bool,
}

impl RecordingPin {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn last(&self) -> Option<PinState> {
        self.states.borrow().last().copied()
    }
}

impl ErrorType for RecordingPin {
    type Error = ErrorKind;
}

impl OutputPin for RecordingPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        if self.fail {
            return Err(ErrorKind::Other);
        }
        self.states.borrow_mut().push(PinState::Low);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        if self.fail {
            return Err(ErrorKind::Other);
        }
        self.states.borrow_mut().push(PinState::High);
        Ok(())
    }
}

/// A pin that never fails, for tests that don't look at the LEDs
#[derive(Clone, Copy, Default)]
pub struct NoopPin;

impl ErrorType for NoopPin {
    type Error = Infallible;
}

impl OutputPin for NoopPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
