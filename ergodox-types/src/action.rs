//! Keyboard actions.
//!
//! Key types:
//! - [`Action`] - Single operations that a key position performs
//! - [`KeyAction`] - What is stored at a keymap position

use crate::keycode::KeyCode;

/// A KeyAction is the action at a keyboard position, stored in keymap.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// No action. The position does nothing on any layer below either.
    No,
    /// Transparent action, next layer will be checked.
    Transparent,
    /// A single action, triggered when pressed and cancelled when released.
    Single(Action),
}

/// A single basic action that a keyboard can execute.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Default action, no action.
    No,
    /// A normal key stroke, including mouse keys, consumer and system control keys.
    Key(KeyCode),
    /// Activate a layer while the key is held
    LayerOn(u8),
    /// Reboot into the bootloader for flashing
    Bootloader,
    /// A keymap-defined keycode, handled by the keymap itself instead of the firmware.
    /// The index is the position in the keymap's custom keycode list.
    User(u8),
}
