//! ErgoDox EZ keymaps.
//!
//! Two keymap variants share a three layer table (typing, system/media and mouse). The crate provides the layer
//! stack, a dispatcher for the keymap's own keycodes and the status LEDs. Matrix scanning and HID reports are left
//! to the firmware runtime, reached through [`host::KeyboardHost`].

#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
#[macro_use]
mod fmt;

pub mod custom;
pub mod event;
pub mod host;
pub mod keyboard;
pub mod keymap;
pub mod keymaps;
mod layout_macro;
pub mod light;
pub mod processor;

pub use ergodox_types::{action, keycode, led_indicator, modifier};
pub use keyboard::ErgodoxKeyboard;
pub use keymaps::KeymapVariant;

include!(concat!(env!("OUT_DIR"), "/constants.rs"));
