//! # ErgoDox types
//!
//! Fundamental type definitions shared by the ErgoDox EZ keymap crates.
//!
//! ## Modules
//!
//! - [`action`] - What a key position does: send a key, switch a layer, fire a user keycode
//! - [`keycode`] - HID keycodes, consumer keys and system control keys
//! - [`modifier`] - The HID modifier byte
//! - [`led_indicator`] - Lock LED state reported by the host

#![no_std]

pub mod action;
pub mod keycode;
pub mod led_indicator;
pub mod modifier;
