//! Custom keycode dispatcher, runs before the default key handling.

use crate::action::Action;
use crate::custom::CustomKeycode;
use crate::host::{KeyboardHost, MacroOperation};
use crate::keycode::HidKeyCode;
use crate::keymaps::KeymapVariant;
use crate::modifier::HidModifiers;

/// Whether the default handling should still run for a key event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProcessResult {
    /// Not handled here, pass the key on
    Continue,
    /// Handled, the key must not reach the host
    Stop,
}

pub struct CustomKeyProcessor {
    variant: KeymapVariant,
    keyboard_name: &'static str,
    firmware_version: &'static str,
    compose_key: HidKeyCode,
}

impl CustomKeyProcessor {
    /// Create a processor using the build time keyboard name, version and compose key
    pub fn new(variant: KeymapVariant) -> Self {
        Self::with_identity(
            variant,
            crate::KEYBOARD_NAME,
            crate::FIRMWARE_VERSION,
            crate::COMPOSE_KEY,
        )
    }

    pub fn with_identity(
        variant: KeymapVariant,
        keyboard_name: &'static str,
        firmware_version: &'static str,
        compose_key: HidKeyCode,
    ) -> Self {
        Self {
            variant,
            keyboard_name,
            firmware_version,
            compose_key,
        }
    }

    pub fn variant(&self) -> KeymapVariant {
        self.variant
    }

    /// Handle a resolved action.
    ///
    /// Custom keycodes act on press only, their release is swallowed. Everything else continues untouched.
    pub fn process<H: KeyboardHost>(&self, host: &mut H, action: Action, pressed: bool) -> ProcessResult {
        let Some(code) = CustomKeycode::from_action(action) else {
            return ProcessResult::Continue;
        };

        match code {
            CustomKeycode::Version => {
                if pressed {
                    self.send_version(host);
                }
                ProcessResult::Stop
            }
            _ if !self.variant.composes_umlauts() => ProcessResult::Continue,
            _ => {
                if pressed {
                    self.compose(host, code);
                }
                ProcessResult::Stop
            }
        }
    }

    fn send_version<H: KeyboardHost>(&self, host: &mut H) {
        info!(
            "Sending version {}:{} {}",
            self.keyboard_name,
            self.variant.name(),
            self.firmware_version
        );
        host.send_string(self.keyboard_name);
        host.send_string(":");
        host.send_string(self.variant.name());
        host.send_string(" ");
        host.send_string(self.firmware_version);
    }

    /// Dead key composition: modifier + dead key, then the base letter.
    ///
    /// Held modifiers are cleared for the sequence and restored afterwards, shift only decides the case.
    fn compose<H: KeyboardHost>(&self, host: &mut H, code: CustomKeycode) {
        let Some((dead_key, letter)) = code.compose_sequence() else {
            return;
        };
        let saved = host.modifiers();
        let shifted = saved.shift();
        debug!("Composing {:?}, shifted: {}", code, shifted);

        host.set_modifiers(HidModifiers::new());
        host.run_macro(&[
            MacroOperation::Press(self.compose_key.into()),
            MacroOperation::Tap(dead_key.into()),
            MacroOperation::Release(self.compose_key.into()),
        ]);
        if let Some(letter) = letter {
            host.run_macro(&[MacroOperation::Text(letter, shifted)]);
        }
        host.set_modifiers(saved);
    }
}
