//! Layer tables of the two keymap variants.

pub mod standard;
pub mod umlaut;

use crate::action::{Action, KeyAction};

pub const ROW: usize = 14;
pub const COL: usize = 6;
pub const NUM_LAYER: usize = 3;

/// A full ErgoDox EZ layer table
pub type Layers = [[[KeyAction; COL]; ROW]; NUM_LAYER];

/// Falls through to the layer below
pub(crate) const ___: KeyAction = KeyAction::Transparent;
/// Reboots into the bootloader
pub(crate) const BOOT: KeyAction = KeyAction::Single(Action::Bootloader);

/// The keymap flavours, selected when the keyboard is created
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeymapVariant {
    /// The classic layout, only the version key is custom
    Standard,
    /// The classic layout plus German umlauts and ß on the system layer
    Umlaut,
}

impl KeymapVariant {
    /// Keymap name, as typed by the version key
    pub const fn name(self) -> &'static str {
        match self {
            KeymapVariant::Standard => "standard",
            KeymapVariant::Umlaut => "umlaut",
        }
    }

    pub fn get_keymap(self) -> &'static Layers {
        match self {
            KeymapVariant::Standard => standard::get_keymap(),
            KeymapVariant::Umlaut => umlaut::get_keymap(),
        }
    }

    /// Whether umlaut and ß keys are composed, otherwise they pass through to the runtime
    pub const fn composes_umlauts(self) -> bool {
        matches!(self, KeymapVariant::Umlaut)
    }
}
