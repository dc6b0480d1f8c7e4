use core::ops::BitOr;

use bitfield_struct::bitfield;

/// The modifier byte of a HID keyboard report, one bit per physical modifier key.
///
/// | bit7 | bit6 | bit5 | bit4 | bit3 | bit2 | bit1 | bit0 |
/// | --- | --- | --- | --- | --- | --- | --- | --- |
/// | RGUI | RALT | RSHIFT | RCTRL | LGUI | LALT | LSHIFT | LCTRL |
#[bitfield(u8, order = Lsb, defmt = cfg(feature = "defmt"))]
#[derive(Eq, PartialEq)]
pub struct HidModifiers {
    #[bits(1)]
    pub left_ctrl: bool,
    #[bits(1)]
    pub left_shift: bool,
    #[bits(1)]
    pub left_alt: bool,
    #[bits(1)]
    pub left_gui: bool,
    #[bits(1)]
    pub right_ctrl: bool,
    #[bits(1)]
    pub right_shift: bool,
    #[bits(1)]
    pub right_alt: bool,
    #[bits(1)]
    pub right_gui: bool,
}

impl BitOr for HidModifiers {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() | rhs.into_bits())
    }
}

impl HidModifiers {
    pub const LSHIFT: Self = Self::new().with_left_shift(true);
    pub const RSHIFT: Self = Self::new().with_right_shift(true);

    /// Either shift key is held
    pub fn shift(self) -> bool {
        self.left_shift() || self.right_shift()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_shift_either_side() {
        assert!(HidModifiers::LSHIFT.shift());
        assert!(HidModifiers::RSHIFT.shift());
        assert!(!HidModifiers::new().with_left_ctrl(true).shift());
    }
}
