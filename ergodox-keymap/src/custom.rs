use crate::action::Action;
use crate::keycode::HidKeyCode;

/// Keycodes handled by the keymap itself, stored in the layer table as `Action::User(index)`
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CustomKeycode {
    /// Types the keyboard, keymap and firmware version
    Version = 0,
    /// ä / Ä
    UmlautA = 1,
    /// ö / Ö
    UmlautO = 2,
    /// ü / Ü
    UmlautU = 3,
    /// ß
    SharpS = 4,
}

impl CustomKeycode {
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Version),
            1 => Some(Self::UmlautA),
            2 => Some(Self::UmlautO),
            3 => Some(Self::UmlautU),
            4 => Some(Self::SharpS),
            _ => None,
        }
    }

    pub fn from_action(action: Action) -> Option<Self> {
        match action {
            Action::User(index) => Self::from_index(index),
            _ => None,
        }
    }

    pub const fn to_action(self) -> Action {
        Action::User(self as u8)
    }

    /// The key tapped with the compose modifier held, followed by the base letter if there is one
    pub(crate) fn compose_sequence(self) -> Option<(HidKeyCode, Option<HidKeyCode>)> {
        match self {
            Self::Version => None,
            Self::UmlautA => Some((HidKeyCode::U, Some(HidKeyCode::A))),
            Self::UmlautO => Some((HidKeyCode::U, Some(HidKeyCode::O))),
            Self::UmlautU => Some((HidKeyCode::U, Some(HidKeyCode::U))),
            Self::SharpS => Some((HidKeyCode::S, None)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_index_mapping() {
        for index in 0..5 {
            let code = CustomKeycode::from_index(index).unwrap();
            assert_eq!(code.to_action(), Action::User(index));
            assert_eq!(CustomKeycode::from_action(Action::User(index)), Some(code));
        }
        assert_eq!(CustomKeycode::from_index(5), None);
        assert_eq!(CustomKeycode::from_action(Action::LayerOn(0)), None);
    }
}
