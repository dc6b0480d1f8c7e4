//! The classic layout, inspired by the Kinesis Advantage.
//!
//! All standard US keys can be combined with Ctrl, Alt, Shift and Gui, and the modifiers are symmetric.
//! The right hand LEDs show layer 1, layer 2 and the lock keys, in that order.

use super::{___, BOOT, Layers};
use crate::action::KeyAction;
use crate::{consumer, ergodox_layout, k, mo, system, user};

/// Layer 0: basic typing.
///
/// ```text
/// ,-----------------------------------.  ,-----------------------------------.
/// |  =  | 1  | 2  | 3  | 4  | 5  | -  |  |  = | 6  | 7  | 8  | 9  | 0  |  -  |
/// |-----+----+----+----+----+---------|  |----+----+----+----+----+----+-----|
/// | Tab | Q  | W  | E  | R  | T  |Back|  | Fwd| Y  | U  | I  | O  | P  |  \  |
/// |-----+----+----+----+----+----|    |  |    |----+----+----+----+----+-----|
/// | Esc | A  | S  | D  | F  | G  |----|  |----| H  | J  | K  | L  | ;  |  '  |
/// |-----+----+----+----+----+----| [  |  |Menu|----+----+----+----+----+-----|
/// |Shift| Z  | X  | C  | V  | B  |    |  |    | N  | M  | ,  | .  | /  |Shift|
/// `-----+----+----+----+----+---------'  `---------+----+----+----+----+-----'
///  | L2 | `  |Ins |Lft |Rgt |                      | Up | Dwn| [  |  ] | L2 |
///  `------------------------'                      `------------------------'
///                           ,---------.  ,---------.
///                           |Ctl |Alt |  |Alt |Ctl |
///                      ,----|----|----|  |----+----+----.
///                      |    |    |Gui |  |Gui |    |    |
///                      |BSpc|Del |----|  |----|Ent |Spc |
///                      |    |    | L1 |  | L1 |    |    |
///                      `--------------'  `--------------'
/// ```
#[rustfmt::skip]
pub(crate) const BASE_LAYER: [[KeyAction; super::COL]; super::ROW] = ergodox_layout!(
    k!(Equal),  k!(Kc1),   k!(Kc2),    k!(Kc3),  k!(Kc4),   k!(Kc5),   k!(Minus),
    k!(Tab),    k!(Q),     k!(W),      k!(E),    k!(R),     k!(T),     consumer!(Back),
    k!(Escape), k!(A),     k!(S),      k!(D),    k!(F),     k!(G),
    k!(LShift), k!(Z),     k!(X),      k!(C),    k!(V),     k!(B),     k!(LeftBracket),
    mo!(2),     k!(Grave), k!(Insert), k!(Left), k!(Right),

                                                       k!(LCtrl), k!(LAlt),
                                                                  k!(LGui),
                                          k!(Backspace), k!(Delete), mo!(1),

    k!(Equal),        k!(Kc6), k!(Kc7), k!(Kc8),     k!(Kc9),          k!(Kc0),       k!(Minus),
    consumer!(Forward), k!(Y), k!(U),   k!(I),       k!(O),            k!(P),         k!(Backslash),
                      k!(H),   k!(J),   k!(K),       k!(L),            k!(Semicolon), k!(Quote),
    k!(Application),  k!(N),   k!(M),   k!(Comma),   k!(Dot),          k!(Slash),     k!(RShift),
                               k!(Up),  k!(Down),    k!(LeftBracket),  k!(RightBracket), mo!(2),

    k!(RAlt), k!(RCtrl),
    k!(RGui),
    mo!(1),   k!(Enter), k!(Space)
);

/// Layer 1: media, system, locks and coarse navigation.
///
/// The second row follows the Macbook function keys, volume down and up sit where F11 and F12 would.
/// Home, End, PgUp and PgDn line up with the base layer arrows. Lock keys are mnemonic (s, c, n).
///
/// ```text
/// ,-----------------------------------.  ,-----------------------------------.
/// | RST | F1 | F2 | F3 | F4 | F5 |F11 |  |F12 | F6 | F7 | F8 | F9 |F10 |Power|
/// |-----+----+----+----+----+---------|  |----+----+----+----+----+----+-----|
/// | F13 |F14 |F15 |F16 |F17 |F18 |VolD|  |VolU|F19 |F20 |F21 |F22 |F23 |Wake |
/// |-----+----+----+----+----+----|    |  |    |----+----+----+----+----+-----|
/// |Eject|    |ScLk|    |File|    |----|  |----|    |    |    |    |    |Sleep|
/// |-----+----+----+----+----+----|Mute|  |Mute|----+----+----+----+----+-----|
/// |Shift|    |    |CpLk|Vrsn|    |    |  |    |NmLk|Mute|    |    |    |Shift|
/// `-----+----+----+----+----+---------'  `---------+----+----+----+----+-----'
///  |    |Pr/S|    |Home|End |                      |PgUp|PgDn|    |P/Bk|    |
///  `------------------------'                      `------------------------'
///                           ,---------.  ,---------.
///                           |    |    |  |Alt |Ctl |
///                      ,----|----|----|  |----+----+----.
///                      |    |    |Rwnd|  |FFwd|    |    |
///                      |Prev|Stop|----|  |----|Play|Next|
///                      |    |    |    |  |    |    |    |
///                      `--------------'  `--------------'
/// ```
#[rustfmt::skip]
pub(crate) const SYSTEM_LAYER: [[KeyAction; super::COL]; super::ROW] = ergodox_layout!(
    BOOT,               k!(F1),         k!(F2),    k!(F3),         k!(F4),                k!(F5),  k!(F11),
    k!(F13),            k!(F14),        k!(F15),   k!(F16),        k!(F17),               k!(F18), consumer!(VolumeDecrement),
    consumer!(Eject),   ___,            k!(ScrollLock), ___,       consumer!(LocalBrowser), ___,
    k!(LShift),         ___,            ___,       k!(CapsLock),   user!(Version),        ___,     consumer!(Mute),
    ___,                k!(PrintScreen), ___,      k!(Home),       k!(End),

                                                                  ___, ___,
                                                                       consumer!(Rewind),
                                          consumer!(PrevTrack), consumer!(StopPlay), ___,

    k!(F12),                    k!(F6),      k!(F7),         k!(F8),    k!(F9),     k!(F10), system!(PowerDown),
    consumer!(VolumeIncrement), k!(F19),     k!(F20),        k!(F21),   k!(F22),    k!(F23), system!(WakeUp),
                                ___,         ___,            ___,       ___,        ___,     system!(Sleep),
    consumer!(Mute),            k!(NumLock), consumer!(Mute), ___,      ___,        ___,     k!(RShift),
                                             k!(PageUp),     k!(PageDown), ___,     k!(Pause), ___,

    k!(RAlt), k!(RCtrl),
    consumer!(FastForward),
    ___,      consumer!(PlayPause), consumer!(NextTrack)
);

/// Layer 2: mouse.
///
/// A mirrored WASD-like cluster with the wheel on the outside and buttons on the thumbs.
///
/// ```text
/// ,-----------------------------------.  ,-----------------------------------.
/// |     |    |    | WU |    |    |Acl2|  |Acl2|    |    | WU |    |    |     |
/// |-----+----+----+----+----+---------|  |----+----+----+----+----+----+-----|
/// |     |    |    | MU |    |    |Acl1|  |Acl1|    |    | MU |    |    |     |
/// |-----+----+----+----+----+----|    |  |    |----+----+----+----+----+-----|
/// |     | WL | ML | MD | MR | WR |----|  |----| WL | ML | MD | MR | WR |     |
/// |-----+----+----+----+----+----|Acl0|  |Acl0|----+----+----+----+----+-----|
/// |     |    |    | WD |    |    |    |  |    |    |    | WD |    |    |     |
/// `-----+----+----+----+----+---------'  `---------+----+----+----+----+-----'
///  |    |    |    | ML | MR |                      | MU | MD |    |    |    |
///  `------------------------'                      `------------------------'
///                           ,---------.  ,---------.
///                           |But4|But5|  |But5|But4|
///                      ,----|----|----|  |----+----+----.
///                      |    |    |But3|  |But3|    |    |
///                      |But1|But2|----|  |----|But2|But1|
///                      |    |    |    |  |    |    |    |
///                      `--------------'  `--------------'
/// ```
#[rustfmt::skip]
pub(crate) const MOUSE_LAYER: [[KeyAction; super::COL]; super::ROW] = ergodox_layout!(
    ___, ___,                ___,            k!(MouseWheelUp),   ___,             ___,                 k!(MouseAccel2),
    ___, ___,                ___,            k!(MouseUp),        ___,             ___,                 k!(MouseAccel1),
    ___, k!(MouseWheelLeft), k!(MouseLeft),  k!(MouseDown),      k!(MouseRight),  k!(MouseWheelRight),
    ___, ___,                ___,            k!(MouseWheelDown), ___,             ___,                 k!(MouseAccel0),
    ___, ___,                ___,            k!(MouseLeft),      k!(MouseRight),

                                                  k!(MouseBtn4), k!(MouseBtn5),
                                                                 k!(MouseBtn3),
                                   k!(MouseBtn1), k!(MouseBtn2), ___,

    k!(MouseAccel2), ___,                ___,           k!(MouseWheelUp),   ___,            ___,                 ___,
    k!(MouseAccel1), ___,                ___,           k!(MouseUp),        ___,            ___,                 ___,
                     k!(MouseWheelLeft), k!(MouseLeft), k!(MouseDown),      k!(MouseRight), k!(MouseWheelRight), ___,
    k!(MouseAccel0), ___,                ___,           k!(MouseWheelDown), ___,            ___,                 ___,
                                         k!(MouseUp),   k!(MouseDown),      ___,            ___,                 ___,

    k!(MouseBtn5), k!(MouseBtn4),
    k!(MouseBtn3),
    ___,           k!(MouseBtn2), k!(MouseBtn1)
);

static KEYMAP: Layers = [BASE_LAYER, SYSTEM_LAYER, MOUSE_LAYER];

pub fn get_keymap() -> &'static Layers {
    &KEYMAP
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::a;
    use crate::action::Action;
    use crate::custom::CustomKeycode;

    #[test]
    fn test_no_custom_compose_keys() {
        for layer in get_keymap() {
            for row in layer {
                for action in row {
                    if let KeyAction::Single(Action::User(index)) = action {
                        assert_eq!(CustomKeycode::from_index(*index), Some(CustomKeycode::Version));
                    }
                }
            }
        }
    }

    #[test]
    fn test_unused_slots_are_empty() {
        for layer in get_keymap() {
            let empty = layer.iter().flatten().filter(|action| **action == a!(No)).count();
            assert_eq!(empty, 8);
        }
    }
}
