//! The classic layout with German umlauts and ß on layer 1.
//!
//! The umlauts sit on the home row positions of their base letters: Ä on A, Ü on J, Ö on L and ß on D.
//! Layers 0 and 2 are shared with the standard keymap.

use super::standard::{BASE_LAYER, MOUSE_LAYER};
use super::{___, BOOT, Layers};
use crate::action::KeyAction;
use crate::{consumer, ergodox_layout, k, system, user};

/// Layer 1: media, system, locks, coarse navigation and umlauts.
///
/// ```text
/// ,-----------------------------------.  ,-----------------------------------.
/// | RST | F1 | F2 | F3 | F4 | F5 |F11 |  |F12 | F6 | F7 | F8 | F9 |F10 |Power|
/// |-----+----+----+----+----+---------|  |----+----+----+----+----+----+-----|
/// | F13 |F14 |F15 |F16 |F17 |F18 |VolD|  |VolU|F19 |F20 |F21 |F22 |F23 |Wake |
/// |-----+----+----+----+----+----|    |  |    |----+----+----+----+----+-----|
/// |Eject| Ä  |ScLk| ß  |File|    |----|  |----|    | Ü  |    | Ö  |    |Sleep|
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
const SYSTEM_LAYER: [[KeyAction; super::COL]; super::ROW] = ergodox_layout!(
    BOOT,               k!(F1),          k!(F2),         k!(F3),         k!(F4),                  k!(F5),  k!(F11),
    k!(F13),            k!(F14),         k!(F15),        k!(F16),        k!(F17),                 k!(F18), consumer!(VolumeDecrement),
    consumer!(Eject),   user!(UmlautA),  k!(ScrollLock), user!(SharpS),  consumer!(LocalBrowser), ___,
    k!(LShift),         ___,             ___,            k!(CapsLock),   user!(Version),          ___,     consumer!(Mute),
    ___,                k!(PrintScreen), ___,            k!(Home),       k!(End),

                                                                  ___, ___,
                                                                       consumer!(Rewind),
                                          consumer!(PrevTrack), consumer!(StopPlay), ___,

    k!(F12),                    k!(F6),         k!(F7),          k!(F8),         k!(F9),       k!(F10), system!(PowerDown),
    consumer!(VolumeIncrement), k!(F19),        k!(F20),         k!(F21),        k!(F22),      k!(F23), system!(WakeUp),
                                ___,            user!(UmlautU),  ___,            user!(UmlautO), ___,   system!(Sleep),
    consumer!(Mute),            k!(NumLock),    consumer!(Mute), ___,            ___,          ___,     k!(RShift),
                                                k!(PageUp),      k!(PageDown),   ___,          k!(Pause), ___,

    k!(RAlt), k!(RCtrl),
    consumer!(FastForward),
    ___,      consumer!(PlayPause), consumer!(NextTrack)
);

static KEYMAP: Layers = [BASE_LAYER, SYSTEM_LAYER, MOUSE_LAYER];

pub fn get_keymap() -> &'static Layers {
    &KEYMAP
}
