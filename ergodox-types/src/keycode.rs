use strum::FromRepr;

/// Key codes on the HID keyboard page, plus the mouse key range.
///
/// Mouse keys (0xCD ~ 0xDF) are not part of the HID keyboard page, they live in the
/// vendor gap so that a single byte addresses every key the mouse layer needs.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HidKeyCode {
    /// Reserved, no-key.
    No = 0x00,
    ErrorRollover = 0x01,
    PostFail = 0x02,
    ErrorUndefined = 0x03,
    A = 0x04,
    B = 0x05,
    C = 0x06,
    D = 0x07,
    E = 0x08,
    F = 0x09,
    G = 0x0A,
    H = 0x0B,
    I = 0x0C,
    J = 0x0D,
    K = 0x0E,
    L = 0x0F,
    M = 0x10,
    N = 0x11,
    O = 0x12,
    P = 0x13,
    Q = 0x14,
    R = 0x15,
    S = 0x16,
    T = 0x17,
    U = 0x18,
    V = 0x19,
    W = 0x1A,
    X = 0x1B,
    Y = 0x1C,
    Z = 0x1D,
    Kc1 = 0x1E,
    Kc2 = 0x1F,
    Kc3 = 0x20,
    Kc4 = 0x21,
    Kc5 = 0x22,
    Kc6 = 0x23,
    Kc7 = 0x24,
    Kc8 = 0x25,
    Kc9 = 0x26,
    Kc0 = 0x27,
    Enter = 0x28,
    Escape = 0x29,
    Backspace = 0x2A,
    Tab = 0x2B,
    Space = 0x2C,
    /// `-` and `_`
    Minus = 0x2D,
    /// `=` and `+`
    Equal = 0x2E,
    /// `[` and `{`
    LeftBracket = 0x2F,
    /// `]` and `}`
    RightBracket = 0x30,
    /// `\` and `|`
    Backslash = 0x31,
    NonusHash = 0x32,
    /// `;` and `:`
    Semicolon = 0x33,
    /// `'` and `"`
    Quote = 0x34,
    /// `` ` `` and `~`
    Grave = 0x35,
    /// `,` and `<`
    Comma = 0x36,
    /// `.` and `>`
    Dot = 0x37,
    /// `/` and `?`
    Slash = 0x38,
    CapsLock = 0x39,
    F1 = 0x3A,
    F2 = 0x3B,
    F3 = 0x3C,
    F4 = 0x3D,
    F5 = 0x3E,
    F6 = 0x3F,
    F7 = 0x40,
    F8 = 0x41,
    F9 = 0x42,
    F10 = 0x43,
    F11 = 0x44,
    F12 = 0x45,
    PrintScreen = 0x46,
    ScrollLock = 0x47,
    Pause = 0x48,
    Insert = 0x49,
    Home = 0x4A,
    PageUp = 0x4B,
    Delete = 0x4C,
    End = 0x4D,
    PageDown = 0x4E,
    Right = 0x4F,
    Left = 0x50,
    Down = 0x51,
    Up = 0x52,
    NumLock = 0x53,
    KpSlash = 0x54,
    KpAsterisk = 0x55,
    KpMinus = 0x56,
    KpPlus = 0x57,
    KpEnter = 0x58,
    Kp1 = 0x59,
    Kp2 = 0x5A,
    Kp3 = 0x5B,
    Kp4 = 0x5C,
    Kp5 = 0x5D,
    Kp6 = 0x5E,
    Kp7 = 0x5F,
    Kp8 = 0x60,
    Kp9 = 0x61,
    Kp0 = 0x62,
    KpDot = 0x63,
    NonusBackslash = 0x64,
    /// `Application`, the menu key
    Application = 0x65,
    KbPower = 0x66,
    KpEqual = 0x67,
    F13 = 0x68,
    F14 = 0x69,
    F15 = 0x6A,
    F16 = 0x6B,
    F17 = 0x6C,
    F18 = 0x6D,
    F19 = 0x6E,
    F20 = 0x6F,
    F21 = 0x70,
    F22 = 0x71,
    F23 = 0x72,
    F24 = 0x73,
    Execute = 0x74,
    Help = 0x75,
    Menu = 0x76,
    Select = 0x77,
    Stop = 0x78,
    Again = 0x79,
    Undo = 0x7A,
    Cut = 0x7B,
    Copy = 0x7C,
    Paste = 0x7D,
    Find = 0x7E,
    KbMute = 0x7F,
    KbVolumeUp = 0x80,
    KbVolumeDown = 0x81,
    LockingCapsLock = 0x82,
    LockingNumLock = 0x83,
    LockingScrollLock = 0x84,
    MouseUp = 0xCD,
    MouseDown = 0xCE,
    MouseLeft = 0xCF,
    MouseRight = 0xD0,
    /// Mouse Button 1(Left)
    MouseBtn1 = 0xD1,
    /// Mouse Button 2(Right)
    MouseBtn2 = 0xD2,
    /// Mouse Button 3(Middle)
    MouseBtn3 = 0xD3,
    /// Mouse Button 4(Back)
    MouseBtn4 = 0xD4,
    /// Mouse Button 5(Forward)
    MouseBtn5 = 0xD5,
    MouseWheelUp = 0xD9,
    MouseWheelDown = 0xDA,
    MouseWheelLeft = 0xDB,
    MouseWheelRight = 0xDC,
    MouseAccel0 = 0xDD,
    MouseAccel1 = 0xDE,
    MouseAccel2 = 0xDF,
    LCtrl = 0xE0,
    LShift = 0xE1,
    LAlt = 0xE2,
    LGui = 0xE3,
    RCtrl = 0xE4,
    RShift = 0xE5,
    RAlt = 0xE6,
    RGui = 0xE7,
}

impl From<u8> for HidKeyCode {
    fn from(value: u8) -> Self {
        Self::from_repr(value).unwrap_or(HidKeyCode::No)
    }
}

/// Any key a keymap position can send, grouped by the HID page it is reported on
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyCode {
    Hid(HidKeyCode),
    Consumer(ConsumerKey),
    SystemControl(SystemControlKey),
}

impl From<HidKeyCode> for KeyCode {
    fn from(value: HidKeyCode) -> Self {
        KeyCode::Hid(value)
    }
}

/// Keys in consumer page
/// Ref: <https://www.usb.org/sites/default/files/documents/hut1_12v2.pdf#page=75>
#[non_exhaustive]
#[repr(u16)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConsumerKey {
    No = 0x00,
    // 15.5 Display Controls
    BrightnessUp = 0x6F,
    BrightnessDown = 0x70,
    // 15.7 Transport Controls
    Play = 0xB0,
    Pause = 0xB1,
    Record = 0xB2,
    FastForward = 0xB3,
    Rewind = 0xB4,
    NextTrack = 0xB5,
    PrevTrack = 0xB6,
    StopPlay = 0xB7,
    Eject = 0xB8,
    PlayPause = 0xCD,
    // 15.9.1 Audio Controls - Volume
    Mute = 0xE2,
    VolumeIncrement = 0xE9,
    VolumeDecrement = 0xEA,
    // 15.15 Application Launch Buttons
    Email = 0x18A,
    Calculator = 0x192,
    LocalBrowser = 0x194,
    // 15.16 Generic GUI Application Controls
    Search = 0x221,
    Home = 0x223,
    Back = 0x224,
    Forward = 0x225,
    Stop = 0x226,
    Refresh = 0x227,
    Bookmarks = 0x22A,
}

/// Keys in `Generic Desktop Page`, generally used for system control
/// Ref: <https://www.usb.org/sites/default/files/documents/hut1_12v2.pdf#page=26>
#[non_exhaustive]
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SystemControlKey {
    No = 0x00,
    PowerDown = 0x81,
    Sleep = 0x82,
    WakeUp = 0x83,
}

/// Convert a ascii char to keycode
/// bool, if the keycode should be shifted
/// assumes en-us keyboard mapping
pub fn from_ascii(ascii: u8) -> (HidKeyCode, bool) {
    match ascii {
        b'a'..=b'z' => (HidKeyCode::from(ascii - b'a' + HidKeyCode::A as u8), false),
        b'A'..=b'Z' => (HidKeyCode::from(ascii - b'A' + HidKeyCode::A as u8), true),
        b'1'..=b'9' => (HidKeyCode::from(ascii - b'1' + HidKeyCode::Kc1 as u8), false),
        b'0' => (HidKeyCode::Kc0, false),
        b'!' => (HidKeyCode::Kc1, true),
        b'@' => (HidKeyCode::Kc2, true),
        b'#' => (HidKeyCode::Kc3, true),
        b'$' => (HidKeyCode::Kc4, true),
        b'%' => (HidKeyCode::Kc5, true),
        b'^' => (HidKeyCode::Kc6, true),
        b'&' => (HidKeyCode::Kc7, true),
        b'*' => (HidKeyCode::Kc8, true),
        b'(' => (HidKeyCode::Kc9, true),
        b')' => (HidKeyCode::Kc0, true),
        b'-' => (HidKeyCode::Minus, false),
        b'_' => (HidKeyCode::Minus, true),
        b'=' => (HidKeyCode::Equal, false),
        b'+' => (HidKeyCode::Equal, true),
        b'[' => (HidKeyCode::LeftBracket, false),
        b'{' => (HidKeyCode::LeftBracket, true),
        b']' => (HidKeyCode::RightBracket, false),
        b'}' => (HidKeyCode::RightBracket, true),
        b'\\' => (HidKeyCode::Backslash, false),
        b'|' => (HidKeyCode::Backslash, true),
        b';' => (HidKeyCode::Semicolon, false),
        b':' => (HidKeyCode::Semicolon, true),
        b'\'' => (HidKeyCode::Quote, false),
        b'"' => (HidKeyCode::Quote, true),
        b'`' => (HidKeyCode::Grave, false),
        b'~' => (HidKeyCode::Grave, true),
        b',' => (HidKeyCode::Comma, false),
        b'<' => (HidKeyCode::Comma, true),
        b'.' => (HidKeyCode::Dot, false),
        b'>' => (HidKeyCode::Dot, true),
        b'/' => (HidKeyCode::Slash, false),
        b'?' => (HidKeyCode::Slash, true),
        b' ' => (HidKeyCode::Space, false),
        b'\n' => (HidKeyCode::Enter, false),
        b'\t' => (HidKeyCode::Tab, false),
        b'\x08' => (HidKeyCode::Backspace, false),
        b'\x1B' => (HidKeyCode::Escape, false),
        b'\x7F' => (HidKeyCode::Delete, false),
        _ => (HidKeyCode::No, false),
    }
}

/// Convert a keycode back to the ascii char it types, assumes en-us keyboard mapping.
///
/// Returns `None` for keys that do not type a printable character.
pub fn to_ascii(keycode: HidKeyCode, shifted: bool) -> Option<u8> {
    if HidKeyCode::A <= keycode && keycode <= HidKeyCode::Z {
        let offset = keycode as u8 - HidKeyCode::A as u8;
        return Some(if shifted { b'A' + offset } else { b'a' + offset });
    }
    if !shifted && HidKeyCode::Kc1 <= keycode && keycode <= HidKeyCode::Kc9 {
        return Some(b'1' + (keycode as u8 - HidKeyCode::Kc1 as u8));
    }
    let ascii = match (keycode, shifted) {
        (HidKeyCode::Kc0, false) => b'0',
        (HidKeyCode::Kc1, true) => b'!',
        (HidKeyCode::Kc2, true) => b'@',
        (HidKeyCode::Kc3, true) => b'#',
        (HidKeyCode::Kc4, true) => b'$',
        (HidKeyCode::Kc5, true) => b'%',
        (HidKeyCode::Kc6, true) => b'^',
        (HidKeyCode::Kc7, true) => b'&',
        (HidKeyCode::Kc8, true) => b'*',
        (HidKeyCode::Kc9, true) => b'(',
        (HidKeyCode::Kc0, true) => b')',
        (HidKeyCode::Minus, false) => b'-',
        (HidKeyCode::Minus, true) => b'_',
        (HidKeyCode::Equal, false) => b'=',
        (HidKeyCode::Equal, true) => b'+',
        (HidKeyCode::LeftBracket, false) => b'[',
        (HidKeyCode::LeftBracket, true) => b'{',
        (HidKeyCode::RightBracket, false) => b']',
        (HidKeyCode::RightBracket, true) => b'}',
        (HidKeyCode::Backslash, false) => b'\\',
        (HidKeyCode::Backslash, true) => b'|',
        (HidKeyCode::Semicolon, false) => b';',
        (HidKeyCode::Semicolon, true) => b':',
        (HidKeyCode::Quote, false) => b'\'',
        (HidKeyCode::Quote, true) => b'"',
        (HidKeyCode::Grave, false) => b'`',
        (HidKeyCode::Grave, true) => b'~',
        (HidKeyCode::Comma, false) => b',',
        (HidKeyCode::Comma, true) => b'<',
        (HidKeyCode::Dot, false) => b'.',
        (HidKeyCode::Dot, true) => b'>',
        (HidKeyCode::Slash, false) => b'/',
        (HidKeyCode::Slash, true) => b'?',
        (HidKeyCode::Space, false) => b' ',
        (HidKeyCode::Enter, false) => b'\n',
        (HidKeyCode::Tab, false) => b'\t',
        _ => return None,
    };
    Some(ascii)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_ascii_letters_and_digits() {
        assert_eq!(from_ascii(b'e'), (HidKeyCode::E, false));
        assert_eq!(from_ascii(b'Z'), (HidKeyCode::Z, true));
        assert_eq!(from_ascii(b'1'), (HidKeyCode::Kc1, false));
        assert_eq!(from_ascii(b'9'), (HidKeyCode::Kc9, false));
        assert_eq!(from_ascii(b'0'), (HidKeyCode::Kc0, false));
    }

    #[test]
    fn test_from_ascii_version_punctuation() {
        assert_eq!(from_ascii(b':'), (HidKeyCode::Semicolon, true));
        assert_eq!(from_ascii(b'_'), (HidKeyCode::Minus, true));
        assert_eq!(from_ascii(b'.'), (HidKeyCode::Dot, false));
        assert_eq!(from_ascii(0xC4), (HidKeyCode::No, false));
    }

    #[test]
    fn test_to_ascii_inverts_from_ascii() {
        for c in b"ergodox_ez:standard 0.1.0-rc1".iter().copied() {
            let (k, shifted) = from_ascii(c);
            assert_eq!(to_ascii(k, shifted), Some(c));
        }
        assert_eq!(to_ascii(HidKeyCode::F1, false), None);
    }
}
