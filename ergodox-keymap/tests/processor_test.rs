pub mod common;

use ergodox_keymap::action::Action;
use ergodox_keymap::custom::CustomKeycode;
use ergodox_keymap::keycode::{ConsumerKey, HidKeyCode, KeyCode};
use ergodox_keymap::modifier::HidModifiers;
use ergodox_keymap::processor::{CustomKeyProcessor, ProcessResult};
use ergodox_keymap::{FIRMWARE_VERSION, KEYBOARD_NAME, KeymapVariant};

use crate::common::{HostOp, TestHost, press, release};

fn processor(variant: KeymapVariant) -> CustomKeyProcessor {
    CustomKeyProcessor::with_identity(variant, "ergodox_ez", "0.1.0", HidKeyCode::LAlt)
}

#[test]
fn test_version_press_types_identity() {
    let mut host = TestHost::default();
    let result = processor(KeymapVariant::Standard).process(&mut host, CustomKeycode::Version.to_action(), true);
    assert_eq!(result, ProcessResult::Stop);
    assert_eq!(host.typed_text(), "ergodox_ez:standard 0.1.0");
    // '_' and ':' are the shifted characters
    assert_eq!(host.ops.iter().filter(|op| **op == press(HidKeyCode::LShift)).count(), 2);
}

#[test]
fn test_version_names_the_variant() {
    let mut host = TestHost::default();
    processor(KeymapVariant::Umlaut).process(&mut host, CustomKeycode::Version.to_action(), true);
    assert_eq!(host.typed_text(), "ergodox_ez:umlaut 0.1.0");
}

#[test]
fn test_version_uses_build_constants() {
    let mut host = TestHost::default();
    CustomKeyProcessor::new(KeymapVariant::Standard).process(&mut host, CustomKeycode::Version.to_action(), true);
    assert_eq!(
        host.typed_text(),
        format!("{}:standard {}", KEYBOARD_NAME, FIRMWARE_VERSION)
    );
}

#[test]
fn test_version_release_is_silent() {
    let mut host = TestHost::default();
    let result = processor(KeymapVariant::Standard).process(&mut host, CustomKeycode::Version.to_action(), false);
    assert_eq!(result, ProcessResult::Stop);
    assert!(host.ops.is_empty());
}

#[test]
fn test_umlaut_lowercase() {
    let mut host = TestHost::default();
    let result = processor(KeymapVariant::Umlaut).process(&mut host, CustomKeycode::UmlautA.to_action(), true);
    assert_eq!(result, ProcessResult::Stop);
    assert_eq!(
        host.ops,
        vec![
            HostOp::SetModifiers(HidModifiers::new()),
            press(HidKeyCode::LAlt),
            press(HidKeyCode::U),
            release(HidKeyCode::U),
            release(HidKeyCode::LAlt),
            press(HidKeyCode::A),
            release(HidKeyCode::A),
            HostOp::SetModifiers(HidModifiers::new()),
        ]
    );
}

#[test]
fn test_umlaut_uppercase_with_shift() {
    let mut host = TestHost::with_modifiers(HidModifiers::LSHIFT);
    let result = processor(KeymapVariant::Umlaut).process(&mut host, CustomKeycode::UmlautO.to_action(), true);
    assert_eq!(result, ProcessResult::Stop);
    assert_eq!(
        host.ops,
        vec![
            HostOp::SetModifiers(HidModifiers::new()),
            press(HidKeyCode::LAlt),
            press(HidKeyCode::U),
            release(HidKeyCode::U),
            release(HidKeyCode::LAlt),
            press(HidKeyCode::LShift),
            press(HidKeyCode::O),
            release(HidKeyCode::O),
            release(HidKeyCode::LShift),
            HostOp::SetModifiers(HidModifiers::LSHIFT),
        ]
    );
    assert_eq!(host.modifiers, HidModifiers::LSHIFT);
}

#[test]
fn test_umlaut_restores_all_modifiers() {
    let held = HidModifiers::RSHIFT | HidModifiers::new().with_left_ctrl(true).with_right_gui(true);
    let mut host = TestHost::with_modifiers(held);
    processor(KeymapVariant::Umlaut).process(&mut host, CustomKeycode::UmlautU.to_action(), true);

    // Modifiers are cleared while composing, right shift still selects uppercase
    assert_eq!(host.ops.first(), Some(&HostOp::SetModifiers(HidModifiers::new())));
    assert!(host.ops.contains(&press(HidKeyCode::LShift)));
    assert_eq!(host.ops.last(), Some(&HostOp::SetModifiers(held)));
    assert_eq!(host.modifiers, held);
}

#[test]
fn test_sharp_s_ignores_shift() {
    let mut host = TestHost::with_modifiers(HidModifiers::LSHIFT);
    let result = processor(KeymapVariant::Umlaut).process(&mut host, CustomKeycode::SharpS.to_action(), true);
    assert_eq!(result, ProcessResult::Stop);
    assert_eq!(
        host.ops,
        vec![
            HostOp::SetModifiers(HidModifiers::new()),
            press(HidKeyCode::LAlt),
            press(HidKeyCode::S),
            release(HidKeyCode::S),
            release(HidKeyCode::LAlt),
            HostOp::SetModifiers(HidModifiers::LSHIFT),
        ]
    );
}

#[test]
fn test_configured_compose_key() {
    let mut host = TestHost::default();
    CustomKeyProcessor::with_identity(KeymapVariant::Umlaut, "ergodox_ez", "0.1.0", HidKeyCode::RAlt).process(
        &mut host,
        CustomKeycode::UmlautA.to_action(),
        true,
    );
    assert_eq!(host.ops[1], press(HidKeyCode::RAlt));
    assert_eq!(host.ops[4], release(HidKeyCode::RAlt));
}

#[test]
fn test_umlaut_release_is_silent() {
    let mut host = TestHost::with_modifiers(HidModifiers::LSHIFT);
    for code in [CustomKeycode::UmlautA, CustomKeycode::UmlautO, CustomKeycode::UmlautU, CustomKeycode::SharpS] {
        let result = processor(KeymapVariant::Umlaut).process(&mut host, code.to_action(), false);
        assert_eq!(result, ProcessResult::Stop);
    }
    assert!(host.ops.is_empty());
}

#[test]
fn test_standard_variant_passes_umlauts_through() {
    let mut host = TestHost::default();
    for code in [CustomKeycode::UmlautA, CustomKeycode::UmlautO, CustomKeycode::UmlautU, CustomKeycode::SharpS] {
        for pressed in [true, false] {
            let result = processor(KeymapVariant::Standard).process(&mut host, code.to_action(), pressed);
            assert_eq!(result, ProcessResult::Continue);
        }
    }
    assert!(host.ops.is_empty());
}

#[test]
fn test_other_actions_continue() {
    let actions = [
        Action::No,
        Action::Key(KeyCode::Hid(HidKeyCode::A)),
        Action::Key(KeyCode::Consumer(ConsumerKey::Mute)),
        Action::LayerOn(1),
        Action::Bootloader,
        Action::User(42),
    ];
    for variant in [KeymapVariant::Standard, KeymapVariant::Umlaut] {
        let mut host = TestHost::with_modifiers(HidModifiers::LSHIFT);
        for action in actions {
            for pressed in [true, false] {
                assert_eq!(processor(variant).process(&mut host, action, pressed), ProcessResult::Continue);
            }
        }
        assert!(host.ops.is_empty());
        assert_eq!(host.modifiers, HidModifiers::LSHIFT);
    }
}
