use std::path::Path;
use std::{env, fs};

use const_gen::*;
use ergodox_config::{Basic, ComposeModifier, KeymapTomlConfig, LightConfig};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=KEYMAP_TOML_PATH");

    // Read keymap.toml if it's present
    let user_toml = if let Ok(toml_path) = env::var("KEYMAP_TOML_PATH") {
        println!("cargo:rerun-if-changed={toml_path}");
        KeymapTomlConfig::new_from_toml_path(&toml_path)
    } else {
        KeymapTomlConfig::from_toml_str("")
    }
    .unwrap_or_else(|e| panic!("Invalid KEYMAP_TOML_PATH file\n{e}"));

    let compose = user_toml
        .get_compose_modifier()
        .unwrap_or_else(|e| panic!("Invalid KEYMAP_TOML_PATH file\n{e}"));
    let constants = get_constants_str(
        user_toml.get_basic_info(env!("CARGO_PKG_VERSION")),
        user_toml.get_light_config(),
        compose,
    );

    // Write to constants.rs file
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let dest_path = Path::new(&out_dir).join("constants.rs");
    fs::write(&dest_path, constants).expect("Failed to write constants.rs file");
}

fn get_constants_str(basic: Basic, light: LightConfig, compose: ComposeModifier) -> String {
    let keyboard_name = basic.name.as_str();
    let firmware_version = basic.firmware_version.as_str();
    let constant_strs = [
        const_declaration!(pub KEYBOARD_NAME = keyboard_name),
        const_declaration!(pub FIRMWARE_VERSION = firmware_version),
        const_declaration!(pub(crate) LED_LOW_ACTIVE = light.low_active),
        format!(
            "pub(crate) const COMPOSE_KEY: ergodox_types::keycode::HidKeyCode = ergodox_types::keycode::HidKeyCode::{};\n",
            compose.keycode_name()
        ),
    ];

    constant_strs
        .into_iter()
        .map(|s| "#[allow(clippy::redundant_static_lifetimes)]\n".to_owned() + s.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
