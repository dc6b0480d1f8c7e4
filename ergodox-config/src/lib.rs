use std::path::Path;

use serde_derive::Deserialize;
use serde_inline_default::serde_inline_default;

pub mod compose;
pub mod error;
pub mod keyboard;
pub mod light;

pub use compose::ComposeModifier;
pub use error::{ConfigError, ConfigResult};
pub use keyboard::Basic;

/// Configurations for the ErgoDox EZ keymaps, read from `keymap.toml`.
///
/// Every section is optional, an empty file yields the defaults.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeymapTomlConfig {
    /// Basic keyboard info
    keyboard: Option<KeyboardInfo>,
    /// Firmware identification printed by the version key
    firmware: Option<FirmwareConfig>,
    /// Status LED config
    light: Option<LightConfig>,
    /// Umlaut composition config
    compose: Option<ComposeConfig>,
}

#[serde_inline_default]
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyboardInfo {
    /// Keyboard name, the first part of the version string
    #[serde_inline_default(keyboard::DEFAULT_KEYBOARD_NAME.to_string())]
    pub name: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FirmwareConfig {
    /// Overrides the crate version in the version string
    pub version: Option<String>,
}

#[serde_inline_default]
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LightConfig {
    /// The status LEDs light up when their pin is driven low
    #[serde_inline_default(false)]
    pub low_active: bool,
}

#[serde_inline_default]
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComposeConfig {
    /// Modifier held while tapping the dead key, one of `lalt`, `ralt`, `lgui`, `rgui`, `lctrl`, `rctrl`
    #[serde_inline_default("lalt".to_string())]
    pub modifier: String,
}

impl KeymapTomlConfig {
    /// Parse a config from its TOML text
    pub fn from_toml_str(config: &str) -> ConfigResult<Self> {
        Self::parse(config, "<inline>")
    }

    /// Read and parse the config file at `config_toml_path`
    pub fn new_from_toml_path<P: AsRef<Path>>(config_toml_path: P) -> ConfigResult<Self> {
        let path = config_toml_path.as_ref().display().to_string();
        let content = std::fs::read_to_string(config_toml_path.as_ref()).map_err(|e| ConfigError::FileRead {
            path: path.clone(),
            message: e.to_string(),
        })?;
        Self::parse(&content, &path)
    }

    fn parse(content: &str, path: &str) -> ConfigResult<Self> {
        let config: KeymapTomlConfig = toml::from_str(content).map_err(|e| ConfigError::TomlParse {
            path: path.to_string(),
            message: e.message().to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values serde cannot check on its own
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(keyboard) = &self.keyboard {
            keyboard::check_typeable("keyboard.name", &keyboard.name)?;
        }
        if let Some(version) = self.firmware.as_ref().and_then(|f| f.version.as_ref()) {
            keyboard::check_typeable("firmware.version", version)?;
        }
        self.get_compose_modifier()?;
        Ok(())
    }
}
