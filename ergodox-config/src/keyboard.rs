use crate::{ConfigError, ConfigResult, KeymapTomlConfig};

pub(crate) const DEFAULT_KEYBOARD_NAME: &str = "ergodox_ez";

/// Keyboard's basic info, the parts of the version string that come from config
#[derive(Clone, Debug)]
pub struct Basic {
    /// Keyboard name
    pub name: String,
    /// Firmware version
    pub firmware_version: String,
}

impl KeymapTomlConfig {
    /// `crate_version` is used when `[firmware] version` is not set
    pub fn get_basic_info(&self, crate_version: &str) -> Basic {
        Basic {
            name: self
                .keyboard
                .as_ref()
                .map(|k| k.name.clone())
                .unwrap_or_else(|| DEFAULT_KEYBOARD_NAME.to_string()),
            firmware_version: self
                .firmware
                .as_ref()
                .and_then(|f| f.version.clone())
                .unwrap_or_else(|| crate_version.to_string()),
        }
    }
}

/// The version key types these strings on a US layout, so they must be non-empty printable ascii
pub(crate) fn check_typeable(field: &str, value: &str) -> ConfigResult<()> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_graphic() || b == b' ') {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            expected: "non-empty printable ascii".to_string(),
        });
    }
    Ok(())
}
