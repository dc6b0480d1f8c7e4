use crate::{ConfigError, ConfigResult, KeymapTomlConfig};

/// The modifier held while tapping the umlaut dead key
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComposeModifier {
    LAlt,
    RAlt,
    LGui,
    RGui,
    LCtrl,
    RCtrl,
}

impl ComposeModifier {
    pub fn from_name(name: &str) -> ConfigResult<Self> {
        match name.to_ascii_lowercase().as_str() {
            "lalt" => Ok(Self::LAlt),
            "ralt" => Ok(Self::RAlt),
            "lgui" => Ok(Self::LGui),
            "rgui" => Ok(Self::RGui),
            "lctrl" => Ok(Self::LCtrl),
            "rctrl" => Ok(Self::RCtrl),
            _ => Err(ConfigError::InvalidValue {
                field: "compose.modifier".to_string(),
                value: name.to_string(),
                expected: "one of lalt, ralt, lgui, rgui, lctrl, rctrl".to_string(),
            }),
        }
    }

    /// Name of the matching `HidKeyCode` variant, used in generated code
    pub fn keycode_name(self) -> &'static str {
        match self {
            Self::LAlt => "LAlt",
            Self::RAlt => "RAlt",
            Self::LGui => "LGui",
            Self::RGui => "RGui",
            Self::LCtrl => "LCtrl",
            Self::RCtrl => "RCtrl",
        }
    }
}

impl KeymapTomlConfig {
    pub fn get_compose_modifier(&self) -> ConfigResult<ComposeModifier> {
        match &self.compose {
            Some(compose) => ComposeModifier::from_name(&compose.modifier),
            None => Ok(ComposeModifier::LAlt),
        }
    }
}
