use crate::LightConfig;

impl crate::KeymapTomlConfig {
    pub fn get_light_config(&self) -> LightConfig {
        self.light.clone().unwrap_or_default()
    }
}
