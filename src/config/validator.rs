use crate::config::{CONFIG_VERSION, PanelConfig, PreviewConfig};
use crate::error::{ConfigError, ConfigResult};
use std::collections::HashSet;

pub trait ConfigValidator {
    fn validate_panel(&self, panel: &PanelConfig) -> ConfigResult<()>;
    fn validate_config(&self, config: &PreviewConfig) -> ConfigResult<()>;
}

pub struct ConfigValidatorImpl;

impl ConfigValidator for ConfigValidatorImpl {
    fn validate_panel(&self, panel: &PanelConfig) -> ConfigResult<()> {
        if panel.id.trim().is_empty() {
            return Err(ConfigError::Invalid("Panel ID cannot be empty".into()));
        }

        for (field, value) in [
            ("input_id", &panel.input_id),
            ("names_id", &panel.names_id),
            ("sizes_id", &panel.sizes_id),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::MissingField(format!("{} for panel {}", field, panel.id)));
            }
        }

        // 三个元素必须互不相同
        if panel.input_id == panel.names_id
            || panel.input_id == panel.sizes_id
            || panel.names_id == panel.sizes_id
        {
            return Err(ConfigError::Invalid(format!(
                "Panel {} must use three distinct element ids",
                panel.id
            )));
        }

        Ok(())
    }

    fn validate_config(&self, config: &PreviewConfig) -> ConfigResult<()> {
        if config.version != CONFIG_VERSION {
            return Err(ConfigError::Invalid(format!(
                "Unsupported config version: {}",
                config.version
            )));
        }

        if config.name_width < 4 {
            return Err(ConfigError::Invalid("name_width must be at least 4".into()));
        }

        let mut panel_ids = HashSet::new();
        let mut element_ids = HashSet::new();
        for panel in &config.panels {
            self.validate_panel(panel)?;
            if !panel_ids.insert(panel.id.as_str()) {
                return Err(ConfigError::Invalid(format!("Duplicate panel ID: {}", panel.id)));
            }
            for id in [&panel.input_id, &panel.names_id, &panel.sizes_id] {
                if !element_ids.insert(id.as_str()) {
                    return Err(ConfigError::Invalid(format!("Element id used twice: {}", id)));
                }
            }
        }

        Ok(())
    }
}
