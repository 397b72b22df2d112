mod validator;

pub use validator::{ConfigValidator, ConfigValidatorImpl};

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::fs::create_dir_all;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const CONFIG_VERSION: &str = "1.0.0";
pub const DEFAULT_NAME_WIDTH: usize = 48;
/// 指定配置文件路径的环境变量
pub const CONFIG_ENV: &str = "UPLOAD_PREVIEW_CONFIG";

/// 一个上传区域：一个文件选择框加上文件名、文件大小两个展示容器
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    pub id: String,
    pub label: String,
    pub input_id: String,
    pub names_id: String,
    pub sizes_id: String,
}

impl PanelConfig {
    /// Panel whose element ids follow the `<id>_input` / `<id>_names` / `<id>_sizes` scheme.
    pub fn with_prefix(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            input_id: format!("{}_input", id),
            names_id: format!("{}_names", id),
            sizes_id: format!("{}_sizes", id),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

// 主要配置文件结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    pub version: String,
    #[serde(default = "default_name_width")]
    pub name_width: usize,
    #[serde(default = "default_log_level")]
    pub log_level: LogLevel,
    #[serde(default)]
    pub panels: Vec<PanelConfig>,
}

fn default_name_width() -> usize {
    DEFAULT_NAME_WIDTH
}

fn default_log_level() -> LogLevel {
    LogLevel::Info
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION.to_string(),
            name_width: DEFAULT_NAME_WIDTH,
            log_level: LogLevel::Info,
            panels: default_panels(),
        }
    }
}

/// 上传表单默认的三个区域
pub fn default_panels() -> Vec<PanelConfig> {
    vec![
        PanelConfig::with_prefix("design", "Pipe Design Files"),
        PanelConfig::with_prefix("velocity", "Pipe Velocity Files"),
        PanelConfig::with_prefix("spread", "Gutter Spread Files"),
    ]
}

pub struct ConfigManager {
    config_path: PathBuf,
    config: PreviewConfig,
}

impl ConfigManager {
    pub fn new() -> ConfigResult<Self> {
        Self::new_with_path(default_config_path()?)
    }

    pub fn new_with_path(config_path: PathBuf) -> ConfigResult<Self> {
        if let Some(parent) = config_path.parent()
            && !parent.as_os_str().is_empty()
        {
            create_dir_all(parent).map_err(ConfigError::WriteFailed)?;
        }

        let mut manager = Self {
            config_path,
            config: PreviewConfig::default(),
        };

        manager.load()?;
        Ok(manager)
    }

    /// 配置文件不存在时保留默认配置
    pub fn load(&mut self) -> ConfigResult<()> {
        if !self.config_path.exists() {
            debug!(path = %self.config_path.display(), "config file absent, using defaults");
            return Ok(());
        }

        let content = fs::read_to_string(&self.config_path).map_err(ConfigError::ReadFailed)?;
        let config: PreviewConfig = serde_yaml::from_str(&content)?;
        ConfigValidatorImpl.validate_config(&config)?;
        self.config = config;
        info!(
            path = %self.config_path.display(),
            panels = self.config.panels.len(),
            "loaded config"
        );
        Ok(())
    }

    pub fn save(&self) -> ConfigResult<()> {
        let content = serde_yaml::to_string(&self.config)?;
        fs::write(&self.config_path, content).map_err(ConfigError::WriteFailed)?;
        info!(path = %self.config_path.display(), "saved config");
        Ok(())
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn config(&self) -> &PreviewConfig {
        &self.config
    }

    pub fn panels(&self) -> &[PanelConfig] {
        &self.config.panels
    }

    pub fn name_width(&self) -> usize {
        self.config.name_width
    }

    pub fn log_level(&self) -> LogLevel {
        self.config.log_level
    }

    pub fn get_panel(&self, panel_id: &str) -> Option<&PanelConfig> {
        self.config.panels.iter().find(|p| p.id == panel_id)
    }

    /// 新增面板；同 id 的面板会被替换
    pub fn add_panel(&mut self, panel: PanelConfig) -> ConfigResult<()> {
        ConfigValidatorImpl.validate_panel(&panel)?;
        let mut candidate = self.config.clone();
        match candidate.panels.iter_mut().find(|p| p.id == panel.id) {
            Some(existing) => *existing = panel,
            None => candidate.panels.push(panel),
        }
        ConfigValidatorImpl.validate_config(&candidate)?;
        self.config = candidate;
        Ok(())
    }

    pub fn remove_panel(&mut self, panel_id: &str) -> ConfigResult<PanelConfig> {
        let index = self
            .config
            .panels
            .iter()
            .position(|p| p.id == panel_id)
            .ok_or_else(|| ConfigError::Invalid(format!("Panel not found: {}", panel_id)))?;
        Ok(self.config.panels.remove(index))
    }
}

/// 环境变量优先，否则使用系统配置目录
pub fn default_config_path() -> ConfigResult<PathBuf> {
    if let Ok(env_path) = std::env::var(CONFIG_ENV)
        && !env_path.trim().is_empty()
    {
        return Ok(PathBuf::from(env_path));
    }

    let config_dir = dirs::config_dir()
        .ok_or(ConfigError::NoConfigDir)?
        .join("upload-preview");
    Ok(config_dir.join("config.yaml"))
}
