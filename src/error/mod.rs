use serde_json::Error as SerdeJsonError;
use serde_yaml::Error as SerdeYamlError;
use std::io::Error as IoError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreviewError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] IoError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] SerdeJsonError),

    /// 页面中不存在该 id 的元素
    #[error("Missing element: {0}")]
    MissingElement(String),

    #[error("Element {id} is not a {expected}")]
    WrongElementKind { id: String, expected: ElementKind },

    #[error("Panel not found: {0}")]
    PanelNotFound(String),

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadFailed(#[source] IoError),

    #[error("Failed to write config file: {0}")]
    WriteFailed(#[source] IoError),

    #[error("Failed to parse config: {0}")]
    ParseFailed(#[from] SerdeYamlError),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration directory not found")]
    NoConfigDir,
}

/// 页面元素的种类，用于 `WrongElementKind` 报错
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    FileInput,
    Container,
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElementKind::FileInput => write!(f, "file input"),
            ElementKind::Container => write!(f, "container"),
        }
    }
}

impl PreviewError {
    /// 页面结构错误属于调用方的编程错误，重试无意义
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            PreviewError::MissingElement(_)
                | PreviewError::WrongElementKind { .. }
                | PreviewError::Config(ConfigError::Invalid(_))
                | PreviewError::Config(ConfigError::ParseFailed(_))
        )
    }

    pub fn error_code(&self) -> u32 {
        match self {
            PreviewError::Config(_) => 1000,
            PreviewError::Io(_) => 5000,
            PreviewError::Serialization(_) => 9000,
            PreviewError::MissingElement(_) => 10000,
            PreviewError::WrongElementKind { .. } => 10001,
            PreviewError::PanelNotFound(_) => 11000,
            PreviewError::PathNotFound(_) => 15000,
        }
    }
}

// Result 类型别名
pub type Result<T> = std::result::Result<T, PreviewError>;
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
