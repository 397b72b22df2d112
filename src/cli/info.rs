use crate::config::default_config_path;
use std::env;
use std::fmt;
use std::path::PathBuf;

pub struct SystemInfo {
    pub version: String,
    pub os: String,
    pub arch: String,
    pub config_path: PathBuf,
    pub panel_count: usize,
}

impl SystemInfo {
    pub fn new(panel_count: usize) -> Self {
        let config_path = default_config_path().unwrap_or_else(|_| PathBuf::from("Unknown"));

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            os: env::consts::OS.to_string(),
            arch: env::consts::ARCH.to_string(),
            config_path,
            panel_count,
        }
    }
}

impl fmt::Display for SystemInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Upload Preview Info\n\
             -------------------\n\
             Version: {}\n\
             OS: {} {}\n\
             Default Config Path: {}\n\
             Panels: {}",
            self.version,
            self.os,
            self.arch,
            self.config_path.display(),
            self.panel_count
        )
    }
}

pub fn print_info(panel_count: usize) {
    println!("{}", SystemInfo::new(panel_count));
}
