use crate::cli::browse::run_browse_tui;
use crate::config::ConfigManager;
use crate::utils::select_paths;
use std::path::PathBuf;

pub fn cmd_browse(
    config_manager: &ConfigManager,
    paths: &[PathBuf],
    recursive: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let files = select_paths(paths, recursive)?;
    run_browse_tui(files, config_manager.name_width())
}
