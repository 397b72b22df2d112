use crate::config::{ConfigManager, PanelConfig};
use crate::error::{self, PreviewError};
use crate::preview::{DisplayList, Entry, FileDescriptor, Page, show_files};
use crate::utils::{select_paths, truncate_string};
use prettytable::{Table, format, row};
use serde::Serialize;
use std::path::PathBuf;

/// 渲染完成后某个面板两个容器的内容
#[derive(Debug, Serialize)]
pub struct PanelView {
    pub panel: String,
    pub names: Vec<Entry>,
    pub sizes: Vec<Entry>,
}

/// Puts `files` into the panel's input on a fresh page and renders it.
pub fn render_panel(
    panels: &[PanelConfig],
    panel_id: &str,
    files: Vec<FileDescriptor>,
) -> error::Result<PanelView> {
    let panel = panels
        .iter()
        .find(|p| p.id == panel_id)
        .ok_or_else(|| PreviewError::PanelNotFound(panel_id.to_string()))?;

    let mut page = Page::from_panels(panels);
    page.select_files(&panel.input_id, files)?;
    show_files(&mut page, &panel.input_id, &panel.names_id, &panel.sizes_id)?;

    Ok(PanelView {
        panel: panel.id.clone(),
        names: page.container(&panel.names_id)?.entries().to_vec(),
        sizes: page.container(&panel.sizes_id)?.entries().to_vec(),
    })
}

pub fn cmd_show(
    config_manager: &ConfigManager,
    panel_id: &str,
    paths: &[PathBuf],
    recursive: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let files = select_paths(paths, recursive)?;
    let view = render_panel(config_manager.panels(), panel_id, files)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let label = config_manager
        .get_panel(panel_id)
        .map(|p| p.label.as_str())
        .unwrap_or(panel_id);
    println!("📤 {} ({} 个文件)", label, view.names.len());

    if view.names.is_empty() {
        println!("  未选择任何文件");
        return Ok(());
    }

    let width = config_manager.name_width();
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    table.set_titles(row!["文件名", "大小"]);
    for (name, size) in view.names.iter().zip(view.sizes.iter()) {
        table.add_row(row![truncate_string(&name.text, width), size.text]);
    }
    table.printstd();

    Ok(())
}
