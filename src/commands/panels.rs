use crate::config::{ConfigManager, PanelConfig};
use prettytable::{Table, row};

pub fn cmd_list_panels(config_manager: &ConfigManager) -> Result<(), Box<dyn std::error::Error>> {
    println!("📋 上传面板列表:");

    let panels = config_manager.panels();
    if panels.is_empty() {
        println!("  暂无上传面板");
        println!("💡 在 {} 中添加 panels 配置", config_manager.config_path().display());
        return Ok(());
    }

    let mut table = Table::new();
    table.add_row(row!["ID", "名称", "文件框", "文件名容器", "大小容器"]);

    for panel in panels {
        table.add_row(row![
            &panel.id,
            &panel.label,
            &panel.input_id,
            &panel.names_id,
            &panel.sizes_id
        ]);
    }

    table.printstd();
    Ok(())
}

/// 未指定的元素 id 按 `<id>_input` / `<id>_names` / `<id>_sizes` 补全
pub fn build_panel(
    id: String,
    label: Option<String>,
    input_id: Option<String>,
    names_id: Option<String>,
    sizes_id: Option<String>,
) -> PanelConfig {
    let defaults = PanelConfig::with_prefix(&id, label.as_deref().unwrap_or(&id));
    PanelConfig {
        input_id: input_id.unwrap_or(defaults.input_id),
        names_id: names_id.unwrap_or(defaults.names_id),
        sizes_id: sizes_id.unwrap_or(defaults.sizes_id),
        ..defaults
    }
}

pub fn cmd_add_panel(
    config_manager: &mut ConfigManager,
    panel: PanelConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let id = panel.id.clone();
    config_manager.add_panel(panel)?;
    config_manager.save()?;
    println!("✅ 已保存上传面板: {}", id);
    Ok(())
}

pub fn cmd_remove_panel(
    config_manager: &mut ConfigManager,
    panel_id: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let removed = config_manager.remove_panel(panel_id)?;
    config_manager.save()?;
    println!("🗑️  已删除上传面板: {} ({})", removed.id, removed.label);
    Ok(())
}
