use clap::Parser;
use tracing_subscriber::EnvFilter;
use upload_preview::cli::info::print_info;
use upload_preview::cli::{Cli, Commands, PanelAction};
use upload_preview::commands::browse::cmd_browse;
use upload_preview::commands::completion::cmd_generate_completion;
use upload_preview::commands::format::cmd_format_bytes;
use upload_preview::commands::panels::{
    build_panel, cmd_add_panel, cmd_list_panels, cmd_remove_panel,
};
use upload_preview::commands::show::cmd_show;
use upload_preview::config::ConfigManager;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config_manager = match &cli.config {
        Some(path) => ConfigManager::new_with_path(path.clone())?,
        None => ConfigManager::new()?,
    };

    // 初始化日志：RUST_LOG 优先，其次 --verbose，最后使用配置中的级别
    let default_level = if cli.verbose {
        "debug"
    } else {
        config_manager.log_level().as_filter()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Show {
            panel,
            recursive,
            json,
            paths,
        } => {
            cmd_show(&config_manager, &panel, &paths, recursive, json)?;
        }
        Commands::Browse { recursive, paths } => {
            cmd_browse(&config_manager, &paths, recursive)?;
        }
        Commands::Format { bytes } => {
            cmd_format_bytes(&bytes)?;
        }
        Commands::Panels { action } => match action {
            None => cmd_list_panels(&config_manager)?,
            Some(PanelAction::Add {
                id,
                label,
                input_id,
                names_id,
                sizes_id,
            }) => {
                let panel = build_panel(id, label, input_id, names_id, sizes_id);
                cmd_add_panel(&mut config_manager, panel)?;
            }
            Some(PanelAction::Remove { id }) => {
                cmd_remove_panel(&mut config_manager, &id)?;
            }
        },
        Commands::Info => {
            print_info(config_manager.panels().len());
        }
        Commands::Completion { shell } => {
            cmd_generate_completion(shell)?;
        }
    }

    Ok(())
}
