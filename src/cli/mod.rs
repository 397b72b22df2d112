// src/cli/mod.rs
pub mod browse;
pub mod info;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "upload-preview")]
#[command(about = "Preview the names and sizes of files selected for upload")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 配置文件路径，默认使用系统配置目录
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the selected files into a panel's name and size lists
    Show {
        #[arg(short, long, default_value = "design")]
        panel: String,

        #[arg(short, long)]
        recursive: bool,

        #[arg(short, long)]
        json: bool,

        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Browse the selected files in a terminal table
    Browse {
        #[arg(short, long)]
        recursive: bool,

        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Format raw byte counts
    Format {
        #[arg(required = true, allow_negative_numbers = true)]
        bytes: Vec<f64>,
    },

    /// List, add or remove upload panels
    Panels {
        #[command(subcommand)]
        action: Option<PanelAction>,
    },

    /// Show version and config location
    Info,

    /// Generate shell completion script
    Completion {
        shell: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum PanelAction {
    /// Add a panel, or replace the panel with the same id
    Add {
        #[arg(short, long)]
        id: String,

        #[arg(short, long)]
        label: Option<String>,

        /// 默认 <id>_input
        #[arg(long)]
        input_id: Option<String>,

        /// 默认 <id>_names
        #[arg(long)]
        names_id: Option<String>,

        /// 默认 <id>_sizes
        #[arg(long)]
        sizes_id: Option<String>,
    },

    /// Remove a panel
    Remove { id: String },
}
