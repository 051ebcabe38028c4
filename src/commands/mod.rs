pub mod calc;
pub mod export;
pub mod init;
pub mod ruler;

use crate::libs::messages::macros::is_debug_mode;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Compute the workday ledger from clock entries")]
    Calc(calc::CalcArgs),
    #[command(about = "Draw the dual 12h/24h time ruler")]
    Ruler(ruler::RulerArgs),
    #[command(about = "Export the computed ledger to CSV or JSON")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        if is_debug_mode() {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
                )
                .init();
        }

        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Calc(args) => calc::cmd(args),
            Commands::Ruler(args) => ruler::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}
