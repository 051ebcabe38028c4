use anyhow::Result;
use jornada::commands::Cli;

fn main() -> Result<()> {
    Cli::menu()
}
