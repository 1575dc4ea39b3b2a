//! MTGA deck export - Main Binary
//!
//! Writes every deck saved in the MTG Arena client to a text file

use anyhow::Context;
use clap::Parser;
use mtga_deck_export::{
    config::{ConfigOverrides, ExportConfig, DEFAULT_LANGUAGE},
    pipeline::{self, ExportSummary, PostExportHook},
    Result,
};
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mtga-export")]
#[command(version, about = "Export MTG Arena decks as text deck lists", long_about = None)]
struct Cli {
    /// Client log file (default: the client's Player.log for this platform)
    #[arg(long, value_name = "FILE")]
    log_path: Option<PathBuf>,

    /// Directory holding data_cards*.mtga and data_loc*.mtga
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Output directory (default: ~/MTGABulkExport/<timestamp>)
    #[arg(long, short = 'o', value_name = "DIR")]
    out: Option<PathBuf>,

    /// Localization used for card names
    #[arg(long, short = 'l', default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Exit right away instead of waiting for Enter
    #[arg(long)]
    no_pause: bool,
}

/// Keep the console window open until the user presses Enter
fn pause_hook() -> PostExportHook {
    Box::new(|_summary: &ExportSummary| -> Result<()> {
        print!("Press Enter to exit");
        std::io::stdout().flush()?;
        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line)?;
        Ok(())
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = ExportConfig::from_environment(ConfigOverrides {
        log_path: cli.log_path,
        data_dir: cli.data_dir,
        export_dir: cli.out,
        language: Some(cli.language),
    })
    .context("failed to resolve export configuration")?;

    let hook = (!cli.no_pause).then(pause_hook);

    if let Err(e) = pipeline::run(&config, hook).await {
        log::error!("{e}");
        return Err(e).context("export failed");
    }

    Ok(())
}
