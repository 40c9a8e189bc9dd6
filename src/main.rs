use clap::Parser;
use folio::core::config::{self, CliOverrides, FolioConfig};
use folio::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "folio", about = "Terminal portfolio with a working contact form")]
struct Args {
    /// Form endpoint that receives contact submissions
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Resume to open with `r` (path or URL)
    #[arg(short, long)]
    resume: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to folio.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("folio.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}, falling back to defaults", e);
        FolioConfig::default()
    });
    let cli = CliOverrides {
        endpoint: args.endpoint,
        resume: args.resume,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!("Folio starting up (endpoint: {})", resolved.form_endpoint);

    tui::run(resolved)
}
