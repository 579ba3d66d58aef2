use clap::Parser;
use cockpit::core::config::{self, Theme};
use cockpit::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

#[derive(Parser)]
#[command(name = "cockpit", about = "Terminal dashboard shell")]
struct Args {
    /// Path to open on startup (e.g. /table-demo)
    #[arg(short, long)]
    path: Option<String>,

    /// Color theme
    #[arg(short, long, value_enum)]
    theme: Option<ThemeArg>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to cockpit.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("cockpit.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            log::error!("Config error: {e}");
            std::process::exit(1);
        }
    };
    let resolved = config::resolve(&file_config, args.path.as_deref(), args.theme.map(Theme::from));

    log::info!("Cockpit starting up at {}", resolved.start_path);

    tui::run(resolved)
}
