mod app;
mod portrait;

use std::path::PathBuf;

use clap::Parser;

use app::NpcgenApp;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Root directory holding config_files/, languages/ and characters/
    #[arg(long, value_name = "DIR", default_value = ".")]
    data_dir: PathBuf,
    /// Language file name under languages/
    #[arg(long, value_name = "FILE", default_value = "english.txt")]
    language: String,
    /// Seed for reproducible generation
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    let cli = Cli::parse();

    let app = NpcgenApp::new(&cli.data_dir, &cli.language, cli.seed);
    let title = app.window_title();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([920.0, 920.0]),
        ..Default::default()
    };
    eframe::run_native(&title, options, Box::new(|_cc| Ok(Box::new(app))))
}
