use std::path::PathBuf;

mod backend_bridge;
mod config;
mod controller;
mod ui;

use backend_bridge::{
    commands::BackendCommand,
    runtime::{launch, BridgeOptions},
};
use clap::Parser;
use controller::events::UiEvent;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "simon", about = "Repeat the color sequence by clicking or by voice")]
struct Args {
    /// TOML settings file (defaults to ./simon.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for reproducible color sequences.
    #[arg(long)]
    seed: Option<u64>,
    /// Use a text field as the voice-command microphone.
    #[arg(long)]
    typed_voice: bool,
    /// Tracing filter; falls back to RUST_LOG, then "info".
    #[arg(long)]
    log_filter: Option<String>,
}

fn init_tracing(log_filter: Option<&str>) {
    let filter = match log_filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();
    init_tracing(args.log_filter.as_deref());

    let mut settings = match config::load_settings(args.config.as_deref()) {
        Ok(settings) => settings,
        Err(err) => {
            tracing::error!("{err}; falling back to default settings");
            config::Settings::default()
        }
    };
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    tracing::info!(?settings, typed_voice = args.typed_voice, "starting");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    launch(
        cmd_rx,
        ui_tx,
        BridgeOptions {
            settings,
            typed_voice: args.typed_voice,
        },
    );

    let typed_voice = args.typed_voice;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Simon")
            .with_inner_size([420.0, 560.0])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Simon",
        options,
        Box::new(move |_cc| Ok(Box::new(ui::SimonApp::new(cmd_tx, ui_rx, typed_voice)))),
    )
}
