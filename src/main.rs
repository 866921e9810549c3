#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR
        .get()
        .cloned()
        .unwrap_or_else(cartoonize_core::default_data_dir)
}

/// Cartoonize Workbench - upload an image, get a cartoon back
#[derive(Parser, Debug)]
#[command(name = "cartoonize-desktop")]
#[command(about = "Cartoonize Workbench - upload an image, get a cartoon back")]
struct Args {
    /// Data directory holding the local storage file
    #[arg(short, long)]
    data_dir: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let data_dir = args.data_dir.unwrap_or_else(cartoonize_core::default_data_dir);
    let _ = DATA_DIR.set(data_dir.clone());

    tracing::info!("Starting Cartoonize Workbench with data dir: {:?}", data_dir);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Cartoonize Image")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 760.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
