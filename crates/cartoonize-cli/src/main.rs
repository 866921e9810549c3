//! Cartoonize Workbench CLI
//!
//! Thin wrapper around cartoonize-core for command-line usage. Shares the
//! persisted configuration with the desktop app.
//!
//! ## Usage
//!
//! ```bash
//! # Show the configured server
//! cartoonize config show
//!
//! # Point at another server
//! cartoonize config set --server-url http://192.168.1.20:5000
//!
//! # Validate a file without uploading it
//! cartoonize check cat.png
//!
//! # Cartoonize and save as ./imgutil.jpeg
//! cartoonize convert cat.png
//!
//! # Save somewhere else, using a one-off server
//! cartoonize convert cat.png --output out/ --server-url http://localhost:8000
//! ```

use std::path::{Path, PathBuf};

use anyhow::Result;
use cartoonize_core::{
    default_data_dir, endpoint_url, ConfigPatch, ConfigStore, NoticeLevel, UploadedFile,
    Workbench, WorkbenchEvent, DOWNLOAD_FILE_NAME,
};
use clap::{Parser, Subcommand};

/// Cartoonize Workbench - send images to a cartoonize server
#[derive(Parser)]
#[command(name = "cartoonize")]
#[command(version = "0.1.0")]
#[command(about = "Cartoonize Workbench - send images to a cartoonize server")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Data directory holding the local storage file
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Check that an image would be accepted for upload
    Check {
        /// Image file (JPEG or PNG, under 10MB)
        image: PathBuf,
    },

    /// Cartoonize an image and save the result
    Convert {
        /// Image file (JPEG or PNG, under 10MB)
        image: PathBuf,

        /// Output file or directory (default: ./imgutil.jpeg)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Use this server for this run only
        #[arg(long)]
        server_url: Option<String>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the stored configuration
    Show,
    /// Change stored values
    Set {
        /// Base URL of the cartoonize server
        #[arg(long)]
        server_url: Option<String>,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Load an image, turning a rejection into its user-facing notice.
async fn read_image(path: &Path) -> Result<UploadedFile> {
    match UploadedFile::from_path(path).await {
        Ok(file) => Ok(file),
        Err(e) if e.is_validation() => anyhow::bail!(e.notice_message()),
        Err(e) => Err(e.into()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
    let store = ConfigStore::open(&data_dir)?;

    match cli.command {
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let config = store.read();
                println!("Server URL: {}", config.server_url);
                println!("Endpoint: {}", endpoint_url(&config.server_url));
                println!("Storage: {}", store.storage().path().display());
            }

            ConfigAction::Set { server_url } => {
                let config = store.write(ConfigPatch { server_url })?;
                println!("Configuration saved.");
                println!("Server URL: {}", config.server_url);
            }
        },

        Commands::Check { image } => {
            let file = read_image(&image).await?;
            println!("OK: {} ({}, {} bytes)", file.name, file.mime_type, file.size());
        }

        Commands::Convert {
            image,
            output,
            server_url,
        } => {
            let mut config = store.read();
            if let Some(url) = server_url {
                config.server_url = url;
            }

            let file = read_image(&image).await?;
            let bench = Workbench::new();
            let mut events = bench.subscribe_events();

            println!(
                "Uploading {} ({} bytes) to {}",
                file.name,
                file.size(),
                endpoint_url(&config.server_url)
            );
            let ticket = bench
                .submit(file, &config)
                .map_err(|e| anyhow::anyhow!(e.notice_message()))?;
            ticket.wait().await?;

            let snapshot = bench.snapshot();
            let Some(result) = snapshot.result else {
                let mut message = "Transformation failed".to_string();
                while let Ok(event) = events.try_recv() {
                    if let WorkbenchEvent::Notice(notice) = event {
                        if notice.level == NoticeLevel::Error {
                            message = notice.message;
                        }
                    }
                }
                anyhow::bail!(message);
            };

            if let Some(preview) = &snapshot.preview_url {
                println!("Preview: {} character data URL", preview.len());
            }
            println!("Result: {}", result.info.caption());

            let target = output.unwrap_or_else(|| PathBuf::from(DOWNLOAD_FILE_NAME));
            let path = bench.save_result(&target).await?;
            println!("Saved: {}", path.display());
        }
    }

    Ok(())
}
