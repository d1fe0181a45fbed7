//! flowsentry-gui - Network Anomaly Detection Dashboard
//!
//! Desktop dashboard and alert configuration editor built with Iced.

mod app;
mod message;
mod services;
mod state;
mod theme;
mod views;
mod widgets;

use app::FlowsentryGui;
use clap::Parser;
use fs2::FileExt;
use iced::{window, Size};
use std::fs::{self, File};
use std::path::PathBuf;
use std::process;

/// flowsentry-gui - Network Anomaly Detection Dashboard
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "flowsentry-gui", version, about)]
pub struct Args {
    /// Application config file path
    #[arg(short, long)]
    pub config: Option<String>,

    /// Dashboard snapshot file (JSON)
    #[arg(short, long)]
    pub snapshot: Option<PathBuf>,

    /// Alert configuration store file (TOML)
    #[arg(long)]
    pub store: Option<PathBuf>,

    /// Use generated data and an in-memory store
    #[arg(long)]
    pub demo: bool,
}

/// Get the lock file path
fn lock_file_path() -> PathBuf {
    directories::ProjectDirs::from("", "", "flowsentry")
        .map(|d| d.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("flowsentry-gui.lock")
}

/// Try to acquire the single-instance lock
///
/// The returned handle must be kept alive for as long as the app runs.
fn acquire_instance_lock() -> Option<File> {
    let lock_path = lock_file_path();

    if let Some(parent) = lock_path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    let file = match File::create(&lock_path) {
        Ok(f) => f,
        Err(e) => {
            log::error!("Failed to create lock file: {}", e);
            return None;
        }
    };

    match file.try_lock_exclusive() {
        Ok(()) => {
            log::debug!("Acquired instance lock at {:?}", lock_path);
            Some(file)
        }
        Err(_) => {
            log::info!("Another instance of flowsentry-gui is already running");
            None
        }
    }
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("wgpu_hal", log::LevelFilter::Error)
        .filter_module("wgpu_core", log::LevelFilter::Error)
        .init();

    let args = Args::parse();

    log::info!("Starting flowsentry-gui");

    let _lock = match acquire_instance_lock() {
        Some(lock) => lock,
        None => {
            eprintln!("flowsentry-gui is already running. Only one instance allowed.");
            process::exit(1);
        }
    };

    iced::application(
        FlowsentryGui::title,
        FlowsentryGui::update,
        FlowsentryGui::view,
    )
    .subscription(FlowsentryGui::subscription)
    .theme(FlowsentryGui::theme)
    .window(window::Settings {
        size: Size::new(1200.0, 800.0),
        min_size: Some(Size::new(900.0, 600.0)),
        ..Default::default()
    })
    .antialiasing(true)
    .run_with(move || FlowsentryGui::new(args))
}
