//! flowsentry - network anomaly detection console
//!
//! A command-line tool for checking backend health, reviewing recent alerts
//! and editing alert thresholds and notification channels.

use clap::Parser;
use flowsentry::cli::args::{generate_completions, Cli, Commands};
use flowsentry::commands::{run_alerts, run_config, run_status};
use flowsentry::config::ConfigBuilder;
use flowsentry::error::{AppError, ConfigError, ProviderError, SaveError};

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Set log level based on verbose flag
    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    // Run the appropriate command
    let result = run(&cli);

    if let Err(e) = result {
        log::error!("{}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let config = ConfigBuilder::new()
        .with_file(cli.config.as_deref())
        .with_verbose(cli.verbose.then_some(true))
        .with_snapshot_path(cli.snapshot.clone())
        .with_store_path(cli.store.clone())
        .build();

    match &cli.command {
        Commands::Status => run_status(&config, cli.format),

        Commands::Alerts(args) => run_alerts(args, &config, cli.format),

        Commands::Config(args) => run_config(&args.command, &config, cli.format),

        Commands::Completions { shell } => {
            generate_completions(*shell);
            Ok(())
        }
    }
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::Provider(ProviderError::NotFound(_)) => {
            eprintln!();
            eprintln!("Hint: Check the --snapshot path, or omit it to see demo data.");
        }
        AppError::Save(SaveError::Rejected(_)) => {
            eprintln!();
            eprintln!("Hint: Thresholds must lie in 0.0-1.0 and satisfy low <= medium <= high.");
            eprintln!("      Run 'flowsentry config show' to see the current values.");
        }
        AppError::Save(SaveError::Storage(_)) | AppError::Io(_) => {
            eprintln!();
            eprintln!("Hint: Check that the --store file is readable and its directory writable.");
        }
        AppError::Config(ConfigError::InvalidValue { .. }) => {
            eprintln!();
            eprintln!("Hint: Run with --verbose to see which configuration was loaded.");
        }
        _ => {}
    }
}
