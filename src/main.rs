use clap::Parser;
use std::io;
use std::sync::{Arc, atomic::{AtomicBool, Ordering}};

use rust_passgen::api;
use rust_passgen::cli::{self, Args, CliCommand};
use rust_passgen::cli::handlers::GenerateOptions;
use rust_passgen::core::Config;
use rust_passgen::models::CharacterClass;
use rust_passgen::utils::load_env_file;

fn to_io_error(context: &str, e: impl std::fmt::Display) -> io::Error {
    let error_msg = format!("{}: {}", context, e);
    log::error!("{}", error_msg);
    io::Error::new(io::ErrorKind::Other, error_msg)
}

#[tokio::main]
async fn main() -> Result<(), io::Error> {
    // Load environment variables
    let env_file = load_env_file();

    let args = Args::parse();
    let config = Config::load();

    // RUST_LOG, when set, takes precedence over LOG_LEVEL
    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .format_timestamp_secs()
        .format_module_path(true)
        .init();

    match env_file {
        Ok(Some(path)) => log::debug!("Loaded environment from {}", path.display()),
        Ok(None) => log::debug!("No .env file found"),
        Err(e) => log::warn!("Failed to read .env file: {}", e),
    }

    log::debug!("Command line args: {:?}", args);
    log::debug!("Loaded config: {:?}", config);

    match args.command.unwrap_or(CliCommand::Interactive) {
        CliCommand::Generate { length, uppercase, lowercase, numbers, special, count, show } => {
            let classes = [
                (CharacterClass::Uppercase, uppercase),
                (CharacterClass::Lowercase, lowercase),
                (CharacterClass::Digit, numbers),
                (CharacterClass::Special, special),
            ]
            .into_iter()
            .filter(|(_, enabled)| *enabled)
            .map(|(class, _)| class)
            .collect();

            let options = GenerateOptions { length, classes, count, show };
            let results = cli::handlers::handle_generate(&config, &options)
                .map_err(|e| to_io_error("Failed to generate password", e))?;
            cli::handlers::print_generated(&results, show, args.json)
                .map_err(|e| to_io_error("Failed to print passwords", e))?;
        }

        CliCommand::Check { password } => {
            let report = cli::handlers::handle_check(&password);
            cli::handlers::print_report(&report, args.json)
                .map_err(|e| to_io_error("Failed to print report", e))?;
        }

        CliCommand::Interactive => {
            let should_exit = Arc::new(AtomicBool::new(false));
            {
                let should_exit = Arc::clone(&should_exit);
                // The menu loop checks the flag between prompts and exits on its own
                ctrlc::set_handler(move || {
                    log::info!("Ctrl+C received, exiting");
                    should_exit.store(true, Ordering::SeqCst);
                })
                .map_err(|e| to_io_error("Failed to set Ctrl+C handler", e))?;
            }

            cli::menu::run_cli_menu(config, should_exit)
                .await
                .map_err(|e| to_io_error("CLI menu error", e))?;
        }

        CliCommand::Serve { port } => {
            let mut config = config;
            if let Some(port) = port {
                config.web_port = port;
            }
            println!("🚀 API server starting on http://{}:{}", config.web_address, config.web_port);
            println!("📖 Docs at /swagger-ui/ and /redoc");
            api::start_server(config)
                .await
                .map_err(|e| to_io_error("API server failed", e))?;
        }
    }

    Ok(())
}
