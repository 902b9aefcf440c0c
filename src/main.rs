use clap::Parser;
use contype::cli::commands::Cli;
use contype::cli::handlers;
use contype::io::config_io;
use contype::logging;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        None => {
            // No subcommand → launch TUI
            if let Err(e) = run_tui(&cli) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(_) => {
            logging::init_stderr_logging();
            if let Err(e) = handlers::dispatch(cli) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

/// Run the step interactively and print the hand-off as one JSON line
fn run_tui(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let _guard = logging::init_file_logging()?;
    let loaded = config_io::load_config(cli.config.as_deref())?;
    let outcome = contype::tui::run(loaded)?;
    println!("{}", serde_json::to_string(&outcome)?);
    Ok(())
}
