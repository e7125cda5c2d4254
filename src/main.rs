use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Forge a new medallion interactively (default if no subcommand)
    Forge,
    /// Manage the academy apprentice roster
    Academy,
}

#[derive(Parser, Debug)]
#[command(name = "medallion-forge")]
#[command(about = "Witcher academy medallion forge", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/medallion-forge/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Forge);
    let start_time = Instant::now();

    let config_path = cli.config.map(PathBuf::from);
    let config = match medallion_forge::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if cli.verbose {
        eprintln!("Output directory: {}", config.output_dir().display());
        eprintln!(
            "Report persistence: {}",
            if config.save_reports { "on" } else { "off" }
        );
    }

    let result = match command {
        Commands::Forge => medallion_forge::forge::run(&config, cli.verbose),
        Commands::Academy => {
            let mut roster = Vec::new();
            medallion_forge::roster::run(&mut roster)
        }
    };

    match result {
        Ok(()) => {
            if cli.verbose {
                eprintln!("Session finished in {:?}", start_time.elapsed());
            }
            std::process::exit(EXIT_SUCCESS);
        }
        Err(e) => {
            eprintln!();
            eprintln!("Unexpected error: {:#}", e);
            eprintln!("The session ended early. Please run the program again.");
            std::process::exit(EXIT_ERROR);
        }
    }
}
