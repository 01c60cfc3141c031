mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{generate, init, schema, GenerateArgs, InitArgs, SchemaArgs};
use tracing_subscriber::EnvFilter;

/// Capsule CLI - generate native app source from capsule projects
#[derive(Parser, Debug)]
#[command(name = "capsule")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a starter capsule project file
    Init(InitArgs),

    /// Generate target source code from a project file
    Generate(GenerateArgs),

    /// Print the capsule type registry
    Schema(SchemaArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let cwd = std::env::current_dir()
        .expect("Cannot get current directory")
        .display()
        .to_string();

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Generate(args) => generate(args, &cwd),
        Command::Schema(args) => schema(args),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
