use clap::Parser;
use clap_complete::{generate, Shell};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

use hat_cli::cli::{build_cli_command, Cli, Commands};

mod commands;
mod common;

fn generate_completions(shell: Shell, out: Option<&Path>) -> anyhow::Result<()> {
    let mut cmd = build_cli_command();
    if let Some(path) = out {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::File::create(path)?;
        generate(shell, &mut cmd, "hat", &mut file);
        println!("Wrote {shell:?} completion to {}", path.display());
    } else {
        let stdout = &mut io::stdout();
        generate(shell, &mut cmd, "hat", stdout);
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let (name, result) = match &cli.command {
        Some(Commands::Report(args)) => ("Report", commands::report::handle(args)),
        Some(Commands::Ml(args)) => ("ML", commands::ml::handle(args)),
        Some(Commands::Summary(args)) => ("Summary", commands::summary::handle(args)),
        Some(Commands::Charts(args)) => ("Charts", commands::charts::handle(args)),
        Some(Commands::Completions { shell, out }) => {
            ("Completions", generate_completions(*shell, out.as_deref()))
        }
        None => {
            info!("No subcommand provided. Use `hat --help` for more information.");
            return;
        }
    };

    match result {
        Ok(()) => info!("{name} command successful!"),
        Err(e) => {
            error!("{name} command failed: {e:#}");
            std::process::exit(1);
        }
    }
}
