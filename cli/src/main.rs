mod cli;
mod commands;
mod config;
mod output;
mod settings;
mod share;
mod timing;

use anyhow::Result;
use clap::Parser as _;

use crate::cli::{Cli, Commands};
use crate::commands::{generate_completions, run_config, run_qr, run_render, run_vcard};
use crate::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with timing support
    timing::init_tracing(cli.verbose, cli.timing);

    match cli.command {
        Commands::Render(args) => run_render(&args, &Config::load()?),
        Commands::Vcard { contact, encoding } => run_vcard(&contact, &encoding, &Config::load()?),
        Commands::Qr {
            contact,
            encoding,
            style,
            output,
        } => run_qr(&contact, &encoding, &style, &output, &Config::load()?),
        Commands::Config { action } => run_config(action),
        Commands::Completions { shell } => {
            generate_completions(shell);
            Ok(())
        }
    }
}
