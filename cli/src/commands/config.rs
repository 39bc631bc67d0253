//! `bizcard config` subcommands.

use std::path::Path;

use anyhow::{Result, bail};

use crate::cli::ConfigAction;
use crate::config::Config;
use crate::output::Output;

pub fn run_config(action: ConfigAction) -> Result<()> {
    run_config_at(action, &Config::config_path()?, &Output::new())
}

fn run_config_at(action: ConfigAction, path: &Path, out: &Output) -> Result<()> {
    match action {
        ConfigAction::Path => out.print(path.display()),
        ConfigAction::Show => {
            let config = Config::load_from(path)?;
            if path.exists() {
                out.header(format!("# {}", path.display()));
            } else {
                out.dim(format!("# {} does not exist, showing defaults", path.display()));
            }
            out.print(config.to_toml()?);
        }
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                bail!("{} already exists; pass --force to overwrite it", path.display());
            }
            Config::with_defaults().save_to(path)?;
            out.success(format!("Wrote {}", path.display()));
        }
    }
    Ok(())
}
