use anyhow::Context;
use clap::Parser;
use std::{io, path::PathBuf};

use crate::config::{self, DEFAULT_CONFIG_FILE};
use crate::menu::App;

#[derive(Parser, Debug)]
#[command(name = "cdinventory")]
#[command(version = "0.1")]
#[command(about = "Personal CD inventory")]
pub struct Cli {
    /// Path to the config TOML file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Data file to load and save, overrides the config
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

impl Cli {
    /// Resolves the data file from the flag or the config
    fn data_file(&self) -> anyhow::Result<PathBuf> {
        if let Some(file) = &self.file {
            return Ok(file.clone());
        }
        let config_path = self
            .config
            .to_str()
            .with_context(|| format!("config path {:?} is not valid UTF-8", self.config))?;
        let cfg = config::Config::load(config_path)?;
        log::debug!("Loaded config version {}", cfg.version);
        Ok(cfg.storage.path)
    }
}

/// Entrypoint for CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let data_file = cli.data_file()?;
    log::debug!("Using data file {}", data_file.display());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut app = App::new(data_file, stdin.lock(), stdout.lock());
    app.run()
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use crate::config::DEFAULT_DATA_FILE;
    use clap::Parser;
    use std::{ffi::OsString, path::PathBuf};
    use tempfile::tempdir;

    #[test]
    fn test_file_flag_wins_over_config() -> anyhow::Result<()> {
        let cli = Cli::try_parse_from(["cdinventory", "--file", "mine.dat"])?;
        assert_eq!(cli.data_file()?, PathBuf::from("mine.dat"));
        Ok(())
    }

    #[test]
    fn test_data_file_from_config() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let config = dir.path().join("cdinventory.toml");
        std::fs::write(&config, "[storage]\npath = \"/tmp/cds.dat\"\n")?;

        let cli = Cli::try_parse_from([
            OsString::from("cdinventory"),
            OsString::from("-c"),
            config.into_os_string(),
        ])?;
        assert_eq!(cli.data_file()?, PathBuf::from("/tmp/cds.dat"));
        Ok(())
    }

    #[test]
    fn test_default_data_file_without_config() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let config = dir.path().join("absent.toml");

        let cli = Cli::try_parse_from([
            OsString::from("cdinventory"),
            OsString::from("--config"),
            config.into_os_string(),
        ])?;
        assert_eq!(cli.data_file()?, PathBuf::from(DEFAULT_DATA_FILE));
        Ok(())
    }
}
