use anyhow::Result;
use tortoisegit_core::ports::{AppConfig, ConfigStore};
use tracing::warn;

use crate::cli::CliArgs;

/// Load the stored configuration and apply command line overrides
pub fn from_cli_and_store(cli_args: &CliArgs, store: &dyn ConfigStore) -> Result<AppConfig> {
    let mut config = store.load()?;

    // CLI args override config file
    if let Some(tool) = &cli_args.tool {
        config.tool.path = Some(tool.clone());
    }

    for name in config.unknown_keybinding_commands() {
        warn!("Ignoring keybindings for unknown command '{}'", name);
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::persistence::FileConfigStore;
    use clap::Parser;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_cli_override() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("tgit.toml");
        let store = FileConfigStore::with_path(&config_path);

        let mut original = AppConfig::default();
        original.tool.path = Some(PathBuf::from("/original/TortoiseGitProc.exe"));
        store.save(&original)?;

        let cli_args =
            CliArgs::parse_from(["tgit", "--tool", "/override/TortoiseGitProc.exe", "paths"]);
        let config = from_cli_and_store(&cli_args, &store)?;

        assert_eq!(
            config.tool.path,
            Some(PathBuf::from("/override/TortoiseGitProc.exe"))
        );
        assert_eq!(config.tool.search_paths, original.tool.search_paths);
        Ok(())
    }

    #[test]
    fn test_no_override_keeps_file_values() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let store = FileConfigStore::with_path(temp_dir.path().join("tgit.toml"));

        let mut original = AppConfig::default();
        original.tool.path = Some(PathBuf::from("/original/TortoiseGitProc.exe"));
        store.save(&original)?;

        let cli_args = CliArgs::parse_from(["tgit", "paths"]);
        assert_eq!(from_cli_and_store(&cli_args, &store)?, original);
        Ok(())
    }
}
