//! Init command implementation

use anyhow::{bail, Result};
use std::path::Path;
use tracing::info;

use kinderxp::config::Config;

/// Write the default configuration to `path`
pub fn init_command(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            path.display()
        );
    }

    Config::default().save_to_file(path)?;
    info!("Wrote default config to {}", path.display());
    println!("Created {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        init_command(&path, false).unwrap();
        assert!(init_command(&path, false).is_err());
        init_command(&path, true).unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.storage.profile, "default");
    }
}
