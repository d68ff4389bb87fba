use anyhow::{Result, anyhow};
use std::path::PathBuf;

pub fn get_clipdeck_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
    Ok(home.join(".clipdeck"))
}

pub fn get_config_path() -> Result<PathBuf> {
    let clipdeck_dir = get_clipdeck_dir()?;
    Ok(clipdeck_dir.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_clipdeck_dir() {
        let dir = get_clipdeck_dir().unwrap();
        assert!(dir.to_string_lossy().contains(".clipdeck"));
    }

    #[test]
    fn test_get_config_path() {
        let path = get_config_path().unwrap();
        assert!(path.to_string_lossy().contains(".clipdeck"));
        assert!(path.to_string_lossy().ends_with("config.toml"));
    }
}
