use super::defaults::MAX_WINDOW_EDGE;
use super::AppConfig;
use anyhow::{bail, Result};
use clap::Parser;

impl AppConfig {
    /// Parse CLI arguments and validate them right away.
    pub fn parse_args() -> Result<Self> {
        let config = Self::parse();
        config.validate()?;
        Ok(config)
    }

    /// Check CLI values before any window state is derived from them.
    pub fn validate(&self) -> Result<()> {
        if self.window_width == 0 || self.window_width > MAX_WINDOW_EDGE {
            bail!(
                "--window-width must be between 1 and {MAX_WINDOW_EDGE}, got {}",
                self.window_width
            );
        }
        if self.window_height == 0 || self.window_height > MAX_WINDOW_EDGE {
            bail!(
                "--window-height must be between 1 and {MAX_WINDOW_EDGE}, got {}",
                self.window_height
            );
        }
        if self.window_title.trim().is_empty() {
            bail!("--window-title must not be empty");
        }
        Ok(())
    }
}
