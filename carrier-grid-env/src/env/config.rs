//! Configuration of [`CarrierEnv`](super::CarrierEnv).
use crate::field::DEFAULT_MAX_ATTEMPTS;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`CarrierEnv`](super::CarrierEnv).
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct CarrierEnvConfig {
    /// The number of columns of the field.
    pub width: usize,

    /// The number of rows of the field.
    pub height: usize,

    /// Lower bound of the wall density drawn at every reset.
    pub min_wall_density: f64,

    /// Upper bound of the wall density drawn at every reset.
    pub max_wall_density: f64,

    /// Bound on the number of seeding attempts of the field generator.
    pub max_generation_attempts: usize,
}

impl Default for CarrierEnvConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            min_wall_density: 0.2,
            max_wall_density: 0.3,
            max_generation_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl CarrierEnvConfig {
    /// Sets the number of columns of the field.
    pub fn width(mut self, v: usize) -> Self {
        self.width = v;
        self
    }

    /// Sets the number of rows of the field.
    pub fn height(mut self, v: usize) -> Self {
        self.height = v;
        self
    }

    /// Sets the wall density range drawn at every reset.
    pub fn wall_density(mut self, min: f64, max: f64) -> Self {
        self.min_wall_density = min;
        self.max_wall_density = max;
        self
    }

    /// Sets the bound on the number of seeding attempts of the field generator.
    pub fn max_generation_attempts(mut self, v: usize) -> Self {
        self.max_generation_attempts = v;
        self
    }

    /// Constructs [`CarrierEnvConfig`] from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let config = serde_yaml::from_reader(rdr)?;
        Ok(config)
    }

    /// Saves [`CarrierEnvConfig`] as YAML.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn test_serde_env_config() -> Result<()> {
        let config = CarrierEnvConfig::default()
            .width(7)
            .height(5)
            .wall_density(0.1, 0.4)
            .max_generation_attempts(500);

        let dir = TempDir::new("carrier_env_config")?;
        let path = dir.path().join("env_config.yaml");
        config.save(&path)?;
        let config_ = CarrierEnvConfig::load(&path)?;
        assert_eq!(config, config_);
        Ok(())
    }
}
