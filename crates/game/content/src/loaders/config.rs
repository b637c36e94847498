//! AI configuration loader.

use std::path::Path;

use game_core::AiConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`AiConfig`] from TOML files.
///
/// Keys missing from the file keep their default values.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing AiConfig
    pub fn load(path: &Path) -> LoadResult<AiConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {}", path.display(), e))
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<AiConfig> {
        let config: AiConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if !(0.0..=1.0).contains(&config.skill_use_chance) {
            anyhow::bail!(
                "skill_use_chance must be within 0.0..=1.0, got {}",
                config.skill_use_chance
            );
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = ConfigLoader::parse("max_search_nodes = 64\nhunt_radius = 5\n").unwrap();
        assert_eq!(config.max_search_nodes, 64);
        assert_eq!(config.hunt_radius, 5);
        assert_eq!(config.engage_radius, AiConfig::DEFAULT_ENGAGE_RADIUS);
        assert_eq!(config.skill_use_chance, AiConfig::DEFAULT_SKILL_USE_CHANCE);
    }

    #[test]
    fn empty_file_is_default_config() {
        assert_eq!(ConfigLoader::parse("").unwrap(), AiConfig::default());
    }

    #[test]
    fn out_of_range_chance_is_rejected() {
        let err = ConfigLoader::parse("skill_use_chance = 1.5").unwrap_err();
        assert!(err.to_string().contains("skill_use_chance"));
    }

    #[test]
    fn load_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "skill_use_chance = 0.25").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.skill_use_chance, 0.25);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ConfigLoader::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("Cannot read"));
    }
}
