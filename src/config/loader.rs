//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading tax year
//! configurations from YAML files.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{TaxYearConfig, TaxYearFile};

/// Loads and provides access to tax year configurations.
///
/// The `ConfigLoader` reads every YAML file in a directory, one file per tax
/// year, and serves the validated rule sets by year. Loaded configurations
/// are immutable for the life of the process; concurrent calculations share
/// them by reference.
///
/// # Directory Structure
///
/// ```text
/// config/nl/
/// ├── 2025.yaml   # brackets + credit rules effective in 2025
/// └── 2026.yaml   # next year's rules, once published
/// ```
///
/// # Example
///
/// ```no_run
/// use netto_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/nl").unwrap();
/// let config = loader.year(2025).unwrap();
/// println!("Top rate: {}", config.brackets().last().unwrap().rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    years: BTreeMap<i32, TaxYearConfig>,
}

impl ConfigLoader {
    /// Loads every tax year configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/nl")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The directory is missing or contains no YAML files
    /// - Any file contains invalid YAML
    /// - Any rule set fails structural validation
    /// - Two files describe the same tax year
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let dir = path.as_ref();
        let dir_str = dir.display().to_string();

        if !dir.exists() {
            return Err(EngineError::ConfigNotFound { path: dir_str });
        }

        let entries = fs::read_dir(dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut years = BTreeMap::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let file_path = entry.path();
            if file_path.extension().is_some_and(|ext| ext == "yaml") {
                let config = Self::load_year_file(&file_path)?;
                let year = config.year();
                if years.insert(year, config).is_some() {
                    return Err(EngineError::ConfigInvalid {
                        year,
                        message: format!("tax year {year} is defined more than once"),
                    });
                }
            }
        }

        if years.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{dir_str} (no tax year files found)"),
            });
        }

        info!(
            directory = %dir_str,
            years = years.len(),
            "Loaded tax year configurations"
        );

        Ok(Self { years })
    }

    /// Loads and validates a single tax year file.
    fn load_year_file(path: &Path) -> EngineResult<TaxYearConfig> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let file: TaxYearFile =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        TaxYearConfig::new(
            file.year,
            file.brackets,
            file.general_credit,
            file.labour_credit,
        )
    }

    /// Returns the configuration for the given tax year.
    ///
    /// # Errors
    ///
    /// Returns `YearNotFound` if no configuration was loaded for `year`.
    pub fn year(&self, year: i32) -> EngineResult<&TaxYearConfig> {
        self.years
            .get(&year)
            .ok_or(EngineError::YearNotFound { year })
    }

    /// Returns the most recent loaded tax year configuration.
    ///
    /// `None` cannot occur for a loader produced by [`ConfigLoader::load`],
    /// which rejects empty directories.
    pub fn latest(&self) -> Option<&TaxYearConfig> {
        self.years.values().next_back()
    }
}
