//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading tax tables
//! and settlement rules from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{IncomeTaxTable, SettlementRules, SocialTaxTable, TableMetadata, TaxTables};

/// Loads and provides access to the settlement tables.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides access to the aggregated [`TaxTables`].
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/clt_2024/
/// ├── metadata.yaml    # Table-set metadata
/// ├── social_tax.yaml  # Progressive INSS schedule and ceiling
/// ├── income_tax.yaml  # IRRF schedule and dependent deduction
/// └── settlement.yaml  # Severance-fund rates and notice rule
/// ```
///
/// # Example
///
/// ```no_run
/// use settlement_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/clt_2024").unwrap();
/// println!("Table set: {}", loader.tables().metadata().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    tables: TaxTables,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/clt_2024")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    ///
    /// # Example
    ///
    /// ```no_run
    /// use settlement_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/clt_2024")?;
    /// # Ok::<(), settlement_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<TableMetadata>(&path.join("metadata.yaml"))?;
        let social_tax = Self::load_yaml::<SocialTaxTable>(&path.join("social_tax.yaml"))?;
        let income_tax = Self::load_yaml::<IncomeTaxTable>(&path.join("income_tax.yaml"))?;
        let settlement = Self::load_yaml::<SettlementRules>(&path.join("settlement.yaml"))?;

        if social_tax.brackets.is_empty() {
            return Err(EngineError::ConfigParseError {
                path: path.join("social_tax.yaml").display().to_string(),
                message: "schedule must contain at least one bracket".to_string(),
            });
        }
        if income_tax.brackets.is_empty() {
            return Err(EngineError::ConfigParseError {
                path: path.join("income_tax.yaml").display().to_string(),
                message: "schedule must contain at least one bracket".to_string(),
            });
        }

        Ok(Self {
            tables: TaxTables::new(metadata, social_tax, income_tax, settlement),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded tables.
    pub fn tables(&self) -> &TaxTables {
        &self.tables
    }
}
