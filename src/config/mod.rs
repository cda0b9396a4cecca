//! Tax year configuration for the Net Salary Engine.
//!
//! This module provides functionality to load tax year rule sets from YAML
//! files: bracket tables, the general credit phase-out and the labour credit
//! bands.
//!
//! # Example
//!
//! ```no_run
//! use netto_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/nl").unwrap();
//! let config = loader.year(2025).unwrap();
//! println!("Loaded tax year: {}", config.year());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    GeneralCreditConfig, LabourCreditBand, LabourCreditConfig, TaxBracket, TaxYearConfig,
};
