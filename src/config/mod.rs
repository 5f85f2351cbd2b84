pub mod toml_config;

use crate::core::CatalogSource;
use crate::domain::catalog::Catalog;
use crate::domain::model::{BundleDiscount, CallToAction};
use crate::utils::error::Result;

#[cfg(feature = "cli")]
use crate::utils::{error::CalcError, validation::Validate};
#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "cli")]
use std::path::PathBuf;

/// The built-in three-service table with the default discount and link.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl CatalogSource for BuiltinCatalog {
    fn load_catalog(&self) -> Result<Catalog> {
        Ok(Catalog::builtin())
    }

    fn bundle_discount(&self) -> Result<BundleDiscount> {
        Ok(BundleDiscount::default())
    }

    fn call_to_action(&self) -> CallToAction {
        CallToAction::default()
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "pricing-calc")]
#[command(about = "Price a bundle of services with the multi-service discount")]
pub struct CliConfig {
    /// TOML catalog file; the built-in catalog is used when omitted
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Service ids to toggle, in order
    #[arg(long, value_delimiter = ',')]
    pub select: Vec<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print the service cards and exit
    #[arg(long)]
    pub list: bool,

    /// Read service ids from stdin, one per line, re-rendering after each
    #[arg(short, long)]
    pub interactive: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Parses the catalog file if one was given. Validation happens when the
    /// returned source builds its catalog.
    pub fn catalog_source(&self) -> Result<Box<dyn CatalogSource>> {
        match &self.catalog {
            Some(path) => {
                tracing::info!("Loading catalog from {}", path.display());
                let config = toml_config::CatalogConfig::from_file(path)?;
                Ok(Box::new(config))
            }
            None => Ok(Box::new(BuiltinCatalog)),
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.list && self.interactive {
            return Err(CalcError::ConfigValidationError {
                field: "list".to_string(),
                message: "--list cannot be combined with --interactive".to_string(),
            });
        }
        for id in &self.select {
            crate::utils::validation::validate_non_empty_string("select", id)?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_select_list() {
        let config = CliConfig::parse_from(["pricing-calc", "--select", "video,ads", "--format", "json"]);
        assert_eq!(config.select, vec!["video".to_string(), "ads".to_string()]);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_format, LogFormat::Compact);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_list_and_interactive_conflict() {
        let config = CliConfig::parse_from(["pricing-calc", "--list", "--interactive"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builtin_source() {
        let catalog = BuiltinCatalog.load_catalog().unwrap();
        assert_eq!(catalog, Catalog::builtin());
        assert_eq!(BuiltinCatalog.bundle_discount().unwrap().percent(), BundleDiscount::DEFAULT_PERCENT);
    }
}
