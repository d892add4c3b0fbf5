//! Layered CLI configuration.
//!
//! Priority (highest to lowest):
//! 1. Environment variables prefixed with `COMPOSIZIONI_`
//! 2. `composizioni.toml` in the working directory, or an explicit file
//! 3. Built-in defaults

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::export::EXPORT_FILE_NAME;

/// Default config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "composizioni.toml";

/// Settings for the `trasforma` tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Supplier id used when `--fornitore` is not given.
    pub default_supplier: Option<String>,
    /// Output path for batch exports.
    pub output_file: String,
    /// Log filter used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_supplier: None,
            output_file: EXPORT_FILE_NAME.to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl Settings {
    /// Load settings, reading `file` if given, else `composizioni.toml`.
    ///
    /// A missing file is not an error.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let file = file.unwrap_or_else(|| Path::new(CONFIG_FILE_NAME));
        Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed("COMPOSIZIONI_"))
            .extract()
            .map_err(|e| Box::new(e).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_without_file() {
        Jail::expect_with(|_jail| {
            let settings = Settings::load(None).expect("defaults");
            assert_eq!(settings, Settings::default());
            assert_eq!(settings.output_file, "dati_trasformati.csv");
            Ok(())
        });
    }

    #[test]
    fn test_file_then_env() {
        Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE_NAME,
                r#"
                default_supplier = "sifa"
                output_file = "out.csv"
                "#,
            )?;
            let settings = Settings::load(None).expect("file");
            assert_eq!(settings.default_supplier.as_deref(), Some("sifa"));
            assert_eq!(settings.output_file, "out.csv");

            jail.set_env("COMPOSIZIONI_DEFAULT_SUPPLIER", "progest");
            let settings = Settings::load(None).expect("env");
            assert_eq!(settings.default_supplier.as_deref(), Some("progest"));
            assert_eq!(settings.log_level, "warn");
            Ok(())
        });
    }

    #[test]
    fn test_bad_value_is_config_error() {
        Jail::expect_with(|jail| {
            jail.create_file("custom.toml", "output_file = [1, 2]")?;
            let err = Settings::load(Some(Path::new("custom.toml"))).unwrap_err();
            assert!(!err.is_validation());
            Ok(())
        });
    }
}
