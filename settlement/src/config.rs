//! Configuration for settlement planning

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Settlement configuration
///
/// Both knobs default to one cent, matching the rounding granularity of the
/// ledger's accounting currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Balances within this of zero are treated as settled; absorbs the
    /// residual rounding slack split resolution can leave
    pub tolerance: Decimal,

    /// Transfers at or below this amount are suppressed as noise
    pub min_transfer: Decimal,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: Decimal::new(1, 2),
            min_transfer: Decimal::new(1, 2),
        }
    }
}

impl Config {
    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| crate::Error::Config(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> crate::Result<Self> {
        let mut config = Config::default();

        if let Ok(tolerance) = std::env::var("SETTLEMENT_TOLERANCE") {
            config.tolerance = tolerance
                .parse()
                .map_err(|e| crate::Error::Config(format!("Invalid SETTLEMENT_TOLERANCE: {}", e)))?;
        }

        if let Ok(min_transfer) = std::env::var("SETTLEMENT_MIN_TRANSFER") {
            config.min_transfer = min_transfer.parse().map_err(|e| {
                crate::Error::Config(format!("Invalid SETTLEMENT_MIN_TRANSFER: {}", e))
            })?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.tolerance, Decimal::new(1, 2));
        assert_eq!(config.min_transfer, Decimal::new(1, 2));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settlement.toml");
        std::fs::write(&path, "tolerance = \"0.05\"\nmin_transfer = \"0.02\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();

        assert_eq!(config.tolerance, Decimal::new(5, 2));
        assert_eq!(config.min_transfer, Decimal::new(2, 2));
    }

    #[test]
    fn test_from_file_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settlement.toml");
        std::fs::write(&path, "tolerance = [1, 2]\n").unwrap();

        assert!(Config::from_file(&path).is_err());
    }
}
