use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::format::{currency_symbol, CurrencyFormat};
use crate::preload::PreloadPolicy;

/// Display/output formatting configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Decimal places for header totals.
    pub currency_decimals: u32,

    /// When true, render header totals with thousands separators.
    pub currency_grouping: bool,

    /// Symbol override. When unset the symbol is looked up from the native
    /// currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_symbol: Option<String>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_decimals: 2,
            currency_grouping: false,
            currency_symbol: None,
        }
    }
}

impl DisplayConfig {
    pub fn currency_format<'a>(&'a self, native_currency: &str) -> CurrencyFormat<'a> {
        CurrencyFormat {
            decimals: self.currency_decimals,
            grouping: self.currency_grouping,
            symbol: self
                .currency_symbol
                .as_deref()
                .unwrap_or_else(|| currency_symbol(native_currency)),
        }
    }
}

fn default_native_asset_id() -> String {
    "eth".to_string()
}

/// Balances section configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalancesConfig {
    /// Id of the reference asset whose price converts savings positions.
    #[serde(default = "default_native_asset_id")]
    pub native_asset_id: String,

    /// When true, priced coin rows open the chart view instead of the token view.
    pub chart_expanded_available: bool,
}

impl Default for BalancesConfig {
    fn default() -> Self {
        Self {
            native_asset_id: default_native_asset_id(),
            chart_expanded_available: false,
        }
    }
}

/// Thumbnail prefetch tiering thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreloadConfig {
    /// Families with more rows than this are "large".
    pub large_family_threshold: usize,

    /// Families with more rows than this are "jumbo".
    pub jumbo_family_threshold: usize,

    /// Lower bound for the top-fold cutoff.
    pub min_top_fold_threshold: usize,
}

impl Default for PreloadConfig {
    fn default() -> Self {
        Self {
            large_family_threshold: 4,
            jumbo_family_threshold: 8,
            min_top_fold_threshold: 10,
        }
    }
}

impl PreloadConfig {
    pub fn policy(&self) -> Result<PreloadPolicy> {
        let policy = PreloadPolicy::new(
            self.large_family_threshold,
            self.jumbo_family_threshold,
            self.min_top_fold_threshold,
        )?;
        Ok(policy)
    }
}

/// Pipeline configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Display/output formatting settings.
    pub display: DisplayConfig,

    /// Balances section settings.
    pub balances: BalancesConfig,

    /// Collectible thumbnail prefetch settings.
    pub preload: PreloadConfig,
}

impl Config {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config
            .preload
            .policy()
            .with_context(|| format!("Invalid [preload] settings in {}", path.display()))?;

        Ok(config)
    }

    /// Load config from a file, or return default config if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Returns the default config file path.
///
/// Resolution order:
/// 1. `./wallet-sections.toml` if it exists in current directory
/// 2. `<config dir>/wallet-sections/wallet-sections.toml`
pub fn default_config_path() -> PathBuf {
    let local_config = PathBuf::from("wallet-sections.toml");
    if local_config.exists() {
        return local_config;
    }

    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("wallet-sections").join("wallet-sections.toml");
    }

    local_config
}
