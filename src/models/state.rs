use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Asset, Collectible, CollectibleFamily, InvestmentPosition, Network, SavingsPosition};
use crate::derivation::Shared;

fn default_language() -> String {
    "en".to_string()
}

fn default_native_currency() -> String {
    "USD".to_string()
}

/// Everything the sections pipeline reads, as already fetched upstream.
///
/// List fields are [`Shared`]: keep the same handle across updates when the
/// list did not change so memoized sections are reused.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletState {
    #[serde(default)]
    pub all_assets: Shared<Vec<Asset>>,
    #[serde(default)]
    pub all_assets_count: usize,
    /// Aggregate value of `all_assets` in the native currency.
    #[serde(default)]
    pub assets_total: Decimal,
    #[serde(default)]
    pub savings: Shared<Vec<SavingsPosition>>,
    #[serde(default)]
    pub is_balances_section_empty: bool,
    #[serde(default)]
    pub is_wallet_eth_zero: bool,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_native_currency")]
    pub native_currency: String,
    #[serde(default)]
    pub network: Network,
    #[serde(default)]
    pub investments: Shared<Vec<InvestmentPosition>>,
    /// Preformatted investment aggregate, shown as-is.
    #[serde(default)]
    pub investments_total: String,
    #[serde(default)]
    pub collectibles: Shared<Vec<Collectible>>,
    #[serde(default)]
    pub collectible_families: Shared<Vec<CollectibleFamily>>,
}

impl Default for WalletState {
    fn default() -> Self {
        Self {
            all_assets: Shared::default(),
            all_assets_count: 0,
            assets_total: Decimal::ZERO,
            savings: Shared::default(),
            is_balances_section_empty: false,
            is_wallet_eth_zero: false,
            language: default_language(),
            native_currency: default_native_currency(),
            network: Network::default(),
            investments: Shared::default(),
            investments_total: String::new(),
            collectibles: Shared::default(),
            collectible_families: Shared::default(),
        }
    }
}
