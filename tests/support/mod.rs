#![allow(dead_code)]

use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;
use wallet_sections::config::Config;
use wallet_sections::derivation::Shared;
use wallet_sections::models::{
    Asset, Collectible, CollectibleFamily, CollectibleRow, InvestmentPosition, SavingsPosition,
    WalletState,
};
use wallet_sections::preload::RecordingImageLoader;
use wallet_sections::WalletSectionsPipeline;

pub fn d(s: &str) -> Decimal {
    Decimal::from_str(s).expect("valid decimal literal")
}

pub fn eth(quantity: &str, price: Option<&str>) -> Asset {
    let asset = Asset::new("eth", "ETH", d(quantity));
    match price {
        Some(price) => asset.with_native_price(d(price)),
        None => asset,
    }
}

pub fn token(id: &str, symbol: &str, quantity: &str) -> Asset {
    Asset::new(id, symbol, d(quantity))
}

pub fn investment(id: &str, value: &str) -> InvestmentPosition {
    InvestmentPosition {
        id: id.to_string(),
        token_symbols: vec!["ETH".to_string(), "DAI".to_string()],
        quantity: Decimal::ONE,
        native_value: d(value),
    }
}

/// Family `name` with `rows` rows of one thumbnailed token each. Token ids
/// are `"{name}/{row}"`.
pub fn family(name: &str, rows: usize) -> CollectibleFamily {
    let rows = (0..rows)
        .map(|row| {
            let id = format!("{name}/{row}");
            let url = format!("https://img.example/{id}.png");
            CollectibleRow(vec![Collectible::new(id, Some(url.as_str()))])
        })
        .collect();
    CollectibleFamily::new(name, rows)
}

pub fn holdings(families: &[CollectibleFamily]) -> Vec<Collectible> {
    families
        .iter()
        .flat_map(|f| f.rows.iter().flat_map(|r| r.tokens().iter().cloned()))
        .collect()
}

#[derive(Debug, Clone)]
pub struct StateBuilder {
    state: WalletState,
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self {
            state: WalletState::default(),
        }
    }
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_assets(mut self, assets: Vec<Asset>, total: &str) -> Self {
        self.state.all_assets_count = assets.len();
        self.state.all_assets = Shared::new(assets);
        self.state.assets_total = d(total);
        self
    }

    pub fn with_savings(mut self, savings: Vec<SavingsPosition>) -> Self {
        self.state.savings = Shared::new(savings);
        self
    }

    pub fn with_investments(mut self, positions: Vec<InvestmentPosition>, total: &str) -> Self {
        self.state.investments = Shared::new(positions);
        self.state.investments_total = total.to_string();
        self
    }

    pub fn with_families(mut self, families: Vec<CollectibleFamily>) -> Self {
        self.state.collectibles = Shared::new(holdings(&families));
        self.state.collectible_families = Shared::new(families);
        self
    }

    pub fn loading(mut self) -> Self {
        self.state.is_balances_section_empty = true;
        self.state.is_wallet_eth_zero = false;
        self
    }

    pub fn build(self) -> WalletState {
        self.state
    }
}

pub fn recording_pipeline() -> (WalletSectionsPipeline, Arc<RecordingImageLoader>) {
    recording_pipeline_with(Config::default())
}

pub fn recording_pipeline_with(config: Config) -> (WalletSectionsPipeline, Arc<RecordingImageLoader>) {
    let loader = Arc::new(RecordingImageLoader::new());
    let pipeline = WalletSectionsPipeline::new(config, loader.clone()).expect("valid config");
    (pipeline, loader)
}
