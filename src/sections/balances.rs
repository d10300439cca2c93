use rust_decimal::Decimal;
use tracing::debug;

use super::{BalanceItem, ExpandedAssetView, RenderStrategy, Section, SectionData, SectionHeader, SectionKind};
use crate::config::Config;
use crate::derivation::Shared;
use crate::format::format_currency;
use crate::locale::section_title;
use crate::models::{find_asset, Asset, Network, SavingsPosition, WalletState};

const SKELETON_ID: &str = "skeleton0";

/// Inputs the balances section is derived from. Also the cache key.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceInputs {
    pub assets: Shared<Vec<Asset>>,
    pub assets_count: usize,
    pub assets_total: Decimal,
    pub savings: Shared<Vec<SavingsPosition>>,
    pub is_balances_section_empty: bool,
    pub is_wallet_eth_zero: bool,
    pub language: String,
    pub native_currency: String,
    pub network: Network,
}

impl BalanceInputs {
    pub fn from_state(state: &WalletState) -> Self {
        Self {
            assets: state.all_assets.clone(),
            assets_count: state.all_assets_count,
            assets_total: state.assets_total,
            savings: state.savings.clone(),
            is_balances_section_empty: state.is_balances_section_empty,
            is_wallet_eth_zero: state.is_wallet_eth_zero,
            language: state.language.clone(),
            native_currency: state.native_currency.clone(),
            network: state.network,
        }
    }

    /// Balances are still arriving for a wallet that is expected to hold some.
    pub fn is_loading(&self) -> bool {
        !self.is_wallet_eth_zero && self.is_balances_section_empty
    }
}

/// Savings positions with derived native values, plus their summed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavingsSummary {
    pub positions: Vec<SavingsPosition>,
    pub total_value: Decimal,
}

/// Convert every savings position through the reference asset price.
/// Without a usable price all derived values are zero. The total saturates
/// at `Decimal::MAX`.
pub fn summarize_savings(savings: &[SavingsPosition], reference_price: Option<Decimal>) -> SavingsSummary {
    let positions: Vec<SavingsPosition> = savings
        .iter()
        .map(|position| position.derive_native(reference_price))
        .collect();
    let total_value = positions
        .iter()
        .fold(Decimal::ZERO, |total, p| total.saturating_add(p.native_value));
    SavingsSummary {
        positions,
        total_value,
    }
}

fn coin_item(asset: &Asset, chart_expanded_available: bool) -> BalanceItem {
    let view = if chart_expanded_available && asset.native_price.is_some() {
        ExpandedAssetView::Chart
    } else {
        ExpandedAssetView::Token
    };
    BalanceItem::Coin {
        asset: asset.clone(),
        view,
    }
}

pub fn build_balance_section(inputs: &BalanceInputs, config: &Config) -> Section {
    let reference_price =
        find_asset(&inputs.assets, &config.balances.native_asset_id).and_then(Asset::usable_price);
    let savings = summarize_savings(&inputs.savings, reference_price);
    let total_value = inputs.assets_total.saturating_add(savings.total_value);

    let format = config.display.currency_format(&inputs.native_currency);
    let header_value = format_currency(total_value, &format);
    let title = section_title(&inputs.language, SectionKind::Balances).to_string();

    if inputs.is_loading() {
        debug!(assets = inputs.assets_count, "balances still loading, rendering skeleton");
        return Section {
            kind: SectionKind::Balances,
            header: SectionHeader {
                title,
                total_items: 1,
                total_value: header_value,
            },
            data: SectionData::Balances(vec![BalanceItem::Skeleton {
                unique_id: SKELETON_ID.to_string(),
            }]),
            render: RenderStrategy::BalanceSkeleton,
            loading: true,
            size_hint: None,
        };
    }

    let mut items: Vec<BalanceItem> = inputs
        .assets
        .iter()
        .map(|asset| coin_item(asset, config.balances.chart_expanded_available))
        .collect();

    if inputs.network.is_primary() {
        items.push(BalanceItem::SavingsContainer {
            positions: savings.positions,
            total_value: savings.total_value,
        });
    }

    Section {
        kind: SectionKind::Balances,
        header: SectionHeader {
            title,
            total_items: inputs.assets_count,
            total_value: header_value,
        },
        data: SectionData::Balances(items),
        render: RenderStrategy::BalanceRow,
        loading: false,
        size_hint: None,
    }
}
