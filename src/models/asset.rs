use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A fungible token holding as reported by the balances source.
///
/// Immutable snapshot for one update cycle; the pipeline never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Stable identifier (contract address, or `"eth"` for the native coin).
    pub id: String,
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub quantity: Decimal,
    /// Unit price in the active native (display) currency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native_price: Option<Decimal>,
    /// Quantity times price, when upstream has already computed it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native_value: Option<Decimal>,
}

impl Asset {
    pub fn new(id: impl Into<String>, symbol: impl Into<String>, quantity: Decimal) -> Self {
        Self {
            id: id.into(),
            symbol: symbol.into(),
            name: None,
            quantity,
            native_price: None,
            native_value: None,
        }
    }

    pub fn with_native_price(mut self, price: Decimal) -> Self {
        self.native_price = Some(price);
        self
    }

    /// Price usable as a conversion multiplier. A zero price counts as unknown.
    pub fn usable_price(&self) -> Option<Decimal> {
        self.native_price.filter(|p| !p.is_zero())
    }
}

/// Find the reference asset by id (case-insensitive, since upstream sources
/// disagree on address casing).
pub fn find_asset<'a>(assets: &'a [Asset], id: &str) -> Option<&'a Asset> {
    assets.iter().find(|a| a.id.eq_ignore_ascii_case(id))
}
