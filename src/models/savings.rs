use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Asset a savings market lends out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnderlyingAsset {
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// A yield/savings position, raw from the savings source plus the two
/// derived native values filled in by the balances builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsPosition {
    pub underlying: UnderlyingAsset,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supply_balance_underlying: Option<Decimal>,
    /// Price of the underlying, denominated in the reference (native) asset.
    pub underlying_price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifetime_supply_interest_accrued: Option<Decimal>,
    #[serde(default)]
    pub native_value: Decimal,
    #[serde(default)]
    pub lifetime_supply_interest_accrued_native: Decimal,
}

impl SavingsPosition {
    pub fn new(symbol: impl Into<String>, supply_balance: Decimal, underlying_price: Decimal) -> Self {
        Self {
            underlying: UnderlyingAsset {
                symbol: symbol.into(),
                address: None,
            },
            supply_balance_underlying: Some(supply_balance),
            underlying_price,
            lifetime_supply_interest_accrued: None,
            native_value: Decimal::ZERO,
            lifetime_supply_interest_accrued_native: Decimal::ZERO,
        }
    }

    pub fn with_interest_accrued(mut self, accrued: Decimal) -> Self {
        self.lifetime_supply_interest_accrued = Some(accrued);
        self
    }

    /// Copy of this position with both derived values computed against the
    /// reference asset price. `None` zeroes them, as does a product too large
    /// for `Decimal`.
    pub fn derive_native(&self, reference_price: Option<Decimal>) -> Self {
        let convert = |amount: Option<Decimal>| match (amount, reference_price) {
            (Some(amount), Some(price)) => amount
                .checked_mul(self.underlying_price)
                .and_then(|v| v.checked_mul(price))
                .unwrap_or_else(|| {
                    warn!(
                        underlying = %self.underlying.symbol,
                        "savings native value overflowed, using zero"
                    );
                    Decimal::ZERO
                }),
            _ => Decimal::ZERO,
        };

        Self {
            native_value: convert(self.supply_balance_underlying),
            lifetime_supply_interest_accrued_native: convert(self.lifetime_supply_interest_accrued),
            ..self.clone()
        }
    }
}
