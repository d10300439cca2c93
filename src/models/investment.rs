use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A liquidity-pool style investment position. Valued upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestmentPosition {
    pub id: String,
    pub token_symbols: Vec<String>,
    pub quantity: Decimal,
    pub native_value: Decimal,
}
