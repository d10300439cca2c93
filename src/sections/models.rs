use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Asset, CollectibleFamily, InvestmentPosition, SavingsPosition};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Balances,
    Investments,
    Collectibles,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionHeader {
    pub title: String,
    pub total_items: usize,
    /// Formatted aggregate, or empty when the section has no value concept.
    pub total_value: String,
}

/// Screen a coin row opens when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpandedAssetView {
    Chart,
    Token,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BalanceItem {
    Coin {
        asset: Asset,
        view: ExpandedAssetView,
    },
    SavingsContainer {
        positions: Vec<SavingsPosition>,
        total_value: Decimal,
    },
    Skeleton {
        unique_id: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "items", rename_all = "snake_case")]
pub enum SectionData {
    Balances(Vec<BalanceItem>),
    Investments(Vec<InvestmentPosition>),
    Collectibles(Vec<CollectibleFamily>),
}

impl SectionData {
    pub fn len(&self) -> usize {
        match self {
            SectionData::Balances(items) => items.len(),
            SectionData::Investments(items) => items.len(),
            SectionData::Collectibles(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Row renderer the presentation layer maps each section to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderStrategy {
    BalanceRow,
    BalanceSkeleton,
    InvestmentCard { collapsible: bool },
    CollectibleFamily,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeHint {
    Big,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub kind: SectionKind,
    pub header: SectionHeader,
    pub data: SectionData,
    pub render: RenderStrategy,
    #[serde(default)]
    pub loading: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_hint: Option<SizeHint>,
}

/// Final composed list handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletSections {
    pub is_empty: bool,
    pub sections: Vec<Section>,
}

impl WalletSections {
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    pub fn kinds(&self) -> Vec<SectionKind> {
        self.sections.iter().map(|s| s.kind).collect()
    }
}
