use super::{RenderStrategy, Section, SectionData, SectionHeader, SectionKind};
use crate::derivation::Shared;
use crate::locale::section_title;
use crate::models::{InvestmentPosition, WalletState};

#[derive(Debug, Clone, PartialEq)]
pub struct InvestmentInputs {
    pub language: String,
    pub native_currency: String,
    pub positions: Shared<Vec<InvestmentPosition>>,
    pub total_value: String,
}

impl InvestmentInputs {
    pub fn from_state(state: &WalletState) -> Self {
        Self {
            language: state.language.clone(),
            native_currency: state.native_currency.clone(),
            positions: state.investments.clone(),
            total_value: state.investments_total.clone(),
        }
    }
}

/// Positions pass through unchanged; the aggregate arrives preformatted.
pub fn build_investment_section(inputs: &InvestmentInputs) -> Section {
    Section {
        kind: SectionKind::Investments,
        header: SectionHeader {
            title: section_title(&inputs.language, SectionKind::Investments).to_string(),
            total_items: inputs.positions.len(),
            total_value: inputs.total_value.clone(),
        },
        data: SectionData::Investments(inputs.positions.to_vec()),
        render: RenderStrategy::InvestmentCard { collapsible: true },
        loading: false,
        size_hint: None,
    }
}
