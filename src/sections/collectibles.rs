use super::{RenderStrategy, Section, SectionData, SectionHeader, SectionKind, SizeHint};
use crate::derivation::Shared;
use crate::locale::section_title;
use crate::models::{Collectible, CollectibleFamily, WalletState};
use crate::preload::PreloadScheduler;

#[derive(Debug, Clone, PartialEq)]
pub struct CollectibleInputs {
    pub language: String,
    pub collectibles: Shared<Vec<Collectible>>,
    pub families: Shared<Vec<CollectibleFamily>>,
}

impl CollectibleInputs {
    pub fn from_state(state: &WalletState) -> Self {
        Self {
            language: state.language.clone(),
            collectibles: state.collectibles.clone(),
            families: state.collectible_families.clone(),
        }
    }
}

/// Build the collectibles section. Kicks off the session's one-shot
/// thumbnail preload if it has not run yet.
pub fn build_collectible_section(inputs: &CollectibleInputs, scheduler: &PreloadScheduler) -> Section {
    scheduler.schedule(&inputs.families);

    Section {
        kind: SectionKind::Collectibles,
        header: SectionHeader {
            title: section_title(&inputs.language, SectionKind::Collectibles).to_string(),
            total_items: inputs.collectibles.len(),
            total_value: String::new(),
        },
        data: SectionData::Collectibles(inputs.families.to_vec()),
        render: RenderStrategy::CollectibleFamily,
        loading: false,
        size_hint: Some(SizeHint::Big),
    }
}
