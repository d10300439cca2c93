use super::{Section, WalletSections};

/// Keep sections that have something to show, in the fixed order
/// balances, investments, collectibles.
pub fn compose_sections(balances: &Section, investments: &Section, collectibles: &Section) -> WalletSections {
    let sections: Vec<Section> = [balances, investments, collectibles]
        .into_iter()
        .filter(|section| section.header.total_items > 0)
        .cloned()
        .collect();

    WalletSections {
        is_empty: sections.is_empty(),
        sections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::{RenderStrategy, SectionData, SectionHeader, SectionKind};

    fn section(kind: SectionKind, total_items: usize) -> Section {
        Section {
            kind,
            header: SectionHeader {
                title: format!("{kind:?}"),
                total_items,
                total_value: String::new(),
            },
            data: SectionData::Investments(vec![]),
            render: RenderStrategy::InvestmentCard { collapsible: true },
            loading: false,
            size_hint: None,
        }
    }

    #[test]
    fn test_drops_zero_count_sections_and_keeps_order() {
        let composed = compose_sections(
            &section(SectionKind::Balances, 3),
            &section(SectionKind::Investments, 0),
            &section(SectionKind::Collectibles, 7),
        );
        assert!(!composed.is_empty);
        assert_eq!(composed.kinds(), vec![SectionKind::Balances, SectionKind::Collectibles]);
    }

    #[test]
    fn test_all_empty_is_empty() {
        let composed = compose_sections(
            &section(SectionKind::Balances, 0),
            &section(SectionKind::Investments, 0),
            &section(SectionKind::Collectibles, 0),
        );
        assert!(composed.is_empty);
        assert!(composed.sections.is_empty());
    }
}
