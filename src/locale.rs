//! Header titles per language.

use crate::sections::SectionKind;

/// Localized title for a section header. Region variants (`pt-BR`) use their
/// base language; unknown languages fall back to English.
pub fn section_title(language: &str, kind: SectionKind) -> &'static str {
    let base = language
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();

    match (base.as_str(), kind) {
        ("es", SectionKind::Balances) => "Saldos",
        ("es", SectionKind::Investments) => "Inversiones",
        ("es", SectionKind::Collectibles) => "Coleccionables",
        ("fr", SectionKind::Balances) => "Soldes",
        ("fr", SectionKind::Investments) => "Investissements",
        ("fr", SectionKind::Collectibles) => "Objets de collection",
        ("de", SectionKind::Balances) => "Guthaben",
        ("de", SectionKind::Investments) => "Investitionen",
        ("de", SectionKind::Collectibles) => "Sammlerstücke",
        ("pt", SectionKind::Balances) => "Saldos",
        ("pt", SectionKind::Investments) => "Investimentos",
        ("pt", SectionKind::Collectibles) => "Colecionáveis",
        (_, SectionKind::Balances) => "Balances",
        (_, SectionKind::Investments) => "Investments",
        (_, SectionKind::Collectibles) => "Collectibles",
    }
}
