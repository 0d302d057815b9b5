//! Generic extractor for open-ended production categories.
//!
//! `DEMAIS-TIPOS-DE-PRODUCAO-TECNICA` holds many child shapes (talks, short
//! courses, maps, event organization, ...) that are not enumerated here.
//! Instead of a per-shape mapping, each child is scanned reflectively:
//!
//! 1. the child's tag name is the record type;
//! 2. the first direct child whose tag contains [`FallbackRule::block_fragment`]
//!    is the basic-data block;
//! 3. within that block, in document order, the first attribute whose name
//!    contains [`FallbackRule::title_fragment`] is the title, and the
//!    attribute named exactly [`FallbackRule::year_attribute`] is the year.
//!
//! Children without a title are dropped: nothing could display or address
//! them. This trades schema precision for coverage and is the intended
//! matching rule, not a gap in the mapping.

use crate::document::Element;

use super::ident::hash_id;
use super::model::OtherTechnicalProduction;
use super::names_of;

/// Name fragments driving the reflective scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackRule {
    pub block_fragment: &'static str,
    pub title_fragment: &'static str,
    pub year_attribute: &'static str,
}

impl FallbackRule {
    /// Vocabulary of Lattes exports.
    pub const LATTES: Self = Self {
        block_fragment: "DADOS-BASICOS",
        title_fragment: "TITULO",
        year_attribute: "ANO",
    };
}

impl Default for FallbackRule {
    fn default() -> Self {
        Self::LATTES
    }
}

/// Known production tags and their display labels.
const KIND_LABELS: &[(&str, &str)] = &[
    ("APRESENTACAO-DE-TRABALHO", "Apresentação de Trabalho"),
    ("CURSO-DE-CURTA-DURACAO-MINISTRADO", "Curso de Curta Duração"),
    ("RELATORIO-DE-PESQUISA", "Relatório de Pesquisa"),
    ("CARTA-MAPA-OU-SIMILAR", "Carta, Mapa ou Similar"),
    (
        "DESENVOLVIMENTO-DE-MATERIAL-DIDATICO-OU-INSTRUCIONAL",
        "Material Didático",
    ),
    ("ORGANIZACAO-DE-EVENTO", "Organização de Evento"),
    ("OUTRA-PRODUCAO-TECNICA", "Outra Produção Técnica"),
    ("EDITORACAO", "Editoração"),
    ("MANUTENCAO-DE-OBRA-ARTISTICA", "Manutenção de Obra Artística"),
    ("PROGRAMA-DE-RADIO-OU-TV", "Programa de Rádio ou TV"),
];

/// Scan every direct child of `category` with `rule`.
///
/// Returns records in source order; sorting is the caller's job.
pub fn extract_generic(category: &Element, rule: &FallbackRule) -> Vec<OtherTechnicalProduction> {
    category
        .children()
        .iter()
        .filter_map(|child| extract_one(child, rule))
        .collect()
}

fn extract_one(production: &Element, rule: &FallbackRule) -> Option<OtherTechnicalProduction> {
    let block = production.find_child(|c| c.name().contains(rule.block_fragment))?;

    let title = block
        .attributes()
        .find(|(name, _)| name.contains(rule.title_fragment))
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())?;
    let year = block.attr(rule.year_attribute);

    Some(OtherTechnicalProduction {
        id: hash_id("demais-producao", &[title, year]),
        element: production.name().to_string(),
        kind: kind_label(production.name()),
        title: title.to_string(),
        year: year.to_string(),
        authors: names_of(production, "AUTORES", "NOME-COMPLETO-DO-AUTOR"),
    })
}

/// Display label for a production tag.
///
/// Unknown tags are lower-cased with the first letter capitalized and
/// hyphens turned into spaces.
pub fn kind_label(tag: &str) -> String {
    if let Some((_, label)) = KIND_LABELS.iter().find(|(t, _)| *t == tag) {
        return (*label).to_string();
    }
    let lower = tag.to_lowercase().replace('-', " ");
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
