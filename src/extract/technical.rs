//! Extractors for `PRODUCAO-TECNICA`.

use crate::document::Element;

use super::fallback::{FallbackRule, extract_generic};
use super::ident::sequence_id;
use super::model::{OtherTechnicalProduction, Software, TechnicalWork};
use super::names_of;
use super::sort::sort_by_year_desc;

const TECHNICAL: &str = "PRODUCAO-TECNICA";

pub fn extract_software(root: &Element) -> Vec<Software> {
    let Some(block) = root.path(&[TECHNICAL, "SOFTWARE"]) else {
        return Vec::new();
    };

    let mut items: Vec<Software> = block
        .children_named("SOFTWARE")
        .map(|item| {
            let basic = item.child_or_empty("DADOS-BASICOS-DO-SOFTWARE");
            let detail = item.child_or_empty("DETALHAMENTO-DO-SOFTWARE");
            let title = basic.attr("TITULO-DO-SOFTWARE");
            let year = basic.attr("ANO");
            Software {
                id: sequence_id("software", None, basic.attr("SEQUENCIA-PRODUCAO"), &[title, year]),
                title: title.to_string(),
                year: year.to_string(),
                nature: basic.attr("NATUREZA").to_string(),
                purpose: detail.attr("FINALIDADE").to_string(),
                platform: detail.attr("PLATAFORMA").to_string(),
                authors: names_of(item, "AUTORES", "NOME-COMPLETO-DO-AUTOR"),
            }
        })
        .collect();

    sort_by_year_desc(&mut items);
    items
}

pub fn extract_technical_works(root: &Element) -> Vec<TechnicalWork> {
    let Some(block) = root.path(&[TECHNICAL, "TRABALHO-TECNICO"]) else {
        return Vec::new();
    };

    let mut items: Vec<TechnicalWork> = block
        .children_named("TRABALHO-TECNICO")
        .map(|item| {
            let basic = item.child_or_empty("DADOS-BASICOS-DO-TRABALHO-TECNICO");
            let detail = item.child_or_empty("DETALHAMENTO-DO-TRABALHO-TECNICO");
            let title = basic.attr("TITULO-DO-TRABALHO-TECNICO");
            let year = basic.attr("ANO");
            TechnicalWork {
                id: sequence_id(
                    "trabalho-tecnico",
                    None,
                    basic.attr("SEQUENCIA-PRODUCAO"),
                    &[title, year],
                ),
                title: title.to_string(),
                year: year.to_string(),
                nature: basic.attr("NATUREZA").to_string(),
                purpose: detail.attr("FINALIDADE").to_string(),
                authors: names_of(item, "AUTORES", "NOME-COMPLETO-DO-AUTOR"),
            }
        })
        .collect();

    sort_by_year_desc(&mut items);
    items
}

/// Everything under `DEMAIS-TIPOS-DE-PRODUCAO-TECNICA`, via the generic
/// fallback scan.
pub fn extract_other_technical(root: &Element, rule: &FallbackRule) -> Vec<OtherTechnicalProduction> {
    let Some(block) = root.path(&[TECHNICAL, "DEMAIS-TIPOS-DE-PRODUCAO-TECNICA"]) else {
        return Vec::new();
    };

    let mut items = extract_generic(block, rule);
    sort_by_year_desc(&mut items);
    items
}
