//! Extractors for `DADOS-COMPLEMENTARES`: examination committees, event
//! participations and complementary training.

use crate::document::Element;

use super::ident::sequence_id;
use super::model::{Committee, ComplementaryTraining, EventParticipation};
use super::names_of;
use super::sort::sort_by_year_desc;

const COMPLEMENTARY: &str = "DADOS-COMPLEMENTARES";

// ── Committees ──────────────────────────────────────────────────────────

const COMMITTEE_KINDS: &[(&str, &str, &str)] = &[
    ("PARTICIPACAO-EM-BANCA-DE-MESTRADO", "Mestrado", "mestrado"),
    ("PARTICIPACAO-EM-BANCA-DE-DOUTORADO", "Doutorado", "doutorado"),
    ("PARTICIPACAO-EM-BANCA-DE-GRADUACAO", "Graduação", "graduacao"),
];

pub fn extract_committees(root: &Element) -> Vec<Committee> {
    let Some(block) = root.path(&[COMPLEMENTARY, "PARTICIPACAO-EM-BANCA-TRABALHOS-CONCLUSAO"])
    else {
        return Vec::new();
    };

    let mut items: Vec<Committee> = COMMITTEE_KINDS
        .iter()
        .flat_map(|&(tag, label, subkind)| {
            let basic_tag = format!("DADOS-BASICOS-DA-{tag}");
            let detail_tag = format!("DETALHAMENTO-DA-{tag}");
            block
                .child_or_empty(tag)
                .children_named(tag)
                .map(|item| {
                    let basic = item.child_or_empty(&basic_tag);
                    let detail = item.child_or_empty(&detail_tag);
                    let title = basic.attr("TITULO");
                    let year = basic.attr("ANO");
                    Committee {
                        id: sequence_id(
                            "banca",
                            Some(subkind),
                            basic.attr("SEQUENCIA-PRODUCAO"),
                            &[title, year],
                        ),
                        kind: label.to_string(),
                        title: title.to_string(),
                        year: year.to_string(),
                        candidate: detail.attr("NOME-DO-CANDIDATO").to_string(),
                        institution: detail.attr("NOME-INSTITUICAO").to_string(),
                        members: names_of(
                            item,
                            "PARTICIPANTE-BANCA",
                            "NOME-COMPLETO-DO-PARTICIPANTE-DA-BANCA",
                        ),
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect();

    sort_by_year_desc(&mut items);
    items
}

// ── Events ──────────────────────────────────────────────────────────────

struct EventShape {
    tag: &'static str,
    label: &'static str,
    subkind: &'static str,
    /// `DA` for the named kinds, `DE` for the catch-all.
    article: &'static str,
}

const EVENT_KINDS: &[EventShape] = &[
    EventShape {
        tag: "PARTICIPACAO-EM-CONGRESSO",
        label: "Congresso",
        subkind: "congresso",
        article: "DA",
    },
    EventShape {
        tag: "PARTICIPACAO-EM-SEMINARIO",
        label: "Seminário",
        subkind: "seminario",
        article: "DA",
    },
    EventShape {
        tag: "PARTICIPACAO-EM-SIMPOSIO",
        label: "Simpósio",
        subkind: "simposio",
        article: "DA",
    },
    EventShape {
        tag: "PARTICIPACAO-EM-ENCONTRO",
        label: "Encontro",
        subkind: "encontro",
        article: "DA",
    },
    EventShape {
        tag: "PARTICIPACAO-EM-OFICINA",
        label: "Oficina",
        subkind: "oficina",
        article: "DA",
    },
    EventShape {
        tag: "OUTRA-PARTICIPACAO-EM-EVENTOS-CONGRESSOS",
        label: "Outro",
        subkind: "outro",
        article: "DE",
    },
];

pub fn extract_event_participations(root: &Element) -> Vec<EventParticipation> {
    let Some(block) = root.path(&[COMPLEMENTARY, "PARTICIPACAO-EM-EVENTOS-CONGRESSOS"]) else {
        return Vec::new();
    };

    let mut items: Vec<EventParticipation> = EVENT_KINDS
        .iter()
        .flat_map(|shape| {
            let basic_tag = format!("DADOS-BASICOS-{}-{}", shape.article, shape.tag);
            let detail_tag = format!("DETALHAMENTO-{}-{}", shape.article, shape.tag);
            block
                .children_named(shape.tag)
                .map(|item| {
                    let basic = item.child_or_empty(&basic_tag);
                    let detail = item.child_or_empty(&detail_tag);
                    let title = basic.attr("TITULO");
                    let year = basic.attr("ANO");
                    EventParticipation {
                        id: sequence_id(
                            "evento",
                            Some(shape.subkind),
                            basic.attr("SEQUENCIA-PRODUCAO"),
                            &[title, year],
                        ),
                        kind: shape.label.to_string(),
                        title: title.to_string(),
                        year: year.to_string(),
                        nature: basic.attr("NATUREZA").to_string(),
                        event_name: detail.attr("NOME-DO-EVENTO").to_string(),
                        city: detail.attr("CIDADE-DO-EVENTO").to_string(),
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect();

    sort_by_year_desc(&mut items);
    items
}

// ── Complementary training ──────────────────────────────────────────────

const TRAINING_KINDS: &[(&str, &str, &str)] = &[
    (
        "FORMACAO-COMPLEMENTAR-DE-EXTENSAO-UNIVERSITARIA",
        "Extensão Universitária",
        "ext",
    ),
    (
        "FORMACAO-COMPLEMENTAR-CURSO-DE-CURTA-DURACAO",
        "Curso de Curta Duração",
        "curta",
    ),
    ("OUTRAS-FORMACOES-COMPLEMENTARES", "Outra", "outra"),
];

/// Training courses, sorted by start year.
pub fn extract_complementary_training(root: &Element) -> Vec<ComplementaryTraining> {
    let Some(block) = root.path(&[COMPLEMENTARY, "FORMACAO-COMPLEMENTAR"]) else {
        return Vec::new();
    };

    let mut items: Vec<ComplementaryTraining> = TRAINING_KINDS
        .iter()
        .flat_map(|&(tag, label, subkind)| {
            block.children_named(tag).map(move |item| {
                let title = item.attr("TITULO-DA-FORMACAO-COMPLEMENTAR");
                let start_year = item.attr("ANO-DE-INICIO");
                ComplementaryTraining {
                    id: sequence_id(
                        "formacao",
                        Some(subkind),
                        item.attr("SEQUENCIA-FORMACAO-COMPLEMENTAR"),
                        &[title, start_year],
                    ),
                    kind: label.to_string(),
                    title: title.to_string(),
                    start_year: start_year.to_string(),
                    end_year: item.attr("ANO-DE-CONCLUSAO").to_string(),
                    institution: item.attr("NOME-INSTITUICAO").to_string(),
                    hours: item.attr("CARGA-HORARIA").to_string(),
                }
            })
        })
        .collect();

    sort_by_year_desc(&mut items);
    items
}
