//! Completed supervisions under `OUTRA-PRODUCAO/ORIENTACOES-CONCLUIDAS`.

use crate::document::Element;

use super::ident::sequence_id;
use super::model::Supervision;
use super::sort::sort_by_year_desc;

struct SupervisionShape {
    /// Wrapper tag; each record repeats it one level down.
    tag: &'static str,
    /// Fixed label, or `None` to read `NATUREZA` from the basic block.
    label: Option<&'static str>,
    subkind: &'static str,
}

const SHAPES: &[SupervisionShape] = &[
    SupervisionShape {
        tag: "ORIENTACOES-CONCLUIDAS-PARA-MESTRADO",
        label: Some("Mestrado"),
        subkind: "mestrado",
    },
    SupervisionShape {
        tag: "ORIENTACOES-CONCLUIDAS-PARA-DOUTORADO",
        label: Some("Doutorado"),
        subkind: "doutorado",
    },
    SupervisionShape {
        tag: "OUTRAS-ORIENTACOES-CONCLUIDAS",
        label: None,
        subkind: "outra",
    },
];

/// Master's, doctoral and other supervisions, concatenated in that order
/// and sorted newest first.
pub fn extract_supervisions(root: &Element) -> Vec<Supervision> {
    let Some(block) = root.path(&["OUTRA-PRODUCAO", "ORIENTACOES-CONCLUIDAS"]) else {
        return Vec::new();
    };

    let mut items: Vec<Supervision> = SHAPES
        .iter()
        .flat_map(|shape| {
            let basic_tag = format!("DADOS-BASICOS-DE-{}", shape.tag);
            let detail_tag = format!("DETALHAMENTO-DE-{}", shape.tag);
            block
                .child_or_empty(shape.tag)
                .children_named(shape.tag)
                .map(|item| {
                    let basic = item.child_or_empty(&basic_tag);
                    let detail = item.child_or_empty(&detail_tag);
                    let title = basic.attr("TITULO");
                    let year = basic.attr("ANO");
                    Supervision {
                        id: sequence_id(
                            "orientacao",
                            Some(shape.subkind),
                            basic.attr("SEQUENCIA-PRODUCAO"),
                            &[title, year],
                        ),
                        kind: shape.label.unwrap_or_else(|| basic.attr("NATUREZA")).to_string(),
                        title: title.to_string(),
                        year: year.to_string(),
                        student: detail.attr("NOME-DO-ORIENTADO").to_string(),
                        institution: detail.attr("NOME-DA-INSTITUICAO").to_string(),
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect();

    sort_by_year_desc(&mut items);
    items
}
