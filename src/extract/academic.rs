//! Extractors for `DADOS-GERAIS`: profile, degrees, appointments,
//! knowledge areas, languages and the free-text notes.

use crate::document::Element;

use super::ident::{hash_id, sequence_id};
use super::model::*;
use super::sort::sort_by_year_desc;
use super::text::extract_email;

const GENERAL: &str = "DADOS-GERAIS";

/// One degree sub-kind under `FORMACAO-ACADEMICA-TITULACAO`.
struct DegreeShape {
    tag: &'static str,
    label: &'static str,
    subkind: &'static str,
    title_attr: &'static str,
    has_advisor: bool,
}

const DEGREES: &[DegreeShape] = &[
    DegreeShape {
        tag: "DOUTORADO",
        label: "Doutorado",
        subkind: "doutorado",
        title_attr: "TITULO-DA-DISSERTACAO-TESE",
        has_advisor: true,
    },
    DegreeShape {
        tag: "MESTRADO",
        label: "Mestrado",
        subkind: "mestrado",
        title_attr: "TITULO-DA-DISSERTACAO-TESE",
        has_advisor: true,
    },
    DegreeShape {
        tag: "GRADUACAO",
        label: "Graduação",
        subkind: "graduacao",
        title_attr: "TITULO-DO-TRABALHO-DE-CONCLUSAO-DE-CURSO",
        has_advisor: false,
    },
    DegreeShape {
        tag: "ESPECIALIZACAO",
        label: "Especialização",
        subkind: "especializacao",
        title_attr: "TITULO-DA-MONOGRAFIA",
        has_advisor: false,
    },
];

/// General-profile fields. Always succeeds; missing data reads as empty.
pub fn extract_profile(root: &Element) -> GeneralProfile {
    let general = root.child_or_empty(GENERAL);
    let address = general.child_or_empty("ENDERECO");
    let work = address.child_or_empty("ENDERECO-PROFISSIONAL");

    GeneralProfile {
        name: general.attr("NOME-COMPLETO").to_string(),
        citation_name: general.attr("NOME-EM-CITACOES-BIBLIOGRAFICAS").to_string(),
        summary: general
            .child_or_empty("RESUMO-CV")
            .attr("TEXTO-RESUMO-CV-RH")
            .to_string(),
        summary_en: general
            .child_or_empty("RESUMO-CV")
            .attr("TEXTO-RESUMO-CV-RH-EN")
            .to_string(),
        other_info: other_info_text(general).to_string(),
        email: extract_email(address.attr("ELETRONICO")),
        institution: work.attr("NOME-INSTITUICAO-EMPRESA").to_string(),
        department: work.attr("NOME-ORGAO").to_string(),
        city: work.attr("CIDADE").to_string(),
        state: work.attr("UF").to_string(),
        country: work.attr("PAIS").to_string(),
    }
}

fn other_info_text(general: &Element) -> &str {
    general
        .child_or_empty("OUTRAS-INFORMACOES-RELEVANTES")
        .attr("OUTRAS-INFORMACOES-RELEVANTES")
}

/// Degrees, doctorate first then master's, bachelor's, specialization,
/// sorted newest start year first.
pub fn extract_education(root: &Element) -> Vec<Education> {
    let Some(block) = root.path(&[GENERAL, "FORMACAO-ACADEMICA-TITULACAO"]) else {
        return Vec::new();
    };

    let mut degrees: Vec<Education> = DEGREES
        .iter()
        .flat_map(|shape| {
            block.children_named(shape.tag).map(move |item| {
                let title = item.attr(shape.title_attr);
                let start_year = item.attr("ANO-DE-INICIO");
                Education {
                    id: sequence_id(
                        "formacao",
                        Some(shape.subkind),
                        item.attr("SEQUENCIA-FORMACAO"),
                        &[item.attr("NOME-CURSO"), start_year],
                    ),
                    kind: shape.label.to_string(),
                    start_year: start_year.to_string(),
                    end_year: item.attr("ANO-DE-CONCLUSAO").to_string(),
                    institution: item.attr("NOME-INSTITUICAO").to_string(),
                    course: item.attr("NOME-CURSO").to_string(),
                    title: title.to_string(),
                    advisor: if shape.has_advisor {
                        item.attr("NOME-COMPLETO-DO-ORIENTADOR").to_string()
                    } else {
                        String::new()
                    },
                    status: item.attr("STATUS-DO-CURSO").to_string(),
                }
            })
        })
        .collect();

    sort_by_year_desc(&mut degrees);
    degrees
}

/// Professional appointments in source order.
pub fn extract_appointments(root: &Element) -> Vec<Appointment> {
    let Some(block) = root.path(&[GENERAL, "ATUACOES-PROFISSIONAIS"]) else {
        return Vec::new();
    };

    block
        .children_named("ATUACAO-PROFISSIONAL")
        .map(|appointment| {
            let institution = appointment.attr("NOME-INSTITUICAO");
            let bonds = appointment
                .children_named("VINCULOS")
                .map(|bond| Bond {
                    start_year: bond.attr("ANO-INICIO").to_string(),
                    end_year: bond.attr("ANO-FIM").to_string(),
                    bond_type: bond.attr("TIPO-DE-VINCULO").to_string(),
                    role: bond.attr("ENQUADRAMENTO-FUNCIONAL").to_string(),
                    weekly_hours: bond.attr("CARGA-HORARIA-SEMANAL").to_string(),
                    exclusive: bond.attr("FLAG-DEDICACAO-EXCLUSIVA").to_string(),
                })
                .collect();
            let activities = appointment
                .children_named("ATIVIDADES-DE-PESQUISA-E-DESENVOLVIMENTO")
                .map(|activity| ResearchActivity {
                    kind: "Pesquisa e Desenvolvimento".to_string(),
                    start_year: activity.attr("ANO-INICIO").to_string(),
                    end_year: activity.attr("ANO-FIM").to_string(),
                    lines: super::names_of(
                        activity,
                        "LINHA-DE-PESQUISA",
                        "TITULO-DA-LINHA-DE-PESQUISA",
                    ),
                })
                .collect();

            Appointment {
                id: sequence_id(
                    "atuacao",
                    None,
                    appointment.attr("SEQUENCIA-ATIVIDADE"),
                    &[institution],
                ),
                institution: institution.to_string(),
                bonds,
                activities,
            }
        })
        .collect()
}

/// Knowledge areas in source order, still in controlled-vocabulary form.
pub fn extract_knowledge_areas(root: &Element) -> Vec<KnowledgeArea> {
    let Some(block) = root.path(&[GENERAL, "AREAS-DE-ATUACAO"]) else {
        return Vec::new();
    };

    block
        .children_named("AREA-DE-ATUACAO")
        .map(|area| {
            let major = area.attr("NOME-GRANDE-AREA-DO-CONHECIMENTO");
            let name = area.attr("NOME-DA-AREA-DO-CONHECIMENTO");
            KnowledgeArea {
                id: sequence_id(
                    "area",
                    None,
                    area.attr("SEQUENCIA-AREA-DE-ATUACAO"),
                    &[major, name],
                ),
                major_area: major.to_string(),
                area: name.to_string(),
                sub_area: area.attr("NOME-DA-SUB-AREA-DO-CONHECIMENTO").to_string(),
                specialty: area.attr("NOME-DA-ESPECIALIDADE").to_string(),
            }
        })
        .collect()
}

/// Languages; ids hash the language name since the source has no sequence.
pub fn extract_languages(root: &Element) -> Vec<Language> {
    let Some(block) = root.path(&[GENERAL, "IDIOMAS"]) else {
        return Vec::new();
    };

    block
        .children_named("IDIOMA")
        .map(|lang| {
            let name = lang.attr("DESCRICAO-DO-IDIOMA");
            Language {
                id: hash_id("idioma", &[name]),
                language: name.to_string(),
                understanding: lang.attr("PROFICIENCIA-DE-COMPREENSAO").to_string(),
                speaking: lang.attr("PROFICIENCIA-DE-FALA").to_string(),
                reading: lang.attr("PROFICIENCIA-DE-LEITURA").to_string(),
                writing: lang.attr("PROFICIENCIA-DE-ESCRITA").to_string(),
            }
        })
        .collect()
}

/// The résumé as a single addressable note.
///
/// Always present so the section can be toggled even before a summary is
/// written.
pub fn extract_summary_note(root: &Element) -> Vec<Note> {
    let text = root
        .child_or_empty(GENERAL)
        .child_or_empty("RESUMO-CV")
        .attr("TEXTO-RESUMO-CV-RH");
    vec![Note {
        id: "resumo-cv".to_string(),
        title: "Resumo do Currículo".to_string(),
        text: text.to_string(),
    }]
}

/// "Other relevant information" as a note, or nothing when the text is empty.
pub fn extract_other_info_note(root: &Element) -> Vec<Note> {
    let text = other_info_text(root.child_or_empty(GENERAL));
    if text.is_empty() {
        return Vec::new();
    }
    vec![Note {
        id: "outras-informacoes".to_string(),
        title: "Outras Informações Relevantes".to_string(),
        text: text.to_string(),
    }]
}
