//! End-to-end extraction over an ISO-8859-1 Lattes export.

mod common;

use nice_lattes::document::DocumentError;
use nice_lattes::extract::{Curriculum, Record, SectionKey};

fn curriculum() -> Curriculum {
    Curriculum::from_bytes(&common::cv_latin1()).unwrap()
}

#[test]
fn latin1_document_decodes_accents() {
    let cv = curriculum();
    let profile = cv.profile();
    assert_eq!(profile.name, "Conceição Araújo");
    assert_eq!(profile.email, "conceicao@ufx.br");
    assert_eq!(profile.city, "São Paulo");
    assert_eq!(profile.institution, "Universidade Federal X");
}

#[test]
fn load_from_disk_matches_in_memory_parse() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("cv.xml");
    std::fs::write(&path, common::cv_latin1()).unwrap();

    let from_disk = Curriculum::load(&path).unwrap();
    assert_eq!(from_disk.sections(), curriculum().sections());
}

#[test]
fn missing_file_is_unreadable() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = Curriculum::load(&dir.path().join("cv.xml")).unwrap_err();
    assert!(matches!(err, DocumentError::Unreadable { .. }));
}

#[test]
fn truncated_document_is_malformed() {
    let bytes = common::cv_latin1();
    let err = Curriculum::from_bytes(&bytes[..bytes.len() / 2]).unwrap_err();
    assert!(matches!(err, DocumentError::Malformed { .. }));
}

#[test]
fn ids_and_order_are_stable_across_parses() {
    let first = curriculum().sections();
    let second = curriculum().sections();
    for (a, b) in first.iter().zip(&second) {
        let ids_a: Vec<_> = a.items.iter().map(|e| e.id()).collect();
        let ids_b: Vec<_> = b.items.iter().map(|e| e.id()).collect();
        assert_eq!(ids_a, ids_b, "section {}", a.key);
    }
}

#[test]
fn ids_use_safe_characters() {
    for section in curriculum().sections() {
        for item in &section.items {
            assert!(
                item.id()
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "unsafe id {:?} in {}",
                item.id(),
                section.key
            );
        }
    }
}

#[test]
fn articles_sorted_newest_first_with_stable_ties() {
    let ids: Vec<_> = curriculum().articles().into_iter().map(|a| a.id).collect();
    assert_eq!(ids, vec!["artigo-12", "artigo-10", "artigo-11"]);
}

#[test]
fn education_sorted_by_start_year() {
    let kinds: Vec<_> = curriculum()
        .education()
        .into_iter()
        .map(|e| e.kind)
        .collect();
    assert_eq!(kinds, vec!["Doutorado", "Mestrado", "Graduação"]);
}

#[test]
fn fallback_drops_titleless_productions() {
    let other = curriculum().other_technical_production();
    assert_eq!(other.len(), 1);
    assert_eq!(other[0].title, "Palestra convidada");
    assert_eq!(other[0].element, "APRESENTACAO-DE-TRABALHO");
}

#[test]
fn absent_categories_are_empty_sections() {
    let sections = curriculum().sections();
    assert_eq!(sections.len(), SectionKey::ALL.len());
    for key in [
        SectionKey::BooksAndChapters,
        SectionKey::EventWorks,
        SectionKey::PressTexts,
        SectionKey::Software,
        SectionKey::TechnicalWorks,
        SectionKey::Committees,
        SectionKey::EventParticipations,
    ] {
        let section = sections.iter().find(|s| s.key == key).unwrap();
        assert!(section.items.is_empty(), "{key} should be empty");
    }
}

#[test]
fn populated_categories() {
    let cv = curriculum();
    assert_eq!(cv.supervisions()[0].student, "João Pereira");
    assert_eq!(cv.complementary_training()[0].id, "formacao-curta-1");
    assert_eq!(cv.languages().len(), 2);
    assert_eq!(cv.appointments()[0].bonds[0].end_year, "");
    assert_eq!(
        cv.section(SectionKey::OtherInformation).items[0].id(),
        "outras-informacoes"
    );
}

#[test]
fn sections_serialize_to_json() {
    let json = serde_json::to_value(curriculum().sections()).unwrap();
    let articles = &json[5];
    assert_eq!(articles["key"], "ARTIGOS-PUBLICADOS");
    assert_eq!(articles["label"], "Artigos Publicados");
    assert_eq!(articles["items"][1]["authors"][1], "Bruno Lima");
}
