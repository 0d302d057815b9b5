//! Normalized record types produced by the category extractors.
//!
//! Every string field is empty rather than absent when the source lacks the
//! attribute. Field names are the crate's own; the presentation layer picks
//! which one to display.

use serde::{Serialize, Serializer};

/// Shared contract of every extracted record.
pub trait Record {
    /// Visibility key: unique within the document, stable across re-parses,
    /// restricted to `[a-z0-9-]`.
    fn id(&self) -> &str;

    /// Sort key. Empty means ongoing or unspecified.
    fn year(&self) -> &str;
}

// ── General profile ─────────────────────────────────────────────────────

/// Identity, contact and summary fields from `DADOS-GERAIS`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GeneralProfile {
    pub name: String,
    pub citation_name: String,
    pub summary: String,
    pub summary_en: String,
    pub other_info: String,
    /// Institutional address when the field is tagged, else the raw field.
    pub email: String,
    pub institution: String,
    pub department: String,
    pub city: String,
    pub state: String,
    pub country: String,
}

// ── Academic background ─────────────────────────────────────────────────

/// A completed or ongoing degree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Education {
    pub id: String,
    /// Degree label, e.g. "Doutorado".
    pub kind: String,
    pub start_year: String,
    pub end_year: String,
    pub institution: String,
    pub course: String,
    /// Thesis, dissertation or monograph title.
    pub title: String,
    /// Empty for bachelor's and specialization degrees.
    pub advisor: String,
    pub status: String,
}

/// Employment bond inside a professional appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bond {
    pub start_year: String,
    pub end_year: String,
    pub bond_type: String,
    pub role: String,
    pub weekly_hours: String,
    pub exclusive: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResearchActivity {
    pub kind: String,
    pub start_year: String,
    pub end_year: String,
    pub lines: Vec<String>,
}

/// Professional appointment at one institution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Appointment {
    pub id: String,
    pub institution: String,
    pub bonds: Vec<Bond>,
    pub activities: Vec<ResearchActivity>,
}

/// Knowledge-area classification, still in the source's controlled
/// vocabulary (pass through [`title_case`](super::text::title_case) to display).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KnowledgeArea {
    pub id: String,
    pub major_area: String,
    pub area: String,
    pub sub_area: String,
    pub specialty: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Language {
    pub id: String,
    pub language: String,
    pub understanding: String,
    pub speaking: String,
    pub reading: String,
    pub writing: String,
}

// ── Bibliographic production ────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub year: String,
    pub doi: String,
    pub journal: String,
    pub volume: String,
    /// "first-last"; a lone "-" when neither page is known.
    pub pages: String,
    pub issn: String,
    /// Citation order, as in the source.
    pub authors: Vec<String>,
}

/// A published/organized book or a book chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookItem {
    pub id: String,
    /// "Livro" or "Capítulo".
    pub kind: String,
    pub title: String,
    pub year: String,
    /// Title of the containing book; empty for whole books.
    pub book_title: String,
    pub publisher: String,
    pub isbn: String,
    /// Page count for books, "first-last" for chapters.
    pub pages: String,
    pub authors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventWork {
    pub id: String,
    pub title: String,
    pub year: String,
    pub nature: String,
    pub event: String,
    pub city: String,
    pub authors: Vec<String>,
}

/// Newspaper or magazine text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PressText {
    pub id: String,
    pub title: String,
    pub year: String,
    pub nature: String,
    pub outlet: String,
    pub authors: Vec<String>,
}

// ── Technical production ────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Software {
    pub id: String,
    pub title: String,
    pub year: String,
    pub nature: String,
    pub purpose: String,
    pub platform: String,
    pub authors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TechnicalWork {
    pub id: String,
    pub title: String,
    pub year: String,
    pub nature: String,
    pub purpose: String,
    pub authors: Vec<String>,
}

/// Output of the generic fallback extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OtherTechnicalProduction {
    pub id: String,
    /// Raw source tag, e.g. `APRESENTACAO-DE-TRABALHO`.
    pub element: String,
    /// Display label derived from the tag.
    pub kind: String,
    pub title: String,
    pub year: String,
    pub authors: Vec<String>,
}

// ── Supervision, committees, events, training ───────────────────────────

/// Completed supervision of a student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Supervision {
    pub id: String,
    pub kind: String,
    pub title: String,
    pub year: String,
    pub student: String,
    pub institution: String,
}

/// Examination-committee participation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Committee {
    pub id: String,
    pub kind: String,
    pub title: String,
    pub year: String,
    pub candidate: String,
    pub institution: String,
    /// Committee members in source order.
    pub members: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventParticipation {
    pub id: String,
    pub kind: String,
    pub title: String,
    pub year: String,
    pub nature: String,
    pub event_name: String,
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplementaryTraining {
    pub id: String,
    pub kind: String,
    pub title: String,
    pub start_year: String,
    pub end_year: String,
    pub institution: String,
    pub hours: String,
}

/// Single free-text item backing the résumé and "other information" sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub text: String,
}

// ── Record impls ────────────────────────────────────────────────────────

macro_rules! impl_record {
    ($field:ident => $($ty:ty),+ $(,)?) => {
        $(
            impl Record for $ty {
                fn id(&self) -> &str {
                    &self.id
                }
                fn year(&self) -> &str {
                    &self.$field
                }
            }
        )+
    };
}

impl_record!(year =>
    Article,
    BookItem,
    EventWork,
    PressText,
    Software,
    TechnicalWork,
    OtherTechnicalProduction,
    Supervision,
    Committee,
    EventParticipation,
);

impl_record!(start_year => Education, ComplementaryTraining);

macro_rules! impl_undated_record {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Record for $ty {
                fn id(&self) -> &str {
                    &self.id
                }
                fn year(&self) -> &str {
                    ""
                }
            }
        )+
    };
}

impl_undated_record!(Appointment, KnowledgeArea, Language, Note);

// ── Entry ───────────────────────────────────────────────────────────────

macro_rules! entry_enum {
    ($($variant:ident($ty:ty)),+ $(,)?) => {
        /// Any record, so a [`Section`] can hold every category.
        ///
        /// Serializes as the wrapped record's own fields.
        #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
        #[serde(untagged)]
        pub enum Entry {
            $($variant($ty),)+
        }

        impl Record for Entry {
            fn id(&self) -> &str {
                match self {
                    $(Self::$variant(r) => r.id(),)+
                }
            }
            fn year(&self) -> &str {
                match self {
                    $(Self::$variant(r) => r.year(),)+
                }
            }
        }

        $(
            impl From<$ty> for Entry {
                fn from(r: $ty) -> Self {
                    Self::$variant(r)
                }
            }
        )+
    };
}

entry_enum!(
    Note(Note),
    Education(Education),
    Appointment(Appointment),
    KnowledgeArea(KnowledgeArea),
    Language(Language),
    Article(Article),
    Book(BookItem),
    EventWork(EventWork),
    PressText(PressText),
    Software(Software),
    TechnicalWork(TechnicalWork),
    OtherTechnical(OtherTechnicalProduction),
    Supervision(Supervision),
    Committee(Committee),
    EventParticipation(EventParticipation),
    ComplementaryTraining(ComplementaryTraining),
);

// ── Sections ────────────────────────────────────────────────────────────

/// The fixed set of sections the visibility overlay can address.
///
/// The string forms are persisted in visibility files and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionKey {
    Summary,
    Education,
    Appointments,
    KnowledgeAreas,
    Languages,
    Articles,
    BooksAndChapters,
    EventWorks,
    PressTexts,
    Software,
    TechnicalWorks,
    OtherTechnicalProduction,
    Supervisions,
    Committees,
    EventParticipations,
    ComplementaryTraining,
    OtherInformation,
}

impl SectionKey {
    /// All sections, in display order.
    pub const ALL: [SectionKey; 17] = [
        Self::Summary,
        Self::Education,
        Self::Appointments,
        Self::KnowledgeAreas,
        Self::Languages,
        Self::Articles,
        Self::BooksAndChapters,
        Self::EventWorks,
        Self::PressTexts,
        Self::Software,
        Self::TechnicalWorks,
        Self::OtherTechnicalProduction,
        Self::Supervisions,
        Self::Committees,
        Self::EventParticipations,
        Self::ComplementaryTraining,
        Self::OtherInformation,
    ];

    /// Persisted key, named after the source element.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Summary => "RESUMO-CV",
            Self::Education => "FORMACAO-ACADEMICA-TITULACAO",
            Self::Appointments => "ATUACOES-PROFISSIONAIS",
            Self::KnowledgeAreas => "AREAS-DE-ATUACAO",
            Self::Languages => "IDIOMAS",
            Self::Articles => "ARTIGOS-PUBLICADOS",
            Self::BooksAndChapters => "LIVROS-E-CAPITULOS",
            Self::EventWorks => "TRABALHOS-EM-EVENTOS",
            Self::PressTexts => "TEXTOS-EM-JORNAIS-OU-REVISTAS",
            Self::Software => "SOFTWARE",
            Self::TechnicalWorks => "TRABALHO-TECNICO",
            Self::OtherTechnicalProduction => "DEMAIS-TIPOS-DE-PRODUCAO-TECNICA",
            Self::Supervisions => "ORIENTACOES-CONCLUIDAS",
            Self::Committees => "PARTICIPACAO-EM-BANCA-TRABALHOS-CONCLUSAO",
            Self::EventParticipations => "PARTICIPACAO-EM-EVENTOS-CONGRESSOS",
            Self::ComplementaryTraining => "FORMACAO-COMPLEMENTAR",
            Self::OtherInformation => "OUTRAS-INFORMACOES-RELEVANTES",
        }
    }

    /// Human-readable pt-BR label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Summary => "Resumo",
            Self::Education => "Formação Acadêmica",
            Self::Appointments => "Atuações Profissionais",
            Self::KnowledgeAreas => "Áreas de Atuação",
            Self::Languages => "Idiomas",
            Self::Articles => "Artigos Publicados",
            Self::BooksAndChapters => "Livros e Capítulos",
            Self::EventWorks => "Trabalhos em Eventos",
            Self::PressTexts => "Textos em Jornais ou Revistas",
            Self::Software => "Software",
            Self::TechnicalWorks => "Trabalho Técnico",
            Self::OtherTechnicalProduction => "Outras Produções Técnicas",
            Self::Supervisions => "Orientações Concluídas",
            Self::Committees => "Participação em Bancas",
            Self::EventParticipations => "Participação em Eventos",
            Self::ComplementaryTraining => "Formação Complementar",
            Self::OtherInformation => "Outras Informações Relevantes",
        }
    }

    /// Look up a section by its persisted key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == key)
    }
}

impl std::fmt::Display for SectionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SectionKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A named group of records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub key: SectionKey,
    pub label: &'static str,
    pub items: Vec<Entry>,
}

impl Section {
    pub fn new(key: SectionKey, items: Vec<Entry>) -> Self {
        Self {
            key,
            label: key.label(),
            items,
        }
    }
}
