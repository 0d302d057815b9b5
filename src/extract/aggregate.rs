//! The parsed curriculum and its fixed section list.

use std::path::Path;

use crate::document::{self, DocumentResult, Element};
use crate::visibility::{self, VisibilityConfig};

use super::fallback::FallbackRule;
use super::model::*;
use super::{academic, bibliographic, complementary, supervision, technical};

/// A loaded Lattes document.
///
/// Parsed once per request and never mutated; every accessor re-walks the
/// tree, so callers that need a category twice should keep the result.
#[derive(Debug, Clone)]
pub struct Curriculum {
    root: Element,
    fallback: FallbackRule,
}

impl Curriculum {
    /// Read, transcode and parse the document at `path`.
    pub fn load(path: &Path) -> DocumentResult<Self> {
        let root = document::load_document(path)?;
        tracing::info!(path = %path.display(), root = root.name(), "loaded curriculum");
        Ok(Self::from_root(root))
    }

    pub fn from_bytes(bytes: &[u8]) -> DocumentResult<Self> {
        document::parse_bytes(bytes).map(Self::from_root)
    }

    pub fn from_root(root: Element) -> Self {
        Self {
            root,
            fallback: FallbackRule::LATTES,
        }
    }

    /// Use a different vocabulary for the generic fallback extractor.
    pub fn with_fallback_rule(mut self, rule: FallbackRule) -> Self {
        self.fallback = rule;
        self
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn profile(&self) -> GeneralProfile {
        academic::extract_profile(&self.root)
    }

    pub fn education(&self) -> Vec<Education> {
        academic::extract_education(&self.root)
    }

    pub fn appointments(&self) -> Vec<Appointment> {
        academic::extract_appointments(&self.root)
    }

    pub fn knowledge_areas(&self) -> Vec<KnowledgeArea> {
        academic::extract_knowledge_areas(&self.root)
    }

    pub fn languages(&self) -> Vec<Language> {
        academic::extract_languages(&self.root)
    }

    pub fn articles(&self) -> Vec<Article> {
        bibliographic::extract_articles(&self.root)
    }

    pub fn books_and_chapters(&self) -> Vec<BookItem> {
        bibliographic::extract_books_and_chapters(&self.root)
    }

    pub fn event_works(&self) -> Vec<EventWork> {
        bibliographic::extract_event_works(&self.root)
    }

    pub fn press_texts(&self) -> Vec<PressText> {
        bibliographic::extract_press_texts(&self.root)
    }

    pub fn software(&self) -> Vec<Software> {
        technical::extract_software(&self.root)
    }

    pub fn technical_works(&self) -> Vec<TechnicalWork> {
        technical::extract_technical_works(&self.root)
    }

    pub fn other_technical_production(&self) -> Vec<OtherTechnicalProduction> {
        technical::extract_other_technical(&self.root, &self.fallback)
    }

    pub fn supervisions(&self) -> Vec<Supervision> {
        supervision::extract_supervisions(&self.root)
    }

    pub fn committees(&self) -> Vec<Committee> {
        complementary::extract_committees(&self.root)
    }

    pub fn event_participations(&self) -> Vec<EventParticipation> {
        complementary::extract_event_participations(&self.root)
    }

    pub fn complementary_training(&self) -> Vec<ComplementaryTraining> {
        complementary::extract_complementary_training(&self.root)
    }

    /// Records of one section, already sorted.
    pub fn section(&self, key: SectionKey) -> Section {
        fn entries<T: Into<Entry>>(records: Vec<T>) -> Vec<Entry> {
            records.into_iter().map(Into::into).collect()
        }

        let items = match key {
            SectionKey::Summary => entries(academic::extract_summary_note(&self.root)),
            SectionKey::Education => entries(self.education()),
            SectionKey::Appointments => entries(self.appointments()),
            SectionKey::KnowledgeAreas => entries(self.knowledge_areas()),
            SectionKey::Languages => entries(self.languages()),
            SectionKey::Articles => entries(self.articles()),
            SectionKey::BooksAndChapters => entries(self.books_and_chapters()),
            SectionKey::EventWorks => entries(self.event_works()),
            SectionKey::PressTexts => entries(self.press_texts()),
            SectionKey::Software => entries(self.software()),
            SectionKey::TechnicalWorks => entries(self.technical_works()),
            SectionKey::OtherTechnicalProduction => entries(self.other_technical_production()),
            SectionKey::Supervisions => entries(self.supervisions()),
            SectionKey::Committees => entries(self.committees()),
            SectionKey::EventParticipations => entries(self.event_participations()),
            SectionKey::ComplementaryTraining => entries(self.complementary_training()),
            SectionKey::OtherInformation => entries(academic::extract_other_info_note(&self.root)),
        };
        tracing::debug!(section = %key, count = items.len(), "extracted section");
        Section::new(key, items)
    }

    /// Every section in display order, including empty ones.
    pub fn sections(&self) -> Vec<Section> {
        SectionKey::ALL.into_iter().map(|key| self.section(key)).collect()
    }

    /// What the public page shows: hidden sections dropped, hidden items
    /// filtered out, and sections left with nothing omitted. A note with no
    /// text counts as nothing.
    pub fn public_view(&self, config: &VisibilityConfig) -> Vec<Section> {
        SectionKey::ALL
            .into_iter()
            .filter(|key| !config.is_section_hidden(*key))
            .filter_map(|key| {
                let section = self.section(key);
                let mut items = visibility::filter(&section.items, config);
                items.retain(|entry| !matches!(entry, Entry::Note(note) if note.text.is_empty()));
                (!items.is_empty()).then(|| Section::new(key, items))
            })
            .collect()
    }
}
