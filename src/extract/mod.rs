//! Category extraction over a parsed Lattes tree.
//!
//! Each extractor is a total function `(&Element) -> Vec<Record>`: a missing
//! ancestor yields an empty vec, a missing attribute an empty string. Author
//! and member lists keep source (citation) order. Multi-kind categories are
//! extracted per sub-kind, concatenated, then sorted newest first.
//!
//! [`Curriculum`] ties the extractors together into the fixed section list.

pub mod academic;
pub mod aggregate;
pub mod bibliographic;
pub mod complementary;
pub mod fallback;
pub mod ident;
pub mod model;
pub mod sort;
pub mod supervision;
pub mod technical;
pub mod text;

pub use aggregate::Curriculum;
pub use fallback::FallbackRule;
pub use model::{
    Appointment, Article, Bond, BookItem, Committee, ComplementaryTraining, Education, Entry,
    EventParticipation, EventWork, GeneralProfile, KnowledgeArea, Language, Note,
    OtherTechnicalProduction, PressText, Record, ResearchActivity, Section, SectionKey, Software,
    Supervision, TechnicalWork,
};
pub use sort::sort_by_year_desc;

use crate::document::Element;

/// Values of `attr` on every `child_tag` child of `el`, in source order.
pub(crate) fn names_of(el: &Element, child_tag: &str, attr: &str) -> Vec<String> {
    el.children_named(child_tag)
        .map(|child| child.attr(attr).to_string())
        .collect()
}
