//! The hide-set itself.

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};

use crate::extract::{Record, SectionKey};

/// Sections and records the administrator has hidden from the public view.
///
/// Keys that no longer match anything in the document are kept as-is, so a
/// record that disappears and later returns stays hidden.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityConfig {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub hidden_sections: BTreeSet<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub hidden_items: BTreeSet<String>,
}

/// `null` reads as an empty set, like a missing key.
fn null_as_empty<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<BTreeSet<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl VisibilityConfig {
    pub fn from_hidden<S, I>(sections: S, items: I) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            hidden_sections: sections.into_iter().map(Into::into).collect(),
            hidden_items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_section_hidden(&self, key: SectionKey) -> bool {
        self.hidden_sections.contains(key.as_str())
    }

    pub fn is_item_hidden(&self, id: &str) -> bool {
        self.hidden_items.contains(id)
    }

    /// Returns `true` when the section was not already hidden.
    pub fn hide_section(&mut self, key: SectionKey) -> bool {
        self.hidden_sections.insert(key.as_str().to_string())
    }

    pub fn show_section(&mut self, key: SectionKey) -> bool {
        self.hidden_sections.remove(key.as_str())
    }

    pub fn hide_item(&mut self, id: impl Into<String>) -> bool {
        self.hidden_items.insert(id.into())
    }

    pub fn show_item(&mut self, id: &str) -> bool {
        self.hidden_items.remove(id)
    }

    pub fn is_empty(&self) -> bool {
        self.hidden_sections.is_empty() && self.hidden_items.is_empty()
    }
}

/// Records whose id is not hidden, in their original order.
pub fn filter<T: Record + Clone>(records: &[T], config: &VisibilityConfig) -> Vec<T> {
    records
        .iter()
        .filter(|r| !config.is_item_hidden(r.id()))
        .cloned()
        .collect()
}
