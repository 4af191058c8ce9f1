//! Word DTOs exchanged with the vocabulary backend.
//!
//! # Design
//! The backend owns words; this crate only reads them for display and sends
//! mutations. Fields that the card logic tolerates being absent are
//! `Option` or `#[serde(default)]` so a partial record still deserializes.

use serde::{Deserialize, Serialize};

/// A word or phrase as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Word {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    pub word: String,
    #[serde(default)]
    pub translation: String,
    #[serde(default)]
    pub examples: Option<String>,
    #[serde(default)]
    pub synonyms: Option<String>,
    #[serde(default)]
    pub rank: Option<i64>,
    #[serde(default)]
    pub rank_range: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub frequency: Option<i64>,
    #[serde(default)]
    pub frequency_group: String,
    #[serde(default)]
    pub category: String,
    /// `"word"` or `"phrase"`; kept as text because the backend does not
    /// constrain it.
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    #[serde(default)]
    pub is_phrasal: bool,
    #[serde(default)]
    pub is_idiom: bool,
    #[serde(default)]
    pub is_learned: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

fn default_kind() -> String {
    "word".to_string()
}

/// Payload for adding a word; the backend enriches the rest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordCreate {
    pub word: String,
}

/// Payload for editing a word. Only the fields present in the JSON are
/// applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// CEFR proficiency tier, in increasing difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CefrLevel {
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

impl CefrLevel {
    /// Canonical order; also the order in which free text is matched.
    pub const ALL: [CefrLevel; 6] = [
        CefrLevel::A1,
        CefrLevel::A2,
        CefrLevel::B1,
        CefrLevel::B2,
        CefrLevel::C1,
        CefrLevel::C2,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CefrLevel::A1 => "A1",
            CefrLevel::A2 => "A2",
            CefrLevel::B1 => "B1",
            CefrLevel::B2 => "B2",
            CefrLevel::C1 => "C1",
            CefrLevel::C2 => "C2",
        }
    }

    /// Resolve a free-text level label such as `"b1 (intermediate)"`.
    ///
    /// The label is uppercased and the first code in `ALL` it contains wins.
    /// Missing, empty or unrecognized labels resolve to `A1`.
    pub fn resolve(label: Option<&str>) -> Self {
        let label = match label {
            Some(text) if !text.is_empty() => text.to_uppercase(),
            _ => return CefrLevel::A1,
        };
        Self::ALL
            .into_iter()
            .find(|level| label.contains(level.as_str()))
            .unwrap_or(CefrLevel::A1)
    }
}
