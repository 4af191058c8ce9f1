//! Display-ready view of a word card.
//!
//! Everything a renderer needs, with no markup: style tokens from the
//! classifier, labels, and the newline-separated fields split into lists.

use crate::style::{self, DotColor, RankStyle};
use crate::types::Word;

/// Values the backend stores when enrichment found no synonyms.
const NO_SYNONYMS_SENTINELS: [&str; 2] = ["synonyms not found", "not found"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCard {
    pub id: i64,
    pub word: String,
    pub translation: String,
    pub rank_badge: RankStyle,
    pub badge_label: String,
    pub border_class: &'static str,
    pub dot: DotColor,
    pub level_label: String,
    pub synonyms: Vec<String>,
    pub examples: Vec<String>,
    /// Learned words are shown faded.
    pub dimmed: bool,
}

impl WordCard {
    pub fn from_word(word: &Word) -> Self {
        let level = word.level.as_deref();
        let group = word.frequency_group.as_str();
        Self {
            id: word.id,
            word: word.word.clone(),
            translation: word.translation.clone(),
            rank_badge: style::rank_style(Some(group), Some(word.kind.as_str())),
            badge_label: badge_label(group, word.rank),
            border_class: style::level_border_class(level),
            dot: style::level_dot_style(level),
            level_label: level.filter(|l| !l.is_empty()).unwrap_or("A1").to_string(),
            synonyms: synonyms(word.synonyms.as_deref()),
            examples: split_lines(word.examples.as_deref().unwrap_or_default()),
            dimmed: word.is_learned,
        }
    }
}

fn badge_label(group: &str, rank: Option<i64>) -> String {
    match rank {
        Some(rank) if rank != 0 => format!("{group} #{rank}"),
        _ => group.to_string(),
    }
}

fn synonyms(raw: Option<&str>) -> Vec<String> {
    match raw {
        Some(text) if !is_no_synonyms(text) => split_lines(text),
        _ => Vec::new(),
    }
}

fn is_no_synonyms(text: &str) -> bool {
    let text = text.trim().to_lowercase();
    NO_SYNONYMS_SENTINELS.contains(&text.as_str())
}

fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
