//! Word metadata to presentation style tokens.
//!
//! # Design
//! Three independent, total functions. Precedence lives in ordered rule
//! tables rather than in `if` chains: each rule is a list of needles
//! (any of which must be a substring of the normalized label) and the token
//! it yields. The first matching rule wins, which is why `"very common"`
//! precedes the bare `"common"`. Labels are free text, so a group such as
//! `"common yet advanced"` is classified purely by table order.

use crate::types::CefrLevel;

/// Color of the frequency/rank badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankStyle {
    Green,
    Teal,
    Blue,
    Indigo,
    Purple,
    Orange,
}

impl RankStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            RankStyle::Green => "green",
            RankStyle::Teal => "teal",
            RankStyle::Blue => "blue",
            RankStyle::Indigo => "indigo",
            RankStyle::Purple => "purple",
            RankStyle::Orange => "orange",
        }
    }

    /// Border, background and text classes for the badge.
    pub fn badge_classes(self) -> String {
        let c = self.as_str();
        format!("bg-{c}-100 text-{c}-700 border-{c}-200")
    }
}

/// Color of the level dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DotColor {
    Green,
    Yellow,
    Blue,
    Purple,
    Orange,
    Red,
}

impl DotColor {
    pub fn as_str(self) -> &'static str {
        match self {
            DotColor::Green => "green",
            DotColor::Yellow => "yellow",
            DotColor::Blue => "blue",
            DotColor::Purple => "purple",
            DotColor::Orange => "orange",
            DotColor::Red => "red",
        }
    }

    pub fn text_class(self) -> String {
        format!("text-{}-500", self.as_str())
    }
}

/// Matches when the normalized label contains any of `needles`.
#[derive(Debug, Clone, Copy)]
pub struct RankRule {
    pub needles: &'static [&'static str],
    pub style: RankStyle,
}

impl RankRule {
    pub const fn new(needles: &'static [&'static str], style: RankStyle) -> Self {
        Self { needles, style }
    }

    fn matches(&self, label: &str) -> bool {
        self.needles.iter().any(|needle| label.contains(needle))
    }
}

/// Rules for `type == "phrase"`. The `"less common"` rule is shadowed by
/// `"common"` and never fires.
pub const PHRASE_RULES: &[RankRule] = &[
    RankRule::new(&["very common"], RankStyle::Green),
    RankRule::new(&["common"], RankStyle::Blue),
    RankRule::new(&["less common"], RankStyle::Indigo),
];

/// Rules for single words.
pub const WORD_RULES: &[RankRule] = &[
    RankRule::new(&["core 500"], RankStyle::Green),
    RankRule::new(&["core 1000"], RankStyle::Teal),
    RankRule::new(&["core plus"], RankStyle::Blue),
    RankRule::new(&["active basic"], RankStyle::Indigo),
    RankRule::new(
        &["fluent", "active extended", "advanced"],
        RankStyle::Purple,
    ),
];

/// Used when no rule matches.
pub const DEFAULT_RANK_STYLE: RankStyle = RankStyle::Orange;

/// Badge color for a frequency group. A missing `kind` counts as `"word"`.
pub fn rank_style(frequency_group: Option<&str>, kind: Option<&str>) -> RankStyle {
    let group = frequency_group.unwrap_or_default().to_lowercase();
    let kind = match kind {
        Some(k) if !k.is_empty() => k.to_lowercase(),
        _ => "word".to_string(),
    };
    let rules = if kind == "phrase" { PHRASE_RULES } else { WORD_RULES };
    rules
        .iter()
        .find(|rule| rule.matches(&group))
        .map_or(DEFAULT_RANK_STYLE, |rule| rule.style)
}

/// Left-border class for a level label, e.g. `"lvl-b1"`.
pub fn level_border_class(level: Option<&str>) -> &'static str {
    match CefrLevel::resolve(level) {
        CefrLevel::A1 => "lvl-a1",
        CefrLevel::A2 => "lvl-a2",
        CefrLevel::B1 => "lvl-b1",
        CefrLevel::B2 => "lvl-b2",
        CefrLevel::C1 => "lvl-c1",
        CefrLevel::C2 => "lvl-c2",
    }
}

/// Dot color for a level label.
pub fn level_dot_style(level: Option<&str>) -> DotColor {
    match CefrLevel::resolve(level) {
        CefrLevel::A1 => DotColor::Green,
        CefrLevel::A2 => DotColor::Yellow,
        CefrLevel::B1 => DotColor::Blue,
        CefrLevel::B2 => DotColor::Purple,
        CefrLevel::C1 => DotColor::Orange,
        CefrLevel::C2 => DotColor::Red,
    }
}
