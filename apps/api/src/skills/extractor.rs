//! Skill Extractor — finds vocabulary entries mentioned in free text.
//!
//! Matching is keyword containment only. There is no tokenizer, stemming or
//! synonym table: "Postgres" does not match "PostgreSQL".

use serde::{Deserialize, Serialize};

use crate::skills::vocabulary::Vocabulary;

/// Rule deciding whether a vocabulary entry appears in a text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// Lower-cased substring containment. Nested matches are never
    /// suppressed: "React Native" also yields "React", and "Django" or
    /// "MongoDB" also yield "Go".
    #[default]
    StrictSubstring,
    /// Containment where the match is not flanked by alphanumeric characters.
    WordBoundary,
}

impl MatchStrategy {
    /// Parses the `SKILL_MATCH_STRATEGY` setting.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "substring" | "strict_substring" => Some(Self::StrictSubstring),
            "word_boundary" | "word" => Some(Self::WordBoundary),
            _ => None,
        }
    }

    fn matches(self, haystack: &str, needle: &str) -> bool {
        match self {
            Self::StrictSubstring => haystack.contains(needle),
            Self::WordBoundary => contains_word(haystack, needle),
        }
    }
}

/// Scans text for the entries of a vocabulary.
#[derive(Debug, Clone)]
pub struct SkillExtractor {
    vocabulary: Vocabulary,
    lowered: Vec<String>,
    strategy: MatchStrategy,
}

impl SkillExtractor {
    pub fn new(vocabulary: Vocabulary, strategy: MatchStrategy) -> Self {
        let lowered = vocabulary
            .entries()
            .iter()
            .map(|entry| entry.to_lowercase())
            .collect();
        Self {
            vocabulary,
            lowered,
            strategy,
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    /// Returns the vocabulary entries found in `text`, in vocabulary order and
    /// canonical casing. `None` and empty text yield an empty list.
    pub fn extract(&self, text: Option<&str>) -> Vec<String> {
        let text = match text {
            Some(t) if !t.is_empty() => t.to_lowercase(),
            _ => return Vec::new(),
        };

        self.vocabulary
            .entries()
            .iter()
            .zip(&self.lowered)
            .filter(|(_, needle)| self.strategy.matches(&text, needle))
            .map(|(entry, _)| entry.clone())
            .collect()
    }

    pub fn extract_str(&self, text: &str) -> Vec<String> {
        self.extract(Some(text))
    }
}

impl Default for SkillExtractor {
    fn default() -> Self {
        Self::new(Vocabulary::default(), MatchStrategy::default())
    }
}

fn contains_word(haystack: &str, needle: &str) -> bool {
    haystack.match_indices(needle).any(|(start, matched)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + matched.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor(entries: &[&str]) -> SkillExtractor {
        SkillExtractor::new(
            Vocabulary::new(entries.iter().copied()),
            MatchStrategy::StrictSubstring,
        )
    }

    #[test]
    fn test_empty_and_missing_text_yield_nothing() {
        let ex = SkillExtractor::default();
        assert!(ex.extract(None).is_empty());
        assert!(ex.extract(Some("")).is_empty());
        assert!(ex.extract_str("").is_empty());
    }

    #[test]
    fn test_extracts_in_vocabulary_order_with_canonical_casing() {
        let ex = extractor(&["Python", "Django"]);
        let found = ex.extract_str("DJANGO shop looking for a python developer");
        assert_eq!(found, vec!["Python", "Django"]);
    }

    #[test]
    fn test_each_entry_reported_once() {
        let ex = extractor(&["Rust"]);
        assert_eq!(ex.extract_str("Rust, rust and more RUST"), vec!["Rust"]);
    }

    #[test]
    fn test_no_vocabulary_mention_yields_nothing() {
        let ex = SkillExtractor::default();
        assert!(ex.extract_str("We value kindness and punctuality.").is_empty());
    }

    #[test]
    fn test_longer_entry_also_reports_shorter_one() {
        let ex = SkillExtractor::default();
        let found = ex.extract_str("Mobile engineer with React Native experience");
        assert!(found.contains(&"React".to_string()));
        assert!(found.contains(&"React Native".to_string()));

        let found = ex.extract_str("Strong JavaScript fundamentals");
        assert!(found.contains(&"JavaScript".to_string()));
        assert!(found.contains(&"Java".to_string()));
    }

    #[test]
    fn test_every_nested_pair_in_default_vocabulary_is_reported() {
        let ex = SkillExtractor::default();
        let entries = ex.vocabulary().entries();
        for outer in entries {
            let found = ex.extract_str(outer);
            for inner in entries {
                if outer.to_lowercase().contains(&inner.to_lowercase()) {
                    assert!(
                        found.contains(inner),
                        "{outer:?} should also report {inner:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_substring_matches_inside_unrelated_words() {
        // Pinned behavior: raw containment, no word boundaries.
        let ex = SkillExtractor::default();
        assert!(ex.extract_str("Django").contains(&"Go".to_string()));
        assert!(ex.extract_str("MongoDB").contains(&"Go".to_string()));
        assert!(ex.extract_str("Algorithms").contains(&"Go".to_string()));
    }

    #[test]
    fn test_literal_punctuation_is_required() {
        let ex = SkillExtractor::default();
        assert!(!ex.extract_str("node backend").contains(&"Node.js".to_string()));
        assert!(ex.extract_str("node.js backend").contains(&"Node.js".to_string()));
    }

    #[test]
    fn test_word_boundary_strategy_skips_embedded_matches() {
        let ex = SkillExtractor::new(Vocabulary::new(["Go", "Django"]), MatchStrategy::WordBoundary);
        assert_eq!(ex.extract_str("Django and MongoDB"), vec!["Django"]);
        assert_eq!(ex.extract_str("Go, Django"), vec!["Go", "Django"]);
    }

    #[test]
    fn test_word_boundary_handles_symbol_entries() {
        let ex = SkillExtractor::new(
            Vocabulary::new(["C++", ".NET", "ASP.NET"]),
            MatchStrategy::WordBoundary,
        );
        assert_eq!(ex.extract_str("c++ and asp.net"), vec!["C++", "ASP.NET"]);
        assert_eq!(ex.extract_str("plain .net shop"), vec![".NET"]);
    }

    #[test]
    fn test_strategy_parse() {
        assert_eq!(MatchStrategy::parse("substring"), Some(MatchStrategy::StrictSubstring));
        assert_eq!(MatchStrategy::parse(" Word_Boundary "), Some(MatchStrategy::WordBoundary));
        assert_eq!(MatchStrategy::parse("fuzzy"), None);
    }

    #[test]
    fn test_default_strategy_is_strict_substring() {
        assert_eq!(SkillExtractor::default().strategy(), MatchStrategy::StrictSubstring);
    }
}
