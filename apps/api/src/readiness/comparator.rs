//! Skill Set Comparator — required vs possessed skills.

use serde::{Deserialize, Serialize};

use crate::skills::SkillSet;

/// Matched / missing split of a required skill list, plus readiness.
///
/// `matched` and `missing` partition the deduplicated required list and keep
/// its order and first-seen casing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapResult {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub readiness_percent: u32, // 0 – 100
}

/// `round(100 * matched / total)` with halves rounded up; 0 when `total` is 0.
pub fn readiness_percent(matched: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((200 * matched + total) / (2 * total)) as u32
}

/// Compares a required skill list against the skills a user has, ignoring case.
pub fn compare<R, P>(required: &[R], possessed: &[P]) -> GapResult
where
    R: AsRef<str>,
    P: AsRef<str>,
{
    let required: SkillSet = required.iter().collect();
    let possessed: SkillSet = possessed.iter().collect();
    compare_sets(&required, &possessed)
}

/// Same as [`compare`] for callers that already hold normalized sets.
pub fn compare_sets(required: &SkillSet, possessed: &SkillSet) -> GapResult {
    let (matched, missing): (Vec<String>, Vec<String>) = required
        .iter()
        .map(str::to_string)
        .partition(|skill| possessed.contains(skill));

    let readiness_percent = readiness_percent(matched.len(), required.len());

    GapResult {
        matched,
        missing,
        readiness_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_case_insensitive_match_keeps_required_casing() {
        let gap = compare(&["Python"], &["python"]);
        assert_eq!(gap.matched, vec!["Python"]);
        assert!(gap.missing.is_empty());
        assert_eq!(gap.readiness_percent, 100);
    }

    #[test]
    fn test_required_against_itself_is_fully_ready() {
        let required = strings(&["Rust", "SQL", "Docker"]);
        let gap = compare(&required, &required);
        assert!(gap.missing.is_empty());
        assert_eq!(gap.readiness_percent, 100);
    }

    #[test]
    fn test_nothing_possessed_means_everything_missing() {
        let gap = compare(&["Rust", "SQL"], &[] as &[&str]);
        assert!(gap.matched.is_empty());
        assert_eq!(gap.missing, vec!["Rust", "SQL"]);
        assert_eq!(gap.readiness_percent, 0);
    }

    #[test]
    fn test_empty_required_is_zero_not_nan() {
        let gap = compare(&[] as &[&str], &["Rust"]);
        assert_eq!(gap, GapResult::default());
        assert_eq!(gap.readiness_percent, 0);
    }

    #[test]
    fn test_required_is_deduplicated_first_seen_wins() {
        let gap = compare(&["sql", "Go", "SQL", "go", "Kafka"], &["GO"]);
        assert_eq!(gap.matched, vec!["Go"]);
        assert_eq!(gap.missing, vec!["sql", "Kafka"]);
        assert_eq!(gap.readiness_percent, 33);
    }

    #[test]
    fn test_partition_covers_required_without_overlap() {
        let required = strings(&["A", "b", "C", "a", "D"]);
        let gap = compare(&required, &["B", "d", "x"]);
        let mut all: Vec<String> = gap.matched.iter().chain(&gap.missing).cloned().collect();
        all.sort();
        assert_eq!(all, strings(&["A", "C", "D", "b"]));
        assert!(gap.matched.iter().all(|m| !gap.missing.contains(m)));
    }

    #[test]
    fn test_free_text_required_skills_compare_literally() {
        let gap = compare(&["Node"], &["Node.js"]);
        assert_eq!(gap.missing, vec!["Node"]);
    }

    #[test]
    fn test_compare_is_repeatable() {
        let required = strings(&["Rust", "Go", "SQL"]);
        let possessed = strings(&["sql"]);
        assert_eq!(compare(&required, &possessed), compare(&required, &possessed));
    }

    #[test]
    fn test_readiness_rounding() {
        assert_eq!(readiness_percent(0, 0), 0);
        assert_eq!(readiness_percent(1, 2), 50);
        assert_eq!(readiness_percent(1, 3), 33);
        assert_eq!(readiness_percent(2, 3), 67);
        assert_eq!(readiness_percent(1, 8), 13); // 12.5 rounds up
        assert_eq!(readiness_percent(7, 7), 100);
    }
}
