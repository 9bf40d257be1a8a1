//! JD Match Scorer — how well the user's skills cover a pasted job description.

use serde::{Deserialize, Serialize};

use crate::readiness::comparator::compare;
use crate::skills::SkillExtractor;

/// Coarse bucket for a 0 – 100 match score. Lower bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Low,
    Mid,
    High,
}

impl Tier {
    pub const HIGH_FLOOR: u32 = 70;
    pub const MID_FLOOR: u32 = 40;

    pub fn from_score(score: u32) -> Self {
        if score >= Self::HIGH_FLOOR {
            Tier::High
        } else if score >= Self::MID_FLOOR {
            Tier::Mid
        } else {
            Tier::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JdScore {
    /// Vocabulary skills found in the JD. Sent back by the client to commit
    /// them as a new company's required skills.
    pub extracted: Vec<String>,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub score: u32,
    pub tier: Tier,
}

impl JdScore {
    fn no_skills_found() -> Self {
        Self {
            extracted: vec![],
            matched: vec![],
            missing: vec![],
            score: 0,
            tier: Tier::Low,
        }
    }
}

/// Extracts skills from `text` and compares them with `user_skills`.
pub fn score_jd<P: AsRef<str>>(
    extractor: &SkillExtractor,
    text: Option<&str>,
    user_skills: &[P],
) -> JdScore {
    let extracted = extractor.extract(text);
    if extracted.is_empty() {
        return JdScore::no_skills_found();
    }

    let gap = compare(&extracted, user_skills);

    JdScore {
        extracted,
        matched: gap.matched,
        missing: gap.missing,
        score: gap.readiness_percent,
        tier: Tier::from_score(gap.readiness_percent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::{MatchStrategy, Vocabulary};

    fn python_django() -> SkillExtractor {
        SkillExtractor::new(
            Vocabulary::new(["Python", "Django"]),
            MatchStrategy::StrictSubstring,
        )
    }

    #[test]
    fn test_python_django_half_match_is_mid() {
        let score = score_jd(
            &python_django(),
            Some("We need a Python developer, Django experience a plus"),
            &["Python"],
        );
        assert_eq!(score.extracted, vec!["Python", "Django"]);
        assert_eq!(score.matched, vec!["Python"]);
        assert_eq!(score.missing, vec!["Django"]);
        assert_eq!(score.score, 50);
        assert_eq!(score.tier, Tier::Mid);
    }

    #[test]
    fn test_no_known_skills_is_low_zero() {
        let score = score_jd(
            &SkillExtractor::default(),
            Some("Friendly team, free snacks, hybrid office."),
            &["Python"],
        );
        assert_eq!(score, JdScore::no_skills_found());
        assert!(score.extracted.is_empty());
        assert_eq!(score.tier, Tier::Low);
    }

    #[test]
    fn test_missing_text_is_low_zero() {
        let score = score_jd(&SkillExtractor::default(), None, &["Python"]);
        assert_eq!(score.score, 0);
        assert_eq!(score.tier, Tier::Low);
    }

    #[test]
    fn test_full_match_is_high() {
        let score = score_jd(&python_django(), Some("python + django"), &["DJANGO", "python"]);
        assert_eq!(score.score, 100);
        assert_eq!(score.tier, Tier::High);
        assert!(score.missing.is_empty());
    }

    #[test]
    fn test_no_user_skills_is_low() {
        let score = score_jd(&python_django(), Some("python"), &[] as &[&str]);
        assert_eq!(score.extracted, vec!["Python"]);
        assert_eq!(score.missing, vec!["Python"]);
        assert_eq!(score.tier, Tier::Low);
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(Tier::from_score(100), Tier::High);
        assert_eq!(Tier::from_score(70), Tier::High);
        assert_eq!(Tier::from_score(69), Tier::Mid);
        assert_eq!(Tier::from_score(40), Tier::Mid);
        assert_eq!(Tier::from_score(39), Tier::Low);
        assert_eq!(Tier::from_score(0), Tier::Low);
    }

    #[test]
    fn test_tier_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Tier::Mid).unwrap(), r#""mid""#);
        let tier: Tier = serde_json::from_str(r#""high""#).unwrap();
        assert_eq!(tier, Tier::High);
    }
}
