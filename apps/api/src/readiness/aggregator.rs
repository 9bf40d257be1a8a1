//! Readiness Aggregator — dashboard roll-ups across every tracked company.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::readiness::comparator::{compare_sets, GapResult};
use crate::skills::{SkillKey, SkillSet};

/// Anything that lists required skills. Implemented by the stored company row;
/// the aggregator only ever reads through this trait.
pub trait SkillRequirements {
    fn required_skills(&self) -> &[String];

    fn is_favorite(&self) -> bool {
        false
    }
}

/// How many companies ask for one skill, and whether the user already has it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillDemand {
    pub skill: String,
    pub companies: usize,
    pub possessed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub total_companies: usize,
    pub favorite_companies: usize,
    /// Distinct required skills across all companies.
    pub total_skills: usize,
    pub possessed_count: usize,
    pub missing_count: usize,
    pub readiness_percent: u32,
    /// One entry per distinct skill, in first-seen order.
    pub skill_demand: Vec<SkillDemand>,
}

impl AggregateStats {
    /// Skills sorted by demand, highest first. Ties keep first-seen order.
    pub fn most_demanded(&self, limit: usize) -> Vec<SkillDemand> {
        let mut ranked = self.skill_demand.clone();
        ranked.sort_by(|a, b| b.companies.cmp(&a.companies));
        ranked.truncate(limit);
        ranked
    }
}

/// A company paired with its own gap analysis.
#[derive(Debug, Clone, Serialize)]
pub struct RankedCompany<'a, C> {
    pub company: &'a C,
    pub gap: GapResult,
}

/// Unions every company's required skills (case-insensitive, first casing
/// wins) and measures the user's skills against that union.
pub fn aggregate_across_companies<C, P>(companies: &[C], user_skills: &[P]) -> AggregateStats
where
    C: SkillRequirements,
    P: AsRef<str>,
{
    let mut union = SkillSet::new();
    let mut demand: HashMap<SkillKey, usize> = HashMap::new();

    for company in companies {
        // Dedup within the company first so repeats count once.
        let own: SkillSet = company.required_skills().iter().collect();
        for skill in own.iter() {
            union.insert(skill);
            *demand.entry(SkillKey::new(skill)).or_default() += 1;
        }
    }

    let possessed: SkillSet = user_skills.iter().collect();
    let gap = compare_sets(&union, &possessed);

    let skill_demand = union
        .iter()
        .map(|skill| SkillDemand {
            skill: skill.to_string(),
            companies: demand.get(&SkillKey::new(skill)).copied().unwrap_or(0),
            possessed: possessed.contains(skill),
        })
        .collect();

    AggregateStats {
        total_companies: companies.len(),
        favorite_companies: companies.iter().filter(|c| c.is_favorite()).count(),
        total_skills: union.len(),
        possessed_count: gap.matched.len(),
        missing_count: gap.missing.len(),
        readiness_percent: gap.readiness_percent,
        skill_demand,
    }
}

/// Gap analysis per company, least ready first. The sort is stable, so equal
/// readiness keeps insertion order; companies with no required skills score 0.
pub fn rank_by_readiness<'a, C, P>(companies: &'a [C], user_skills: &[P]) -> Vec<RankedCompany<'a, C>>
where
    C: SkillRequirements,
    P: AsRef<str>,
{
    let possessed: SkillSet = user_skills.iter().collect();

    let mut ranked: Vec<RankedCompany<'a, C>> = companies
        .iter()
        .map(|company| {
            let required: SkillSet = company.required_skills().iter().collect();
            RankedCompany {
                company,
                gap: compare_sets(&required, &possessed),
            }
        })
        .collect();

    ranked.sort_by_key(|r| r.gap.readiness_percent);
    ranked
}
