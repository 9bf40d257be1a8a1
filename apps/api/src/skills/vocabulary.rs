//! Skill Vocabulary — the fixed dictionary the extractor scans job descriptions against.

use crate::skills::key::SkillSet;

/// Built-in canonical skill names, in extraction order.
///
/// Short entries ("Go", "Java", "React", "Spring") are kept even though they
/// occur inside longer entries and ordinary words; see `MatchStrategy`.
pub const DEFAULT_SKILLS: &[&str] = &[
    // Languages
    "JavaScript",
    "TypeScript",
    "Python",
    "Java",
    "C++",
    "C#",
    "Go",
    "Rust",
    "Ruby",
    "PHP",
    "Swift",
    "Kotlin",
    "Scala",
    "Dart",
    "Elixir",
    "Haskell",
    "Perl",
    "Lua",
    "MATLAB",
    "Objective-C",
    "SQL",
    "Bash",
    "PowerShell",
    "HTML",
    "CSS",
    "Sass",
    "GraphQL",
    // Frontend & mobile
    "React",
    "React Native",
    "Angular",
    "Vue",
    "Svelte",
    "Next.js",
    "Nuxt",
    "Redux",
    "jQuery",
    "Tailwind",
    "Bootstrap",
    "Webpack",
    "Vite",
    "Flutter",
    "Android",
    "iOS",
    // Backend
    "Node.js",
    "Express",
    "NestJS",
    "Django",
    "Flask",
    "FastAPI",
    "Spring",
    "Spring Boot",
    "Ruby on Rails",
    "Laravel",
    ".NET",
    "ASP.NET",
    "gRPC",
    "REST",
    "Microservices",
    "WebSockets",
    // Data stores & pipelines
    "PostgreSQL",
    "MySQL",
    "SQLite",
    "MongoDB",
    "Redis",
    "Elasticsearch",
    "Cassandra",
    "DynamoDB",
    "Firebase",
    "Kafka",
    "RabbitMQ",
    "Spark",
    "Hadoop",
    "Airflow",
    "Snowflake",
    "BigQuery",
    "Pandas",
    "NumPy",
    "Tableau",
    "Power BI",
    "Excel",
    // ML
    "Machine Learning",
    "Deep Learning",
    "TensorFlow",
    "PyTorch",
    "scikit-learn",
    "NLP",
    "Computer Vision",
    "LLM",
    "Data Analysis",
    "Statistics",
    // Cloud & ops
    "AWS",
    "Azure",
    "GCP",
    "Docker",
    "Kubernetes",
    "Terraform",
    "Ansible",
    "Jenkins",
    "GitHub Actions",
    "CI/CD",
    "Linux",
    "Nginx",
    "Prometheus",
    "Grafana",
    "Git",
    // Testing
    "Jest",
    "Cypress",
    "Selenium",
    "Playwright",
    "JUnit",
    "Pytest",
    // Practices & fundamentals
    "System Design",
    "Data Structures",
    "Algorithms",
    "OOP",
    "Unit Testing",
    "Security",
    "OAuth",
    "Blockchain",
    "Solidity",
    "Unity",
    "Agile",
    "Scrum",
    "Jira",
    "Figma",
    "Communication",
    "Leadership",
    "Problem Solving",
];

/// An ordered list of canonical skill names, distinct under case-insensitive comparison.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    entries: Vec<String>,
}

impl Vocabulary {
    /// Builds a vocabulary from arbitrary names. Blank names and
    /// case-insensitive repeats are dropped; the first casing wins.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = SkillSet::new();
        for name in entries {
            let name = name.as_ref();
            if !name.trim().is_empty() {
                set.insert(name);
            }
        }
        Self {
            entries: set.into_vec(),
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_SKILLS.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_entries_are_case_insensitively_distinct() {
        let lowered: HashSet<String> = DEFAULT_SKILLS.iter().map(|s| s.to_lowercase()).collect();
        assert_eq!(lowered.len(), DEFAULT_SKILLS.len());
    }

    #[test]
    fn test_default_vocabulary_keeps_every_entry_in_order() {
        let vocab = Vocabulary::default();
        assert!(vocab.len() >= 100, "only {} entries", vocab.len());
        assert_eq!(vocab.len(), DEFAULT_SKILLS.len());
        assert_eq!(vocab.entries()[0], "JavaScript");
        assert_eq!(vocab.entries().last().map(String::as_str), Some("Problem Solving"));
    }

    #[test]
    fn test_custom_vocabulary_drops_blanks_and_repeats() {
        let vocab = Vocabulary::new(["Python", "", "python", "  ", "Django", "PYTHON"]);
        assert_eq!(vocab.entries(), &["Python".to_string(), "Django".to_string()]);
    }

    #[test]
    fn test_empty_vocabulary() {
        let vocab = Vocabulary::new(Vec::<String>::new());
        assert!(vocab.is_empty());
    }
}
