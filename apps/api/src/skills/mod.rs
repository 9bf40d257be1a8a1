// Skill vocabulary, normalized skill identity, and keyword extraction.

pub mod extractor;
pub mod key;
pub mod vocabulary;

pub use extractor::{MatchStrategy, SkillExtractor};
pub use key::{SkillKey, SkillSet};
pub use vocabulary::Vocabulary;
