// Core algorithm exports
pub mod matcher;
pub mod skills;

pub use matcher::CandidateMatcher;
pub use skills::{match_skills, normalize_skills, title_case};
