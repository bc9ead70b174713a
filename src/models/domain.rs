use serde::{Deserialize, Serialize};

/// Skill overlap between a job posting and a candidate
///
/// `matched` and `missing` partition the deduplicated job skill set and are
/// sorted alphabetically (lowercase order), then title-cased for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillMatch {
    /// Percentage of required skills the candidate has, 0-100
    pub score: u8,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Statistics derived from a candidate's GitHub profile
///
/// Defaults to zeros/absent when the lookup fails; the analysis endpoint
/// never fails a request because of GitHub.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileStats {
    #[serde(rename = "publicRepositoryCount")]
    pub public_repository_count: u32,
    #[serde(rename = "accountAgeYears")]
    pub account_age_years: f64,
    #[serde(rename = "topLanguage")]
    pub top_language: Option<String>,
}

/// Combined result of one candidate analysis
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub skills: SkillMatch,
    pub stats: ProfileStats,
    /// True when the GitHub user lookup succeeded
    pub stats_available: bool,
}

/// Subset of the GitHub `/users/{username}` payload we care about
#[derive(Debug, Clone, Deserialize)]
pub struct GithubUser {
    #[serde(default)]
    pub public_repos: u32,
    pub created_at: String,
}

/// Subset of one entry in the GitHub `/users/{username}/repos` payload
#[derive(Debug, Clone, Deserialize)]
pub struct GithubRepo {
    /// Primary language as declared by GitHub; absent for empty repos
    #[serde(default)]
    pub language: Option<String>,
}
