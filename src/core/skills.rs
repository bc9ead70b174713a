use crate::models::SkillMatch;
use std::collections::BTreeSet;

/// Normalize a skill list into a lowercase, deduplicated set
///
/// Casing variations and duplicates collapse ("Python" and "python" are the
/// same skill). The sorted set gives matched/missing lists a stable
/// alphabetical order.
pub fn normalize_skills(skills: &[String]) -> BTreeSet<String> {
    skills.iter().map(|s| s.to_lowercase()).collect()
}

/// Title-case a lowercase skill for display
///
/// An alphabetic character is uppercased when the previous character is not
/// alphabetic: "sql" -> "Sql", "node.js" -> "Node.Js". Purely cosmetic,
/// applied after the set math.
pub fn title_case(skill: &str) -> String {
    let mut out = String::with_capacity(skill.len());
    let mut prev_alpha = false;
    for c in skill.chars() {
        if c.is_alphabetic() && !prev_alpha {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev_alpha = c.is_alphabetic();
    }
    out
}

/// Compute the skill overlap between a job's requirements and a candidate
///
/// Scoring formula:
/// score = round(100 * |job ∩ candidate| / |job|), comparing skills
/// case-insensitively; 0 when the job lists no skills. Rounding is
/// half-away-from-zero (`f64::round`), i.e. round-half-up here.
pub fn match_skills(job_skills: &[String], candidate_skills: &[String]) -> SkillMatch {
    let job_set = normalize_skills(job_skills);
    let cand_set = normalize_skills(candidate_skills);

    let matched: Vec<String> = job_set
        .intersection(&cand_set)
        .map(|s| title_case(s))
        .collect();
    let missing: Vec<String> = job_set
        .difference(&cand_set)
        .map(|s| title_case(s))
        .collect();

    let score = if job_set.is_empty() {
        0
    } else {
        (matched.len() as f64 / job_set.len() as f64 * 100.0).round() as u8
    };

    SkillMatch {
        score,
        matched,
        missing,
    }
}
