//! Keyword Differ — case-insensitive token-set intersection/difference between
//! a resume and a job description.

use std::collections::HashSet;

/// Keyword gap analysis for one resume/job-description pair.
///
/// Both sets are drawn from the job description's tokens:
/// `matching ∪ missing == tokens(job_description)` and
/// `matching ∩ missing == ∅`. Iteration order is unspecified; callers sort
/// before display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordReport {
    pub matching: HashSet<String>,
    pub missing: HashSet<String>,
}

/// Whitespace tokenizer used for keyword diffing: lowercase, then
/// `split_whitespace`. Punctuation is intentionally NOT stripped, so
/// "skills," and "skills" are distinct tokens.
fn tokens(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(String::from)
        .collect()
}

/// Partitions the job description's tokens into those present in the resume
/// and those absent from it. Deterministic and total over string inputs.
pub fn diff(resume_text: &str, job_description: &str) -> KeywordReport {
    let job_tokens = tokens(job_description);
    let resume_tokens = tokens(resume_text);

    let matching = job_tokens
        .intersection(&resume_tokens)
        .cloned()
        .collect::<HashSet<_>>();
    let missing = job_tokens
        .difference(&resume_tokens)
        .cloned()
        .collect::<HashSet<_>>();

    KeywordReport { matching, missing }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "python developer with aws experience";
    const JOB: &str = "looking for python developer with aws and docker skills";

    fn set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_concrete_scenario() {
        let report = diff(RESUME, JOB);
        assert_eq!(
            report.matching,
            set(&["python", "developer", "with", "aws"])
        );
        assert_eq!(
            report.missing,
            set(&["looking", "for", "and", "docker", "skills"])
        );
    }

    #[test]
    fn test_partition_invariant() {
        for (resume, job) in [
            (RESUME, JOB),
            ("", JOB),
            (RESUME, ""),
            ("overlap only", "overlap only"),
            ("a b", "b c d"),
        ] {
            let report = diff(resume, job);
            let union: HashSet<String> = report
                .matching
                .union(&report.missing)
                .cloned()
                .collect();
            assert_eq!(union, tokens(job), "union must equal job tokens");
            assert!(
                report.matching.is_disjoint(&report.missing),
                "matching and missing must be disjoint"
            );
        }
    }

    #[test]
    fn test_identical_texts_have_no_missing() {
        let report = diff(JOB, JOB);
        assert!(report.missing.is_empty());
        assert_eq!(report.matching, tokens(JOB));
    }

    #[test]
    fn test_empty_job_description_yields_empty_sets() {
        let report = diff(RESUME, "");
        assert!(report.matching.is_empty());
        assert!(report.missing.is_empty());
    }

    #[test]
    fn test_empty_resume_misses_everything() {
        let report = diff("", JOB);
        assert!(report.matching.is_empty());
        assert_eq!(report.missing, tokens(JOB));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let report = diff("Senior RUST Engineer", "rust engineer wanted");
        assert_eq!(report.matching, set(&["rust", "engineer"]));
        assert_eq!(report.missing, set(&["wanted"]));
    }

    #[test]
    fn test_punctuation_is_not_stripped() {
        // "skills," and "skills" are distinct tokens under this tokenizer.
        let report = diff("communication skills", "strong skills, required");
        assert!(report.missing.contains("skills,"));
        assert!(!report.matching.contains("skills,"));
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(diff(RESUME, JOB), diff(RESUME, JOB));
    }
}
