//! Report assembly — combines the match percentage, keyword diff, and optional
//! AI recommendation into the value returned to callers.

use serde::{Deserialize, Serialize};

use crate::analysis::keywords::KeywordReport;

/// Text used in place of a recommendation when the generator is disabled or
/// failed for this request.
pub const NO_RECOMMENDATIONS: &str = "No recommendations generated.";

/// Full analysis result for one resume/job-description pair.
///
/// Keyword lists are sorted ascending at assembly time so serialized output is
/// stable across calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub match_percentage: f64,
    pub matching_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub recommendation: Option<String>,
}

impl AnalysisReport {
    pub fn assemble(
        match_percentage: f64,
        keywords: KeywordReport,
        recommendation: Option<String>,
    ) -> Self {
        let mut matching_keywords: Vec<String> = keywords.matching.into_iter().collect();
        let mut missing_keywords: Vec<String> = keywords.missing.into_iter().collect();
        matching_keywords.sort();
        missing_keywords.sort();

        AnalysisReport {
            match_percentage,
            matching_keywords,
            missing_keywords,
            recommendation,
        }
    }

    /// Plain-text serialization used for the downloadable report.
    pub fn to_plain_text(&self) -> String {
        format!(
            "Match Percentage: {:.2}%\n\
             Matching Keywords: {}\n\
             Missing Keywords: {}\n\
             AI Recommendations: {}\n",
            self.match_percentage,
            self.matching_keywords.join(", "),
            self.missing_keywords.join(", "),
            self.recommendation.as_deref().unwrap_or(NO_RECOMMENDATIONS),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn keyword_report(matching: &[&str], missing: &[&str]) -> KeywordReport {
        KeywordReport {
            matching: matching.iter().map(|w| w.to_string()).collect(),
            missing: missing.iter().map(|w| w.to_string()).collect(),
        }
    }

    #[test]
    fn test_assemble_sorts_keywords() {
        let report = AnalysisReport::assemble(
            59.63,
            keyword_report(&["python", "aws", "developer"], &["docker", "and"]),
            None,
        );
        assert_eq!(report.matching_keywords, vec!["aws", "developer", "python"]);
        assert_eq!(report.missing_keywords, vec!["and", "docker"]);
    }

    #[test]
    fn test_plain_text_with_recommendation() {
        let report = AnalysisReport::assemble(
            75.0,
            keyword_report(&["rust"], &["tokio"]),
            Some("Add async experience.".to_string()),
        );
        let text = report.to_plain_text();
        assert_eq!(
            text,
            "Match Percentage: 75.00%\n\
             Matching Keywords: rust\n\
             Missing Keywords: tokio\n\
             AI Recommendations: Add async experience.\n"
        );
    }

    #[test]
    fn test_plain_text_without_recommendation() {
        let report = AnalysisReport::assemble(0.0, keyword_report(&[], &[]), None);
        let text = report.to_plain_text();
        assert!(text.contains("AI Recommendations: No recommendations generated."));
        assert!(text.contains("Match Percentage: 0.00%"));
    }

    #[test]
    fn test_serializes_recommendation_as_null_when_absent() {
        let report = AnalysisReport::assemble(10.0, keyword_report(&[], &["x"]), None);
        let value = serde_json::to_value(&report).unwrap();
        assert!(value["recommendation"].is_null());
        assert_eq!(value["match_percentage"], 10.0);
    }

    #[test]
    fn test_assemble_preserves_partition_sizes() {
        let matching: HashSet<String> =
            ["a", "b"].iter().map(|w| w.to_string()).collect();
        let missing: HashSet<String> = ["c"].iter().map(|w| w.to_string()).collect();
        let report = AnalysisReport::assemble(
            50.0,
            KeywordReport { matching, missing },
            None,
        );
        assert_eq!(report.matching_keywords.len(), 2);
        assert_eq!(report.missing_keywords.len(), 1);
    }
}
