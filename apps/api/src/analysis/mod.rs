//! Analysis core — similarity scoring, keyword diffing, and report assembly
//! for one resume/job-description pair.

pub mod handlers;
pub mod keywords;
pub mod report;
pub mod similarity;

use tracing::warn;

use crate::analysis::report::AnalysisReport;
use crate::llm_client::prompts::recommendation_prompt;
use crate::llm_client::Recommender;

/// Runs one full analysis: score → keyword diff → optional recommendation →
/// assemble. Everything is request-local; there is no cross-request state.
///
/// The scoring and diffing steps are total over string inputs and cannot fail.
/// A recommendation failure (rate-limit exhaustion, API rejection) is
/// non-fatal: the report is still produced with `recommendation: None`.
pub async fn run_analysis(
    resume_text: &str,
    job_description: &str,
    recommender: Option<&dyn Recommender>,
) -> AnalysisReport {
    let match_percentage = similarity::score(resume_text, job_description);
    let keywords = keywords::diff(resume_text, job_description);

    let recommendation = match recommender {
        Some(recommender) => {
            let prompt = recommendation_prompt(resume_text, job_description);
            match recommender.generate(&prompt).await {
                Ok(text) => Some(text),
                Err(e) => {
                    warn!("Recommendation generation failed (non-fatal): {e}");
                    None
                }
            }
        }
        None => None,
    };

    AnalysisReport::assemble(match_percentage, keywords, recommendation)
}
