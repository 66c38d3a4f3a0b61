// Prompt construction for the recommendation call. The analysis core never
// touches prompt text; only the pipeline boundary builds and forwards it.

const RECOMMENDATION_PROMPT_TEMPLATE: &str = "\
Analyze the following resume for improvements based on the job description:
Resume:
{resume_text}
Job Description:
{job_description}
Provide recommendations to improve alignment with the job role.";

/// Builds the recommendation prompt, embedding both input texts verbatim.
pub fn recommendation_prompt(resume_text: &str, job_description: &str) -> String {
    RECOMMENDATION_PROMPT_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{job_description}", job_description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_both_texts_verbatim() {
        let prompt = recommendation_prompt("rust developer resume", "senior rust role");
        assert!(prompt.contains("rust developer resume"));
        assert!(prompt.contains("senior rust role"));
    }

    #[test]
    fn test_prompt_orders_resume_before_job_description() {
        let prompt = recommendation_prompt("RESUME_BODY", "JD_BODY");
        let resume_pos = prompt.find("RESUME_BODY").unwrap();
        let jd_pos = prompt.find("JD_BODY").unwrap();
        assert!(resume_pos < jd_pos);
    }

    #[test]
    fn test_prompt_keeps_instruction_footer() {
        let prompt = recommendation_prompt("", "");
        assert!(prompt.ends_with("Provide recommendations to improve alignment with the job role."));
    }
}
