//! Similarity Scorer — bag-of-words cosine similarity between a resume and a
//! job description, expressed as a 0–100 match percentage.

use std::collections::{BTreeSet, HashMap};

/// Occurrence counts of one document over a shared vocabulary.
///
/// Built per scoring call and discarded; both vectors in a call are laid out
/// over the identical vocabulary ordering.
#[derive(Debug, Clone, PartialEq)]
pub struct TermVector(Vec<f64>);

impl TermVector {
    fn build(tokens: &[String], vocabulary: &BTreeSet<&str>) -> Self {
        let mut counts: HashMap<&str, u64> = HashMap::new();
        for token in tokens {
            *counts.entry(token.as_str()).or_insert(0) += 1;
        }
        TermVector(
            vocabulary
                .iter()
                .map(|term| *counts.get(term).unwrap_or(&0) as f64)
                .collect(),
        )
    }

    fn dot(&self, other: &TermVector) -> f64 {
        self.0.iter().zip(&other.0).map(|(a, b)| a * b).sum()
    }

    fn magnitude(&self) -> f64 {
        self.0.iter().map(|c| c * c).sum::<f64>().sqrt()
    }
}

/// Tokenizer used for vectorization: lowercase, split on non-alphanumeric
/// characters, keep tokens of at least two characters. Both texts in a scoring
/// call MUST go through this same function.
fn vector_tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= 2)
        .map(String::from)
        .collect()
}

/// Computes the match percentage between a resume and a job description.
///
/// Term-frequency vectors over the union vocabulary of both texts, cosine
/// similarity, scaled to 0–100 and rounded to two decimal places. Zero-magnitude
/// vectors (blank text, or text whose tokens all collapse away) score 0.0
/// rather than dividing by zero. Pure and total over string inputs.
pub fn score(resume_text: &str, job_description: &str) -> f64 {
    let resume_tokens = vector_tokens(resume_text);
    let job_tokens = vector_tokens(job_description);

    let vocabulary: BTreeSet<&str> = resume_tokens
        .iter()
        .chain(job_tokens.iter())
        .map(String::as_str)
        .collect();

    let resume_vector = TermVector::build(&resume_tokens, &vocabulary);
    let job_vector = TermVector::build(&job_tokens, &vocabulary);

    let denominator = resume_vector.magnitude() * job_vector.magnitude();
    if denominator == 0.0 {
        return 0.0;
    }

    let cosine = resume_vector.dot(&job_vector) / denominator;
    round_two(cosine * 100.0)
}

fn round_two(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
