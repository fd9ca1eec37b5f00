//! Match session — validates the inputs, extracts the job's keywords once and scores every
//! resume against them.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::matching::{extract_keywords, rank_results, KeywordSet, MatchResult, MatchScorer};
use crate::models::resume::Resume;

/// Everything one run produces: the job's keyword set and the resumes ranked against it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub keywords: KeywordSet,
    pub results: Vec<MatchResult>,
    pub scorer_backend: String,
}

/// Scores `resumes` against `job_description`, best match first.
///
/// Fails only on caller-side preconditions: a blank job description, or no resume with
/// any content. Blank resumes are skipped.
pub fn run_match(
    job_description: &str,
    resumes: &[Resume],
    scorer: &dyn MatchScorer,
) -> Result<MatchOutcome, AppError> {
    if job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "Please enter a job description".to_string(),
        ));
    }

    let valid: Vec<&Resume> = resumes.iter().filter(|r| r.has_content()).collect();
    if valid.is_empty() {
        return Err(AppError::Validation(
            "Please add at least one resume with content".to_string(),
        ));
    }
    if valid.len() < resumes.len() {
        info!(
            skipped = resumes.len() - valid.len(),
            "Skipping resumes without content"
        );
    }

    let keywords = extract_keywords(job_description);
    let total_keywords = keywords.len();
    info!(
        keywords = total_keywords,
        resumes = valid.len(),
        backend = scorer.backend(),
        "Scoring resumes"
    );

    let mut results: Vec<MatchResult> = valid
        .into_iter()
        .map(|resume| {
            let score = scorer.score(&keywords, &resume.content);
            debug!(
                title = %resume.title,
                score = score.score,
                percentage = score.percentage,
                matched = score.breakdown.total(),
                "Scored resume"
            );
            MatchResult::new(resume, score, total_keywords)
        })
        .collect();

    rank_results(&mut results);

    Ok(MatchOutcome {
        keywords,
        results,
        scorer_backend: scorer.backend().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::scorer::MatchScore;
    use crate::matching::KeywordMatchScorer;

    const JD: &str = r#"
        Senior Backend Engineer. We need strong Python and PostgreSQL skills, Docker and
        Kubernetes in production, REST API design, and a Bachelor degree in computer science.
        Experience mentoring junior engineers is a plus.
    "#;

    fn resumes() -> Vec<Resume> {
        vec![
            Resume::from_text("Frontend", "React and CSS specialist, design systems."),
            Resume::from_text(
                "Backend",
                "Senior engineer: Python, PostgreSQL, Docker, Kubernetes, REST API design. \
                 Bachelor degree in computer science. Mentoring junior engineers.",
            ),
            Resume::from_text("Partial", "Python developer with some Docker experience."),
        ]
    }

    #[test]
    fn test_results_ranked_best_first() {
        let outcome = run_match(JD, &resumes(), &KeywordMatchScorer).unwrap();
        let titles: Vec<&str> = outcome.results.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Backend", "Partial", "Frontend"]);
        assert!(outcome
            .results
            .windows(2)
            .all(|w| w[0].score.score >= w[1].score.score));
        assert_eq!(outcome.scorer_backend, "keyword");
    }

    #[test]
    fn test_total_keywords_is_keyword_set_size() {
        let outcome = run_match(JD, &resumes(), &KeywordMatchScorer).unwrap();
        for result in &outcome.results {
            assert_eq!(result.total_keywords, outcome.keywords.len());
        }
    }

    #[test]
    fn test_blank_job_description_is_rejected() {
        let err = run_match("   \n", &resumes(), &KeywordMatchScorer).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m == "Please enter a job description"));
    }

    #[test]
    fn test_no_resume_with_content_is_rejected() {
        let blank = vec![Resume::from_text("Empty", "  ")];
        let err = run_match(JD, &blank, &KeywordMatchScorer).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m.contains("at least one resume")));

        let err = run_match(JD, &[], &KeywordMatchScorer).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_blank_resumes_are_skipped() {
        let mut input = resumes();
        input.push(Resume::from_text("Blank", "\t"));
        let outcome = run_match(JD, &input, &KeywordMatchScorer).unwrap();
        assert_eq!(outcome.results.len(), 3);
        assert!(outcome.results.iter().all(|r| r.title != "Blank"));
    }

    struct FixedScorer;

    impl MatchScorer for FixedScorer {
        fn score(&self, _keywords: &KeywordSet, resume_text: &str) -> MatchScore {
            MatchScore {
                score: resume_text.len() as f64,
                percentage: 50,
                matched_keywords: vec![],
                breakdown: Default::default(),
            }
        }

        fn backend(&self) -> &'static str {
            "fixed"
        }
    }

    #[test]
    fn test_scorer_backend_is_pluggable() {
        let input = vec![
            Resume::from_text("short", "ab"),
            Resume::from_text("long", "abcdef"),
        ];
        let outcome = run_match(JD, &input, &FixedScorer).unwrap();
        assert_eq!(outcome.scorer_backend, "fixed");
        assert_eq!(outcome.results[0].title, "long");
        assert_eq!(outcome.results[0].tier, crate::matching::MatchTier::Moderate);
    }
}
