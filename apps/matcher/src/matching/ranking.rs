use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::matching::scorer::MatchScore;
use crate::models::resume::Resume;

/// Display bucket for a result, by percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Strong,
    Moderate,
    Weak,
}

impl MatchTier {
    pub fn from_percentage(percentage: u32) -> Self {
        if percentage >= 70 {
            MatchTier::Strong
        } else if percentage >= 50 {
            MatchTier::Moderate
        } else {
            MatchTier::Weak
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchTier::Strong => "strong",
            MatchTier::Moderate => "moderate",
            MatchTier::Weak => "weak",
        }
    }
}

/// One resume's score against the job's keyword set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub resume_id: Uuid,
    pub title: String,
    pub file_name: Option<String>,
    /// Size of the keyword set the resume was scored against.
    pub total_keywords: usize,
    pub tier: MatchTier,
    #[serde(flatten)]
    pub score: MatchScore,
}

impl MatchResult {
    pub fn new(resume: &Resume, score: MatchScore, total_keywords: usize) -> Self {
        Self {
            resume_id: resume.id,
            title: resume.title.clone(),
            file_name: resume.file_name.clone(),
            total_keywords,
            tier: MatchTier::from_percentage(score.percentage),
            score,
        }
    }
}

/// Sorts results best first by the unrounded weighted score.
///
/// Percentage is a rounded display value; two different scores can share one, so it is
/// never used as the key. Equal scores keep their input order.
pub fn rank_results(results: &mut [MatchResult]) {
    results.sort_by(|a, b| b.score.score.total_cmp(&a.score.score));
}
