//! Match scoring — pluggable, trait-based scorer that measures one resume against an
//! extracted `KeywordSet`.
//!
//! Default: `KeywordMatchScorer` (case-insensitive substring containment, weighted per
//! category). Callers hold a `&dyn MatchScorer` so a boundary-aware or semantic backend
//! can be dropped in without touching the session or report code.

use serde::{Deserialize, Serialize};

use crate::matching::extractor::{KeywordCategory, KeywordSet};

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// Matched keyword counts per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakdown {
    pub skills: u32,
    pub experience: u32,
    pub education: u32,
    pub general: u32,
}

impl Breakdown {
    pub fn get(&self, category: KeywordCategory) -> u32 {
        match category {
            KeywordCategory::Skills => self.skills,
            KeywordCategory::Experience => self.experience,
            KeywordCategory::Education => self.education,
            KeywordCategory::General => self.general,
        }
    }

    fn increment(&mut self, category: KeywordCategory) {
        match category {
            KeywordCategory::Skills => self.skills += 1,
            KeywordCategory::Experience => self.experience += 1,
            KeywordCategory::Education => self.education += 1,
            KeywordCategory::General => self.general += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.skills + self.experience + self.education + self.general
    }

    /// skills*3 + experience*2 + education*1.5 + general*1
    pub fn weighted_score(&self) -> f64 {
        KeywordCategory::ALL
            .iter()
            .map(|c| self.get(*c) as f64 * c.weight())
            .sum()
    }
}

/// Score of one resume against one keyword set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    /// Weighted score, unrounded. This is the ranking key.
    pub score: f64,
    /// `score` as a share of the best possible score, rounded half away from zero.
    pub percentage: u32,
    pub matched_keywords: Vec<String>,
    pub breakdown: Breakdown,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap scoring backends without touching the session or report code.
pub trait MatchScorer {
    fn score(&self, keywords: &KeywordSet, resume_text: &str) -> MatchScore;

    /// Short backend label, logged with each run.
    fn backend(&self) -> &'static str;
}

/// Case-insensitive substring scorer. Deterministic, no state.
///
/// Algorithm:
/// 1. Lowercase the resume once.
/// 2. For every keyword, category by category: substring hit → matched, counter + 1.
///    No word boundaries; "java" also hits inside "javascript".
/// 3. score = Σ(count × category weight); max = Σ(keywords × category weight).
/// 4. percentage = round(score / max × 100), or 0 when max is 0.
pub struct KeywordMatchScorer;

impl MatchScorer for KeywordMatchScorer {
    fn score(&self, keywords: &KeywordSet, resume_text: &str) -> MatchScore {
        score_resume(keywords, resume_text)
    }

    fn backend(&self) -> &'static str {
        "keyword"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core scoring algorithm
// ────────────────────────────────────────────────────────────────────────────

pub fn score_resume(keywords: &KeywordSet, resume_text: &str) -> MatchScore {
    let resume_lower = resume_text.to_lowercase();

    let mut matched_keywords: Vec<String> = Vec::new();
    let mut breakdown = Breakdown::default();

    for (category, keyword) in keywords.iter() {
        if resume_lower.contains(keyword) {
            matched_keywords.push(keyword.to_string());
            breakdown.increment(category);
        }
    }

    let score = breakdown.weighted_score();
    let max_score = keywords.max_score();
    let percentage = if max_score > 0.0 {
        ((score / max_score) * 100.0).round() as u32
    } else {
        0
    };

    MatchScore {
        score,
        percentage,
        matched_keywords: dedup_preserving_order(matched_keywords),
        breakdown,
    }
}

/// Removes repeated keywords, keeping the first occurrence.
fn dedup_preserving_order(keywords: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    keywords
        .into_iter()
        .filter(|k| seen.insert(k.clone()))
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
