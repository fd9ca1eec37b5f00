//! Keyword extractor — turns a raw job description into a categorized, frequency-ranked
//! keyword inventory.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::matching::lexicon::{is_education, is_experience, is_skill, is_stop_word, is_word_char};

/// Tokens this short carry no signal ("go", "ai", "ui").
const MIN_TOKEN_LEN: usize = 3;

/// Non-listed terms need to repeat or be longer than this to count as general keywords.
const GENERAL_MIN_LEN: usize = 5;

/// The four keyword buckets, in classification precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordCategory {
    Skills,
    Experience,
    Education,
    General,
}

impl KeywordCategory {
    pub const ALL: [KeywordCategory; 4] = [
        KeywordCategory::Skills,
        KeywordCategory::Experience,
        KeywordCategory::Education,
        KeywordCategory::General,
    ];

    /// Score contributed by one matched keyword of this category.
    pub fn weight(self) -> f64 {
        match self {
            KeywordCategory::Skills => 3.0,
            KeywordCategory::Experience => 2.0,
            KeywordCategory::Education => 1.5,
            KeywordCategory::General => 1.0,
        }
    }

    /// Maximum number of keywords kept per extraction.
    pub fn cap(self) -> usize {
        match self {
            KeywordCategory::Skills => 20,
            KeywordCategory::Experience => 10,
            KeywordCategory::Education => 10,
            KeywordCategory::General => 15,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            KeywordCategory::Skills => "skills",
            KeywordCategory::Experience => "experience",
            KeywordCategory::Education => "education",
            KeywordCategory::General => "general",
        }
    }
}

/// Outcome of classifying one candidate term. Exactly one variant applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Categorized(KeywordCategory),
    Discarded,
}

/// Keywords extracted from one job description, each list ordered by descending frequency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSet {
    pub skills: Vec<String>,
    pub experience: Vec<String>,
    pub education: Vec<String>,
    pub general: Vec<String>,
}

impl KeywordSet {
    pub fn get(&self, category: KeywordCategory) -> &[String] {
        match category {
            KeywordCategory::Skills => &self.skills,
            KeywordCategory::Experience => &self.experience,
            KeywordCategory::Education => &self.education,
            KeywordCategory::General => &self.general,
        }
    }

    fn get_mut(&mut self, category: KeywordCategory) -> &mut Vec<String> {
        match category {
            KeywordCategory::Skills => &mut self.skills,
            KeywordCategory::Experience => &mut self.experience,
            KeywordCategory::Education => &mut self.education,
            KeywordCategory::General => &mut self.general,
        }
    }

    /// Total number of keywords across all categories.
    pub fn len(&self) -> usize {
        KeywordCategory::ALL.iter().map(|c| self.get(*c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Best possible weighted score: every keyword of every category matched.
    pub fn max_score(&self) -> f64 {
        KeywordCategory::ALL
            .iter()
            .map(|c| self.get(*c).len() as f64 * c.weight())
            .sum()
    }

    /// Iterates `(category, keyword)` pairs in category precedence order.
    pub fn iter(&self) -> impl Iterator<Item = (KeywordCategory, &str)> + '_ {
        KeywordCategory::ALL
            .into_iter()
            .flat_map(move |c| self.get(c).iter().map(move |k| (c, k.as_str())))
    }
}

/// Extracts a categorized keyword inventory from `text`.
///
/// Algorithm:
/// 1. Lowercase, turn every non-word character into a separator, split into tokens.
/// 2. Drop tokens shorter than 3 characters and stop words.
/// 3. Candidates = tokens, then every 2-gram and 3-gram of the filtered token stream.
/// 4. Count candidate frequencies; rank descending, ties in first-seen order.
/// 5. Classify each candidate (skills > experience > education > general) and keep
///    at most `KeywordCategory::cap` per bucket.
pub fn extract_keywords(text: &str) -> KeywordSet {
    let tokens = tokenize(text);
    let frequency = count_candidates(&tokens);

    let mut ranked: Vec<(&str, usize)> = frequency.iter().map(|(t, n)| (t.as_str(), *n)).collect();
    // stable: equal counts keep first-seen order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let mut keywords = KeywordSet::default();
    for (term, count) in ranked {
        if let Classification::Categorized(category) = classify(term, count) {
            let bucket = keywords.get_mut(category);
            if bucket.len() < category.cap() {
                bucket.push(term.to_string());
            }
        }
    }

    tracing::debug!(
        candidates = frequency.len(),
        skills = keywords.skills.len(),
        experience = keywords.experience.len(),
        education = keywords.education.len(),
        general = keywords.general.len(),
        "Extracted keywords"
    );

    keywords
}

/// Assigns a candidate term to its single highest-precedence bucket.
pub fn classify(term: &str, frequency: usize) -> Classification {
    if is_skill(term) {
        Classification::Categorized(KeywordCategory::Skills)
    } else if is_experience(term) {
        Classification::Categorized(KeywordCategory::Experience)
    } else if is_education(term) {
        Classification::Categorized(KeywordCategory::Education)
    } else if frequency > 1 || term.chars().count() >= GENERAL_MIN_LEN {
        Classification::Categorized(KeywordCategory::General)
    } else {
        Classification::Discarded
    }
}

/// Lowercases, splits on non-word characters and filters short tokens and stop words.
fn tokenize(text: &str) -> Vec<String> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| if is_word_char(c) { c } else { ' ' })
        .collect();

    normalized
        .split_whitespace()
        .filter(|token| token.len() >= MIN_TOKEN_LEN && !is_stop_word(token))
        .map(String::from)
        .collect()
}

/// Frequency table over single tokens followed by 2- and 3-grams, in insertion order.
fn count_candidates(tokens: &[String]) -> IndexMap<String, usize> {
    let mut frequency: IndexMap<String, usize> = IndexMap::new();

    for token in tokens {
        *frequency.entry(token.clone()).or_insert(0) += 1;
    }

    for i in 0..tokens.len().saturating_sub(1) {
        let bigram = format!("{} {}", tokens[i], tokens[i + 1]);
        *frequency.entry(bigram).or_insert(0) += 1;

        if let Some(third) = tokens.get(i + 2) {
            let trigram = format!("{} {} {}", tokens[i], tokens[i + 1], third);
            *frequency.entry(trigram).or_insert(0) += 1;
        }
    }

    frequency
}
