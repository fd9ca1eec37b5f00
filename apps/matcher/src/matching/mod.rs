// Keyword matching core: extraction, scoring, ranking.
// Everything here is pure and synchronous; the word tables in `lexicon` are the only shared state.

pub mod extractor;
pub mod lexicon;
pub mod ranking;
pub mod scorer;

pub use extractor::{extract_keywords, KeywordCategory, KeywordSet};
pub use ranking::{rank_results, MatchResult, MatchTier};
pub use scorer::{KeywordMatchScorer, MatchScorer};
