//! Fixed word tables used by the keyword extractor.
//!
//! All tables are lowercase. Entries such as `c++`, `go` or `full-time` never
//! survive tokenization, so they never match a job description term.

/// Articles, pronouns, prepositions and conjunctions dropped before phrase generation.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "as", "is", "was", "are", "were", "be", "been", "being", "have", "has", "had", "do",
    "does", "did", "will", "would", "could", "should", "may", "might", "must", "shall", "can",
    "this", "that", "these", "those", "i", "you", "he", "she", "it", "we", "they", "me", "him",
    "her", "us", "them", "my", "your", "his", "its", "our", "their", "what", "which", "who",
    "when", "where", "why", "how", "all", "any", "both", "each", "few", "more", "most", "other",
    "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very",
    "just", "now", "also", "here", "there", "then", "once", "during", "before", "after", "above",
    "below", "between", "through", "into", "over", "under", "again", "further", "up", "down",
    "out", "off",
];

/// Tech and tool terms commonly asked for in job descriptions.
pub const SKILL_KEYWORDS: &[&str] = &[
    "javascript",
    "python",
    "java",
    "react",
    "angular",
    "vue",
    "node",
    "express",
    "sql",
    "mysql",
    "postgresql",
    "mongodb",
    "redis",
    "docker",
    "kubernetes",
    "aws",
    "azure",
    "gcp",
    "git",
    "agile",
    "scrum",
    "api",
    "rest",
    "graphql",
    "html",
    "css",
    "typescript",
    "php",
    "ruby",
    "go",
    "rust",
    "c++",
    "c#",
    "machine learning",
    "ai",
    "data science",
    "analytics",
    "visualization",
    "excel",
    "powerbi",
    "tableau",
    "figma",
    "sketch",
    "photoshop",
    "illustrator",
];

/// Seniority levels, role titles and engagement types.
pub const EXPERIENCE_KEYWORDS: &[&str] = &[
    "lead",
    "senior",
    "junior",
    "manager",
    "director",
    "architect",
    "developer",
    "engineer",
    "analyst",
    "consultant",
    "specialist",
    "coordinator",
    "associate",
    "intern",
    "freelance",
    "contractor",
    "full-time",
    "part-time",
    "remote",
];

/// Degrees, certifications and training.
pub const EDUCATION_KEYWORDS: &[&str] = &[
    "bachelor",
    "master",
    "phd",
    "degree",
    "university",
    "college",
    "certification",
    "certified",
    "diploma",
    "course",
    "training",
    "bootcamp",
    "workshop",
    "seminar",
];

/// Suffixes that mark a skill when preceded by at least one word character (`nodejs`, `mysql`).
pub const SKILL_SUFFIXES: &[&str] = &["js", "py", "sql", "css", "html"];

/// Prefixes that mark a skill (`webpack`, `devops engineer`).
pub const SKILL_PREFIXES: &[&str] = &["web", "mobile", "frontend", "backend", "fullstack", "devops"];

/// Substrings that mark a practice (`software development`) or a tool (`toolchain`).
pub const SKILL_FRAGMENTS: &[&str] = &[
    "development",
    "programming",
    "coding",
    "scripting",
    "framework",
    "library",
    "tool",
    "platform",
];

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

/// True when `term` is a listed skill or matches one of the skill patterns.
pub fn is_skill(term: &str) -> bool {
    SKILL_KEYWORDS.contains(&term) || matches_skill_pattern(term)
}

pub fn is_experience(term: &str) -> bool {
    EXPERIENCE_KEYWORDS.contains(&term)
}

pub fn is_education(term: &str) -> bool {
    EDUCATION_KEYWORDS.contains(&term)
}

fn matches_skill_pattern(term: &str) -> bool {
    let has_suffix = SKILL_SUFFIXES.iter().any(|suffix| {
        term.strip_suffix(suffix)
            .and_then(|rest| rest.chars().last())
            .is_some_and(is_word_char)
    });

    has_suffix
        || SKILL_PREFIXES.iter().any(|prefix| term.starts_with(prefix))
        || SKILL_FRAGMENTS.iter().any(|fragment| term.contains(fragment))
}

/// Word characters survive normalization; everything else becomes a separator.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
