//! Terminal and JSON rendering of match outcomes.

use colored::Colorize;
use prettytable::{Cell, Row, Table};
use serde::Serialize;

use crate::errors::AppError;
use crate::matching::{KeywordCategory, KeywordSet, MatchResult, MatchTier};
use crate::session::MatchOutcome;

/// Ranked results, one row per resume.
pub fn results_table(results: &[MatchResult], keywords_shown: usize) -> Table {
    let mut table = Table::new();
    table.set_titles(Row::new(vec![
        Cell::new("Rank"),
        Cell::new("Resume"),
        Cell::new("Score"),
        Cell::new("Match"),
        Cell::new("Tier"),
        Cell::new("Skills"),
        Cell::new("Experience"),
        Cell::new("Education"),
        Cell::new("General"),
        Cell::new("Matched Keywords"),
    ]));

    for (index, result) in results.iter().enumerate() {
        let breakdown = &result.score.breakdown;
        table.add_row(Row::new(vec![
            Cell::new(&(index + 1).to_string()),
            Cell::new(&result.title),
            Cell::new(&format!("{:.1}", result.score.score)),
            Cell::new(&format!("{}%", result.score.percentage)),
            Cell::new(result.tier.label()).style_spec(tier_style(result.tier)),
            Cell::new(&breakdown.skills.to_string()),
            Cell::new(&breakdown.experience.to_string()),
            Cell::new(&breakdown.education.to_string()),
            Cell::new(&breakdown.general.to_string()),
            Cell::new(&summarize_keywords(
                &result.score.matched_keywords,
                keywords_shown,
            )),
        ]));
    }

    table
}

/// Extracted keywords, one row per category.
pub fn keywords_table(keywords: &KeywordSet) -> Table {
    let mut table = Table::new();
    table.set_titles(Row::new(vec![
        Cell::new("Category"),
        Cell::new("Weight"),
        Cell::new("Count"),
        Cell::new("Keywords"),
    ]));

    for category in KeywordCategory::ALL {
        let list = keywords.get(category);
        table.add_row(Row::new(vec![
            Cell::new(category.label()),
            Cell::new(&category.weight().to_string()),
            Cell::new(&format!("{}/{}", list.len(), category.cap())),
            Cell::new(&list.join(", ")),
        ]));
    }

    table
}

pub fn print_results(outcome: &MatchOutcome, keywords_shown: usize) {
    println!(
        "\n{} ({} keywords extracted, {} resumes scored)",
        "Match Results".bold(),
        outcome.keywords.len(),
        outcome.results.len()
    );
    results_table(&outcome.results, keywords_shown).printstd();

    if let Some(best) = outcome.results.first() {
        let line = format!(
            "Best match: {} ({}%, score {:.1})",
            best.title, best.score.percentage, best.score.score
        );
        println!("{}", colorize_tier(&line, best.tier));
    }
}

pub fn print_keywords(keywords: &KeywordSet) {
    println!(
        "\n{} ({} total)",
        "Extracted Keywords".bold(),
        keywords.len()
    );
    if keywords.is_empty() {
        println!("{}", "No keywords found in the job description.".yellow());
        return;
    }
    keywords_table(keywords).printstd();
}

/// Pretty-printed JSON for any report value.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value).map_err(|e| AppError::Internal(e.into()))
}

fn tier_style(tier: MatchTier) -> &'static str {
    match tier {
        MatchTier::Strong => "Fg",
        MatchTier::Moderate => "Fy",
        MatchTier::Weak => "Fr",
    }
}

fn colorize_tier(text: &str, tier: MatchTier) -> colored::ColoredString {
    match tier {
        MatchTier::Strong => text.green(),
        MatchTier::Moderate => text.yellow(),
        MatchTier::Weak => text.red(),
    }
}

/// First `limit` keywords, with a count of the rest.
fn summarize_keywords(keywords: &[String], limit: usize) -> String {
    if keywords.is_empty() {
        return "-".to_string();
    }
    let shown = keywords.iter().take(limit).cloned().collect::<Vec<_>>().join(", ");
    let hidden = keywords.len().saturating_sub(limit);
    if hidden > 0 {
        format!("{shown} (+{hidden} more)")
    } else {
        shown
    }
}
