use std::path::Path;

use tracing::info;

use crate::errors::AppError;
use crate::matching::MatchResult;

const CSV_HEADERS: &[&str] = &[
    "Rank",
    "Resume Title",
    "Match Score",
    "Percentage",
    "Skills Matched",
    "Experience Matched",
    "Education Matched",
    "General Matched",
];

/// Renders ranked results as CSV. Every cell is quoted; rows are `\n`-separated.
/// `results` must already be ranked; row order is the rank.
pub fn generate_csv(results: &[MatchResult]) -> String {
    let header = CSV_HEADERS.iter().map(|h| h.to_string()).collect::<Vec<_>>();

    let rows = results.iter().enumerate().map(|(index, result)| {
        let breakdown = &result.score.breakdown;
        vec![
            (index + 1).to_string(),
            result.title.clone(),
            format!("{:.1}", result.score.score),
            format!("{}%", result.score.percentage),
            breakdown.skills.to_string(),
            breakdown.experience.to_string(),
            breakdown.education.to_string(),
            breakdown.general.to_string(),
        ]
    });

    std::iter::once(header)
        .chain(rows)
        .map(|row| {
            row.iter()
                .map(|cell| quote_cell(cell))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Writes the CSV rendering of `results` to `path`.
pub fn write_csv(path: &Path, results: &[MatchResult]) -> Result<(), AppError> {
    std::fs::write(path, generate_csv(results))
        .map_err(|e| AppError::Export(format!("failed to write {}: {e}", path.display())))?;
    info!(path = %path.display(), rows = results.len(), "Exported results");
    Ok(())
}

fn quote_cell(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::scorer::{Breakdown, MatchScore};
    use crate::models::resume::Resume;

    fn make_result(title: &str, score: f64, percentage: u32, breakdown: Breakdown) -> MatchResult {
        MatchResult::new(
            &Resume::from_text(title, "content"),
            MatchScore {
                score,
                percentage,
                matched_keywords: vec![],
                breakdown,
            },
            12,
        )
    }

    #[test]
    fn test_csv_header_and_rows() {
        let results = vec![
            make_result(
                "Jane Doe",
                10.5,
                78,
                Breakdown {
                    skills: 2,
                    experience: 1,
                    education: 1,
                    general: 1,
                },
            ),
            make_result("John", 3.0, 25, Breakdown { skills: 1, ..Default::default() }),
        ];

        let csv = generate_csv(&results);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            r#""Rank","Resume Title","Match Score","Percentage","Skills Matched","Experience Matched","Education Matched","General Matched""#
        );
        assert_eq!(lines[1], r#""1","Jane Doe","10.5","78%","2","1","1","1""#);
        assert_eq!(lines[2], r#""2","John","3.0","25%","1","0","0","0""#);
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn test_quotes_in_titles_are_doubled() {
        let results = vec![make_result("Jane \"JD\" Doe", 1.0, 10, Breakdown::default())];
        let csv = generate_csv(&results);
        assert!(csv.contains(r#""Jane ""JD"" Doe""#));
    }

    #[test]
    fn test_empty_results_is_header_only() {
        let csv = generate_csv(&[]);
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn test_write_csv_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");
        let results = vec![make_result("Jane", 4.5, 43, Breakdown::default())];

        write_csv(&path, &results).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, generate_csv(&results));
    }

    #[test]
    fn test_write_csv_to_missing_dir_is_export_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("results.csv");
        let err = write_csv(&path, &[]).unwrap_err();
        assert!(matches!(err, AppError::Export(_)));
    }
}
