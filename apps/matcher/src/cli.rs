use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(author, version, about = "Rank resumes against a job description by keyword match", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract and list the keywords of a job description
    Keywords {
        /// Job description file (.txt, .md, .docx, .pdf), or "-" for stdin
        #[arg(short, long)]
        job: PathBuf,

        /// Print the keyword set as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score and rank resumes against a job description
    Match {
        /// Job description file (.txt, .md, .docx, .pdf), or "-" for stdin
        #[arg(short, long)]
        job: PathBuf,

        /// Resume files (.txt, .md, .docx, .pdf)
        resumes: Vec<PathBuf>,

        /// Resume given inline as text; repeatable, titled "Resume N"
        #[arg(short = 't', long = "text", value_name = "TEXT")]
        texts: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Also write the ranking as CSV; `--export=PATH`, or RESUME_MATCHER_EXPORT_PATH when bare
        #[arg(short, long, num_args = 0..=1, require_equals = true, value_name = "PATH")]
        export: Option<Option<PathBuf>>,

        /// Matched keywords listed per resume in the table
        #[arg(short, long)]
        keywords_shown: Option<usize>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_match_defaults() {
        let cli = Cli::try_parse_from([
            "resume-matcher",
            "match",
            "--job",
            "jd.txt",
            "a.docx",
            "b.pdf",
        ])
        .unwrap();
        match cli.command {
            Commands::Match {
                job,
                resumes,
                texts,
                format,
                export,
                keywords_shown,
            } => {
                assert_eq!(job, PathBuf::from("jd.txt"));
                assert_eq!(resumes.len(), 2);
                assert!(texts.is_empty());
                assert_eq!(format, OutputFormat::Table);
                assert!(export.is_none());
                assert!(keywords_shown.is_none());
            }
            _ => panic!("expected match command"),
        }
    }

    #[test]
    fn test_export_without_path() {
        let cli = Cli::try_parse_from([
            "resume-matcher",
            "match",
            "--job",
            "jd.txt",
            "--format",
            "json",
            "--export",
            "--",
            "a.docx",
        ])
        .unwrap();
        match cli.command {
            Commands::Match { export, format, .. } => {
                assert_eq!(export, Some(None));
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("expected match command"),
        }
    }

    #[test]
    fn test_bare_export_does_not_take_a_resume_path() {
        let cli = Cli::try_parse_from([
            "resume-matcher",
            "match",
            "--job",
            "jd.txt",
            "--export",
            "alice.docx",
            "bob.docx",
        ])
        .unwrap();
        match cli.command {
            Commands::Match {
                resumes, export, ..
            } => {
                assert_eq!(
                    resumes,
                    vec![PathBuf::from("alice.docx"), PathBuf::from("bob.docx")]
                );
                assert_eq!(export, Some(None));
            }
            _ => panic!("expected match command"),
        }
    }

    #[test]
    fn test_export_path_needs_equals() {
        let cli = Cli::try_parse_from([
            "resume-matcher",
            "match",
            "--job",
            "jd.txt",
            "--export=out.csv",
            "alice.docx",
        ])
        .unwrap();
        match cli.command {
            Commands::Match {
                resumes, export, ..
            } => {
                assert_eq!(resumes, vec![PathBuf::from("alice.docx")]);
                assert_eq!(export, Some(Some(PathBuf::from("out.csv"))));
            }
            _ => panic!("expected match command"),
        }
    }

    #[test]
    fn test_inline_text_resumes() {
        let cli = Cli::try_parse_from([
            "resume-matcher",
            "match",
            "--job",
            "-",
            "--text",
            "Python developer",
            "-t",
            "Rust engineer",
        ])
        .unwrap();
        match cli.command {
            Commands::Match { resumes, texts, .. } => {
                assert!(resumes.is_empty());
                assert_eq!(texts, vec!["Python developer", "Rust engineer"]);
            }
            _ => panic!("expected match command"),
        }
    }

    #[test]
    fn test_match_requires_a_job() {
        assert!(Cli::try_parse_from(["resume-matcher", "match", "a.docx"]).is_err());
    }
}
