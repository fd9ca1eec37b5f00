mod cli;
mod config;
mod documents;
mod errors;
mod export;
mod matching;
mod models;
mod report;
mod session;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{Cli, Commands, OutputFormat};
use crate::config::Config;
use crate::documents::{extract_text, load_resume};
use crate::errors::AppError;
use crate::export::{generate_csv, write_csv};
use crate::matching::{extract_keywords, KeywordMatchScorer};
use crate::models::resume::Resume;
use crate::session::run_match;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Structured logging on stderr; stdout carries the results
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!("Starting resume-matcher v{}", env!("CARGO_PKG_VERSION"));

    match run(cli.command, &config) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            debug!(code = e.code(), exit_code = e.exit_code(), "Command failed");
            eprintln!("{} {e}", "error:".red().bold());
            Ok(ExitCode::from(e.exit_code()))
        }
    }
}

fn run(command: Commands, config: &Config) -> Result<(), AppError> {
    match command {
        Commands::Keywords { job, json } => {
            let keywords = extract_keywords(&read_job_description(&job)?);
            if json {
                println!("{}", report::to_json(&keywords)?);
            } else {
                report::print_keywords(&keywords);
            }
        }
        Commands::Match {
            job,
            resumes,
            texts,
            format,
            export,
            keywords_shown,
        } => {
            let job_description = read_job_description(&job)?;

            // A bad file is reported and skipped; the rest are still scored
            let mut loaded = Vec::with_capacity(resumes.len() + texts.len());
            for path in &resumes {
                match load_resume(path) {
                    Ok(resume) => loaded.push(resume),
                    Err(e) => warn!("Failed to process {}: {e}", path.display()),
                }
            }
            for text in texts {
                let title = format!("Resume {}", loaded.len() + 1);
                loaded.push(Resume::from_text(title, text));
            }
            info!(
                loaded = loaded.len(),
                files = resumes.len(),
                "Loaded resumes"
            );

            let outcome = run_match(&job_description, &loaded, &KeywordMatchScorer)?;

            match format {
                OutputFormat::Table => report::print_results(
                    &outcome,
                    keywords_shown.unwrap_or(config.keywords_shown),
                ),
                OutputFormat::Json => println!("{}", report::to_json(&outcome)?),
                OutputFormat::Csv => println!("{}", generate_csv(&outcome.results)),
            }

            if let Some(path) = export {
                let path = path.unwrap_or_else(|| PathBuf::from(&config.export_path));
                write_csv(&path, &outcome.results)?;
            }
        }
    }

    Ok(())
}

/// Reads the job description from a document, or from stdin for `-`.
fn read_job_description(path: &Path) -> Result<String, AppError> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    Ok(extract_text(path)?)
}
