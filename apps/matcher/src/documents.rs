//! Document text extraction — turns resume and job-description files into plain text.
//!
//! Supported: plain text (`.txt`, `.text`, `.md`), Word (`.docx`) and PDF (`.pdf`).
//! Anything else is rejected by extension before the file is read.

use std::io::{Cursor, Read};
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;
use tracing::debug;

use crate::models::resume::Resume;

const DOCX_BODY_PART: &str = "word/document.xml";

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported document type: {0} (expected .txt, .md, .docx or .pdf)")]
    Unsupported(String),

    #[error("{path} is not a valid document: {reason}")]
    Corrupt { path: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    PlainText,
    Docx,
    Pdf,
}

impl DocumentKind {
    /// Detects the document kind from the file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "txt" | "text" | "md" => Some(DocumentKind::PlainText),
            "docx" => Some(DocumentKind::Docx),
            "pdf" => Some(DocumentKind::Pdf),
            _ => None,
        }
    }
}

/// Reads `path` and returns its text content.
pub fn extract_text(path: &Path) -> Result<String, DocumentError> {
    let name = path.display().to_string();
    let kind = DocumentKind::from_path(path)
        .ok_or_else(|| DocumentError::Unsupported(name.clone()))?;

    let bytes = std::fs::read(path).map_err(|source| DocumentError::Io {
        path: name.clone(),
        source,
    })?;

    let text = extract_text_from_bytes(kind, &bytes, &name)?;
    debug!(path = %name, ?kind, chars = text.chars().count(), "Extracted document text");
    Ok(text)
}

/// Extracts text from an in-memory document. `name` only appears in error messages.
pub fn extract_text_from_bytes(
    kind: DocumentKind,
    bytes: &[u8],
    name: &str,
) -> Result<String, DocumentError> {
    let corrupt = |reason: String| DocumentError::Corrupt {
        path: name.to_string(),
        reason,
    };

    match kind {
        DocumentKind::PlainText => String::from_utf8(bytes.to_vec())
            .map_err(|e| corrupt(format!("not valid UTF-8 ({e})"))),
        DocumentKind::Docx => {
            let xml = read_docx_body(bytes).map_err(corrupt)?;
            docx_xml_to_text(&xml).map_err(corrupt)
        }
        DocumentKind::Pdf => read_pdf_text(bytes).map_err(corrupt),
    }
}

/// Loads a resume file, titled after the file name.
pub fn load_resume(path: &Path) -> Result<Resume, DocumentError> {
    let content = extract_text(path)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(Resume::from_file(file_name, content))
}

/// pdf-extract panics on some malformed inputs (e.g. a page using an undeclared font),
/// so a panic is reported as a corrupt document.
fn read_pdf_text(bytes: &[u8]) -> Result<String, String> {
    match panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes))) {
        Ok(result) => result.map_err(|e| e.to_string()),
        Err(payload) => {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown error".to_string());
            Err(format!("PDF parser failed: {reason}"))
        }
    }
}

fn read_docx_body(bytes: &[u8]) -> Result<String, String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| e.to_string())?;
    let mut part = archive
        .by_name(DOCX_BODY_PART)
        .map_err(|e| format!("{DOCX_BODY_PART}: {e}"))?;

    let mut xml = String::new();
    part.read_to_string(&mut xml).map_err(|e| e.to_string())?;
    Ok(xml)
}

/// Collects the text runs of a WordprocessingML body.
/// Paragraphs end with a blank line; tabs and line breaks are kept.
fn docx_xml_to_text(xml: &str) -> Result<String, String> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event().map_err(|e| e.to_string())? {
            Event::Start(e) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => text.push_str("\n\n"),
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:tab" => text.push('\t'),
                b"w:br" | b"w:cr" => text.push('\n'),
                b"w:p" => text.push_str("\n\n"),
                _ => {}
            },
            Event::Text(t) if in_text_run => {
                text.push_str(&t.unescape().map_err(|e| e.to_string())?);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text.trim_end().to_string())
}
