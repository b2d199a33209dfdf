//! Splitting and parsing of manifest files into generic documents.

use super::document::{ManifestDocument, ManifestFormat};
use crate::error::ManifestError;
use serde_yaml::Value;
use std::path::Path;

/// Parse every document of a manifest string.
pub fn parse_manifest_str(
    content: &str,
    format: ManifestFormat,
) -> Result<Vec<ManifestDocument>, ManifestError> {
    documents(content, format).collect()
}

/// Read and parse a manifest file. The format comes from the extension, and
/// anything that is not `.json` is read as a YAML stream.
pub fn parse_manifest_file(path: &Path) -> Result<Vec<ManifestDocument>, ManifestError> {
    let content = read_manifest(path)?;
    let format = ManifestFormat::from_path(path).unwrap_or(ManifestFormat::Yaml);
    let docs = parse_manifest_str(&content, format)?;
    log::debug!("Parsed {} document(s) from {}", docs.len(), path.display());
    Ok(docs)
}

pub(crate) fn read_manifest(path: &Path) -> Result<String, ManifestError> {
    std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Lazily parse the documents of `content`. Empty and comment-only YAML
/// documents are skipped; JSON content is always exactly one document.
pub fn documents(
    content: &str,
    format: ManifestFormat,
) -> Box<dyn Iterator<Item = Result<ManifestDocument, ManifestError>> + '_> {
    match format {
        ManifestFormat::Json => Box::new(std::iter::once(parse_json(content))),
        ManifestFormat::Yaml => Box::new(
            split_yaml_documents(content)
                .into_iter()
                .filter_map(|(line, doc)| parse_yaml_document(&doc, line).transpose()),
        ),
    }
}

fn parse_json(content: &str) -> Result<ManifestDocument, ManifestError> {
    let json: serde_json::Value =
        serde_json::from_str(content).map_err(|e| ManifestError::Syntax {
            line: u32::try_from(e.line()).unwrap_or(1).max(1),
            message: e.to_string(),
        })?;
    let value = serde_yaml::to_value(json).map_err(|e| ManifestError::Syntax {
        line: 1,
        message: e.to_string(),
    })?;
    Ok(ManifestDocument::new(value, 1))
}

fn parse_yaml_document(doc: &str, line: u32) -> Result<Option<ManifestDocument>, ManifestError> {
    if is_blank_document(doc) {
        return Ok(None);
    }

    match serde_yaml::from_str::<Value>(doc) {
        Ok(Value::Null) => Ok(None),
        Ok(value) => Ok(Some(ManifestDocument::new(value, line))),
        Err(e) => Err(ManifestError::Syntax {
            line,
            message: e.to_string(),
        }),
    }
}

fn is_blank_document(doc: &str) -> bool {
    doc.lines().all(|l| {
        let l = l.trim();
        l.is_empty() || l.starts_with('#')
    })
}

/// A separator is a line starting with `---`, optionally followed by
/// whitespace and a trailing comment.
fn is_separator(line: &str) -> bool {
    let Some(rest) = line.strip_prefix("---") else {
        return false;
    };
    if rest.is_empty() {
        return true;
    }
    let trimmed = rest.trim_start();
    trimmed.len() < rest.len() && (trimmed.is_empty() || trimmed.starts_with('#'))
}

/// Split a YAML stream on document separators. Each entry carries the 1-based
/// line of the document's first line.
fn split_yaml_documents(content: &str) -> Vec<(u32, String)> {
    let mut docs = Vec::new();
    let mut current = String::new();
    let mut start = 1u32;

    for (idx, line) in content.lines().enumerate() {
        let line_number = idx as u32 + 1;
        if is_separator(line) {
            docs.push((start, std::mem::take(&mut current)));
            start = line_number + 1;
            continue;
        }
        current.push_str(line);
        current.push('\n');
    }
    docs.push((start, current));

    docs
}
