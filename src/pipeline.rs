use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::indicators::BriefExtraction;
use crate::export::{Exporter, JsonExporter, MarkdownExporter, TextExporter};
use crate::parser::document::{self, DocumentSource};
use crate::parser::extractor::extract_indicators;
use crate::parser::hangul::recompose_hangul;

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl PipelineConfig {
    pub fn new(input: PathBuf, output: PathBuf) -> Self {
        Self { input, output }
    }
}

/// Runs acquisition, recomposition and extraction against one source.
/// Acquisition failures propagate; unmatched fields never do.
pub fn extract_brief(source: &DocumentSource) -> Result<BriefExtraction> {
    let raw = document::read_text(source)?;
    let text = recompose_hangul(&raw);

    if text.trim().is_empty() {
        tracing::warn!("document produced no text layer; the record will be empty");
    }

    let record = extract_indicators(&text);
    tracing::debug!(chars = text.len(), "brief extraction complete");

    Ok(BriefExtraction { text, record })
}

pub fn extract_brief_from_path(path: &Path) -> Result<BriefExtraction> {
    extract_brief(&DocumentSource::File(path.to_path_buf()))
}

/// Writes every export surface for one extraction.
pub fn export_brief(extraction: &BriefExtraction, output: &Path) -> Result<()> {
    let json_exporter = JsonExporter::new(output.to_path_buf());
    json_exporter.export(extraction)?;

    let markdown_exporter = MarkdownExporter::new(output.to_path_buf());
    markdown_exporter.export(extraction)?;

    let text_exporter = TextExporter::new(output.to_path_buf());
    text_exporter.export(extraction)?;

    Ok(())
}
