use std::fs;
use std::path::PathBuf;

use anyhow::Result;

use crate::core::indicators::BriefExtraction;
use crate::core::numeric::range_midpoint;
use crate::export::{indicator_rows, Exporter};

#[derive(Debug, Clone)]
pub struct MarkdownExporter {
    out_dir: PathBuf,
}

impl MarkdownExporter {
    pub fn new(out_dir: PathBuf) -> Self {
        Self { out_dir }
    }

    fn render(extraction: &BriefExtraction) -> String {
        let record = &extraction.record;
        let mut markdown = String::new();

        markdown.push_str("# Country brief indicators\n\n");
        if let Some(name) = record.country_name.as_deref() {
            markdown.push_str(&format!("**{name}**\n\n"));
        }

        markdown.push_str("| Item | Value |\n|---|---|\n");
        for (label, value) in indicator_rows(record) {
            markdown.push_str(&format!("| {label} | {value} |\n"));
        }

        // range-valued share resolved to one number for chart-style use
        if let Some(range) = record.sector_agri_pct_range.as_deref() {
            if let Some(midpoint) = range_midpoint(range) {
                markdown.push_str(&format!(
                    "\nAgriculture share resolved to {midpoint}% (midpoint of \"{range}\").\n"
                ));
            }
        }

        markdown
    }
}

impl Exporter for MarkdownExporter {
    fn export(&self, extraction: &BriefExtraction) -> Result<()> {
        fs::create_dir_all(&self.out_dir)?;
        let path = self.out_dir.join("brief.md");
        fs::write(path, Self::render(extraction))?;
        Ok(())
    }
}
