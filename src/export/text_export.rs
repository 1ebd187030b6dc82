use std::fs;
use std::path::PathBuf;

use anyhow::Result;

use crate::core::indicators::BriefExtraction;
use crate::export::Exporter;

/// Writes the flattened text layer, the surface consumers use for
/// raw-preview display.
#[derive(Debug, Clone)]
pub struct TextExporter {
    out_dir: PathBuf,
}

impl TextExporter {
    pub fn new(out_dir: PathBuf) -> Self {
        Self { out_dir }
    }
}

impl Exporter for TextExporter {
    fn export(&self, extraction: &BriefExtraction) -> Result<()> {
        fs::create_dir_all(&self.out_dir)?;
        let path = self.out_dir.join("brief.txt");
        fs::write(path, &extraction.text)?;
        Ok(())
    }
}
