use crate::analyzer::{read_source, SourceAnalyzer};
use crate::error::ScanError;
use std::path::Path;

/// Sums line counts across every file it visits.
#[derive(Debug, Default)]
pub struct LineCountAnalyzer {
    total: u64,
}

impl LineCountAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_lines(&self) -> u64 {
        self.total
    }

    pub fn render_report(&self) -> String {
        format!("Total lines of code: {}\n", self.total)
    }
}

impl SourceAnalyzer for LineCountAnalyzer {
    fn analyze_file(&mut self, path: &Path) -> Result<(), ScanError> {
        let text = read_source(path)?;
        self.total += text.lines().count() as u64;
        Ok(())
    }
}
