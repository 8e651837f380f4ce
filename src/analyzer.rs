use crate::{
    dependency_graph::DependencyGraph,
    error::ScanError,
    extractor::{SourceUnit, SourceUnitExtractor},
    file_discovery::FileInfo,
};
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Capability shared by all analyzer kinds: consume one source unit at a
/// time, accumulating results into analyzer-owned state.
pub trait SourceAnalyzer {
    fn analyze_file(&mut self, path: &Path) -> Result<(), ScanError>;

    /// Drive a batch of files. Per-file failures are logged and skipped; a
    /// bad file never aborts the scan.
    fn analyze_files(&mut self, files: &[FileInfo]) {
        for file in files {
            if let Err(e) = self.analyze_file(&file.path) {
                warn!("skipping {}: {e}", file.path.display());
            }
        }
    }
}

pub fn read_source(path: &Path) -> Result<String, ScanError> {
    fs::read_to_string(path).map_err(|source| ScanError::Unreadable {
        path: path.to_path_buf(),
        source,
    })
}

/// Extracts package declarations and imports from each file, accumulating
/// them into an inter-package dependency graph.
pub struct DependencyAnalyzer {
    extractor: SourceUnitExtractor,
    graph: DependencyGraph,
}

impl DependencyAnalyzer {
    pub fn new() -> crate::Result<Self> {
        Ok(Self {
            extractor: SourceUnitExtractor::new()?,
            graph: DependencyGraph::new(),
        })
    }

    fn merge(&mut self, unit: SourceUnit) {
        if !unit.dependencies.is_empty() {
            self.graph.merge(unit.package, unit.dependencies);
        }
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    pub fn into_graph(self) -> DependencyGraph {
        self.graph
    }
}

impl SourceAnalyzer for DependencyAnalyzer {
    fn analyze_file(&mut self, path: &Path) -> Result<(), ScanError> {
        let text = read_source(path)?;
        let unit = self.extractor.extract(path, &text)?;
        self.merge(unit);
        Ok(())
    }

    /// Extraction is pure per-file work, so the batch path fans out across
    /// threads and funnels every result through one sequential merge.
    fn analyze_files(&mut self, files: &[FileInfo]) {
        let extractor = &self.extractor;
        let units: Vec<SourceUnit> = files
            .par_iter()
            .filter_map(|file| {
                let result = read_source(&file.path)
                    .and_then(|text| extractor.extract(&file.path, &text));
                match result {
                    Ok(unit) => Some(unit),
                    Err(e) => {
                        warn!("skipping {}: {e}", file.path.display());
                        None
                    }
                }
            })
            .collect();

        for unit in units {
            self.merge(unit);
        }
    }
}
