use crate::dependency_graph::DependencyGraph;
use anyhow::Result;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// The un-normalized graph plus provenance, for JSON export.
#[derive(Debug, Serialize)]
pub struct RawGraphReport<'a> {
    pub metadata: ReportMetadata,
    pub packages: &'a BTreeMap<String, BTreeSet<String>>,
}

#[derive(Debug, Serialize)]
pub struct ReportMetadata {
    pub generated_at: String,
    pub version: String,
    pub total_files: usize,
    pub package_count: usize,
}

pub struct Reporter;

impl Reporter {
    pub fn new() -> Self {
        Self
    }

    /// Write a text report, creating missing parent directories.
    pub fn write_report(&self, content: &str, path: &Path) -> Result<PathBuf> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(path, content)?;
        Ok(path.to_path_buf())
    }

    /// Export the raw package -> dependencies map as pretty JSON with a
    /// metadata header.
    pub fn write_raw_graph(
        &self,
        graph: &DependencyGraph,
        total_files: usize,
        path: &Path,
    ) -> Result<PathBuf> {
        let report = RawGraphReport {
            metadata: ReportMetadata {
                generated_at: chrono::Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                total_files,
                package_count: graph.package_count(),
            },
            packages: graph.packages(),
        };

        self.write_report(&serde_json::to_string_pretty(&report)?, path)
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}
