use crate::config::Config;
use ignore::WalkBuilder;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileInfo {
    pub path: PathBuf,
    pub size: u64,
}

pub struct FileDiscovery {
    config: Config,
}

impl FileDiscovery {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Walk the target directory and collect every eligible source unit:
    /// matching extension, not an excluded file name, not covered by an
    /// ignore pattern, within the size cap. Results come back sorted by path
    /// so a scan visits files in a stable order.
    pub fn discover_files(&self) -> crate::Result<Vec<FileInfo>> {
        let mut files = Vec::new();

        let mut walker_builder = WalkBuilder::new(&self.config.target_directory);
        walker_builder
            .standard_filters(true)
            .hidden(false)
            .git_ignore(true);

        for result in walker_builder.build() {
            let entry = result?;
            let path = entry.path();

            if !path.is_file() {
                continue;
            }
            if !self.is_source_file(path) {
                continue;
            }
            if self.should_ignore(path) {
                continue;
            }

            if let Some(file_info) = self.process_file(path)? {
                files.push(file_info);
            }
        }

        files.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(files)
    }

    fn is_source_file(&self, path: &Path) -> bool {
        let matches_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext == self.config.source_extension)
            .unwrap_or(false);
        if !matches_extension {
            return false;
        }

        match path.file_name().and_then(|name| name.to_str()) {
            Some(name) => !self.config.excluded_files.iter().any(|excluded| excluded == name),
            None => false,
        }
    }

    fn should_ignore(&self, path: &Path) -> bool {
        for pattern in &self.config.ignore_patterns {
            if let Some(suffix) = pattern.strip_prefix("*.") {
                if let Some(name) = path.file_name() {
                    if name.to_string_lossy().ends_with(&format!(".{suffix}")) {
                        return true;
                    }
                }
            } else if path
                .components()
                .any(|component| component.as_os_str().to_string_lossy() == pattern.as_str())
            {
                return true;
            }
        }

        false
    }

    fn process_file(&self, path: &Path) -> crate::Result<Option<FileInfo>> {
        let metadata = fs::metadata(path)?;
        let size = metadata.len();

        if size > self.config.max_file_size as u64 {
            return Ok(None);
        }

        Ok(Some(FileInfo {
            path: path.to_path_buf(),
            size,
        }))
    }

    pub fn get_stats(&self, files: &[FileInfo]) -> FileStats {
        let mut stats = FileStats::default();

        for file in files {
            stats.total_files += 1;
            stats.total_size += file.size;
        }

        stats
    }
}

#[derive(Debug, Default)]
pub struct FileStats {
    pub total_files: usize,
    pub total_size: u64,
}

impl FileStats {
    pub fn print_summary(&self) {
        println!("File Discovery Summary:");
        println!("  Total files: {}", self.total_files);
        println!(
            "  Total size: {:.2} MB",
            self.total_size as f64 / (1024.0 * 1024.0)
        );
    }
}
