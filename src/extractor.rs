use crate::error::ScanError;
use regex::Regex;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::debug;

/// Everything pulled out of one source file: the declared package and the
/// fully-qualified names referenced by its import statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    pub package: String,
    pub dependencies: BTreeSet<String>,
}

/// Line-oriented heuristic extractor. It does not tokenize comments or
/// strings; a keyword-bearing line counts wherever it appears.
pub struct SourceUnitExtractor {
    package_pattern: Regex,
    import_pattern: Regex,
    entity_pattern: Regex,
}

impl SourceUnitExtractor {
    pub fn new() -> crate::Result<Self> {
        Ok(Self {
            package_pattern: Regex::new(r"package\s+((?:[a-z][a-z0-9_]*\.)*\w+)")?,
            import_pattern: Regex::new(r"import\s+((?:[a-z][a-z0-9_]*\.)*)(\w+)")?,
            entity_pattern: Regex::new(r"class|interface|enum")?,
        })
    }

    /// Single forward pass over the file's lines. The first package
    /// declaration wins; after that, imports are collected until the line
    /// that opens the type body ends the scan. A file that never reaches a
    /// type declaration (including one with no package line at all) fails
    /// with [`ScanError::NoEntityFound`].
    pub fn extract(&self, path: &Path, text: &str) -> Result<SourceUnit, ScanError> {
        let mut package: Option<String> = None;
        let mut dependencies = BTreeSet::new();

        for line in text.lines() {
            if package.is_none() {
                if let Some(captures) = self.package_pattern.captures(line) {
                    debug!("package found: {}", &captures[1]);
                    package = Some(captures[1].to_string());
                }
            } else if let Some(captures) = self.import_pattern.captures(line) {
                let import = format!("{}{}", &captures[1], &captures[2]);
                debug!("import found: {import}");
                dependencies.insert(import);
            } else if self.entity_pattern.is_match(line) {
                if let Some(package) = package.take() {
                    return Ok(SourceUnit {
                        package,
                        dependencies,
                    });
                }
            }
        }

        Err(ScanError::NoEntityFound {
            path: path.to_path_buf(),
        })
    }
}
