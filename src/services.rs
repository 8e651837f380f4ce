use crate::analyzer::{read_source, SourceAnalyzer};
use crate::error::ScanError;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use tracing::debug;

/// Fully-qualified entity name -> the verbs its file imports.
pub type ServiceRepository = BTreeMap<String, BTreeSet<String>>;

/// Finds REST resource entities: files importing verb annotations from the
/// `org.restlet.resource` namespace, paired with the public type they
/// declare. An entity is recorded only when at least one verb was seen.
pub struct ServiceAnalyzer {
    package_pattern: Regex,
    verb_pattern: Regex,
    entity_pattern: Regex,
    repository: ServiceRepository,
}

impl ServiceAnalyzer {
    pub fn new() -> crate::Result<Self> {
        Ok(Self {
            package_pattern: Regex::new(r"package\s+((?:[a-z][a-z0-9_]*\.)*\w+)")?,
            verb_pattern: Regex::new(r"import\s+org\.restlet\.resource\.(Get|Post|Put|Delete)")?,
            entity_pattern: Regex::new(
                r"public\s+(?:final\s+)?(?:abstract\s+)?(?:class|interface|enum)\s+(\w+)",
            )?,
            repository: ServiceRepository::new(),
        })
    }

    pub fn repository(&self) -> &ServiceRepository {
        &self.repository
    }

    /// One `entity=VERB VERB` line per entity, then the totals.
    pub fn render_report(&self) -> String {
        let mut report = String::new();
        let mut service_count = 0;

        for (entity, verbs) in &self.repository {
            service_count += verbs.len();
            report.push_str(entity);
            report.push('=');
            for verb in verbs {
                report.push_str(verb);
                report.push(' ');
            }
            report.push('\n');
        }

        report.push_str(&format!(
            "\nTotal number of entities: {}\n",
            self.repository.len()
        ));
        report.push_str(&format!("Total number of services: {service_count}\n"));
        report
    }
}

impl SourceAnalyzer for ServiceAnalyzer {
    fn analyze_file(&mut self, path: &Path) -> Result<(), ScanError> {
        let text = read_source(path)?;
        let mut package: Option<String> = None;
        let mut verbs = BTreeSet::new();

        for line in text.lines() {
            if let Some(captures) = self.package_pattern.captures(line) {
                package = Some(captures[1].to_string());
            } else if let Some(captures) = self.verb_pattern.captures(line) {
                debug!("service verb found: {}", &captures[1]);
                verbs.insert(captures[1].to_string());
            } else if let Some(captures) = self.entity_pattern.captures(line) {
                if let Some(package) = package {
                    if !verbs.is_empty() {
                        self.repository
                            .insert(format!("{}.{}", package, &captures[1]), verbs);
                    }
                }
                return Ok(());
            }
        }

        Err(ScanError::NoEntityFound {
            path: path.to_path_buf(),
        })
    }
}
