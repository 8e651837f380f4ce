pub mod analyzer;
pub mod config;
pub mod dependency_graph;
pub mod error;
pub mod extractor;
pub mod file_discovery;
pub mod lines;
pub mod renderer;
pub mod reporter;
pub mod services;

pub use analyzer::{DependencyAnalyzer, SourceAnalyzer};
pub use config::Config;
pub use dependency_graph::{DependencyGraph, NormalizedGraph};
pub use error::ScanError;
pub use extractor::SourceUnitExtractor;
pub use file_discovery::FileDiscovery;
pub use lines::LineCountAnalyzer;
pub use reporter::Reporter;
pub use services::ServiceAnalyzer;

pub type Result<T> = anyhow::Result<T>;
