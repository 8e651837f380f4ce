use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Collapsed view of the graph relative to a root package: representative
/// sub-package -> the representative sub-packages it depends on.
pub type NormalizedGraph = BTreeMap<String, BTreeSet<String>>;

/// Accumulator mapping each declared package to the set of fully-qualified
/// names it references. Sorted containers keep iteration order, and therefore
/// rendered output, stable across runs.
#[derive(Debug, Default, Clone, Serialize)]
pub struct DependencyGraph {
    packages: BTreeMap<String, BTreeSet<String>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Union `deps` into the entry for `pkg`, creating it if absent.
    /// Merging the same pair twice is a no-op.
    pub fn merge(&mut self, pkg: String, deps: BTreeSet<String>) {
        self.packages.entry(pkg).or_default().extend(deps);
    }

    pub fn packages(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.packages
    }

    pub fn package_count(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Collapse the graph to representative sub-packages one level below
    /// `root`. The root itself never appears as a source, packages outside
    /// the root are skipped, dependencies outside the root are dropped, and
    /// self-edges are suppressed. A package keeps its entry even when every
    /// dependency was filtered out.
    pub fn normalize(&self, root: &str) -> NormalizedGraph {
        let mut normalized = NormalizedGraph::new();

        for (pkg, deps) in &self.packages {
            if pkg == root {
                continue;
            }
            let Some(repr_pkg) = representative_name(root, pkg) else {
                continue;
            };
            let targets = normalized.entry(repr_pkg.to_string()).or_default();

            for dep in deps {
                if !dep.starts_with(root) {
                    continue;
                }
                if let Some(repr_dep) = representative_name(root, dep) {
                    if repr_dep != repr_pkg {
                        targets.insert(repr_dep.to_string());
                    }
                }
            }
        }

        normalized
    }
}

/// First path segment of `name` strictly below `root`: with root `a.b`,
/// `a.b.c.d` maps to `c` and `a.b.c` to `c`. Yields `None` unless `name`
/// starts with `root` as a proper dotted prefix.
pub fn representative_name<'a>(root: &str, name: &'a str) -> Option<&'a str> {
    let below = name.strip_prefix(root)?.strip_prefix('.')?;
    below.split('.').next().filter(|segment| !segment.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deps(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn merge_unions_sets() {
        let mut graph = DependencyGraph::new();
        graph.merge("a.b.c".to_string(), deps(&["a.b.d.X"]));
        graph.merge("a.b.c".to_string(), deps(&["a.b.e.Y"]));

        assert_eq!(
            graph.packages()["a.b.c"],
            deps(&["a.b.d.X", "a.b.e.Y"])
        );
    }

    #[test]
    fn merge_is_idempotent() {
        let mut once = DependencyGraph::new();
        once.merge("a.b.c".to_string(), deps(&["a.b.d.X"]));

        let mut twice = DependencyGraph::new();
        twice.merge("a.b.c".to_string(), deps(&["a.b.d.X"]));
        twice.merge("a.b.c".to_string(), deps(&["a.b.d.X"]));

        assert_eq!(once.packages(), twice.packages());
    }

    #[test]
    fn representative_name_takes_first_segment_below_root() {
        assert_eq!(representative_name("a.b", "a.b.c.d"), Some("c"));
        assert_eq!(representative_name("a.b", "a.b.c"), Some("c"));
    }

    #[test]
    fn representative_name_requires_proper_dotted_prefix() {
        assert_eq!(representative_name("a.b", "x.y.z"), None);
        assert_eq!(representative_name("a.b", "a.b"), None);
        assert_eq!(representative_name("a.b", "a.bc.d"), None);
    }

    #[test]
    fn normalize_collapses_to_representatives() {
        let mut graph = DependencyGraph::new();
        graph.merge("a.b.c".to_string(), deps(&["a.b.d.X"]));

        let normalized = graph.normalize("a.b");

        assert_eq!(normalized.len(), 1);
        assert_eq!(normalized["c"], deps(&["d"]));
    }

    #[test]
    fn normalize_drops_self_edges_but_keeps_the_entry() {
        let mut graph = DependencyGraph::new();
        graph.merge("a.b.c".to_string(), deps(&["a.b.c.Helper"]));

        let normalized = graph.normalize("a.b");

        assert!(normalized["c"].is_empty());
    }

    #[test]
    fn normalize_excludes_the_root_itself() {
        let mut graph = DependencyGraph::new();
        graph.merge("a.b".to_string(), deps(&["a.b.d.X"]));
        graph.merge("a.b.c".to_string(), deps(&["a.b.d.X"]));

        let normalized = graph.normalize("a.b");

        assert!(!normalized.contains_key("b"));
        assert_eq!(normalized.keys().collect::<Vec<_>>(), vec!["c"]);
    }

    #[test]
    fn normalize_drops_dependencies_outside_the_root() {
        let mut graph = DependencyGraph::new();
        graph.merge(
            "a.b.c".to_string(),
            deps(&["a.b.d.X", "org.restlet.resource.Get"]),
        );

        let normalized = graph.normalize("a.b");

        assert_eq!(normalized["c"], deps(&["d"]));
    }

    #[test]
    fn normalize_skips_packages_outside_the_root() {
        let mut graph = DependencyGraph::new();
        graph.merge("x.y".to_string(), deps(&["a.b.d.X"]));

        let normalized = graph.normalize("a.b");

        assert!(normalized.is_empty());
    }
}
