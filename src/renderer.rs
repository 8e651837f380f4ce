use crate::dependency_graph::NormalizedGraph;

/// Serialize the normalized graph as a Graphviz digraph: one tab-indented
/// edge per line, a blank line closing each source's block. Identifiers are
/// emitted as-is. Iteration over sorted maps makes the document byte-stable
/// for a given graph.
pub fn render_dot(graph: &NormalizedGraph) -> String {
    let mut dot = String::from("digraph DepGraph {\n");

    for (pkg, deps) in graph {
        for dep in deps {
            dot.push('\t');
            dot.push_str(pkg);
            dot.push_str("->");
            dot.push_str(dep);
            dot.push('\n');
        }
        dot.push('\n');
    }

    dot.push('}');
    dot
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn targets(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn renders_single_edge() {
        let mut graph = NormalizedGraph::new();
        graph.insert("c".to_string(), targets(&["d"]));

        assert_eq!(render_dot(&graph), "digraph DepGraph {\n\tc->d\n\n}");
    }

    #[test]
    fn renders_empty_graph() {
        assert_eq!(render_dot(&NormalizedGraph::new()), "digraph DepGraph {\n}");
    }

    #[test]
    fn source_with_no_targets_still_emits_its_blank_line() {
        let mut graph = NormalizedGraph::new();
        graph.insert("c".to_string(), BTreeSet::new());

        assert_eq!(render_dot(&graph), "digraph DepGraph {\n\n}");
    }

    #[test]
    fn sources_and_targets_come_out_in_lexicographic_order() {
        let mut graph = NormalizedGraph::new();
        graph.insert("web".to_string(), targets(&["model", "common"]));
        graph.insert("common".to_string(), targets(&["model"]));

        assert_eq!(
            render_dot(&graph),
            "digraph DepGraph {\n\
             \tcommon->model\n\
             \n\
             \tweb->common\n\
             \tweb->model\n\
             \n\
             }"
        );
    }

    #[test]
    fn rendering_is_deterministic() {
        let mut graph = NormalizedGraph::new();
        graph.insert("web".to_string(), targets(&["model", "common"]));
        graph.insert("common".to_string(), targets(&["model"]));

        assert_eq!(render_dot(&graph), render_dot(&graph));
    }
}
