//! Depth-first flattening of the registry into a deduplicated record list.

use std::collections::HashSet;

use ivyscan_core::coordinate::ModuleCoordinate;

use crate::registry::{DependencyEdge, Registry};

/// One line of the final manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatRecord {
    pub coordinate: ModuleCoordinate,
    pub resolved: bool,
    pub is_dev: bool,
    pub parent: Option<ModuleCoordinate>,
}

/// Flatten everything reachable from `root` into a list with each coordinate
/// at most once.
///
/// Edges are visited in registry insertion order, depth first. A coordinate
/// reachable through several parents keeps the first edge that reached it,
/// and cycles end at the first repeated coordinate. The root itself is never
/// listed.
pub fn flatten(root: &ModuleCoordinate, registry: &Registry<'_>) -> Vec<FlatRecord> {
    let mut out = Vec::new();
    let mut seen = HashSet::new();
    flatten_into(registry.children(root), root, registry, &mut seen, &mut out);
    out
}

fn flatten_into(
    edges: &[DependencyEdge<'_>],
    root: &ModuleCoordinate,
    registry: &Registry<'_>,
    seen: &mut HashSet<ModuleCoordinate>,
    out: &mut Vec<FlatRecord>,
) {
    for edge in edges {
        let coord = edge.coordinate();
        if coord == *root || !seen.insert(coord.clone()) {
            continue;
        }
        out.push(FlatRecord {
            coordinate: coord.clone(),
            resolved: !edge.node.has_problem,
            is_dev: edge.is_dev,
            parent: edge.parent.clone(),
        });
        flatten_into(registry.children(&coord), root, registry, seen, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Classifier;
    use crate::test_support::{coord, node, report};
    use ivyscan_core::report::ResolveReport;

    const ROOT: &str = "com.acme:app:1.0";

    fn run(r: &ResolveReport) -> Vec<FlatRecord> {
        let registry = Registry::build(r, &Classifier::standard(&r.configurations));
        flatten(&coord(ROOT), &registry)
    }

    fn names(records: &[FlatRecord]) -> Vec<String> {
        records.iter().map(|r| r.coordinate.to_string()).collect()
    }

    #[test]
    fn depth_first_in_insertion_order() {
        let r = report(
            ROOT,
            &[],
            vec![
                node("org1:a:1.0").caller(ROOT).build(),
                node("org1:b:1.0").caller(ROOT).build(),
                node("org1:a1:1.0").caller("org1:a:1.0").build(),
                node("org1:b1:1.0").caller("org1:b:1.0").build(),
                node("org1:a2:1.0").caller("org1:a:1.0").build(),
            ],
        );
        assert_eq!(
            names(&run(&r)),
            ["org1:a:1.0", "org1:a1:1.0", "org1:a2:1.0", "org1:b:1.0", "org1:b1:1.0"]
        );
    }

    #[test]
    fn diamond_keeps_first_parent() {
        let r = report(
            ROOT,
            &[],
            vec![
                node("org1:a:1.0").caller(ROOT).build(),
                node("org1:b:1.0").caller(ROOT).build(),
                node("org1:x:1.0")
                    .caller("org1:a:1.0")
                    .caller("org1:b:1.0")
                    .build(),
            ],
        );
        let records = run(&r);
        let xs: Vec<&FlatRecord> = records
            .iter()
            .filter(|r| r.coordinate == coord("org1:x:1.0"))
            .collect();
        assert_eq!(xs.len(), 1);
        assert_eq!(xs[0].parent, Some(coord("org1:a:1.0")));
    }

    #[test]
    fn cycle_terminates_without_duplicates() {
        let r = report(
            ROOT,
            &[],
            vec![
                node("org1:a:1.0").caller(ROOT).caller("org1:b:1.0").build(),
                node("org1:b:1.0").caller("org1:a:1.0").build(),
            ],
        );
        assert_eq!(names(&run(&r)), ["org1:a:1.0", "org1:b:1.0"]);
    }

    #[test]
    fn self_dependency_listed_once() {
        let r = report(
            ROOT,
            &[],
            vec![node("org1:a:1.0").caller(ROOT).caller("org1:a:1.0").build()],
        );
        assert_eq!(names(&run(&r)), ["org1:a:1.0"]);
    }

    #[test]
    fn root_never_listed() {
        let r = report(ROOT, &[], vec![node(ROOT).build()]);
        let mut registry = Registry::new();
        registry.add_edge(
            coord(ROOT),
            DependencyEdge {
                node: &r.dependencies[0],
                parent: Some(coord(ROOT)),
                is_dev: false,
            },
        );
        assert!(flatten(&coord(ROOT), &registry).is_empty());
    }

    #[test]
    fn evicted_subtree_excluded() {
        let r = report(
            ROOT,
            &[],
            vec![
                node("org1:a:1.0").caller(ROOT).build(),
                node("org1:old:0.9").caller(ROOT).evicted().build(),
                node("org1:only-via-old:1.0").caller("org1:old:0.9").build(),
            ],
        );
        assert_eq!(names(&run(&r)), ["org1:a:1.0"]);
    }

    #[test]
    fn leaf_contributes_single_record() {
        let r = report(ROOT, &[], vec![node("org1:a:1.0").caller(ROOT).build()]);
        let records = run(&r);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].parent, Some(coord(ROOT)));
        assert!(records[0].resolved);
    }

    #[test]
    fn problem_node_is_unresolved() {
        let r = report(
            ROOT,
            &[],
            vec![node("org1:broken:1.0").caller(ROOT).problem().build()],
        );
        assert!(!run(&r)[0].resolved);
    }

    #[test]
    fn orphan_node_is_invisible() {
        let r = report(
            ROOT,
            &[],
            vec![
                node("org1:a:1.0").caller(ROOT).build(),
                node("org1:orphan:1.0").build(),
            ],
        );
        assert_eq!(names(&run(&r)), ["org1:a:1.0"]);
    }

    #[test]
    fn empty_when_root_has_no_edges() {
        let r = report(ROOT, &[], vec![node("org1:orphan:1.0").build()]);
        assert!(run(&r).is_empty());
    }

    #[test]
    fn scenario_runtime_and_test_children() {
        let r = report(
            ROOT,
            &["default", "runtime", "test"],
            vec![
                node("org1:a:1.0")
                    .caller(ROOT)
                    .caller("org1:b:2.0")
                    .conf("runtime", &["default"])
                    .build(),
                node("org1:b:2.0").caller(ROOT).conf("test", &["default"]).build(),
            ],
        );
        let records = run(&r);
        assert_eq!(names(&records), ["org1:a:1.0", "org1:b:2.0"]);
        assert!(!records[0].is_dev);
        assert!(records[1].is_dev);
        assert_eq!(records[0].parent, Some(coord(ROOT)));
        assert_eq!(records[1].parent, Some(coord(ROOT)));
    }
}
