//! Human-readable views: the flattened tree and root-to-module paths.

use std::collections::{HashMap, HashSet};

use ivyscan_core::coordinate::ModuleCoordinate;

use crate::flatten::FlatRecord;
use crate::registry::Registry;

/// Render flattened records as a tree under `root`.
///
/// Each record appears once, under the parent it was recorded with.
/// Children keep record order. Nodes deeper than `max_depth` are cut off.
pub fn render_tree(
    records: &[FlatRecord],
    root: &ModuleCoordinate,
    max_depth: Option<usize>,
) -> String {
    let mut children: HashMap<&ModuleCoordinate, Vec<&FlatRecord>> = HashMap::new();
    for record in records {
        let parent = record.parent.as_ref().unwrap_or(root);
        children.entry(parent).or_default().push(record);
    }

    let mut output = format!("{root}\n");
    let top = children.get(root).cloned().unwrap_or_default();
    let count = top.len();
    for (i, record) in top.into_iter().enumerate() {
        render_subtree(&mut output, record, &children, "", i == count - 1, 1, max_depth);
    }
    output
}

fn render_subtree(
    output: &mut String,
    record: &FlatRecord,
    children: &HashMap<&ModuleCoordinate, Vec<&FlatRecord>>,
    prefix: &str,
    is_last: bool,
    depth: usize,
    max_depth: Option<usize>,
) {
    let connector = if is_last { "└── " } else { "├── " };
    output.push_str(&format!("{prefix}{connector}{}", record.coordinate));
    if record.is_dev {
        output.push_str(" (dev)");
    }
    if !record.resolved {
        output.push_str(" (unresolved)");
    }
    output.push('\n');

    if max_depth.is_some_and(|max| depth >= max) {
        return;
    }

    let Some(kids) = children.get(&record.coordinate) else {
        return;
    };
    let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
    let count = kids.len();
    for (i, kid) in kids.iter().enumerate() {
        render_subtree(
            output,
            kid,
            children,
            &child_prefix,
            i == count - 1,
            depth + 1,
            max_depth,
        );
    }
}

/// Whether `coord` is what the user meant by `target`.
///
/// Accepts `group:name:version`, `group:name`, or a bare name.
fn matches_target(coord: &ModuleCoordinate, target: &str) -> bool {
    match target.matches(':').count() {
        2 => coord.to_string() == target,
        1 => coord.key() == target,
        _ => coord.name.as_deref() == Some(target),
    }
}

/// First path from `root` to a module matching `target` through the registry.
///
/// The returned path starts with `root` and ends with the match.
pub fn find_path(
    registry: &Registry<'_>,
    root: &ModuleCoordinate,
    target: &str,
) -> Option<Vec<ModuleCoordinate>> {
    let mut path = Vec::new();
    let mut visited = HashSet::new();
    if dfs_path(registry, root, target, &mut path, &mut visited) {
        Some(path)
    } else {
        None
    }
}

fn dfs_path(
    registry: &Registry<'_>,
    current: &ModuleCoordinate,
    target: &str,
    path: &mut Vec<ModuleCoordinate>,
    visited: &mut HashSet<ModuleCoordinate>,
) -> bool {
    path.push(current.clone());
    if path.len() > 1 && matches_target(current, target) {
        return true;
    }
    // A module that failed once fails again, so it stays visited.
    if !visited.insert(current.clone()) {
        path.pop();
        return false;
    }
    for edge in registry.children(current) {
        if dfs_path(registry, &edge.coordinate(), target, path, visited) {
            return true;
        }
    }
    path.pop();
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Classifier;
    use crate::flatten::flatten;
    use crate::test_support::{coord, node, report};

    const ROOT: &str = "com.acme:app:1.0";

    fn sample() -> ivyscan_core::report::ResolveReport {
        report(
            ROOT,
            &["default", "test"],
            vec![
                node("org1:a:1.0").caller(ROOT).conf("default", &["*"]).build(),
                node("org1:b:2.0").caller(ROOT).conf("test", &["*"]).build(),
                node("org1:c:3.0")
                    .caller("org1:a:1.0")
                    .conf("default", &["*"])
                    .build(),
                node("org2:d:4.0")
                    .caller("org1:c:3.0")
                    .conf("default", &["*"])
                    .problem()
                    .build(),
            ],
        )
    }

    #[test]
    fn renders_nested_tree() {
        let r = sample();
        let registry = Registry::build(&r, &Classifier::standard(&r.configurations));
        let records = flatten(&coord(ROOT), &registry);
        let tree = render_tree(&records, &coord(ROOT), None);
        assert_eq!(
            tree,
            "com.acme:app:1.0\n\
             ├── org1:a:1.0\n\
             │   └── org1:c:3.0\n\
             │       └── org2:d:4.0 (unresolved)\n\
             └── org1:b:2.0 (dev)\n"
        );
    }

    #[test]
    fn depth_limit_cuts_subtrees() {
        let r = sample();
        let registry = Registry::build(&r, &Classifier::standard(&r.configurations));
        let records = flatten(&coord(ROOT), &registry);
        let tree = render_tree(&records, &coord(ROOT), Some(1));
        assert!(tree.contains("org1:a:1.0"));
        assert!(!tree.contains("org1:c:3.0"));
    }

    #[test]
    fn empty_tree_is_just_root() {
        assert_eq!(render_tree(&[], &coord(ROOT), None), "com.acme:app:1.0\n");
    }

    #[test]
    fn find_path_by_full_and_partial_keys() {
        let r = sample();
        let registry = Registry::build(&r, &Classifier::standard(&r.configurations));
        let root = coord(ROOT);

        let full = find_path(&registry, &root, "org2:d:4.0").unwrap();
        let shown: Vec<String> = full.iter().map(|c| c.to_string()).collect();
        assert_eq!(
            shown,
            ["com.acme:app:1.0", "org1:a:1.0", "org1:c:3.0", "org2:d:4.0"]
        );

        assert_eq!(find_path(&registry, &root, "org1:c").unwrap().len(), 3);
        assert_eq!(find_path(&registry, &root, "b").unwrap().len(), 2);
    }

    #[test]
    fn find_path_missing() {
        let r = sample();
        let registry = Registry::build(&r, &Classifier::standard(&r.configurations));
        assert!(find_path(&registry, &coord(ROOT), "org9:none").is_none());
    }

    #[test]
    fn find_path_survives_cycles() {
        let r = report(
            ROOT,
            &[],
            vec![
                node("org1:a:1.0").caller(ROOT).caller("org1:b:1.0").build(),
                node("org1:b:1.0").caller("org1:a:1.0").build(),
            ],
        );
        let registry = Registry::build(&r, &Classifier::standard(&r.configurations));
        assert!(find_path(&registry, &coord(ROOT), "missing").is_none());
        assert_eq!(find_path(&registry, &coord(ROOT), "b").unwrap().len(), 3);
    }
}
