use ivyscan_core::coordinate::ModuleCoordinate;
use ivyscan_core::usage::UsageManifest;

const MANIFEST: &str = r#"{"RegisterUsage": [
{"gav": {"g": "d0g", "a": "d0a", "v": "0.0.0"}, "DevelopmentDependency": false, "resolved": false},
{"gav": {"g": "d1g", "a": "d1a", "v": "1.1.1"}, "DevelopmentDependency": true, "resolved": true},
{"gav": {"g": "d2g", "a": "d2a", "v": "2.2.2"}, "DevelopmentDependency": false, "resolved": true},
{"gav": {"g": "d3g", "a": "d3a", "v": "3.3.3"}, "DevelopmentDependency": false, "resolved": true, "parent_gav": {"g": "d2g", "a": "d2a", "v": "2.2.2"}}
]
}
"#;

fn coord(s: &str) -> ModuleCoordinate {
    ModuleCoordinate::parse(s).unwrap()
}

#[test]
fn parse_manifest_entries() {
    let manifest = UsageManifest::parse_json(MANIFEST).unwrap();
    assert_eq!(manifest.len(), 4);
    assert!(manifest.register_usage[0].parent_gav.is_none());
    assert_eq!(
        manifest.register_usage[3].parent_gav.as_ref().unwrap().a.as_deref(),
        Some("d2a")
    );
}

#[test]
fn parse_empty_manifest() {
    let manifest = UsageManifest::parse_json("{\"RegisterUsage\": [\n]\n}\n").unwrap();
    assert!(manifest.is_empty());
}

#[test]
fn parse_rejects_garbage() {
    let err = UsageManifest::parse_json("{\"RegisterUsage\": 3}").unwrap_err();
    assert!(err.to_string().contains("Invalid usage manifest"), "got: {err}");
}

#[test]
fn record_registers_resolved_components_only() {
    let recording = UsageManifest::parse_json(MANIFEST).unwrap().record().unwrap();
    assert_eq!(recording.components.len(), 3);
    assert_eq!(recording.parse_failures, [coord("d0g:d0a:0.0.0")]);
}

#[test]
fn record_builds_parent_edges_and_flags() {
    let recording = UsageManifest::parse_json(MANIFEST).unwrap().record().unwrap();

    let d1 = recording.component(&coord("d1g:d1a:1.1.1")).unwrap();
    assert!(d1.explicit);
    assert!(d1.dev);
    assert!(d1.dependencies.is_empty());

    let d2 = recording.component(&coord("d2g:d2a:2.2.2")).unwrap();
    assert!(d2.explicit);
    assert!(!d2.dev);
    assert_eq!(
        d2.dependencies.iter().collect::<Vec<_>>(),
        [&coord("d3g:d3a:3.3.3")]
    );

    let d3 = recording.component(&coord("d3g:d3a:3.3.3")).unwrap();
    assert!(!d3.explicit);
    assert!(!d3.dev);

    let explicit: Vec<String> = recording.explicit_components().map(|c| c.to_string()).collect();
    assert_eq!(explicit, ["d1g:d1a:1.1.1", "d2g:d2a:2.2.2"]);
}

#[test]
fn record_merges_dev_flag_with_and() {
    let json = r#"{"RegisterUsage": [
{"gav": {"g": "p", "a": "p", "v": "1"}, "DevelopmentDependency": true, "resolved": true},
{"gav": {"g": "x", "a": "x", "v": "1"}, "DevelopmentDependency": true, "resolved": true},
{"gav": {"g": "x", "a": "x", "v": "1"}, "DevelopmentDependency": false, "resolved": true, "parent_gav": {"g": "p", "a": "p", "v": "1"}}
]}"#;
    let recording = UsageManifest::parse_json(json).unwrap().record().unwrap();
    let x = recording.component(&coord("x:x:1")).unwrap();
    assert!(!x.dev);
    assert!(x.explicit);
}

#[test]
fn record_rejects_unknown_parent() {
    let json = r#"{"RegisterUsage": [
{"gav": {"g": "x", "a": "x", "v": "1"}, "DevelopmentDependency": false, "resolved": true, "parent_gav": {"g": "p", "a": "p", "v": "1"}}
]}"#;
    let err = UsageManifest::parse_json(json).unwrap().record().unwrap_err();
    assert!(err.to_string().contains("was not registered"), "got: {err}");
}

#[test]
fn record_tolerates_unresolved_parent() {
    let json = r#"{"RegisterUsage": [
{"gav": {"g": "p", "a": "p", "v": "1"}, "DevelopmentDependency": false, "resolved": false},
{"gav": {"g": "x", "a": "x", "v": "1"}, "DevelopmentDependency": false, "resolved": true, "parent_gav": {"g": "p", "a": "p", "v": "1"}}
]}"#;
    let recording = UsageManifest::parse_json(json).unwrap().record().unwrap();
    assert!(recording.component(&coord("x:x:1")).is_some());
    assert_eq!(recording.parse_failures.len(), 1);
}
