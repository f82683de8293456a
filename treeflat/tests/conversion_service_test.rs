//! ConversionService tests against an in-memory filesystem

mod common;

use std::path::Path;
use std::sync::Arc;

use treeflat::application::services::ConversionService;
use treeflat::application::ApplicationError;
use treeflat::config::Settings;
use treeflat::domain::{Comparison, FlatNode, LabelValue, Malformation, TreeNode};

use common::{MemoryFileSystem, ORG_CHART};

fn service(fs: MemoryFileSystem, settings: Settings) -> ConversionService {
    ConversionService::new(Arc::new(fs), Arc::new(settings))
}

#[test]
fn given_org_chart_file_when_round_tripping_then_equal() {
    // Arrange
    let svc = service(
        MemoryFileSystem::new().with_file("chart.json", ORG_CHART),
        Settings::default(),
    );

    // Act
    let nodes: Vec<FlatNode<LabelValue>> = svc.load_flat(Path::new("chart.json")).unwrap();
    let result = svc.round_trip(&nodes).unwrap();

    // Assert
    assert!(result.equal);
    let labels: Vec<String> = result.flattened.iter().map(|n| n.label.to_string()).collect();
    assert_eq!(labels, vec!["1", "2", "5", "6", "3", "4", "7", "8", "9"]);
    assert_eq!(result.tree.map(|t| t.depth()), Some(4));
}

#[test]
fn given_stdin_path_when_loading_then_reads_stdin() {
    let svc = service(
        MemoryFileSystem::new().with_stdin(r#"[{"label": "a", "parent": null}]"#),
        Settings::default(),
    );

    let nodes: Vec<FlatNode<LabelValue>> = svc.load_flat(Path::new("-")).unwrap();

    assert_eq!(nodes, vec![FlatNode::root(LabelValue::from("a"))]);
}

#[test]
fn given_nested_tree_file_when_flattening_then_bfs_list() {
    let svc = service(
        MemoryFileSystem::new().with_file(
            "tree.json",
            r#"{"label": 1, "children": [{"label": 2, "children": [{"label": 3}]}, {"label": 4}]}"#,
        ),
        Settings::default(),
    );

    let tree: Option<TreeNode<i64>> = svc.load_tree(Path::new("tree.json")).unwrap();
    let flat = svc.flatten(tree.as_ref());

    assert_eq!(
        flat,
        vec![
            FlatNode::root(1),
            FlatNode::child(2, 1),
            FlatNode::child(4, 1),
            FlatNode::child(3, 2),
        ]
    );
}

#[test]
fn given_tree_with_text_labels_when_loading_then_mixed_labels_flatten() {
    let svc = service(
        MemoryFileSystem::new().with_file(
            "tree.json",
            r#"{"label": "root", "children": [{"label": 7}, {"label": "leaf"}]}"#,
        ),
        Settings::default(),
    );

    let tree: Option<TreeNode<LabelValue>> =
        svc.load_tree::<LabelValue>(Path::new("tree.json")).unwrap();
    let flat = svc.flatten(tree.as_ref());

    assert_eq!(
        flat,
        vec![
            FlatNode::root(LabelValue::from("root")),
            FlatNode::child(LabelValue::Int(7), LabelValue::from("root")),
            FlatNode::child(LabelValue::from("leaf"), LabelValue::from("root")),
        ]
    );
}

#[test]
fn given_null_tree_file_when_flattening_then_empty() {
    let svc = service(
        MemoryFileSystem::new().with_file("none.json", "null"),
        Settings::default(),
    );

    let tree: Option<TreeNode<i64>> = svc.load_tree(Path::new("none.json")).unwrap();

    assert!(svc.flatten(tree.as_ref()).is_empty());
}

#[test]
fn given_invalid_json_when_loading_then_invalid_input() {
    let svc = service(
        MemoryFileSystem::new().with_file("bad.json", "[{\"label\": 1,"),
        Settings::default(),
    );

    let err = svc.load_flat::<i64>(Path::new("bad.json")).unwrap_err();

    match err {
        ApplicationError::InvalidInput { path, .. } => assert_eq!(path, Path::new("bad.json")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn given_missing_file_when_loading_then_operation_failed() {
    let svc = service(MemoryFileSystem::new(), Settings::default());

    let err = svc.load_flat::<i64>(Path::new("nope.json")).unwrap_err();

    assert!(
        matches!(
            err,
            ApplicationError::OperationFailed { ref context, .. } if context.contains("nope.json")
        ),
        "got {err:?}"
    );
}

#[test]
fn given_strict_settings_when_round_tripping_orphan_then_domain_error() {
    let settings = Settings {
        strict: true,
        ..Settings::default()
    };
    let svc = service(MemoryFileSystem::new(), settings);

    let err = svc
        .round_trip(&[FlatNode::root(1), FlatNode::child(2, 99)])
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Domain(_)));
}

#[test]
fn given_multiset_settings_when_comparing_duplicates_then_counts_matter() {
    let settings = Settings {
        comparison: Comparison::Multiset,
        ..Settings::default()
    };
    let svc = service(MemoryFileSystem::new(), settings);

    let once = vec![FlatNode::root(1), FlatNode::child(2, 1)];
    let twice = vec![FlatNode::root(1), FlatNode::child(2, 1), FlatNode::child(2, 1)];

    assert!(!svc.compare(&once, &twice));
    assert!(svc.compare(&twice, &twice));
}

#[test]
fn given_lenient_settings_when_checking_then_still_reports_defects() {
    let svc = service(MemoryFileSystem::new(), Settings::default());

    let found = svc.check(&[FlatNode::child(2, 1)]);

    assert!(found.contains(&Malformation::MissingRoot));
}

#[test]
fn given_label_arrays_when_intersecting_then_shared_labels() {
    let svc = service(
        MemoryFileSystem::new()
            .with_file("a.json", "[1, 2, \"x\", 3]")
            .with_file("b.json", "[3, \"x\", 4]"),
        Settings::default(),
    );

    let a: Vec<LabelValue> = svc.load_json(Path::new("a.json")).unwrap();
    let b: Vec<LabelValue> = svc.load_json(Path::new("b.json")).unwrap();

    assert_eq!(
        svc.intersect(&a, &b),
        vec![LabelValue::Int(3), LabelValue::from("x")]
    );
}
