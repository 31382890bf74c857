//! End-to-end tests: JSON document on disk to node tree

use std::io::Write;

use conntree_core::{
    ClientIdentifier, ClientIdentifierType, NodeKind, TreeNode, TreeOptions, build_forest,
    load_document,
};
use tempfile::NamedTempFile;

const SINGLE_SOURCE: &str = r#"{
    "identifier": "ROOT",
    "name": "ROOT",
    "type": "ORGANIZATIONAL",
    "childConnectionGroups": [
        {
            "identifier": "3",
            "name": "Production",
            "type": "ORGANIZATIONAL",
            "childConnections": [
                {
                    "identifier": "8",
                    "name": "app-server",
                    "protocol": "ssh",
                    "activeConnections": 1,
                    "sharingProfiles": [
                        {"identifier": "21", "name": "Observe"},
                        {"identifier": "22", "name": "Collaborate"}
                    ]
                }
            ]
        }
    ]
}"#;

const MULTI_SOURCE: &str = r#"{
    "postgresql": {
        "identifier": "ROOT",
        "name": "ROOT",
        "childConnections": [
            {"identifier": "1", "name": "db-console", "protocol": "vnc"}
        ]
    },
    "ldap": {
        "identifier": "ROOT",
        "name": "ROOT",
        "childConnectionGroups": [
            {"identifier": "pool", "name": "Web pool", "type": "BALANCING", "activeConnections": 4}
        ]
    }
}"#;

fn write_document(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(json.as_bytes())
        .expect("Failed to write document");
    file
}

#[test]
fn test_two_level_tree_has_four_nodes() {
    let file = write_document(
        r#"{
            "identifier": "g",
            "name": "Group",
            "childConnections": [{
                "identifier": "c",
                "name": "Connection",
                "protocol": "rdp",
                "sharingProfiles": [
                    {"identifier": "p1", "name": "One"},
                    {"identifier": "p2", "name": "Two"}
                ]
            }]
        }"#,
    );

    let sources = load_document(file.path()).unwrap().into_sources("mysql");
    let forest = build_forest(&sources, &TreeOptions::default());

    assert_eq!(forest.len(), 1);
    assert_eq!(forest[0].node_count(), 4);
}

#[test]
fn test_single_source_document() {
    let file = write_document(SINGLE_SOURCE);
    let sources = load_document(file.path()).unwrap().into_sources("mysql");
    let root = TreeNode::from_connection_group("mysql", &sources["mysql"], &TreeOptions::default());

    let production = &root.children()[0];
    assert_eq!(production.name(), "Production");
    assert_eq!(production.kind(), NodeKind::ConnectionGroup);

    let app = &production.children()[0];
    assert_eq!(app.protocol(), Some("ssh"));
    assert_eq!(app.active_connections(), Some(1));

    let profiles: Vec<&str> = app.children().iter().map(TreeNode::name).collect();
    assert_eq!(profiles, ["Observe", "Collaborate"]);

    let identifier = ClientIdentifier::decode(&app.client_identifier().unwrap()).unwrap();
    assert_eq!(
        identifier,
        ClientIdentifier::new("mysql", ClientIdentifierType::Connection, "8")
    );
}

#[test]
fn test_multi_source_document_builds_forest() {
    let file = write_document(MULTI_SOURCE);
    let sources = load_document(file.path()).unwrap().into_sources("unused");
    let forest = build_forest(&sources, &TreeOptions::default());

    let data_sources: Vec<&str> = forest.iter().map(TreeNode::data_source).collect();
    assert_eq!(data_sources, ["ldap", "postgresql"]);

    let pool = forest[0]
        .find_by_identifier(&NodeKind::ConnectionGroup, "pool")
        .unwrap();
    assert!(pool.is_balancing());
    assert_eq!(pool.active_connections(), Some(4));

    let console = forest[1]
        .find_by_identifier(&NodeKind::Connection, "1")
        .unwrap();
    assert_eq!(console.data_source(), "postgresql");
    assert!(console.children().is_empty());
    assert!(console.is_expandable());
}

#[test]
fn test_counts_refresh_after_build() {
    let file = write_document(SINGLE_SOURCE);
    let sources = load_document(file.path()).unwrap().into_sources("mysql");
    let root = TreeNode::from_connection_group("mysql", &sources["mysql"], &TreeOptions::default());

    let app = root
        .find_by_identifier(&NodeKind::Connection, "8")
        .unwrap();
    let entity = app.entity().as_connection().unwrap();

    entity.set_active_connections(Some(6));
    assert_eq!(app.active_connections(), Some(6));
}

#[test]
fn test_filtered_document_tree() {
    let file = write_document(SINGLE_SOURCE);
    let sources = load_document(file.path()).unwrap().into_sources("mysql");
    let root = TreeNode::from_connection_group("mysql", &sources["mysql"], &TreeOptions::default());

    let filtered = root.filtered("collab").unwrap();
    let names: Vec<&str> = filtered.iter().map(TreeNode::name).collect();
    assert_eq!(names, ["ROOT", "Production", "app-server", "Collaborate"]);
}
