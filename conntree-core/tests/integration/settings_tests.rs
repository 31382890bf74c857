//! Settings loaded from disk drive tree building

use std::rc::Rc;

use conntree_core::{
    ConfigError, Connection, ConnectionGroup, SharingProfile, TracingLevel, TreeNode,
    TreeSettings,
};
use tempfile::TempDir;

fn sample_group() -> Rc<ConnectionGroup> {
    Rc::new(
        ConnectionGroup::new("1", "Servers")
            .with_connection(
                Connection::new("10", "web", "ssh")
                    .with_sharing_profile(SharingProfile::new("100", "Shadow")),
            )
            .with_group(ConnectionGroup::new("2", "Nested")),
    )
}

#[test]
fn test_settings_file_controls_options() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        "default_data_source = \"postgresql\"\ninclude_sharing_profiles = false\nexpanded = true\n\n[logging]\nlevel = \"info\"\n",
    )
    .unwrap();

    let settings = TreeSettings::load_or_default(Some(&path)).unwrap();
    assert_eq!(settings.default_data_source, "postgresql");
    assert_eq!(settings.tracing_level(), TracingLevel::Info);

    let node = TreeNode::from_connection_group(
        &settings.default_data_source,
        &sample_group(),
        &settings.tree_options(),
    );
    assert_eq!(node.node_count(), 3);
    assert!(node.is_expanded());
    assert!(!node.children()[0].is_expandable());
}

#[test]
fn test_settings_written_then_read_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.toml");

    let settings = TreeSettings {
        include_connections: false,
        sort: true,
        ..TreeSettings::default()
    };
    std::fs::write(&path, settings.to_toml_string().unwrap()).unwrap();

    let loaded = TreeSettings::load(&path).unwrap();
    assert_eq!(loaded, settings);

    let node = TreeNode::from_connection_group("ds", &sample_group(), &loaded.tree_options());
    assert_eq!(node.children().len(), 1);
    assert_eq!(node.children()[0].name(), "Nested");
}

#[test]
fn test_explicit_missing_settings_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let err = TreeSettings::load_or_default(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound(_)));
}

#[test]
fn test_invalid_settings_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "include_connections = \"yes\"").unwrap();

    let err = TreeSettings::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}
