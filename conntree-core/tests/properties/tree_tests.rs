//! Property-based tests for tree construction
//!
//! Shapes are generated randomly and the built trees are checked against the
//! entity graph they came from.

use std::rc::Rc;

use conntree_core::{
    Connection, ConnectionGroup, ConnectionGroupType, NodeKind, SharingProfile, TreeNode,
    TreeOptions,
};
use proptest::prelude::*;

// ========== Strategies ==========

fn arb_name() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_ -]{0,12}"
}

fn arb_protocol() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("ssh".to_string()),
        Just("rdp".to_string()),
        Just("vnc".to_string()),
        Just("telnet".to_string()),
    ]
}

fn arb_group_type() -> impl Strategy<Value = ConnectionGroupType> {
    prop_oneof![
        Just(ConnectionGroupType::Organizational),
        Just(ConnectionGroupType::Balancing),
    ]
}

fn arb_profile() -> impl Strategy<Value = SharingProfile> {
    (arb_name(), arb_name()).prop_map(|(id, name)| SharingProfile::new(id, name))
}

fn arb_connection() -> impl Strategy<Value = Connection> {
    (
        arb_name(),
        arb_name(),
        arb_protocol(),
        prop::option::of(0u32..50),
        prop::option::of(prop::collection::vec(arb_profile(), 0..4)),
    )
        .prop_map(|(id, name, protocol, active, profiles)| {
            let mut conn = Connection::new(id, name, protocol);
            conn.set_active_connections(active);
            conn.sharing_profiles = profiles.map(|p| p.into_iter().map(Rc::new).collect());
            conn
        })
}

fn arb_group() -> impl Strategy<Value = ConnectionGroup> {
    let leaf = (
        arb_name(),
        arb_group_type(),
        prop::option::of(prop::collection::vec(arb_connection(), 0..4)),
    )
        .prop_map(|(name, group_type, connections)| {
            let mut group = ConnectionGroup::new(name.clone(), name).with_type(group_type);
            group.child_connections =
                connections.map(|c| c.into_iter().map(Rc::new).collect());
            group
        });

    leaf.prop_recursive(3, 32, 3, |inner| {
        (
            arb_name(),
            arb_group_type(),
            prop::collection::vec(arb_connection(), 0..3),
            prop::collection::vec(inner, 0..3),
        )
            .prop_map(|(name, group_type, connections, groups)| {
                let mut group = ConnectionGroup::new(name.clone(), name).with_type(group_type);
                group.child_connections = Some(connections.into_iter().map(Rc::new).collect());
                group.child_connection_groups = Some(groups.into_iter().map(Rc::new).collect());
                group
            })
    })
}

fn arb_options() -> impl Strategy<Value = TreeOptions> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(conns, profiles, expanded)| {
        TreeOptions::new()
            .with_connections(conns)
            .with_sharing_profiles(profiles)
            .with_expanded(expanded)
    })
}

// ========== Helpers ==========

fn expected_node_count(group: &ConnectionGroup, options: &TreeOptions) -> usize {
    let connections = if options.include_connections {
        group
            .connections()
            .iter()
            .map(|c| {
                1 + if options.include_sharing_profiles {
                    c.sharing_profiles().len()
                } else {
                    0
                }
            })
            .sum()
    } else {
        0
    };

    let groups: usize = group
        .groups()
        .iter()
        .map(|g| expected_node_count(g, options))
        .sum();

    1 + connections + groups
}

fn check_group_node(node: &TreeNode, group: &ConnectionGroup, options: &TreeOptions) {
    assert_eq!(node.kind(), NodeKind::ConnectionGroup);
    assert!(node.is_expandable());
    assert_eq!(node.is_balancing(), group.group_type == ConnectionGroupType::Balancing);
    assert_eq!(node.protocol(), None);
    assert_eq!(node.identifier(), group.identifier);

    let connection_count = if options.include_connections {
        group.connections().len()
    } else {
        0
    };
    assert_eq!(node.children().len(), connection_count + group.groups().len());

    let (conn_nodes, group_nodes) = node.children().split_at(connection_count);
    for (child, conn) in conn_nodes.iter().zip(group.connections()) {
        assert_eq!(child.kind(), NodeKind::Connection);
        assert_eq!(child.identifier(), conn.identifier);
        assert_eq!(child.protocol(), Some(conn.protocol.as_str()));
    }
    for (child, sub) in group_nodes.iter().zip(group.groups()) {
        check_group_node(child, sub, options);
    }
}

// ========== Properties ==========

proptest! {
    #[test]
    fn connection_children_match_profiles(conn in arb_connection()) {
        let conn = Rc::new(conn);
        let node = TreeNode::from_connection("ds", &conn, &TreeOptions::default());

        prop_assert!(node.is_expandable());
        prop_assert_eq!(node.children().len(), conn.sharing_profiles().len());
        for (child, profile) in node.children().iter().zip(conn.sharing_profiles()) {
            prop_assert_eq!(child.kind(), NodeKind::SharingProfile);
            prop_assert_eq!(child.identifier(), profile.identifier.as_str());
            prop_assert_eq!(child.client_identifier(), None);
            prop_assert_eq!(child.active_connections(), None);
        }
    }

    #[test]
    fn excluded_profiles_leave_connection_empty(conn in arb_connection()) {
        let conn = Rc::new(conn);
        let options = TreeOptions::new().with_sharing_profiles(false);
        let node = TreeNode::from_connection("ds", &conn, &options);

        prop_assert!(node.children().is_empty());
        prop_assert!(!node.is_expandable());
    }

    #[test]
    fn group_tree_mirrors_entities(group in arb_group(), options in arb_options()) {
        let group = Rc::new(group);
        let node = TreeNode::from_connection_group("ds", &group, &options);

        check_group_node(&node, &group, &options);
        prop_assert_eq!(node.node_count(), expected_node_count(&group, &options));
        prop_assert!(node.iter().all(|n| n.is_expanded() == options.expanded));
        prop_assert!(node.iter().all(|n| n.data_source() == "ds"));
    }

    #[test]
    fn live_count_follows_entity(conn in arb_connection(), updates in prop::collection::vec(prop::option::of(0u32..100), 1..6)) {
        let conn = Rc::new(conn);
        let node = TreeNode::from_connection("ds", &conn, &TreeOptions::default());

        prop_assert_eq!(node.active_connections(), conn.active_connections());
        for update in updates {
            conn.set_active_connections(update);
            prop_assert_eq!(node.active_connections(), update);
        }
    }

    #[test]
    fn counter_always_wins(group in arb_group(), fixed in 0u32..1000, entity_value in 0u32..1000) {
        let group = Rc::new(group);
        let options = TreeOptions::new()
            .with_connection_counter(move |_, _| Some(fixed))
            .with_group_counter(move |_, _| Some(fixed));
        let node = TreeNode::from_connection_group("ds", &group, &options);

        group.set_active_connections(Some(entity_value));
        for n in node.iter() {
            match n.kind() {
                NodeKind::SharingProfile => prop_assert_eq!(n.active_connections(), None),
                _ => prop_assert_eq!(n.active_connections(), Some(fixed)),
            }
        }
    }

    #[test]
    fn group_counter_sees_each_group(group in arb_group()) {
        let group = Rc::new(group);
        let options = TreeOptions::new().with_group_counter(|ds, g| {
            (ds == "ldap").then(|| u32::try_from(g.name.len()).unwrap_or(u32::MAX))
        });
        let node = TreeNode::from_connection_group("ldap", &group, &options);

        for n in node.iter().filter(|n| n.kind() == NodeKind::ConnectionGroup) {
            let entity = n.entity().as_connection_group().unwrap();
            prop_assert_eq!(&entity.name, n.name());
            prop_assert_eq!(n.active_connections(), u32::try_from(n.name().len()).ok());
        }
    }

    #[test]
    fn sorting_keeps_node_count(group in arb_group()) {
        let group = Rc::new(group);
        let mut node = TreeNode::from_connection_group("ds", &group, &TreeOptions::default());
        let before = node.node_count();

        node.sort_by_weight();
        prop_assert_eq!(node.node_count(), before);
        for n in node.iter() {
            let names: Vec<String> = n.children().iter().map(|c| c.name().to_lowercase()).collect();
            let mut sorted = names.clone();
            sorted.sort();
            prop_assert_eq!(names, sorted);
        }
    }

    #[test]
    fn filtered_tree_only_contains_matches_or_ancestors(group in arb_group(), query in "[a-z]{1,2}") {
        let group = Rc::new(group);
        let node = TreeNode::from_connection_group("ds", &group, &TreeOptions::default());

        if let Some(filtered) = node.filtered(&query) {
            prop_assert!(filtered.node_count() <= node.node_count());
            let any_match = filtered.iter().any(|n| {
                n.name().to_lowercase().contains(&query)
                    || n.protocol().is_some_and(|p| p.contains(&query))
            });
            prop_assert!(any_match);
        } else {
            let any_match = node.iter().any(|n| {
                n.name().to_lowercase().contains(&query)
                    || n.protocol().is_some_and(|p| p.contains(&query))
            });
            prop_assert!(!any_match);
        }
    }
}
