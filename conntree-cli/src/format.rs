//! Rendering of node trees for terminal and JSON output.

use std::fmt::Write as _;

use conntree_core::tree::TreeNode;
use serde::Serialize;

use crate::error::CliError;

/// Formats a forest as indented text, one node per line
#[must_use]
pub fn format_text(forest: &[TreeNode]) -> String {
    if forest.is_empty() {
        return "No connections found.".to_string();
    }

    let mut output = String::new();
    for root in forest {
        let _ = writeln!(output, "{}:", root.data_source());
        for (depth, node) in root.descendants() {
            let indent = "  ".repeat(depth + 1);
            let _ = writeln!(output, "{indent}{} [{}]", node.name(), describe(node));
        }
    }

    output.trim_end().to_string()
}

fn describe(node: &TreeNode) -> String {
    let mut parts = vec![node.kind().to_string()];
    if let Some(protocol) = node.protocol() {
        parts.push(format!("protocol={protocol}"));
    }
    if node.is_balancing() {
        parts.push("balancing".to_string());
    }
    if let Some(active) = node.active_connections() {
        parts.push(format!("active={active}"));
    }
    parts.join(", ")
}

/// Formats a forest as pretty-printed JSON
///
/// # Errors
///
/// Returns `CliError::Output` if JSON serialization fails.
pub fn format_json(forest: &[TreeNode]) -> Result<String, CliError> {
    let output: Vec<NodeOutput> = forest.iter().map(NodeOutput::from).collect();
    serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::Output(format!("Failed to serialize to JSON: {e}")))
}

/// Serializable snapshot of a node and its subtree
///
/// Accessors are evaluated once, at the time the snapshot is taken.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeOutput {
    pub data_source: String,
    pub identifier: String,
    pub name: String,
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    pub expandable: bool,
    pub balancing: bool,
    pub expanded: bool,
    pub weight: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_connections: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_identifier: Option<String>,
    pub children: Vec<NodeOutput>,
}

impl From<&TreeNode> for NodeOutput {
    fn from(node: &TreeNode) -> Self {
        Self {
            data_source: node.data_source().to_string(),
            identifier: node.identifier().to_string(),
            name: node.name().to_string(),
            kind: node.kind().to_string(),
            protocol: node.protocol().map(str::to_string),
            expandable: node.is_expandable(),
            balancing: node.is_balancing(),
            expanded: node.is_expanded(),
            weight: node.weight(),
            active_connections: node.active_connections(),
            client_identifier: node.client_identifier(),
            children: node.children().iter().map(Self::from).collect(),
        }
    }
}
