//! Tree rendering command.

use std::path::Path;

use conntree_core::config::TreeSettings;
use conntree_core::document::load_document;
use conntree_core::tracing::span_names;
use conntree_core::tree::{TreeNode, TreeOptions, build_forest};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::format::{format_json, format_text};

/// Parameters for the tree command
pub struct TreeParams<'a> {
    pub file: &'a Path,
    pub data_source: Option<&'a str>,
    pub no_connections: bool,
    pub no_sharing_profiles: bool,
    pub expanded: bool,
    pub sort: bool,
    pub filter: Option<&'a str>,
    pub format: OutputFormat,
}

/// Tree command handler
pub fn cmd_tree(settings: &TreeSettings, params: &TreeParams<'_>) -> Result<(), CliError> {
    let _span =
        conntree_core::trace_operation!(span_names::TREE_RENDER, file = %params.file.display())
            .entered();
    let forest = build_output(settings, params)?;

    match params.format {
        OutputFormat::Text => println!("{}", format_text(&forest)),
        OutputFormat::Json => println!("{}", format_json(&forest)?),
    }

    Ok(())
}

/// Loads the document and builds the forest to print
///
/// Command-line flags can only narrow what the settings include.
pub fn build_output(
    settings: &TreeSettings,
    params: &TreeParams<'_>,
) -> Result<Vec<TreeNode>, CliError> {
    let document = load_document(params.file)?;
    let default_data_source = params
        .data_source
        .unwrap_or(settings.default_data_source.as_str());

    let mut sources = document.into_sources(default_data_source);
    if let Some(data_source) = params.data_source {
        sources.retain(|name, _| name == data_source);
        if sources.is_empty() {
            return Err(CliError::DataSourceNotFound(data_source.to_string()));
        }
    }

    let options = tree_options(settings, params);
    let mut forest = build_forest(&sources, &options);
    tracing::info!(roots = forest.len(), "Built connection tree");

    if settings.sort || params.sort {
        forest.iter_mut().for_each(TreeNode::sort_by_weight);
    }

    if let Some(query) = params.filter {
        forest = forest
            .iter()
            .filter_map(|root| root.filtered(query))
            .collect();
    }

    Ok(forest)
}

fn tree_options(settings: &TreeSettings, params: &TreeParams<'_>) -> TreeOptions {
    let base = settings.tree_options();
    let include_connections = base.include_connections && !params.no_connections;
    let include_sharing_profiles = base.include_sharing_profiles && !params.no_sharing_profiles;
    let expanded = base.expanded || params.expanded;

    base.with_connections(include_connections)
        .with_sharing_profiles(include_sharing_profiles)
        .with_expanded(expanded)
}
