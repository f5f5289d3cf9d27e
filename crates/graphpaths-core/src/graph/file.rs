//! Graph definition files
//!
//! A graph file lists nodes and weighted edges in TOML, JSON or YAML. The
//! format is picked from the file extension:
//!
//! ```toml
//! directed = true
//! nodes = ["lonely"]
//!
//! [[edges]]
//! from = "a"
//! to = "b"
//! weight = 3
//! ```

use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::config::GraphDefaults;
use crate::error::{GraphError, Result};
use crate::graph::datasource::{Edge, GraphsDatasource};
use crate::graph::memory::{GraphBuilder, MutableGraph};
use crate::trace_time;

/// Serialization format of a graph file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFileFormat {
    Toml,
    Json,
    Yaml,
}

impl GraphFileFormat {
    pub const SUPPORTED: &'static str = "toml, json, yaml, yml";

    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "toml" => Ok(GraphFileFormat::Toml),
            "json" => Ok(GraphFileFormat::Json),
            "yaml" | "yml" => Ok(GraphFileFormat::Yaml),
            "" => Err(GraphError::unsupported(
                "graph file extension",
                "(none)",
                Self::SUPPORTED,
            )),
            other => Err(GraphError::unsupported(
                "graph file extension",
                other,
                Self::SUPPORTED,
            )),
        }
    }
}

impl fmt::Display for GraphFileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphFileFormat::Toml => write!(f, "toml"),
            GraphFileFormat::Json => write!(f, "json"),
            GraphFileFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// One edge as written in a graph file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u64>,
}

/// Parsed graph file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphDocument {
    /// Falls back to the configured default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directed: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_self_loops: Option<bool>,

    /// Nodes to add even if no edge touches them
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<String>,

    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

impl GraphDocument {
    /// Load a graph file, choosing the parser from its extension
    #[tracing::instrument(fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let start = Instant::now();
        let format = GraphFileFormat::from_path(path)?;
        let content = fs::read_to_string(path)?;
        let document = Self::parse(&content, format, path)?;

        trace_time!(
            start,
            "graph_file_loaded",
            nodes = document.nodes.len(),
            edges = document.edges.len()
        );
        Ok(document)
    }

    /// Parse `content` as `format`; `path` is only used in error messages
    pub fn parse(content: &str, format: GraphFileFormat, path: &Path) -> Result<Self> {
        let document: GraphDocument = match format {
            GraphFileFormat::Toml => {
                toml::from_str(content).map_err(|e| GraphError::invalid_graph_file(path, e))?
            }
            GraphFileFormat::Json => serde_json::from_str(content)
                .map_err(|e| GraphError::invalid_graph_file(path, e))?,
            GraphFileFormat::Yaml => serde_yaml::from_str(content)
                .map_err(|e| GraphError::invalid_graph_file(path, e))?,
        };
        document.validate(path)?;
        Ok(document)
    }

    /// Serialize the document in `format`
    pub fn to_string_as(&self, format: GraphFileFormat) -> Result<String> {
        match format {
            GraphFileFormat::Toml => {
                toml::to_string_pretty(self).map_err(|e| GraphError::Other(e.to_string()))
            }
            GraphFileFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            GraphFileFormat::Yaml => Ok(serde_yaml::to_string(self)?),
        }
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if let Some(node) = self.nodes.iter().find(|n| n.trim().is_empty()) {
            return Err(GraphError::invalid_graph_file(
                path,
                format!("empty node id {:?}", node),
            ));
        }
        for (index, edge) in self.edges.iter().enumerate() {
            if edge.from.trim().is_empty() || edge.to.trim().is_empty() {
                return Err(GraphError::invalid_graph_file(
                    path,
                    format!("edge {} has an empty endpoint", index + 1),
                ));
            }
        }
        Ok(())
    }

    /// Edge list with missing weights set to `default_weight`
    pub fn into_datasource(self, default_weight: u64) -> GraphsDatasource<String, u64> {
        GraphsDatasource::new(
            self.edges
                .into_iter()
                .map(|e| Edge::with_value(e.from, e.to, e.weight.unwrap_or(default_weight)))
                .collect(),
        )
    }

    /// Build the weighted graph described by this document.
    ///
    /// `directed` overrides both the file and `defaults`. Listed nodes come
    /// first in node order, followed by nodes first seen on an edge.
    pub fn build(
        self,
        defaults: &GraphDefaults,
        directed: Option<bool>,
    ) -> Result<MutableGraph<String, u64>> {
        let directed = directed.or(self.directed).unwrap_or(defaults.directed);
        let allows_self_loops = self.allow_self_loops.unwrap_or(defaults.allow_self_loops);
        let builder = if directed {
            GraphBuilder::directed()
        } else {
            GraphBuilder::undirected()
        };
        let mut graph = builder.allows_self_loops(allows_self_loops).build();

        for node in &self.nodes {
            graph.add_node(node.clone());
        }
        let datasource = self.into_datasource(defaults.default_weight);
        for edge in datasource.edges() {
            graph.put_edge_value(edge.node1.clone(), edge.node2.clone(), edge.value)?;
        }

        tracing::debug!(
            directed,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "graph built"
        );
        Ok(graph)
    }
}
