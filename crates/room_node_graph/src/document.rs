// SPDX-License-Identifier: MIT OR Apache-2.0
//! Serializable snapshot of a room graph.
//!
//! The document carries every field needed to rebuild a graph: node IDs,
//! type IDs, both edge lists and canvas placement. The registry and
//! settings are supplied separately when rehydrating.

use crate::graph::{GraphError, RoomGraph};
use crate::integrity;
use crate::node::RoomNode;
use crate::room_type::RoomTypeRegistry;
use crate::settings::GraphSettings;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Current document format version
pub const DOCUMENT_FORMAT_VERSION: u32 = 1;

/// On-disk form of a room graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomGraphDocument {
    /// Version for format compatibility
    pub version: u32,
    /// Graph name
    pub name: String,
    /// Nodes in graph order
    pub nodes: Vec<RoomNode>,
}

impl RoomGraphDocument {
    /// Serialize to RON format
    pub fn to_ron(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }

    /// Deserialize from RON format
    pub fn from_ron(s: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(s)
    }

    /// Save document to file
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let ron_str = self.to_ron().map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, ron_str)
    }

    /// Load document from file
    pub fn load(path: &Path) -> std::io::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_ron(&contents).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }
}

impl RoomGraph {
    /// Snapshot the graph
    pub fn to_document(&self) -> RoomGraphDocument {
        RoomGraphDocument {
            version: DOCUMENT_FORMAT_VERSION,
            name: self.name.clone(),
            nodes: self.nodes().cloned().collect(),
        }
    }

    /// Rebuild a graph from a document.
    ///
    /// Duplicate IDs, unknown room types and any broken invariant are
    /// rejected; nothing is repaired.
    pub fn from_document(
        document: RoomGraphDocument,
        registry: Arc<RoomTypeRegistry>,
        settings: GraphSettings,
    ) -> Result<Self, GraphError> {
        let mut graph = RoomGraph::new(document.name, registry, settings)?;
        for node in document.nodes {
            graph.insert_unchecked(node)?;
        }
        integrity::check(&graph)?;
        tracing::debug!(
            "Rehydrated room graph {:?} with {} nodes and {} edges",
            graph.name,
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}
