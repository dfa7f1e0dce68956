// SPDX-License-Identifier: MIT OR Apache-2.0
//! Connection (edge) definitions for the room graph.

use crate::node::RoomNodeId;
use serde::{Deserialize, Serialize};

/// A directed parent→child edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connection {
    /// Parent node ID
    pub parent: RoomNodeId,
    /// Child node ID
    pub child: RoomNodeId,
}

impl Connection {
    /// Create a new connection
    pub fn new(parent: RoomNodeId, child: RoomNodeId) -> Self {
        Self { parent, child }
    }

    /// Check if this connection involves a specific node
    pub fn involves_node(&self, node_id: RoomNodeId) -> bool {
        self.parent == node_id || self.child == node_id
    }
}

/// Reason a proposed connection was refused
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConnectionError {
    /// Endpoint does not exist
    #[error("Room node not found: {0}")]
    NodeNotFound(RoomNodeId),

    /// Endpoint's room type is not in the registry
    #[error("Unknown room type: {0}")]
    UnknownRoomType(String),

    /// Child has not been assigned a room type yet
    #[error("Child room has no type assigned")]
    ChildUnassigned,

    /// Self-loop not allowed
    #[error("Self-loop not allowed")]
    SelfLoop,

    /// Edge already exists in either direction
    #[error("Rooms are already connected")]
    AlreadyConnected,

    /// Child already has a parent
    #[error("Child room already has a parent")]
    ChildHasParent,

    /// The entrance cannot be a child
    #[error("Entrance cannot be a child")]
    ChildIsEntrance,

    /// Both endpoints are corridors, or neither is
    #[error("Connection must join a corridor and a room")]
    CorridorAlternation,

    /// Parent already has the maximum number of corridor children
    #[error("Parent already has {0} corridor children")]
    CorridorLimit(usize),

    /// A boss room is already connected
    #[error("A boss room is already connected")]
    BossRoomPlaced,

    /// Parent already has a child and the child is not a corridor
    #[error("Parent already has a child room")]
    ParentOccupied,

    /// Child is an ancestor of the parent
    #[error("Connection would create a cycle")]
    WouldCycle,
}

impl ConnectionError {
    /// Whether the refusal is a caller bug rather than a rule rejection
    pub fn is_misuse(&self) -> bool {
        matches!(self, Self::NodeNotFound(_) | Self::UnknownRoomType(_))
    }
}
