// SPDX-License-Identifier: MIT OR Apache-2.0
//! Whole-graph consistency check.
//!
//! Graphs built only through [`RoomGraph`]'s operations always pass. The
//! check exists for graphs that arrive from elsewhere (a rehydrated
//! document) and for the downstream generator, which relies on every
//! accepted graph being a forest of alternating rooms and corridors.

use crate::graph::RoomGraph;
use crate::node::RoomNodeId;
use std::collections::HashSet;

/// Verify every structural invariant of a room graph.
pub fn check(graph: &RoomGraph) -> Result<(), IntegrityError> {
    let max_corridors = graph.settings().max_child_corridors;
    let mut entrances = 0;
    let mut connected_bosses = 0;

    for node in graph.nodes() {
        let room_type = graph
            .room_type(node)
            .ok_or_else(|| IntegrityError::UnknownRoomType {
                node: node.id,
                room_type: node.room_type.clone(),
            })?;

        for ids in [node.parent_ids(), node.child_ids()] {
            let mut seen = HashSet::new();
            for id in ids {
                if *id == node.id {
                    return Err(IntegrityError::SelfReference(node.id));
                }
                if !seen.insert(*id) {
                    return Err(IntegrityError::DuplicateReference {
                        node: node.id,
                        other: *id,
                    });
                }
                if !graph.contains(*id) {
                    return Err(IntegrityError::DanglingReference {
                        node: node.id,
                        missing: *id,
                    });
                }
            }
        }

        for child_id in node.child_ids() {
            let child = graph.node(*child_id).ok_or(IntegrityError::DanglingReference {
                node: node.id,
                missing: *child_id,
            })?;
            if !child.parent_ids().contains(&node.id) {
                return Err(IntegrityError::AsymmetricEdge {
                    parent: node.id,
                    child: *child_id,
                });
            }
            let child_type = graph.room_type(child).ok_or_else(|| IntegrityError::UnknownRoomType {
                node: child.id,
                room_type: child.room_type.clone(),
            })?;
            if child_type.is_corridor == room_type.is_corridor {
                return Err(IntegrityError::CorridorAlternation {
                    parent: node.id,
                    child: *child_id,
                });
            }
            if !child_type.is_corridor && node.child_ids().len() > 1 {
                return Err(IntegrityError::ParentOccupied(node.id));
            }
        }

        for parent_id in node.parent_ids() {
            let parent_lists_node = graph
                .node(*parent_id)
                .is_some_and(|parent| parent.child_ids().contains(&node.id));
            if !parent_lists_node {
                return Err(IntegrityError::AsymmetricEdge {
                    parent: *parent_id,
                    child: node.id,
                });
            }
        }

        if node.parent_ids().len() > 1 {
            return Err(IntegrityError::MultipleParents(node.id));
        }
        if node.has_parent() && room_type.is_none {
            return Err(IntegrityError::UnassignedChild(node.id));
        }
        if room_type.is_entrance {
            entrances += 1;
            if node.has_parent() {
                return Err(IntegrityError::EntranceHasParent(node.id));
            }
        }
        if room_type.is_boss_room && node.has_parent() {
            connected_bosses += 1;
        }

        let corridors = graph.corridor_child_count(node.id);
        if corridors > max_corridors {
            return Err(IntegrityError::CorridorLimit {
                node: node.id,
                count: corridors,
                max: max_corridors,
            });
        }
        if graph.is_ancestor(node.id, node.id) {
            return Err(IntegrityError::Cycle(node.id));
        }
    }

    if entrances > 1 {
        return Err(IntegrityError::MultipleEntrances(entrances));
    }
    if connected_bosses > 1 {
        return Err(IntegrityError::MultipleBossRooms(connected_bosses));
    }

    Ok(())
}

/// Broken structural invariant
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntegrityError {
    /// Node type missing from the registry
    #[error("Room node {node} has unknown type {room_type}")]
    UnknownRoomType {
        /// Offending node
        node: RoomNodeId,
        /// Its type ID
        room_type: String,
    },

    /// Node lists itself
    #[error("Room node {0} references itself")]
    SelfReference(RoomNodeId),

    /// Same ID listed twice
    #[error("Room node {node} lists {other} more than once")]
    DuplicateReference {
        /// Offending node
        node: RoomNodeId,
        /// Repeated ID
        other: RoomNodeId,
    },

    /// ID not present in the graph
    #[error("Room node {node} references missing node {missing}")]
    DanglingReference {
        /// Offending node
        node: RoomNodeId,
        /// Missing ID
        missing: RoomNodeId,
    },

    /// Edge recorded on only one endpoint
    #[error("Edge {parent} -> {child} is recorded on one side only")]
    AsymmetricEdge {
        /// Parent node
        parent: RoomNodeId,
        /// Child node
        child: RoomNodeId,
    },

    /// Node with more than one parent
    #[error("Room node {0} has more than one parent")]
    MultipleParents(RoomNodeId),

    /// Edge between two corridors or two rooms
    #[error("Edge {parent} -> {child} does not alternate corridor and room")]
    CorridorAlternation {
        /// Parent node
        parent: RoomNodeId,
        /// Child node
        child: RoomNodeId,
    },

    /// Too many corridor children
    #[error("Room node {node} has {count} corridor children (max {max})")]
    CorridorLimit {
        /// Offending node
        node: RoomNodeId,
        /// Corridor children
        count: usize,
        /// Configured maximum
        max: usize,
    },

    /// Room child alongside other children
    #[error("Room node {0} has a room child and other children")]
    ParentOccupied(RoomNodeId),

    /// Unassigned node with a parent
    #[error("Unassigned room node {0} has a parent")]
    UnassignedChild(RoomNodeId),

    /// More than one entrance
    #[error("Graph has {0} entrances")]
    MultipleEntrances(usize),

    /// Entrance is someone's child
    #[error("Entrance {0} has a parent")]
    EntranceHasParent(RoomNodeId),

    /// More than one boss room connected
    #[error("Graph has {0} connected boss rooms")]
    MultipleBossRooms(usize),

    /// Parent chain loops back
    #[error("Room node {0} is its own ancestor")]
    Cycle(RoomNodeId),
}
