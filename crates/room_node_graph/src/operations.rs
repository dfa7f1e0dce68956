// SPDX-License-Identifier: MIT OR Apache-2.0
//! Editing operations built on top of [`RoomGraph`].
//!
//! These are the actions an editor front end exposes in its context menu
//! and type picker. Selection is owned by the caller and passed in as a
//! predicate.

use crate::graph::{GraphError, RoomGraph};
use crate::node::{RoomNode, RoomNodeId};

/// Place the entrance node.
pub fn create_entrance(graph: &mut RoomGraph, position: [f32; 2]) -> Result<RoomNodeId, GraphError> {
    let entrance = graph.registry().entrance().id.clone();
    create_node(graph, position, &entrance)
}

/// Place a node of the given room type.
pub fn create_node(
    graph: &mut RoomGraph,
    position: [f32; 2],
    room_type: &str,
) -> Result<RoomNodeId, GraphError> {
    let [width, height] = graph.settings().default_node_size;
    let node = RoomNode::new(room_type)
        .with_position(position[0], position[1])
        .with_size(width, height);
    graph.insert_node(node)
}

/// The "Create Room Node" action: an unassigned node at `position`.
///
/// On an empty graph the entrance is placed first, to the left of the new
/// node. Returns the ID of the unassigned node.
pub fn create_room_node(graph: &mut RoomGraph, position: [f32; 2]) -> Result<RoomNodeId, GraphError> {
    if graph.is_empty() {
        let offset = graph.settings().entrance_offset;
        create_entrance(graph, [position[0] + offset, position[1]])?;
    }
    let none = graph.registry().none_type().id.clone();
    create_node(graph, position, &none)
}

/// Delete every edge whose parent and child are both selected.
///
/// Returns the number of edges removed.
pub fn delete_selected_edges(
    graph: &mut RoomGraph,
    is_selected: impl Fn(&RoomNode) -> bool,
) -> usize {
    let doomed: Vec<(RoomNodeId, RoomNodeId)> = graph
        .nodes()
        .filter(|node| is_selected(node))
        .flat_map(|node| {
            node.child_ids()
                .iter()
                .filter(|child_id| graph.node(**child_id).is_some_and(&is_selected))
                .map(move |child_id| (node.id, *child_id))
        })
        .collect();

    doomed
        .into_iter()
        .filter(|(parent, child)| graph.disconnect(*parent, *child))
        .count()
}

/// Delete every selected node except the entrance, severing its edges.
///
/// Returns the removed nodes.
pub fn delete_selected_nodes(
    graph: &mut RoomGraph,
    is_selected: impl Fn(&RoomNode) -> bool,
) -> Vec<RoomNode> {
    let entrance = graph.entrance_id();
    let doomed: Vec<RoomNodeId> = graph
        .nodes()
        .filter(|node| Some(node.id) != entrance && is_selected(node))
        .map(|node| node.id)
        .collect();

    let mut removed = Vec::with_capacity(doomed.len());
    for node_id in doomed {
        match graph.delete_node(node_id) {
            Ok(node) => removed.push(node),
            Err(e) => tracing::warn!("Failed to delete room node {}: {}", node_id, e),
        }
    }
    removed
}

/// Assign a new room type from the editor's type picker.
///
/// Only an unparented node other than the entrance may change type; for any
/// other node this returns `Ok(false)`. Switching between corridor and room,
/// or turning a node into a boss room, severs all of its child edges since
/// they would no longer be valid.
pub fn change_room_type(
    graph: &mut RoomGraph,
    node_id: RoomNodeId,
    room_type: &str,
) -> Result<bool, GraphError> {
    let node = graph.node(node_id).ok_or(GraphError::NodeNotFound(node_id))?;
    let current = graph
        .room_type(node)
        .ok_or_else(|| GraphError::UnknownRoomType(node.room_type.clone()))?;
    let next = graph
        .registry()
        .get(room_type)
        .ok_or_else(|| GraphError::UnknownRoomType(room_type.to_string()))?;

    if node.has_parent() || current.is_entrance {
        return Ok(false);
    }
    if current.id == next.id {
        return Ok(false);
    }
    if next.is_entrance && graph.entrance_id().is_some() {
        return Err(GraphError::EntranceAlreadyPlaced);
    }

    let sever = current.is_corridor != next.is_corridor || (next.is_boss_room && !current.is_boss_room);
    let next_id = next.id.clone();

    if sever {
        let children = graph.disconnect_children(node_id);
        if !children.is_empty() {
            tracing::debug!("Severed {} child edges of {}", children.len(), node_id);
        }
    }
    graph.set_room_type(node_id, &next_id);
    Ok(true)
}

/// Pan the canvas by moving every node.
pub fn drag_all(graph: &mut RoomGraph, delta: [f32; 2]) {
    graph.move_all(delta);
}
