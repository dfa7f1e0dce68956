// SPDX-License-Identifier: MIT OR Apache-2.0
//! Room node definitions for the dungeon layout graph.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a room node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomNodeId(pub Uuid);

impl RoomNodeId {
    /// Create a new random node ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RoomNodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RoomNodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Default node size on the canvas
pub const DEFAULT_NODE_SIZE: [f32; 2] = [160.0, 75.0];

/// A room (or corridor segment) in the layout graph.
///
/// Edges are stored on both endpoints as ID lists with set semantics. The
/// list mutators here never check graph-level validity; that is the job of
/// [`RoomGraph`](crate::RoomGraph).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomNode {
    /// Unique instance ID
    pub id: RoomNodeId,
    /// Room type ID in the registry
    pub room_type: String,
    /// Parent nodes (at most one in a valid graph)
    parent_ids: Vec<RoomNodeId>,
    /// Child nodes
    child_ids: Vec<RoomNodeId>,
    /// Top-left corner on the canvas
    pub position: [f32; 2],
    /// Width and height on the canvas
    pub size: [f32; 2],
}

impl RoomNode {
    /// Create an unconnected node of the given type
    pub fn new(room_type: impl Into<String>) -> Self {
        Self {
            id: RoomNodeId::new(),
            room_type: room_type.into(),
            parent_ids: Vec::new(),
            child_ids: Vec::new(),
            position: [0.0, 0.0],
            size: DEFAULT_NODE_SIZE,
        }
    }

    /// Set the position
    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.position = [x, y];
        self
    }

    /// Set the size
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.size = [width, height];
        self
    }

    /// Use a caller-supplied ID
    pub fn with_id(mut self, id: RoomNodeId) -> Self {
        self.id = id;
        self
    }

    /// Parent IDs
    pub fn parent_ids(&self) -> &[RoomNodeId] {
        &self.parent_ids
    }

    /// Child IDs
    pub fn child_ids(&self) -> &[RoomNodeId] {
        &self.child_ids
    }

    /// Whether this node has a parent
    pub fn has_parent(&self) -> bool {
        !self.parent_ids.is_empty()
    }

    /// Whether this node has children
    pub fn has_children(&self) -> bool {
        !self.child_ids.is_empty()
    }

    /// Append a child ID. Returns false if already present or self.
    pub fn add_child(&mut self, id: RoomNodeId) -> bool {
        Self::insert_unique(&mut self.child_ids, self.id, id)
    }

    /// Append a parent ID. Returns false if already present or self.
    pub fn add_parent(&mut self, id: RoomNodeId) -> bool {
        Self::insert_unique(&mut self.parent_ids, self.id, id)
    }

    /// Remove a child ID, reporting whether it was present
    pub fn remove_child(&mut self, id: RoomNodeId) -> bool {
        Self::remove_id(&mut self.child_ids, id)
    }

    /// Remove a parent ID, reporting whether it was present
    pub fn remove_parent(&mut self, id: RoomNodeId) -> bool {
        Self::remove_id(&mut self.parent_ids, id)
    }

    /// Drop every child ID, returning them
    pub(crate) fn take_children(&mut self) -> Vec<RoomNodeId> {
        std::mem::take(&mut self.child_ids)
    }

    /// Translate the node on the canvas
    pub fn move_by(&mut self, delta: [f32; 2]) {
        self.position[0] += delta[0];
        self.position[1] += delta[1];
    }

    /// Center of the node's rect
    pub fn center(&self) -> [f32; 2] {
        [
            self.position[0] + self.size[0] * 0.5,
            self.position[1] + self.size[1] * 0.5,
        ]
    }

    /// Hit test against the node's rect
    pub fn rect_contains(&self, point: [f32; 2]) -> bool {
        point[0] >= self.position[0]
            && point[0] < self.position[0] + self.size[0]
            && point[1] >= self.position[1]
            && point[1] < self.position[1] + self.size[1]
    }

    fn insert_unique(ids: &mut Vec<RoomNodeId>, own: RoomNodeId, id: RoomNodeId) -> bool {
        if id == own || ids.contains(&id) {
            return false;
        }
        ids.push(id);
        true
    }

    fn remove_id(ids: &mut Vec<RoomNodeId>, id: RoomNodeId) -> bool {
        match ids.iter().position(|existing| *existing == id) {
            Some(index) => {
                ids.remove(index);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_child_is_set_like() {
        let mut node = RoomNode::new("corridor");
        let child = RoomNodeId::new();
        assert!(node.add_child(child));
        assert!(!node.add_child(child));
        assert_eq!(node.child_ids(), &[child]);
    }

    #[test]
    fn test_add_parent_rejects_duplicates() {
        let mut node = RoomNode::new("small_room");
        let parent = RoomNodeId::new();
        assert!(node.add_parent(parent));
        assert!(!node.add_parent(parent));
        assert_eq!(node.parent_ids().len(), 1);
    }

    #[test]
    fn test_never_lists_itself() {
        let mut node = RoomNode::new("small_room");
        let own = node.id;
        assert!(!node.add_child(own));
        assert!(!node.add_parent(own));
        assert!(!node.has_children());
        assert!(!node.has_parent());
    }

    #[test]
    fn test_remove_reports_presence() {
        let mut node = RoomNode::new("corridor");
        let a = RoomNodeId::new();
        let b = RoomNodeId::new();
        node.add_child(a);
        node.add_child(b);
        assert!(node.remove_child(a));
        assert!(!node.remove_child(a));
        assert_eq!(node.child_ids(), &[b]);
        assert!(!node.remove_parent(b));
    }

    #[test]
    fn test_move_and_hit_test() {
        let mut node = RoomNode::new("small_room").with_position(10.0, 20.0);
        node.move_by([5.0, -5.0]);
        assert_eq!(node.position, [15.0, 15.0]);
        assert_eq!(node.center(), [95.0, 52.5]);
        assert!(node.rect_contains([15.0, 15.0]));
        assert!(!node.rect_contains([175.0, 15.0]));
    }
}
