// SPDX-License-Identifier: MIT OR Apache-2.0
//! Room graph containing nodes and the connection-validity engine.

use crate::connection::{Connection, ConnectionError};
use crate::node::{RoomNode, RoomNodeId};
use crate::room_type::{RoomType, RoomTypeRegistry};
use crate::settings::{GraphSettings, SettingsError};
use indexmap::IndexMap;
use std::sync::Arc;

/// A dungeon room layout graph.
///
/// The node map doubles as the ID index, so every node is reachable by ID
/// in O(1) and the set and the index can never disagree. Edges live on the
/// nodes themselves as ID lists and are always updated on both endpoints.
#[derive(Debug, Clone)]
pub struct RoomGraph {
    /// Graph name
    pub name: String,
    /// Nodes in insertion order, keyed by ID
    nodes: IndexMap<RoomNodeId, RoomNode>,
    /// Room type catalog
    registry: Arc<RoomTypeRegistry>,
    /// Tunables
    settings: GraphSettings,
}

impl RoomGraph {
    /// Create a new empty graph.
    ///
    /// Settings are validated here so an out-of-range limit is reported as a
    /// configuration error instead of surfacing as rejected connections.
    pub fn new(
        name: impl Into<String>,
        registry: Arc<RoomTypeRegistry>,
        settings: GraphSettings,
    ) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self {
            name: name.into(),
            nodes: IndexMap::new(),
            registry,
            settings,
        })
    }

    /// Room type catalog
    pub fn registry(&self) -> &RoomTypeRegistry {
        &self.registry
    }

    /// Shared handle to the room type catalog
    pub fn registry_handle(&self) -> Arc<RoomTypeRegistry> {
        Arc::clone(&self.registry)
    }

    /// Graph settings
    pub fn settings(&self) -> &GraphSettings {
        &self.settings
    }

    /// Add an unconnected node to the graph.
    ///
    /// The node must have a fresh ID, a registered room type and no edges.
    /// At most one entrance may be placed.
    pub fn insert_node(&mut self, node: RoomNode) -> Result<RoomNodeId, GraphError> {
        if node.has_parent() || node.has_children() {
            return Err(GraphError::NodeAlreadyConnected(node.id));
        }
        let room_type = self
            .registry
            .get(&node.room_type)
            .ok_or_else(|| GraphError::UnknownRoomType(node.room_type.clone()))?;
        if room_type.is_entrance && self.entrance_id().is_some() {
            return Err(GraphError::EntranceAlreadyPlaced);
        }
        self.insert_unchecked(node)
    }

    /// Insert without edge or entrance checks; used by rehydration, which
    /// verifies the whole graph afterwards.
    pub(crate) fn insert_unchecked(&mut self, node: RoomNode) -> Result<RoomNodeId, GraphError> {
        if self.nodes.contains_key(&node.id) {
            tracing::warn!("Rejected duplicate room node {}", node.id);
            return Err(GraphError::DuplicateNode(node.id));
        }
        if self.registry.get(&node.room_type).is_none() {
            return Err(GraphError::UnknownRoomType(node.room_type));
        }
        let id = node.id;
        tracing::debug!("Added room node {} ({})", id, node.room_type);
        self.nodes.insert(id, node);
        Ok(id)
    }

    /// Delete a node after severing every edge that references it.
    ///
    /// The entrance can never be deleted.
    pub fn delete_node(&mut self, node_id: RoomNodeId) -> Result<RoomNode, GraphError> {
        let node = self
            .nodes
            .get(&node_id)
            .ok_or(GraphError::NodeNotFound(node_id))?;
        if self.room_type(node).is_some_and(|t| t.is_entrance) {
            tracing::warn!("Refused to delete entrance node {}", node_id);
            return Err(GraphError::EntranceNotDeletable);
        }

        let children = node.child_ids().to_vec();
        let parents = node.parent_ids().to_vec();

        for child_id in children {
            if let Some(child) = self.nodes.get_mut(&child_id) {
                child.remove_parent(node_id);
            }
        }
        for parent_id in parents {
            if let Some(parent) = self.nodes.get_mut(&parent_id) {
                parent.remove_child(node_id);
            }
        }

        let removed = self
            .nodes
            .shift_remove(&node_id)
            .ok_or(GraphError::NodeNotFound(node_id))?;
        tracing::debug!("Deleted room node {}", node_id);
        Ok(removed)
    }

    /// Get a node by ID
    pub fn node(&self, node_id: RoomNodeId) -> Option<&RoomNode> {
        self.nodes.get(&node_id)
    }

    /// Whether a node exists
    pub fn contains(&self, node_id: RoomNodeId) -> bool {
        self.nodes.contains_key(&node_id)
    }

    /// Get all nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &RoomNode> {
        self.nodes.values()
    }

    /// Get all node IDs
    pub fn node_ids(&self) -> impl Iterator<Item = RoomNodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// Get the number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All parent→child edges
    pub fn edges(&self) -> impl Iterator<Item = Connection> + '_ {
        self.nodes.values().flat_map(|node| {
            node.child_ids()
                .iter()
                .map(move |child| Connection::new(node.id, *child))
        })
    }

    /// Get the number of edges
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|node| node.child_ids().len()).sum()
    }

    /// Resolve a node's room type
    pub fn room_type(&self, node: &RoomNode) -> Option<&RoomType> {
        self.registry.get(&node.room_type)
    }

    /// Resolve a node's room type by node ID
    pub fn room_type_of(&self, node_id: RoomNodeId) -> Option<&RoomType> {
        self.node(node_id).and_then(|node| self.room_type(node))
    }

    /// The entrance node, if placed
    pub fn entrance_id(&self) -> Option<RoomNodeId> {
        self.nodes
            .values()
            .find(|node| self.room_type(node).is_some_and(|t| t.is_entrance))
            .map(|node| node.id)
    }

    /// Whether a boss room already has a parent
    pub fn boss_room_placed(&self) -> bool {
        self.nodes
            .values()
            .any(|node| node.has_parent() && self.room_type(node).is_some_and(|t| t.is_boss_room))
    }

    /// Number of corridor children of a node
    pub fn corridor_child_count(&self, node_id: RoomNodeId) -> usize {
        self.node(node_id).map_or(0, |node| {
            node.child_ids()
                .iter()
                .filter(|child| self.room_type_of(**child).is_some_and(|t| t.is_corridor))
                .count()
        })
    }

    /// Whether `ancestor` is reachable by walking up from `node_id`
    pub fn is_ancestor(&self, ancestor: RoomNodeId, node_id: RoomNodeId) -> bool {
        let mut current = node_id;
        // Bounded so a corrupted graph cannot spin forever
        for _ in 0..self.nodes.len() {
            let Some(parent) = self.node(current).and_then(|n| n.parent_ids().first().copied())
            else {
                return false;
            };
            if parent == ancestor {
                return true;
            }
            current = parent;
        }
        false
    }

    /// First node whose rect contains a canvas point
    pub fn node_at(&self, point: [f32; 2]) -> Option<RoomNodeId> {
        self.nodes
            .values()
            .find(|node| node.rect_contains(point))
            .map(|node| node.id)
    }

    /// Translate a node on the canvas
    pub fn move_node(&mut self, node_id: RoomNodeId, delta: [f32; 2]) -> bool {
        match self.nodes.get_mut(&node_id) {
            Some(node) => {
                node.move_by(delta);
                true
            }
            None => false,
        }
    }

    /// Translate every node on the canvas
    pub fn move_all(&mut self, delta: [f32; 2]) {
        for node in self.nodes.values_mut() {
            node.move_by(delta);
        }
    }

    /// Decide whether `parent → child` may be added, without mutating.
    pub fn check_connection(
        &self,
        parent_id: RoomNodeId,
        child_id: RoomNodeId,
    ) -> Result<(), ConnectionError> {
        let child = self
            .nodes
            .get(&child_id)
            .ok_or(ConnectionError::NodeNotFound(child_id))?;
        let parent = self
            .nodes
            .get(&parent_id)
            .ok_or(ConnectionError::NodeNotFound(parent_id))?;
        let child_type = self
            .room_type(child)
            .ok_or_else(|| ConnectionError::UnknownRoomType(child.room_type.clone()))?;
        let parent_type = self
            .room_type(parent)
            .ok_or_else(|| ConnectionError::UnknownRoomType(parent.room_type.clone()))?;

        if child_type.is_none {
            return Err(ConnectionError::ChildUnassigned);
        }
        if parent_id == child_id {
            return Err(ConnectionError::SelfLoop);
        }
        if parent.child_ids().contains(&child_id)
            || child.parent_ids().contains(&parent_id)
            || parent.parent_ids().contains(&child_id)
        {
            return Err(ConnectionError::AlreadyConnected);
        }
        if child.has_parent() {
            return Err(ConnectionError::ChildHasParent);
        }
        if child_type.is_entrance {
            return Err(ConnectionError::ChildIsEntrance);
        }
        if child_type.is_corridor == parent_type.is_corridor {
            return Err(ConnectionError::CorridorAlternation);
        }

        let max = self.settings.max_child_corridors;
        if child_type.is_corridor && self.corridor_child_count(parent_id) >= max {
            return Err(ConnectionError::CorridorLimit(max));
        }
        if child_type.is_boss_room && self.boss_room_placed() {
            return Err(ConnectionError::BossRoomPlaced);
        }
        if !child_type.is_corridor && parent.has_children() {
            return Err(ConnectionError::ParentOccupied);
        }
        if self.is_ancestor(child_id, parent_id) {
            return Err(ConnectionError::WouldCycle);
        }

        Ok(())
    }

    /// Add `parent → child` if every rule holds.
    ///
    /// Validation runs to completion before either endpoint is touched.
    pub fn connect(
        &mut self,
        parent_id: RoomNodeId,
        child_id: RoomNodeId,
    ) -> Result<Connection, ConnectionError> {
        self.check_connection(parent_id, child_id)?;

        if let Some(parent) = self.nodes.get_mut(&parent_id) {
            parent.add_child(child_id);
        }
        if let Some(child) = self.nodes.get_mut(&child_id) {
            child.add_parent(parent_id);
        }

        tracing::debug!("Connected {} -> {}", parent_id, child_id);
        Ok(Connection::new(parent_id, child_id))
    }

    /// Add `parent → child` if every rule holds.
    ///
    /// A rule rejection is ordinary feedback and yields `Ok(false)`; an
    /// unknown endpoint is a caller bug and yields an error.
    pub fn try_connect(
        &mut self,
        parent_id: RoomNodeId,
        child_id: RoomNodeId,
    ) -> Result<bool, GraphError> {
        match self.connect(parent_id, child_id) {
            Ok(_) => Ok(true),
            Err(misuse) if misuse.is_misuse() => {
                tracing::warn!("Cannot connect {} -> {}: {}", parent_id, child_id, misuse);
                Err(misuse.into())
            }
            Err(rejection) => {
                tracing::trace!("Rejected {} -> {}: {}", parent_id, child_id, rejection);
                Ok(false)
            }
        }
    }

    /// Remove `parent → child` from both endpoints. Idempotent.
    pub fn disconnect(&mut self, parent_id: RoomNodeId, child_id: RoomNodeId) -> bool {
        let removed_child = self
            .nodes
            .get_mut(&parent_id)
            .is_some_and(|parent| parent.remove_child(child_id));
        let removed_parent = self
            .nodes
            .get_mut(&child_id)
            .is_some_and(|child| child.remove_parent(parent_id));

        if removed_child || removed_parent {
            tracing::debug!("Disconnected {} -> {}", parent_id, child_id);
        }
        removed_child || removed_parent
    }

    /// Remove every outgoing edge of a node, returning the former children
    pub fn disconnect_children(&mut self, node_id: RoomNodeId) -> Vec<RoomNodeId> {
        let children = self
            .nodes
            .get_mut(&node_id)
            .map(RoomNode::take_children)
            .unwrap_or_default();
        for child_id in &children {
            if let Some(child) = self.nodes.get_mut(child_id) {
                child.remove_parent(node_id);
            }
        }
        children
    }

    /// Reassign a node's room type without any checks on its edges
    pub(crate) fn set_room_type(&mut self, node_id: RoomNodeId, room_type: &str) -> bool {
        match self.nodes.get_mut(&node_id) {
            Some(node) => {
                node.room_type = room_type.to_string();
                true
            }
            None => false,
        }
    }
}

/// Error from a graph operation that indicates a caller bug
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// Node not found
    #[error("Room node not found: {0}")]
    NodeNotFound(RoomNodeId),

    /// Node ID already in the graph
    #[error("Duplicate room node: {0}")]
    DuplicateNode(RoomNodeId),

    /// Inserted node already carries edges
    #[error("Room node {0} already has connections")]
    NodeAlreadyConnected(RoomNodeId),

    /// Room type not in the registry
    #[error("Unknown room type: {0}")]
    UnknownRoomType(String),

    /// The entrance can never be deleted
    #[error("The entrance room cannot be deleted")]
    EntranceNotDeletable,

    /// The graph already has an entrance
    #[error("An entrance room is already placed")]
    EntranceAlreadyPlaced,

    /// Connection refused by a validity rule
    #[error("Connection refused: {0}")]
    Rejected(ConnectionError),

    /// Settings out of range
    #[error("Invalid graph settings: {0}")]
    Settings(#[from] SettingsError),

    /// Rehydrated graph violates an invariant
    #[error("Inconsistent room graph: {0}")]
    Integrity(#[from] crate::integrity::IntegrityError),
}

impl From<ConnectionError> for GraphError {
    fn from(error: ConnectionError) -> Self {
        match error {
            ConnectionError::NodeNotFound(id) => Self::NodeNotFound(id),
            ConnectionError::UnknownRoomType(room_type) => Self::UnknownRoomType(room_type),
            rejection => Self::Rejected(rejection),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn test_graph(max_child_corridors: usize) -> RoomGraph {
        RoomGraph::new(
            "Test",
            Arc::new(RoomTypeRegistry::dungeon_defaults()),
            GraphSettings::default().with_max_child_corridors(max_child_corridors),
        )
        .unwrap()
    }

    pub(crate) fn add(graph: &mut RoomGraph, room_type: &str) -> RoomNodeId {
        graph.insert_node(RoomNode::new(room_type)).unwrap()
    }

    #[test]
    fn test_scenario_entrance_to_corridor() {
        let mut graph = test_graph(3);
        let entrance = add(&mut graph, "entrance");
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);

        let corridor = add(&mut graph, "corridor");
        assert_eq!(graph.node_count(), 2);

        assert!(graph.try_connect(entrance, corridor).unwrap());
        assert_eq!(graph.node(entrance).unwrap().child_ids(), &[corridor]);
        assert_eq!(graph.node(corridor).unwrap().parent_ids(), &[entrance]);
    }

    #[test]
    fn test_scenario_corridor_fan_out() {
        let mut graph = test_graph(1);
        let entrance = add(&mut graph, "entrance");
        let first = add(&mut graph, "corridor");
        let second = add(&mut graph, "corridor");
        assert!(graph.try_connect(entrance, first).unwrap());

        let before = graph.clone();
        assert!(!graph.try_connect(entrance, second).unwrap());
        assert_eq!(
            graph.check_connection(entrance, second),
            Err(ConnectionError::CorridorLimit(1))
        );
        assert_eq!(graph.nodes().collect::<Vec<_>>(), before.nodes().collect::<Vec<_>>());
    }

    #[test]
    fn test_fan_out_up_to_limit() {
        let mut graph = test_graph(2);
        let entrance = add(&mut graph, "entrance");
        let corridors: Vec<_> = (0..3).map(|_| add(&mut graph, "corridor")).collect();
        assert!(graph.try_connect(entrance, corridors[0]).unwrap());
        assert!(graph.try_connect(entrance, corridors[1]).unwrap());
        assert!(!graph.try_connect(entrance, corridors[2]).unwrap());
        assert_eq!(graph.corridor_child_count(entrance), 2);
    }

    #[test]
    fn test_scenario_boss_room_unique() {
        let mut graph = test_graph(3);
        let entrance = add(&mut graph, "entrance");
        let corridor = add(&mut graph, "corridor");
        let room = add(&mut graph, "small_room");
        let to_boss = add(&mut graph, "corridor");
        let other_corridor = add(&mut graph, "corridor");
        let first_boss = add(&mut graph, "boss_room");
        let second_boss = add(&mut graph, "boss_room");

        assert!(graph.try_connect(entrance, corridor).unwrap());
        assert!(graph.try_connect(corridor, room).unwrap());
        assert!(graph.try_connect(room, to_boss).unwrap());
        assert!(graph.try_connect(to_boss, first_boss).unwrap());
        assert!(graph.boss_room_placed());

        assert!(graph.try_connect(room, other_corridor).unwrap());
        assert!(!graph.try_connect(other_corridor, second_boss).unwrap());
        assert_eq!(
            graph.check_connection(other_corridor, second_boss),
            Err(ConnectionError::BossRoomPlaced)
        );
        assert!(!graph.node(second_boss).unwrap().has_parent());
    }

    #[test]
    fn test_scenario_corridor_to_corridor() {
        let mut graph = test_graph(3);
        let a = add(&mut graph, "corridor");
        let b = add(&mut graph, "corridor_ns");
        assert!(!graph.try_connect(a, b).unwrap());
        assert_eq!(graph.check_connection(a, b), Err(ConnectionError::CorridorAlternation));
    }

    #[test]
    fn test_room_to_room_rejected() {
        let mut graph = test_graph(3);
        let entrance = add(&mut graph, "entrance");
        let room = add(&mut graph, "large_room");
        assert_eq!(
            graph.check_connection(entrance, room),
            Err(ConnectionError::CorridorAlternation)
        );
    }

    #[test]
    fn test_scenario_delete_room_with_children() {
        let mut graph = test_graph(3);
        let entrance = add(&mut graph, "entrance");
        let corridor = add(&mut graph, "corridor");
        let room = add(&mut graph, "medium_room");
        let left = add(&mut graph, "corridor");
        let right = add(&mut graph, "corridor_ew");
        assert!(graph.try_connect(entrance, corridor).unwrap());
        assert!(graph.try_connect(corridor, room).unwrap());
        assert!(graph.try_connect(room, left).unwrap());
        assert!(graph.try_connect(room, right).unwrap());

        let removed = graph.delete_node(room).unwrap();
        assert_eq!(removed.id, room);
        assert!(graph.node(room).is_none());
        assert!(!graph.node(left).unwrap().has_parent());
        assert!(!graph.node(right).unwrap().has_parent());
        assert!(!graph.node(corridor).unwrap().has_children());
        assert!(graph.edges().all(|edge| !edge.involves_node(room)));
    }

    #[test]
    fn test_entrance_not_deletable() {
        let mut graph = test_graph(3);
        let entrance = add(&mut graph, "entrance");
        let corridor = add(&mut graph, "corridor");
        graph.try_connect(entrance, corridor).unwrap();

        assert!(matches!(graph.delete_node(entrance), Err(GraphError::EntranceNotDeletable)));
        assert!(graph.contains(entrance));
        assert_eq!(graph.node(entrance).unwrap().child_ids(), &[corridor]);
    }

    #[test]
    fn test_delete_unknown_node() {
        let mut graph = test_graph(3);
        let missing = RoomNodeId::new();
        assert!(matches!(graph.delete_node(missing), Err(GraphError::NodeNotFound(id)) if id == missing));
    }

    #[test]
    fn test_disconnect_is_idempotent() {
        let mut graph = test_graph(3);
        let entrance = add(&mut graph, "entrance");
        let corridor = add(&mut graph, "corridor");
        graph.try_connect(entrance, corridor).unwrap();

        assert!(graph.disconnect(entrance, corridor));
        let after_first = graph.clone();
        assert!(!graph.disconnect(entrance, corridor));
        assert_eq!(graph.nodes().collect::<Vec<_>>(), after_first.nodes().collect::<Vec<_>>());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_unassigned_child_rejected() {
        let mut graph = test_graph(3);
        let corridor = add(&mut graph, "corridor");
        let unassigned = add(&mut graph, "none");
        assert_eq!(
            graph.check_connection(corridor, unassigned),
            Err(ConnectionError::ChildUnassigned)
        );
    }

    #[test]
    fn test_entrance_never_a_child() {
        let mut graph = test_graph(3);
        let entrance = add(&mut graph, "entrance");
        let corridor = add(&mut graph, "corridor");
        assert_eq!(
            graph.check_connection(corridor, entrance),
            Err(ConnectionError::ChildIsEntrance)
        );
    }

    #[test]
    fn test_single_parent() {
        let mut graph = test_graph(3);
        let first = add(&mut graph, "small_room");
        let second = add(&mut graph, "medium_room");
        let corridor = add(&mut graph, "corridor");
        assert!(graph.try_connect(first, corridor).unwrap());
        assert_eq!(
            graph.check_connection(second, corridor),
            Err(ConnectionError::ChildHasParent)
        );
    }

    #[test]
    fn test_duplicate_and_reverse_edges_rejected() {
        let mut graph = test_graph(3);
        let room = add(&mut graph, "small_room");
        let corridor = add(&mut graph, "corridor");
        assert!(graph.try_connect(room, corridor).unwrap());
        assert_eq!(graph.check_connection(room, corridor), Err(ConnectionError::AlreadyConnected));
        assert_eq!(graph.check_connection(corridor, room), Err(ConnectionError::AlreadyConnected));
        assert_eq!(graph.check_connection(room, room), Err(ConnectionError::SelfLoop));
    }

    #[test]
    fn test_non_corridor_child_needs_empty_parent() {
        let mut graph = test_graph(3);
        let corridor = add(&mut graph, "corridor");
        let first = add(&mut graph, "small_room");
        let second = add(&mut graph, "chest_room");
        assert!(graph.try_connect(corridor, first).unwrap());
        assert_eq!(graph.check_connection(corridor, second), Err(ConnectionError::ParentOccupied));
    }

    #[test]
    fn test_cycle_rejected() {
        let mut graph = test_graph(3);
        let a = add(&mut graph, "small_room");
        let b = add(&mut graph, "corridor");
        let c = add(&mut graph, "medium_room");
        let d = add(&mut graph, "corridor");
        assert!(graph.try_connect(a, b).unwrap());
        assert!(graph.try_connect(b, c).unwrap());
        assert!(graph.try_connect(c, d).unwrap());
        assert_eq!(graph.check_connection(d, a), Err(ConnectionError::WouldCycle));
        assert!(graph.is_ancestor(a, d));
    }

    #[test]
    fn test_unknown_endpoint_is_an_error() {
        let mut graph = test_graph(3);
        let entrance = add(&mut graph, "entrance");
        let missing = RoomNodeId::new();
        assert!(matches!(
            graph.try_connect(entrance, missing),
            Err(GraphError::NodeNotFound(id)) if id == missing
        ));
        assert!(matches!(
            graph.try_connect(missing, entrance),
            Err(GraphError::NodeNotFound(id)) if id == missing
        ));
    }

    #[test]
    fn test_insert_rejects_duplicates_and_second_entrance() {
        let mut graph = test_graph(3);
        let room = RoomNode::new("small_room");
        let copy = room.clone();
        graph.insert_node(room).unwrap();
        assert!(matches!(graph.insert_node(copy), Err(GraphError::DuplicateNode(_))));

        add(&mut graph, "entrance");
        assert!(matches!(
            graph.insert_node(RoomNode::new("entrance")),
            Err(GraphError::EntranceAlreadyPlaced)
        ));
        assert!(matches!(
            graph.insert_node(RoomNode::new("throne_room")),
            Err(GraphError::UnknownRoomType(t)) if t == "throne_room"
        ));
    }

    #[test]
    fn test_insert_rejects_connected_node() {
        let mut graph = test_graph(3);
        let mut node = RoomNode::new("corridor");
        node.add_parent(RoomNodeId::new());
        assert!(matches!(graph.insert_node(node), Err(GraphError::NodeAlreadyConnected(_))));
    }

    #[test]
    fn test_zero_corridor_limit_refused() {
        let result = RoomGraph::new(
            "Test",
            Arc::new(RoomTypeRegistry::dungeon_defaults()),
            GraphSettings::default().with_max_child_corridors(0),
        );
        assert!(matches!(result, Err(SettingsError::ZeroCorridorLimit)));
    }

    #[test]
    fn test_connection_error_conversion() {
        let missing = RoomNodeId::new();
        assert!(matches!(
            GraphError::from(ConnectionError::NodeNotFound(missing)),
            GraphError::NodeNotFound(id) if id == missing
        ));
        assert!(matches!(
            GraphError::from(ConnectionError::WouldCycle),
            GraphError::Rejected(ConnectionError::WouldCycle)
        ));
    }

    #[test]
    fn test_node_at_and_move() {
        let mut graph = test_graph(3);
        let id = graph
            .insert_node(RoomNode::new("small_room").with_position(100.0, 100.0))
            .unwrap();
        assert_eq!(graph.node_at([110.0, 110.0]), Some(id));
        assert!(graph.move_node(id, [-100.0, 0.0]));
        assert_eq!(graph.node_at([110.0, 110.0]), Some(id));
        assert_eq!(graph.node_at([300.0, 110.0]), None);
        graph.move_all([0.0, 500.0]);
        assert_eq!(graph.node(id).unwrap().position, [0.0, 600.0]);
    }
}
