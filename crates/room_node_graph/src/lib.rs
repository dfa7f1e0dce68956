// SPDX-License-Identifier: MIT OR Apache-2.0
//! Room node graph for dungeon layout editing.
//!
//! A dungeon layout is a forest of room nodes rooted at a single entrance,
//! alternating between rooms and corridors, with bounded corridor fan-out
//! and at most one connected boss room. This crate holds that graph and
//! decides which edges may be added, independent of any editor UI.
//!
//! ## Architecture
//!
//! - [`RoomTypeRegistry`]: immutable catalog of room types, passed into
//!   each graph rather than held globally
//! - [`RoomNode`]: a vertex with parent/child ID lists
//! - [`RoomGraph`]: the node index and connection-validity engine
//! - [`operations`]: editor actions (create, bulk delete, retype, pan)
//! - [`integrity`]: whole-graph consistency check
//! - [`RoomGraphDocument`]: serializable snapshot

pub mod room_type;
pub mod node;
pub mod connection;
pub mod graph;
pub mod operations;
pub mod integrity;
pub mod settings;
pub mod document;

pub use room_type::{RoomType, RoomTypeRegistry, RegistryError};
pub use node::{RoomNode, RoomNodeId};
pub use connection::{Connection, ConnectionError};
pub use graph::{GraphError, RoomGraph};
pub use integrity::IntegrityError;
pub use settings::{GraphSettings, SettingsError};
pub use document::RoomGraphDocument;
