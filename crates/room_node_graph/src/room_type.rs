// SPDX-License-Identifier: MIT OR Apache-2.0
//! Room type descriptors and the registry that catalogs them.
//!
//! A room type's structural role is described by a handful of flags rather
//! than a type hierarchy. The registry is immutable once loaded and is
//! validated up front: a catalog without an entrance type or a none type is
//! a configuration error, never something the graph papers over.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Room type descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomType {
    /// Unique type identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Root of every dungeon layout
    #[serde(default)]
    pub is_entrance: bool,
    /// Placeholder type of a freshly created, unassigned node
    #[serde(default)]
    pub is_none: bool,
    /// Corridor segment joining two rooms
    #[serde(default)]
    pub is_corridor: bool,
    /// North/south corridor variant
    #[serde(default)]
    pub is_corridor_ns: bool,
    /// East/west corridor variant
    #[serde(default)]
    pub is_corridor_ew: bool,
    /// Terminal boss room
    #[serde(default)]
    pub is_boss_room: bool,
    /// Offered in the editor's type picker
    #[serde(default = "default_displayable")]
    pub displayable: bool,
}

fn default_displayable() -> bool {
    true
}

impl RoomType {
    /// Create a plain room type with no structural role
    pub fn room(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_entrance: false,
            is_none: false,
            is_corridor: false,
            is_corridor_ns: false,
            is_corridor_ew: false,
            is_boss_room: false,
            displayable: true,
        }
    }

    /// Mark as the entrance type
    pub fn entrance(mut self) -> Self {
        self.is_entrance = true;
        self
    }

    /// Mark as the none type
    pub fn none(mut self) -> Self {
        self.is_none = true;
        self
    }

    /// Mark as a corridor type
    pub fn corridor(mut self) -> Self {
        self.is_corridor = true;
        self
    }

    /// Mark as a boss room type
    pub fn boss_room(mut self) -> Self {
        self.is_boss_room = true;
        self
    }

    /// Set whether the editor offers this type
    pub fn with_displayable(mut self, displayable: bool) -> Self {
        self.displayable = displayable;
        self
    }

    fn role_count(&self) -> usize {
        [self.is_entrance, self.is_none, self.is_corridor, self.is_boss_room]
            .into_iter()
            .filter(|flag| *flag)
            .count()
    }
}

/// Immutable catalog of room types
#[derive(Debug, Clone)]
pub struct RoomTypeRegistry {
    types: indexmap::IndexMap<String, RoomType>,
    entrance: String,
    none: String,
}

impl RoomTypeRegistry {
    /// Build a registry, validating the catalog.
    pub fn new(types: impl IntoIterator<Item = RoomType>) -> Result<Self, RegistryError> {
        let mut map = indexmap::IndexMap::new();

        for room_type in types {
            if room_type.id.trim().is_empty() {
                return Err(RegistryError::EmptyField {
                    field: "id",
                    room_type: room_type.name,
                });
            }
            if room_type.name.trim().is_empty() {
                return Err(RegistryError::EmptyField {
                    field: "name",
                    room_type: room_type.id,
                });
            }
            if room_type.role_count() > 1 {
                return Err(RegistryError::ConflictingRoles(room_type.id));
            }
            if (room_type.is_corridor_ns || room_type.is_corridor_ew) && !room_type.is_corridor {
                return Err(RegistryError::CorridorVariantNotCorridor(room_type.id));
            }
            if map.contains_key(&room_type.id) {
                return Err(RegistryError::DuplicateType(room_type.id));
            }
            map.insert(room_type.id.clone(), room_type);
        }

        if map.is_empty() {
            return Err(RegistryError::Empty);
        }

        let entrance = Self::single(&map, |t| t.is_entrance, "entrance")?;
        let none = Self::single(&map, |t| t.is_none, "none")?;

        Ok(Self {
            types: map,
            entrance,
            none,
        })
    }

    fn single(
        types: &indexmap::IndexMap<String, RoomType>,
        predicate: impl Fn(&RoomType) -> bool,
        role: &'static str,
    ) -> Result<String, RegistryError> {
        let mut matching = types.values().filter(|t| predicate(*t));
        let first = matching.next().ok_or(RegistryError::MissingRole(role))?;
        if matching.next().is_some() {
            return Err(RegistryError::MultipleRole(role));
        }
        Ok(first.id.clone())
    }

    /// The stock dungeon catalog
    pub fn dungeon_defaults() -> Self {
        let types = vec![
            RoomType::room("entrance", "Entrance").entrance(),
            RoomType::room("none", "None").none().with_displayable(false),
            RoomType::room("small_room", "Small Room"),
            RoomType::room("medium_room", "Medium Room"),
            RoomType::room("large_room", "Large Room"),
            RoomType::room("chest_room", "Chest Room"),
            RoomType::room("corridor", "Corridor").corridor(),
            RoomType {
                is_corridor_ns: true,
                ..RoomType::room("corridor_ns", "CorridorNS").corridor().with_displayable(false)
            },
            RoomType {
                is_corridor_ew: true,
                ..RoomType::room("corridor_ew", "CorridorEW").corridor().with_displayable(false)
            },
            RoomType::room("boss_room", "Boss Room").boss_room(),
        ];

        Self {
            entrance: "entrance".to_string(),
            none: "none".to_string(),
            types: types.into_iter().map(|t| (t.id.clone(), t)).collect(),
        }
    }

    /// Get a room type by ID
    pub fn get(&self, id: &str) -> Option<&RoomType> {
        self.types.get(id)
    }

    /// Find the first room type matching a predicate
    pub fn find(&self, predicate: impl Fn(&RoomType) -> bool) -> Option<&RoomType> {
        self.types.values().find(|t| predicate(*t))
    }

    /// Get all room types in catalog order
    pub fn all(&self) -> impl Iterator<Item = &RoomType> {
        self.types.values()
    }

    /// Types offered in the editor's type picker
    pub fn displayable(&self) -> impl Iterator<Item = &RoomType> {
        self.types.values().filter(|t| t.displayable)
    }

    /// The entrance type
    pub fn entrance(&self) -> &RoomType {
        &self.types[&self.entrance]
    }

    /// The none (unassigned) type
    pub fn none_type(&self) -> &RoomType {
        &self.types[&self.none]
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Always false for a validated registry
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Parse and validate a RON list of room types
    pub fn from_ron(s: &str) -> Result<Self, RegistryError> {
        let types: Vec<RoomType> = ron::from_str(s)?;
        Self::new(types)
    }

    /// Serialize the catalog to RON
    pub fn to_ron(&self) -> Result<String, ron::Error> {
        let types: Vec<&RoomType> = self.types.values().collect();
        ron::ser::to_string_pretty(&types, ron::ser::PrettyConfig::default())
    }

    /// Load a registry file
    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        let contents = std::fs::read_to_string(path)?;
        let registry = Self::from_ron(&contents)?;
        tracing::debug!("Loaded {} room types from {:?}", registry.len(), path);
        Ok(registry)
    }
}

/// Error while loading a room type registry
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Catalog has no types at all
    #[error("Room type registry is empty")]
    Empty,

    /// Required string field is blank
    #[error("Room type {room_type:?} has an empty {field}")]
    EmptyField {
        /// Field name
        field: &'static str,
        /// Offending type
        room_type: String,
    },

    /// Two types share an ID
    #[error("Duplicate room type: {0}")]
    DuplicateType(String),

    /// No type carries a required role
    #[error("No {0} room type configured")]
    MissingRole(&'static str),

    /// More than one type carries a unique role
    #[error("More than one {0} room type configured")]
    MultipleRole(&'static str),

    /// A type combines structural roles
    #[error("Room type {0} has more than one structural role")]
    ConflictingRoles(String),

    /// NS/EW variant without the corridor flag
    #[error("Room type {0} is a corridor variant but not a corridor")]
    CorridorVariantNotCorridor(String),

    /// Registry file could not be read
    #[error("Failed to read registry: {0}")]
    Io(#[from] std::io::Error),

    /// Registry file is malformed
    #[error("Failed to parse registry: {0}")]
    Parse(#[from] ron::error::SpannedError),
}
