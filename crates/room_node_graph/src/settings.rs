// SPDX-License-Identifier: MIT OR Apache-2.0
//! Tunable graph settings.

use crate::node::DEFAULT_NODE_SIZE;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default corridor fan-out
pub const DEFAULT_MAX_CHILD_CORRIDORS: usize = 3;

/// Horizontal offset of the entrance placed alongside the first room node
pub const DEFAULT_ENTRANCE_OFFSET: f32 = -200.0;

/// Settings shared by every graph in an editing session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphSettings {
    /// Maximum corridor children of one room
    pub max_child_corridors: usize,
    /// Size of newly created nodes
    pub default_node_size: [f32; 2],
    /// X offset of the auto-placed entrance relative to the first node
    pub entrance_offset: f32,
}

impl Default for GraphSettings {
    fn default() -> Self {
        Self {
            max_child_corridors: DEFAULT_MAX_CHILD_CORRIDORS,
            default_node_size: DEFAULT_NODE_SIZE,
            entrance_offset: DEFAULT_ENTRANCE_OFFSET,
        }
    }
}

impl GraphSettings {
    /// Override the corridor fan-out
    pub fn with_max_child_corridors(mut self, max: usize) -> Self {
        self.max_child_corridors = max;
        self
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.max_child_corridors == 0 {
            return Err(SettingsError::ZeroCorridorLimit);
        }
        let [width, height] = self.default_node_size;
        if !(width > 0.0 && height > 0.0) {
            return Err(SettingsError::InvalidNodeSize(width, height));
        }
        Ok(())
    }

    /// Parse and validate RON settings
    pub fn from_ron(s: &str) -> Result<Self, SettingsError> {
        let settings: Self = ron::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize to RON
    pub fn to_ron(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }

    /// Load a settings file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_ron(&contents)
    }
}

/// Error while loading settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// Corridor fan-out must be at least one
    #[error("max_child_corridors must be at least 1")]
    ZeroCorridorLimit,

    /// Node size must be positive
    #[error("Invalid default node size: {0}x{1}")]
    InvalidNodeSize(f32, f32),

    /// Settings file could not be read
    #[error("Failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file is malformed
    #[error("Failed to parse settings: {0}")]
    Parse(#[from] ron::error::SpannedError),
}
