// src/settings/mod.rs
pub mod io;

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

/// Inspector configuration, stored as JSON in the platform config directory.
#[derive(Resource, Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct InspectorSettings {
    /// Draw "Non-Serialized Fields" / "Native Properties" / "Buttons" headers.
    pub draw_section_headers: bool,
    /// Composite fields nested deeper than this are drawn read-only.
    pub max_struct_depth: usize,
    pub indent_width: f32,
    /// Keep foldout state in `foldouts.json` between runs.
    pub persist_foldouts: bool,
}

impl Default for InspectorSettings {
    fn default() -> Self {
        Self {
            draw_section_headers: false,
            max_struct_depth: 8,
            indent_width: 12.0,
            persist_foldouts: true,
        }
    }
}
