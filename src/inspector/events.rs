// src/inspector/events.rs
use bevy::prelude::Event;

use super::foldout_state::InstanceId;

/// Sent after a registered button method ran against an inspected target.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct InspectorButtonPressed {
    pub target: InstanceId,
    pub label: &'static str,
}

/// Sent when a redraw changed the inspected target.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct InspectedValueChanged {
    pub target: InstanceId,
}
