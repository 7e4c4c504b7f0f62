// src/inspector/session.rs

use bevy::log::{debug, warn};
use bevy::reflect::{Reflect, ReflectRef, Struct};
use std::collections::HashSet;

use super::attribute_index::{visibility, Visibility};
use super::foldout_state::{FoldoutStateStore, InstanceId};
use super::member::{discover_fields, discover_methods, discover_properties, is_non_serialized, Member};
use super::registry::InspectorRegistry;

/// Per-target editing session. Holds what is stable for the lifetime of an editor
/// (runtime fields, computed properties, buttons) so a redraw only rediscovers the
/// serialized fields.
#[derive(Debug)]
pub struct InspectorSession {
    instance: InstanceId,
    active: bool,
    non_serialized_fields: Vec<Member>,
    native_properties: Vec<Member>,
    buttons: Vec<Member>,
    warned_conditions: HashSet<(String, &'static str)>,
}

impl InspectorSession {
    pub fn new(instance: InstanceId) -> Self {
        Self {
            instance,
            active: false,
            non_serialized_fields: Vec::new(),
            native_properties: Vec::new(),
            buttons: Vec::new(),
            warned_conditions: HashSet::new(),
        }
    }

    pub fn on_session_start(&mut self, target: &dyn Reflect, registry: &InspectorRegistry) {
        self.non_serialized_fields = match target.reflect_ref() {
            ReflectRef::Struct(fields) => discover_fields(Some(fields), is_non_serialized),
            _ => Vec::new(),
        };
        self.native_properties = discover_properties(registry, Some(target), |_| true);
        self.buttons = discover_methods(registry, Some(target), |_| true);
        self.warned_conditions.clear();
        self.active = true;
        debug!(
            "Inspector: session started for '{}' ({} runtime fields, {} properties, {} buttons)",
            self.instance,
            self.non_serialized_fields.len(),
            self.native_properties.len(),
            self.buttons.len()
        );
    }

    /// Releases the cached member lists and persists foldout state.
    pub fn on_session_end(&mut self, foldouts: &mut FoldoutStateStore) {
        if !self.active {
            return;
        }
        self.non_serialized_fields.clear();
        self.native_properties.clear();
        self.buttons.clear();
        self.warned_conditions.clear();
        self.active = false;
        foldouts.flush();
        debug!("Inspector: session ended for '{}'", self.instance);
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn instance(&self) -> &InstanceId {
        &self.instance
    }

    pub fn non_serialized_fields(&self) -> &[Member] {
        &self.non_serialized_fields
    }

    pub fn native_properties(&self) -> &[Member] {
        &self.native_properties
    }

    pub fn buttons(&self) -> &[Member] {
        &self.buttons
    }

    /// Visibility of `member` on `owner` right now. A condition that cannot be
    /// resolved leaves the member visible and is reported once per session.
    pub fn check_visible(&mut self, owner: &dyn Struct, member: &Member) -> bool {
        match visibility(owner, member) {
            Visibility::Visible => true,
            Visibility::Hidden => false,
            Visibility::Unresolved(condition) => {
                let type_path = owner.reflect_type_path().to_string();
                if self.warned_conditions.insert((type_path, condition)) {
                    warn!(
                        "Inspector: condition '{}' on '{}' does not name a bool field of '{}'",
                        condition,
                        member.path(),
                        owner.reflect_type_path()
                    );
                }
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspector::attributes::{ShowIf, ShowNonSerialized};

    #[derive(Reflect, Default)]
    struct Reactor {
        output: f32,
        #[reflect(@ShowIf("missing"))]
        coolant: f32,
        #[reflect(@ShowNonSerialized)]
        core_temp: f32,
    }

    #[test]
    fn start_caches_and_end_releases() {
        let mut registry = InspectorRegistry::default();
        registry
            .register_property::<Reactor>("Load", |r| format!("{:.0}%", r.output * 100.0))
            .register_button::<Reactor>("Scram", |r| r.output = 0.0);
        let reactor = Reactor::default();

        let mut session = InspectorSession::new(InstanceId::new("test:reactor"));
        assert!(!session.is_active());
        session.on_session_start(&reactor, &registry);
        assert!(session.is_active());
        assert_eq!(session.non_serialized_fields()[0].name, "core_temp");
        assert_eq!(session.native_properties()[0].name, "Load");
        assert_eq!(session.buttons()[0].name, "Scram");

        let mut foldouts = FoldoutStateStore::default();
        session.on_session_end(&mut foldouts);
        assert!(!session.is_active());
        assert!(session.non_serialized_fields().is_empty());
        assert!(session.buttons().is_empty());
    }

    #[test]
    fn unresolved_condition_is_visible_and_reported_once() {
        let reactor = Reactor::default();
        let coolant = discover_fields(Some(&reactor), |m| m.name == "coolant")
            .pop()
            .unwrap();
        let mut session = InspectorSession::new(InstanceId::new("test:reactor"));
        assert!(session.check_visible(&reactor, &coolant));
        assert!(session.check_visible(&reactor, &coolant));
        assert_eq!(session.warned_conditions.len(), 1);
    }
}
