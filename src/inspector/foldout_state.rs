// src/inspector/foldout_state.rs

use bevy::log::{debug, warn};
use bevy::reflect::TypePath;
use std::collections::HashMap;
use std::fmt;

use super::host::InspectorHost;
use super::saved_bool::SavedBoolStore;

/// Instance-stable identity of an inspected owner. Nested composite owners extend
/// their parent's identity with the field name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(String);

impl InstanceId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn for_resource<T: TypePath>() -> Self {
        Self(format!("resource:{}", T::type_path()))
    }

    pub fn child(&self, field: &str) -> Self {
        Self(format!("{}/{}", self.0, field))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// True for this owner and every owner nested inside it.
    pub fn contains(&self, other: &InstanceId) -> bool {
        other.0 == self.0
            || other
                .0
                .strip_prefix(self.0.as_str())
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoldoutScope {
    Group,
    Field,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FoldoutKey {
    pub owner: InstanceId,
    pub scope: FoldoutScope,
    pub name: String,
}

impl FoldoutKey {
    pub fn group(owner: &InstanceId, name: &str) -> Self {
        Self {
            owner: owner.clone(),
            scope: FoldoutScope::Group,
            name: name.to_string(),
        }
    }

    pub fn field(owner: &InstanceId, name: &str) -> Self {
        Self {
            owner: owner.clone(),
            scope: FoldoutScope::Field,
            name: name.to_string(),
        }
    }

    /// Key used in the persisted cell store. Group and field scopes never collide,
    /// and nested owners never collide with their parents.
    pub fn persist_key(&self) -> String {
        let scope = match self.scope {
            FoldoutScope::Group => "group",
            FoldoutScope::Field => "field",
        };
        format!("{}/{}:{}", self.owner, scope, self.name)
    }
}

/// Expanded/collapsed state of every foldout drawn this editor session.
///
/// Entries are created on first read, default collapsed, and are never evicted
/// while the store lives. Every `set` writes through to the persisted cells.
#[derive(Debug, Default)]
pub struct FoldoutStateStore {
    states: HashMap<FoldoutKey, bool>,
    cells: SavedBoolStore,
}

impl FoldoutStateStore {
    pub fn new(cells: SavedBoolStore) -> Self {
        Self {
            states: HashMap::new(),
            cells,
        }
    }

    pub fn get(&mut self, key: &FoldoutKey) -> bool {
        if let Some(expanded) = self.states.get(key) {
            return *expanded;
        }
        let expanded = self.cells.load_or_create(&key.persist_key(), false);
        self.states.insert(key.clone(), expanded);
        expanded
    }

    pub fn set(&mut self, key: &FoldoutKey, expanded: bool) {
        if self.states.insert(key.clone(), expanded) != Some(expanded) {
            debug!(
                "Inspector: foldout '{}' -> {}",
                key.persist_key(),
                if expanded { "expanded" } else { "collapsed" }
            );
            self.cells.set(&key.persist_key(), expanded);
        }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn cells(&self) -> &SavedBoolStore {
        &self.cells
    }

    pub fn flush(&mut self) {
        if let Err(e) = self.cells.flush() {
            warn!("Inspector: failed to persist foldout state: {}", e);
        }
    }
}

/// Draws a foldout header for `key` and records a toggle. Returns the new state.
pub fn draw_foldout<H: InspectorHost + ?Sized>(
    host: &mut H,
    foldouts: &mut FoldoutStateStore,
    key: &FoldoutKey,
    label: &str,
) -> bool {
    let current = foldouts.get(key);
    let next = host.draw_foldout_header(current, label);
    if next != current {
        foldouts.set(key, next);
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unseen_keys_default_to_collapsed() {
        let mut store = FoldoutStateStore::default();
        let key = FoldoutKey::group(&InstanceId::new("resource:Ship"), "Advanced");
        assert!(!store.get(&key));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn set_is_visible_to_next_read() {
        let mut store = FoldoutStateStore::default();
        let key = FoldoutKey::group(&InstanceId::new("resource:Ship"), "Advanced");
        store.set(&key, true);
        assert!(store.get(&key));
        assert_eq!(store.cells().get(&key.persist_key()), Some(true));
    }

    #[test]
    fn keys_do_not_collide() {
        let ship = InstanceId::new("resource:Ship");
        let dock = InstanceId::new("resource:Dock");
        let group = FoldoutKey::group(&ship, "engine");
        let field = FoldoutKey::field(&ship, "engine");
        let nested = FoldoutKey::field(&ship.child("engine"), "core");
        let other_owner = FoldoutKey::group(&dock, "engine");

        let keys = [&group, &field, &nested, &other_owner];
        for (i, a) in keys.iter().enumerate() {
            for b in keys.iter().skip(i + 1) {
                assert_ne!(a.persist_key(), b.persist_key());
            }
        }

        let mut store = FoldoutStateStore::default();
        store.set(&group, true);
        assert!(!store.get(&field));
        assert!(!store.get(&other_owner));
    }

    #[test]
    fn restores_persisted_cells() {
        let key = FoldoutKey::field(&InstanceId::new("resource:Ship"), "engine");
        let mut cells = SavedBoolStore::in_memory();
        cells.set(&key.persist_key(), true);
        let mut store = FoldoutStateStore::new(cells);
        assert!(store.get(&key));
    }

    #[test]
    fn instance_containment() {
        let ship = InstanceId::new("resource:Ship");
        assert!(ship.contains(&ship));
        assert!(ship.contains(&ship.child("engine")));
        assert!(!ship.contains(&InstanceId::new("resource:ShipYard")));
    }
}
