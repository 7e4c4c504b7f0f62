// src/inspector/registry.rs

use bevy::math::{IVec2, IVec3, Quat, UVec2, UVec3, Vec2, Vec3, Vec3A, Vec4};
use bevy::prelude::*;
use std::any::{type_name, TypeId};
use std::collections::{HashMap, HashSet};

use super::attributes::AnnotationRegistry;
use super::error::{InspectorError, InspectorResult};
use super::member::concrete_type_id;

type PropertyGetter = Box<dyn Fn(&dyn Reflect) -> Option<String> + Send + Sync>;
type ButtonAction = Box<dyn Fn(&mut dyn Reflect) -> bool + Send + Sync>;

/// A read-only computed value shown under the serialized fields.
pub struct NativeProperty {
    pub name: &'static str,
    getter: PropertyGetter,
}

/// A method exposed as a button. Runs only when the host reports a click.
pub struct ButtonMethod {
    pub label: &'static str,
    action: ButtonAction,
}

/// Load-time registry of everything reflection alone cannot describe: computed
/// properties, button methods, struct types drawn as a single leaf, and the
/// annotation tags that select the annotated layout.
#[derive(Resource)]
pub struct InspectorRegistry {
    properties: HashMap<TypeId, Vec<NativeProperty>>,
    buttons: HashMap<TypeId, Vec<ButtonMethod>>,
    leaf_types: HashSet<TypeId>,
    pub annotations: AnnotationRegistry,
}

impl Default for InspectorRegistry {
    fn default() -> Self {
        let mut registry = Self {
            properties: HashMap::new(),
            buttons: HashMap::new(),
            leaf_types: HashSet::new(),
            annotations: AnnotationRegistry::default(),
        };
        // Math types are plain structs to reflection but edit as one widget.
        registry
            .register_leaf_type::<Vec2>()
            .register_leaf_type::<Vec3>()
            .register_leaf_type::<Vec3A>()
            .register_leaf_type::<Vec4>()
            .register_leaf_type::<IVec2>()
            .register_leaf_type::<IVec3>()
            .register_leaf_type::<UVec2>()
            .register_leaf_type::<UVec3>()
            .register_leaf_type::<Quat>();
        registry
    }
}

impl InspectorRegistry {
    pub fn register_property<T: Reflect>(
        &mut self,
        name: &'static str,
        getter: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> &mut Self {
        let getter: PropertyGetter =
            Box::new(move |target: &dyn Reflect| target.downcast_ref::<T>().map(&getter));
        let entries = self.properties.entry(TypeId::of::<T>()).or_default();
        if entries.iter().any(|p| p.name == name) {
            warn!(
                "Inspector: property '{}' already registered for {}, keeping the first",
                name,
                type_name::<T>()
            );
        } else {
            entries.push(NativeProperty { name, getter });
        }
        self
    }

    pub fn register_button<T: Reflect>(
        &mut self,
        label: &'static str,
        action: impl Fn(&mut T) + Send + Sync + 'static,
    ) -> &mut Self {
        let action: ButtonAction = Box::new(move |target: &mut dyn Reflect| {
            match target.downcast_mut::<T>() {
                Some(concrete) => {
                    action(concrete);
                    true
                }
                None => false,
            }
        });
        let entries = self.buttons.entry(TypeId::of::<T>()).or_default();
        if entries.iter().any(|b| b.label == label) {
            warn!(
                "Inspector: button '{}' already registered for {}, keeping the first",
                label,
                type_name::<T>()
            );
        } else {
            entries.push(ButtonMethod { label, action });
        }
        self
    }

    /// Struct types that are drawn as one leaf instead of being unfolded.
    pub fn register_leaf_type<T: 'static>(&mut self) -> &mut Self {
        self.leaf_types.insert(TypeId::of::<T>());
        self
    }

    pub fn is_leaf_type(&self, type_id: TypeId) -> bool {
        self.leaf_types.contains(&type_id)
    }

    pub fn properties_for(&self, type_id: TypeId) -> &[NativeProperty] {
        self.properties
            .get(&type_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn buttons_for(&self, type_id: TypeId) -> &[ButtonMethod] {
        self.buttons
            .get(&type_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Current value of a computed property, `None` when it cannot be read.
    pub fn read_property(&self, target: &dyn Reflect, name: &str) -> Option<String> {
        self.properties_for(concrete_type_id(target))
            .iter()
            .find(|p| p.name == name)
            .and_then(|p| (p.getter)(target))
    }

    pub fn invoke_button(&self, target: &mut dyn Reflect, label: &str) -> InspectorResult<()> {
        let type_path = target.reflect_type_path().to_string();
        let Some(button) = self
            .buttons_for(concrete_type_id(target))
            .iter()
            .find(|b| b.label == label)
        else {
            return Err(InspectorError::FieldUnavailable {
                owner: type_path,
                field: label.to_string(),
            });
        };
        if (button.action)(target) {
            Ok(())
        } else {
            Err(InspectorError::TargetMismatch {
                member: label.to_string(),
                expected: "the type it was registered for",
            })
        }
    }
}
