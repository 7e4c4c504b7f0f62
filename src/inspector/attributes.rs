// src/inspector/attributes.rs
//! Annotation types attached to reflected fields as `bevy_reflect` custom attributes:
//!
//! ```ignore
//! #[derive(Reflect)]
//! struct Ship {
//!     #[reflect(@BoxGroup("Stats"))]
//!     max_speed: f32,
//!     #[reflect(@Foldout("Advanced"))]
//!     drag: f32,
//! }
//! ```

use bevy::reflect::attributes::CustomAttributes;
use bevy::reflect::Reflect;
use std::any::{type_name, TypeId};

/// Draws the field inside a bordered section that is always expanded.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxGroup(pub &'static str);

/// Draws the field inside a collapsible section whose state persists across redraws.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Foldout(pub &'static str);

/// Shows the field only while the named `bool` field of the same owner is `true`.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowIf(pub &'static str);

/// Hides the field while the named `bool` field of the same owner is `true`.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideIf(pub &'static str);

/// Field is runtime state rather than authored data; drawn after the serialized
/// sections, unfolding composite values.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowNonSerialized;

/// Drawn without an editable widget. A composite is shown as one row, not unfolded.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOnly;

/// Never discovered, never drawn.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideInInspector;

/// Annotation tags that switch a target from the default inspector to the
/// annotation-driven layout.
///
/// Widget renderers that define their own annotations (sliders, dropdowns) register
/// them here so that annotated targets are routed through the pipeline.
#[derive(Debug, Clone)]
pub struct AnnotationRegistry {
    recognized: Vec<(TypeId, &'static str)>,
}

impl Default for AnnotationRegistry {
    fn default() -> Self {
        let mut registry = Self {
            recognized: Vec::new(),
        };
        registry
            .register::<BoxGroup>()
            .register::<Foldout>()
            .register::<ShowIf>()
            .register::<HideIf>()
            .register::<ShowNonSerialized>()
            .register::<ReadOnly>()
            .register::<HideInInspector>();
        registry
    }
}

impl AnnotationRegistry {
    pub fn register<T: Reflect>(&mut self) -> &mut Self {
        let id = TypeId::of::<T>();
        if !self.recognized.iter().any(|(known, _)| *known == id) {
            self.recognized.push((id, type_name::<T>()));
        }
        self
    }

    pub fn recognizes(&self, attributes: &CustomAttributes) -> bool {
        self.recognized
            .iter()
            .any(|(id, _)| attributes.contains_by_id(*id))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.recognized.iter().map(|(_, name)| *name)
    }
}
