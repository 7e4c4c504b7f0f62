// src/inspector/attribute_index.rs

use bevy::log::debug;
use bevy::reflect::{Reflect, Struct};

use super::attributes::{AnnotationRegistry, BoxGroup, Foldout, HideIf, ReadOnly, ShowIf};
use super::member::Member;

/// Classification strategy selected by a member's strongest grouping annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grouping {
    Ungrouped,
    Box(&'static str),
    Foldout(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
    /// The condition names a field that is missing or not a `bool`.
    Unresolved(&'static str),
}

/// `Foldout` wins over `BoxGroup` when a member carries both. Blank group names
/// are treated as no annotation.
pub fn group_of(member: &Member) -> Grouping {
    if let Some(foldout) = member.attribute::<Foldout>() {
        if !foldout.0.trim().is_empty() {
            return Grouping::Foldout(foldout.0);
        }
        debug!("Inspector: blank Foldout name on '{}', ignoring", member.path());
    }
    if let Some(group) = member.attribute::<BoxGroup>() {
        if !group.0.trim().is_empty() {
            return Grouping::Box(group.0);
        }
        debug!("Inspector: blank BoxGroup name on '{}', ignoring", member.path());
    }
    Grouping::Ungrouped
}

pub fn get_attribute<T: Reflect>(member: &Member) -> Option<&'static T> {
    member.attribute::<T>()
}

pub fn has_recognized_annotation(member: &Member, annotations: &AnnotationRegistry) -> bool {
    member
        .attributes()
        .is_some_and(|attrs| annotations.recognizes(attrs))
}

pub fn is_read_only(member: &Member) -> bool {
    member.has_attribute::<ReadOnly>()
}

/// Evaluates `ShowIf` / `HideIf` against the owner's current values. Never cached:
/// the controlling field may change between redraws.
pub fn visibility(owner: &dyn Struct, member: &Member) -> Visibility {
    if let Some(condition) = member.attribute::<ShowIf>() {
        return match read_condition(owner, condition.0) {
            Some(true) => Visibility::Visible,
            Some(false) => Visibility::Hidden,
            None => Visibility::Unresolved(condition.0),
        };
    }
    if let Some(condition) = member.attribute::<HideIf>() {
        return match read_condition(owner, condition.0) {
            Some(true) => Visibility::Hidden,
            Some(false) => Visibility::Visible,
            None => Visibility::Unresolved(condition.0),
        };
    }
    Visibility::Visible
}

pub fn is_visible(owner: &dyn Struct, member: &Member) -> bool {
    visibility(owner, member) != Visibility::Hidden
}

fn read_condition(owner: &dyn Struct, field: &str) -> Option<bool> {
    owner
        .field(field)
        .and_then(|value| value.try_downcast_ref::<bool>())
        .copied()
}
