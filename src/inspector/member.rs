// src/inspector/member.rs
//! Member discovery: reflects over a target and returns the fields, computed
//! properties and button methods matching a predicate, in declaration order.

use bevy::log::debug;
use bevy::reflect::attributes::CustomAttributes;
use bevy::reflect::{NamedField, PartialReflect, Reflect, Struct, StructInfo, TypeInfo};
use std::any::{Any, TypeId};
use std::collections::HashSet;

use super::attributes::{HideInInspector, ShowNonSerialized};
use super::registry::InspectorRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Field,
    Property,
    Method,
}

/// A discovered field, computed property or button method.
///
/// Fields carry their static reflection data; properties and methods come from the
/// [`InspectorRegistry`] and have no annotations.
#[derive(Debug, Clone)]
pub struct Member {
    pub name: &'static str,
    pub kind: MemberKind,
    pub declared_type: &'static str,
    /// Field names leading from the inspected root to this member's owner.
    pub owner_path: Vec<&'static str>,
    field: Option<&'static NamedField>,
}

impl Member {
    pub fn from_field(field: &'static NamedField, owner_path: &[&'static str]) -> Self {
        Self {
            name: field.name(),
            kind: MemberKind::Field,
            declared_type: field.type_path(),
            owner_path: owner_path.to_vec(),
            field: Some(field),
        }
    }

    pub fn property(name: &'static str) -> Self {
        Self {
            name,
            kind: MemberKind::Property,
            declared_type: "alloc::string::String",
            owner_path: Vec::new(),
            field: None,
        }
    }

    pub fn method(name: &'static str) -> Self {
        Self {
            name,
            kind: MemberKind::Method,
            declared_type: "fn(&mut Self)",
            owner_path: Vec::new(),
            field: None,
        }
    }

    pub fn field(&self) -> Option<&'static NamedField> {
        self.field
    }

    pub fn attributes(&self) -> Option<&'static CustomAttributes> {
        self.field.map(|field| field.custom_attributes())
    }

    pub fn attribute<T: Reflect>(&self) -> Option<&'static T> {
        self.attributes().and_then(|attrs| attrs.get::<T>())
    }

    pub fn has_attribute<T: Reflect>(&self) -> bool {
        self.attributes().is_some_and(|attrs| attrs.contains::<T>())
    }

    /// Human readable label, e.g. `max_speed` -> `Max Speed`.
    pub fn label(&self) -> String {
        nicify_name(self.name)
    }

    /// Dotted path from the inspected root, e.g. `runtime.thrusters.primary`.
    pub fn path(&self) -> String {
        let mut parts = self.owner_path.clone();
        parts.push(self.name);
        parts.join(".")
    }
}

/// Fields of serialized-style data: everything reflected that is not runtime state.
pub fn is_serialized(member: &Member) -> bool {
    member.kind == MemberKind::Field && !member.has_attribute::<ShowNonSerialized>()
}

pub fn is_non_serialized(member: &Member) -> bool {
    member.kind == MemberKind::Field && member.has_attribute::<ShowNonSerialized>()
}

pub fn struct_info_of(value: &dyn PartialReflect) -> Option<&'static StructInfo> {
    match value.get_represented_type_info()? {
        TypeInfo::Struct(info) => Some(info),
        _ => None,
    }
}

/// Reflected fields of `target` matching `predicate`. An absent target, or one
/// without struct type information, yields nothing.
pub fn discover_fields(
    target: Option<&dyn Struct>,
    predicate: impl Fn(&Member) -> bool,
) -> Vec<Member> {
    let Some(target) = target else {
        return Vec::new();
    };
    let Some(info) = struct_info_of(target.as_partial_reflect()) else {
        debug!(
            "Inspector: no struct type info for '{}', nothing to discover",
            target.reflect_type_path()
        );
        return Vec::new();
    };
    fields_of(info, &[], predicate)
}

pub(crate) fn fields_of(
    info: &'static StructInfo,
    owner_path: &[&'static str],
    predicate: impl Fn(&Member) -> bool,
) -> Vec<Member> {
    let mut seen = HashSet::new();
    info.iter()
        .filter(|field| !field.custom_attributes().contains::<HideInInspector>())
        .filter(|field| seen.insert(field.name()))
        .map(|field| Member::from_field(field, owner_path))
        .filter(|member| predicate(member))
        .collect()
}

pub fn discover_properties(
    registry: &InspectorRegistry,
    target: Option<&dyn Reflect>,
    predicate: impl Fn(&Member) -> bool,
) -> Vec<Member> {
    let Some(target) = target else {
        return Vec::new();
    };
    let mut seen = HashSet::new();
    registry
        .properties_for(concrete_type_id(target))
        .iter()
        .filter(|property| seen.insert(property.name))
        .map(|property| Member::property(property.name))
        .filter(|member| predicate(member))
        .collect()
}

pub fn discover_methods(
    registry: &InspectorRegistry,
    target: Option<&dyn Reflect>,
    predicate: impl Fn(&Member) -> bool,
) -> Vec<Member> {
    let Some(target) = target else {
        return Vec::new();
    };
    let mut seen = HashSet::new();
    registry
        .buttons_for(concrete_type_id(target))
        .iter()
        .filter(|button| seen.insert(button.label))
        .map(|button| Member::method(button.label))
        .filter(|member| predicate(member))
        .collect()
}

pub(crate) fn concrete_type_id(target: &dyn Reflect) -> TypeId {
    Any::type_id(target.as_any())
}

/// `m_maxSpeed`, `max_speed` and `maxSpeed` all become `Max Speed`.
pub fn nicify_name(name: &str) -> String {
    let trimmed = name.strip_prefix("m_").unwrap_or(name).trim_start_matches('_');
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut previous: Option<char> = None;

    for c in trimmed.chars() {
        if c == '_' || c == ' ' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        } else {
            let boundary = match previous {
                Some(p) => {
                    (c.is_uppercase() && (p.is_lowercase() || p.is_ascii_digit()))
                        || (c.is_ascii_digit() && p.is_alphabetic())
                }
                None => false,
            };
            if boundary && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            current.push(c);
        }
        previous = Some(c);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspector::attributes::BoxGroup;

    #[derive(Reflect, Default)]
    struct Probe {
        alpha: f32,
        #[reflect(@BoxGroup("Stats"))]
        beta: i32,
        #[reflect(@HideInInspector)]
        hidden: bool,
        #[reflect(@ShowNonSerialized)]
        runtime_counter: u32,
    }

    #[test]
    fn discovers_fields_in_declaration_order() {
        let probe = Probe::default();
        let names: Vec<_> = discover_fields(Some(&probe), |_| true)
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["alpha", "beta", "runtime_counter"]);
    }

    #[test]
    fn absent_target_discovers_nothing() {
        assert!(discover_fields(None, |_| true).is_empty());
        let registry = InspectorRegistry::default();
        assert!(discover_properties(&registry, None, |_| true).is_empty());
        assert!(discover_methods(&registry, None, |_| true).is_empty());
    }

    #[test]
    fn serialized_split_follows_annotation() {
        let probe = Probe::default();
        let serialized: Vec<_> = discover_fields(Some(&probe), is_serialized)
            .into_iter()
            .map(|m| m.name)
            .collect();
        let runtime: Vec<_> = discover_fields(Some(&probe), is_non_serialized)
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(serialized, vec!["alpha", "beta"]);
        assert_eq!(runtime, vec!["runtime_counter"]);
    }

    #[test]
    fn member_exposes_annotations() {
        let probe = Probe::default();
        let members = discover_fields(Some(&probe), |m| m.name == "beta");
        assert_eq!(members[0].attribute::<BoxGroup>(), Some(&BoxGroup("Stats")));
        assert_eq!(members[0].kind, MemberKind::Field);
        assert_eq!(members[0].declared_type, "i32");
    }

    #[test]
    fn nicify_handles_common_spellings() {
        assert_eq!(nicify_name("max_speed"), "Max Speed");
        assert_eq!(nicify_name("m_maxSpeed"), "Max Speed");
        assert_eq!(nicify_name("_armor"), "Armor");
        assert_eq!(nicify_name("slot2"), "Slot 2");
        assert_eq!(nicify_name("HP"), "HP");
    }
}
