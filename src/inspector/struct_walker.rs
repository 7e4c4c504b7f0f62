// src/inspector/struct_walker.rs
//! Unfolds composite value fields into their sub-fields.
//!
//! A composite field is read by value, its copy is walked and edited, and the copy is
//! written back into the owning field only when something below it changed. Every
//! level that was copied gets its own write-back, so an edit three levels down
//! reaches the root owner.

use bevy::log::{debug, warn};
use bevy::reflect::{
    NamedField, PartialReflect, ReflectKind, ReflectMut, ReflectRef, Struct, TypeInfo, UnnamedField,
};

use super::attribute_index::{is_read_only, is_visible};
use super::error::{InspectorError, InspectorResult};
use super::foldout_state::{draw_foldout, FoldoutKey, FoldoutStateStore, InstanceId};
use super::host::InspectorHost;
use super::member::{fields_of, Member};
use super::registry::InspectorRegistry;
use super::session::InspectorSession;

/// Struct, tuple struct and tuple fields are unfolded unless their type is registered
/// as a leaf. Enums, primitives and collections are always drawn as leaves.
pub fn is_composite(field: &NamedField, registry: &InspectorRegistry) -> bool {
    field
        .type_info()
        .is_some_and(|info| is_composite_type(info, registry))
}

fn is_composite_type(info: &TypeInfo, registry: &InspectorRegistry) -> bool {
    matches!(
        info,
        TypeInfo::Struct(_) | TypeInfo::TupleStruct(_) | TypeInfo::Tuple(_)
    ) && !registry.is_leaf_type(info.type_id())
}

fn element_info(info: &'static TypeInfo, index: usize) -> Option<&'static TypeInfo> {
    let element = match info {
        TypeInfo::TupleStruct(info) => info.field_at(index),
        TypeInfo::Tuple(info) => info.field_at(index),
        _ => None,
    };
    element.and_then(UnnamedField::type_info)
}

fn element_mut(value: &mut dyn PartialReflect, index: usize) -> Option<&mut dyn PartialReflect> {
    match value.reflect_mut() {
        ReflectMut::TupleStruct(fields) => fields.field_mut(index),
        ReflectMut::Tuple(fields) => fields.field_mut(index),
        _ => None,
    }
}

pub struct StructWalker<'a, H: InspectorHost + ?Sized> {
    host: &'a mut H,
    foldouts: &'a mut FoldoutStateStore,
    registry: &'a InspectorRegistry,
    max_depth: usize,
}

impl<'a, H: InspectorHost + ?Sized> StructWalker<'a, H> {
    pub fn new(
        host: &'a mut H,
        foldouts: &'a mut FoldoutStateStore,
        registry: &'a InspectorRegistry,
        max_depth: usize,
    ) -> Self {
        Self {
            host,
            foldouts,
            registry,
            max_depth,
        }
    }

    /// Draws one field of `owner`: composites through a persisted foldout, anything
    /// else as a leaf. A `ReadOnly` composite is drawn as one read-only row and never
    /// unfolded. Returns whether `owner` changed.
    pub fn draw_struct_or_field(
        &mut self,
        owner: &mut dyn Struct,
        owner_id: &InstanceId,
        member: &Member,
        depth: usize,
    ) -> InspectorResult<bool> {
        let Some(field) = member.field() else {
            return Err(InspectorError::FieldUnavailable {
                owner: owner.reflect_type_path().to_string(),
                field: member.name.to_string(),
            });
        };
        if !is_composite(field, self.registry) {
            return self.draw_leaf(owner, member);
        }
        if is_read_only(member) {
            let value = field_ref(owner, member)?;
            self.host.draw_read_only_field(&member.label(), value);
            return Ok(false);
        }
        if depth >= self.max_depth {
            debug!(
                "Inspector: '{}' nested deeper than {}, drawing read-only",
                member.path(),
                self.max_depth
            );
            let value = field_ref(owner, member)?;
            self.host.draw_read_only_field(&member.label(), value);
            return Ok(false);
        }
        self.draw_composite(owner, owner_id, member, depth)
    }

    pub fn draw_composite(
        &mut self,
        owner: &mut dyn Struct,
        owner_id: &InstanceId,
        member: &Member,
        depth: usize,
    ) -> InspectorResult<bool> {
        let key = FoldoutKey::field(owner_id, member.name);
        if !draw_foldout(&mut *self.host, self.foldouts, &key, &member.label()) {
            return Ok(false);
        }

        let Some(info) = member.field().and_then(NamedField::type_info) else {
            return Err(InspectorError::MissingTypeInfo(member.declared_type.to_string()));
        };
        let mut copy = field_ref(owner, member)?.to_dynamic();
        let mut owner_path = member.owner_path.clone();
        owner_path.push(member.name);

        self.host.indent();
        let changed = self.draw_children(
            &mut *copy,
            info,
            &owner_id.child(member.name),
            &owner_path,
            depth + 1,
        );
        self.host.unindent();

        let changed = changed?;
        if changed {
            write_back(owner, member, &*copy)?;
        }
        Ok(changed)
    }

    /// Draws the sub-fields of a copied composite in place. Named fields keep their
    /// annotations; tuple fields are labelled by index.
    fn draw_children(
        &mut self,
        value: &mut dyn PartialReflect,
        info: &'static TypeInfo,
        id: &InstanceId,
        owner_path: &[&'static str],
        depth: usize,
    ) -> InspectorResult<bool> {
        match (value.reflect_kind(), info) {
            (ReflectKind::Struct, TypeInfo::Struct(struct_info)) => {
                let ReflectMut::Struct(nested) = value.reflect_mut() else {
                    return Err(InspectorError::NotAStruct(info.type_path().to_string()));
                };
                let members = fields_of(struct_info, owner_path, |_| true);
                Ok(self.walk_fields(nested, id, &members, depth, None))
            }
            (ReflectKind::TupleStruct, TypeInfo::TupleStruct(_))
            | (ReflectKind::Tuple, TypeInfo::Tuple(_)) => {
                Ok(self.walk_elements(value, info, id, owner_path, depth))
            }
            _ => Err(InspectorError::NotAStruct(info.type_path().to_string())),
        }
    }

    fn walk_elements(
        &mut self,
        value: &mut dyn PartialReflect,
        info: &'static TypeInfo,
        id: &InstanceId,
        owner_path: &[&'static str],
        depth: usize,
    ) -> bool {
        let len = match value.reflect_ref() {
            ReflectRef::TupleStruct(fields) => fields.field_len(),
            ReflectRef::Tuple(fields) => fields.field_len(),
            _ => 0,
        };
        let mut changed = false;
        for index in 0..len {
            let label = index.to_string();
            let element_info = element_info(info, index);
            let Some(element) = element_mut(value, index) else {
                continue;
            };
            match self.draw_element(element, element_info, id, &label, owner_path, depth) {
                Ok(element_changed) => changed |= element_changed,
                Err(e) => warn!(
                    "Inspector: skipping '{}.{}': {}",
                    owner_path.join("."),
                    label,
                    e
                ),
            }
        }
        changed
    }

    fn draw_element(
        &mut self,
        element: &mut dyn PartialReflect,
        info: Option<&'static TypeInfo>,
        id: &InstanceId,
        label: &str,
        owner_path: &[&'static str],
        depth: usize,
    ) -> InspectorResult<bool> {
        let Some(info) = info.filter(|info| is_composite_type(info, self.registry)) else {
            return Ok(self.host.draw_field(label, element, false));
        };
        if depth >= self.max_depth {
            self.host.draw_read_only_field(label, element);
            return Ok(false);
        }
        if !draw_foldout(&mut *self.host, self.foldouts, &FoldoutKey::field(id, label), label) {
            return Ok(false);
        }
        self.host.indent();
        let changed = self.draw_children(element, info, &id.child(label), owner_path, depth + 1);
        self.host.unindent();
        changed
    }

    /// Draws `members` of `owner` in order, skipping hidden ones. Failures are
    /// logged and the member is skipped for this redraw.
    pub fn walk_fields(
        &mut self,
        owner: &mut dyn Struct,
        owner_id: &InstanceId,
        members: &[Member],
        depth: usize,
        mut session: Option<&mut InspectorSession>,
    ) -> bool {
        let mut changed = false;
        for member in members {
            let visible = match session.as_deref_mut() {
                Some(session) => session.check_visible(owner, member),
                None => is_visible(owner, member),
            };
            if !visible {
                continue;
            }
            match self.draw_struct_or_field(owner, owner_id, member, depth) {
                Ok(field_changed) => changed |= field_changed,
                Err(e) => warn!("Inspector: skipping '{}': {}", member.path(), e),
            }
        }
        changed
    }

    fn draw_leaf(&mut self, owner: &mut dyn Struct, member: &Member) -> InspectorResult<bool> {
        let label = member.label();
        if is_read_only(member) {
            let value = field_ref(owner, member)?;
            self.host.draw_read_only_field(&label, value);
            return Ok(false);
        }
        let owner_type = owner.reflect_type_path().to_string();
        let Some(value) = owner.field_mut(member.name) else {
            return Err(InspectorError::FieldUnavailable {
                owner: owner_type,
                field: member.name.to_string(),
            });
        };
        Ok(self.host.draw_field(&label, value, false))
    }
}

fn field_ref<'o>(owner: &'o dyn Struct, member: &Member) -> InspectorResult<&'o dyn PartialReflect> {
    owner
        .field(member.name)
        .ok_or_else(|| InspectorError::FieldUnavailable {
            owner: owner.reflect_type_path().to_string(),
            field: member.name.to_string(),
        })
}

/// Applies an edited copy to the owning field. On failure the edit is dropped.
pub fn write_back(
    owner: &mut dyn Struct,
    member: &Member,
    value: &dyn PartialReflect,
) -> InspectorResult<()> {
    let owner_type = owner.reflect_type_path().to_string();
    let Some(slot) = owner.field_mut(member.name) else {
        return Err(InspectorError::WriteBack {
            owner: owner_type,
            field: member.name.to_string(),
            reason: "field no longer exists".to_string(),
        });
    };
    slot.try_apply(value).map_err(|e| InspectorError::WriteBack {
        owner: owner_type,
        field: member.name.to_string(),
        reason: e.to_string(),
    })
}
