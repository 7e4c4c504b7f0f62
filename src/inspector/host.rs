// src/inspector/host.rs

use bevy::reflect::{PartialReflect, Struct};

use super::member::{discover_fields, is_serialized};

/// Draw primitives the inspector core needs from an editor UI.
///
/// The pipeline owns layout decisions; a host only turns each call into widgets and
/// reports user input back (a changed value, a clicked button, a toggled foldout).
pub trait InspectorHost {
    /// Draws an editable widget for `value`. With `include_children` set, composite
    /// values are drawn with their nested fields. Returns whether the value changed.
    fn draw_field(
        &mut self,
        label: &str,
        value: &mut dyn PartialReflect,
        include_children: bool,
    ) -> bool;

    fn draw_read_only_field(&mut self, label: &str, value: &dyn PartialReflect);

    /// Read-only text row, used for computed properties.
    fn draw_label_value(&mut self, label: &str, value: &str);

    /// Returns true when the button was clicked this redraw.
    fn draw_button(&mut self, label: &str) -> bool;

    fn begin_box_group(&mut self, label: &str);

    fn end_box_group(&mut self);

    /// Draws a collapsible header in state `current` and returns the state after input.
    fn draw_foldout_header(&mut self, current: bool, label: &str) -> bool;

    fn indent(&mut self);

    fn unindent(&mut self);

    fn draw_section_header(&mut self, label: &str);

    /// Plain inspector used when a target carries no recognized annotation: every
    /// serialized field in declaration order, children included.
    fn draw_default_inspector(&mut self, target: &mut dyn Struct) -> bool {
        let mut changed = false;
        for member in discover_fields(Some(&*target), is_serialized) {
            if let Some(value) = target.field_mut(member.name) {
                changed |= self.draw_field(&member.label(), value, true);
            }
        }
        changed
    }
}
