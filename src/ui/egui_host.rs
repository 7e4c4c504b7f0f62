// src/ui/egui_host.rs
use bevy::log::debug;
use bevy::reflect::{
    DynamicEnum, DynamicVariant, PartialReflect, ReflectKind, ReflectMut, ReflectRef, TypeInfo,
    VariantInfo,
};
use bevy_egui::egui;

use super::widgets::{add_centered_checkbox, add_numeric_drag_value, add_read_only_text};
use crate::inspector::host::InspectorHost;

const LABEL_WIDTH: f32 = 140.0;

/// [`InspectorHost`] drawing into an egui `Ui`, one row per field.
pub struct EguiHost<'u> {
    ui: &'u mut egui::Ui,
    indent_width: f32,
    indent_level: usize,
}

impl<'u> EguiHost<'u> {
    pub fn new(ui: &'u mut egui::Ui, indent_width: f32) -> Self {
        Self {
            ui,
            indent_width,
            indent_level: 0,
        }
    }

    fn indent_px(&self) -> f32 {
        self.indent_width * self.indent_level as f32
    }

    fn row<R>(&mut self, label: &str, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
        let indent = self.indent_px();
        self.ui
            .horizontal(|ui| {
                ui.add_space(indent);
                let height = ui.spacing().interact_size.y;
                ui.add_sized([LABEL_WIDTH, height], egui::Label::new(label).truncate());
                add_contents(ui)
            })
            .inner
    }
}

impl InspectorHost for EguiHost<'_> {
    fn draw_field(
        &mut self,
        label: &str,
        value: &mut dyn PartialReflect,
        include_children: bool,
    ) -> bool {
        self.row(label, |ui| edit_value(ui, label, value, include_children))
    }

    fn draw_read_only_field(&mut self, label: &str, value: &dyn PartialReflect) {
        let text = format_value(value);
        self.row(label, |ui| add_read_only_text(ui, &text));
    }

    fn draw_label_value(&mut self, label: &str, value: &str) {
        self.row(label, |ui| add_read_only_text(ui, value));
    }

    fn draw_button(&mut self, label: &str) -> bool {
        let indent = self.indent_px();
        self.ui
            .horizontal(|ui| {
                ui.add_space(indent);
                ui.button(label).clicked()
            })
            .inner
    }

    fn begin_box_group(&mut self, label: &str) {
        let indent = self.indent_px();
        self.ui.add_space(4.0);
        self.ui.horizontal(|ui| {
            ui.add_space(indent);
            ui.label(egui::RichText::new(label).strong());
        });
        self.ui.separator();
        self.indent_level += 1;
    }

    fn end_box_group(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
        self.ui.separator();
    }

    fn draw_foldout_header(&mut self, current: bool, label: &str) -> bool {
        let indent = self.indent_px();
        let arrow = if current { "▼" } else { "▶" };
        let clicked = self
            .ui
            .horizontal(|ui| {
                ui.add_space(indent);
                ui.selectable_label(false, egui::RichText::new(format!("{} {}", arrow, label)).strong())
                    .clicked()
            })
            .inner;
        current ^ clicked
    }

    fn indent(&mut self) {
        self.indent_level += 1;
    }

    fn unindent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    fn draw_section_header(&mut self, label: &str) {
        self.ui.add_space(8.0);
        self.ui.label(egui::RichText::new(label).heading());
        self.ui.separator();
    }
}

fn edit_value(
    ui: &mut egui::Ui,
    id_salt: &str,
    value: &mut dyn PartialReflect,
    include_children: bool,
) -> bool {
    if let Some(changed) = edit_primitive(ui, value, false) {
        return changed;
    }
    match value.reflect_kind() {
        ReflectKind::Enum => edit_unit_enum(ui, id_salt, value),
        ReflectKind::Struct | ReflectKind::TupleStruct | ReflectKind::Tuple
            if include_children || is_numeric_struct(value) =>
        {
            let compact = !include_children || is_numeric_struct(value);
            edit_compound_fields(ui, id_salt, value, compact)
        }
        _ => {
            add_read_only_text(ui, &format_value(value));
            false
        }
    }
}

/// Edits numbers, `bool` and `String` in place. `None` for anything else.
fn edit_primitive(ui: &mut egui::Ui, value: &mut dyn PartialReflect, compact: bool) -> Option<bool> {
    macro_rules! numeric {
        ($($ty:ty => $speed:expr),+ $(,)?) => {
            $(
                if let Some(v) = value.try_downcast_mut::<$ty>() {
                    let response = if compact {
                        ui.add(egui::DragValue::new(v).speed($speed))
                    } else {
                        add_numeric_drag_value(ui, v, $speed)
                    };
                    return Some(response.changed());
                }
            )+
        };
    }
    numeric!(
        f32 => 0.1, f64 => 0.1,
        i8 => 1.0, i16 => 1.0, i32 => 1.0, i64 => 1.0,
        u8 => 1.0, u16 => 1.0, u32 => 1.0, u64 => 1.0, usize => 1.0,
    );
    if let Some(v) = value.try_downcast_mut::<bool>() {
        return Some(add_centered_checkbox(ui, v).changed());
    }
    if let Some(v) = value.try_downcast_mut::<String>() {
        return Some(ui.text_edit_singleline(v).changed());
    }
    None
}

fn is_numeric(value: &dyn PartialReflect) -> bool {
    value.try_downcast_ref::<f32>().is_some()
        || value.try_downcast_ref::<f64>().is_some()
        || value.try_downcast_ref::<i32>().is_some()
        || value.try_downcast_ref::<u32>().is_some()
}

/// Vectors, quaternions and number tuples: every field a number, edited on one line.
fn is_numeric_struct(value: &dyn PartialReflect) -> bool {
    match value.reflect_ref() {
        ReflectRef::Struct(fields) => fields.field_len() > 0 && fields.iter_fields().all(is_numeric),
        ReflectRef::TupleStruct(fields) => {
            fields.field_len() > 0 && fields.iter_fields().all(is_numeric)
        }
        ReflectRef::Tuple(fields) => fields.field_len() > 0 && fields.iter_fields().all(is_numeric),
        _ => false,
    }
}

/// Sub-field labels of a struct, tuple struct or tuple. Tuple fields are labelled by index.
fn compound_labels(value: &dyn PartialReflect) -> Vec<String> {
    match value.reflect_ref() {
        ReflectRef::Struct(fields) => (0..fields.field_len())
            .map(|i| fields.name_at(i).unwrap_or_default().to_string())
            .collect(),
        ReflectRef::TupleStruct(fields) => (0..fields.field_len()).map(|i| i.to_string()).collect(),
        ReflectRef::Tuple(fields) => (0..fields.field_len()).map(|i| i.to_string()).collect(),
        _ => Vec::new(),
    }
}

fn compound_field_mut(value: &mut dyn PartialReflect, index: usize) -> Option<&mut dyn PartialReflect> {
    match value.reflect_mut() {
        ReflectMut::Struct(fields) => fields.field_at_mut(index),
        ReflectMut::TupleStruct(fields) => fields.field_mut(index),
        ReflectMut::Tuple(fields) => fields.field_mut(index),
        _ => None,
    }
}

fn edit_compound_fields(
    ui: &mut egui::Ui,
    id_salt: &str,
    value: &mut dyn PartialReflect,
    compact: bool,
) -> bool {
    let mut changed = false;
    let labels = compound_labels(value);
    let mut edit_field = |ui: &mut egui::Ui, index: usize, name: &str| {
        let Some(field) = compound_field_mut(value, index) else {
            return;
        };
        ui.label(egui::RichText::new(name).small());
        changed |= match edit_primitive(ui, field, compact) {
            Some(field_changed) => field_changed,
            None => edit_value(ui, &format!("{}.{}", id_salt, name), field, !compact),
        };
    };
    if compact {
        ui.horizontal(|ui| {
            for (i, name) in labels.iter().enumerate() {
                edit_field(ui, i, name);
            }
        });
    } else {
        ui.vertical(|ui| {
            for (i, name) in labels.iter().enumerate() {
                ui.horizontal(|ui| edit_field(ui, i, name));
            }
        });
    }
    changed
}

/// Combo box over the unit variants of a reflected enum.
fn edit_unit_enum(ui: &mut egui::Ui, id_salt: &str, value: &mut dyn PartialReflect) -> bool {
    let ReflectRef::Enum(current) = value.reflect_ref() else {
        return false;
    };
    let current_name = current.variant_name().to_string();
    let Some(TypeInfo::Enum(info)) = value.get_represented_type_info() else {
        add_read_only_text(ui, &current_name);
        return false;
    };
    let unit_variants: Vec<&'static str> = info
        .iter()
        .filter(|variant| matches!(variant, VariantInfo::Unit(_)))
        .map(VariantInfo::name)
        .collect();

    let mut picked = None;
    egui::ComboBox::from_id_salt(id_salt)
        .selected_text(current_name.as_str())
        .show_ui(ui, |ui| {
            for name in &unit_variants {
                if ui.selectable_label(*name == current_name, *name).clicked() && *name != current_name {
                    picked = Some(*name);
                }
            }
        });

    let Some(name) = picked else {
        return false;
    };
    match value.try_apply(&DynamicEnum::new(name, DynamicVariant::Unit)) {
        Ok(()) => true,
        Err(e) => {
            debug!("Inspector: could not switch '{}' to '{}': {}", id_salt, name, e);
            false
        }
    }
}

pub(crate) fn format_value(value: &dyn PartialReflect) -> String {
    if let Some(v) = value.try_downcast_ref::<f32>() {
        return format!("{v:.3}");
    }
    if let Some(v) = value.try_downcast_ref::<f64>() {
        return format!("{v:.3}");
    }
    if let Some(v) = value.try_downcast_ref::<String>() {
        return v.clone();
    }
    if let ReflectRef::Enum(e) = value.reflect_ref() {
        return e.variant_name().to_string();
    }
    format!("{value:?}")
}
