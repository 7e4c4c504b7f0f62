// src/ui/widgets/option_widgets.rs
use bevy_egui::egui::{self};

const FIELD_BG: egui::Color32 = egui::Color32::from_rgb(45, 45, 45);

/// Numeric DragValue filling the remaining row width, on the dark field background.
pub(crate) fn add_numeric_drag_value<T>(
    ui: &mut egui::Ui,
    value: &mut T,
    speed: f64,
) -> egui::Response
where
    T: egui::emath::Numeric,
{
    let size = egui::vec2(ui.available_width(), ui.style().spacing.interact_size.y);
    ui.scope(|ui_num| {
        let visuals = &mut ui_num.style_mut().visuals;
        visuals.widgets.inactive.weak_bg_fill = FIELD_BG;
        visuals.widgets.inactive.bg_fill = FIELD_BG;
        visuals.widgets.hovered.weak_bg_fill = FIELD_BG;
        visuals.widgets.hovered.bg_fill = FIELD_BG;
        visuals.widgets.active.weak_bg_fill = FIELD_BG;
        visuals.widgets.active.bg_fill = FIELD_BG;
        ui_num.add_sized(size, egui::DragValue::new(value).speed(speed))
    })
    .inner
}

/// Checkbox vertically centered in a row of standard widget height.
pub(crate) fn add_centered_checkbox(ui: &mut egui::Ui, value: &mut bool) -> egui::Response {
    ui.allocate_ui_with_layout(
        egui::vec2(ui.available_width(), ui.style().spacing.interact_size.y),
        egui::Layout::left_to_right(egui::Align::Center),
        |row_ui| row_ui.add(egui::Checkbox::new(value, "")),
    )
    .inner
}

/// Greyed-out value text for fields that cannot be edited.
pub(crate) fn add_read_only_text(ui: &mut egui::Ui, text: &str) -> egui::Response {
    ui.add(egui::Label::new(egui::RichText::new(text).weak()).truncate())
}
