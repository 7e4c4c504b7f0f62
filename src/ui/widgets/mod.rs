// src/ui/widgets/mod.rs

pub(crate) mod option_widgets;

pub(crate) use option_widgets::{add_centered_checkbox, add_numeric_drag_value, add_read_only_text};
