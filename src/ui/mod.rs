// src/ui/mod.rs

pub mod egui_host;
pub mod inspector_window;
pub(crate) mod widgets;

pub use egui_host::EguiHost;
pub use inspector_window::inspector_window;
