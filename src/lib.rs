// src/lib.rs

pub mod cli;
pub mod example_definitions;
pub mod inspector;
pub mod settings;
pub mod ui;

pub use inspector::{InspectorAppExt, InspectorPlugin};
