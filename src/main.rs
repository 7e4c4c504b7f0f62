// src/main.rs

#![cfg_attr(all(not(debug_assertions), target_os = "windows"), windows_subsystem = "windows")]

use bevy::{
    log::LogPlugin,
    prelude::*,
    window::WindowPlugin,
    winit::{UpdateMode, WinitSettings},
};
use bevy_egui::EguiPlugin;
use clap::Parser;
use std::time::Duration;

use attribute_inspector::cli::{self, Cli};
use attribute_inspector::example_definitions::add_ship_demo;
use attribute_inspector::InspectorPlugin;

fn main() {
    let args = Cli::parse();
    if let Some(command) = args.command {
        std::process::exit(cli::run(command));
    }

    let mut app = App::new();
    app.insert_resource(WinitSettings {
        focused_mode: UpdateMode::Continuous,
        unfocused_mode: UpdateMode::reactive_low_power(Duration::from_secs_f32(1.0 / 5.0)),
    })
    .add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Attribute Inspector".into(),
                    ..default()
                }),
                ..default()
            })
            .set(LogPlugin {
                level: bevy::log::Level::INFO,
                filter: "wgpu=error,naga=warn,attribute_inspector=debug".to_string(),
                ..default()
            }),
    )
    .add_plugins(EguiPlugin {
        enable_multipass_for_primary_context: true,
    })
    .add_plugins(InspectorPlugin);

    add_ship_demo(&mut app);
    app.run();
}
