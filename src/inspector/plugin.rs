// src/inspector/plugin.rs
use bevy::prelude::*;
use bevy_egui::EguiContextPass;

use super::events::{InspectedValueChanged, InspectorButtonPressed};
use super::foldout_state::FoldoutStateStore;
use super::registry::InspectorRegistry;
use super::resources::InspectorState;
use super::saved_bool::SavedBoolStore;
use crate::settings::{io::load_or_default, InspectorSettings};
use crate::ui::inspector_window;

/// Registers the inspector resources and events. Targets are added with
/// [`InspectorAppExt::inspect_resource`].
pub struct InspectorPlugin;

impl Plugin for InspectorPlugin {
    fn build(&self, app: &mut App) {
        let settings: InspectorSettings = load_or_default();
        let cells = if settings.persist_foldouts {
            SavedBoolStore::open_default().unwrap_or_else(|e| {
                error!("Inspector: foldout state unavailable, keeping it in memory: {}", e);
                SavedBoolStore::in_memory()
            })
        } else {
            SavedBoolStore::in_memory()
        };

        app.init_resource::<InspectorRegistry>()
            .insert_resource(settings)
            .insert_resource(InspectorState::new(FoldoutStateStore::new(cells)))
            .add_event::<InspectorButtonPressed>()
            .add_event::<InspectedValueChanged>()
            .add_systems(Update, log_button_presses)
            .add_systems(Last, end_sessions_on_exit);

        info!("InspectorPlugin initialized.");
    }
}

fn log_button_presses(mut events: EventReader<InspectorButtonPressed>) {
    for event in events.read() {
        info!("Inspector: '{}' pressed on '{}'", event.label, event.target);
    }
}

fn end_sessions_on_exit(mut exit: EventReader<AppExit>, mut state: ResMut<InspectorState>) {
    if exit.read().next().is_some() {
        state.end_all_sessions();
    }
}

pub trait InspectorAppExt {
    /// Opens an inspector window for the reflected resource `T`.
    fn inspect_resource<T: Resource + Reflect + TypePath>(&mut self) -> &mut Self;

    fn register_inspector_property<T: Reflect>(
        &mut self,
        name: &'static str,
        getter: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> &mut Self;

    fn register_inspector_button<T: Reflect>(
        &mut self,
        label: &'static str,
        action: impl Fn(&mut T) + Send + Sync + 'static,
    ) -> &mut Self;
}

impl InspectorAppExt for App {
    fn inspect_resource<T: Resource + Reflect + TypePath>(&mut self) -> &mut Self {
        self.add_systems(EguiContextPass, inspector_window::<T>)
    }

    fn register_inspector_property<T: Reflect>(
        &mut self,
        name: &'static str,
        getter: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> &mut Self {
        self.init_resource::<InspectorRegistry>();
        self.world_mut()
            .resource_mut::<InspectorRegistry>()
            .register_property::<T>(name, getter);
        self
    }

    fn register_inspector_button<T: Reflect>(
        &mut self,
        label: &'static str,
        action: impl Fn(&mut T) + Send + Sync + 'static,
    ) -> &mut Self {
        self.init_resource::<InspectorRegistry>();
        self.world_mut()
            .resource_mut::<InspectorRegistry>()
            .register_button::<T>(label, action);
        self
    }
}
