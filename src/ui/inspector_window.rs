// src/ui/inspector_window.rs
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use super::egui_host::EguiHost;
use crate::inspector::events::{InspectedValueChanged, InspectorButtonPressed};
use crate::inspector::foldout_state::InstanceId;
use crate::inspector::pipeline::InspectorRenderPipeline;
use crate::inspector::registry::InspectorRegistry;
use crate::inspector::resources::InspectorState;
use crate::inspector::session::InspectorSession;
use crate::settings::InspectorSettings;

/// Draws the inspector window for resource `T`. The session for `T` starts with the
/// first frame the resource exists and ends when it is removed.
pub fn inspector_window<T: Resource + Reflect + TypePath>(
    mut contexts: EguiContexts,
    target: Option<ResMut<T>>,
    registry: Res<InspectorRegistry>,
    settings: Res<InspectorSettings>,
    mut state: ResMut<InspectorState>,
    mut button_writer: EventWriter<InspectorButtonPressed>,
    mut changed_writer: EventWriter<InspectedValueChanged>,
) {
    let id = InstanceId::for_resource::<T>();
    let Some(mut target) = target else {
        if state.session(&id).is_some_and(InspectorSession::is_active) {
            state.end_session(&id);
        }
        return;
    };

    let ctx = contexts.ctx_mut();
    let (session, foldouts) = state.session_and_foldouts(&id);
    let report = egui::Window::new(T::short_type_path())
        .id(egui::Id::new(id.as_str()))
        .default_width(360.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt(id.as_str())
                .show(ui, |ui| {
                    let mut host = EguiHost::new(ui, settings.indent_width);
                    InspectorRenderPipeline::new(&registry, &settings, foldouts).render(
                        target.bypass_change_detection(),
                        session,
                        &mut host,
                    )
                })
                .inner
        })
        .and_then(|response| response.inner);

    let Some(report) = report else {
        return;
    };
    if report.skipped > 0 {
        trace!("Inspector: {} member(s) of '{}' skipped this frame", report.skipped, id);
    }
    if report.changed {
        target.set_changed();
        changed_writer.write(InspectedValueChanged { target: id.clone() });
    }
    for label in report.buttons_invoked {
        button_writer.write(InspectorButtonPressed {
            target: id.clone(),
            label,
        });
    }
}
