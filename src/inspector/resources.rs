// src/inspector/resources.rs
use bevy::log::info;
use bevy::prelude::Resource;
use std::collections::HashMap;

use super::foldout_state::{FoldoutStateStore, InstanceId};
use super::session::InspectorSession;

/// Foldout state shared by every inspector window plus one session per inspected
/// target.
#[derive(Resource, Default, Debug)]
pub struct InspectorState {
    pub foldouts: FoldoutStateStore,
    pub(crate) sessions: HashMap<InstanceId, InspectorSession>,
}

impl InspectorState {
    pub fn new(foldouts: FoldoutStateStore) -> Self {
        Self {
            foldouts,
            sessions: HashMap::new(),
        }
    }

    /// Session for `id` together with the foldout store, created on first use.
    pub fn session_and_foldouts(
        &mut self,
        id: &InstanceId,
    ) -> (&mut InspectorSession, &mut FoldoutStateStore) {
        let session = self
            .sessions
            .entry(id.clone())
            .or_insert_with(|| InspectorSession::new(id.clone()));
        (session, &mut self.foldouts)
    }

    pub fn session(&self, id: &InstanceId) -> Option<&InspectorSession> {
        self.sessions.get(id)
    }

    pub fn end_session(&mut self, id: &InstanceId) {
        if let Some(mut session) = self.sessions.remove(id) {
            session.on_session_end(&mut self.foldouts);
        }
    }

    pub fn end_all_sessions(&mut self) {
        let count = self.sessions.len();
        for (_, mut session) in self.sessions.drain() {
            session.on_session_end(&mut self.foldouts);
        }
        self.foldouts.flush();
        info!("Inspector: ended {} session(s)", count);
    }
}
