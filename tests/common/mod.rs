// tests/common/mod.rs
#![allow(dead_code)]

use std::collections::{HashMap, HashSet};

use attribute_inspector::inspector::{
    FoldoutStateStore, InspectorHost, InspectorRegistry, InspectorRenderPipeline, InspectorSession,
    InstanceId, RenderReport,
};
use attribute_inspector::settings::InspectorSettings;
use bevy::reflect::{PartialReflect, Reflect};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Field(String),
    ReadOnly(String),
    LabelValue(String, String),
    Button(String),
    BeginBox(String),
    EndBox,
    Foldout(String, bool),
    Indent,
    Unindent,
    Section(String),
}

/// Host that records every draw call. Foldouts listed in `toggle` are clicked,
/// buttons in `clicks` are pressed, and `f32` fields in `set_f32` are edited.
#[derive(Default)]
pub struct RecordingHost {
    pub calls: Vec<DrawCall>,
    pub expand_all: bool,
    pub toggle: HashSet<String>,
    pub clicks: HashSet<String>,
    pub set_f32: HashMap<String, f32>,
}

impl RecordingHost {
    pub fn expanding() -> Self {
        Self {
            expand_all: true,
            ..Default::default()
        }
    }

    pub fn toggling(label: &str) -> Self {
        let mut host = Self::default();
        host.toggle.insert(label.to_string());
        host
    }

    pub fn field_labels(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Field(label) | DrawCall::ReadOnly(label) => Some(label.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn drew_field(&self, label: &str) -> bool {
        self.field_labels().contains(&label)
    }
}

impl InspectorHost for RecordingHost {
    fn draw_field(&mut self, label: &str, value: &mut dyn PartialReflect, _include_children: bool) -> bool {
        self.calls.push(DrawCall::Field(label.to_string()));
        if let (Some(new), Some(current)) = (self.set_f32.get(label), value.try_downcast_mut::<f32>()) {
            if *current != *new {
                *current = *new;
                return true;
            }
        }
        false
    }

    fn draw_read_only_field(&mut self, label: &str, _value: &dyn PartialReflect) {
        self.calls.push(DrawCall::ReadOnly(label.to_string()));
    }

    fn draw_label_value(&mut self, label: &str, value: &str) {
        self.calls
            .push(DrawCall::LabelValue(label.to_string(), value.to_string()));
    }

    fn draw_button(&mut self, label: &str) -> bool {
        self.calls.push(DrawCall::Button(label.to_string()));
        self.clicks.contains(label)
    }

    fn begin_box_group(&mut self, label: &str) {
        self.calls.push(DrawCall::BeginBox(label.to_string()));
    }

    fn end_box_group(&mut self) {
        self.calls.push(DrawCall::EndBox);
    }

    fn draw_foldout_header(&mut self, current: bool, label: &str) -> bool {
        let next = if self.expand_all {
            true
        } else {
            current ^ self.toggle.contains(label)
        };
        self.calls.push(DrawCall::Foldout(label.to_string(), next));
        next
    }

    fn indent(&mut self) {
        self.calls.push(DrawCall::Indent);
    }

    fn unindent(&mut self) {
        self.calls.push(DrawCall::Unindent);
    }

    fn draw_section_header(&mut self, label: &str) {
        self.calls.push(DrawCall::Section(label.to_string()));
    }
}

/// Everything one inspected target needs across redraws.
pub struct Harness {
    pub registry: InspectorRegistry,
    pub settings: InspectorSettings,
    pub foldouts: FoldoutStateStore,
    pub session: InspectorSession,
}

impl Harness {
    pub fn new(owner: &str) -> Self {
        Self {
            registry: InspectorRegistry::default(),
            settings: InspectorSettings::default(),
            foldouts: FoldoutStateStore::default(),
            session: InspectorSession::new(InstanceId::new(owner)),
        }
    }

    pub fn render(&mut self, target: &mut dyn Reflect, host: &mut RecordingHost) -> RenderReport {
        InspectorRenderPipeline::new(&self.registry, &self.settings, &mut self.foldouts).render(
            target,
            &mut self.session,
            host,
        )
    }
}

pub fn field(label: &str) -> DrawCall {
    DrawCall::Field(label.to_string())
}
