// src/inspector/pipeline.rs

use bevy::log::{debug, warn};
use bevy::reflect::{Reflect, ReflectMut, Struct};

use super::attribute_index::{has_recognized_annotation, is_read_only};
use super::classifier::{classify, RenderPlan};
use super::error::{InspectorError, InspectorResult};
use super::foldout_state::{draw_foldout, FoldoutKey, FoldoutStateStore, InstanceId};
use super::host::InspectorHost;
use super::member::{discover_fields, is_serialized, Member};
use super::registry::InspectorRegistry;
use super::session::InspectorSession;
use super::struct_walker::StructWalker;
use crate::settings::InspectorSettings;

pub const NON_SERIALIZED_HEADER: &str = "Non-Serialized Fields";
pub const NATIVE_PROPERTIES_HEADER: &str = "Native Properties";
pub const BUTTONS_HEADER: &str = "Buttons";

/// What one redraw did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderReport {
    pub drawn: usize,
    pub skipped: usize,
    pub used_default_inspector: bool,
    pub changed: bool,
    pub buttons_invoked: Vec<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Serialized,
    NonSerialized,
}

pub struct InspectorRenderPipeline<'a> {
    registry: &'a InspectorRegistry,
    settings: &'a InspectorSettings,
    foldouts: &'a mut FoldoutStateStore,
}

impl<'a> InspectorRenderPipeline<'a> {
    pub fn new(
        registry: &'a InspectorRegistry,
        settings: &'a InspectorSettings,
        foldouts: &'a mut FoldoutStateStore,
    ) -> Self {
        Self {
            registry,
            settings,
            foldouts,
        }
    }

    /// Draws `target` in section order: ungrouped, box groups and foldout groups of
    /// the serialized fields, then runtime fields, computed properties and buttons.
    ///
    /// Starts `session` if it is not active. Members that cannot be read are skipped
    /// for this redraw and counted in the report.
    pub fn render<H: InspectorHost + ?Sized>(
        &mut self,
        target: &mut dyn Reflect,
        session: &mut InspectorSession,
        host: &mut H,
    ) -> RenderReport {
        if !session.is_active() {
            session.on_session_start(target, self.registry);
        }
        let owner_id = session.instance().clone();
        let mut report = RenderReport::default();

        match target.reflect_mut() {
            ReflectMut::Struct(owner) => {
                self.render_serialized(owner, &owner_id, session, host, &mut report);
                self.render_non_serialized(owner, &owner_id, session, host, &mut report);
            }
            _ => debug!(
                "Inspector: '{}' is not a struct, only registered members are drawn",
                owner_id
            ),
        }

        self.render_native_properties(target, session, host, &mut report);
        self.render_buttons(target, session, host, &mut report);
        report
    }

    fn render_serialized<H: InspectorHost + ?Sized>(
        &mut self,
        owner: &mut dyn Struct,
        owner_id: &InstanceId,
        session: &mut InspectorSession,
        host: &mut H,
        report: &mut RenderReport,
    ) {
        let serialized = discover_fields(Some(&*owner), is_serialized);
        let annotated = serialized
            .iter()
            .any(|member| has_recognized_annotation(member, &self.registry.annotations));
        if !annotated {
            report.used_default_inspector = true;
            report.drawn += serialized.len();
            report.changed |= host.draw_default_inspector(owner);
            return;
        }

        let plan = classify(serialized).retain_visible(|member| session.check_visible(&*owner, member));
        self.draw_plan(&plan, Section::Serialized, owner, owner_id, host, report);
    }

    fn render_non_serialized<H: InspectorHost + ?Sized>(
        &mut self,
        owner: &mut dyn Struct,
        owner_id: &InstanceId,
        session: &mut InspectorSession,
        host: &mut H,
        report: &mut RenderReport,
    ) {
        let members = session.non_serialized_fields().to_vec();
        let plan = classify(members).retain_visible(|member| session.check_visible(&*owner, member));
        if plan.is_empty() {
            return;
        }
        if self.settings.draw_section_headers {
            host.draw_section_header(NON_SERIALIZED_HEADER);
        }
        self.draw_plan(&plan, Section::NonSerialized, owner, owner_id, host, report);
    }

    fn render_native_properties<H: InspectorHost + ?Sized>(
        &self,
        target: &dyn Reflect,
        session: &InspectorSession,
        host: &mut H,
        report: &mut RenderReport,
    ) {
        let properties = session.native_properties();
        if properties.is_empty() {
            return;
        }
        if self.settings.draw_section_headers {
            host.draw_section_header(NATIVE_PROPERTIES_HEADER);
        }
        for property in properties {
            match self.registry.read_property(target, property.name) {
                Some(value) => {
                    host.draw_label_value(&property.label(), &value);
                    report.drawn += 1;
                }
                None => {
                    debug!("Inspector: property '{}' unreadable this redraw", property.name);
                    report.skipped += 1;
                }
            }
        }
    }

    fn render_buttons<H: InspectorHost + ?Sized>(
        &self,
        target: &mut dyn Reflect,
        session: &InspectorSession,
        host: &mut H,
        report: &mut RenderReport,
    ) {
        let buttons = session.buttons();
        if buttons.is_empty() {
            return;
        }
        if self.settings.draw_section_headers {
            host.draw_section_header(BUTTONS_HEADER);
        }
        for button in buttons {
            report.drawn += 1;
            if !host.draw_button(button.name) {
                continue;
            }
            match self.registry.invoke_button(target, button.name) {
                Ok(()) => {
                    debug!("Inspector: button '{}' invoked", button.name);
                    report.buttons_invoked.push(button.name);
                    report.changed = true;
                }
                Err(e) => {
                    warn!("Inspector: button '{}' failed: {}", button.name, e);
                    report.skipped += 1;
                }
            }
        }
    }

    fn draw_plan<H: InspectorHost + ?Sized>(
        &mut self,
        plan: &RenderPlan,
        section: Section,
        owner: &mut dyn Struct,
        owner_id: &InstanceId,
        host: &mut H,
        report: &mut RenderReport,
    ) {
        for member in &plan.ungrouped {
            self.draw_member(section, owner, owner_id, member, host, report);
        }

        for group in &plan.box_groups {
            host.begin_box_group(group.key);
            for member in &group.members {
                self.draw_member(section, owner, owner_id, member, host, report);
            }
            host.end_box_group();
        }

        for group in &plan.foldout_groups {
            let key = FoldoutKey::group(owner_id, group.key);
            if !draw_foldout(&mut *host, self.foldouts, &key, group.key) {
                continue;
            }
            host.indent();
            for member in &group.members {
                self.draw_member(section, owner, owner_id, member, host, report);
            }
            host.unindent();
        }
    }

    fn draw_member<H: InspectorHost + ?Sized>(
        &mut self,
        section: Section,
        owner: &mut dyn Struct,
        owner_id: &InstanceId,
        member: &Member,
        host: &mut H,
        report: &mut RenderReport,
    ) {
        let result = match section {
            Section::Serialized => draw_serialized_field(owner, member, host),
            Section::NonSerialized => StructWalker::new(
                &mut *host,
                &mut *self.foldouts,
                self.registry,
                self.settings.max_struct_depth,
            )
            .draw_struct_or_field(owner, owner_id, member, 0),
        };
        match result {
            Ok(changed) => {
                report.drawn += 1;
                report.changed |= changed;
            }
            Err(e) => {
                warn!("Inspector: skipping '{}': {}", member.path(), e);
                report.skipped += 1;
            }
        }
    }
}

fn draw_serialized_field<H: InspectorHost + ?Sized>(
    owner: &mut dyn Struct,
    member: &Member,
    host: &mut H,
) -> InspectorResult<bool> {
    let owner_type = owner.reflect_type_path().to_string();
    let Some(value) = owner.field_mut(member.name) else {
        return Err(InspectorError::FieldUnavailable {
            owner: owner_type,
            field: member.name.to_string(),
        });
    };
    if is_read_only(member) {
        host.draw_read_only_field(&member.label(), &*value);
        return Ok(false);
    }
    Ok(host.draw_field(&member.label(), value, true))
}
