// tests/render_pipeline.rs
mod common;

use attribute_inspector::example_definitions::{register_ship_members, ShipConfig};
use attribute_inspector::inspector::pipeline::{
    BUTTONS_HEADER, NATIVE_PROPERTIES_HEADER, NON_SERIALIZED_HEADER,
};
use attribute_inspector::inspector::{BoxGroup, Foldout, ShowIf};
use bevy::reflect::Reflect;
use common::{field, DrawCall, Harness, RecordingHost};

#[derive(Reflect, Default)]
struct Sample {
    a: f32,
    #[reflect(@BoxGroup("Stats"))]
    b: f32,
    #[reflect(@BoxGroup("Stats"))]
    c: f32,
    #[reflect(@Foldout("Advanced"))]
    d: f32,
}

#[derive(Reflect, Default)]
struct Plain {
    speed: f32,
    lives: u32,
}

#[derive(Reflect, Default)]
struct Conditional {
    shielded: bool,
    #[reflect(@BoxGroup("Shield"))]
    #[reflect(@ShowIf("shielded"))]
    strength: f32,
    #[reflect(@BoxGroup("Shield"))]
    #[reflect(@ShowIf("shielded"))]
    regen: f32,
}

fn ship_harness(owner: &str) -> Harness {
    let mut harness = Harness::new(owner);
    register_ship_members(&mut harness.registry);
    harness
}

#[test]
fn sample_is_drawn_in_section_order() {
    let mut harness = Harness::new("test:sample");
    let mut sample = Sample::default();
    let mut host = RecordingHost::toggling("Advanced");

    let report = harness.render(&mut sample, &mut host);

    assert!(!report.used_default_inspector);
    assert_eq!(
        host.calls,
        vec![
            field("A"),
            DrawCall::BeginBox("Stats".into()),
            field("B"),
            field("C"),
            DrawCall::EndBox,
            DrawCall::Foldout("Advanced".into(), true),
            DrawCall::Indent,
            field("D"),
            DrawCall::Unindent,
        ]
    );
    assert_eq!(report.drawn, 4);
}

#[test]
fn collapsed_foldout_hides_members() {
    let mut harness = Harness::new("test:sample");
    let mut sample = Sample::default();
    let mut host = RecordingHost::default();

    harness.render(&mut sample, &mut host);

    assert_eq!(
        host.calls.last(),
        Some(&DrawCall::Foldout("Advanced".into(), false))
    );
    assert!(!host.drew_field("D"));
}

#[test]
fn unannotated_target_takes_default_path() {
    let mut harness = Harness::new("test:plain");
    let mut plain = Plain::default();
    let mut host = RecordingHost::default();

    let report = harness.render(&mut plain, &mut host);

    let mut default_only = RecordingHost::default();
    attribute_inspector::inspector::InspectorHost::draw_default_inspector(
        &mut default_only,
        &mut Plain::default(),
    );

    assert!(report.used_default_inspector);
    assert_eq!(host.calls, vec![field("Speed"), field("Lives")]);
    assert_eq!(host.calls, default_only.calls);
}

#[test]
fn foldout_state_survives_redraws() {
    let mut harness = Harness::new("test:sample");
    let mut sample = Sample::default();

    harness.render(&mut sample, &mut RecordingHost::toggling("Advanced"));

    let mut second = RecordingHost::default();
    harness.render(&mut sample, &mut second);
    assert!(second.calls.contains(&DrawCall::Foldout("Advanced".into(), true)));
    assert!(second.drew_field("D"));

    let mut closing = RecordingHost::toggling("Advanced");
    harness.render(&mut sample, &mut closing);
    assert!(!closing.drew_field("D"));
}

#[test]
fn foldout_state_is_per_owner() {
    let mut harness = Harness::new("test:first");
    let mut sample = Sample::default();
    harness.render(&mut sample, &mut RecordingHost::toggling("Advanced"));

    let mut other = Harness::new("test:second");
    other.foldouts = std::mem::take(&mut harness.foldouts);
    let mut host = RecordingHost::default();
    other.render(&mut sample, &mut host);
    assert!(!host.drew_field("D"));
}

#[test]
fn invisible_group_draws_no_header() {
    let mut harness = Harness::new("test:conditional");
    let mut target = Conditional::default();

    let mut host = RecordingHost::default();
    harness.render(&mut target, &mut host);
    assert_eq!(host.calls, vec![field("Shielded")]);

    target.shielded = true;
    let mut host = RecordingHost::default();
    harness.render(&mut target, &mut host);
    assert_eq!(
        host.calls,
        vec![
            field("Shielded"),
            DrawCall::BeginBox("Shield".into()),
            field("Strength"),
            field("Regen"),
            DrawCall::EndBox,
        ]
    );
}

#[test]
fn ship_sections_follow_fixed_order() {
    let mut harness = ship_harness("test:ship");
    harness.settings.draw_section_headers = true;
    let mut ship = ShipConfig::default();
    let mut host = RecordingHost::expanding();

    let report = harness.render(&mut ship, &mut host);

    assert_eq!(
        host.field_labels(),
        vec![
            "Name",
            "Hull",
            "Max Speed",
            "Armor",
            "Drag",
            "Afterburner",
            "Spawn Offset",
            "Distance Travelled",
            "Boost Charge",
            "Throttle",
            "Overheated",
            "Ignitions",
            "Throttle",
            "Overheated",
            "Ignitions",
        ]
    );
    assert!(host.calls.contains(&DrawCall::ReadOnly("Hull".into())));
    assert!(!host.drew_field("Editor Cache Id"));

    let sections: Vec<_> = host
        .calls
        .iter()
        .filter_map(|call| match call {
            DrawCall::Section(label) => Some(label.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(
        sections,
        vec![NON_SERIALIZED_HEADER, NATIVE_PROPERTIES_HEADER, BUTTONS_HEADER]
    );

    let tail: Vec<_> = host.calls.iter().rev().take(5).rev().cloned().collect();
    assert_eq!(
        tail,
        vec![
            DrawCall::LabelValue("Top Speed".into(), "42.0 m/s".into()),
            DrawCall::LabelValue("Total Ignitions".into(), "0".into()),
            DrawCall::Section(BUTTONS_HEADER.into()),
            DrawCall::Button("Reset Stats".into()),
            DrawCall::Button("Boost Engine".into()),
        ]
    );
    assert!(report.buttons_invoked.is_empty());
    assert!(!report.changed);
    assert_eq!(report.skipped, 0);
}

#[test]
fn section_headers_are_off_by_default() {
    let mut harness = ship_harness("test:ship");
    let mut ship = ShipConfig::default();
    let mut host = RecordingHost::default();
    harness.render(&mut ship, &mut host);
    assert!(!host
        .calls
        .iter()
        .any(|call| matches!(call, DrawCall::Section(_))));
}

#[test]
fn show_if_is_reevaluated_each_redraw() {
    let mut harness = ship_harness("test:ship");
    let mut ship = ShipConfig::default();

    let mut host = RecordingHost::expanding();
    harness.render(&mut ship, &mut host);
    assert!(!host.drew_field("Afterburner Boost"));

    ship.afterburner = true;
    let mut host = RecordingHost::expanding();
    harness.render(&mut ship, &mut host);
    assert!(host.drew_field("Afterburner Boost"));
}

#[test]
fn buttons_run_only_when_clicked() {
    let mut harness = ship_harness("test:ship");
    let mut ship = ShipConfig::default();

    harness.render(&mut ship, &mut RecordingHost::default());
    assert_eq!(ship.runtime.boost_charge, 0.0);

    let mut host = RecordingHost::default();
    host.clicks.insert("Boost Engine".into());
    let report = harness.render(&mut ship, &mut host);

    assert_eq!(report.buttons_invoked, vec!["Boost Engine"]);
    assert!(report.changed);
    assert_eq!(ship.runtime.boost_charge, 1.0);
    assert_eq!(ship.runtime.thrusters.primary.ignitions, 1);
}

#[test]
fn properties_reflect_current_values() {
    let mut harness = ship_harness("test:ship");
    let mut ship = ShipConfig::default();
    ship.afterburner = true;
    ship.afterburner_boost = 1.0;

    let mut host = RecordingHost::default();
    harness.render(&mut ship, &mut host);
    assert!(host
        .calls
        .contains(&DrawCall::LabelValue("Top Speed".into(), "84.0 m/s".into())));
}

#[test]
fn serialized_edit_marks_target_changed() {
    let mut harness = ship_harness("test:ship");
    let mut ship = ShipConfig::default();
    let mut host = RecordingHost::default();
    host.set_f32.insert("Max Speed".into(), 50.0);

    let report = harness.render(&mut ship, &mut host);
    assert!(report.changed);
    assert_eq!(ship.max_speed, 50.0);
}

#[test]
fn nested_runtime_edit_reaches_the_resource() {
    let mut harness = ship_harness("test:ship");
    let mut ship = ShipConfig::default();
    let mut host = RecordingHost::expanding();
    host.set_f32.insert("Throttle".into(), 0.75);

    let report = harness.render(&mut ship, &mut host);

    assert!(report.changed);
    assert_eq!(ship.runtime.thrusters.primary.throttle, 0.75);
    assert_eq!(ship.runtime.thrusters.secondary.throttle, 0.75);
}

#[test]
fn render_starts_session_implicitly() {
    let mut harness = ship_harness("test:ship");
    assert!(!harness.session.is_active());
    harness.render(&mut ShipConfig::default(), &mut RecordingHost::default());
    assert!(harness.session.is_active());
    assert_eq!(harness.session.buttons().len(), 2);
}
