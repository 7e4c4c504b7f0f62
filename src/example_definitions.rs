// src/example_definitions.rs
use bevy::prelude::*;

use crate::inspector::attributes::{
    BoxGroup, Foldout, HideInInspector, ReadOnly, ShowIf, ShowNonSerialized,
};
use crate::inspector::registry::InspectorRegistry;
use crate::inspector::InspectorAppExt;

// --- Demo resource edited by the binary ---
#[derive(Resource, Reflect, Debug, Clone, PartialEq)]
pub struct ShipConfig {
    pub name: String,
    #[reflect(@ReadOnly)]
    pub hull: HullClass,

    #[reflect(@BoxGroup("Stats"))]
    pub max_speed: f32,
    #[reflect(@BoxGroup("Stats"))]
    pub armor: u32,

    #[reflect(@Foldout("Advanced"))]
    pub drag: f32,
    #[reflect(@Foldout("Advanced"))]
    pub afterburner: bool,
    #[reflect(@Foldout("Advanced"))]
    #[reflect(@ShowIf("afterburner"))]
    pub afterburner_boost: f32,
    #[reflect(@Foldout("Advanced"))]
    pub spawn_offset: Vec3,

    #[reflect(@ShowNonSerialized)]
    pub distance_travelled: f32,
    #[reflect(@ShowNonSerialized)]
    pub runtime: RuntimeStats,

    #[reflect(@HideInInspector)]
    pub editor_cache_id: u64,
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            name: "Nova".to_string(),
            hull: HullClass::Frigate,
            max_speed: 42.0,
            armor: 120,
            drag: 0.15,
            afterburner: false,
            afterburner_boost: 0.5,
            spawn_offset: Vec3::ZERO,
            distance_travelled: 0.0,
            runtime: RuntimeStats::default(),
            editor_cache_id: 0,
        }
    }
}

#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HullClass {
    Corvette,
    #[default]
    Frigate,
    Cruiser,
}

#[derive(Reflect, Debug, Clone, PartialEq, Default)]
pub struct RuntimeStats {
    pub boost_charge: f32,
    pub thrusters: ThrusterBank,
}

#[derive(Reflect, Debug, Clone, PartialEq, Default)]
pub struct ThrusterBank {
    pub primary: Thruster,
    pub secondary: Thruster,
}

#[derive(Reflect, Debug, Clone, PartialEq, Default)]
pub struct Thruster {
    pub throttle: f32,
    pub overheated: bool,
    #[reflect(@ReadOnly)]
    pub ignitions: u32,
}

impl ShipConfig {
    pub fn top_speed(&self) -> f32 {
        if self.afterburner {
            self.max_speed * (1.0 + self.afterburner_boost)
        } else {
            self.max_speed
        }
    }
}

/// Computed properties and buttons of [`ShipConfig`].
pub fn register_ship_members(registry: &mut InspectorRegistry) {
    registry
        .register_property::<ShipConfig>("Top Speed", |ship| format!("{:.1} m/s", ship.top_speed()))
        .register_property::<ShipConfig>("Total Ignitions", |ship| {
            let bank = &ship.runtime.thrusters;
            (bank.primary.ignitions + bank.secondary.ignitions).to_string()
        })
        .register_button::<ShipConfig>("Reset Stats", |ship| {
            ship.runtime = RuntimeStats::default();
            ship.distance_travelled = 0.0;
        })
        .register_button::<ShipConfig>("Boost Engine", |ship| {
            ship.runtime.boost_charge = 1.0;
            let primary = &mut ship.runtime.thrusters.primary;
            primary.throttle = 1.0;
            primary.ignitions += 1;
        });
}

/// Inserts the demo resource and opens its inspector.
pub fn add_ship_demo(app: &mut App) {
    app.init_resource::<InspectorRegistry>();
    register_ship_members(&mut app.world_mut().resource_mut::<InspectorRegistry>());
    app.init_resource::<ShipConfig>()
        .inspect_resource::<ShipConfig>();
}
