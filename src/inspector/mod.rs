// src/inspector/mod.rs

pub mod attribute_index;
pub mod attributes;
pub mod classifier;
pub mod error;
pub mod events;
pub mod foldout_state;
pub mod host;
pub mod member;
pub mod pipeline;
pub mod plugin;
pub mod registry;
pub mod resources;
pub mod saved_bool;
pub mod session;
pub mod struct_walker;

pub use attributes::{
    AnnotationRegistry, BoxGroup, Foldout, HideIf, HideInInspector, ReadOnly, ShowIf,
    ShowNonSerialized,
};
pub use classifier::{classify, Group, GroupKind, RenderPlan};
pub use error::{InspectorError, InspectorResult};
pub use events::{InspectedValueChanged, InspectorButtonPressed};
pub use foldout_state::{FoldoutKey, FoldoutStateStore, InstanceId};
pub use host::InspectorHost;
pub use member::{Member, MemberKind};
pub use pipeline::{InspectorRenderPipeline, RenderReport};
pub use plugin::{InspectorAppExt, InspectorPlugin};
pub use registry::InspectorRegistry;
pub use resources::InspectorState;
pub use saved_bool::SavedBoolStore;
pub use session::InspectorSession;
pub use struct_walker::StructWalker;
