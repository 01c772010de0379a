//! # SceneKit Editor
//!
//! The editing core of a browser-hosted 3D scene editor: users place,
//! transform, group, and export parametric primitives rendered by a
//! declarative scene-graph engine living in the page DOM.
//!
//! ## Core Components
//!
//! ### Entity Model
//! - **Primitives**: typed parametric shapes with a parameter list, a
//!   material, and a transform
//! - **Groups**: ordered collections of primitive ids manipulated as one
//!   transformable unit
//! - **Entity Store**: the owning tables and the canonical insertion order
//!
//! ### Coordination
//! - **Scene Editor**: lifecycle, selection, highlighting, and transform
//!   synchronization between the tables, the render host, and the UI
//! - **Selection Manager**: the current entity plus the ordered
//!   multi-select list
//!
//! ### Export
//! - **DSL Generator**: one-shot translation of the entity set into
//!   procedural shape-construction commands
//!
//! ## Architecture
//!
//! ```text
//! UI / input events
//!   └── SceneEditor (entity tables + selection)
//!         ├── RenderHost trait (visual mirror, volumes, drag handlers)
//!         ├── UiSurface trait (panels, fields, tree view)
//!         └── DslGenerator (export)
//! ```
//!
//! The editor is single-threaded and event-driven: each operation runs to
//! completion and synchronizes both mirrors before returning. The render
//! host and UI surface never write editor state; drag and pick gestures
//! re-enter through explicit callbacks carrying an [`input::InputModifiers`]
//! snapshot.

pub mod editor;
pub mod entity;
pub mod export;
pub mod host;
pub mod input;
pub mod selection;
pub mod store;
pub mod ui;

pub use editor::{SceneEditor, SceneObject};
pub use entity::{
    EntityId, Group, Material, MaterialEdit, ParamKind, ParamValue, Parameter, Primitive,
    PrimitiveType, Transform, Transformable,
};
pub use export::DslGenerator;
pub use host::{NodeHandle, RenderHost, Volume};
pub use input::{InputModifiers, InteractionMode};
pub use selection::SelectionManager;
pub use store::EntityStore;
pub use ui::UiSurface;
