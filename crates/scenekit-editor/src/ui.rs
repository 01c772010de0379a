//! UI-surface contract: the widget side of the editor boundary.

use scenekit_core::Vec3;

use crate::entity::{EntityId, Material, Parameter};

/// The widget layer as the editor sees it.
///
/// A passive mirror: the editor pushes values into panels and fields after
/// each state change and reads field contents back on explicit apply
/// operations. Which transform component the shared X/Y/Z fields hold is
/// decided by the [`InteractionMode`](crate::input::InteractionMode) passed
/// into the editor operation, not by the surface.
pub trait UiSurface {
    /// Empties the parameter panel.
    fn clear_parameters(&mut self);

    /// Populates the parameter panel for a single selected primitive.
    fn show_parameters(&mut self, parameters: &[Parameter]);

    /// Shows a primitive's material in the material panel.
    fn show_material(&mut self, material: &Material);

    /// Current contents of the three shared transform fields.
    fn transform_fields(&self) -> Vec3;

    /// Replaces the contents of the three shared transform fields.
    fn set_transform_fields(&mut self, values: Vec3);

    /// Current contents of the name field.
    fn name_field(&self) -> String;

    fn set_name_field(&mut self, name: &str);

    /// Enables or disables the transform fields and the delete/clone
    /// controls.
    fn set_transform_enabled(&mut self, enabled: bool);

    /// Enables or disables the parameter/material properties panel.
    fn set_properties_enabled(&mut self, enabled: bool);

    /// Switches the surface between single-primitive and group-editing
    /// presentation.
    fn set_group_mode(&mut self, active: bool);

    /// Whether the surface is in group-editing presentation.
    fn group_mode(&self) -> bool;

    /// Inserts an entity under the scene root of the tree view.
    fn tree_insert(&mut self, id: &EntityId, name: &str);

    fn tree_remove(&mut self, id: &EntityId);

    fn tree_rename(&mut self, id: &EntityId, name: &str);

    /// Marks an entity as active in the tree view.
    fn tree_activate(&mut self, id: &EntityId);
}
