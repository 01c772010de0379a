//! Scene editor: primitive/group lifecycle, selection, and transform
//! coordination.
//!
//! [`SceneEditor`] owns the entity tables and the selection state, and is
//! the only writer of both. The render host and the UI surface are passive
//! mirrors passed into each operation; every mutation updates them
//! synchronously before the operation returns, so the tables, the visual
//! scene, and the widgets never drift apart between events.

use std::collections::HashMap;

use tracing::{debug, error, warn};

use scenekit_core::constants::{DEFAULT_GRID_SIZE, HIGHLIGHT_COLOR};
use scenekit_core::{Color, Result, Vec3};

use crate::entity::{
    EntityId, Group, MaterialEdit, Parameter, Primitive, PrimitiveType, Transform, Transformable,
};
use crate::export::DslGenerator;
use crate::host::{NodeHandle, RenderHost};
use crate::input::{InputModifiers, InteractionMode};
use crate::selection::SelectionManager;
use crate::store::EntityStore;
use crate::ui::UiSurface;

/// Borrowed view of the current entity, whichever table it lives in.
#[derive(Debug, Clone, Copy)]
pub enum SceneObject<'a> {
    Primitive(&'a Primitive),
    Group(&'a Group),
}

impl<'a> SceneObject<'a> {
    pub fn id(&self) -> &'a EntityId {
        match self {
            SceneObject::Primitive(prim) => prim.id(),
            SceneObject::Group(group) => group.id(),
        }
    }

    pub fn name(&self) -> &'a str {
        match self {
            SceneObject::Primitive(prim) => prim.name(),
            SceneObject::Group(group) => group.name(),
        }
    }

    pub fn transform(&self) -> Transform {
        match self {
            SceneObject::Primitive(prim) => prim.transform(),
            SceneObject::Group(group) => group.transform(),
        }
    }

    pub fn rotation_degrees(&self) -> Vec3 {
        self.transform().rotation.map(f64::to_degrees)
    }

    pub fn is_group(&self) -> bool {
        matches!(self, SceneObject::Group(_))
    }
}

/// Owns all primitives and groups and mediates every interaction with
/// them: creation, deletion, cloning, selection, highlighting, and
/// transform synchronization with the UI.
///
/// All operations run synchronously to completion; failures degrade to
/// logged no-ops so the tables are never left partially mutated.
#[derive(Debug)]
pub struct SceneEditor {
    store: EntityStore,
    selection: SelectionManager,
    /// Visual mirror handles, one per registered primitive.
    handles: HashMap<EntityId, NodeHandle>,
    grid_size: f64,
    highlight_color: Color,
}

impl SceneEditor {
    pub fn new() -> Self {
        Self {
            store: EntityStore::new(),
            selection: SelectionManager::new(),
            handles: HashMap::new(),
            grid_size: DEFAULT_GRID_SIZE,
            highlight_color: HIGHLIGHT_COLOR,
        }
    }

    // --- lifecycle ---

    /// Creates a primitive, registers it, mirrors it into the host, and
    /// makes it the sole selection.
    ///
    /// Construction is validated first; on rejection nothing is registered
    /// anywhere. Adding a primitive always leaves group-editing mode.
    pub fn add_primitive(
        &mut self,
        ui: &mut dyn UiSurface,
        host: &mut dyn RenderHost,
        mode: InteractionMode,
        prim_type: PrimitiveType,
        parameters: &[Parameter],
    ) -> Result<EntityId> {
        ui.set_group_mode(false);

        let id = self.store.allocate_primitive_id();
        let primitive = Primitive::new(id.clone(), prim_type, parameters).map_err(|err| {
            error!(%err, "add_primitive: construction rejected");
            err
        })?;

        let handle = host.create_node(prim_type);
        host.apply_parameters(handle, &primitive.host_parameters());
        host.apply_material(handle, primitive.material());
        host.set_transform(handle, &primitive.transform());
        host.register_drag_handler(handle, &id, self.grid_size);
        self.handles.insert(id.clone(), handle);

        let name = primitive.name().to_string();
        self.store.insert_primitive(primitive);

        self.selection.replace_selected(Vec::new());
        self.select_object(ui, host, mode, &id);
        self.sync_transform_fields(ui, mode);
        ui.tree_insert(&id, &name);

        Ok(id)
    }

    /// Duplicates the current primitive: same type and parameter values,
    /// fresh identity, and the source's translation and scale. Rotation is
    /// deliberately not copied. No-op when nothing (or a group) is current.
    pub fn clone_current(
        &mut self,
        ui: &mut dyn UiSurface,
        host: &mut dyn RenderHost,
        mode: InteractionMode,
    ) -> Option<EntityId> {
        let Some(source_id) = self.selection.current().cloned() else {
            debug!("clone_current: nothing selected");
            return None;
        };
        let Some(source) = self.store.primitive(&source_id) else {
            warn!(id = %source_id, "clone_current: current object is not a primitive");
            return None;
        };
        let prim_type = source.prim_type();
        let parameters = source.parameters().to_vec();
        let translation = source.translation();
        let scale = source.scale();

        let clone_id = match self.add_primitive(ui, host, mode, prim_type, &parameters) {
            Ok(id) => id,
            Err(err) => {
                error!(%err, "clone_current: re-adding the source failed");
                return None;
            }
        };

        if let Some(clone) = self.store.primitive_mut(&clone_id) {
            clone.set_translation(translation);
            clone.set_scale(scale);
        }
        self.sync_host_transform(host, &clone_id);
        self.sync_transform_fields(ui, mode);
        self.show_current_bounding_volume(host, true);

        Some(clone_id)
    }

    /// Removes the current primitive: visual subtree, drag handler, tree
    /// entry, and table row. Idempotent — a missing or already-removed
    /// current id is a logged no-op.
    pub fn remove_current(&mut self, ui: &mut dyn UiSurface, host: &mut dyn RenderHost) {
        let Some(id) = self.selection.current().cloned() else {
            debug!("remove_current: nothing selected");
            return;
        };
        if self.store.primitive(&id).is_none() {
            warn!(%id, "remove_current: no primitive with this id");
            return;
        }

        if let Some(handle) = self.handles.remove(&id) {
            host.remove_node(handle);
        }
        self.store.remove_primitive(&id);
        ui.tree_remove(&id);
        self.clear_selection(ui, host);
    }

    /// Removes every primitive through the single-removal path, then drops
    /// any remaining groups. Safe to call on an already-empty scene.
    pub fn remove_all(&mut self, ui: &mut dyn UiSurface, host: &mut dyn RenderHost) {
        for id in self.store.primitive_ids() {
            self.selection.set_current(id);
            self.remove_current(ui, host);
        }
        self.store.clear();
        self.selection.clear();
    }

    // --- selection ---

    /// Makes `id` the current entity and rebuilds everything derived from
    /// that choice: the selected list, group mode, the parameter and
    /// material panels, highlighting, the tree view, and the transform
    /// fields. Unknown ids are a logged no-op.
    pub fn select_object(
        &mut self,
        ui: &mut dyn UiSurface,
        host: &mut dyn RenderHost,
        mode: InteractionMode,
        id: &EntityId,
    ) {
        let is_group = self.store.is_group(id);
        if !is_group && self.store.primitive(id).is_none() {
            warn!(%id, "select_object: unknown id");
            return;
        }

        self.selection.set_current(id.clone());

        // Toggle group mode only on an actual transition.
        if ui.group_mode() != is_group {
            ui.set_group_mode(is_group);
        }

        if is_group {
            let members: Vec<EntityId> = self
                .store
                .group(id)
                .map(|g| g.member_ids().to_vec())
                .unwrap_or_default();
            self.selection.replace_selected(members);
        } else {
            self.selection.replace_selected([id.clone()]);
            if let Some(prim) = self.store.primitive(id) {
                ui.clear_parameters();
                ui.show_parameters(prim.parameters());
                ui.show_material(prim.material());
            }
            ui.set_properties_enabled(true);
        }

        self.highlight_current(host, true);
        ui.tree_activate(id);
        ui.set_transform_enabled(true);
        self.sync_transform_fields(ui, mode);
    }

    /// Pick protocol for primitives.
    ///
    /// Without shift (or with nothing selected yet) this collapses the
    /// selection to `[id]`. With shift held and `id` different from the
    /// primary, membership is toggled: absent ids are appended and
    /// highlighted, present ones removed and un-highlighted; the primary
    /// itself is never changed through this path. Growing to two selected
    /// primitives disables the transform controls, shrinking back to one
    /// re-enables them.
    pub fn primitive_selected(
        &mut self,
        ui: &mut dyn UiSurface,
        host: &mut dyn RenderHost,
        mode: InteractionMode,
        id: &EntityId,
        modifiers: InputModifiers,
    ) {
        if self.store.primitive(id).is_none() {
            warn!(%id, "primitive_selected: unknown id");
            return;
        }

        // Picking a primitive dissolves an active group selection.
        if ui.group_mode() {
            ui.set_group_mode(false);
            self.clear_selection(ui, host);
        }

        if self.selection.is_empty() || !modifiers.shift {
            self.select_object(ui, host, mode, id);
            self.sync_transform_fields(ui, mode);
        } else if self.selection.primary() != Some(id) {
            if self.selection.contains(id) {
                self.selection.remove(id);
                self.set_primitive_highlight(host, id, false);
            } else {
                self.selection.push(id.clone());
                self.set_primitive_highlight(host, id, true);
            }

            if self.selection.len() == 2 {
                ui.set_transform_enabled(false);
                ui.set_properties_enabled(false);
            }
        }

        if self.selection.len() == 1 {
            ui.set_transform_enabled(true);
            ui.set_properties_enabled(true);
        }
    }

    /// Clears the current entity, hides the bounding outline, and disables
    /// the transform and properties panels.
    pub fn clear_selection(&mut self, ui: &mut dyn UiSurface, host: &mut dyn RenderHost) {
        self.selection.clear_current();
        self.highlight_current(host, false);
        self.show_current_bounding_volume(host, false);
        ui.set_transform_enabled(false);
        ui.set_properties_enabled(false);
    }

    // --- grouping ---

    /// Collects the selected primitives into a new group and makes it
    /// current. No-op while a group is already active (groups never nest),
    /// and ids already owned by another group are skipped.
    pub fn group_selected(&mut self, ui: &mut dyn UiSurface, host: &mut dyn RenderHost) {
        if ui.group_mode() {
            debug!("group_selected: a group is already active");
            return;
        }
        if self.selection.is_empty() {
            debug!("group_selected: nothing selected");
            return;
        }

        let gid = self.store.allocate_group_id();
        let mut group = Group::new(gid.clone());
        for id in self.selection.selected_ids().to_vec() {
            if self.store.group_of(&id).is_some() {
                debug!(%id, "group_selected: skipping id already in a group");
                continue;
            }
            group.add_member(id);
        }
        if group.is_empty() {
            debug!("group_selected: every selected primitive is already grouped");
            return;
        }

        self.selection.replace_selected(group.member_ids().to_vec());
        self.store.insert_group(group);
        self.selection.set_current(gid);
        ui.set_group_mode(true);
        self.show_current_bounding_volume(host, true);
    }

    /// Dissolves the current group, releasing its members back to
    /// independent selectability; the first member becomes the selection.
    /// Always leaves group-editing mode.
    pub fn ungroup_current(
        &mut self,
        ui: &mut dyn UiSurface,
        host: &mut dyn RenderHost,
        mode: InteractionMode,
    ) {
        if let Some(id) = self.selection.current().cloned() {
            if let Some(group) = self.store.remove_group(&id) {
                ui.set_group_mode(false);
                match group.member_ids().first() {
                    Some(member) if self.store.primitive(member).is_some() => {
                        let member = member.clone();
                        self.select_object(ui, host, mode, &member);
                    }
                    _ => self.clear_selection(ui, host),
                }
                return;
            }
        }
        ui.set_group_mode(false);
    }

    // --- highlight and bounding volume ---

    /// Refreshes highlight state for the current entity: every primitive
    /// is un-highlighted first, then the current primitive — or, for a
    /// group, each of its members — is highlighted when `on`. At most one
    /// entity (or one composite) carries the highlight afterwards.
    pub fn highlight_current(&self, host: &mut dyn RenderHost, on: bool) {
        let Some(current) = self.selection.current() else {
            return;
        };
        self.show_current_bounding_volume(host, true);

        for id in self.store.primitive_ids() {
            self.set_primitive_highlight(host, &id, false);
        }
        if on {
            if let Some(group) = self.store.group(current) {
                for member in group.member_ids() {
                    self.set_primitive_highlight(host, member, true);
                }
            } else {
                self.set_primitive_highlight(host, current, true);
            }
        }
    }

    /// Mirrors the current entity's extent as the 8-corner outline and
    /// toggles its visibility. Groups report the merge of their members'
    /// volumes. The visibility flag is pushed even when nothing is
    /// current.
    pub fn show_current_bounding_volume(&self, host: &mut dyn RenderHost, show: bool) {
        if let Some(object) = self.current_object() {
            let transform = object.transform();
            let volume = match object {
                SceneObject::Primitive(prim) => self
                    .handles
                    .get(prim.id())
                    .and_then(|&handle| host.query_volume(handle)),
                SceneObject::Group(group) => group
                    .member_ids()
                    .iter()
                    .filter_map(|member| self.handles.get(member))
                    .filter_map(|&handle| host.query_volume(handle))
                    .reduce(|a, b| a.merge(&b)),
            };
            if let Some(volume) = volume {
                host.update_bounding_outline(&volume.corners(), &transform);
            }
        }
        host.set_bounding_outline_visible(show);
    }

    // --- transform synchronization ---

    /// Pushes the current entity's name and the transform component
    /// selected by `mode` into the UI fields. No-op when nothing is
    /// current.
    pub fn sync_transform_fields(&self, ui: &mut dyn UiSurface, mode: InteractionMode) {
        let Some(object) = self.current_object() else {
            return;
        };
        ui.set_name_field(object.name());
        let values = match mode {
            InteractionMode::Translation => object.transform().translation,
            InteractionMode::Rotation => object.rotation_degrees(),
            InteractionMode::Scale => object.transform().scale,
        };
        ui.set_transform_fields(values);
    }

    /// Reads the UI transform fields back into the component selected by
    /// `mode`, leaving the other two components untouched, then re-syncs
    /// the visual mirror and the bounding outline.
    pub fn apply_transform_fields(
        &mut self,
        ui: &mut dyn UiSurface,
        host: &mut dyn RenderHost,
        mode: InteractionMode,
    ) {
        let Some(current) = self.selection.current().cloned() else {
            warn!("apply_transform_fields: nothing selected");
            return;
        };
        let values = ui.transform_fields();

        if let Some(prim) = self.store.primitive_mut(&current) {
            Self::apply_transform_values(prim, mode, values);
        } else if let Some(group) = self.store.group_mut(&current) {
            Self::apply_transform_values(group, mode, values);
        } else {
            warn!(id = %current, "apply_transform_fields: id resolves to no entity");
            return;
        }

        self.sync_host_transform(host, &current);
        self.show_current_bounding_volume(host, true);
    }

    fn apply_transform_values<T: Transformable + ?Sized>(
        entity: &mut T,
        mode: InteractionMode,
        values: Vec3,
    ) {
        match mode {
            InteractionMode::Translation => entity.set_translation(values),
            InteractionMode::Rotation => entity.set_rotation_degrees(values),
            InteractionMode::Scale => entity.set_scale(values),
        }
    }

    /// Renames the current primitive from the UI name field and mirrors
    /// the new name into the tree view. Groups cannot be renamed yet.
    pub fn rename_current(&mut self, ui: &mut dyn UiSurface) {
        if ui.group_mode() {
            debug!("rename_current: group renaming is not supported yet");
            return;
        }
        let Some(current) = self.selection.current().cloned() else {
            warn!("rename_current: nothing selected");
            return;
        };
        let name = ui.name_field();
        let Some(prim) = self.store.primitive_mut(&current) else {
            warn!(id = %current, "rename_current: no primitive with this id");
            return;
        };
        prim.set_name(&name);
        ui.tree_rename(&current, &name);
    }

    // --- host callbacks and mirror updates ---

    /// Discrete move callback from a drag gesture. With shift held the
    /// move is part of a selection gesture and ignored. Otherwise the
    /// primitive's translation is updated and, if it was not already
    /// current, it re-selects itself; each callback is independently
    /// idempotent against selection state.
    pub fn primitive_moved(
        &mut self,
        ui: &mut dyn UiSurface,
        host: &mut dyn RenderHost,
        id: &EntityId,
        position: Vec3,
        modifiers: InputModifiers,
    ) {
        if modifiers.shift {
            return;
        }
        {
            let Some(prim) = self.store.primitive_mut(id) else {
                warn!(%id, "primitive_moved: unknown id");
                return;
            };
            prim.set_translation(position);
        }
        self.sync_host_transform(host, id);

        if self.selection.current() != Some(id) {
            self.select_object(ui, host, InteractionMode::Translation, id);
        } else {
            self.sync_transform_fields(ui, InteractionMode::Translation);
            self.show_current_bounding_volume(host, true);
        }
    }

    /// Toggles the render flag of a primitive's visual node.
    pub fn set_visibility(&mut self, host: &mut dyn RenderHost, id: &EntityId, visible: bool) {
        match self.handles.get(id) {
            Some(&handle) => host.set_visible(handle, visible),
            None => warn!(%id, "set_visibility: no visual node for id"),
        }
    }

    /// Applies one material-field edit to the current primitive and
    /// re-mirrors the material. The highlight tint is removed first so it
    /// never bleeds into the stored color.
    pub fn apply_material_edit(&mut self, host: &mut dyn RenderHost, edit: MaterialEdit) {
        self.highlight_current(host, false);
        let Some(current) = self.selection.current().cloned() else {
            warn!("apply_material_edit: nothing selected");
            return;
        };
        let Some(prim) = self.store.primitive_mut(&current) else {
            warn!(id = %current, "apply_material_edit: current object is not a primitive");
            return;
        };
        prim.material_mut().apply(edit);
        let material = prim.material().clone();
        if let Some(&handle) = self.handles.get(&current) {
            host.apply_material(handle, &material);
        }
    }

    /// Updates the snap-grid cell size on every registered drag handler.
    pub fn set_grid_size(&mut self, host: &mut dyn RenderHost, size: f64) {
        self.grid_size = size;
        for &handle in self.handles.values() {
            host.set_drag_grid_size(handle, size);
        }
    }

    fn sync_host_transform(&self, host: &mut dyn RenderHost, id: &EntityId) {
        if let (Some(prim), Some(&handle)) = (self.store.primitive(id), self.handles.get(id)) {
            host.set_transform(handle, &prim.transform());
        }
    }

    fn set_primitive_highlight(&self, host: &mut dyn RenderHost, id: &EntityId, on: bool) {
        if let Some(&handle) = self.handles.get(id) {
            host.set_highlight(handle, on, self.highlight_color);
        }
    }

    // --- export ---

    /// One-shot pull of the whole entity set into DSL text.
    pub fn export_scene(&self) -> String {
        DslGenerator::new().generate(&self.store)
    }

    // --- accessors ---

    /// The current entity, wherever it lives. Callers must tolerate `None`.
    pub fn current_object(&self) -> Option<SceneObject<'_>> {
        let id = self.selection.current()?;
        if let Some(group) = self.store.group(id) {
            Some(SceneObject::Group(group))
        } else if let Some(prim) = self.store.primitive(id) {
            Some(SceneObject::Primitive(prim))
        } else {
            warn!(%id, "current_object: id resolves to no entity");
            None
        }
    }

    pub fn current_id(&self) -> Option<&EntityId> {
        self.selection.current()
    }

    /// Selected primitive ids, primary first.
    pub fn selected_ids(&self) -> &[EntityId] {
        self.selection.selected_ids()
    }

    pub fn primitive(&self, id: &EntityId) -> Option<&Primitive> {
        self.store.primitive(id)
    }

    pub fn primitive_mut(&mut self, id: &EntityId) -> Option<&mut Primitive> {
        self.store.primitive_mut(id)
    }

    pub fn group(&self, id: &EntityId) -> Option<&Group> {
        self.store.group(id)
    }

    /// Every primitive id in insertion order.
    pub fn id_list(&self) -> Vec<EntityId> {
        self.store.primitive_ids()
    }

    pub fn primitive_count(&self) -> usize {
        self.store.primitive_count()
    }

    pub fn group_count(&self) -> usize {
        self.store.group_count()
    }

    pub fn grid_size(&self) -> f64 {
        self.grid_size
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }
}

impl Default for SceneEditor {
    fn default() -> Self {
        Self::new()
    }
}
