#![allow(dead_code)]
// Shared test doubles: a recording render host and UI surface that stand in
// for the scene-graph engine and the widget layer.

use std::collections::HashMap;

use scenekit_core::{vec3, Color, Vec3};
use scenekit_editor::{
    EntityId, InteractionMode, Material, NodeHandle, Parameter, PrimitiveType, RenderHost,
    SceneEditor, Transform, UiSurface, Volume,
};

/// Mirror state of one visual node.
#[derive(Debug, Clone)]
pub struct NodeState {
    pub prim_type: PrimitiveType,
    pub parameters: Vec<Parameter>,
    pub material: Option<Material>,
    pub transform: Transform,
    pub highlighted: bool,
    pub visible: bool,
    pub grid_size: f64,
    pub drag_id: Option<EntityId>,
}

/// Render host double that records every mirror update.
pub struct RecordingHost {
    next_handle: u64,
    pub nodes: HashMap<NodeHandle, NodeState>,
    pub removed: Vec<NodeHandle>,
    /// Volume reported for any alive node unless overridden per handle.
    pub default_volume: Volume,
    pub volumes: HashMap<NodeHandle, Volume>,
    pub outline_visible: bool,
    pub outline_corners: Option<[Vec3; 8]>,
    pub outline_transform: Option<Transform>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self {
            next_handle: 0,
            nodes: HashMap::new(),
            removed: Vec::new(),
            default_volume: Volume::new(vec3(-1.0, -1.0, -1.0), vec3(1.0, 1.0, 1.0)),
            volumes: HashMap::new(),
            outline_visible: false,
            outline_corners: None,
            outline_transform: None,
        }
    }

    /// Handle of the node registered for an entity id.
    pub fn handle_of(&self, id: &EntityId) -> Option<NodeHandle> {
        self.nodes
            .iter()
            .find(|(_, state)| state.drag_id.as_ref() == Some(id))
            .map(|(&handle, _)| handle)
    }

    pub fn node_of(&self, id: &EntityId) -> Option<&NodeState> {
        let handle = self.handle_of(id)?;
        self.nodes.get(&handle)
    }

    pub fn is_highlighted(&self, id: &EntityId) -> bool {
        self.node_of(id).map(|n| n.highlighted).unwrap_or(false)
    }
}

impl RenderHost for RecordingHost {
    fn create_node(&mut self, prim_type: PrimitiveType) -> NodeHandle {
        self.next_handle += 1;
        let handle = NodeHandle(self.next_handle);
        self.nodes.insert(
            handle,
            NodeState {
                prim_type,
                parameters: Vec::new(),
                material: None,
                transform: Transform::default(),
                highlighted: false,
                visible: true,
                grid_size: 0.0,
                drag_id: None,
            },
        );
        handle
    }

    fn apply_parameters(&mut self, node: NodeHandle, parameters: &[Parameter]) {
        if let Some(state) = self.nodes.get_mut(&node) {
            state.parameters = parameters.to_vec();
        }
    }

    fn apply_material(&mut self, node: NodeHandle, material: &Material) {
        if let Some(state) = self.nodes.get_mut(&node) {
            state.material = Some(material.clone());
        }
    }

    fn set_transform(&mut self, node: NodeHandle, transform: &Transform) {
        if let Some(state) = self.nodes.get_mut(&node) {
            state.transform = *transform;
        }
    }

    fn set_highlight(&mut self, node: NodeHandle, on: bool, _color: Color) {
        if let Some(state) = self.nodes.get_mut(&node) {
            state.highlighted = on;
        }
    }

    fn query_volume(&self, node: NodeHandle) -> Option<Volume> {
        if !self.nodes.contains_key(&node) {
            return None;
        }
        Some(self.volumes.get(&node).copied().unwrap_or(self.default_volume))
    }

    fn set_visible(&mut self, node: NodeHandle, visible: bool) {
        if let Some(state) = self.nodes.get_mut(&node) {
            state.visible = visible;
        }
    }

    fn remove_node(&mut self, node: NodeHandle) {
        self.nodes.remove(&node);
        self.removed.push(node);
    }

    fn register_drag_handler(&mut self, node: NodeHandle, id: &EntityId, grid_size: f64) {
        if let Some(state) = self.nodes.get_mut(&node) {
            state.drag_id = Some(id.clone());
            state.grid_size = grid_size;
        }
    }

    fn set_drag_grid_size(&mut self, node: NodeHandle, grid_size: f64) {
        if let Some(state) = self.nodes.get_mut(&node) {
            state.grid_size = grid_size;
        }
    }

    fn update_bounding_outline(&mut self, corners: &[Vec3; 8], transform: &Transform) {
        self.outline_corners = Some(*corners);
        self.outline_transform = Some(*transform);
    }

    fn set_bounding_outline_visible(&mut self, visible: bool) {
        self.outline_visible = visible;
    }
}

/// UI surface double exposing every field the editor writes.
pub struct RecordingUi {
    pub group_mode: bool,
    pub transform_fields: Vec3,
    pub name_field: String,
    pub transform_enabled: bool,
    pub properties_enabled: bool,
    pub shown_parameters: Option<Vec<Parameter>>,
    pub shown_material: Option<Material>,
    pub parameter_clears: usize,
    pub tree: Vec<(EntityId, String)>,
    pub tree_removed: Vec<EntityId>,
    pub active_node: Option<EntityId>,
}

impl RecordingUi {
    pub fn new() -> Self {
        Self {
            group_mode: false,
            transform_fields: Vec3::zeros(),
            name_field: String::new(),
            transform_enabled: false,
            properties_enabled: false,
            shown_parameters: None,
            shown_material: None,
            parameter_clears: 0,
            tree: Vec::new(),
            tree_removed: Vec::new(),
            active_node: None,
        }
    }

    pub fn tree_name_of(&self, id: &EntityId) -> Option<&str> {
        self.tree
            .iter()
            .find(|(tid, _)| tid == id)
            .map(|(_, name)| name.as_str())
    }
}

impl UiSurface for RecordingUi {
    fn clear_parameters(&mut self) {
        self.parameter_clears += 1;
        self.shown_parameters = None;
    }

    fn show_parameters(&mut self, parameters: &[Parameter]) {
        self.shown_parameters = Some(parameters.to_vec());
    }

    fn show_material(&mut self, material: &Material) {
        self.shown_material = Some(material.clone());
    }

    fn transform_fields(&self) -> Vec3 {
        self.transform_fields
    }

    fn set_transform_fields(&mut self, values: Vec3) {
        self.transform_fields = values;
    }

    fn name_field(&self) -> String {
        self.name_field.clone()
    }

    fn set_name_field(&mut self, name: &str) {
        self.name_field = name.to_string();
    }

    fn set_transform_enabled(&mut self, enabled: bool) {
        self.transform_enabled = enabled;
    }

    fn set_properties_enabled(&mut self, enabled: bool) {
        self.properties_enabled = enabled;
    }

    fn set_group_mode(&mut self, active: bool) {
        self.group_mode = active;
    }

    fn group_mode(&self) -> bool {
        self.group_mode
    }

    fn tree_insert(&mut self, id: &EntityId, name: &str) {
        self.tree.push((id.clone(), name.to_string()));
    }

    fn tree_remove(&mut self, id: &EntityId) {
        self.tree.retain(|(tid, _)| tid != id);
        self.tree_removed.push(id.clone());
    }

    fn tree_rename(&mut self, id: &EntityId, name: &str) {
        if let Some(entry) = self.tree.iter_mut().find(|(tid, _)| tid == id) {
            entry.1 = name.to_string();
        }
    }

    fn tree_activate(&mut self, id: &EntityId) {
        self.active_node = Some(id.clone());
    }
}

/// Adds a primitive of the given type with its default parameter catalog.
pub fn add_default(
    editor: &mut SceneEditor,
    ui: &mut RecordingUi,
    host: &mut RecordingHost,
    prim_type: PrimitiveType,
) -> EntityId {
    editor
        .add_primitive(
            ui,
            host,
            InteractionMode::Translation,
            prim_type,
            &prim_type.default_parameters(),
        )
        .expect("default parameters are always valid")
}

/// Adds a box primitive with its default parameter catalog.
pub fn add_box(
    editor: &mut SceneEditor,
    ui: &mut RecordingUi,
    host: &mut RecordingHost,
) -> EntityId {
    add_default(editor, ui, host, PrimitiveType::Box)
}
