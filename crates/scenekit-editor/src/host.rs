//! Render-host contract: the scene-graph side of the editor boundary.

use scenekit_core::{Color, Vec3};

use crate::entity::{EntityId, Material, Parameter, PrimitiveType, Transform};

/// Opaque handle to a visual node owned by the render host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle(pub u64);

/// Axis-aligned extent of a visual node, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume {
    pub min: Vec3,
    pub max: Vec3,
}

impl Volume {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Smallest volume containing both inputs.
    pub fn merge(&self, other: &Volume) -> Volume {
        Volume {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    /// The eight box corners in outline order: the four bottom corners
    /// counter-clockwise, then the four top corners in the same order.
    pub fn corners(&self) -> [Vec3; 8] {
        let (min, max) = (self.min, self.max);
        [
            Vec3::new(min.x, min.y, min.z),
            Vec3::new(min.x, min.y, max.z),
            Vec3::new(max.x, min.y, max.z),
            Vec3::new(max.x, min.y, min.z),
            Vec3::new(min.x, max.y, min.z),
            Vec3::new(min.x, max.y, max.z),
            Vec3::new(max.x, max.y, max.z),
            Vec3::new(max.x, max.y, min.z),
        ]
    }
}

/// The rendering engine as the editor sees it.
///
/// The host owns every visual node and mirrors the entity tables: the
/// editor calls these methods synchronously after each table mutation, and
/// the host never writes editor state back. Drag gestures flow the other
/// way — the host resolves a dragged node to the [`EntityId`] it was
/// registered with and invokes
/// [`SceneEditor::primitive_moved`](crate::editor::SceneEditor::primitive_moved)
/// per discrete move callback.
pub trait RenderHost {
    /// Materializes a visual node for a primitive kind and returns its
    /// handle.
    fn create_node(&mut self, prim_type: PrimitiveType) -> NodeHandle;

    /// Pushes parameter values onto a node. Angle parameters arrive in
    /// radians.
    fn apply_parameters(&mut self, node: NodeHandle, parameters: &[Parameter]);

    /// Pushes a primitive's material onto a node.
    fn apply_material(&mut self, node: NodeHandle, material: &Material);

    /// Pushes a primitive's full transform onto a node.
    fn set_transform(&mut self, node: NodeHandle, transform: &Transform);

    /// Turns a node's highlight tint on or off.
    fn set_highlight(&mut self, node: NodeHandle, on: bool, color: Color);

    /// Current extent of a node, if the host has computed one.
    fn query_volume(&self, node: NodeHandle) -> Option<Volume>;

    /// Toggles a node's render flag.
    fn set_visible(&mut self, node: NodeHandle, visible: bool);

    /// Detaches the node's drag handlers and removes its whole visual
    /// subtree.
    fn remove_node(&mut self, node: NodeHandle);

    /// Attaches a snap-to-grid drag handler that reports moves for `id`.
    fn register_drag_handler(&mut self, node: NodeHandle, id: &EntityId, grid_size: f64);

    /// Updates the grid cell size of an already-registered drag handler.
    fn set_drag_grid_size(&mut self, node: NodeHandle, grid_size: f64);

    /// Replaces the bounding outline's eight corner points and the
    /// transform positioning them.
    fn update_bounding_outline(&mut self, corners: &[Vec3; 8], transform: &Transform);

    /// Shows or hides the bounding outline.
    fn set_bounding_outline_visible(&mut self, visible: bool);
}
