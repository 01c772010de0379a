//! DSL generation: turns the entity set into procedural shape-construction
//! commands for the external modeling language.

use tracing::debug;

use crate::entity::{Primitive, PrimitiveType, Transformable};
use crate::store::EntityStore;

/// Comment line opening every exported scene.
const SCENE_HEADER: &str = "# scene data exported from the SceneKit editor\n";

/// Generator for the shape-construction DSL.
///
/// Generation is a pure function of the entity set: primitives are emitted
/// in insertion order, one statement per line, with `{}`-formatted numeric
/// literals so the output never depends on the process locale.
#[derive(Debug, Clone, Default)]
pub struct DslGenerator;

impl DslGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Exports every primitive in the store.
    pub fn generate(&self, store: &EntityStore) -> String {
        let mut out = String::from(SCENE_HEADER);
        let mut negatives = Vec::new();

        for prim in store.primitives_in_order() {
            if prim.is_negative() {
                negatives.push(prim);
                continue;
            }
            out.push_str(&self.primitive_commands(prim));
        }

        out.push_str(&self.subtraction_commands(&negatives));
        out
    }

    /// Full contribution of one primitive: construction command(s), a
    /// translate command, and a display command. Unsupported kinds
    /// contribute the empty string.
    pub fn primitive_commands(&self, prim: &Primitive) -> String {
        let mut out = self.construction_commands(prim);
        if out.is_empty() {
            return out;
        }

        let id = prim.id();
        let translation = prim.translation();
        out.push_str(&format!(
            "{id} = translate_shape({id},{})\n",
            self.vector_literal(translation.x, translation.y, translation.z)
        ));
        out.push_str(&format!("affiche({id})\n"));
        out
    }

    /// Construction command(s) for one primitive, keyed by its type.
    fn construction_commands(&self, prim: &Primitive) -> String {
        let id = prim.id();

        match prim.prim_type() {
            PrimitiveType::Box => {
                let Some(size) = prim.param_vec3("Size") else {
                    debug!(%id, "export: box without a Size parameter");
                    return String::new();
                };
                format!("{id} = make_box({}, {}, {})\n", size.x, size.y, size.z)
            }
            PrimitiveType::Cylinder => {
                let (Some(radius), Some(height)) =
                    (prim.param_float("Radius"), prim.param_float("Height"))
                else {
                    debug!(%id, "export: cylinder without Radius/Height parameters");
                    return String::new();
                };
                // The DSL constructor takes a diameter.
                format!("{id} = make_cylinder({},{})\n", radius * 2.0, height)
            }
            PrimitiveType::Cone => {
                let (Some(bottom), Some(top), Some(height)) = (
                    prim.param_float("Bottom Radius"),
                    prim.param_float("Top Radius"),
                    prim.param_float("Height"),
                ) else {
                    debug!(%id, "export: cone without radius/height parameters");
                    return String::new();
                };
                format!("{id} = make_cone({bottom},{top},{height})\n")
            }
            PrimitiveType::Dish => {
                let Some(diameter) = prim.param_float("Diameter") else {
                    debug!(%id, "export: dish without a Diameter parameter");
                    return String::new();
                };
                // A dish is a half sphere: build the full sphere, then cut
                // away its lower half with a translated cylinder. The DSL
                // has no non-uniform scale, so a nonzero Radius parameter
                // is not representable and is dropped.
                let cut = format!("{id}_cut");
                let mut out = format!("{id} = make_sphere({})\n", diameter * 0.5);
                out.push_str(&format!(
                    "{cut} = make_cylinder({}, {})\n",
                    diameter,
                    diameter * 0.5
                ));
                out.push_str(&format!(
                    "{cut} = translate_shape({cut}, {})\n",
                    self.vector_literal(0.0, 0.0, -diameter * 0.5)
                ));
                out.push_str(&format!("{id} = cut_shapes({id}, {cut})\n"));
                out
            }
            // Free-form kinds have no DSL counterpart and are excluded
            // from the export.
            PrimitiveType::Extrusion | PrimitiveType::SolidOfRevolution => String::new(),
        }
    }

    /// Extension point for subtractive primitives: collected from the
    /// scene, not yet combined into the output.
    fn subtraction_commands(&self, negatives: &[&Primitive]) -> String {
        if !negatives.is_empty() {
            debug!(
                count = negatives.len(),
                "export: subtractive primitives are not exported yet"
            );
        }
        String::new()
    }

    fn vector_literal(&self, x: f64, y: f64, z: f64) -> String {
        format!("Vector({x}, {y}, {z})")
    }
}
