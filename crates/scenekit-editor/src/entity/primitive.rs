//! Parametric primitives and their materials.

use serde::{Deserialize, Serialize};
use tracing::warn;

use scenekit_core::constants::{
    DEFAULT_DIFFUSE_COLOR, DEFAULT_EMISSIVE_COLOR, DEFAULT_SHININESS, DEFAULT_SPECULAR_COLOR,
    DEFAULT_TRANSPARENCY,
};
use scenekit_core::{vec3, Color, EditorError, Result, Vec3};

use super::{EntityId, Transform, Transformable};

/// The closed set of primitive kinds the editor can place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveType {
    Box,
    Cylinder,
    Cone,
    Dish,
    Extrusion,
    SolidOfRevolution,
}

impl PrimitiveType {
    /// Human-readable label, also the default display name of new instances.
    pub fn label(&self) -> &'static str {
        match self {
            PrimitiveType::Box => "Box",
            PrimitiveType::Cylinder => "Cylinder",
            PrimitiveType::Cone => "Cone",
            PrimitiveType::Dish => "Dish",
            PrimitiveType::Extrusion => "Extrusion",
            PrimitiveType::SolidOfRevolution => "Solid of Revolution",
        }
    }

    /// Parameter names and kinds a valid instance must carry.
    pub fn required_parameters(&self) -> &'static [(&'static str, ParamKind)] {
        match self {
            PrimitiveType::Box => &[("Size", ParamKind::Vec3)],
            PrimitiveType::Cylinder => {
                &[("Radius", ParamKind::Float), ("Height", ParamKind::Float)]
            }
            PrimitiveType::Cone => &[
                ("Bottom Radius", ParamKind::Float),
                ("Top Radius", ParamKind::Float),
                ("Height", ParamKind::Float),
            ],
            PrimitiveType::Dish => &[
                ("Diameter", ParamKind::Float),
                ("Radius", ParamKind::Float),
                ("Height", ParamKind::Float),
            ],
            PrimitiveType::Extrusion => {
                &[("Height", ParamKind::Float), ("Angle", ParamKind::Angle)]
            }
            PrimitiveType::SolidOfRevolution => &[("Angle", ParamKind::Angle)],
        }
    }

    /// Default parameter catalog for this kind, mirroring the scene-graph
    /// node defaults the host renders when no value is given.
    pub fn default_parameters(&self) -> Vec<Parameter> {
        match self {
            PrimitiveType::Box => vec![Parameter::vec3("Size", vec3(2.0, 2.0, 2.0))],
            PrimitiveType::Cylinder => vec![
                Parameter::float("Radius", 1.0),
                Parameter::float("Height", 2.0),
            ],
            PrimitiveType::Cone => vec![
                Parameter::float("Bottom Radius", 1.0),
                Parameter::float("Top Radius", 0.0),
                Parameter::float("Height", 2.0),
            ],
            PrimitiveType::Dish => vec![
                Parameter::float("Diameter", 2.0),
                Parameter::float("Radius", 0.0),
                Parameter::float("Height", 1.0),
            ],
            PrimitiveType::Extrusion => vec![
                Parameter::float("Height", 1.0),
                Parameter::angle("Angle", 0.0),
            ],
            PrimitiveType::SolidOfRevolution => vec![Parameter::angle("Angle", 360.0)],
        }
    }

    /// Checks that `parameters` contains every required name with a
    /// matching kind.
    pub fn validate_parameters(&self, parameters: &[Parameter]) -> Result<()> {
        for (name, kind) in self.required_parameters() {
            let found = parameters.iter().find(|p| p.name == *name);
            match found {
                None => {
                    return Err(EditorError::InvalidConstruction {
                        prim_type: self.label().to_string(),
                        reason: format!("missing parameter \"{name}\""),
                    })
                }
                Some(param) if param.kind != *kind => {
                    return Err(EditorError::InvalidConstruction {
                        prim_type: self.label().to_string(),
                        reason: format!(
                            "parameter \"{name}\" has kind {:?}, expected {kind:?}",
                            param.kind
                        ),
                    })
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

/// Kind tag of a primitive parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamKind {
    Float,
    Vec3,
    /// Scalar angle, held in degrees; converted to radians at the render
    /// host boundary.
    Angle,
}

/// Value of a primitive parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ParamValue {
    Float(f64),
    Vec3(Vec3),
}

impl ParamValue {
    fn matches(&self, kind: ParamKind) -> bool {
        matches!(
            (self, kind),
            (ParamValue::Float(_), ParamKind::Float)
                | (ParamValue::Float(_), ParamKind::Angle)
                | (ParamValue::Vec3(_), ParamKind::Vec3)
        )
    }
}

/// One entry of a primitive's parameter list.
///
/// The list's shape (names and kinds) is fixed at construction; only values
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub kind: ParamKind,
    pub value: ParamValue,
}

impl Parameter {
    pub fn float(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            kind: ParamKind::Float,
            value: ParamValue::Float(value),
        }
    }

    pub fn vec3(name: impl Into<String>, value: Vec3) -> Self {
        Self {
            name: name.into(),
            kind: ParamKind::Vec3,
            value: ParamValue::Vec3(value),
        }
    }

    /// Angle parameter; `degrees` is the UI-facing unit.
    pub fn angle(name: impl Into<String>, degrees: f64) -> Self {
        Self {
            name: name.into(),
            kind: ParamKind::Angle,
            value: ParamValue::Float(degrees),
        }
    }

    /// Value as the render host expects it: angles in radians, everything
    /// else verbatim.
    pub fn host_value(&self) -> ParamValue {
        match (self.kind, self.value) {
            (ParamKind::Angle, ParamValue::Float(degrees)) => {
                ParamValue::Float(degrees.to_radians())
            }
            (_, value) => value,
        }
    }
}

/// Surface material of a primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub diffuse: Color,
    pub specular: Color,
    pub emissive: Color,
    pub transparency: f64,
    pub shininess: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            diffuse: DEFAULT_DIFFUSE_COLOR,
            specular: DEFAULT_SPECULAR_COLOR,
            emissive: DEFAULT_EMISSIVE_COLOR,
            transparency: DEFAULT_TRANSPARENCY,
            shininess: DEFAULT_SHININESS,
        }
    }
}

/// A single material-field edit coming from the UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MaterialEdit {
    Diffuse(Color),
    Specular(Color),
    Emissive(Color),
    Transparency(f64),
    Shininess(f64),
}

impl Material {
    /// Applies one field edit.
    pub fn apply(&mut self, edit: MaterialEdit) {
        match edit {
            MaterialEdit::Diffuse(color) => self.diffuse = color,
            MaterialEdit::Specular(color) => self.specular = color,
            MaterialEdit::Emissive(color) => self.emissive = color,
            MaterialEdit::Transparency(value) => self.transparency = value,
            MaterialEdit::Shininess(value) => self.shininess = value,
        }
    }
}

/// A placed parametric shape: type, parameters, material, and transform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Primitive {
    id: EntityId,
    prim_type: PrimitiveType,
    name: String,
    parameters: Vec<Parameter>,
    material: Material,
    transform: Transform,
    /// Subtractive marker; negative primitives are an export extension
    /// point and currently contribute nothing to exported scenes.
    negative: bool,
}

impl Primitive {
    /// Constructs a primitive after validating the parameter list.
    ///
    /// The list is copied, so later mutation of the caller's catalog cannot
    /// alias the primitive's state. On validation failure nothing is built.
    pub fn new(id: EntityId, prim_type: PrimitiveType, parameters: &[Parameter]) -> Result<Self> {
        prim_type.validate_parameters(parameters)?;

        Ok(Self {
            id,
            prim_type,
            name: prim_type.label().to_string(),
            parameters: parameters.to_vec(),
            material: Material::default(),
            transform: Transform::default(),
            negative: false,
        })
    }

    pub fn prim_type(&self) -> PrimitiveType {
        self.prim_type
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Parameter list with host-facing values (angles in radians).
    pub fn host_parameters(&self) -> Vec<Parameter> {
        self.parameters
            .iter()
            .map(|p| Parameter {
                name: p.name.clone(),
                kind: p.kind,
                value: p.host_value(),
            })
            .collect()
    }

    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Scalar value of a named parameter, if present and scalar.
    pub fn param_float(&self, name: &str) -> Option<f64> {
        match self.parameter(name)?.value {
            ParamValue::Float(value) => Some(value),
            ParamValue::Vec3(_) => None,
        }
    }

    /// Vector value of a named parameter, if present and vector-valued.
    pub fn param_vec3(&self, name: &str) -> Option<Vec3> {
        match self.parameter(name)?.value {
            ParamValue::Vec3(value) => Some(value),
            ParamValue::Float(_) => None,
        }
    }

    /// Updates a parameter's value. The list's shape is immutable: unknown
    /// names and kind mismatches are logged and ignored.
    pub fn set_parameter_value(&mut self, name: &str, value: ParamValue) {
        let Some(param) = self.parameters.iter_mut().find(|p| p.name == name) else {
            warn!(%name, id = %self.id, "set_parameter_value: no such parameter");
            return;
        };
        if !value.matches(param.kind) {
            warn!(%name, id = %self.id, "set_parameter_value: kind mismatch");
            return;
        }
        param.value = value;
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn material_mut(&mut self) -> &mut Material {
        &mut self.material
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn set_negative(&mut self, negative: bool) {
        self.negative = negative;
    }
}

impl Transformable for Primitive {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    fn transform(&self) -> Transform {
        self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_rejects_missing_parameter() {
        let err = Primitive::new(
            EntityId::from("P1"),
            PrimitiveType::Cylinder,
            &[Parameter::float("Radius", 1.0)],
        )
        .unwrap_err();
        assert!(matches!(err, EditorError::InvalidConstruction { .. }));
    }

    #[test]
    fn test_construction_rejects_kind_mismatch() {
        let err = Primitive::new(
            EntityId::from("P1"),
            PrimitiveType::Box,
            &[Parameter::float("Size", 2.0)],
        )
        .unwrap_err();
        assert!(matches!(err, EditorError::InvalidConstruction { .. }));
    }

    #[test]
    fn test_parameters_are_copied_at_construction() {
        let catalog = PrimitiveType::Cylinder.default_parameters();
        let mut prim =
            Primitive::new(EntityId::from("P1"), PrimitiveType::Cylinder, &catalog).unwrap();
        prim.set_parameter_value("Radius", ParamValue::Float(5.0));
        assert_eq!(catalog[0].value, ParamValue::Float(1.0));
        assert_eq!(prim.param_float("Radius"), Some(5.0));
    }

    #[test]
    fn test_set_parameter_value_rejects_kind_mismatch() {
        let mut prim = Primitive::new(
            EntityId::from("P1"),
            PrimitiveType::Box,
            &PrimitiveType::Box.default_parameters(),
        )
        .unwrap();
        prim.set_parameter_value("Size", ParamValue::Float(9.0));
        assert_eq!(prim.param_vec3("Size"), Some(Vec3::new(2.0, 2.0, 2.0)));
    }

    #[test]
    fn test_angle_parameters_reach_host_in_radians() {
        let prim = Primitive::new(
            EntityId::from("P1"),
            PrimitiveType::SolidOfRevolution,
            &PrimitiveType::SolidOfRevolution.default_parameters(),
        )
        .unwrap();
        let host = prim.host_parameters();
        let angle = host.iter().find(|p| p.name == "Angle").unwrap();
        assert_eq!(angle.value, ParamValue::Float(360.0_f64.to_radians()));
    }
}
