//! Math aliases for 3D editor state.

/// 3D vector used for translations, Euler angles, and scale factors.
pub type Vec3 = nalgebra::Vector3<f64>;

/// Shorthand constructor for [`Vec3`].
pub fn vec3(x: f64, y: f64, z: f64) -> Vec3 {
    Vec3::new(x, y, z)
}
