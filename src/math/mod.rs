//! Minimal linear algebra for the viewer: points and rigid transforms.

pub mod mat4;
pub mod vec3;
