//! Rigid rotations applied to mesh vertices.
//!
//! Two independent inputs drive rotation in the viewer:
//!
//! - [`Orientation`] is applied once while a mesh is loaded, to line up a
//!   model whose authored axes differ from the viewer's "up".
//! - [`Spin`] is applied to the vertex buffer every frame by [`rotate`].
//!
//! Spin is incremental: each frame rotates the already-rotated buffer again
//! instead of recomputing from an absolute angle. Floating-point error
//! therefore accumulates over very long runs, which is fine for a visual demo.

use crate::buffer::VertexBuffer;
use crate::math::{mat4::Mat4, vec3::Vec3};

/// Load-time orientation as yaw/pitch/roll Euler angles in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Orientation {
    /// Rotation around the Y axis.
    pub yaw: f32,
    /// Rotation around the X axis.
    pub pitch: f32,
    /// Rotation around the Z axis.
    pub roll: f32,
}

impl Orientation {
    pub fn new(yaw: f32, pitch: f32, roll: f32) -> Self {
        Self { yaw, pitch, roll }
    }

    pub fn is_identity(&self) -> bool {
        self.yaw == 0.0 && self.pitch == 0.0 && self.roll == 0.0
    }

    /// Combined rotation matrix.
    ///
    /// Order: RotationY(yaw) * RotationX(pitch) * RotationZ(roll)
    /// (roll applied first, then pitch, then yaw)
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::rotation_y(self.yaw.to_radians())
            * Mat4::rotation_x(self.pitch.to_radians())
            * Mat4::rotation_z(self.roll.to_radians())
    }
}

/// Per-frame spin: a fixed axis and a fixed step in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spin {
    pub axis: Vec3,
    pub degrees_per_frame: f32,
}

impl Default for Spin {
    fn default() -> Self {
        Self {
            axis: Vec3::RIGHT,
            degrees_per_frame: 1.0,
        }
    }
}

impl Spin {
    pub fn new(axis: Vec3, degrees_per_frame: f32) -> Self {
        Self {
            axis,
            degrees_per_frame,
        }
    }

    /// Rotation matrix for a single frame step.
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::rotation_axis(self.axis, self.degrees_per_frame.to_radians())
    }
}

/// Rotates every vertex in `buffer` by `angle_degrees` around `axis`, in place.
pub fn rotate(buffer: &mut VertexBuffer, axis: Vec3, angle_degrees: f32) {
    let rotation = Mat4::rotation_axis(axis, angle_degrees.to_radians());
    apply(buffer.vertices_mut(), rotation);
}

/// Applies one [`Spin`] step to `buffer`.
pub fn spin(buffer: &mut VertexBuffer, spin: &Spin) {
    apply(buffer.vertices_mut(), spin.to_matrix());
}

#[inline]
pub(crate) fn apply(vertices: &mut [Vec3], matrix: Mat4) {
    for vertex in vertices.iter_mut() {
        *vertex = matrix * *vertex;
    }
}
