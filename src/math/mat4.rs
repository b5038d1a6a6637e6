//! 4x4 transformation matrix using column-major convention.
//!
//! # Convention
//! - Vectors are **column vectors** on the right: `Mat4 * Vec`
//! - Translation is stored in the **last column**
//! - Transforms chain **right-to-left**: `A * B * v` applies B first, then A
//! - Rotations are **right-handed**: a positive angle turns counter-clockwise
//!   when looking down the axis toward the origin
//!
//! # Example
//! ```ignore
//! let orient = Mat4::rotation_y(yaw) * Mat4::rotation_x(pitch) * Mat4::rotation_z(roll);
//! let result = orient * vertex; // roll applied first, then pitch, then yaw
//! ```

use std::ops::Mul;

use super::vec3::Vec3;

/// 4x4 matrix stored as `data[row][col]` with column-major convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    data: [[f32; 4]; 4],
}

impl Mat4 {
    pub fn new(data: [[f32; 4]; 4]) -> Self {
        Mat4 { data }
    }

    pub fn identity() -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation of `angle` radians around an arbitrary axis.
    ///
    /// The axis does not need to be normalized. A zero-length axis has no
    /// defined direction and yields the identity matrix.
    ///
    /// Built with Rodrigues' formula: `R = cI + (1 - c)aaᵀ + s[a]ₓ`.
    pub fn rotation_axis(axis: Vec3, angle: f32) -> Self {
        let Some(a) = axis.try_normalize() else {
            return Mat4::identity();
        };
        let c = angle.cos();
        let s = angle.sin();
        let t = 1.0 - c;

        Mat4::new([
            [
                c + t * a.x * a.x,
                t * a.x * a.y - s * a.z,
                t * a.x * a.z + s * a.y,
                0.0,
            ],
            [
                t * a.x * a.y + s * a.z,
                c + t * a.y * a.y,
                t * a.y * a.z - s * a.x,
                0.0,
            ],
            [
                t * a.x * a.z - s * a.y,
                t * a.y * a.z + s * a.x,
                c + t * a.z * a.z,
                0.0,
            ],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix around the X axis.
    pub fn rotation_x(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, -s, 0.0],
            [0.0, s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix around the Y axis.
    pub fn rotation_y(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat4::new([
            [c, 0.0, s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix around the Z axis.
    pub fn rotation_z(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat4::new([
            [c, -s, 0.0, 0.0],
            [s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }
}

/// Matrix multiplication: Mat4 * Mat4.
///
/// For column-major convention, `A * B * v` applies B first, then A.
impl Mul<Mat4> for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Self::Output {
        let mut result = [[0.0f32; 4]; 4];

        for (row, out_row) in result.iter_mut().enumerate() {
            for (col, out) in out_row.iter_mut().enumerate() {
                *out = self.data[row][0] * rhs.data[0][col]
                    + self.data[row][1] * rhs.data[1][col]
                    + self.data[row][2] * rhs.data[2][col]
                    + self.data[row][3] * rhs.data[3][col];
            }
        }

        Mat4::new(result)
    }
}

/// Transform a point: Mat4 * Vec3 (treats Vec3 as column vector with w=1).
///
/// Applies the homogeneous divide if w != 1. Rotations and translations keep
/// w at exactly 1.
impl Mul<Vec3> for Mat4 {
    type Output = Vec3;

    fn mul(self, v: Vec3) -> Self::Output {
        let x =
            self.data[0][0] * v.x + self.data[0][1] * v.y + self.data[0][2] * v.z + self.data[0][3];
        let y =
            self.data[1][0] * v.x + self.data[1][1] * v.y + self.data[1][2] * v.z + self.data[1][3];
        let z =
            self.data[2][0] * v.x + self.data[2][1] * v.y + self.data[2][2] * v.z + self.data[2][3];
        let w =
            self.data[3][0] * v.x + self.data[3][1] * v.y + self.data[3][2] * v.z + self.data[3][3];

        if w != 0.0 && w != 1.0 {
            Vec3::new(x / w, y / w, z / w)
        } else {
            Vec3::new(x, y, z)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::FRAC_PI_2;

    fn assert_vec_eq(a: Vec3, b: Vec3) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-5);
        assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-5);
        assert_abs_diff_eq!(a.z, b.z, epsilon = 1e-5);
    }

    #[test]
    fn rotations_are_right_handed() {
        // Quarter turns map each basis vector onto the next one.
        assert_vec_eq(Mat4::rotation_x(FRAC_PI_2) * Vec3::UP, Vec3::FORWARD);
        assert_vec_eq(Mat4::rotation_y(FRAC_PI_2) * Vec3::FORWARD, Vec3::RIGHT);
        assert_vec_eq(Mat4::rotation_z(FRAC_PI_2) * Vec3::RIGHT, Vec3::UP);
    }

    #[test]
    fn axis_rotation_matches_basis_rotations() {
        let p = Vec3::new(1.0, -2.0, 3.5);
        let angle = 0.7;
        assert_vec_eq(
            Mat4::rotation_axis(Vec3::RIGHT, angle) * p,
            Mat4::rotation_x(angle) * p,
        );
        assert_vec_eq(
            Mat4::rotation_axis(Vec3::UP * 4.0, angle) * p,
            Mat4::rotation_y(angle) * p,
        );
        assert_vec_eq(
            Mat4::rotation_axis(Vec3::FORWARD, angle) * p,
            Mat4::rotation_z(angle) * p,
        );
    }

    #[test]
    fn axis_rotation_keeps_points_on_axis() {
        let axis = Vec3::new(1.0, 1.0, 1.0);
        assert_vec_eq(Mat4::rotation_axis(axis, 1.3) * (axis * 2.0), axis * 2.0);
    }

    #[test]
    fn zero_axis_is_identity() {
        assert_eq!(Mat4::rotation_axis(Vec3::ZERO, 1.0), Mat4::identity());
    }

    #[test]
    fn multiplication_applies_right_to_left() {
        let m = Mat4::rotation_x(FRAC_PI_2) * Mat4::rotation_z(FRAC_PI_2);
        // Rotate about Z first: RIGHT -> UP, then about X: UP -> FORWARD.
        assert_vec_eq(m * Vec3::RIGHT, Vec3::FORWARD);
    }
}
