//! Planar homogeneous transforms.
//!
//! A [`Transform2D`] is a 3×3 matrix whose upper-left 2×2 block is a rotation
//! and whose last column holds a translation.  Composition is plain matrix
//! multiplication, so a chain of local-frame moves and turns collapses into a
//! single matrix that maps the robot frame into the world frame.
//!
//! # Example
//!
//! ```rust
//! use robopose_kinematics::transform::Transform2D;
//!
//! // Turn 90° counter-clockwise, then step 2 units forward in the new frame.
//! let t = Transform2D::rotation(std::f64::consts::FRAC_PI_2)
//!     .compose(&Transform2D::translation(2.0, 0.0));
//!
//! let (x, y) = t.translation_xy();
//! assert!(x.abs() < 1e-12);
//! assert!((y - 2.0).abs() < 1e-12);
//! ```

// ────────────────────────────────────────────────────────────────────────────
// Transform2D
// ────────────────────────────────────────────────────────────────────────────

/// A 2-D rigid-body transform in homogeneous coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    m: [[f64; 3]; 3],
}

impl Transform2D {
    /// The identity transform (no translation, no rotation).
    pub fn identity() -> Self {
        Self {
            m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// A pure translation by `(dx, dy)`.
    pub fn translation(dx: f64, dy: f64) -> Self {
        Self {
            m: [[1.0, 0.0, dx], [0.0, 1.0, dy], [0.0, 0.0, 1.0]],
        }
    }

    /// A pure counter-clockwise rotation by `theta_rad`.
    pub fn rotation(theta_rad: f64) -> Self {
        let (s, c) = theta_rad.sin_cos();
        Self {
            m: [[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// The pose transform for a frame located at `(x, y)` with heading
    /// `theta_rad`: rotation by `theta_rad` followed by translation.
    pub fn from_pose(x: f64, y: f64, theta_rad: f64) -> Self {
        let (s, c) = theta_rad.sin_cos();
        Self {
            m: [[c, -s, x], [s, c, y], [0.0, 0.0, 1.0]],
        }
    }

    /// Matrix product `self · rhs`.
    ///
    /// With `self` = T_world_robot and `rhs` expressed in the robot frame, the
    /// result is the updated T_world_robot after applying `rhs` locally.
    pub fn compose(&self, rhs: &Self) -> Self {
        let a = &self.m;
        let b = &rhs.m;
        let mut out = [[0.0; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j];
            }
        }
        Self { m: out }
    }

    /// The translation column `(x, y)`.
    pub fn translation_xy(&self) -> (f64, f64) {
        (self.m[0][2], self.m[1][2])
    }

    /// Determinant of the upper-left rotation block.
    pub fn determinant(&self) -> f64 {
        self.m[0][0] * self.m[1][1] - self.m[0][1] * self.m[1][0]
    }

    /// `true` when the rotation block is orthonormal with determinant 1 and
    /// the bottom row is `[0, 0, 1]`, all within `tol`.
    pub fn is_rigid(&self, tol: f64) -> bool {
        let m = &self.m;
        let col0 = m[0][0] * m[0][0] + m[1][0] * m[1][0];
        let col1 = m[0][1] * m[0][1] + m[1][1] * m[1][1];
        let dot = m[0][0] * m[0][1] + m[1][0] * m[1][1];

        (col0 - 1.0).abs() <= tol
            && (col1 - 1.0).abs() <= tol
            && dot.abs() <= tol
            && (self.determinant() - 1.0).abs() <= tol
            && m[2][0].abs() <= tol
            && m[2][1].abs() <= tol
            && (m[2][2] - 1.0).abs() <= tol
    }

    /// Raw row-major matrix.
    pub fn matrix(&self) -> [[f64; 3]; 3] {
        self.m
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn identity_compose_is_noop() {
        let t = Transform2D::from_pose(1.0, 2.0, 0.3);
        assert_eq!(Transform2D::identity().compose(&t), t);
        assert_eq!(t.compose(&Transform2D::identity()), t);
    }

    #[test]
    fn translations_add() {
        let t = Transform2D::translation(1.0, 0.0).compose(&Transform2D::translation(2.0, -1.0));
        let (x, y) = t.translation_xy();
        assert!((x - 3.0).abs() < 1e-12);
        assert!((y + 1.0).abs() < 1e-12);
    }

    #[test]
    fn local_translation_follows_heading() {
        // Facing +Y, a local step along +X lands on world +Y.
        let t = Transform2D::from_pose(1.0, 1.0, FRAC_PI_2).compose(&Transform2D::translation(3.0, 0.0));
        let (x, y) = t.translation_xy();
        assert!((x - 1.0).abs() < 1e-12, "x={x}");
        assert!((y - 4.0).abs() < 1e-12, "y={y}");
    }

    #[test]
    fn rotations_accumulate() {
        let t = Transform2D::rotation(PI / 3.0).compose(&Transform2D::rotation(PI / 6.0));
        let expected = Transform2D::rotation(FRAC_PI_2);
        for (row, exp_row) in t.matrix().iter().zip(expected.matrix().iter()) {
            for (v, e) in row.iter().zip(exp_row.iter()) {
                assert!((v - e).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn from_pose_matches_rotation_then_translation() {
        let direct = Transform2D::from_pose(4.0, -2.0, 0.7);
        let composed = Transform2D::translation(4.0, -2.0).compose(&Transform2D::rotation(0.7));
        for (row, exp_row) in direct.matrix().iter().zip(composed.matrix().iter()) {
            for (v, e) in row.iter().zip(exp_row.iter()) {
                assert!((v - e).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn rigid_check_rejects_scaling() {
        assert!(Transform2D::from_pose(5.0, 5.0, 1.0).is_rigid(1e-12));
        let scaled = Transform2D {
            m: [[2.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 1.0]],
        };
        assert!(!scaled.is_rigid(1e-9));
    }
}
