//! [`PoseTracker`] – planar position and heading kept as a cumulative
//! homogeneous transform.
//!
//! Every mutator right-multiplies the current transform by a local-frame
//! step, so forward motion always follows the heading accumulated so far.
//! The heading is also tracked as a plain angle, updated in the same call as
//! the matrix, and that tracked value is what [`PoseTracker::position`]
//! reports.

use robopose_types::Position;

use crate::transform::Transform2D;

/// 2-D pose tracked as a [`Transform2D`] plus a redundant heading angle.
///
/// # Example
///
/// ```rust
/// use robopose_kinematics::pose::PoseTracker;
///
/// let mut pose = PoseTracker::new(0.0, 0.0, 0.0);
/// pose.move_forward(10.0);
/// pose.turn_left(30.0);
/// pose.move_forward(20.0);
///
/// let p = pose.position();
/// assert!((p.x - 27.320508).abs() < 1e-5);
/// assert!((p.y - 10.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseTracker {
    transform: Transform2D,
    /// Heading in radians, never re-derived from the matrix.
    theta: f64,
}

impl PoseTracker {
    /// Create a pose at `(x, y)` facing `orientation_deg` degrees
    /// counter-clockwise from +X.
    pub fn new(x: f64, y: f64, orientation_deg: f64) -> Self {
        let theta = orientation_deg.to_radians();
        Self {
            transform: Transform2D::from_pose(x, y, theta),
            theta,
        }
    }

    /// Move `steps` units along the current heading.  Negative values move
    /// backwards.
    pub fn move_forward(&mut self, steps: f64) {
        self.transform = self.transform.compose(&Transform2D::translation(steps, 0.0));
    }

    /// Rotate counter-clockwise by `delta_deg` degrees (signed, as given).
    pub fn turn_left(&mut self, delta_deg: f64) {
        self.rotate(delta_deg.to_radians());
    }

    /// Rotate clockwise by `delta_deg` degrees.
    ///
    /// The input is negated before it is applied, so `turn_right(-10.0)`
    /// turns ten degrees to the left.
    pub fn turn_right(&mut self, delta_deg: f64) {
        self.rotate(-delta_deg.to_radians());
    }

    fn rotate(&mut self, delta_rad: f64) {
        self.transform = self.transform.compose(&Transform2D::rotation(delta_rad));
        self.theta += delta_rad;
    }

    /// Current `(x, y, theta)` with no vertical component.
    pub fn position(&self) -> Position {
        let (x, y) = self.transform.translation_xy();
        Position {
            x,
            y,
            theta: self.theta,
            vertical: None,
        }
    }

    /// Tracked heading in radians.
    pub fn heading(&self) -> f64 {
        self.theta
    }

    /// Tracked heading in degrees.
    pub fn heading_degrees(&self) -> f64 {
        self.theta.to_degrees()
    }

    /// The cumulative robot-to-world transform.
    pub fn transform(&self) -> &Transform2D {
        &self.transform
    }
}

impl Default for PoseTracker {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
