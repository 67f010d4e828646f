//! [`Robot`] – a named pose with an optional vertical axis.
//!
//! The planar pose is shared by every kind of robot.  What differs is the
//! [`Body`]: ground robots have none, flying robots add an altitude and
//! swimming robots add a depth.  Vertical maneuvers aimed at a body that lacks
//! the axis return [`PoseError::UnsupportedManeuver`].
//!
//! # Example
//!
//! ```rust
//! use robopose_kinematics::robot::Robot;
//!
//! let mut hawk = Robot::flying("Hawk", 0.0, 0.0, 0.0, 10.0);
//! hawk.move_forward(5.0);
//! hawk.ascend(2.0).unwrap();
//!
//! assert_eq!(
//!     hawk.to_string(),
//!     "FlyingRobot Hawk is at position [5.0, 0.0, 0.0, 12.0]"
//! );
//! ```

use std::fmt;

use robopose_types::{Maneuver, PoseError, Position, RobotKind};
use tracing::debug;

use crate::pose::PoseTracker;

/// The vertical extension carried on top of the planar pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Body {
    /// No vertical axis.
    Ground,
    /// Height above the reference plane; no floor is enforced.
    Flying { altitude: f64 },
    /// Distance below the surface.
    Swimming { depth: f64 },
}

impl Body {
    /// The kind name matching this body.
    pub fn kind(&self) -> RobotKind {
        match self {
            Body::Ground => RobotKind::Robot,
            Body::Flying { .. } => RobotKind::FlyingRobot,
            Body::Swimming { .. } => RobotKind::SwimmingRobot,
        }
    }

    /// Fourth position component: altitude, negated depth, or nothing.
    ///
    /// A depth of zero reports `0.0` rather than `-0.0`.
    pub fn reported_vertical(&self) -> Option<f64> {
        match *self {
            Body::Ground => None,
            Body::Flying { altitude } => Some(altitude),
            Body::Swimming { depth } if depth == 0.0 => Some(0.0),
            Body::Swimming { depth } => Some(-depth),
        }
    }
}

/// A named agent: planar [`PoseTracker`] plus a [`Body`].
#[derive(Debug, Clone, PartialEq)]
pub struct Robot {
    name: String,
    pose: PoseTracker,
    body: Body,
}

impl Robot {
    /// A ground robot at `(x, y)` facing `orientation_deg`.
    pub fn new(name: impl Into<String>, x: f64, y: f64, orientation_deg: f64) -> Self {
        Self::with_body(name, x, y, orientation_deg, Body::Ground)
    }

    /// A flying robot starting at `altitude`.
    pub fn flying(
        name: impl Into<String>,
        x: f64,
        y: f64,
        orientation_deg: f64,
        altitude: f64,
    ) -> Self {
        Self::with_body(name, x, y, orientation_deg, Body::Flying { altitude })
    }

    /// A swimming robot starting at `depth`.
    pub fn swimming(
        name: impl Into<String>,
        x: f64,
        y: f64,
        orientation_deg: f64,
        depth: f64,
    ) -> Self {
        Self::with_body(name, x, y, orientation_deg, Body::Swimming { depth })
    }

    /// A robot with an explicit body.
    pub fn with_body(
        name: impl Into<String>,
        x: f64,
        y: f64,
        orientation_deg: f64,
        body: Body,
    ) -> Self {
        Self {
            name: name.into(),
            pose: PoseTracker::new(x, y, orientation_deg),
            body,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> RobotKind {
        self.body.kind()
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn pose(&self) -> &PoseTracker {
        &self.pose
    }

    // ── Planar motion ───────────────────────────────────────────────────────

    /// See [`PoseTracker::move_forward`].
    pub fn move_forward(&mut self, steps: f64) {
        self.pose.move_forward(steps);
    }

    /// See [`PoseTracker::turn_left`].
    pub fn turn_left(&mut self, delta_deg: f64) {
        self.pose.turn_left(delta_deg);
    }

    /// See [`PoseTracker::turn_right`].
    pub fn turn_right(&mut self, delta_deg: f64) {
        self.pose.turn_right(delta_deg);
    }

    // ── Vertical motion ─────────────────────────────────────────────────────

    /// Raise altitude by `|delta|`.
    ///
    /// # Errors
    ///
    /// [`PoseError::UnsupportedManeuver`] unless this is a flying robot.
    pub fn ascend(&mut self, delta: f64) -> Result<(), PoseError> {
        self.update_altitude("ascend", |altitude| *altitude += delta.abs())
    }

    /// Lower altitude by `|delta|`.  Altitude may go negative.
    ///
    /// # Errors
    ///
    /// [`PoseError::UnsupportedManeuver`] unless this is a flying robot.
    pub fn descend(&mut self, delta: f64) -> Result<(), PoseError> {
        self.update_altitude("descend", |altitude| *altitude -= delta.abs())
    }

    /// Increase depth by `|delta|`.
    ///
    /// # Errors
    ///
    /// [`PoseError::UnsupportedManeuver`] unless this is a swimming robot.
    pub fn dive(&mut self, delta: f64) -> Result<(), PoseError> {
        self.update_depth("dive", |depth| *depth += delta.abs())
    }

    /// Decrease depth by `|delta|`, stopping at the surface.
    ///
    /// # Errors
    ///
    /// [`PoseError::UnsupportedManeuver`] unless this is a swimming robot.
    pub fn surface(&mut self, delta: f64) -> Result<(), PoseError> {
        self.update_depth("surface", |depth| *depth = (*depth - delta.abs()).max(0.0))
    }

    fn update_altitude(
        &mut self,
        maneuver: &'static str,
        f: impl FnOnce(&mut f64),
    ) -> Result<(), PoseError> {
        match &mut self.body {
            Body::Flying { altitude } => {
                f(altitude);
                Ok(())
            }
            _ => Err(self.unsupported(maneuver)),
        }
    }

    fn update_depth(
        &mut self,
        maneuver: &'static str,
        f: impl FnOnce(&mut f64),
    ) -> Result<(), PoseError> {
        match &mut self.body {
            Body::Swimming { depth } => {
                f(depth);
                Ok(())
            }
            _ => Err(self.unsupported(maneuver)),
        }
    }

    fn unsupported(&self, maneuver: &'static str) -> PoseError {
        PoseError::UnsupportedManeuver {
            robot: self.name.clone(),
            kind: self.kind(),
            maneuver,
        }
    }

    // ── Dispatch & queries ──────────────────────────────────────────────────

    /// Apply a scripted [`Maneuver`].
    ///
    /// # Errors
    ///
    /// [`PoseError::UnsupportedManeuver`] when the maneuver needs a vertical
    /// axis this robot's body does not have.  The pose is left untouched.
    pub fn apply(&mut self, maneuver: &Maneuver) -> Result<(), PoseError> {
        match *maneuver {
            Maneuver::Move { steps } => self.move_forward(steps),
            Maneuver::TurnLeft { degrees } => self.turn_left(degrees),
            Maneuver::TurnRight { degrees } => self.turn_right(degrees),
            Maneuver::Ascend { delta } => self.ascend(delta)?,
            Maneuver::Descend { delta } => self.descend(delta)?,
            Maneuver::Dive { delta } => self.dive(delta)?,
            Maneuver::Surface { delta } => self.surface(delta)?,
        }
        debug!(
            robot = %self.name,
            maneuver = maneuver.name(),
            magnitude = maneuver.magnitude(),
            "Maneuver applied"
        );
        Ok(())
    }

    /// Planar position plus the body's vertical component.
    pub fn position(&self) -> Position {
        Position {
            vertical: self.body.reported_vertical(),
            ..self.pose.position()
        }
    }
}

/// `<Kind> <Name> is at position [x, y, theta(, v)]`.
impl fmt::Display for Robot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} is at position {}",
            self.kind(),
            self.name,
            self.position()
        )
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn vertical(robot: &Robot) -> f64 {
        robot.position().vertical.expect("robot has a vertical axis")
    }

    #[test]
    fn ground_robot_reports_three_components() {
        let r = Robot::new("R", 0.0, 0.0, 0.0);
        assert_eq!(r.kind(), RobotKind::Robot);
        assert_eq!(r.position().components().len(), 3);
        assert_eq!(r.to_string(), "Robot R is at position [0.0, 0.0, 0.0]");
    }

    #[test]
    fn altitude_holds_through_planar_moves() {
        let mut r = Robot::flying("F", 0.0, 0.0, 0.0, 0.0);
        r.ascend(5.0).unwrap();
        r.move_forward(12.0);
        r.turn_left(45.0);
        r.move_forward(3.0);
        assert!((vertical(&r) - 5.0).abs() < TOL);
    }

    #[test]
    fn descend_ignores_sign() {
        let mut r = Robot::flying("F", 0.0, 0.0, 0.0, 5.0);
        r.descend(3.0).unwrap();
        assert!((vertical(&r) - 2.0).abs() < TOL);
        r.descend(-3.0).unwrap();
        assert!((vertical(&r) + 1.0).abs() < TOL, "no floor on altitude");
    }

    #[test]
    fn ascend_ignores_sign() {
        let mut r = Robot::flying("F", 0.0, 0.0, 0.0, 1.0);
        r.ascend(-4.0).unwrap();
        assert!((vertical(&r) - 5.0).abs() < TOL);
    }

    #[test]
    fn dive_reports_negative_depth() {
        let mut r = Robot::swimming("S", 0.0, 0.0, 0.0, 5.0);
        r.dive(-3.0).unwrap();
        assert!((vertical(&r) + 8.0).abs() < TOL);
    }

    #[test]
    fn surface_clamps_at_zero() {
        let mut r = Robot::swimming("S", 0.0, 0.0, 0.0, 5.0);
        r.surface(10.0).unwrap();
        assert_eq!(*r.body(), Body::Swimming { depth: 0.0 });
        let v = vertical(&r);
        assert_eq!(v, 0.0);
        assert!(v.is_sign_positive(), "surface depth must not report -0.0");
        assert_eq!(r.to_string(), "SwimmingRobot S is at position [0.0, 0.0, 0.0, 0.0]");
    }

    #[test]
    fn surface_partial() {
        let mut r = Robot::swimming("S", 0.0, 0.0, 0.0, 5.0);
        r.surface(-2.0).unwrap();
        assert!((vertical(&r) + 3.0).abs() < TOL);
    }

    #[test]
    fn vertical_maneuver_on_wrong_body_is_rejected() {
        let mut ground = Robot::new("G", 1.0, 1.0, 0.0);
        let err = ground.ascend(1.0).unwrap_err();
        assert_eq!(
            err,
            PoseError::UnsupportedManeuver {
                robot: "G".to_string(),
                kind: RobotKind::Robot,
                maneuver: "ascend",
            }
        );

        let mut swimmer = Robot::swimming("S", 0.0, 0.0, 0.0, 2.0);
        assert!(swimmer.descend(1.0).is_err());
        let mut flyer = Robot::flying("F", 0.0, 0.0, 0.0, 2.0);
        assert!(flyer.surface(1.0).is_err());
        assert!((vertical(&flyer) - 2.0).abs() < TOL);
    }

    #[test]
    fn apply_routes_maneuvers() {
        let mut r = Robot::flying("F", 0.0, 0.0, 0.0, 10.0);
        for m in [
            Maneuver::Move { steps: 10.0 },
            Maneuver::TurnLeft { degrees: 30.0 },
            Maneuver::Move { steps: 20.0 },
            Maneuver::Ascend { delta: 5.0 },
        ] {
            r.apply(&m).unwrap();
        }
        let p = r.position();
        assert!((p.x - 27.320508075688775).abs() < 1e-9);
        assert!((p.y - 10.0).abs() < 1e-9);
        assert!((p.theta - 30f64.to_radians()).abs() < TOL);
        assert_eq!(p.vertical, Some(15.0));

        assert!(r.apply(&Maneuver::Dive { delta: 1.0 }).is_err());
    }

    #[test]
    fn apply_turn_right_keeps_sign_asymmetry() {
        let mut r = Robot::new("R", 0.0, 0.0, 0.0);
        r.apply(&Maneuver::TurnRight { degrees: -10.0 }).unwrap();
        assert!((r.position().theta - 10f64.to_radians()).abs() < TOL);
    }
}
