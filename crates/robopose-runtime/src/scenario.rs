//! [`Scenario`] – a set of robots and the maneuver script run against them.
//!
//! Every step is applied to every robot, in order.  A step that needs a
//! vertical axis the robot lacks (e.g. `ascend` on a swimming robot) is
//! skipped for that robot only, so one script can drive a mixed fleet.
//!
//! Scenarios are either the built-in [`Scenario::demo`] or loaded from TOML:
//!
//! ```toml
//! [[robots]]
//! kind = "flying_robot"
//! name = "Hawk"
//! altitude = 10.0
//!
//! [[steps]]
//! action = "move"
//! steps = 10.0
//!
//! [[steps]]
//! action = "ascend"
//! delta = 5.0
//! ```
//!
//! # Example
//!
//! ```rust
//! use robopose_runtime::scenario::Scenario;
//!
//! let robots = Scenario::demo().run().unwrap();
//! assert_eq!(robots.len(), 3);
//! assert!(robots[0].to_string().starts_with("Robot Robot1 is at position ["));
//! ```

use std::fs;
use std::path::Path;

use robopose_kinematics::{Body, Robot};
use robopose_types::{Maneuver, PoseError, RobotKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

// ─────────────────────────────────────────────────────────────────────────────
// RobotSpec
// ─────────────────────────────────────────────────────────────────────────────

/// Initial state of one robot in a scenario.
///
/// `altitude` only matters for flying robots and `depth` only for swimming
/// robots; both default to zero, as do position and orientation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobotSpec {
    pub kind: RobotKind,
    pub name: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    /// Initial heading in degrees, counter-clockwise from +X.
    #[serde(default)]
    pub orientation_deg: f64,
    #[serde(default)]
    pub altitude: f64,
    #[serde(default)]
    pub depth: f64,
}

impl RobotSpec {
    /// A spec with every numeric field at zero.
    pub fn new(kind: RobotKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            x: 0.0,
            y: 0.0,
            orientation_deg: 0.0,
            altitude: 0.0,
            depth: 0.0,
        }
    }

    /// Construct the robot described by this spec.
    pub fn build(&self) -> Robot {
        let body = match self.kind {
            RobotKind::Robot => Body::Ground,
            RobotKind::FlyingRobot => Body::Flying {
                altitude: self.altitude,
            },
            RobotKind::SwimmingRobot => Body::Swimming { depth: self.depth },
        };
        Robot::with_body(self.name.clone(), self.x, self.y, self.orientation_deg, body)
    }

    fn numeric_fields(&self) -> [(&'static str, f64); 5] {
        [
            ("x", self.x),
            ("y", self.y),
            ("orientation_deg", self.orientation_deg),
            ("altitude", self.altitude),
            ("depth", self.depth),
        ]
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Scenario
// ─────────────────────────────────────────────────────────────────────────────

/// Robots plus the ordered [`Maneuver`] script applied to each of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub robots: Vec<RobotSpec>,
    #[serde(default)]
    pub steps: Vec<Maneuver>,
}

impl Default for Scenario {
    fn default() -> Self {
        Self::demo()
    }
}

impl Scenario {
    /// The built-in demonstration: one robot of each kind, all starting at the
    /// origin facing +X, driven through move 10, turn left 30°, move 20, then
    /// ascend 5 (flying only) and dive 3 (swimming only).
    pub fn demo() -> Self {
        let flying = RobotSpec {
            altitude: 10.0,
            ..RobotSpec::new(RobotKind::FlyingRobot, "FlyingRobot1")
        };
        let swimming = RobotSpec {
            depth: 5.0,
            ..RobotSpec::new(RobotKind::SwimmingRobot, "SwimmingRobot1")
        };

        Self {
            robots: vec![RobotSpec::new(RobotKind::Robot, "Robot1"), flying, swimming],
            steps: vec![
                Maneuver::Move { steps: 10.0 },
                Maneuver::TurnLeft { degrees: 30.0 },
                Maneuver::Move { steps: 20.0 },
                Maneuver::Ascend { delta: 5.0 },
                Maneuver::Dive { delta: 3.0 },
            ],
        }
    }

    /// Parse and validate a scenario from TOML text.
    ///
    /// # Errors
    ///
    /// [`PoseError::Scenario`] on malformed TOML, [`PoseError::NonFinite`]
    /// when any number is NaN or infinite.
    pub fn from_toml_str(raw: &str) -> Result<Self, PoseError> {
        let scenario: Self = toml::from_str(raw)
            .map_err(|e| PoseError::Scenario(format!("Failed to parse scenario: {e}")))?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Read, parse and validate a scenario file.
    ///
    /// # Errors
    ///
    /// As [`Scenario::from_toml_str`], plus [`PoseError::Scenario`] when the
    /// file cannot be read.
    pub fn load(path: &Path) -> Result<Self, PoseError> {
        let raw = fs::read_to_string(path).map_err(|e| {
            PoseError::Scenario(format!(
                "Failed to read scenario at {}: {e}",
                path.display()
            ))
        })?;
        Self::from_toml_str(&raw)
    }

    /// Reject NaN and infinite values in robot specs and step magnitudes.
    pub fn validate(&self) -> Result<(), PoseError> {
        for (i, spec) in self.robots.iter().enumerate() {
            for (field, value) in spec.numeric_fields() {
                if !value.is_finite() {
                    return Err(PoseError::NonFinite {
                        field: format!("robots[{i}].{field}"),
                        value,
                    });
                }
            }
        }
        for (i, step) in self.steps.iter().enumerate() {
            let value = step.magnitude();
            if !value.is_finite() {
                return Err(PoseError::NonFinite {
                    field: format!("steps[{i}].{}", step.name()),
                    value,
                });
            }
        }
        Ok(())
    }

    /// Build every robot and drive it through the full script.
    ///
    /// Steps a robot's body cannot perform are skipped for that robot.
    ///
    /// # Errors
    ///
    /// Propagates any [`PoseError`] other than
    /// [`PoseError::UnsupportedManeuver`].
    pub fn run(&self) -> Result<Vec<Robot>, PoseError> {
        info!(
            robots = self.robots.len(),
            steps = self.steps.len(),
            "Scenario started"
        );

        let mut robots = Vec::with_capacity(self.robots.len());
        for spec in &self.robots {
            let mut robot = spec.build();
            for step in &self.steps {
                match robot.apply(step) {
                    Ok(()) => {}
                    Err(PoseError::UnsupportedManeuver { .. }) => {
                        debug!(
                            robot = robot.name(),
                            kind = %robot.kind(),
                            maneuver = step.name(),
                            "Maneuver skipped"
                        );
                    }
                    Err(e) => return Err(e),
                }
            }
            robots.push(robot);
        }

        info!(robots = robots.len(), "Scenario finished");
        Ok(robots)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
