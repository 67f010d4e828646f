use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The three robot flavours a pose can belong to.
///
/// The `Display` form is the kind name printed at the start of every report
/// line (`"Robot"`, `"FlyingRobot"`, `"SwimmingRobot"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RobotKind {
    /// Ground robot: planar pose only.
    Robot,
    /// Planar pose plus altitude.
    FlyingRobot,
    /// Planar pose plus depth below the surface.
    SwimmingRobot,
}

impl fmt::Display for RobotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RobotKind::Robot => write!(f, "Robot"),
            RobotKind::FlyingRobot => write!(f, "FlyingRobot"),
            RobotKind::SwimmingRobot => write!(f, "SwimmingRobot"),
        }
    }
}

/// One scripted operation applied to a robot.
///
/// Angles are in degrees, distances in the robot's own units.  Vertical
/// maneuvers only apply to robots whose body carries the matching axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Maneuver {
    /// Forward (or, when negative, backward) motion along the current heading.
    Move { steps: f64 },
    /// Counter-clockwise rotation by `degrees` (signed, taken as-is).
    TurnLeft { degrees: f64 },
    /// Clockwise rotation: `degrees` is negated before it is applied, so a
    /// negative value turns left.
    TurnRight { degrees: f64 },
    /// Altitude += |delta|.
    Ascend { delta: f64 },
    /// Altitude -= |delta|.
    Descend { delta: f64 },
    /// Depth += |delta|.
    Dive { delta: f64 },
    /// Depth -= |delta|, clamped at zero.
    Surface { delta: f64 },
}

impl Maneuver {
    /// Short snake_case name, matching the `action` tag used in scenario files.
    pub fn name(&self) -> &'static str {
        match self {
            Maneuver::Move { .. } => "move",
            Maneuver::TurnLeft { .. } => "turn_left",
            Maneuver::TurnRight { .. } => "turn_right",
            Maneuver::Ascend { .. } => "ascend",
            Maneuver::Descend { .. } => "descend",
            Maneuver::Dive { .. } => "dive",
            Maneuver::Surface { .. } => "surface",
        }
    }

    /// The single magnitude carried by this maneuver.
    pub fn magnitude(&self) -> f64 {
        match *self {
            Maneuver::Move { steps } => steps,
            Maneuver::TurnLeft { degrees } | Maneuver::TurnRight { degrees } => degrees,
            Maneuver::Ascend { delta }
            | Maneuver::Descend { delta }
            | Maneuver::Dive { delta }
            | Maneuver::Surface { delta } => delta,
        }
    }
}

/// Snapshot of a robot's pose as reported to the outside world.
///
/// `theta` is the tracked heading in radians.  `vertical` is the altitude
/// for flying robots, the negated depth for swimming robots and absent for
/// ground robots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub theta: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical: Option<f64>,
}

impl Position {
    /// Components in report order: `[x, y, theta]` plus the vertical value
    /// when present.
    pub fn components(&self) -> Vec<f64> {
        let mut out = vec![self.x, self.y, self.theta];
        out.extend(self.vertical);
        out
    }
}

/// Renders `[x, y, theta]` or `[x, y, theta, v]` using the shortest
/// round-trip float form (`10.0`, `0.5235987755982988`).
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.components().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value:?}")?;
        }
        write!(f, "]")
    }
}

/// Errors raised around the pose core: scripted maneuvers aimed at the wrong
/// body, and scenario input that cannot be used.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PoseError {
    #[error("{kind} {robot} cannot perform '{maneuver}'")]
    UnsupportedManeuver {
        robot: String,
        kind: RobotKind,
        maneuver: &'static str,
    },

    #[error("Non-finite value for {field}: {value}")]
    NonFinite { field: String, value: f64 },

    #[error("Scenario Error: {0}")]
    Scenario(String),
}
