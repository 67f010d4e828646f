//! Per-robot report lines.

use robopose_kinematics::Robot;
use robopose_types::{Position, RobotKind};
use serde::Serialize;

use crate::config::OutputFormat;

/// JSON shape of one report line.
#[derive(Debug, Serialize)]
struct RobotReport<'a> {
    kind: RobotKind,
    name: &'a str,
    position: Position,
}

/// Render `robot` as a single output line in the requested format.
pub fn render(robot: &Robot, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Text => Ok(robot.to_string()),
        OutputFormat::Json => {
            let report = RobotReport {
                kind: robot.kind(),
                name: robot.name(),
                position: robot.position(),
            };
            serde_json::to_string(&report)
                .map_err(|e| format!("Failed to serialize report for {}: {}", robot.name(), e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_line_matches_display() {
        let robot = Robot::swimming("Eel", 1.0, 2.0, 0.0, 4.0);
        let line = render(&robot, OutputFormat::Text).unwrap();
        assert_eq!(line, "SwimmingRobot Eel is at position [1.0, 2.0, 0.0, -4.0]");
    }

    #[test]
    fn json_line_carries_kind_name_and_position() {
        let robot = Robot::flying("Hawk", 0.0, 0.0, 0.0, 7.0);
        let line = render(&robot, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["kind"], "flying_robot");
        assert_eq!(value["name"], "Hawk");
        assert_eq!(value["position"]["vertical"], 7.0);
    }

    #[test]
    fn json_line_omits_vertical_for_ground_robots() {
        let robot = Robot::new("Crab", 0.0, 0.0, 0.0);
        let line = render(&robot, OutputFormat::Json).unwrap();
        assert!(!line.contains("vertical"));
    }
}
