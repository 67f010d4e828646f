//! `robopose-kinematics` – planar pose bookkeeping.
//!
//! Tracks where a robot is and which way it faces by composing homogeneous
//! transforms, and layers an optional vertical axis on top for flying and
//! swimming robots.
//!
//! # Modules
//!
//! - [`transform`] – [`Transform2D`][transform::Transform2D]: 3×3 homogeneous
//!   matrix with rotation, translation and composition.
//! - [`pose`] – [`PoseTracker`][pose::PoseTracker]: cumulative local-frame
//!   moves and turns, with the heading tracked alongside the matrix.
//! - [`robot`] – [`Robot`][robot::Robot]: a named pose plus a
//!   [`Body`][robot::Body] (ground, flying or swimming) and
//!   [`Maneuver`][robopose_types::Maneuver] dispatch.

pub mod pose;
pub mod robot;
pub mod transform;

pub use pose::PoseTracker;
pub use robot::{Body, Robot};
pub use transform::Transform2D;
