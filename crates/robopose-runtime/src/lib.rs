//! `robopose-runtime` – scenario execution.
//!
//! # Modules
//!
//! - [`scenario`] – [`Scenario`][scenario::Scenario]: the robots to build and
//!   the [`Maneuver`][robopose_types::Maneuver] script to drive them through.
//!   [`Scenario::demo`][scenario::Scenario::demo] is the built-in
//!   demonstration; other scenarios load from TOML.
//! - [`telemetry`] – [`init_tracing`][telemetry::init_tracing]: installs the
//!   global `tracing` subscriber (compact or JSON, filtered by `RUST_LOG`).

pub mod scenario;
pub mod telemetry;

pub use scenario::{RobotSpec, Scenario};
pub use telemetry::{LogFormat, init_tracing};
