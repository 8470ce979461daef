//! Headless click-to-move scene built on gridnav.
//!
//! Demonstrates the full request cycle: a click position is mapped to a
//! cell, A* finds a route from the mover's cell, and a [`PathFollower`]
//! walks the route in world space.

pub mod config;
pub mod follower;
pub mod scene;

pub use config::{ConfigError, DEMO_MAP, DemoConfig};
pub use follower::PathFollower;
pub use scene::{Scene, SceneError};
