//! # particle-morph
//!
//! A cloud of a few thousand points that morphs between a heart, the block
//! phrases `ILOVEYOU` and `VALENTINE`, and a rose, steered by hand gestures.
//!
//! ## Quick Start
//!
//! ```ignore
//! use particle_morph::prelude::*;
//!
//! fn main() -> Result<(), RunError> {
//!     let config = MorphConfig::new()
//!         .with_particle_count(5000)
//!         .with_shape(ShapeId::Heart);
//!     window::run(config, HandInput::Keyboard)
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Frames
//!
//! All mutable state lives in [`SimulationState`]. Each frame:
//!
//! 1. the newest hand landmarks are classified into a [`GestureState`],
//! 2. due deferred tasks run (the end of an explosion),
//! 3. the [`ModeController`] picks the shape, rotation speed and explosions,
//! 4. the [`ParticleSimulation`] advances every particle one step,
//! 5. the [`RenderAdapter`] uploads positions and draws.
//!
//! Steps 2-4 happen inside [`SimulationState::frame`], which takes the
//! current time as an argument so tests can drive it with a
//! [`ManualClock`](time::ManualClock).
//!
//! ### Gestures
//!
//! | Gesture | Effect |
//! |---------|--------|
//! | index finger | heart |
//! | peace | `ILOVEYOU` |
//! | three fingers | rose |
//! | thumb + index + pinky | `VALENTINE` |
//! | open palm | spin |
//! | fist | explode for two seconds |
//!
//! Shape gestures only act when they would change the shape; the fist only
//! acts when no explosion is running, so holding it bursts every two seconds.
//!
//! ### Hands
//!
//! A [`LandmarkSource`] runs on its own thread and sends results over a
//! channel; the frame loop only ever looks at the newest one. Without a
//! real detector, [`SimulatedHand`] turns held keys into landmark sets.

pub mod config;
pub mod controller;
pub mod error;
pub mod gesture;
pub mod input;
pub mod landmarks;
pub mod random;
pub mod render;
pub mod scheduler;
pub mod shapes;
pub mod simulation;
pub mod state;
pub mod status;
pub mod time;
pub mod window;

pub use config::{ControlConfig, MorphConfig, MotionConfig, ViewConfig};
pub use controller::{FrameDecision, ModeController};
pub use error::{ConfigError, GpuError, RenderError, RunError};
pub use gesture::{classify, GestureFrame, GestureState, HandLandmarks, HandPresence, Landmark};
pub use landmarks::{HandPose, LandmarkSource, LatestLandmarks, SimulatedHand};
pub use random::{RandomSource, ScriptedRandom, StdRandom};
pub use render::{PointRenderer, RenderAdapter};
pub use shapes::{compute_targets, position_for, ShapeId};
pub use simulation::{ParticleSimulation, SimulationMode};
pub use state::{FrameReport, SimulationState};
pub use status::{StatusMessage, StatusSink};
pub use glam::Vec3;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use particle_morph::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::MorphConfig;
    pub use crate::error::RunError;
    pub use crate::gesture::{GestureState, HandPresence};
    pub use crate::landmarks::{HandPose, LandmarkSource};
    pub use crate::random::{RandomSource, StdRandom};
    pub use crate::shapes::{position_for, ShapeId};
    pub use crate::state::SimulationState;
    pub use crate::status::{StatusMessage, StatusSink};
    pub use crate::time::{Clock, SystemClock};
    pub use crate::window::{self, HandInput};
    pub use glam::Vec3;
}
