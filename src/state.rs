//! The single owner of all mutable session state.
//!
//! [`SimulationState`] wires the controller, the particle simulation and
//! the deferred-task queue together behind one [`frame`](SimulationState::frame)
//! call. The window loop feeds it gestures and the current time; tests do
//! the same with a [`ManualClock`](crate::time::ManualClock).
//!
//! ```ignore
//! let mut state = SimulationState::new(&MorphConfig::default(), Box::new(StdRandom::from_entropy()));
//! state.set_gestures(&HandPresence::Absent);
//! let report = state.frame(clock.now());
//! renderer.render_frame(state.positions(), state.rotation_speed());
//! ```

use std::time::Duration;

use crate::config::MorphConfig;
use crate::controller::ModeController;
use crate::gesture::{GestureFrame, HandPresence};
use crate::random::RandomSource;
use crate::scheduler::{Scheduler, Task};
use crate::shapes::ShapeId;
use crate::simulation::{ParticleSimulation, SimulationMode};
use crate::status::StatusMessage;

/// What happened during one [`SimulationState::frame`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameReport {
    /// A gesture switched the shape this frame.
    pub shape_changed: Option<ShapeId>,
    pub status: Option<StatusMessage>,
    pub explosion_started: bool,
    /// The auto-revert fired this frame.
    pub explosion_ended: bool,
    /// A view reset was requested since the last frame.
    pub reset_view: bool,
}

pub struct SimulationState {
    controller: ModeController,
    simulation: ParticleSimulation,
    scheduler: Scheduler,
    rng: Box<dyn RandomSource>,
    explode_duration: Duration,
    gestures: GestureFrame,
    reset_requested: bool,
}

impl SimulationState {
    pub fn new(config: &MorphConfig, mut rng: Box<dyn RandomSource>) -> Self {
        let simulation = ParticleSimulation::new(
            config.particle_count,
            config.initial_shape,
            config.motion.clone(),
            rng.as_mut(),
        );
        Self {
            controller: ModeController::new(config.initial_shape, config.control.clone()),
            simulation,
            scheduler: Scheduler::new(),
            rng,
            explode_duration: config.motion.explode_duration(),
            gestures: GestureFrame::NO_HAND,
            reset_requested: false,
        }
    }

    /// Replace the gesture input used by subsequent frames.
    ///
    /// The same input stays in effect until replaced, so a slow detector
    /// simply means frames reuse the last result.
    pub fn set_gestures(&mut self, presence: &HandPresence) {
        self.gestures = GestureFrame::from_presence(presence);
    }

    /// Run one tick at time `now`: due tasks, then the controller, then
    /// one simulation step.
    pub fn frame(&mut self, now: Duration) -> FrameReport {
        let mut report = FrameReport {
            reset_view: std::mem::take(&mut self.reset_requested),
            ..Default::default()
        };

        while let Some(task) = self.scheduler.pop_due(now) {
            match task {
                Task::EndExplosion => {
                    self.controller.end_explosion();
                    self.simulation.settle();
                    report.explosion_ended = true;
                    log::debug!("Explosion over, settling");
                }
            }
        }

        let decision = self.controller.update(&self.gestures);
        if let Some(shape) = decision.shape_changed {
            self.simulation.retarget(shape, self.rng.as_mut());
            log::info!("Gesture selected {}", shape);
        }
        if decision.explode {
            self.simulation.explode(self.rng.as_mut());
            self.scheduler
                .schedule_after(now, self.explode_duration, Task::EndExplosion);
            log::debug!("Explosion started, settling in {:?}", self.explode_duration);
        }

        self.simulation.step();

        report.shape_changed = decision.shape_changed;
        report.status = decision.status;
        report.explosion_started = decision.explode;
        report
    }

    /// Switch shape from a selector. Returns `false` if it was already active.
    pub fn select_shape(&mut self, shape: ShapeId) -> bool {
        if !self.controller.select_shape(shape) {
            return false;
        }
        self.simulation.retarget(shape, self.rng.as_mut());
        log::info!("Selected {}", shape);
        true
    }

    /// Ask the renderer to restore the camera and rotation on the next frame.
    pub fn reset_view(&mut self) {
        self.reset_requested = true;
    }

    /// Flat `x, y, z` position buffer.
    #[inline]
    pub fn positions(&self) -> &[f32] {
        self.simulation.positions()
    }

    #[inline]
    pub fn shape(&self) -> ShapeId {
        self.controller.shape()
    }

    #[inline]
    pub fn mode(&self) -> SimulationMode {
        self.simulation.mode()
    }

    #[inline]
    pub fn rotation_speed(&self) -> f32 {
        self.controller.rotation_speed()
    }

    #[inline]
    pub fn gestures(&self) -> &GestureFrame {
        &self.gestures
    }

    #[inline]
    pub fn simulation(&self) -> &ParticleSimulation {
        &self.simulation
    }

    /// Pending deferred tasks.
    #[inline]
    pub fn pending_tasks(&self) -> usize {
        self.scheduler.len()
    }
}
