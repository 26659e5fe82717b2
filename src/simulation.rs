//! The particle integration step.
//!
//! [`ParticleSimulation`] owns every per-particle array. Positions live in a
//! flat `[x0, y0, z0, x1, ...]` buffer so a renderer can upload them as-is;
//! velocities and targets are `Vec3` because only the simulation reads them.
//!
//! Each frame is one of two motions:
//!
//! - **Settling**: every particle covers a fixed fraction of the remaining
//!   distance to its target (exponential ease-out).
//! - **Exploding**: every particle moves by its velocity, which then decays.
//!
//! Targets are only recomputed when the shape actually changes. Stepping
//! never allocates.

use glam::Vec3;

use crate::config::MotionConfig;
use crate::random::RandomSource;
use crate::shapes::{compute_targets, ShapeId};

/// Which motion the next [`step`](ParticleSimulation::step) applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimulationMode {
    #[default]
    Settling,
    Exploding,
}

/// Move `position` a fraction `rate` of the way to `target`.
#[inline]
pub fn ease_toward(position: Vec3, target: Vec3, rate: f32) -> Vec3 {
    position + (target - position) * rate
}

pub struct ParticleSimulation {
    positions: Vec<f32>,
    velocities: Vec<Vec3>,
    targets: Vec<Vec3>,
    shape: ShapeId,
    mode: SimulationMode,
    params: MotionConfig,
    /// Bumped every time `targets` is rebuilt.
    target_generation: u64,
}

impl ParticleSimulation {
    /// Scatter `count` particles through a cube and aim them at `shape`.
    ///
    /// A `count` of zero is raised to one.
    pub fn new(count: u32, shape: ShapeId, params: MotionConfig, rng: &mut dyn RandomSource) -> Self {
        let count = count.max(1);
        let n = count as usize;

        let mut positions = Vec::with_capacity(n * 3);
        let mut velocities = Vec::with_capacity(n);
        for _ in 0..n {
            positions.push(rng.centered(params.initial_spread));
            positions.push(rng.centered(params.initial_spread));
            positions.push(rng.centered(params.initial_spread));
            velocities.push(Vec3::new(
                rng.centered(params.initial_velocity),
                rng.centered(params.initial_velocity),
                rng.centered(params.initial_velocity),
            ));
        }

        let mut targets = Vec::with_capacity(n);
        compute_targets(shape, count, rng, &mut targets);

        log::debug!("Spawned {} particles targeting {}", count, shape);

        Self {
            positions,
            velocities,
            targets,
            shape,
            mode: SimulationMode::Settling,
            params,
            target_generation: 1,
        }
    }

    /// Aim at a new shape.
    ///
    /// Returns `false` and leaves the targets alone if `shape` is already
    /// the current one.
    pub fn retarget(&mut self, shape: ShapeId, rng: &mut dyn RandomSource) -> bool {
        if shape == self.shape {
            return false;
        }
        self.shape = shape;
        compute_targets(shape, self.len() as u32, rng, &mut self.targets);
        self.target_generation += 1;
        true
    }

    /// Give every particle a random unit direction at explode speed.
    pub fn explode(&mut self, rng: &mut dyn RandomSource) {
        let speed = self.params.explode_speed;
        for v in &mut self.velocities {
            *v = rng.direction() * speed;
        }
        self.mode = SimulationMode::Exploding;
    }

    /// Go back to easing toward the targets.
    pub fn settle(&mut self) {
        self.mode = SimulationMode::Settling;
    }

    /// Advance one frame.
    pub fn step(&mut self) {
        let points = self.positions.chunks_exact_mut(3);
        match self.mode {
            SimulationMode::Exploding => {
                let decay = self.params.explode_decay;
                for (p, v) in points.zip(self.velocities.iter_mut()) {
                    p[0] += v.x;
                    p[1] += v.y;
                    p[2] += v.z;
                    *v *= decay;
                }
            }
            SimulationMode::Settling => {
                let rate = self.params.ease_rate;
                for (p, target) in points.zip(self.targets.iter()) {
                    let next = ease_toward(Vec3::new(p[0], p[1], p[2]), *target, rate);
                    p.copy_from_slice(&next.to_array());
                }
            }
        }
    }

    /// Overwrite one particle's position. Out-of-range indices are ignored.
    pub fn place(&mut self, index: usize, position: Vec3) {
        if let Some(p) = self.positions.get_mut(index * 3..index * 3 + 3) {
            p.copy_from_slice(&position.to_array());
        }
    }

    /// Position of particle `index`.
    pub fn position(&self, index: usize) -> Option<Vec3> {
        self.positions
            .get(index * 3..index * 3 + 3)
            .map(Vec3::from_slice)
    }

    /// Flat `x, y, z` position buffer, `3 * len()` long.
    #[inline]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    #[inline]
    pub fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }

    #[inline]
    pub fn targets(&self) -> &[Vec3] {
        &self.targets
    }

    #[inline]
    pub fn shape(&self) -> ShapeId {
        self.shape
    }

    #[inline]
    pub fn mode(&self) -> SimulationMode {
        self.mode
    }

    /// How many times the targets have been computed, including at startup.
    #[inline]
    pub fn target_generation(&self) -> u64 {
        self.target_generation
    }

    /// Number of particles.
    #[inline]
    pub fn len(&self) -> usize {
        self.velocities.len()
    }

    /// Always `false`; a simulation holds at least one particle.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.velocities.is_empty()
    }
}
