//! Integration tests for the per-frame loop: gestures in, particles out.

use std::time::Duration;

use particle_morph::render::{FrameUniforms, PointRenderer, RenderAdapter};
use particle_morph::time::{Clock, ManualClock};
use particle_morph::{
    HandPose, HandPresence, MorphConfig, RenderError, ShapeId, SimulationMode, SimulationState,
    StatusMessage, StdRandom,
};

const TICK: Duration = Duration::from_millis(16);

fn state(count: u32, shape: ShapeId) -> SimulationState {
    let config = MorphConfig::new().with_particle_count(count).with_shape(shape);
    SimulationState::new(&config, Box::new(StdRandom::seeded(77)))
}

fn show(state: &mut SimulationState, pose: HandPose) {
    state.set_gestures(&HandPresence::Detected(pose.landmarks()));
}

// ============================================================================
// Shape changes
// ============================================================================

#[test]
fn test_index_up_switches_once() {
    let clock = ManualClock::new();
    let mut s = state(300, ShapeId::Bouquet);
    show(&mut s, HandPose::PointIndex);

    let first = s.frame(clock.now());
    assert_eq!(first.shape_changed, Some(ShapeId::Heart));
    assert_eq!(first.status, Some(StatusMessage::HEART));
    let generation = s.simulation().target_generation();

    clock.advance(TICK);
    let second = s.frame(clock.now());
    assert_eq!(second.shape_changed, None);
    assert_eq!(s.simulation().target_generation(), generation);
}

#[test]
fn test_every_shape_gesture() {
    let cases = [
        (HandPose::Peace, ShapeId::PhraseILoveYou),
        (HandPose::ThreeFingers, ShapeId::Bouquet),
        (HandPose::ILoveYou, ShapeId::PhraseValentine),
        (HandPose::PointIndex, ShapeId::Heart),
    ];
    let mut s = state(100, ShapeId::Heart);
    for (pose, shape) in cases {
        show(&mut s, pose);
        assert_eq!(s.frame(Duration::ZERO).shape_changed, Some(shape));
        assert_eq!(s.shape(), shape);
    }
}

#[test]
fn test_particles_settle_onto_targets() {
    let clock = ManualClock::new();
    let mut s = state(500, ShapeId::Heart);
    for _ in 0..400 {
        clock.advance(TICK);
        s.frame(clock.now());
    }
    let sim = s.simulation();
    for (i, target) in sim.targets().iter().enumerate() {
        let p = sim.position(i).unwrap();
        assert!((p - *target).length() < 0.01, "particle {i} at {p:?}, target {target:?}");
    }
}

// ============================================================================
// Explosions
// ============================================================================

#[test]
fn test_fist_explodes_and_reverts_without_input() {
    let clock = ManualClock::new();
    let mut s = state(200, ShapeId::Heart);

    show(&mut s, HandPose::Fist);
    let report = s.frame(clock.now());
    assert!(report.explosion_started);
    assert_eq!(report.status, Some(StatusMessage::EXPLODING));
    assert_eq!(s.mode(), SimulationMode::Exploding);

    // Keep the fist closed the whole time; the revert is purely time-based
    clock.advance(Duration::from_millis(1999));
    assert!(!s.frame(clock.now()).explosion_ended);
    assert_eq!(s.mode(), SimulationMode::Exploding);

    // Still holding when the revert runs: the same frame bursts again
    clock.advance(Duration::from_millis(1));
    let report = s.frame(clock.now());
    assert!(report.explosion_ended);
    assert!(report.explosion_started);
    assert_eq!(s.mode(), SimulationMode::Exploding);

    // Opened: the second burst reverts on its own
    show(&mut s, HandPose::Relaxed);
    clock.advance(Duration::from_millis(2000));
    assert!(s.frame(clock.now()).explosion_ended);
    assert_eq!(s.mode(), SimulationMode::Settling);
}

#[test]
fn test_held_fist_bursts_every_explosion_duration() {
    let clock = ManualClock::new();
    let mut s = state(100, ShapeId::Heart);
    show(&mut s, HandPose::Fist);

    let mut bursts = 0;
    let mut reverts = 0;
    while clock.now() <= Duration::from_millis(2500) {
        let report = s.frame(clock.now());
        bursts += u32::from(report.explosion_started);
        reverts += u32::from(report.explosion_ended);
        clock.advance(TICK);
    }
    assert_eq!(bursts, 2);
    assert_eq!(reverts, 1);
    assert_eq!(s.mode(), SimulationMode::Exploding);
}

#[test]
fn test_shorter_explosion_duration() {
    let config = MorphConfig::new()
        .with_particle_count(50)
        .with_explode_duration(Duration::from_millis(500));
    let mut s = SimulationState::new(&config, Box::new(StdRandom::seeded(3)));
    let clock = ManualClock::new();

    show(&mut s, HandPose::Fist);
    assert!(s.frame(clock.now()).explosion_started);
    show(&mut s, HandPose::Relaxed);

    clock.advance(Duration::from_millis(499));
    assert!(!s.frame(clock.now()).explosion_ended);
    clock.advance(Duration::from_millis(1));
    assert!(s.frame(clock.now()).explosion_ended);
    assert_eq!(s.mode(), SimulationMode::Settling);
}

#[test]
fn test_explosion_scatters_particles() {
    let clock = ManualClock::new();
    let mut s = state(200, ShapeId::Heart);
    let before = s.positions().to_vec();

    show(&mut s, HandPose::Fist);
    s.frame(clock.now());
    for _ in 0..10 {
        clock.advance(TICK);
        s.frame(clock.now());
    }
    let moved = s
        .positions()
        .chunks_exact(3)
        .zip(before.chunks_exact(3))
        .filter(|(a, b)| {
            let d = (a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2) + (a[2] - b[2]).powi(2);
            d.sqrt() > 10.0
        })
        .count();
    assert!(moved > 150);
}

// ============================================================================
// Status and rotation
// ============================================================================

#[test]
fn test_status_sequence() {
    let mut s = state(50, ShapeId::Heart);

    s.set_gestures(&HandPresence::Absent);
    assert_eq!(s.frame(Duration::ZERO).status, Some(StatusMessage::WAITING));

    show(&mut s, HandPose::Relaxed);
    assert_eq!(s.frame(Duration::ZERO).status, Some(StatusMessage::HAND_DETECTED));

    show(&mut s, HandPose::OpenPalm);
    assert_eq!(s.frame(Duration::ZERO).status, Some(StatusMessage::ROTATING));
    assert!(s.rotation_speed() > 0.0);
}

#[derive(Default)]
struct NullRenderer {
    draws: u32,
}

impl PointRenderer for NullRenderer {
    fn upload_positions(&mut self, _positions: &[f32]) {}

    fn resize_surface(&mut self, _width: u32, _height: u32) {}

    fn draw(&mut self, _uniforms: &FrameUniforms) -> Result<(), RenderError> {
        self.draws += 1;
        Ok(())
    }
}

#[test]
fn test_open_palm_spins_the_group() {
    let config = MorphConfig::default().with_particle_count(50);
    let mut s = SimulationState::new(&config, Box::new(StdRandom::seeded(1)));
    let mut view = RenderAdapter::new(NullRenderer::default(), &config.view, 640, 480);

    show(&mut s, HandPose::OpenPalm);
    for _ in 0..10 {
        s.frame(Duration::ZERO);
        view.render_frame(s.positions(), s.rotation_speed()).unwrap();
    }
    let spun = view.rotation();
    assert!((spun.y - 0.2).abs() < 1e-5);
    assert!((spun.x - 0.1).abs() < 1e-5);

    // Palm gone: rotation keeps going but slows down
    s.set_gestures(&HandPresence::Absent);
    s.frame(Duration::ZERO);
    view.render_frame(s.positions(), s.rotation_speed()).unwrap();
    let step = view.rotation().y - spun.y;
    assert!(step > 0.0 && step < 0.02);

    s.reset_view();
    if s.frame(Duration::ZERO).reset_view {
        view.reset();
    }
    assert_eq!(view.rotation().y, 0.0);
    assert_eq!(view.renderer().draws, 11);
}
