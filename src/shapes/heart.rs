//! Filled parametric heart.

use std::f32::consts::TAU;

use glam::{Vec2, Vec3};

use crate::random::RandomSource;

const SCALE: f32 = 3.0;
const DEPTH: f32 = 8.0;
const Y_OFFSET: f32 = -5.0;

/// Point on the heart outline for particle `index` of `total`, before fill.
///
/// `x = 16 sin³t`, `y = 13 cos t − 5 cos 2t − 2 cos 3t − cos 4t`, scaled.
pub fn outline(index: u32, total: u32) -> Vec2 {
    let t = index as f32 / total.max(1) as f32 * TAU;
    let x = 16.0 * t.sin().powi(3);
    let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
    Vec2::new(x, y) * SCALE
}

/// The outline point pulled toward the center by `sqrt(u)` so the area
/// fills evenly, with depth jitter that shrinks toward the middle.
pub(super) fn position(index: u32, total: u32, rng: &mut dyn RandomSource) -> Vec3 {
    let base = outline(index, total);
    let fill = rng.next_f32().sqrt();
    let z = rng.centered(DEPTH) * fill;
    Vec3::new(base.x * fill, base.y * fill + Y_OFFSET, z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;

    #[test]
    fn outline_top_cleft_at_zero() {
        // t = 0: x = 0, y = 13 - 5 - 2 - 1 = 5
        let p = outline(0, 100);
        assert!(p.x.abs() < 1e-6);
        assert!((p.y - 5.0 * SCALE).abs() < 1e-4);
    }

    #[test]
    fn full_fill_lands_on_outline() {
        let mut rng = ScriptedRandom::new(vec![1.0, 0.5]);
        let p = position(25, 100, &mut rng);
        let base = outline(25, 100);
        assert!((p.x - base.x).abs() < 1e-4);
        assert!((p.y - (base.y + Y_OFFSET)).abs() < 1e-4);
        assert_eq!(p.z, 0.0);
    }

    #[test]
    fn zero_fill_collapses_to_center() {
        let mut rng = ScriptedRandom::new(vec![0.0, 0.9]);
        let p = position(40, 100, &mut rng);
        assert_eq!(p, Vec3::new(0.0, Y_OFFSET, 0.0));
    }

    #[test]
    fn depth_is_bounded_by_fill() {
        let mut rng = ScriptedRandom::new(vec![0.25, 0.999]);
        let p = position(10, 100, &mut rng);
        // fill = 0.5, so |z| <= DEPTH / 2 * 0.5
        assert!(p.z.abs() <= DEPTH * 0.25 + 1e-4);
    }
}
