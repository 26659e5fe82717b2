//! A single rose: curved stem, two oval leaves and a spiral bloom.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

use crate::random::RandomSource;

const STEM_BOTTOM: f32 = -15.0;
const STEM_HEIGHT: f32 = 30.0;
const LEAF_Y: f32 = -5.0;
const BLOOM_Y: f32 = 15.0;
const BLOOM_RADIUS: f32 = 6.0;
const SPIRAL_TURNS: f32 = 5.0;
const PETALS: f32 = 8.0;

/// How `total` particles are divided between stem, leaves and bloom.
///
/// Stem and leaves round down; the bloom takes the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BouquetSplit {
    pub stem: u32,
    pub leaves: u32,
    pub bloom: u32,
}

impl BouquetSplit {
    pub fn new(total: u32) -> Self {
        // 25% stem, 15% leaves
        let stem = total / 4;
        let leaves = (u64::from(total) * 3 / 20) as u32;
        Self {
            stem,
            leaves,
            bloom: total - stem - leaves,
        }
    }

    /// Particles on the left leaf; the right leaf takes the rest.
    ///
    /// An odd leaf count puts the extra particle on the left.
    pub fn left_leaf(&self) -> u32 {
        self.leaves.div_ceil(2)
    }
}

pub(super) fn position(index: u32, total: u32, rng: &mut dyn RandomSource) -> Vec3 {
    let split = BouquetSplit::new(total);

    if index < split.stem {
        // Stem: gentle bow to the right from bottom to top.
        let progress = index as f32 / split.stem as f32;
        let curve = (progress * PI).sin() * 2.0;
        return Vec3::new(curve, STEM_BOTTOM + STEM_HEIGHT * progress, rng.centered(0.5));
    }

    let leaf_index = index - split.stem;
    if leaf_index < split.leaves {
        let left = split.left_leaf();
        let (side, local, len) = if leaf_index < left {
            (-1.0, leaf_index, left)
        } else {
            (1.0, leaf_index - left, split.leaves - left)
        };
        let progress = local as f32 / len as f32;
        let size = 3.0 * (progress * PI).sin();
        return Vec3::new(side * size, LEAF_Y, rng.centered(0.5));
    }

    // Bloom: spiral outward with an 8-lobe petal ripple, curling back in z.
    let bloom_index = leaf_index - split.leaves;
    let progress = bloom_index as f32 / split.bloom.max(1) as f32;
    let angle = progress * TAU * SPIRAL_TURNS;
    let radius = BLOOM_RADIUS * progress.sqrt();
    let r = radius * (1.0 + 0.5 * (angle * PETALS).sin());
    Vec3::new(
        r * angle.cos(),
        BLOOM_Y + r * angle.sin(),
        rng.centered(3.0) - progress * 2.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;

    #[test]
    fn split_sums_to_total() {
        for total in [0u32, 1, 2, 3, 7, 19, 100, 5000, 4999] {
            let s = BouquetSplit::new(total);
            assert_eq!(s.stem + s.leaves + s.bloom, total);
        }
    }

    #[test]
    fn split_ratios() {
        let s = BouquetSplit::new(5000);
        assert_eq!(s, BouquetSplit { stem: 1250, leaves: 750, bloom: 3000 });
        // Rounding goes to the bloom
        let s = BouquetSplit::new(103);
        assert_eq!(s, BouquetSplit { stem: 25, leaves: 15, bloom: 63 });
    }

    #[test]
    fn odd_leaf_count_favors_left() {
        // 1010 * 0.15 = 151.5, floored to 151
        let split = BouquetSplit::new(1010);
        assert_eq!(split.leaves, 151);
        assert_eq!(split.left_leaf(), 76);

        let mut rng = ScriptedRandom::constant(0.5);
        let last_left = position(split.stem + 75, 1010, &mut rng);
        let first_right = position(split.stem + 76, 1010, &mut rng);
        assert!(last_left.x <= 0.0);
        assert_eq!(first_right.x, 0.0);
    }

    #[test]
    fn stem_starts_at_bottom_center() {
        let mut rng = ScriptedRandom::constant(0.5);
        assert_eq!(position(0, 100, &mut rng), Vec3::new(0.0, STEM_BOTTOM, 0.0));
    }

    #[test]
    fn leaves_sit_on_opposite_sides() {
        let mut rng = ScriptedRandom::constant(0.5);
        let split = BouquetSplit::new(1000);
        let left = position(split.stem + 10, 1000, &mut rng);
        let right = position(split.stem + split.left_leaf() + 10, 1000, &mut rng);
        assert!(left.x < 0.0);
        assert!(right.x > 0.0);
        assert_eq!(left.y, LEAF_Y);
        assert_eq!(right.y, LEAF_Y);
    }

    #[test]
    fn bloom_sits_above_stem_and_curls_back() {
        let mut rng = ScriptedRandom::constant(0.5);
        let split = BouquetSplit::new(1000);
        let first = position(split.stem + split.leaves, 1000, &mut rng);
        assert_eq!(first, Vec3::new(0.0, BLOOM_Y, 0.0));
        let last = position(999, 1000, &mut rng);
        assert!(last.z < -1.9);
        assert!((last.y - BLOOM_Y).abs() <= BLOOM_RADIUS * 1.5 + 1e-3);
    }
}
