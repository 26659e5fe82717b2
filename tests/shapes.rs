//! Integration tests for target shape generation.

use particle_morph::random::{RandomSource, ScriptedRandom, StdRandom};
use particle_morph::shapes::{heart_outline, BouquetSplit, Phrase};
use particle_morph::{compute_targets, position_for, ShapeId};

// ============================================================================
// All shapes
// ============================================================================

#[test]
fn test_all_shapes_finite_for_awkward_totals() {
    let mut rng = StdRandom::seeded(2024);
    for shape in ShapeId::ALL {
        for total in [1u32, 2, 5, 8, 9, 11, 17, 99, 1000] {
            let mut targets = Vec::new();
            compute_targets(shape, total, &mut rng, &mut targets);
            assert_eq!(targets.len(), total as usize);
            assert!(
                targets.iter().all(|p| p.is_finite()),
                "{} produced a non-finite point for total {}",
                shape,
                total
            );
        }
    }
}

#[test]
fn test_shapes_fit_in_view() {
    // The camera sits 50 units back with a 75 degree field of view
    let mut rng = StdRandom::seeded(1);
    for shape in ShapeId::ALL {
        let mut targets = Vec::new();
        compute_targets(shape, 5000, &mut rng, &mut targets);
        for p in &targets {
            assert!(p.x.abs() < 60.0 && p.y.abs() < 60.0 && p.z.abs() < 10.0, "{shape}: {p:?}");
        }
    }
}

// ============================================================================
// Heart
// ============================================================================

#[test]
fn test_heart_base_is_reproducible() {
    // Full fill and centered depth: every point lands exactly on the outline
    let mut a = ScriptedRandom::new(vec![1.0, 0.5]);
    let mut b = ScriptedRandom::new(vec![1.0, 0.5]);
    for i in 0..200 {
        let p = position_for(ShapeId::Heart, i, 200, &mut a);
        let q = position_for(ShapeId::Heart, i, 200, &mut b);
        assert_eq!(p, q);

        let base = heart_outline(i, 200);
        assert!((p.x - base.x).abs() < 1e-4);
        assert!((p.y - (base.y - 5.0)).abs() < 1e-4);
        assert_eq!(p.z, 0.0);
    }
}

#[test]
fn test_heart_fill_scales_toward_center() {
    let mut quarter = ScriptedRandom::new(vec![0.25, 0.5]);
    let p = position_for(ShapeId::Heart, 50, 200, &mut quarter);
    let base = heart_outline(50, 200);
    assert!((p.x - base.x * 0.5).abs() < 1e-4);
}

// ============================================================================
// Phrases
// ============================================================================

#[test]
fn test_phrase_counts_sum_to_total() {
    for phrase in [Phrase::I_LOVE_YOU, Phrase::VALENTINE] {
        for total in [0u32, 1, 7, 8, 9, 10, 100, 5000, 5003] {
            let sum: u32 = (0..phrase.len()).map(|l| phrase.letter_count(l, total)).sum();
            assert_eq!(sum, total, "{} with {}", phrase.text, total);
        }
    }
}

#[test]
fn test_last_letter_absorbs_remainder() {
    let phrase = Phrase::VALENTINE;
    // 5003 = 9 * 555 + 8
    assert_eq!(phrase.letter_count(0, 5003), 555);
    assert_eq!(phrase.letter_count(7, 5003), 555);
    assert_eq!(phrase.letter_count(8, 5003), 563);

    let last = phrase.slot(5002, 5003);
    assert_eq!(last.letter, 8);
    assert_eq!(last.local, 562);
    assert_eq!(last.count, 563);
}

#[test]
fn test_phrase_slots_cover_every_particle_once() {
    let phrase = Phrase::I_LOVE_YOU;
    let total = 1234;
    let mut seen = vec![Vec::new(); phrase.len() as usize];
    for i in 0..total {
        let slot = phrase.slot(i, total);
        seen[slot.letter as usize].push(slot.local);
    }
    for (letter, locals) in seen.iter().enumerate() {
        let expected: Vec<u32> = (0..phrase.letter_count(letter as u32, total)).collect();
        assert_eq!(locals, &expected);
    }
}

#[test]
fn test_phrase_depth_jitter_is_bounded() {
    let mut rng = StdRandom::seeded(8);
    for i in 0..900 {
        let p = position_for(ShapeId::PhraseValentine, i, 900, &mut rng);
        assert!(p.z.abs() <= 1.0);
    }
}

// ============================================================================
// Bouquet
// ============================================================================

#[test]
fn test_bouquet_groups() {
    for total in [1u32, 10, 99, 1000, 5000, 5001] {
        let split = BouquetSplit::new(total);
        assert_eq!(split.stem + split.leaves + split.bloom, total);
        assert_eq!(split.stem, (total as f64 * 0.25).floor() as u32);
        assert_eq!(split.leaves, (total as f64 * 0.15).floor() as u32);
    }
    let split = BouquetSplit::new(5000);
    assert_eq!((split.stem, split.leaves, split.bloom), (1250, 750, 3000));
}

#[test]
fn test_bouquet_stem_rises() {
    let mut rng = ScriptedRandom::constant(0.5);
    let split = BouquetSplit::new(1000);
    let mut prev = f32::NEG_INFINITY;
    for i in 0..split.stem {
        let p = position_for(ShapeId::Bouquet, i, 1000, &mut rng);
        assert!(p.y > prev);
        assert!((0.0..=2.0).contains(&p.x));
        prev = p.y;
    }
    assert!(prev < 15.0);
}

// ============================================================================
// Random sources
// ============================================================================

struct Counting(u32);

impl RandomSource for Counting {
    fn next_f32(&mut self) -> f32 {
        self.0 += 1;
        0.5
    }
}

#[test]
fn test_shapes_only_use_the_injected_source() {
    for shape in ShapeId::ALL {
        let mut rng = Counting(0);
        let p = position_for(shape, 3, 10, &mut rng);
        assert!(rng.0 > 0, "{shape} drew no randomness");
        assert!(p.is_finite());
    }
}
