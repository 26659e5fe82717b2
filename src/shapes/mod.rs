//! Target shapes for the particle cloud.
//!
//! Every shape is a pure function of `(index, total)` plus an injected
//! [`RandomSource`] used for area fill and depth jitter. None of them read
//! simulation time, so recomputing a shape for the same particle count
//! gives the same silhouette.
//!
//! ```ignore
//! use particle_morph::prelude::*;
//!
//! let mut rng = StdRandom::from_entropy();
//! let p = position_for(ShapeId::Heart, 0, 5000, &mut rng);
//! ```

mod bouquet;
mod glyph;
mod heart;
mod phrase;

use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::random::RandomSource;

pub use bouquet::BouquetSplit;
pub use glyph::Glyph;
pub use heart::outline as heart_outline;
pub use phrase::{LetterSlot, Phrase};

/// Signature shared by every shape generator: `(index, total, rng)`.
pub type ShapeFn = fn(u32, u32, &mut dyn RandomSource) -> Vec3;

/// The four selectable target shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ShapeId {
    /// Filled parametric heart.
    #[default]
    #[serde(rename = "heart")]
    Heart,
    /// Block letters spelling `ILOVEYOU`.
    #[serde(rename = "iloveyou")]
    PhraseILoveYou,
    /// Block letters spelling `VALENTINE`.
    #[serde(rename = "valentines")]
    PhraseValentine,
    /// A single rose with stem and two leaves.
    #[serde(rename = "bouquet")]
    Bouquet,
}

impl ShapeId {
    /// All shapes, in selector order.
    pub const ALL: [ShapeId; 4] = [
        ShapeId::Heart,
        ShapeId::PhraseILoveYou,
        ShapeId::PhraseValentine,
        ShapeId::Bouquet,
    ];

    /// Selector name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            ShapeId::Heart => "heart",
            ShapeId::PhraseILoveYou => "iloveyou",
            ShapeId::PhraseValentine => "valentines",
            ShapeId::Bouquet => "bouquet",
        }
    }

    /// The generator function for this shape.
    pub fn generator(self) -> ShapeFn {
        match self {
            ShapeId::Heart => heart::position,
            ShapeId::PhraseILoveYou => phrase::i_love_you,
            ShapeId::PhraseValentine => phrase::valentine,
            ShapeId::Bouquet => bouquet::position,
        }
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown shape name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown shape `{0}` (expected heart, iloveyou, valentines or bouquet)")]
pub struct UnknownShape(pub String);

impl FromStr for ShapeId {
    type Err = UnknownShape;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        ShapeId::ALL
            .into_iter()
            .find(|shape| shape.name() == lowered)
            .ok_or_else(|| UnknownShape(s.to_string()))
    }
}

/// Target position of particle `index` out of `total` for `shape`.
///
/// `total` of zero is treated as one so the result is always finite.
#[inline]
pub fn position_for(shape: ShapeId, index: u32, total: u32, rng: &mut dyn RandomSource) -> Vec3 {
    let total = total.max(1);
    (shape.generator())(index.min(total - 1), total, rng)
}

/// Recompute every target for `shape` into `out`.
///
/// `out` is cleared and refilled, keeping its allocation when the particle
/// count hasn't changed.
pub fn compute_targets(shape: ShapeId, total: u32, rng: &mut dyn RandomSource, out: &mut Vec<Vec3>) {
    out.clear();
    out.reserve(total as usize);
    let generate = shape.generator();
    out.extend((0..total).map(|i| generate(i, total, rng)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{ScriptedRandom, StdRandom};

    #[test]
    fn every_shape_is_finite() {
        let mut rng = StdRandom::seeded(11);
        for shape in ShapeId::ALL {
            for total in [1u32, 2, 3, 7, 8, 9, 10, 100, 5000] {
                for i in 0..total {
                    let p = position_for(shape, i, total, &mut rng);
                    assert!(p.is_finite(), "{shape} {i}/{total} -> {p:?}");
                }
            }
        }
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for shape in ShapeId::ALL {
            assert_eq!(shape.name().parse::<ShapeId>(), Ok(shape));
        }
        assert_eq!("  HEART ".parse::<ShapeId>(), Ok(ShapeId::Heart));
        assert!("tulip".parse::<ShapeId>().is_err());
    }

    #[test]
    fn compute_targets_reuses_allocation() {
        let mut rng = StdRandom::seeded(5);
        let mut out = Vec::new();
        compute_targets(ShapeId::Bouquet, 500, &mut rng, &mut out);
        assert_eq!(out.len(), 500);
        let capacity = out.capacity();
        let ptr = out.as_ptr();
        compute_targets(ShapeId::Heart, 500, &mut rng, &mut out);
        assert_eq!(out.len(), 500);
        assert_eq!(out.capacity(), capacity);
        assert_eq!(out.as_ptr(), ptr);
    }

    #[test]
    fn zero_total_is_clamped() {
        let mut rng = ScriptedRandom::constant(0.5);
        for shape in ShapeId::ALL {
            assert!(position_for(shape, 0, 0, &mut rng).is_finite());
        }
    }
}
