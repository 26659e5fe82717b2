//! Stroke layouts for the block letters used by the phrase shapes.
//!
//! Each glyph spreads `count` particles along a few straight strokes or
//! arcs inside a box roughly 4 wide and 10 tall, centered on the letter's
//! base x. The caller adds the base x and depth jitter.

use std::f32::consts::{PI, TAU};

use glam::Vec2;

use crate::random::RandomSource;

/// A letter the phrase renderer knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    A,
    E,
    I,
    L,
    N,
    O,
    S,
    T,
    U,
    V,
    Y,
    Space,
    /// Anything else collapses to a single point.
    Unsupported,
}

impl Glyph {
    pub fn from_char(c: char) -> Self {
        match c.to_ascii_uppercase() {
            'A' => Glyph::A,
            'E' => Glyph::E,
            'I' => Glyph::I,
            'L' => Glyph::L,
            'N' => Glyph::N,
            'O' => Glyph::O,
            'S' => Glyph::S,
            'T' => Glyph::T,
            'U' => Glyph::U,
            'V' => Glyph::V,
            'Y' => Glyph::Y,
            ' ' => Glyph::Space,
            _ => Glyph::Unsupported,
        }
    }

    /// Offset from the letter's base of particle `local` out of `count`.
    ///
    /// Only [`Glyph::Space`] consumes randomness.
    pub fn stroke_point(self, local: u32, count: u32, rng: &mut dyn RandomSource) -> Vec2 {
        let n = count.max(1) as f32;
        let f = local as f32;
        let third = n / 3.0;
        let half = n / 2.0;
        let quarter = n / 4.0;

        match self {
            Glyph::A => {
                if f < third {
                    let s = f / third;
                    Vec2::new(-2.0 + s * 2.0, -5.0 + s * 10.0)
                } else if f < 2.0 * third {
                    let s = (f - third) / third;
                    Vec2::new(s * 2.0, 5.0 - s * 10.0)
                } else {
                    let s = (f - 2.0 * third) / third;
                    Vec2::new(-1.0 + s * 2.0, 0.0)
                }
            }
            Glyph::E => match ((f / n) * 4.0) as u32 {
                0 => Vec2::new(-1.5, -5.0 + (f / quarter) * 10.0),
                1 => Vec2::new(-1.5 + ((f - quarter) / quarter) * 3.0, 5.0),
                2 => Vec2::new(-1.5 + ((f - half) / quarter) * 2.5, 0.0),
                _ => Vec2::new(-1.5 + ((f - 3.0 * quarter) / quarter) * 3.0, -5.0),
            },
            Glyph::I => Vec2::new(0.0, -5.0 + (f / n) * 10.0),
            Glyph::L => {
                if f < half {
                    Vec2::new(-1.5, -5.0 + (f / half) * 10.0)
                } else {
                    Vec2::new(-1.5 + ((f - half) / half) * 3.0, -5.0)
                }
            }
            Glyph::N => {
                if f < third {
                    Vec2::new(-1.5, -5.0 + (f / third) * 10.0)
                } else if f < 2.0 * third {
                    let s = (f - third) / third;
                    Vec2::new(-1.5 + s * 3.0, 5.0 - s * 10.0)
                } else {
                    Vec2::new(1.5, -5.0 + ((f - 2.0 * third) / third) * 10.0)
                }
            }
            Glyph::O => {
                let t = (f / n) * TAU;
                Vec2::new(2.0 * t.cos(), 2.0 * t.sin())
            }
            Glyph::S => {
                let a = (f / n) * PI * 2.5;
                Vec2::new(2.0 * a.cos(), 4.0 * a.sin())
            }
            Glyph::T => {
                if f < third {
                    Vec2::new(-2.0 + (f / third) * 4.0, 5.0)
                } else {
                    Vec2::new(0.0, 5.0 - ((f - third) / (2.0 * third)) * 10.0)
                }
            }
            Glyph::U => {
                let a = PI + (f / n) * PI;
                Vec2::new(2.0 * a.cos(), -5.0 + 2.5 * (1.0 + a.sin()))
            }
            Glyph::V => {
                if f < half {
                    let s = f / half;
                    Vec2::new(-2.0 + s * 2.0, 5.0 - s * 10.0)
                } else {
                    let s = (f - half) / half;
                    Vec2::new(s * 2.0, -5.0 + s * 10.0)
                }
            }
            Glyph::Y => {
                if f < third {
                    let s = f / third;
                    Vec2::new(-2.0 + s * 2.0, 5.0 - s * 5.0)
                } else if f < 2.0 * third {
                    let s = (f - third) / third;
                    Vec2::new(s * 2.0, s * 5.0)
                } else {
                    Vec2::new(0.0, -((f - 2.0 * third) / third) * 5.0)
                }
            }
            Glyph::Space => Vec2::new(0.0, rng.centered(10.0)),
            Glyph::Unsupported => Vec2::ZERO,
        }
    }
}
