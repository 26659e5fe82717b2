//! Block-letter phrases.
//!
//! Particles are split evenly across the letters; the last letter takes
//! whatever integer division leaves over. Each letter is then laid out by
//! its [`Glyph`] at a fixed horizontal spacing, starting half the phrase
//! width left of `x = 0`.

use glam::Vec3;

use super::glyph::Glyph;
use crate::random::RandomSource;

const DEPTH: f32 = 2.0;

/// A fixed string of block letters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phrase {
    pub text: &'static str,
    /// Distance between neighbouring letter centers.
    pub spacing: f32,
}

/// Which letter a particle belongs to and where it sits within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterSlot {
    /// Letter index within the phrase.
    pub letter: u32,
    /// Particle index within the letter.
    pub local: u32,
    /// Number of particles assigned to the letter.
    pub count: u32,
}

impl Phrase {
    pub const I_LOVE_YOU: Phrase = Phrase {
        text: "ILOVEYOU",
        spacing: 10.0,
    };

    pub const VALENTINE: Phrase = Phrase {
        text: "VALENTINE",
        spacing: 7.0,
    };

    /// Number of letters, spaces included.
    pub fn len(&self) -> u32 {
        self.text.chars().count() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Particles assigned to letter `letter` when `total` are available.
    pub fn letter_count(&self, letter: u32, total: u32) -> u32 {
        let len = self.len().max(1);
        let per = total / len;
        if letter + 1 == len {
            per + total % len
        } else if letter < len {
            per
        } else {
            0
        }
    }

    /// Locate particle `index` of `total` within the phrase.
    ///
    /// With fewer particles than letters every particle goes to the last
    /// letter.
    pub fn slot(&self, index: u32, total: u32) -> LetterSlot {
        let len = self.len().max(1);
        let last = len - 1;
        let per = total / len;
        if per == 0 {
            return LetterSlot {
                letter: last,
                local: index,
                count: total.max(1),
            };
        }

        let letter = (index / per).min(last);
        LetterSlot {
            letter,
            local: index - letter * per,
            count: self.letter_count(letter, total),
        }
    }

    /// Horizontal origin of letter `letter`.
    ///
    /// Letters start half the phrase width left of `x = 0`, so the row of
    /// letter origins sits `spacing / 2` left of center.
    pub fn letter_x(&self, letter: u32) -> f32 {
        -(self.len() as f32) * self.spacing / 2.0 + letter as f32 * self.spacing
    }

    /// Target position of particle `index` of `total`.
    pub fn position(&self, index: u32, total: u32, rng: &mut dyn RandomSource) -> Vec3 {
        let slot = self.slot(index, total);
        let glyph = self
            .text
            .chars()
            .nth(slot.letter as usize)
            .map(Glyph::from_char)
            .unwrap_or(Glyph::Unsupported);

        let stroke = glyph.stroke_point(slot.local, slot.count, rng);
        Vec3::new(self.letter_x(slot.letter) + stroke.x, stroke.y, rng.centered(DEPTH))
    }
}

pub(super) fn i_love_you(index: u32, total: u32, rng: &mut dyn RandomSource) -> Vec3 {
    Phrase::I_LOVE_YOU.position(index, total, rng)
}

pub(super) fn valentine(index: u32, total: u32, rng: &mut dyn RandomSource) -> Vec3 {
    Phrase::VALENTINE.position(index, total, rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(phrase: &Phrase, total: u32) -> Vec<u32> {
        let mut out = vec![0u32; phrase.len() as usize];
        for i in 0..total {
            out[phrase.slot(i, total).letter as usize] += 1;
        }
        out
    }

    #[test]
    fn slots_cover_every_particle_once() {
        for phrase in [Phrase::I_LOVE_YOU, Phrase::VALENTINE] {
            for total in [1u32, 5, 8, 9, 17, 5000, 5003] {
                let c = counts(&phrase, total);
                assert_eq!(c.iter().sum::<u32>(), total);
                for (letter, n) in c.iter().enumerate() {
                    assert_eq!(*n, phrase.letter_count(letter as u32, total));
                }
            }
        }
    }

    #[test]
    fn last_letter_absorbs_remainder() {
        // 5003 / 9 = 555 rem 8
        let c = counts(&Phrase::VALENTINE, 5003);
        assert!(c[..8].iter().all(|&n| n == 555));
        assert_eq!(c[8], 555 + 8);
    }

    #[test]
    fn local_indices_stay_below_count() {
        let phrase = Phrase::I_LOVE_YOU;
        for i in 0..1001 {
            let slot = phrase.slot(i, 1001);
            assert!(slot.local < slot.count, "{slot:?}");
        }
    }

    #[test]
    fn fewer_particles_than_letters() {
        let phrase = Phrase::VALENTINE;
        for i in 0..4 {
            let slot = phrase.slot(i, 4);
            assert_eq!(slot.letter, 8);
            assert_eq!(slot.count, 4);
        }
    }

    #[test]
    fn letters_start_half_a_phrase_left() {
        let phrase = Phrase::I_LOVE_YOU;
        assert_eq!(phrase.letter_x(0), -40.0);
        assert_eq!(phrase.letter_x(7), 30.0);

        let phrase = Phrase::VALENTINE;
        assert_eq!(phrase.letter_x(0), -31.5);
        assert_eq!(phrase.letter_x(8), 24.5);
    }

    #[test]
    fn letter_row_sits_half_a_spacing_left() {
        for phrase in [Phrase::I_LOVE_YOU, Phrase::VALENTINE] {
            let mid = (phrase.letter_x(0) + phrase.letter_x(phrase.len() - 1)) / 2.0;
            assert!((mid + phrase.spacing / 2.0).abs() < 1e-4, "{} {mid}", phrase.text);
        }
    }
}
