//! Static hand-gesture classification from 21 hand landmarks.
//!
//! Landmarks follow the usual hand topology (wrist = 0, then four points
//! per digit from thumb to pinky) in normalized image space with y growing
//! downward. Classification looks at one frame only and keeps no state.
//!
//! ## Gestures
//!
//! | Gesture | Extended digits |
//! |---|---|
//! | `index_up` | index |
//! | `peace` | index, middle |
//! | `three_fingers` | index, middle, ring |
//! | `i_love_you` | thumb, index, pinky |
//! | `open_palm` | all five |
//! | `fist` | none |

/// Number of landmarks in one hand.
pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_MCP: usize = 2;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_TIP: usize = 20;

/// (base, tip) landmark pairs for index, middle, ring and pinky.
const FINGERS: [(usize, usize); 4] = [
    (INDEX_MCP, INDEX_TIP),
    (MIDDLE_MCP, MIDDLE_TIP),
    (RING_MCP, RING_TIP),
    (PINKY_MCP, PINKY_TIP),
];

/// One tracked point on the hand.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// A complete, validated set of landmarks for one hand.
#[derive(Clone, Debug, PartialEq)]
pub struct HandLandmarks {
    points: [Landmark; LANDMARK_COUNT],
}

impl HandLandmarks {
    /// Build from detector output.
    ///
    /// Returns `None` when any landmark is missing or has a non-finite
    /// coordinate; callers treat that the same as "no hand".
    pub fn from_points(points: &[Landmark]) -> Option<Self> {
        if points.len() < LANDMARK_COUNT {
            return None;
        }
        let mut out = [Landmark::default(); LANDMARK_COUNT];
        for (slot, point) in out.iter_mut().zip(points) {
            if !point.is_finite() {
                return None;
            }
            *slot = *point;
        }
        Some(Self { points: out })
    }

    /// Build from a flat `[x0, y0, z0, x1, y1, z1, ...]` slice.
    pub fn from_flat(coords: &[f32]) -> Option<Self> {
        if coords.len() < LANDMARK_COUNT * 3 {
            return None;
        }
        let points: Vec<Landmark> = coords
            .chunks_exact(3)
            .take(LANDMARK_COUNT)
            .map(|c| Landmark::new(c[0], c[1], c[2]))
            .collect();
        Self::from_points(&points)
    }

    /// Wrap a full set of known-finite landmarks.
    pub(crate) fn from_array(points: [Landmark; LANDMARK_COUNT]) -> Self {
        debug_assert!(points.iter().all(Landmark::is_finite));
        Self { points }
    }

    pub fn point(&self, index: usize) -> Landmark {
        self.points[index]
    }

    pub fn points(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.points
    }

    /// Which digits are currently extended.
    pub fn extension(&self) -> Extension {
        let finger = |(base, tip): (usize, usize)| self.points[tip].y < self.points[base].y;

        let wrist = self.points[WRIST];
        let thumb_tip = self.points[THUMB_TIP];
        let thumb_base = self.points[THUMB_MCP];
        let thumb = (thumb_tip.x - wrist.x).abs() > (thumb_base.x - wrist.x).abs();

        Extension {
            thumb,
            index: finger(FINGERS[0]),
            middle: finger(FINGERS[1]),
            ring: finger(FINGERS[2]),
            pinky: finger(FINGERS[3]),
        }
    }
}

/// Per-digit extension flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Extension {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

/// Named gestures recognised in the current frame.
///
/// Several may be true at once; the mode controller resolves overlaps by a
/// fixed priority.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GestureState {
    pub index_up: bool,
    pub peace: bool,
    pub i_love_you: bool,
    pub open_palm: bool,
    pub fist: bool,
    pub three_fingers: bool,
}

impl GestureState {
    /// True if any gesture is recognised.
    pub fn any(&self) -> bool {
        self.index_up || self.peace || self.i_love_you || self.open_palm || self.fist || self.three_fingers
    }
}

/// Classify one hand.
pub fn classify(hand: &HandLandmarks) -> GestureState {
    let Extension {
        thumb,
        index,
        middle,
        ring,
        pinky,
    } = hand.extension();

    GestureState {
        index_up: index && !middle && !ring && !pinky && !thumb,
        peace: index && middle && !ring && !pinky && !thumb,
        three_fingers: index && middle && ring && !pinky && !thumb,
        i_love_you: thumb && index && !middle && !ring && pinky,
        open_palm: index && middle && ring && pinky && thumb,
        fist: !index && !middle && !ring && !pinky && !thumb,
    }
}

/// Latest detector result: one hand or nothing.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum HandPresence {
    Detected(HandLandmarks),
    #[default]
    Absent,
}

/// What the mode controller consumes each frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GestureFrame {
    pub hand_detected: bool,
    pub gestures: GestureState,
}

impl GestureFrame {
    /// No hand in view; every gesture false.
    pub const NO_HAND: GestureFrame = GestureFrame {
        hand_detected: false,
        gestures: GestureState {
            index_up: false,
            peace: false,
            i_love_you: false,
            open_palm: false,
            fist: false,
            three_fingers: false,
        },
    };

    pub fn from_presence(presence: &HandPresence) -> Self {
        match presence {
            HandPresence::Detected(hand) => GestureFrame {
                hand_detected: true,
                gestures: classify(hand),
            },
            HandPresence::Absent => Self::NO_HAND,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hand with the given digits extended: tips above bases for fingers,
    /// thumb tip farther from the wrist than its base.
    fn hand(thumb: bool, fingers: [bool; 4]) -> HandLandmarks {
        let mut points = [Landmark::new(0.5, 0.5, 0.0); LANDMARK_COUNT];
        points[WRIST] = Landmark::new(0.5, 0.9, 0.0);
        points[THUMB_MCP] = Landmark::new(0.4, 0.7, 0.0);
        points[THUMB_TIP] = Landmark::new(if thumb { 0.3 } else { 0.45 }, 0.65, 0.0);
        for (i, ((base, tip), extended)) in FINGERS.iter().zip(fingers).enumerate() {
            let x = 0.4 + i as f32 * 0.05;
            points[*base] = Landmark::new(x, 0.6, 0.0);
            points[*tip] = Landmark::new(x, if extended { 0.4 } else { 0.7 }, 0.0);
        }
        HandLandmarks::from_points(&points).unwrap()
    }

    #[test]
    fn peace_is_exclusive() {
        let g = classify(&hand(false, [true, true, false, false]));
        assert_eq!(
            g,
            GestureState {
                peace: true,
                ..Default::default()
            }
        );
    }

    #[test]
    fn each_gesture_from_its_pose() {
        assert!(classify(&hand(false, [true, false, false, false])).index_up);
        assert!(classify(&hand(false, [true, true, true, false])).three_fingers);
        assert!(classify(&hand(true, [true, false, false, true])).i_love_you);
        assert!(classify(&hand(true, [true, true, true, true])).open_palm);
        assert!(classify(&hand(false, [false, false, false, false])).fist);
    }

    #[test]
    fn thumb_breaks_index_up() {
        let g = classify(&hand(true, [true, false, false, false]));
        assert!(!g.any());
    }

    #[test]
    fn thumb_test_is_side_agnostic() {
        let mut h = hand(false, [false; 4]);
        // Mirror the thumb to the other side of the wrist
        h.points[THUMB_MCP].x = 0.6;
        h.points[THUMB_TIP].x = 0.75;
        assert!(h.extension().thumb);
    }

    #[test]
    fn missing_landmarks_rejected() {
        let points = [Landmark::default(); 20];
        assert!(HandLandmarks::from_points(&points).is_none());
        assert!(HandLandmarks::from_flat(&[0.0; 62]).is_none());
    }

    #[test]
    fn non_finite_landmarks_rejected() {
        let mut points = [Landmark::default(); LANDMARK_COUNT];
        points[7].y = f32::NAN;
        assert!(HandLandmarks::from_points(&points).is_none());
        points[7].y = f32::INFINITY;
        assert!(HandLandmarks::from_points(&points).is_none());
    }

    #[test]
    fn flat_layout_is_xyz_triples() {
        let coords: Vec<f32> = (0..63).map(|i| i as f32).collect();
        let h = HandLandmarks::from_flat(&coords).unwrap();
        assert_eq!(h.point(1), Landmark::new(3.0, 4.0, 5.0));
        assert_eq!(h.point(20), Landmark::new(60.0, 61.0, 62.0));
    }

    #[test]
    fn absent_hand_clears_everything() {
        let frame = GestureFrame::from_presence(&HandPresence::Absent);
        assert_eq!(frame, GestureFrame::NO_HAND);
        assert!(!frame.gestures.any());
    }
}
