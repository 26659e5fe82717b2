//! Gesture-driven mode control.
//!
//! The [`ModeController`] turns one [`GestureFrame`] per render tick into
//! decisions: which shape to show, how fast the cloud spins, and whether to
//! start an explosion. It never touches particle data itself.
//!
//! Shape gestures are checked in a fixed order and only the first one that
//! would actually change the shape fires, so holding a gesture does not
//! re-trigger its side effects every frame.

use crate::config::ControlConfig;
use crate::gesture::{GestureFrame, GestureState};
use crate::shapes::ShapeId;
use crate::status::StatusMessage;

/// Shape gestures in priority order.
fn shape_requests(g: &GestureState) -> [(bool, ShapeId); 4] {
    [
        (g.index_up, ShapeId::Heart),
        (g.peace, ShapeId::PhraseILoveYou),
        (g.three_fingers, ShapeId::Bouquet),
        (g.i_love_you, ShapeId::PhraseValentine),
    ]
}

/// What the controller decided for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameDecision {
    /// Set when a gesture switched the shape this frame.
    pub shape_changed: Option<ShapeId>,
    /// Start an explosion this frame.
    pub explode: bool,
    /// Status line to show, if any branch produced one.
    pub status: Option<StatusMessage>,
}

#[derive(Debug, Clone)]
pub struct ModeController {
    shape: ShapeId,
    rotation_speed: f32,
    exploding: bool,
    config: ControlConfig,
}

impl ModeController {
    pub fn new(shape: ShapeId, config: ControlConfig) -> Self {
        Self {
            shape,
            rotation_speed: 0.0,
            exploding: false,
            config,
        }
    }

    /// Apply one frame of gesture input.
    pub fn update(&mut self, frame: &GestureFrame) -> FrameDecision {
        let gestures = &frame.gestures;
        let mut decision = FrameDecision::default();

        if let Some((_, shape)) = shape_requests(gestures)
            .into_iter()
            .find(|&(active, shape)| active && shape != self.shape)
        {
            self.shape = shape;
            decision.shape_changed = Some(shape);
            decision.status = Some(StatusMessage::for_shape(shape));
        }

        if gestures.open_palm {
            self.rotation_speed = self.config.rotation_speed;
            decision.status.get_or_insert(StatusMessage::ROTATING);
        } else {
            self.rotation_speed *= self.config.rotation_decay;
        }

        // A fist held past the auto-revert fires again
        if gestures.fist {
            if !self.exploding {
                self.exploding = true;
                decision.explode = true;
            }
            decision.status.get_or_insert(StatusMessage::EXPLODING);
        }

        if !gestures.any() {
            if frame.hand_detected {
                decision.status.get_or_insert(StatusMessage::HAND_DETECTED);
            } else {
                decision.status.get_or_insert(StatusMessage::WAITING);
            }
        }

        decision
    }

    /// Switch shape from outside the gesture path.
    ///
    /// Returns `false` when `shape` is already active.
    pub fn select_shape(&mut self, shape: ShapeId) -> bool {
        if shape == self.shape {
            return false;
        }
        self.shape = shape;
        true
    }

    /// Clear the exploding flag; called when the auto-revert task fires.
    pub fn end_explosion(&mut self) {
        self.exploding = false;
    }

    #[inline]
    pub fn shape(&self) -> ShapeId {
        self.shape
    }

    /// Current rotation increment in radians per frame.
    #[inline]
    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed
    }

    #[inline]
    pub fn is_exploding(&self) -> bool {
        self.exploding
    }
}
