//! Status messages for the UI.
//!
//! The controller picks at most one [`StatusMessage`] per frame. Sinks
//! receive it together with shape-selection changes so a front end can keep
//! its selector in sync with gesture-driven changes.

use crate::shapes::ShapeId;

const PINK: &str = "rgba(255, 105, 180, 0.3)";
const PINK_FAINT: &str = "rgba(255, 105, 180, 0.2)";

/// A status line and its background color (CSS `rgba(...)` notation).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: &'static str,
    pub background: &'static str,
}

impl StatusMessage {
    pub const HEART: Self = Self::new("👆 Heart Shape", PINK);
    pub const I_LOVE_YOU: Self = Self::new("✌️ I LOVE YOU", PINK);
    pub const ROSE: Self = Self::new("🤘 Rose", PINK);
    pub const VALENTINES: Self = Self::new("🤟 VALENTINES", PINK);
    pub const ROTATING: Self = Self::new("🖐️ Rotating...", "rgba(255, 192, 203, 0.3)");
    pub const EXPLODING: Self = Self::new("👊 Exploding!", "rgba(255, 20, 147, 0.4)");
    pub const HAND_DETECTED: Self = Self::new("✋ Hand detected", PINK_FAINT);
    pub const WAITING: Self = Self::new("Waiting for hands...", PINK_FAINT);

    pub const fn new(text: &'static str, background: &'static str) -> Self {
        Self { text, background }
    }

    /// Message announcing a gesture-driven switch to `shape`.
    pub fn for_shape(shape: ShapeId) -> Self {
        match shape {
            ShapeId::Heart => Self::HEART,
            ShapeId::PhraseILoveYou => Self::I_LOVE_YOU,
            ShapeId::Bouquet => Self::ROSE,
            ShapeId::PhraseValentine => Self::VALENTINES,
        }
    }
}

/// Receiver for presentational events.
pub trait StatusSink {
    /// Show a new status line.
    fn show(&mut self, status: &StatusMessage);

    /// The active shape changed, from a gesture or from the selector.
    fn shape_selected(&mut self, _shape: ShapeId) {}
}

/// Sink that writes to the `log` facade.
#[derive(Debug, Default)]
pub struct LogSink;

impl StatusSink for LogSink {
    fn show(&mut self, status: &StatusMessage) {
        log::info!("status: {}", status.text);
    }

    fn shape_selected(&mut self, shape: ShapeId) {
        log::info!("shape: {}", shape);
    }
}

/// Forwards to an inner sink, dropping repeats of the current message.
#[derive(Debug, Default)]
pub struct StatusBoard<S> {
    inner: S,
    current: Option<StatusMessage>,
}

impl<S: StatusSink> StatusBoard<S> {
    pub fn new(inner: S) -> Self {
        Self { inner, current: None }
    }

    /// The message currently on display.
    pub fn current(&self) -> Option<&StatusMessage> {
        self.current.as_ref()
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }
}

impl<S: StatusSink> StatusSink for StatusBoard<S> {
    fn show(&mut self, status: &StatusMessage) {
        if self.current.as_ref() != Some(status) {
            self.current = Some(*status);
            self.inner.show(status);
        }
    }

    fn shape_selected(&mut self, shape: ShapeId) {
        self.inner.shape_selected(shape);
    }
}
