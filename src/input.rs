//! Keyboard input for the window.
//!
//! Raw key events become [`Command`]s. Key repeat is suppressed, so holding
//! a key produces one command on the way down and, for pose keys, one on
//! the way up.
//!
//! | Key | Command |
//! |---|---|
//! | `1`-`4` | select heart, ILOVEYOU, VALENTINE, bouquet |
//! | `R` | reset the view |
//! | `Esc` | quit |
//!
//! With the simulated hand, pose keys are held to show a gesture and
//! released to take the hand away:
//!
//! | Key | Pose |
//! |---|---|
//! | `Q` | index finger |
//! | `W` | peace |
//! | `E` | three fingers |
//! | `T` | I-love-you |
//! | `P` | open palm |
//! | `F` | fist |
//! | `H` | relaxed hand |

use std::collections::HashSet;

use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};

use crate::landmarks::HandPose;
use crate::shapes::ShapeId;

/// Keys the window reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Key1, Key2, Key3, Key4,
    Q, W, E, T, P, F, H, R,
    Escape,
    Other,
}

impl From<WinitKeyCode> for KeyCode {
    fn from(key: WinitKeyCode) -> Self {
        match key {
            WinitKeyCode::Digit1 | WinitKeyCode::Numpad1 => KeyCode::Key1,
            WinitKeyCode::Digit2 | WinitKeyCode::Numpad2 => KeyCode::Key2,
            WinitKeyCode::Digit3 | WinitKeyCode::Numpad3 => KeyCode::Key3,
            WinitKeyCode::Digit4 | WinitKeyCode::Numpad4 => KeyCode::Key4,
            WinitKeyCode::KeyQ => KeyCode::Q,
            WinitKeyCode::KeyW => KeyCode::W,
            WinitKeyCode::KeyE => KeyCode::E,
            WinitKeyCode::KeyT => KeyCode::T,
            WinitKeyCode::KeyP => KeyCode::P,
            WinitKeyCode::KeyF => KeyCode::F,
            WinitKeyCode::KeyH => KeyCode::H,
            WinitKeyCode::KeyR => KeyCode::R,
            WinitKeyCode::Escape => KeyCode::Escape,
            _ => KeyCode::Other,
        }
    }
}

impl KeyCode {
    fn shape(self) -> Option<ShapeId> {
        match self {
            KeyCode::Key1 => Some(ShapeId::Heart),
            KeyCode::Key2 => Some(ShapeId::PhraseILoveYou),
            KeyCode::Key3 => Some(ShapeId::PhraseValentine),
            KeyCode::Key4 => Some(ShapeId::Bouquet),
            _ => None,
        }
    }

    fn pose(self) -> Option<HandPose> {
        match self {
            KeyCode::Q => Some(HandPose::PointIndex),
            KeyCode::W => Some(HandPose::Peace),
            KeyCode::E => Some(HandPose::ThreeFingers),
            KeyCode::T => Some(HandPose::ILoveYou),
            KeyCode::P => Some(HandPose::OpenPalm),
            KeyCode::F => Some(HandPose::Fist),
            KeyCode::H => Some(HandPose::Relaxed),
            _ => None,
        }
    }
}

/// What a key event asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SelectShape(ShapeId),
    ResetView,
    /// Show the simulated hand in a pose, or hide it with `None`.
    Pose(Option<HandPose>),
    Quit,
}

/// Keyboard state tracking.
#[derive(Debug, Default)]
pub struct Input {
    keys_held: HashSet<KeyCode>,
    /// Pose keys currently down, oldest first.
    pose_keys: Vec<KeyCode>,
}

impl Input {
    /// Create a new input tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a key is currently held down.
    pub fn key_held(&self, key: KeyCode) -> bool {
        self.keys_held.contains(&key)
    }

    /// Process a winit window event.
    pub fn handle_event(&mut self, event: &WindowEvent) -> Option<Command> {
        match event {
            WindowEvent::KeyboardInput { event, .. } => match event.physical_key {
                PhysicalKey::Code(code) => self.handle_key(KeyCode::from(code), event.state),
                PhysicalKey::Unidentified(_) => None,
            },
            _ => None,
        }
    }

    /// Process one key transition.
    pub fn handle_key(&mut self, key: KeyCode, state: ElementState) -> Option<Command> {
        match state {
            ElementState::Pressed => {
                // Only act if not already held (no repeat)
                if !self.keys_held.insert(key) {
                    return None;
                }
                if let Some(shape) = key.shape() {
                    return Some(Command::SelectShape(shape));
                }
                if let Some(pose) = key.pose() {
                    self.pose_keys.push(key);
                    return Some(Command::Pose(Some(pose)));
                }
                match key {
                    KeyCode::R => Some(Command::ResetView),
                    KeyCode::Escape => Some(Command::Quit),
                    _ => None,
                }
            }
            ElementState::Released => {
                self.keys_held.remove(&key);
                key.pose()?;
                let was_current = self.pose_keys.last() == Some(&key);
                self.pose_keys.retain(|k| *k != key);
                if !was_current {
                    return None;
                }
                // Fall back to a pose key still held, if any
                Some(Command::Pose(self.pose_keys.last().and_then(|k| k.pose())))
            }
        }
    }
}
