//! Hand-landmark producers.
//!
//! A detector runs on its own thread and pushes [`HandPresence`] values into
//! an `mpsc` channel. The frame loop drains that channel once per tick with
//! [`LatestLandmarks::poll`], keeping only the newest value, so a slow
//! detector just means frames reuse the last result.
//!
//! Two sources ship with the crate:
//!
//! - [`SimulatedHand`]: synthesises landmark sets for a handful of poses,
//!   driven by keys held in the window.
//! - [`JsonLinesSource`]: reads one JSON landmark set per line (stdin by
//!   default), for piping in an external detector.

use std::io::{BufRead, BufReader};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

use serde::Deserialize;

use crate::gesture::{
    HandLandmarks, HandPresence, Landmark, INDEX_MCP, INDEX_TIP, LANDMARK_COUNT, MIDDLE_MCP,
    MIDDLE_TIP, PINKY_MCP, PINKY_TIP, RING_MCP, RING_TIP, THUMB_MCP, THUMB_TIP, WRIST,
};

/// Anything that can deliver hand landmarks over a channel.
pub trait LandmarkSource: Send + 'static {
    /// Produce results until the source ends or the receiver hangs up.
    fn run(self: Box<Self>, tx: Sender<HandPresence>);
}

/// Spawn a landmark source on its own thread and return the receiving end.
///
/// If the thread cannot be started the returned receiver is already
/// disconnected, which the frame loop treats as "no hand".
pub fn spawn_landmark_source(source: Box<dyn LandmarkSource>) -> Receiver<HandPresence> {
    let (tx, rx) = mpsc::channel();
    let spawned = thread::Builder::new()
        .name("landmarks".into())
        .spawn(move || source.run(tx));
    if let Err(e) = spawned {
        log::warn!("Failed to start landmark source: {}", e);
    }
    rx
}

/// Latest-wins view of a landmark channel.
pub struct LatestLandmarks {
    rx: Option<Receiver<HandPresence>>,
    latest: HandPresence,
}

impl LatestLandmarks {
    pub fn new(rx: Receiver<HandPresence>) -> Self {
        Self {
            rx: Some(rx),
            latest: HandPresence::Absent,
        }
    }

    /// No detector at all; always reports no hand.
    pub fn disabled() -> Self {
        Self {
            rx: None,
            latest: HandPresence::Absent,
        }
    }

    /// Drain everything queued and return the newest result.
    ///
    /// Never blocks. Once the producer is gone this reports no hand.
    pub fn poll(&mut self) -> &HandPresence {
        let mut disconnected = false;
        if let Some(rx) = &self.rx {
            loop {
                match rx.try_recv() {
                    Ok(presence) => self.latest = presence,
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        disconnected = true;
                        break;
                    }
                }
            }
        }
        if disconnected {
            log::warn!("Landmark source stopped; gestures disabled");
            self.rx = None;
            self.latest = HandPresence::Absent;
        }
        &self.latest
    }

    /// Whether a producer is still attached.
    pub fn is_connected(&self) -> bool {
        self.rx.is_some()
    }
}

// ============================================================================
// Simulated hand
// ============================================================================

/// Poses the simulated hand can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandPose {
    /// Index finger only.
    PointIndex,
    /// Index and middle.
    Peace,
    /// Index, middle and ring.
    ThreeFingers,
    /// Thumb, index and pinky.
    ILoveYou,
    /// Everything extended.
    OpenPalm,
    /// Nothing extended.
    Fist,
    /// A visible hand that makes no recognised gesture.
    Relaxed,
}

impl HandPose {
    /// (thumb, [index, middle, ring, pinky])
    fn digits(self) -> (bool, [bool; 4]) {
        match self {
            HandPose::PointIndex => (false, [true, false, false, false]),
            HandPose::Peace => (false, [true, true, false, false]),
            HandPose::ThreeFingers => (false, [true, true, true, false]),
            HandPose::ILoveYou => (true, [true, false, false, true]),
            HandPose::OpenPalm => (true, [true; 4]),
            HandPose::Fist => (false, [false; 4]),
            HandPose::Relaxed => (false, [true; 4]),
        }
    }

    /// A plausible right hand, palm facing the camera, in this pose.
    pub fn landmarks(self) -> HandLandmarks {
        const FINGERS: [(usize, usize); 4] = [
            (INDEX_MCP, INDEX_TIP),
            (MIDDLE_MCP, MIDDLE_TIP),
            (RING_MCP, RING_TIP),
            (PINKY_MCP, PINKY_TIP),
        ];

        let (thumb, fingers) = self.digits();
        let mut points = [Landmark::new(0.5, 0.6, 0.0); LANDMARK_COUNT];
        points[WRIST] = Landmark::new(0.5, 0.85, 0.0);
        points[THUMB_MCP] = Landmark::new(0.42, 0.72, 0.0);
        points[THUMB_TIP] = if thumb {
            Landmark::new(0.32, 0.62, 0.0)
        } else {
            Landmark::new(0.47, 0.66, 0.0)
        };

        for (i, ((base, tip), extended)) in FINGERS.into_iter().zip(fingers).enumerate() {
            let x = 0.44 + 0.04 * i as f32;
            points[base] = Landmark::new(x, 0.6, 0.0);
            // The two joints between base and tip follow the tip
            let tip_y = if extended { 0.38 } else { 0.66 };
            points[base + 1] = Landmark::new(x, (0.6 + tip_y) / 2.0, 0.0);
            points[base + 2] = Landmark::new(x, tip_y, 0.0);
            points[tip] = Landmark::new(x, tip_y, 0.0);
        }

        HandLandmarks::from_array(points)
    }
}

/// Raw input for the simulated hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimInput {
    /// Show the hand in this pose.
    Hold(HandPose),
    /// Take the hand out of view.
    Release,
}

/// Landmark source driven by [`SimInput`] events from the window.
pub struct SimulatedHand {
    rx: Receiver<SimInput>,
}

impl SimulatedHand {
    pub fn new(rx: Receiver<SimInput>) -> Self {
        Self { rx }
    }

    /// Create the source together with the sender the window feeds.
    pub fn channel() -> (Sender<SimInput>, Self) {
        let (tx, rx) = mpsc::channel();
        (tx, Self::new(rx))
    }
}

impl LandmarkSource for SimulatedHand {
    fn run(self: Box<Self>, tx: Sender<HandPresence>) {
        for input in self.rx {
            let presence = match input {
                SimInput::Hold(pose) => HandPresence::Detected(pose.landmarks()),
                SimInput::Release => HandPresence::Absent,
            };
            if tx.send(presence).is_err() {
                return;
            }
        }
    }
}

// ============================================================================
// JSON lines
// ============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum LandmarkLine {
    Flat(Vec<f32>),
    Points(Vec<[f32; 3]>),
}

/// Parse one line of detector output.
///
/// Accepted forms are `null` (no hand), a flat array of 63 numbers, or an
/// array of 21 `[x, y, z]` triples. Well-formed JSON with missing or
/// non-finite landmarks yields [`HandPresence::Absent`].
pub fn parse_landmark_line(line: &str) -> Result<HandPresence, serde_json::Error> {
    let parsed: Option<LandmarkLine> = serde_json::from_str(line)?;
    let hand = match parsed {
        None => None,
        Some(LandmarkLine::Flat(coords)) => HandLandmarks::from_flat(&coords),
        Some(LandmarkLine::Points(points)) => {
            let points: Vec<Landmark> = points
                .into_iter()
                .map(|[x, y, z]| Landmark::new(x, y, z))
                .collect();
            HandLandmarks::from_points(&points)
        }
    };
    Ok(hand.map_or(HandPresence::Absent, HandPresence::Detected))
}

/// Reads newline-delimited JSON landmark sets.
pub struct JsonLinesSource<R> {
    reader: R,
}

impl<R: BufRead + Send + 'static> JsonLinesSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl JsonLinesSource<BufReader<std::io::Stdin>> {
    /// Read from standard input.
    pub fn stdin() -> Self {
        Self::new(BufReader::new(std::io::stdin()))
    }
}

impl<R: BufRead + Send + 'static> LandmarkSource for JsonLinesSource<R> {
    fn run(self: Box<Self>, tx: Sender<HandPresence>) {
        for (n, line) in self.reader.lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    log::warn!("Landmark input failed: {}", e);
                    return;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            let presence = parse_landmark_line(&line).unwrap_or_else(|e| {
                log::warn!("Ignoring malformed landmark line {}: {}", n + 1, e);
                HandPresence::Absent
            });
            if tx.send(presence).is_err() {
                return;
            }
        }
        log::info!("Landmark input ended");
    }
}
