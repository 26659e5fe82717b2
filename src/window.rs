//! The interactive window.
//!
//! One redraw runs one frame: drain the landmark channel, advance the
//! [`SimulationState`], forward status changes to the title bar, draw.
//! Keyboard commands are applied as they arrive between frames.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::config::MorphConfig;
use crate::error::RunError;
use crate::input::{Command, Input};
use crate::landmarks::{spawn_landmark_source, JsonLinesSource, LatestLandmarks, SimInput, SimulatedHand};
use crate::random::StdRandom;
use crate::render::{GpuRenderer, RenderAdapter};
use crate::shapes::ShapeId;
use crate::state::SimulationState;
use crate::status::{LogSink, StatusBoard, StatusMessage, StatusSink};
use crate::time::{Clock, FrameTimer, SystemClock};

const APP_NAME: &str = "particle-morph";

/// Where hand landmarks come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandInput {
    /// Simulated hand driven by held keys.
    #[default]
    Keyboard,
    /// JSON landmark sets on standard input.
    Stdin,
    /// No detector; only keyboard shape selection works.
    Off,
}

/// Shows the current shape and status in the window title.
struct TitleSink {
    window: Option<Arc<Window>>,
    shape: ShapeId,
    status: &'static str,
    log: LogSink,
}

impl TitleSink {
    fn new(shape: ShapeId) -> Self {
        Self {
            window: None,
            shape,
            status: StatusMessage::WAITING.text,
            log: LogSink,
        }
    }

    fn attach(&mut self, window: Arc<Window>) {
        self.window = Some(window);
        self.refresh();
    }

    fn refresh(&self) {
        if let Some(window) = &self.window {
            window.set_title(&format!("{} | {} | {}", APP_NAME, self.shape, self.status));
        }
    }
}

impl StatusSink for TitleSink {
    fn show(&mut self, status: &StatusMessage) {
        self.status = status.text;
        self.log.show(status);
        self.refresh();
    }

    fn shape_selected(&mut self, shape: ShapeId) {
        self.shape = shape;
        self.refresh();
    }
}

struct App {
    config: MorphConfig,
    state: SimulationState,
    landmarks: LatestLandmarks,
    sim_hand: Option<Sender<SimInput>>,
    input: Input,
    clock: SystemClock,
    timer: FrameTimer,
    status: StatusBoard<TitleSink>,
    window: Option<Arc<Window>>,
    renderer: Option<RenderAdapter<GpuRenderer>>,
    error: Option<RunError>,
}

impl App {
    fn new(config: MorphConfig, hand_input: HandInput) -> Self {
        let (landmarks, sim_hand) = match hand_input {
            HandInput::Keyboard => {
                let (tx, hand) = SimulatedHand::channel();
                (LatestLandmarks::new(spawn_landmark_source(Box::new(hand))), Some(tx))
            }
            HandInput::Stdin => {
                let source = JsonLinesSource::stdin();
                (LatestLandmarks::new(spawn_landmark_source(Box::new(source))), None)
            }
            HandInput::Off => (LatestLandmarks::disabled(), None),
        };

        let state = SimulationState::new(&config, Box::new(StdRandom::from_entropy()));
        let status = StatusBoard::new(TitleSink::new(config.initial_shape));

        Self {
            config,
            state,
            landmarks,
            sim_hand,
            input: Input::new(),
            clock: SystemClock::new(),
            timer: FrameTimer::new(),
            status,
            window: None,
            renderer: None,
            error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), RunError> {
        let view = &self.config.view;
        let window_attrs = Window::default_attributes()
            .with_title(APP_NAME)
            .with_inner_size(winit::dpi::LogicalSize::new(view.window_width, view.window_height));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let gpu = pollster::block_on(GpuRenderer::new(window.clone(), self.config.particle_count))?;
        let size = window.inner_size();

        self.renderer = Some(RenderAdapter::new(gpu, view, size.width, size.height));
        self.status.inner_mut().attach(window.clone());
        self.window = Some(window);

        log::info!(
            "Started with {} particles showing {}",
            self.state.simulation().len(),
            self.state.shape()
        );
        Ok(())
    }

    fn apply(&mut self, command: Command, event_loop: &ActiveEventLoop) {
        match command {
            Command::SelectShape(shape) => {
                if self.state.select_shape(shape) {
                    self.status.shape_selected(shape);
                }
            }
            Command::ResetView => self.state.reset_view(),
            Command::Pose(pose) => {
                if let Some(tx) = &self.sim_hand {
                    let input = pose.map_or(SimInput::Release, SimInput::Hold);
                    // A closed channel was already reported by the frame loop
                    let _ = tx.send(input);
                }
            }
            Command::Quit => event_loop.exit(),
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = self.clock.now();

        self.state.set_gestures(self.landmarks.poll());
        let report = self.state.frame(now);

        if let Some(shape) = report.shape_changed {
            self.status.shape_selected(shape);
        }
        if let Some(message) = report.status {
            self.status.show(&message);
        }
        if let Some(fps) = self.timer.tick(now) {
            log::debug!("{:.1} fps", fps);
        }

        if let Some(renderer) = &mut self.renderer {
            if report.reset_view {
                renderer.reset();
            }
            if let Err(e) = renderer.render_frame(self.state.positions(), self.state.rotation_speed()) {
                log::error!("Render error: {}", e);
                if e.is_fatal() {
                    event_loop.exit();
                    return;
                }
            }
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init(event_loop) {
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(physical_size.width, physical_size.height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            other => {
                if let Some(command) = self.input.handle_event(&other) {
                    self.apply(command, event_loop);
                }
            }
        }
    }
}

/// Open the window and run until it is closed.
pub fn run(config: MorphConfig, hand_input: HandInput) -> Result<(), RunError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config, hand_input);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
