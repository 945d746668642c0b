//! Platform Adapter
//!
//! Thin shell that owns the window and translates platform callbacks
//! into frame-loop lifecycle events: window creation becomes
//! surface-created, resize becomes surface-resized, redraw becomes a
//! draw tick, suspend/close become surface-destroyed. The shell holds
//! no engine state of its own; everything lives in the [`FrameLoop`].

use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowAttributes, WindowId};

use crate::error::{Error, Result};
use crate::frame_loop::{FrameLoop, Notice};
use crate::render::{SurfaceDescriptor, SurfaceHandle};
use crate::{tether_error, tether_info, tether_warn};

const SOURCE: &str = "tether::Shell";

/// Window configuration for the shell.
pub struct ShellConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            title: "Tether AR".to_string(),
            width: 1280,
            height: 720,
        }
    }
}

impl ShellConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// Drive a frame loop from the platform event loop.
///
/// Blocks until the window is closed. Each resume creates a fresh
/// surface generation, so suspend/resume cycles restart the loop from
/// its bootstrapped state.
///
/// # Errors
///
/// Fails if the event loop cannot be created, or if the frame loop hit
/// a fatal startup error while running.
pub fn run(frame_loop: FrameLoop, config: ShellConfig) -> Result<()> {
    let event_loop = EventLoop::new()
        .map_err(|e| Error::InitializationFailed(format!("Event loop creation failed: {}", e)))?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut shell = Shell {
        config,
        frame_loop,
        window: None,
        surface_generation: 0,
        epoch: Instant::now(),
        fatal: None,
    };
    event_loop
        .run_app(&mut shell)
        .map_err(|e| Error::Backend(format!("Event loop terminated abnormally: {}", e)))?;

    match shell.fatal {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

struct Shell {
    config: ShellConfig,
    frame_loop: FrameLoop,
    window: Option<Window>,
    /// Monotonic surface handle; each resume is a new generation
    surface_generation: u64,
    epoch: Instant,
    fatal: Option<Error>,
}

impl Shell {
    fn drain_notices(&mut self) {
        for notice in self.frame_loop.take_notices() {
            match notice {
                Notice::TrackingUnavailable(reason) => {
                    tether_warn!(SOURCE, "Tracking unavailable: {}", reason);
                }
                Notice::ModelLoadFailed(reason) => {
                    tether_warn!(SOURCE, "Model load failed: {}", reason);
                }
            }
        }
    }
}

impl ApplicationHandler for Shell {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(&self.config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.width,
                self.config.height,
            ));
        let window = match event_loop.create_window(attrs) {
            Ok(window) => window,
            Err(e) => {
                tether_error!(SOURCE, "Window creation failed: {}", e);
                self.fatal = Some(Error::InitializationFailed(format!(
                    "Window creation failed: {}",
                    e
                )));
                event_loop.exit();
                return;
            }
        };

        self.surface_generation += 1;
        let size = window.inner_size();
        let descriptor = SurfaceDescriptor {
            handle: SurfaceHandle(self.surface_generation),
            width: size.width,
            height: size.height,
        };
        tether_info!(
            SOURCE,
            "Window ready, surface generation {}",
            self.surface_generation
        );

        if let Err(e) = self.frame_loop.on_surface_created(&descriptor) {
            tether_error!(SOURCE, "Frame loop startup failed: {}", e);
            self.fatal = Some(e);
            event_loop.exit();
            return;
        }
        self.frame_loop.on_surface_resized(size.width, size.height);
        self.drain_notices();

        window.request_redraw();
        self.window = Some(window);
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        // Platform took the surface away; the next resume starts a new
        // generation from the bootstrapped state
        self.frame_loop.on_surface_destroyed();
        self.window = None;
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(window) = self.window.as_ref() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                self.frame_loop.on_surface_destroyed();
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                self.frame_loop.on_surface_resized(size.width, size.height);
            }
            WindowEvent::RedrawRequested => {
                let timestamp_nanos = self.epoch.elapsed().as_nanos() as i64;
                self.frame_loop.on_draw_tick(timestamp_nanos);
                window.request_redraw();
                self.drain_notices();
            }
            _ => {}
        }
    }
}
