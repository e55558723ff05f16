use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window as WinitWindow, WindowId},
};

use orbit_view::cli::Cli;
use orbit_view::config::AppConfig;
use orbit_view::core::{Clock, FramebufferSize, InputAdapter, WindowContext};
use orbit_view::renderer::LogRenderer;
use orbit_view::scene::create_default_scene;
use orbit_view::window::Window;
use orbit_view::{CameraState, Display, FrameAssembler, FrameStatus, InputResponse};

const WINDOW_TITLE: &str = "Orbit View";

struct App {
    config: AppConfig,
    window: Option<Window>,
    display: Display<LogRenderer>,
    input: InputAdapter,
    clock: Clock,
    /// Set while the framebuffer has zero area
    paused: bool,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let display = Display::new(
            CameraState::new(config.camera),
            FrameAssembler::new(config.projection),
            create_default_scene(0.0),
            LogRenderer::new(),
        );

        Self {
            config,
            window: None,
            display,
            input: InputAdapter::new(),
            clock: Clock::new(),
            paused: false,
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = &self.window else {
            return;
        };

        let frame = self.clock.tick();
        match self.display.draw(&frame, window.framebuffer_size()) {
            FrameStatus::Paused => {
                if !self.paused {
                    log::debug!("framebuffer is empty, waiting for resize");
                }
                self.paused = true;
                event_loop.set_control_flow(ControlFlow::Wait);
            }
            FrameStatus::Drawn(_) => {}
        }
    }

    fn resized(&mut self, event_loop: &ActiveEventLoop, size: FramebufferSize) {
        if size.is_empty() || !self.paused {
            return;
        }

        log::debug!("resuming at {}x{}", size.width, size.height);
        self.paused = false;
        event_loop.set_control_flow(ControlFlow::Poll);
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = WinitWindow::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(
                self.config.window_width,
                self.config.window_height,
            ));

        match event_loop.create_window(attributes) {
            Ok(window) => {
                let size = window.inner_size();
                log::info!("window created, framebuffer {}x{}", size.width, size.height);
                self.window = Some(Window::new(Arc::new(window)));
                self.clock.reset();
            }
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => self.resized(event_loop, size.into()),
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            other => {
                let (Some(input), Some(window)) = (self.input.translate(&other), &self.window)
                else {
                    return;
                };
                if self.display.handle_input(&input, window) == InputResponse::CloseRequested {
                    log::info!("close requested");
                    event_loop.exit();
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if self.paused {
            return;
        }
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    cli.apply(&mut config);
    log::debug!("config: {:?}", config);

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);

    log::info!("Controls: Space toggles camera, mouse orbits, W/S zoom, Escape quits");
    event_loop
        .run_app(&mut app)
        .context("Event loop exited with an error")?;

    log::info!("rendered {} transforms", app.display.sink().submitted());
    Ok(())
}
