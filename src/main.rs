use std::sync::Arc;

use anyhow::{bail, Context};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window as WinitWindow, WindowId},
};

use img_viewer::cli::{self, Cli};
use img_viewer::frame::FrameClock;
use img_viewer::geometry::Quad;
use img_viewer::input::DragState;
use img_viewer::renderer::Viewer;
use img_viewer::texture::ImageData;
use img_viewer::window::Window;

const WINDOW_TITLE: &str = "Command Line Image Viewer";

struct App {
    cli: Cli,
    // Declared before `window` so GPU resources are released first on drop
    viewer: Option<Viewer>,
    window: Option<Window>,
    quad: Option<Quad>,
    drag: DragState,
    clock: FrameClock,
    /// Fatal error captured inside the event loop, reported after it exits
    error: Option<String>,
}

impl App {
    fn new(cli: Cli) -> Self {
        Self {
            cli,
            viewer: None,
            window: None,
            quad: None,
            drag: DragState::new(),
            clock: FrameClock::new(),
            error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let attributes = WinitWindow::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(winit::dpi::PhysicalSize::new(
                self.cli.width,
                self.cli.height,
            ));
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .context("failed to create window")?,
        );

        let image = ImageData::load(&self.cli.image)?;

        let size = window.inner_size();
        let quad = Quad::aspect_fit(image.width, image.height, size.width, size.height);

        let viewer = pollster::block_on(Viewer::new(window.clone(), &image, &quad))
            .map_err(|e| anyhow::anyhow!("failed to initialize renderer: {e}"))?;

        self.window = Some(Window::new(window));
        self.quad = Some(quad);
        self.viewer = Some(viewer);
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(viewer), Some(quad)) =
            (&self.window, &mut self.viewer, &mut self.quad)
        else {
            return;
        };

        self.clock.tick();

        // Re-query the framebuffer size every frame so live resizes track
        let size = window.inner_size();
        if let Some((dx, dy)) = self.drag.frame_delta(size.width as f32, size.height as f32) {
            quad.translate(dx, dy);
        }
        if size != viewer.size() {
            viewer.resize(size);
        }

        match window.draw(viewer, quad) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => viewer.resize(size),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                self.error = Some("out of GPU memory".to_string());
                event_loop.exit();
            }
            Err(e) => log::error!("render error: {e}"),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.init(event_loop) {
            self.error = Some(format!("{err:#}"));
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        self.drag.process_event(&event);

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(viewer) = &mut self.viewer {
                    viewer.resize(size);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse_or_exit();
    cli::validate_dimensions(cli.width, cli.height)?;

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let mut app = App::new(cli);
    event_loop.run_app(&mut app)?;

    if let Some(err) = app.error.take() {
        bail!(err);
    }
    Ok(())
}
