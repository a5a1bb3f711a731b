use std::sync::Arc;
use winit::window::Window as WinitWindow;

use crate::geometry::Quad;
use crate::renderer::Viewer;

/// Wrapper around winit Window with imperative draw API
pub struct Window {
    inner: Arc<WinitWindow>,
}

impl Window {
    pub fn new(window: Arc<WinitWindow>) -> Self {
        Self { inner: window }
    }

    pub fn inner(&self) -> &Arc<WinitWindow> {
        &self.inner
    }

    /// Draw a frame with the provided renderer and quad
    pub fn draw(&self, viewer: &mut Viewer, quad: &Quad) -> Result<(), wgpu::SurfaceError> {
        viewer.render(quad)
    }

    pub fn request_redraw(&self) {
        self.inner.request_redraw();
    }

    pub fn inner_size(&self) -> winit::dpi::PhysicalSize<u32> {
        self.inner.inner_size()
    }
}
