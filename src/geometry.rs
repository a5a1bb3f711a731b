//! The textured quad the image is mapped onto: vertex layout, aspect-fit
//! scaling and drag translation.

/// A single quad vertex: position in normalized device coordinates plus
/// texture coordinates in [0,1].
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadVertex {
    pub position: [f32; 2],
    pub tex_coords: [f32; 2],
}

impl QuadVertex {
    const fn new(position: [f32; 2], tex_coords: [f32; 2]) -> Self {
        Self {
            position,
            tex_coords,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// Two triangles sharing the quad's diagonal. The topology never changes;
/// only vertex positions do.
pub const QUAD_INDICES: [u16; 6] = [0, 1, 2, 2, 3, 0];

/// Compute the quad's half-extents in NDC so the image fits entirely within
/// the window, uniformly scaled by the tighter axis.
///
/// The axis with the larger image-to-window ratio exactly fills [-1,1]; the
/// other half-extent comes out <= 1. Zero window dimensions are undefined.
pub fn aspect_fit(image_w: u32, image_h: u32, window_w: u32, window_h: u32) -> (f32, f32) {
    let mut fx = image_w as f32 / window_w as f32;
    let mut fy = image_h as f32 / window_h as f32;
    let scale = (1.0 / fx).min(1.0 / fy);
    fx *= scale;
    fy *= scale;
    (fx, fy)
}

/// The single axis-aligned quad the image is rendered on.
///
/// Positions are mutated in place by dragging; texture coordinates are fixed
/// at creation.
#[derive(Debug, Clone)]
pub struct Quad {
    vertices: [QuadVertex; 4],
}

impl Quad {
    /// Build the quad centered in the window with aspect-fit half-extents.
    pub fn aspect_fit(image_w: u32, image_h: u32, window_w: u32, window_h: u32) -> Self {
        let (fx, fy) = aspect_fit(image_w, image_h, window_w, window_h);
        Self {
            vertices: [
                QuadVertex::new([-fx, -fy], [0.0, 0.0]),
                QuadVertex::new([fx, -fy], [1.0, 0.0]),
                QuadVertex::new([fx, fy], [1.0, 1.0]),
                QuadVertex::new([-fx, fy], [0.0, 1.0]),
            ],
        }
    }

    /// Shift all four vertex positions by an NDC delta. Texture coordinates
    /// are untouched.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        for vertex in &mut self.vertices {
            vertex.position[0] += dx;
            vertex.position[1] += dy;
        }
    }

    pub fn vertices(&self) -> &[QuadVertex] {
        &self.vertices
    }
}
