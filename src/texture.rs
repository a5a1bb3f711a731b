use std::path::Path;

use anyhow::{Context, Result};
use image::GenericImageView;

/// A decoded image, normalized to RGBA8 with a vertical flip applied.
///
/// `channels` records the source image's channel count (3 or 4) even though
/// the pixel buffer is always expanded to 4 channels.
#[derive(Debug)]
pub struct ImageData {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub channels: u8,
}

impl ImageData {
    /// Decode an image file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let decoded = image::open(path)
            .with_context(|| format!("failed to load image '{}'", path.display()))?;

        let (width, height) = decoded.dimensions();
        let channels = decoded.color().channel_count();
        let rgba = decoded.flipv().to_rgba8();

        log::info!(
            "loaded '{}': {}x{} ({} channels)",
            path.display(),
            width,
            height,
            channels
        );

        Ok(Self {
            pixels: rgba.into_raw(),
            width,
            height,
            channels,
        })
    }
}

/// GPU-resident image texture plus its descriptor fields.
///
/// Created once after decode+upload and immutable thereafter; the GPU
/// resources are released on drop.
pub struct ImageTexture {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    pub width: u32,
    pub height: u32,
    pub channels: u8,
}

impl ImageTexture {
    /// Upload a decoded image into a sampleable texture.
    pub fn upload(device: &wgpu::Device, queue: &wgpu::Queue, data: &ImageData) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Image Texture"),
            size: wgpu::Extent3d {
                width: data.width,
                height: data.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            texture.as_image_copy(),
            &data.pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * data.width),
                rows_per_image: Some(data.height),
            },
            wgpu::Extent3d {
                width: data.width,
                height: data.height,
                depth_or_array_layers: 1,
            },
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self {
            texture,
            view,
            width: data.width,
            height: data.height,
            channels: data.channels,
        }
    }

    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    pub fn texture(&self) -> &wgpu::Texture {
        &self.texture
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_buffer_size_is_rgba() {
        let data = ImageData {
            pixels: vec![0; 8 * 4 * 4],
            width: 8,
            height: 4,
            channels: 3,
        };
        assert_eq!(data.pixels.len(), (data.width * data.height * 4) as usize);
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let err = ImageData::load(Path::new("/nonexistent/image.png"))
            .expect_err("missing file must fail");
        assert!(err.to_string().contains("failed to load image"));
    }
}
