use img_viewer::geometry::{aspect_fit, Quad, QUAD_INDICES};

#[cfg(test)]
mod aspect_fit_tests {
    use super::*;

    #[test]
    fn test_half_width_image_640x720_in_1280x720() {
        let (fx, fy) = aspect_fit(640, 720, 1280, 720);
        assert_eq!(fx, 0.5, "quad half-width should be half the NDC range");
        assert_eq!(fy, 1.0, "height is the tighter axis and fills it");
    }

    #[test]
    fn test_tighter_axis_exactly_fills_window() {
        let cases = [
            (640, 720, 1280, 720),
            (1280, 360, 1280, 720),
            (3840, 2160, 1280, 720),
            (100, 900, 1280, 720),
            (717, 431, 1920, 1080),
        ];
        for (iw, ih, ww, wh) in cases {
            let (fx, fy) = aspect_fit(iw, ih, ww, wh);
            let max = fx.max(fy);
            assert!(
                (max - 1.0).abs() < 1e-5,
                "larger half-extent must be exactly 1.0 for {}x{} in {}x{}, got ({}, {})",
                iw,
                ih,
                ww,
                wh,
                fx,
                fy
            );
            assert!(fx <= 1.0 + 1e-5 && fy <= 1.0 + 1e-5, "image must fit the window");
        }
    }

    #[test]
    fn test_scaling_is_uniform() {
        // Aspect ratio of the half-extents must equal the relative aspect
        // ratio of image and window.
        let (iw, ih, ww, wh) = (800u32, 600u32, 1280u32, 720u32);
        let (fx, fy) = aspect_fit(iw, ih, ww, wh);
        let expected_ratio = (iw as f32 / ww as f32) / (ih as f32 / wh as f32);
        assert!((fx / fy - expected_ratio).abs() < 1e-5);
    }

    #[test]
    fn test_quad_starts_centered() {
        let quad = Quad::aspect_fit(640, 720, 1280, 720);
        let sum_x: f32 = quad.vertices().iter().map(|v| v.position[0]).sum();
        let sum_y: f32 = quad.vertices().iter().map(|v| v.position[1]).sum();
        assert_eq!(sum_x, 0.0, "quad must be centered horizontally");
        assert_eq!(sum_y, 0.0, "quad must be centered vertically");
    }

    #[test]
    fn test_index_buffer_is_two_triangles_over_four_vertices() {
        assert_eq!(QUAD_INDICES.len(), 6);
        assert!(QUAD_INDICES.iter().all(|&i| i < 4));
        assert_eq!(QUAD_INDICES, [0, 1, 2, 2, 3, 0]);
    }

    #[test]
    fn test_texture_coordinates_span_unit_square() {
        let quad = Quad::aspect_fit(640, 720, 1280, 720);
        let coords: Vec<[f32; 2]> = quad.vertices().iter().map(|v| v.tex_coords).collect();
        assert_eq!(coords, vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
    }
}
