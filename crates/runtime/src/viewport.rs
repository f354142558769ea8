use flycam_common::Projection;

/// Drawing-buffer size and the projection whose aspect follows it.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    width: u32,
    height: u32,
    projection: Projection,
}

impl Viewport {
    pub fn new(width: u32, height: u32, mut projection: Projection) -> Self {
        if height > 0 {
            projection.aspect = width as f32 / height as f32;
        }
        Self {
            width,
            height,
            projection,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Match the drawing buffer to a display element of the given CSS size.
    ///
    /// The buffer becomes `floor(client * pixel_ratio)` in each dimension. Returns
    /// true when that differs from the current size, in which case the aspect is
    /// recomputed from the client size.
    pub fn resize_to_display(
        &mut self,
        client_width: f32,
        client_height: f32,
        pixel_ratio: f32,
    ) -> bool {
        let width = to_pixels(client_width * pixel_ratio);
        let height = to_pixels(client_height * pixel_ratio);
        if width == self.width && height == self.height {
            return false;
        }

        self.width = width;
        self.height = height;
        if client_height > 0.0 && client_width.is_finite() {
            self.projection.aspect = client_width / client_height;
        }
        tracing::debug!(width, height, aspect = self.projection.aspect, "viewport resized");
        true
    }

    /// Apply a window resize given directly in physical pixels.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        self.resize_to_display(width as f32, height as f32, 1.0)
    }
}

fn to_pixels(value: f32) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.floor() as u32
    } else {
        0
    }
}
