use crate::config::ViewportConfig;

/// Distance in pixels a single nudge moves the model.
const NUDGE_PIXELS: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Window-side state the frame pipeline reads: framebuffer size, zoom and the
/// model's position in normalized device coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    size: [f32; 2],
    scale: f32,
    location: [f32; 2],
}

impl Default for Viewport {
    fn default() -> Self {
        Self::from_config(&ViewportConfig::default())
    }
}

impl Viewport {
    /// A non-positive size falls back to the default framebuffer size.
    pub fn new(width: f32, height: f32) -> Self {
        let defaults = ViewportConfig::default();
        let size = if width > 0.0 && height > 0.0 {
            [width, height]
        } else {
            log::warn!(
                "Invalid viewport size {}x{}, using {}x{}",
                width,
                height,
                defaults.width,
                defaults.height
            );
            [defaults.width, defaults.height]
        };
        Self {
            size,
            scale: defaults.scale,
            location: [0.0, 0.0],
        }
    }

    pub fn from_config(config: &ViewportConfig) -> Self {
        Self {
            size: [config.width, config.height],
            scale: config.scale,
            location: [0.0, 0.0],
        }
    }

    pub fn size(&self) -> [f32; 2] {
        self.size
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn location(&self) -> [f32; 2] {
        self.location
    }

    pub fn aspect(&self) -> f32 {
        self.size[0] / self.size[1]
    }

    /// Vertical field of view in radians.
    pub fn fovy(&self) -> f32 {
        self.scale * 0.01
    }

    /// Zero-sized requests (a minimized window) keep the previous size.
    pub fn resize(&mut self, width: f32, height: f32) {
        if !(width > 0.0 && height > 0.0) {
            log::warn!("Ignoring resize to {}x{}", width, height);
            return;
        }
        self.size = [width, height];
    }

    pub fn scroll(&mut self, delta: f32) {
        self.scale += delta;
    }

    pub fn nudge(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.location[0] -= NUDGE_PIXELS / self.size[0],
            Direction::Right => self.location[0] += NUDGE_PIXELS / self.size[0],
            Direction::Down => self.location[1] -= NUDGE_PIXELS / self.size[1],
            Direction::Up => self.location[1] += NUDGE_PIXELS / self.size[1],
        }
    }

    /// Places the model under a cursor given in window pixels, origin top-left.
    pub fn cursor_to_location(&mut self, x: f32, y: f32) {
        self.location = [x * 2.0 / self.size[0] - 1.0, 1.0 - y * 2.0 / self.size[1]];
    }
}
