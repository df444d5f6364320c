#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::consts::{MAX_ZOOM, MIN_ZOOM, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};
use crate::geom::{Point, Rect};

/// Pan/zoom state mapping world coordinates onto the drawing surface.
///
/// `pan_x` / `pan_y` are in screen pixels. `zoom` is a scale factor
/// (1.0 = no zoom) kept within `[min_zoom, max_zoom]`. `width` / `height`
/// describe the visible surface and are only needed by [`Viewport::fit_to_content`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::with_zoom_range(MIN_ZOOM, MAX_ZOOM)
    }
}

impl Viewport {
    /// Identity viewport with a custom zoom range.
    #[must_use]
    pub fn with_zoom_range(min_zoom: f64, max_zoom: f64) -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: 1.0_f64.clamp(min_zoom, max_zoom), min_zoom, max_zoom, width: 0.0, height: 0.0 }
    }

    /// Convert a screen-space point to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point { x: (screen.x - self.pan_x) / self.zoom, y: (screen.y - self.pan_y) / self.zoom }
    }

    /// Convert a world-space point to screen coordinates.
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point { x: world.x * self.zoom + self.pan_x, y: world.y * self.zoom + self.pan_y }
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Zoom one step around `screen`, keeping the world point under it fixed.
    ///
    /// A negative `delta` zooms in, a positive one zooms out, zero does nothing.
    /// Returns whether the zoom changed (it will not once a bound is reached).
    pub fn zoom_at(&mut self, screen: Point, delta: f64) -> bool {
        if delta == 0.0 {
            return false;
        }
        let factor = if delta < 0.0 { ZOOM_IN_FACTOR } else { ZOOM_OUT_FACTOR };
        let next = (self.zoom * factor).clamp(self.min_zoom, self.max_zoom);
        if (next - self.zoom).abs() <= f64::EPSILON {
            return false;
        }
        let anchor = self.screen_to_world(screen);
        self.zoom = next;
        self.pan_x = screen.x - anchor.x * next;
        self.pan_y = screen.y - anchor.y * next;
        true
    }

    /// Frame `bounds` (grown by `padding`) in the middle of the surface.
    ///
    /// The zoom never exceeds 1.0 just to fill the surface. Returns `false`
    /// without changing anything when there is no content or no surface size.
    pub fn fit_to_content(&mut self, bounds: Option<Rect>, padding: f64) -> bool {
        let Some(bounds) = bounds else {
            return false;
        };
        if self.width <= 0.0 || self.height <= 0.0 {
            return false;
        }
        let padded = bounds.expand(padding);
        let fit_x = self.width / padded.width();
        let fit_y = self.height / padded.height();
        let zoom = fit_x.min(fit_y).min(1.0).clamp(self.min_zoom, self.max_zoom);
        let center = padded.center();
        self.zoom = zoom;
        self.pan_x = self.width / 2.0 - center.x * zoom;
        self.pan_y = self.height / 2.0 - center.y * zoom;
        true
    }

    /// Return to zoom 1.0 with no pan.
    pub fn reset(&mut self) {
        self.pan_x = 0.0;
        self.pan_y = 0.0;
        self.zoom = 1.0_f64.clamp(self.min_zoom, self.max_zoom);
    }
}
