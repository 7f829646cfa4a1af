//! The drawing capability the renderer paints through.
//!
//! Backends implement [`DrawSurface`]; the renderer never learns what they draw into. Colors are
//! CSS color strings and are passed through untouched.

use crate::model::LayoutPoint;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A surface with no area (or a NaN dimension) cannot be drawn on.
    pub fn is_drawable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn center(&self) -> LayoutPoint {
        LayoutPoint::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
}

/// Text is always anchored at its center, both horizontally and vertically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPaint {
    pub color: String,
    pub font_family: String,
    pub font_size: f64,
}

pub trait DrawSurface {
    /// Current drawable size, read fresh on every render. `None` means not attached yet.
    fn size(&self) -> Option<SurfaceSize>;

    fn clear(&mut self);

    fn draw_circle(&mut self, center: LayoutPoint, radius: f64, fill: &Fill);

    fn draw_line(&mut self, from: LayoutPoint, to: LayoutPoint, stroke: &Stroke);

    fn draw_text(&mut self, text: &str, at: LayoutPoint, paint: &TextPaint);
}

impl<S: DrawSurface + ?Sized> DrawSurface for &mut S {
    fn size(&self) -> Option<SurfaceSize> {
        (**self).size()
    }

    fn clear(&mut self) {
        (**self).clear()
    }

    fn draw_circle(&mut self, center: LayoutPoint, radius: f64, fill: &Fill) {
        (**self).draw_circle(center, radius, fill)
    }

    fn draw_line(&mut self, from: LayoutPoint, to: LayoutPoint, stroke: &Stroke) {
        (**self).draw_line(from, to, stroke)
    }

    fn draw_text(&mut self, text: &str, at: LayoutPoint, paint: &TextPaint) {
        (**self).draw_text(text, at, paint)
    }
}

/// A surface that is never ready, e.g. a canvas that has not been mounted.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedSurface;

impl DrawSurface for DetachedSurface {
    fn size(&self) -> Option<SurfaceSize> {
        None
    }

    fn clear(&mut self) {}

    fn draw_circle(&mut self, _center: LayoutPoint, _radius: f64, _fill: &Fill) {}

    fn draw_line(&mut self, _from: LayoutPoint, _to: LayoutPoint, _stroke: &Stroke) {}

    fn draw_text(&mut self, _text: &str, _at: LayoutPoint, _paint: &TextPaint) {}
}
