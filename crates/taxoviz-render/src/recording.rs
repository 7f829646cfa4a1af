use crate::model::LayoutPoint;
use crate::surface::{DrawSurface, Fill, Stroke, SurfaceSize, TextPaint};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum DrawCommand {
    Clear,
    Circle {
        center: LayoutPoint,
        radius: f64,
        fill: Fill,
    },
    Line {
        from: LayoutPoint,
        to: LayoutPoint,
        stroke: Stroke,
    },
    Text {
        text: String,
        at: LayoutPoint,
        paint: TextPaint,
    },
}

/// Display-list surface. `clear` resets the list to a single [`DrawCommand::Clear`], so after a
/// render it holds exactly what is visible.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordingSurface {
    size: Option<SurfaceSize>,
    commands: Vec<DrawCommand>,
    clear_count: usize,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Some(SurfaceSize::new(width, height)),
            ..Default::default()
        }
    }

    pub fn detached() -> Self {
        Self::default()
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.size = Some(SurfaceSize::new(width, height));
    }

    pub fn detach(&mut self) {
        self.size = None;
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// How many times the surface has been cleared since creation.
    pub fn clear_count(&self) -> usize {
        self.clear_count
    }

    pub fn circles(&self) -> impl Iterator<Item = (LayoutPoint, f64, &Fill)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Circle {
                center,
                radius,
                fill,
            } => Some((*center, *radius, fill)),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (LayoutPoint, LayoutPoint, &Stroke)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { from, to, stroke } => Some((*from, *to, stroke)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, LayoutPoint, &TextPaint)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, at, paint } => Some((text.as_str(), *at, paint)),
            _ => None,
        })
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> Option<SurfaceSize> {
        self.size
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
        self.clear_count += 1;
    }

    fn draw_circle(&mut self, center: LayoutPoint, radius: f64, fill: &Fill) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            fill: fill.clone(),
        });
    }

    fn draw_line(&mut self, from: LayoutPoint, to: LayoutPoint, stroke: &Stroke) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            stroke: stroke.clone(),
        });
    }

    fn draw_text(&mut self, text: &str, at: LayoutPoint, paint: &TextPaint) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            at,
            paint: paint.clone(),
        });
    }
}
