use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutPoint {
    pub x: f64,
    pub y: f64,
}

impl LayoutPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The point `distance` away from `self` in direction `angle` (radians, y grows downward).
    pub fn polar_offset(self, distance: f64, angle: f64) -> Self {
        Self {
            x: self.x + angle.cos() * distance,
            y: self.y + angle.sin() * distance,
        }
    }

    pub fn distance_to(self, other: LayoutPoint) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn from_points(points: impl IntoIterator<Item = (f64, f64)>) -> Option<Self> {
        let mut it = points.into_iter();
        let (x0, y0) = it.next()?;
        let mut b = Self {
            min_x: x0,
            min_y: y0,
            max_x: x0,
            max_y: y0,
        };
        for (x, y) in it {
            b.min_x = b.min_x.min(x);
            b.min_y = b.min_y.min(y);
            b.max_x = b.max_x.max(x);
            b.max_y = b.max_y.max(y);
        }
        Some(b)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HubLayout {
    pub label: String,
    pub center: LayoutPoint,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelLayout {
    pub text: String,
    /// Measured width; labels are never wrapped or clipped.
    pub width: f64,
    /// True when the label is wider than its circle's diameter.
    pub overflows: bool,
}

/// A node on the first ring around the hub.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeLayout {
    pub id: String,
    pub index: usize,
    pub angle: f64,
    pub center: LayoutPoint,
    pub radius: f64,
    pub selected: bool,
    pub label: LabelLayout,
}

/// A child of the selected first-ring node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildLayout {
    pub id: String,
    pub parent_id: String,
    /// Index of the parent in [`RadialLayout::nodes`].
    pub parent_index: usize,
    pub index: usize,
    pub angle: f64,
    pub center: LayoutPoint,
    pub radius: f64,
    pub label: LabelLayout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineKind {
    /// Hub to first-ring node.
    Spoke,
    /// First-ring node to one of its children.
    Branch,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineLayout {
    pub kind: LineKind,
    pub from: LayoutPoint,
    pub to: LayoutPoint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadialLayout {
    pub width: f64,
    pub height: f64,
    /// First-ring radius, `min(width, height) / ringDivisor`.
    pub ring_radius: f64,
    /// Distance from a selected node to its children.
    pub child_ring_radius: f64,
    pub hub: HubLayout,
    pub nodes: Vec<NodeLayout>,
    pub children: Vec<ChildLayout>,
    pub lines: Vec<LineLayout>,
    /// Extent of all circles; may exceed the surface when radii are large.
    pub bounds: Option<Bounds>,
}

impl RadialLayout {
    pub fn selected_node(&self) -> Option<&NodeLayout> {
        self.nodes.iter().find(|n| n.selected)
    }
}
