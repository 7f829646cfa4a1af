use crate::model::{
    Bounds, ChildLayout, HubLayout, LabelLayout, LayoutPoint, LineKind, LineLayout, NodeLayout,
    RadialLayout,
};
use crate::surface::SurfaceSize;
use crate::text::{TextMeasurer, TextStyle};
use crate::{Error, LayoutOptions, Result, config_f64, config_string};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use taxoviz_core::{Selection, TaxonomyNode, VizConfig};

/// Geometry knobs of the two-ring layout (`radial.*` config keys).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadialParams {
    pub hub_radius: f64,
    pub node_radius: f64,
    pub child_radius: f64,
    /// First ring radius is `min(width, height) / ring_divisor`.
    pub ring_divisor: f64,
    /// Children sit at `ring_radius * child_ring_factor` from their parent.
    pub child_ring_factor: f64,
    /// Total arc the children of one node are spread over, whatever their count.
    pub child_spread: f64,
    pub hub_label: String,
}

impl Default for RadialParams {
    fn default() -> Self {
        Self {
            hub_radius: 50.0,
            node_radius: 30.0,
            child_radius: 20.0,
            ring_divisor: 3.0,
            child_ring_factor: 0.6,
            child_spread: PI / 3.0,
            hub_label: "Taxonomy".to_string(),
        }
    }
}

impl RadialParams {
    pub fn from_config(config: &VizConfig) -> Result<Self> {
        let cfg = config.as_value();
        let d = Self::default();
        let params = Self {
            hub_radius: config_f64(cfg, &["radial", "hubRadius"], d.hub_radius),
            node_radius: config_f64(cfg, &["radial", "nodeRadius"], d.node_radius),
            child_radius: config_f64(cfg, &["radial", "childRadius"], d.child_radius),
            ring_divisor: config_f64(cfg, &["radial", "ringDivisor"], d.ring_divisor),
            child_ring_factor: config_f64(
                cfg,
                &["radial", "childRingFactor"],
                d.child_ring_factor,
            ),
            child_spread: config_f64(cfg, &["radial", "childSpread"], d.child_spread),
            hub_label: config_string(cfg, &["radial", "hubLabel"], &d.hub_label),
        };

        for (key, v) in [
            ("radial.hubRadius", params.hub_radius),
            ("radial.nodeRadius", params.node_radius),
            ("radial.childRadius", params.child_radius),
            ("radial.ringDivisor", params.ring_divisor),
            ("radial.childRingFactor", params.child_ring_factor),
        ] {
            if !(v.is_finite() && v > 0.0) {
                return Err(Error::InvalidConfig {
                    key,
                    message: format!("expected a positive number, got {v}"),
                });
            }
        }
        // A zero spread stacks every child on the parent's own angle, which is legal.
        if !(params.child_spread.is_finite() && params.child_spread >= 0.0) {
            return Err(Error::InvalidConfig {
                key: "radial.childSpread",
                message: format!("expected a non-negative angle, got {}", params.child_spread),
            });
        }
        Ok(params)
    }
}

/// Angle of the `index`-th of `count` first-ring nodes: 12 o'clock first, then clockwise.
pub fn top_level_angle(index: usize, count: usize) -> f64 {
    (index as f64 / count as f64) * PI * 2.0 - PI / 2.0
}

/// Angle of the `index`-th of `count` children, evenly spread over `spread` radians centered
/// on the parent's angle.
pub fn child_angle(parent_angle: f64, index: usize, count: usize, spread: f64) -> f64 {
    let (j, m) = (index as f64, count as f64);
    parent_angle + ((j - m / 2.0 + 0.5) / m) * spread
}

fn label_layout(
    text: &str,
    font_family: &str,
    font_size: f64,
    circle_radius: f64,
    measurer: &dyn TextMeasurer,
) -> LabelLayout {
    let style = TextStyle {
        font_family: Some(font_family.to_string()),
        font_size,
        font_weight: None,
    };
    let width = measurer.measure(text, &style).width;
    LabelLayout {
        text: text.to_string(),
        width,
        overflows: width > circle_radius * 2.0,
    }
}

/// Computes the two-ring geometry for `nodes` on a surface of `size`.
///
/// Returns `None` when the surface cannot be drawn on.
pub fn layout_radial<'a>(
    nodes: &[TaxonomyNode],
    selected: impl Into<Selection<'a>>,
    size: SurfaceSize,
    options: &LayoutOptions,
) -> Option<RadialLayout> {
    if !size.is_drawable() {
        return None;
    }
    let selected = selected.into();
    let params = &options.params;
    let theme = &options.theme;
    let measurer = options.text_measurer.as_ref();

    let center = size.center();
    let ring_radius = size.min_side() / params.ring_divisor;
    let child_ring_radius = ring_radius * params.child_ring_factor;

    let hub = HubLayout {
        label: params.hub_label.clone(),
        center,
        radius: params.hub_radius,
    };

    let count = nodes.len();
    let mut node_layouts: Vec<NodeLayout> = Vec::with_capacity(count);
    let mut children: Vec<ChildLayout> = Vec::new();
    let mut lines: Vec<LineLayout> = Vec::with_capacity(count);

    for (i, node) in nodes.iter().enumerate() {
        let angle = top_level_angle(i, count);
        let pos = center.polar_offset(ring_radius, angle);
        let is_selected = selected.is_selected(node);

        lines.push(LineLayout {
            kind: LineKind::Spoke,
            from: center,
            to: pos,
        });
        node_layouts.push(NodeLayout {
            id: node.id.clone(),
            index: i,
            angle,
            center: pos,
            radius: params.node_radius,
            selected: is_selected,
            label: label_layout(
                &node.name,
                &theme.font_family,
                theme.node_font_size,
                params.node_radius,
                measurer,
            ),
        });

        if !is_selected {
            continue;
        }
        let child_count = node.children.len();
        for (j, child) in node.children.iter().enumerate() {
            let angle = child_angle(angle, j, child_count, params.child_spread);
            let child_pos = pos.polar_offset(child_ring_radius, angle);
            lines.push(LineLayout {
                kind: LineKind::Branch,
                from: pos,
                to: child_pos,
            });
            children.push(ChildLayout {
                id: child.id.clone(),
                parent_id: node.id.clone(),
                parent_index: i,
                index: j,
                angle,
                center: child_pos,
                radius: params.child_radius,
                label: label_layout(
                    &child.name,
                    &theme.font_family,
                    theme.child_font_size,
                    params.child_radius,
                    measurer,
                ),
            });
        }
    }

    let circles = std::iter::once((hub.center, hub.radius))
        .chain(node_layouts.iter().map(|n| (n.center, n.radius)))
        .chain(children.iter().map(|c| (c.center, c.radius)));
    let bounds = Bounds::from_points(circles.flat_map(|(c, r)| {
        [(c.x - r, c.y - r), (c.x + r, c.y + r)]
    }));

    Some(RadialLayout {
        width: size.width,
        height: size.height,
        ring_radius,
        child_ring_radius,
        hub,
        nodes: node_layouts,
        children,
        lines,
        bounds,
    })
}
