use crate::LayoutOptions;
use crate::layout::layout_radial;
use crate::model::RadialLayout;
use crate::surface::{DrawSurface, Fill, Stroke, TextPaint};
use crate::theme::Theme;
use taxoviz_core::{Selection, TaxonomyNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Drawn,
    /// The surface was detached or had no area. Nothing was touched, not even `clear`.
    SurfaceUnavailable,
}

impl RenderOutcome {
    pub fn is_drawn(self) -> bool {
        matches!(self, RenderOutcome::Drawn)
    }
}

/// Clears `surface` and draws the hub, the first ring and the selected node's children.
///
/// Only the surface is mutated. An unavailable surface is a silent no-op: a surface becoming
/// ready is expected to trigger another call.
pub fn render<'a, S: DrawSurface + ?Sized>(
    surface: &mut S,
    nodes: &[TaxonomyNode],
    selected: impl Into<Selection<'a>>,
    options: &LayoutOptions,
) -> RenderOutcome {
    let Some(size) = surface.size() else {
        return RenderOutcome::SurfaceUnavailable;
    };
    let Some(layout) = layout_radial(nodes, selected, size, options) else {
        return RenderOutcome::SurfaceUnavailable;
    };
    surface.clear();
    paint(surface, &layout, &options.theme);
    RenderOutcome::Drawn
}

/// Draws a computed layout without clearing first.
///
/// Order matters for overlap: hub, then per first-ring node its spoke, circle and label,
/// followed by that node's children (branch, circle, label).
pub fn paint<S: DrawSurface + ?Sized>(surface: &mut S, layout: &RadialLayout, theme: &Theme) {
    let line = Stroke {
        color: theme.line_stroke.clone(),
        width: theme.line_width,
    };

    surface.draw_circle(
        layout.hub.center,
        layout.hub.radius,
        &Fill {
            color: theme.hub_fill.clone(),
        },
    );
    surface.draw_text(
        &layout.hub.label,
        layout.hub.center,
        &TextPaint {
            color: theme.hub_text.clone(),
            font_family: theme.font_family.clone(),
            font_size: theme.hub_font_size,
        },
    );

    let child_fill = Fill {
        color: theme.child_fill.clone(),
    };
    let child_text = TextPaint {
        color: theme.child_text.clone(),
        font_family: theme.font_family.clone(),
        font_size: theme.child_font_size,
    };

    for (i, node) in layout.nodes.iter().enumerate() {
        surface.draw_line(layout.hub.center, node.center, &line);

        let (fill, text) = if node.selected {
            (&theme.node_fill_selected, &theme.node_text_selected)
        } else {
            (&theme.node_fill, &theme.node_text)
        };
        surface.draw_circle(node.center, node.radius, &Fill { color: fill.clone() });
        surface.draw_text(
            &node.label.text,
            node.center,
            &TextPaint {
                color: text.clone(),
                font_family: theme.font_family.clone(),
                font_size: theme.node_font_size,
            },
        );

        for child in layout.children.iter().filter(|c| c.parent_index == i) {
            surface.draw_line(node.center, child.center, &line);
            surface.draw_circle(child.center, child.radius, &child_fill);
            surface.draw_text(&child.label.text, child.center, &child_text);
        }
    }
}
