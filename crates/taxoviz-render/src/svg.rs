mod util;

use util::{escape_xml, escape_xml_into, fmt, fmt_into};

use crate::LayoutOptions;
use crate::model::LayoutPoint;
use crate::render::render;
use crate::surface::{DrawSurface, Fill, Stroke, SurfaceSize, TextPaint};
use std::fmt::Write as _;
use taxoviz_core::{Selection, TaxonomyNode};

#[derive(Debug, Clone, Default)]
pub struct SvgRenderOptions {
    /// Root `<svg id="...">`. Defaults to `taxoviz`.
    pub diagram_id: Option<String>,
    /// Emitted as an accessible `<title>` when set.
    pub title: Option<String>,
}

/// A surface that records primitives as SVG elements.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    size: Option<SurfaceSize>,
    background: Option<String>,
    body: String,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Some(SurfaceSize::new(width, height)),
            background: None,
            body: String::new(),
        }
    }

    /// Fills the whole document before any recorded element. `None` keeps it transparent.
    pub fn with_background(mut self, background: Option<String>) -> Self {
        self.background = background;
        self
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.size = Some(SurfaceSize::new(width, height));
    }

    /// The recorded elements without the surrounding `<svg>` root.
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn to_svg(&self, options: &SvgRenderOptions) -> String {
        let size = self.size.unwrap_or(SurfaceSize::new(0.0, 0.0));
        let id = options.diagram_id.as_deref().unwrap_or("taxoviz");
        let id_esc = escape_xml(id);
        let (w, h) = (fmt(size.width), fmt(size.height));

        let mut out = String::with_capacity(self.body.len() + 256);
        let _ = write!(
            &mut out,
            r#"<svg id="{id_esc}" xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" role="graphics-document document" aria-roledescription="taxonomy""#
        );
        if options.title.is_some() {
            let _ = write!(&mut out, r#" aria-labelledby="chart-title-{id_esc}""#);
        }
        out.push('>');
        if let Some(title) = options.title.as_deref() {
            let _ = write!(
                &mut out,
                r#"<title id="chart-title-{id_esc}">{}</title>"#,
                escape_xml(title)
            );
        }
        if let Some(bg) = self.background.as_deref() {
            let _ = write!(
                &mut out,
                r#"<rect x="0" y="0" width="{w}" height="{h}" fill="{}"/>"#,
                escape_xml(bg)
            );
        }
        out.push_str(&self.body);
        out.push_str("</svg>");
        out
    }
}

impl DrawSurface for SvgSurface {
    fn size(&self) -> Option<SurfaceSize> {
        self.size
    }

    fn clear(&mut self) {
        self.body.clear();
    }

    fn draw_circle(&mut self, center: LayoutPoint, radius: f64, fill: &Fill) {
        let out = &mut self.body;
        out.push_str(r#"<circle cx=""#);
        fmt_into(out, center.x);
        out.push_str(r#"" cy=""#);
        fmt_into(out, center.y);
        out.push_str(r#"" r=""#);
        fmt_into(out, radius);
        out.push_str(r#"" fill=""#);
        escape_xml_into(out, &fill.color);
        out.push_str(r#""/>"#);
    }

    fn draw_line(&mut self, from: LayoutPoint, to: LayoutPoint, stroke: &Stroke) {
        let out = &mut self.body;
        out.push_str(r#"<line x1=""#);
        fmt_into(out, from.x);
        out.push_str(r#"" y1=""#);
        fmt_into(out, from.y);
        out.push_str(r#"" x2=""#);
        fmt_into(out, to.x);
        out.push_str(r#"" y2=""#);
        fmt_into(out, to.y);
        out.push_str(r#"" stroke=""#);
        escape_xml_into(out, &stroke.color);
        out.push_str(r#"" stroke-width=""#);
        fmt_into(out, stroke.width);
        out.push_str(r#""/>"#);
    }

    fn draw_text(&mut self, text: &str, at: LayoutPoint, paint: &TextPaint) {
        let out = &mut self.body;
        out.push_str(r#"<text x=""#);
        fmt_into(out, at.x);
        out.push_str(r#"" y=""#);
        fmt_into(out, at.y);
        out.push_str(r#"" fill=""#);
        escape_xml_into(out, &paint.color);
        out.push_str(r#"" font-family=""#);
        escape_xml_into(out, &paint.font_family);
        out.push_str(r#"" font-size=""#);
        fmt_into(out, paint.font_size);
        out.push_str(r#"px" text-anchor="middle" dominant-baseline="central">"#);
        escape_xml_into(out, text);
        out.push_str("</text>");
    }
}

/// Renders to a standalone SVG document of `width` x `height`.
///
/// Returns `None` when the size cannot be drawn on (zero or non-finite).
pub fn render_svg<'a>(
    nodes: &[TaxonomyNode],
    selected: impl Into<Selection<'a>>,
    width: f64,
    height: f64,
    options: &LayoutOptions,
    svg_options: &SvgRenderOptions,
) -> Option<String> {
    let mut surface =
        SvgSurface::new(width, height).with_background(options.theme.background.clone());
    if !render(&mut surface, nodes, selected, options).is_drawn() {
        return None;
    }
    Some(surface.to_svg(svg_options))
}
