#![forbid(unsafe_code)]

//! `taxoviz` draws a taxonomy tree as a two-ring radial diagram, headless.
//!
//! The hub sits in the middle, top-level categories on a ring around it, and the children of
//! the selected category fan out in a narrow arc beyond their parent. Drawing goes through the
//! [`render::DrawSurface`] capability so any backend can host it.
//!
//! # Features
//!
//! - `render`: enable layout + drawing (`taxoviz::render`)
//! - `raster`: enable PNG/JPG/PDF output via pure-Rust SVG rasterization/conversion

pub use taxoviz_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use taxoviz_render::model::{
        Bounds, ChildLayout, HubLayout, LabelLayout, LayoutPoint, LineKind, LineLayout,
        NodeLayout, RadialLayout,
    };
    pub use taxoviz_render::text::{DeterministicTextMeasurer, TextMeasurer, TextStyle};
    pub use taxoviz_render::{
        DetachedSurface, DrawCommand, DrawSurface, Fill, LayoutOptions, RadialParams,
        RecordingSurface, RenderOutcome, Stroke, SurfaceSize, SvgRenderOptions, SvgSurface,
        TaxonomyView, TextPaint, Theme, layout_radial, paint, render,
    };

    use taxoviz_core::{Taxonomy, VizConfig};

    #[cfg(feature = "raster")]
    pub mod raster;

    #[derive(Debug, thiserror::Error)]
    pub enum HeadlessError {
        #[error(transparent)]
        Document(#[from] taxoviz_core::Error),
        #[error(transparent)]
        Render(#[from] taxoviz_render::Error),
    }

    pub type Result<T> = std::result::Result<T, HeadlessError>;

    /// Converts an arbitrary string into a conservative SVG `id` token suitable for embedding
    /// several diagrams in the same page.
    ///
    /// This helper:
    /// - trims whitespace
    /// - replaces unsupported characters with `-`
    /// - ensures the id starts with an ASCII letter by prefixing `t-` when needed
    pub fn sanitize_svg_id(raw: &str) -> String {
        let raw = raw.trim();
        if raw.is_empty() {
            return "t-untitled".to_string();
        }

        let mut out = String::with_capacity(raw.len() + 4);
        for ch in raw.chars() {
            let ok = ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || ch == ':' || ch == '.';
            out.push(if ok { ch } else { '-' });
        }

        let starts_ok = out.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
        if !starts_ok {
            out.insert_str(0, "t-");
        }

        while out.contains("--") {
            out = out.replace("--", "-");
        }
        let out = out.trim_matches('-');
        if out.is_empty() || out == "t" {
            return "t-untitled".to_string();
        }
        out.to_string()
    }

    /// Bundles resolved options for repeated headless renders.
    ///
    /// All work is CPU-bound and performs no I/O.
    #[derive(Debug, Clone, Default)]
    pub struct HeadlessRenderer {
        pub layout: LayoutOptions,
        pub svg: SvgRenderOptions,
    }

    impl HeadlessRenderer {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn from_config(config: &VizConfig) -> Result<Self> {
            Ok(Self {
                layout: LayoutOptions::from_config(config)?,
                svg: SvgRenderOptions::default(),
            })
        }

        pub fn with_diagram_id(mut self, id: &str) -> Self {
            self.svg.diagram_id = Some(sanitize_svg_id(id));
            self
        }

        pub fn with_title(mut self, title: impl Into<String>) -> Self {
            self.svg.title = Some(title.into());
            self
        }

        /// Layout only. `None` when the size cannot be drawn on.
        pub fn layout(
            &self,
            taxonomy: &Taxonomy,
            selected_id: Option<&str>,
            width: f64,
            height: f64,
        ) -> Option<RadialLayout> {
            layout_radial(
                taxonomy.top_level(),
                taxonomy.select(selected_id),
                SurfaceSize::new(width, height),
                &self.layout,
            )
        }

        /// A standalone SVG document. `None` when the size cannot be drawn on.
        pub fn render_svg(
            &self,
            taxonomy: &Taxonomy,
            selected_id: Option<&str>,
            width: f64,
            height: f64,
        ) -> Option<String> {
            taxoviz_render::render_svg(
                taxonomy.top_level(),
                taxonomy.select(selected_id),
                width,
                height,
                &self.layout,
                &self.svg,
            )
        }
    }

    /// One-shot SVG render with default options.
    pub fn render_svg(
        taxonomy: &Taxonomy,
        selected_id: Option<&str>,
        width: f64,
        height: f64,
    ) -> Option<String> {
        HeadlessRenderer::default().render_svg(taxonomy, selected_id, width, height)
    }

}
