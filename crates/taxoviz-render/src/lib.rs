#![forbid(unsafe_code)]

pub mod layout;
pub mod model;
pub mod recording;
pub mod render;
pub mod surface;
pub mod svg;
pub mod text;
pub mod theme;
pub mod view;

pub use layout::{RadialParams, child_angle, layout_radial, top_level_angle};
pub use recording::{DrawCommand, RecordingSurface};
pub use render::{RenderOutcome, paint, render};
pub use surface::{DetachedSurface, DrawSurface, Fill, Stroke, SurfaceSize, TextPaint};
pub use svg::{SvgRenderOptions, SvgSurface, render_svg};
pub use theme::Theme;
pub use view::TaxonomyView;

use crate::text::{DeterministicTextMeasurer, TextMeasurer};
use std::sync::Arc;
use taxoviz_core::VizConfig;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid config value for {key}: {message}")]
    InvalidConfig { key: &'static str, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Resolved layout + paint settings.
///
/// Built once from a [`VizConfig`] so that rendering itself never fails.
#[derive(Clone)]
pub struct LayoutOptions {
    pub text_measurer: Arc<dyn TextMeasurer + Send + Sync>,
    pub params: RadialParams,
    pub theme: Theme,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            text_measurer: Arc::new(DeterministicTextMeasurer::default()),
            params: RadialParams::default(),
            theme: Theme::default(),
        }
    }
}

impl std::fmt::Debug for LayoutOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutOptions")
            .field("params", &self.params)
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}

impl LayoutOptions {
    pub fn from_config(config: &VizConfig) -> Result<Self> {
        Ok(Self {
            params: RadialParams::from_config(config)?,
            theme: Theme::from_config(config)?,
            ..Default::default()
        })
    }

    pub fn with_text_measurer(mut self, measurer: Arc<dyn TextMeasurer + Send + Sync>) -> Self {
        self.text_measurer = measurer;
        self
    }
}

pub(crate) fn config_f64(cfg: &serde_json::Value, path: &[&str], default: f64) -> f64 {
    let mut cur = cfg;
    for key in path {
        cur = match cur.get(*key) {
            Some(v) => v,
            None => return default,
        };
    }
    cur.as_f64()
        .or_else(|| cur.as_i64().map(|n| n as f64))
        .or_else(|| cur.as_u64().map(|n| n as f64))
        .unwrap_or(default)
}

pub(crate) fn config_string(cfg: &serde_json::Value, path: &[&str], default: &str) -> String {
    let mut cur = cfg;
    for key in path {
        cur = match cur.get(*key) {
            Some(v) => v,
            None => return default.to_string(),
        };
    }
    cur.as_str().unwrap_or(default).to_string()
}
