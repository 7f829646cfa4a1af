use crate::{Error, Result, config_f64, config_string};
use serde::{Deserialize, Serialize};
use taxoviz_core::VizConfig;

/// Colors and fonts for the radial diagram.
///
/// Defaults are the pink palette of the places/activities explorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub background: Option<String>,
    pub hub_fill: String,
    pub hub_text: String,
    pub line_stroke: String,
    pub line_width: f64,
    pub node_fill: String,
    pub node_fill_selected: String,
    pub node_text: String,
    pub node_text_selected: String,
    pub child_fill: String,
    pub child_text: String,
    pub font_family: String,
    pub hub_font_size: f64,
    pub node_font_size: f64,
    pub child_font_size: f64,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: None,
            hub_fill: "#FFC0CB".to_string(),
            hub_text: "white".to_string(),
            line_stroke: "#ffd9e1".to_string(),
            line_width: 2.0,
            node_fill: "#ffc0cb".to_string(),
            node_fill_selected: "#ff7c95".to_string(),
            node_text: "#ff385f".to_string(),
            node_text_selected: "white".to_string(),
            child_fill: "#ffe6eb".to_string(),
            child_text: "#ff385f".to_string(),
            font_family: "Arial".to_string(),
            hub_font_size: 14.0,
            node_font_size: 12.0,
            child_font_size: 10.0,
        }
    }
}

impl Theme {
    /// Reads `theme.*` keys, falling back to [`Theme::default`] per key.
    pub fn from_config(config: &VizConfig) -> Result<Self> {
        let cfg = config.as_value();
        let d = Self::default();
        let theme = Self {
            background: config
                .get_str("theme.background")
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            hub_fill: config_string(cfg, &["theme", "hubFill"], &d.hub_fill),
            hub_text: config_string(cfg, &["theme", "hubText"], &d.hub_text),
            line_stroke: config_string(cfg, &["theme", "lineStroke"], &d.line_stroke),
            line_width: config_f64(cfg, &["theme", "lineWidth"], d.line_width),
            node_fill: config_string(cfg, &["theme", "nodeFill"], &d.node_fill),
            node_fill_selected: config_string(
                cfg,
                &["theme", "nodeFillSelected"],
                &d.node_fill_selected,
            ),
            node_text: config_string(cfg, &["theme", "nodeText"], &d.node_text),
            node_text_selected: config_string(
                cfg,
                &["theme", "nodeTextSelected"],
                &d.node_text_selected,
            ),
            child_fill: config_string(cfg, &["theme", "childFill"], &d.child_fill),
            child_text: config_string(cfg, &["theme", "childText"], &d.child_text),
            font_family: config_string(cfg, &["theme", "fontFamily"], &d.font_family),
            hub_font_size: config_f64(cfg, &["theme", "hubFontSize"], d.hub_font_size),
            node_font_size: config_f64(cfg, &["theme", "nodeFontSize"], d.node_font_size),
            child_font_size: config_f64(cfg, &["theme", "childFontSize"], d.child_font_size),
        };

        for (key, v) in [
            ("theme.lineWidth", theme.line_width),
            ("theme.hubFontSize", theme.hub_font_size),
            ("theme.nodeFontSize", theme.node_font_size),
            ("theme.childFontSize", theme.child_font_size),
        ] {
            if !(v.is_finite() && v > 0.0) {
                return Err(Error::InvalidConfig {
                    key,
                    message: format!("expected a positive number, got {v}"),
                });
            }
        }
        Ok(theme)
    }
}
