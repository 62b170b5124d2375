//! Shared Plotly layout, colored for the active theme.

use serde::Serialize;

use crate::core::theme::Theme;

pub const TRANSPARENT: &str = "rgba(0,0,0,0)";
pub const TITLE_FONT_SIZE: u32 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub text: &'static str,
    pub grid: &'static str,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                text: "#ffffff",
                grid: "#475569",
            },
            Theme::Light => Self {
                text: "#1e293b",
                grid: "#e2e8f0",
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
    pub font: Font,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: Title,
    pub tickfont: Font,
    pub gridcolor: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotLayout {
    pub title: Title,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub plot_bgcolor: &'static str,
    pub paper_bgcolor: &'static str,
    pub font: Font,
}

/// Build the layout for a chart. Colors come from `theme`, so call this at
/// render time rather than caching the result.
pub fn plot_layout(title: &str, x_title: &str, y_title: &str, theme: Theme) -> PlotLayout {
    let palette = Palette::for_theme(theme);
    let text = || Font {
        color: palette.text,
        size: None,
    };
    let axis = |label: &str| Axis {
        title: Title {
            text: label.to_string(),
            font: text(),
        },
        tickfont: text(),
        gridcolor: palette.grid,
    };

    PlotLayout {
        title: Title {
            text: title.to_string(),
            font: Font {
                color: palette.text,
                size: Some(TITLE_FONT_SIZE),
            },
        },
        xaxis: axis(x_title),
        yaxis: axis(y_title),
        plot_bgcolor: TRANSPARENT,
        paper_bgcolor: TRANSPARENT,
        font: text(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    /// Replace every color-bearing value so two layouts can be compared.
    fn strip_colors(value: &mut Value) {
        match value {
            Value::Object(map) => {
                for (key, inner) in map.iter_mut() {
                    if key == "color" || key == "gridcolor" {
                        *inner = Value::Null;
                    } else {
                        strip_colors(inner);
                    }
                }
            }
            Value::Array(items) => items.iter_mut().for_each(strip_colors),
            _ => {}
        }
    }

    #[test]
    fn dark_layout_uses_light_text_on_slate_grid() {
        let layout = plot_layout("Prediction Distribution", "Prediction", "Count", Theme::Dark);
        let value = serde_json::to_value(&layout).unwrap();
        assert_eq!(
            value["title"],
            json!({"text": "Prediction Distribution", "font": {"color": "#ffffff", "size": 16}})
        );
        assert_eq!(value["xaxis"]["gridcolor"], "#475569");
        assert_eq!(value["yaxis"]["tickfont"]["color"], "#ffffff");
        assert_eq!(value["plot_bgcolor"], TRANSPARENT);
        assert_eq!(value["paper_bgcolor"], TRANSPARENT);
    }

    #[test]
    fn light_layout_colors() {
        let layout = plot_layout("T", "X", "Y", Theme::Light);
        assert_eq!(layout.font.color, "#1e293b");
        assert_eq!(layout.xaxis.gridcolor, "#e2e8f0");
        assert_eq!(layout.yaxis.title.text, "Y");
    }

    #[test]
    fn themes_differ_only_in_color_fields() {
        let mut dark =
            serde_json::to_value(plot_layout("Trend", "Month", "Count", Theme::Dark)).unwrap();
        let mut light =
            serde_json::to_value(plot_layout("Trend", "Month", "Count", Theme::Light)).unwrap();
        assert_ne!(dark, light);

        strip_colors(&mut dark);
        strip_colors(&mut light);
        assert_eq!(dark, light);
    }
}
