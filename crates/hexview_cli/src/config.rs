//! hexview configuration file handling
//!
//! A config file is a flat TOML table keyed by the host property names:
//!
//! ```toml
//! size = 120
//! borderWidth = 4
//! borderColor = "#202020"
//! backgroundColor = "0xFF3366FF"
//! isHorizontal = false
//! cornerRadius = 8
//! sides = 6
//! ```

use anyhow::{Context, Result};
use hexview_core::Rect;
use hexview_widgets::{HexagonConfig, HexagonStyle};
use std::fs;
use std::path::Path;

/// Edge length used when neither the command line nor the style sets one
pub const DEFAULT_SIZE: f64 = 100.0;

/// Load a style from an optional config file
pub fn load_style(path: Option<&Path>) -> Result<HexagonStyle> {
    let config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        }
        None => HexagonConfig::default(),
    };
    config.to_style().context("Invalid hexagon style")
}

pub fn parse_config(content: &str) -> Result<HexagonConfig> {
    Ok(toml::from_str(content)?)
}

/// Drawing bounds for a style
///
/// Explicit dimensions win over the style's `size`.
pub fn resolve_bounds(style: &HexagonStyle, width: Option<f64>, height: Option<f64>) -> Rect {
    let side = style.size.unwrap_or(DEFAULT_SIZE);
    Rect::new(0.0, 0.0, width.unwrap_or(side), height.unwrap_or(side))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexview_core::Color;

    #[test]
    fn test_parse_config() {
        let config = parse_config(
            r##"
            size = 64
            borderWidth = 2
            borderColor = "#000000"
            sides = 8
            "##,
        )
        .unwrap();
        let style = config.to_style().unwrap();
        assert_eq!(style.size, Some(64.0));
        assert_eq!(style.border_width, 2.0);
        assert_eq!(style.border_color, Color::BLACK);
        assert_eq!(style.sides, 8);
    }

    #[test]
    fn test_parse_config_rejects_bad_toml() {
        assert!(parse_config("size = ").is_err());
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = load_style(Some(Path::new("/nonexistent/hexview.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_no_file_uses_defaults() {
        assert_eq!(load_style(None).unwrap(), HexagonStyle::default());
    }

    #[test]
    fn test_invalid_style_value() {
        let config = parse_config("sides = 2").unwrap();
        assert!(config.to_style().is_err());
    }

    #[test]
    fn test_resolve_bounds() {
        let style = HexagonStyle::default();
        assert_eq!(resolve_bounds(&style, None, None), Rect::new(0.0, 0.0, 100.0, 100.0));

        let sized = HexagonStyle {
            size: Some(40.0),
            ..HexagonStyle::default()
        };
        assert_eq!(
            resolve_bounds(&sized, Some(80.0), None),
            Rect::new(0.0, 0.0, 80.0, 40.0)
        );
    }
}
