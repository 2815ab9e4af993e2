//! Hexagon style store
//!
//! Host bridges deliver style properties one at a time as loosely typed
//! [`PropValue`]s. [`HexagonStyle::update`] parses each value into its typed
//! field and reports whether the outline has to be recomputed. A rejected
//! value leaves the previous one in place, so malformed input never reaches
//! path construction.

use hexview_core::{Color, GeometryError, PropValue, Rect};
use hexview_paint::{PolygonSpec, HEXAGON_SIDES, MAX_SIDES};
use serde::Deserialize;

use crate::error::{Result, StyleError};

/// Whether a style change invalidates the current outline
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecomputeNeeded {
    Yes,
    No,
}

impl RecomputeNeeded {
    pub fn is_yes(self) -> bool {
        self == RecomputeNeeded::Yes
    }
}

/// A settable style property
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleField {
    Size,
    BorderWidth,
    BorderColor,
    BackgroundColor,
    IsHorizontal,
    CornerRadius,
    Sides,
}

impl StyleField {
    pub const ALL: [StyleField; 7] = [
        StyleField::Size,
        StyleField::BorderWidth,
        StyleField::BorderColor,
        StyleField::BackgroundColor,
        StyleField::IsHorizontal,
        StyleField::CornerRadius,
        StyleField::Sides,
    ];

    /// Look up a field by its host property name
    ///
    /// `background_Color` is accepted as an alias of `backgroundColor`, the
    /// name some host bridges export to avoid clashing with the native view
    /// background.
    pub fn from_prop_name(name: &str) -> Option<Self> {
        match name {
            "size" => Some(StyleField::Size),
            "borderWidth" => Some(StyleField::BorderWidth),
            "borderColor" => Some(StyleField::BorderColor),
            "backgroundColor" | "background_Color" => Some(StyleField::BackgroundColor),
            "isHorizontal" => Some(StyleField::IsHorizontal),
            "cornerRadius" => Some(StyleField::CornerRadius),
            "sides" => Some(StyleField::Sides),
            _ => None,
        }
    }

    /// Canonical host property name
    pub fn prop_name(self) -> &'static str {
        match self {
            StyleField::Size => "size",
            StyleField::BorderWidth => "borderWidth",
            StyleField::BorderColor => "borderColor",
            StyleField::BackgroundColor => "backgroundColor",
            StyleField::IsHorizontal => "isHorizontal",
            StyleField::CornerRadius => "cornerRadius",
            StyleField::Sides => "sides",
        }
    }
}

/// Style of a hexagon view
#[derive(Clone, Debug, PartialEq)]
pub struct HexagonStyle {
    /// Explicit edge length of the square view, if the host set one
    pub size: Option<f64>,
    pub border_width: f64,
    pub border_color: Color,
    pub background_color: Color,
    /// Rotate the outline a quarter turn so vertices point up and down
    pub is_horizontal: bool,
    pub corner_radius: f64,
    pub sides: u32,
}

impl Default for HexagonStyle {
    fn default() -> Self {
        Self {
            size: None,
            border_width: 0.0,
            border_color: Color::TRANSPARENT,
            background_color: Color::TRANSPARENT,
            is_horizontal: false,
            corner_radius: 0.0,
            sides: HEXAGON_SIDES,
        }
    }
}

impl HexagonStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn border_width(mut self, width: f64) -> Self {
        self.border_width = width;
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    pub fn horizontal(mut self, is_horizontal: bool) -> Self {
        self.is_horizontal = is_horizontal;
        self
    }

    pub fn corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn sides(mut self, sides: u32) -> Self {
        self.sides = sides;
        self
    }

    /// Apply one host property value
    pub fn update(&mut self, field: StyleField, value: PropValue) -> Result<RecomputeNeeded> {
        match field {
            StyleField::Size => {
                self.size = Some(parse_length(field, &value)?);
                Ok(RecomputeNeeded::Yes)
            }
            StyleField::BorderWidth => {
                self.border_width = parse_length(field, &value)?;
                Ok(RecomputeNeeded::Yes)
            }
            StyleField::CornerRadius => {
                self.corner_radius = parse_length(field, &value)?;
                Ok(RecomputeNeeded::Yes)
            }
            StyleField::BorderColor => {
                Ok(parse_color(field, &value)?.map_or(RecomputeNeeded::No, |color| {
                    self.border_color = color;
                    RecomputeNeeded::Yes
                }))
            }
            StyleField::BackgroundColor => {
                Ok(parse_color(field, &value)?.map_or(RecomputeNeeded::No, |color| {
                    self.background_color = color;
                    RecomputeNeeded::Yes
                }))
            }
            StyleField::IsHorizontal => {
                if value.is_null() {
                    return Ok(RecomputeNeeded::No);
                }
                let horizontal = value.as_bool().ok_or_else(|| StyleError::InvalidBool {
                    field: field.prop_name(),
                    value: value.to_string(),
                })?;
                if horizontal == self.is_horizontal {
                    return Ok(RecomputeNeeded::No);
                }
                self.is_horizontal = horizontal;
                Ok(RecomputeNeeded::Yes)
            }
            StyleField::Sides => {
                self.sides = parse_sides(&value)?;
                Ok(RecomputeNeeded::Yes)
            }
        }
    }

    /// Apply a property by host name
    pub fn update_prop(&mut self, name: &str, value: PropValue) -> Result<RecomputeNeeded> {
        let field = StyleField::from_prop_name(name)
            .ok_or_else(|| StyleError::UnknownProp(name.to_string()))?;
        self.update(field, value)
    }

    /// Polygon description for a view occupying `bounds`
    pub fn polygon_spec(&self, bounds: Rect) -> std::result::Result<PolygonSpec, GeometryError> {
        PolygonSpec::new(self.sides, bounds, self.border_width, self.corner_radius)
    }
}

// Missing numbers read as zero, matching the host's number conversion
fn parse_length(field: StyleField, value: &PropValue) -> Result<f64> {
    if value.is_null() {
        return Ok(0.0);
    }
    value
        .as_f64()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .ok_or_else(|| StyleError::InvalidNumber {
            field: field.prop_name(),
            value: value.to_string(),
        })
}

// `Ok(None)` means "no value supplied"
fn parse_color(field: StyleField, value: &PropValue) -> Result<Option<Color>> {
    let color = match value {
        PropValue::Null => return Ok(None),
        PropValue::Number(code) => Color::from_code(*code),
        PropValue::String(text) => Color::parse_code(text),
        PropValue::Bool(_) => None,
    };
    color.map(Some).ok_or_else(|| StyleError::InvalidColor {
        field: field.prop_name(),
        value: value.to_string(),
    })
}

fn parse_sides(value: &PropValue) -> Result<u32> {
    if value.is_null() {
        return Ok(HEXAGON_SIDES);
    }
    value
        .as_f64()
        .filter(|v| v.fract() == 0.0 && *v >= 3.0 && *v <= MAX_SIDES as f64)
        .map(|v| v as u32)
        .ok_or_else(|| StyleError::InvalidSides(value.to_string()))
}

/// Serialized hexagon style, keyed by host property names
///
/// Every key is optional; absent keys keep the style defaults. Values go
/// through the same parsing as [`HexagonStyle::update`], so colors may be
/// numeric codes or `0x`/`#` strings.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HexagonConfig {
    pub size: Option<PropValue>,
    pub border_width: Option<PropValue>,
    pub border_color: Option<PropValue>,
    #[serde(alias = "background_Color")]
    pub background_color: Option<PropValue>,
    pub is_horizontal: Option<PropValue>,
    pub corner_radius: Option<PropValue>,
    pub sides: Option<PropValue>,
}

impl HexagonConfig {
    fn entries(&self) -> [(StyleField, Option<&PropValue>); 7] {
        [
            (StyleField::Size, self.size.as_ref()),
            (StyleField::BorderWidth, self.border_width.as_ref()),
            (StyleField::BorderColor, self.border_color.as_ref()),
            (StyleField::BackgroundColor, self.background_color.as_ref()),
            (StyleField::IsHorizontal, self.is_horizontal.as_ref()),
            (StyleField::CornerRadius, self.corner_radius.as_ref()),
            (StyleField::Sides, self.sides.as_ref()),
        ]
    }

    /// Build a style, stopping at the first invalid value
    pub fn to_style(&self) -> Result<HexagonStyle> {
        let mut style = HexagonStyle::default();
        for (field, value) in self.entries() {
            if let Some(value) = value {
                style.update(field, value.clone())?;
            }
        }
        Ok(style)
    }
}
