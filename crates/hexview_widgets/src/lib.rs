//! hexview Widgets
//!
//! The hexagon view as a host UI toolkit sees it: a style store fed with
//! loosely typed property values, render targets built from one shared
//! outline, and a view that tracks when it has to redraw.
//!
//! # Example
//!
//! ```
//! use hexview_core::{PropValue, Rect};
//! use hexview_widgets::{HexagonStyle, RecomputeNeeded, RenderTargets, StyleField};
//!
//! let mut style = HexagonStyle::default();
//! let changed = style.update(StyleField::CornerRadius, PropValue::from(6.0)).unwrap();
//! assert_eq!(changed, RecomputeNeeded::Yes);
//!
//! let targets = RenderTargets::new(&style, Rect::new(0.0, 0.0, 120.0, 120.0)).unwrap();
//! assert_eq!(targets.stroke.path.arc_count(), 6);
//! ```

pub mod error;
pub mod hexagon;
pub mod render;
pub mod style;

pub use error::StyleError;
pub use hexagon::HexagonView;
pub use render::{outline, FillTarget, RenderTargets, StrokeTarget};
pub use style::{HexagonConfig, HexagonStyle, RecomputeNeeded, StyleField};
