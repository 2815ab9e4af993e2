//! hexview Mesh
//!
//! Triangle meshes for hexview paths, for backends that rasterize on the GPU.
//!
//! Paths are converted to lyon path events (arcs become cubic Béziers) and
//! run through lyon's fill and stroke tessellators. [`MeshContext`] wraps the
//! same conversion behind the [`hexview_core::DrawContext`] trait.
//!
//! ```
//! use hexview_core::{Color, Rect};
//! use hexview_mesh::tessellate_fill;
//!
//! let path = hexview_core::Path::rect(Rect::new(0.0, 0.0, 8.0, 8.0));
//! let mesh = tessellate_fill(&path, &Color::WHITE.into());
//! assert_eq!(mesh.triangle_count(), 2);
//! ```

pub mod context;
pub mod path;

pub use context::{BatchKind, MeshBatch, MeshContext};
pub use path::{
    tessellate_fill, tessellate_fill_with_rule, tessellate_stroke, PathVertex, TessellatedPath,
    TOLERANCE,
};
