//! Mesh-producing draw context
//!
//! [`MeshContext`] implements [`DrawContext`] by tessellating every draw call
//! into a [`MeshBatch`]. Clip shapes become their own batches so a GPU
//! backend can write them into a stencil before drawing the batches nested
//! inside them.

use hexview_core::{Brush, ClipShape, Color, DrawContext, FillRule, Path, Size, Stroke};
use crate::path::{tessellate_fill_with_rule, tessellate_stroke, TessellatedPath};

/// What a batch is used for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatchKind {
    /// Coverage mask for the batches that follow at a deeper clip depth
    Clip,
    Fill,
    Stroke,
}

/// One tessellated draw
#[derive(Clone, Debug)]
pub struct MeshBatch {
    pub kind: BatchKind,
    /// Number of clips active when the batch was recorded (clip batches
    /// count themselves)
    pub clip_depth: usize,
    pub mesh: TessellatedPath,
}

/// A [`DrawContext`] that collects triangle meshes
#[derive(Debug)]
pub struct MeshContext {
    batches: Vec<MeshBatch>,
    // Counts every pushed clip, including ones that tessellated to nothing
    clip_depth: usize,
    viewport: Size,
}

impl MeshContext {
    pub fn new(viewport: Size) -> Self {
        Self {
            batches: Vec::new(),
            clip_depth: 0,
            viewport,
        }
    }

    pub fn batches(&self) -> &[MeshBatch] {
        &self.batches
    }

    pub fn clip_depth(&self) -> usize {
        self.clip_depth
    }

    /// Total triangles across all batches
    pub fn triangle_count(&self) -> usize {
        self.batches.iter().map(|b| b.mesh.triangle_count()).sum()
    }

    fn push_batch(&mut self, kind: BatchKind, mesh: TessellatedPath) {
        if mesh.is_empty() {
            tracing::trace!("skipping empty {:?} batch", kind);
            return;
        }
        self.batches.push(MeshBatch {
            kind,
            clip_depth: self.clip_depth,
            mesh,
        });
    }
}

impl DrawContext for MeshContext {
    fn push_clip(&mut self, shape: ClipShape) {
        self.clip_depth += 1;
        let mesh = match &shape {
            ClipShape::Rect(rect) => {
                tessellate_fill_with_rule(&Path::rect(*rect), FillRule::NonZero, &Color::WHITE.into())
            }
            ClipShape::Path { path, fill_rule } => {
                tessellate_fill_with_rule(path, *fill_rule, &Color::WHITE.into())
            }
        };
        self.push_batch(BatchKind::Clip, mesh);
    }

    fn pop_clip(&mut self) {
        if self.clip_depth == 0 {
            tracing::warn!("pop_clip called with no active clip");
            return;
        }
        self.clip_depth -= 1;
    }

    fn fill_path(&mut self, path: &Path, brush: Brush) {
        let mesh = tessellate_fill_with_rule(path, FillRule::NonZero, &brush);
        self.push_batch(BatchKind::Fill, mesh);
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke, brush: Brush) {
        let mesh = tessellate_stroke(path, stroke, &brush);
        self.push_batch(BatchKind::Stroke, mesh);
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }
}
