//! Drawing targets for rounded rectangles.
//!
//! [`Canvas`] is what a host framework implements to receive fills and strokes.
//! [`MeshCanvas`] is a ready-made host that tessellates everything into one triangle
//! mesh with lyon, suitable for upload into a GPU vertex/index buffer pair.

use crate::cache::Cache;
use crate::mesh::{DrawKind, Mesh};
use crate::vertex::Vertex;
use crate::{Color, Stroke};
use lyon::path::Path;
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, FillVertexConstructor,
    StrokeOptions, StrokeTessellator, StrokeVertex, StrokeVertexConstructor, TessellationError,
    VertexBuffers,
};
use std::num::NonZeroUsize;
use tracing::{debug, trace};

// ── Error type ───────────────────────────────────────────────────────────────

/// Errors a canvas can report while drawing.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to tessellate fill: {0:?}")]
    Fill(TessellationError),
    #[error("failed to tessellate stroke: {0:?}")]
    Stroke(TessellationError),
    /// The mesh would need more vertices than a `u16` index can address.
    #[error("mesh would hold {count} vertices, more than a u16 index can address")]
    TooManyVertices { count: usize },
    /// lyon needs a finite tolerance of at least `f32::EPSILON²` to flatten curves.
    #[error("tessellation tolerance must be a positive finite number, got {0}")]
    InvalidTolerance(f32),
}

// ── Canvas ───────────────────────────────────────────────────────────────────

/// A host drawing surface.
///
/// `cache_key`, when given, identifies the geometry of `path`: two calls with the same
/// key and kind must pass the same outline. Implementations are free to ignore it.
pub trait Canvas {
    fn fill_path(&mut self, path: &Path, color: Color, cache_key: Option<u64>) -> Result<(), RenderError>;

    fn stroke_path(&mut self, path: &Path, stroke: Stroke, cache_key: Option<u64>) -> Result<(), RenderError>;
}

/// Settings for [`MeshCanvas`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshCanvasConfig {
    /// Maximum distance between a curve and its flattened approximation.
    ///
    /// Rendering fails with [`RenderError::InvalidTolerance`] unless this is a
    /// positive finite number.
    pub tolerance: f32,
    /// Number of tessellated outlines kept for reuse.
    pub cache_size: NonZeroUsize,
}

impl Default for MeshCanvasConfig {
    fn default() -> Self {
        Self {
            tolerance: FillOptions::DEFAULT_TOLERANCE,
            cache_size: NonZeroUsize::new(64).unwrap_or(NonZeroUsize::MIN),
        }
    }
}

impl MeshCanvasConfig {
    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_cache_size(mut self, cache_size: NonZeroUsize) -> Self {
        self.cache_size = cache_size;
        self
    }
}

struct PositionOnly;

impl FillVertexConstructor<Vertex> for PositionOnly {
    fn new_vertex(&mut self, vertex: FillVertex) -> Vertex {
        Vertex {
            position: vertex.position().to_array(),
            color: [0.0; 4],
            order: 0.0,
        }
    }
}

impl StrokeVertexConstructor<Vertex> for PositionOnly {
    fn new_vertex(&mut self, vertex: StrokeVertex) -> Vertex {
        Vertex {
            position: vertex.position().to_array(),
            color: [0.0; 4],
            order: 0.0,
        }
    }
}

/// A [`Canvas`] that tessellates fills and strokes into a single [`Mesh`].
///
/// # Examples
///
/// ```rust
/// use rounded_corners::{Color, CornerSet, MeshCanvas, RoundedCorners};
///
/// let mut canvas = MeshCanvas::default();
/// RoundedCorners::new(12.0, CornerSet::ALL)
///     .fill_color(Color::WHITE)
///     .render((120.0, 80.0), &mut canvas)
///     .unwrap();
///
/// // One fill followed by one stroke
/// assert_eq!(canvas.mesh().draw_calls().len(), 2);
/// ```
pub struct MeshCanvas {
    config: MeshCanvasConfig,
    fill_tessellator: FillTessellator,
    stroke_tessellator: StrokeTessellator,
    cache: Cache,
    mesh: Mesh,
}

impl Default for MeshCanvas {
    fn default() -> Self {
        Self::new(MeshCanvasConfig::default())
    }
}

impl MeshCanvas {
    pub fn new(config: MeshCanvasConfig) -> Self {
        Self {
            config,
            fill_tessellator: FillTessellator::new(),
            stroke_tessellator: StrokeTessellator::new(),
            cache: Cache::new(config.cache_size),
            mesh: Mesh::default(),
        }
    }

    pub fn config(&self) -> &MeshCanvasConfig {
        &self.config
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn into_mesh(self) -> Mesh {
        self.mesh
    }

    /// Number of outlines currently held in the tessellation cache.
    pub fn cached_outlines(&self) -> usize {
        self.cache.len()
    }

    /// Drops recorded geometry. The tessellation cache is kept.
    pub fn clear(&mut self) {
        self.mesh.clear();
    }

    fn tessellate(
        &mut self,
        kind: DrawKind,
        path: &Path,
        line_width: f32,
    ) -> Result<VertexBuffers<Vertex, u16>, RenderError> {
        let tolerance = self.config.tolerance;
        if !(tolerance.is_finite() && tolerance >= f32::EPSILON * f32::EPSILON) {
            return Err(RenderError::InvalidTolerance(tolerance));
        }

        let mut buffers: VertexBuffers<Vertex, u16> = VertexBuffers::new();

        match kind {
            DrawKind::Fill => {
                let options = FillOptions::default().with_tolerance(tolerance);
                self.fill_tessellator
                    .tessellate_path(path, &options, &mut BuffersBuilder::new(&mut buffers, PositionOnly))
                    .map_err(RenderError::Fill)?;
            }
            DrawKind::Stroke => {
                let options = StrokeOptions::default()
                    .with_line_width(line_width)
                    .with_tolerance(tolerance);
                self.stroke_tessellator
                    .tessellate_path(path, &options, &mut BuffersBuilder::new(&mut buffers, PositionOnly))
                    .map_err(RenderError::Stroke)?;
            }
        }

        debug!(
            ?kind,
            vertices = buffers.vertices.len(),
            indices = buffers.indices.len(),
            "tessellated outline"
        );

        Ok(buffers)
    }

    fn draw(
        &mut self,
        kind: DrawKind,
        path: &Path,
        color: Color,
        line_width: f32,
        cache_key: Option<u64>,
    ) -> Result<(), RenderError> {
        let geometry = match cache_key.map(|key| (kind, key)) {
            Some(key) => match self.cache.get_vertex_buffers(&key) {
                Some(geometry) => {
                    trace!(?kind, key = key.1, "tessellation cache hit");
                    geometry.clone()
                }
                None => {
                    let geometry = self.tessellate(kind, path, line_width)?;
                    self.cache.insert_vertex_buffers(key, geometry.clone());
                    geometry
                }
            },
            None => self.tessellate(kind, path, line_width)?,
        };

        let count = self.mesh.vertex_count() + geometry.vertices.len();
        if count > u16::MAX as usize {
            return Err(RenderError::TooManyVertices { count });
        }

        let order = self.mesh.next_order();
        self.mesh.append(kind, &geometry, color.normalize(), order);
        Ok(())
    }
}

impl Canvas for MeshCanvas {
    fn fill_path(&mut self, path: &Path, color: Color, cache_key: Option<u64>) -> Result<(), RenderError> {
        self.draw(DrawKind::Fill, path, color, 0.0, cache_key)
    }

    fn stroke_path(&mut self, path: &Path, stroke: Stroke, cache_key: Option<u64>) -> Result<(), RenderError> {
        self.draw(DrawKind::Stroke, path, stroke.color, stroke.width, cache_key)
    }
}
