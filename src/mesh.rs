use crate::vertex::Vertex;
use lyon::math::{point, Point};
use lyon::tessellation::VertexBuffers;
use std::ops::Range;

/// What a draw call painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawKind {
    Fill,
    Stroke,
}

/// One fill or stroke recorded in a [`Mesh`].
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub kind: DrawKind,
    /// Draw order, also written into each vertex of the call.
    pub order: f32,
    /// Range in the index buffer covered by this call.
    pub index_range: Range<usize>,
}

/// Triangle geometry accumulated by [`MeshCanvas`](crate::MeshCanvas).
#[derive(Debug, Clone)]
pub struct Mesh {
    buffers: VertexBuffers<Vertex, u16>,
    draw_calls: Vec<DrawCall>,
}

impl Default for Mesh {
    fn default() -> Self {
        Self {
            buffers: VertexBuffers::new(),
            draw_calls: Vec::new(),
        }
    }
}

impl Mesh {
    pub fn vertices(&self) -> &[Vertex] {
        &self.buffers.vertices
    }

    pub fn indices(&self) -> &[u16] {
        &self.buffers.indices
    }

    pub fn draw_calls(&self) -> &[DrawCall] {
        &self.draw_calls
    }

    pub fn is_empty(&self) -> bool {
        self.draw_calls.is_empty()
    }

    /// Triangles of one draw call, as positions.
    pub fn triangles<'a>(&'a self, draw_call: &'a DrawCall) -> impl Iterator<Item = [Point; 3]> + 'a {
        self.buffers.indices[draw_call.index_range.clone()]
            .chunks_exact(3)
            .map(move |triangle| {
                let at = |i: u16| {
                    let [x, y] = self.buffers.vertices[i as usize].position;
                    point(x, y)
                };
                [at(triangle[0]), at(triangle[1]), at(triangle[2])]
            })
    }

    /// Normalized color of the top-most draw call covering `position`, if any.
    pub fn color_at(&self, position: Point) -> Option<[f32; 4]> {
        self.draw_calls
            .iter()
            .rev()
            .find(|draw_call| {
                self.triangles(draw_call)
                    .any(|[a, b, c]| triangle_contains(a, b, c, position))
            })
            .and_then(|draw_call| self.buffers.indices.get(draw_call.index_range.start))
            .map(|&index| self.buffers.vertices[index as usize].color)
    }

    pub(crate) fn next_order(&self) -> f32 {
        self.draw_calls.len() as f32
    }

    pub(crate) fn vertex_count(&self) -> usize {
        self.buffers.vertices.len()
    }

    /// Appends `geometry`, rebasing its indices and stamping color and order.
    pub(crate) fn append(
        &mut self,
        kind: DrawKind,
        geometry: &VertexBuffers<Vertex, u16>,
        color: [f32; 4],
        order: f32,
    ) {
        let base = self.buffers.vertices.len() as u16;
        let start = self.buffers.indices.len();

        self.buffers
            .vertices
            .extend(geometry.vertices.iter().map(|vertex| Vertex {
                position: vertex.position,
                color,
                order,
            }));
        self.buffers
            .indices
            .extend(geometry.indices.iter().map(|index| index + base));

        self.draw_calls.push(DrawCall {
            kind,
            order,
            index_range: start..self.buffers.indices.len(),
        });
    }

    pub(crate) fn clear(&mut self) {
        self.buffers.vertices.clear();
        self.buffers.indices.clear();
        self.draw_calls.clear();
    }
}

/// Inclusive of edges, so points on a shared edge count for both triangles.
fn triangle_contains(a: Point, b: Point, c: Point, p: Point) -> bool {
    let d1 = (b - a).cross(p - a);
    let d2 = (c - b).cross(p - b);
    let d3 = (a - c).cross(p - c);

    let has_negative = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_positive = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;

    !(has_negative && has_positive)
}
