use bytemuck::{Pod, Zeroable};

/// A tessellated vertex, laid out for direct upload into a GPU vertex buffer.
///
/// `order` is the draw order of the call that produced the vertex; later calls
/// paint over earlier ones.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
    pub order: f32,
}
