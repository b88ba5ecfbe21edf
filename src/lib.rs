//! Rectangles whose four corners are rounded independently.
//!
//! A [`CornerSet`] picks corners, a [`CornerRadius`] holds one radius per corner,
//! [`rounded_rect_path`] traces the clamped outline, and [`RoundedCorners`] fills and
//! strokes that outline on any [`Canvas`]. [`MeshCanvas`] is a canvas that tessellates
//! into triangle meshes with lyon.

mod cache;
mod canvas;
mod color;
mod corner_radius;
mod corner_set;
mod mesh;
mod path;
mod rounded_corners;
mod stroke;
mod util;
mod vertex;

pub use lyon;

pub use canvas::{Canvas, MeshCanvas, MeshCanvasConfig, RenderError};
pub use color::Color;
pub use corner_radius::CornerRadius;
pub use corner_set::{Corner, CornerSet};
pub use mesh::{DrawCall, DrawKind, Mesh};
pub use path::{rounded_rect_path, CornerArc, PathSegment, PathSink, RoundedRectPath};
pub use rounded_corners::RoundedCorners;
pub use stroke::Stroke;
pub use vertex::Vertex;
