use crate::mesh::DrawKind;
use crate::vertex::Vertex;
use lru::LruCache;
use lyon::tessellation::VertexBuffers;
use std::num::NonZeroUsize;

/// A caller supplied hash, split by draw kind so a fill and a stroke of the same
/// outline never share geometry.
pub(crate) type CacheKey = (DrawKind, u64);

/// Tessellated geometry. Cached vertices carry positions only; color and order are
/// applied when the geometry is appended to a mesh.
pub(crate) struct Cache {
    tessellation_cache: LruCache<CacheKey, VertexBuffers<Vertex, u16>>,
}

impl Cache {
    pub(crate) fn new(size: NonZeroUsize) -> Self {
        Self {
            tessellation_cache: LruCache::new(size),
        }
    }

    pub fn len(&self) -> usize {
        self.tessellation_cache.len()
    }

    pub(crate) fn get_vertex_buffers(&mut self, cache_key: &CacheKey) -> Option<&VertexBuffers<Vertex, u16>> {
        self.tessellation_cache.get(cache_key)
    }

    pub(crate) fn insert_vertex_buffers(
        &mut self,
        cache_key: CacheKey,
        vertex_buffers: VertexBuffers<Vertex, u16>,
    ) {
        self.tessellation_cache.put(cache_key, vertex_buffers);
    }
}
