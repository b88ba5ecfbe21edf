use std::hash::{Hash, Hasher};

pub fn normalize_rgba_color(color: &[u8; 4]) -> [f32; 4] {
    [
        color[0] as f32 / 255.0,
        color[1] as f32 / 255.0,
        color[2] as f32 / 255.0,
        color[3] as f32 / 255.0,
    ]
}

/// Feeds an `f32` into a hasher by its bit pattern.
///
/// `-0.0` and `0.0` hash differently, which only costs a cache miss.
#[inline(always)]
pub(crate) fn hash_f32<H: Hasher>(value: f32, state: &mut H) {
    value.to_bits().hash(state);
}
