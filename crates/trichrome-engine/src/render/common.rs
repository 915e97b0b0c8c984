//! Shared GPU types and utilities used by the renderers.

use bytemuck::{Pod, Zeroable};

// ── viewport uniform ──────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct ViewportUniform {
    pub size: [f32; 2],
    pub _pad: [f32; 2], // 16-byte alignment
}

// ── quad vertex ───────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct QuadVertex {
    pub pos: [f32; 2], // 0..1
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

pub(super) const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { pos: [0.0, 0.0] },
    QuadVertex { pos: [1.0, 0.0] },
    QuadVertex { pos: [1.0, 1.0] },
    QuadVertex { pos: [0.0, 1.0] },
];

pub(super) const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

// ── uniform binding size ──────────────────────────────────────────────────

/// Minimum binding size for a uniform struct.
///
/// Uniform structs here are non-empty `#[repr(C)]` types, so the size is
/// always non-zero.
pub(super) fn uniform_min_binding_size<U>() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(std::mem::size_of::<U>() as u64)
        .expect("uniform structs have non-zero size")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_uniform_is_16_bytes() {
        assert_eq!(std::mem::size_of::<ViewportUniform>(), 16);
        assert_eq!(uniform_min_binding_size::<ViewportUniform>().get(), 16);
    }

    #[test]
    fn quad_indices_reference_quad_vertices() {
        for &i in &QUAD_INDICES {
            assert!((i as usize) < QUAD_VERTICES.len());
        }
    }
}
