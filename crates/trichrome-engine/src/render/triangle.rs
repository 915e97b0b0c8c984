//! The centerpiece renderer: one flat-colored triangle in clip space.

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::coords::ColorRgba;
use crate::render::{RenderCtx, RenderTarget};
use crate::shader::{self, LinkDesc, ShaderError, ShaderStage};

use super::common::uniform_min_binding_size;

/// Vertex positions in NDC. Apex up, base centered below the midline.
const TRIANGLE_VERTICES: [TriangleVertex; 3] = [
    TriangleVertex { position: [0.0, 0.5] },
    TriangleVertex { position: [-0.5, -0.5] },
    TriangleVertex { position: [0.5, -0.5] },
];

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct TriangleVertex {
    position: [f32; 2],
}

impl TriangleVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<TriangleVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct FillUniform {
    color: [f32; 4],
}

impl From<ColorRgba> for FillUniform {
    fn from(c: ColorRgba) -> Self {
        Self { color: c.to_array() }
    }
}

/// Renders the triangle with a uniform fill color.
///
/// All GPU resources are created in [`TriangleRenderer::new`]; a value of
/// this type is always ready to draw. Shader or link failures abort
/// construction with the driver log attached.
pub struct TriangleRenderer {
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    vbo: wgpu::Buffer,
    fill_ubo: wgpu::Buffer,
    color: ColorRgba,
}

impl TriangleRenderer {
    /// Compiles and links the shader pair, then allocates the vertex and
    /// uniform buffers. The uniform starts out holding `initial`.
    pub fn new(ctx: &RenderCtx<'_>, initial: ColorRgba) -> Result<Self, ShaderError> {
        let vertex = shader::compile(
            ctx.device,
            ShaderStage::Vertex,
            "triangle vs",
            include_str!("shaders/triangle.vert.wgsl"),
        )?;
        let fragment = shader::compile(
            ctx.device,
            ShaderStage::Fragment,
            "triangle fs",
            include_str!("shaders/triangle.frag.wgsl"),
        )?;

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("triangle fill bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: Some(uniform_min_binding_size::<FillUniform>()),
                        },
                        count: None,
                    }],
                });

        let pipeline = shader::link(
            ctx.device,
            LinkDesc {
                label: "triangle pipeline",
                vertex: &vertex,
                fragment: &fragment,
                vertex_layouts: &[TriangleVertex::layout()],
                bind_group_layouts: &[&bind_group_layout],
                format: ctx.surface_format,
            },
        )?;

        let vbo = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("triangle vbo"),
                contents: bytemuck::cast_slice(&TRIANGLE_VERTICES),
                usage: wgpu::BufferUsages::VERTEX,
            });

        let fill_ubo = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("triangle fill ubo"),
                contents: bytemuck::bytes_of(&FillUniform::from(initial)),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("triangle bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: fill_ubo.as_entire_binding(),
            }],
        });

        Ok(Self {
            pipeline,
            bind_group,
            vbo,
            fill_ubo,
            color: initial,
        })
    }

    /// Currently active fill color.
    pub fn color(&self) -> ColorRgba {
        self.color
    }

    /// Replaces the fill color. Pure state mutation; the uniform is uploaded
    /// by the next draw.
    pub fn set_color(&mut self, color: ColorRgba) {
        self.color = color;
    }

    /// Uploads the current color and records the triangle draw into `target`,
    /// on top of existing contents.
    pub fn draw(&self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        ctx.queue.write_buffer(
            &self.fill_ubo,
            0,
            bytemuck::bytes_of(&FillUniform::from(self.color)),
        );

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("triangle pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.vbo.slice(..));
        rpass.draw(0..3, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_spans_the_midline() {
        assert_eq!(TRIANGLE_VERTICES[0].position, [0.0, 0.5]);
        assert_eq!(TRIANGLE_VERTICES[1].position, [-0.5, -0.5]);
        assert_eq!(TRIANGLE_VERTICES[2].position, [0.5, -0.5]);
    }

    #[test]
    fn vertex_layout_is_tightly_packed() {
        let layout = TriangleVertex::layout();
        assert_eq!(layout.array_stride, 8);
        assert_eq!(layout.attributes.len(), 1);
        assert_eq!(layout.attributes[0].shader_location, 0);
    }

    #[test]
    fn fill_uniform_matches_color_channels() {
        let u = FillUniform::from(ColorRgba::new(1.0, 0.25, 0.0, 1.0));
        assert_eq!(u.color, [1.0, 0.25, 0.0, 1.0]);
        assert_eq!(std::mem::size_of::<FillUniform>(), 16);
    }
}
