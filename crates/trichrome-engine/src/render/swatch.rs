//! Instanced quad renderer for the on-screen color swatches.

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::coords::{ColorRgba, Rect};
use crate::render::{RenderCtx, RenderTarget};
use crate::shader::{self, LinkDesc, ShaderError, ShaderStage};

use super::common::{
    uniform_min_binding_size, QuadVertex, ViewportUniform, QUAD_INDICES, QUAD_VERTICES,
};

/// One quad to draw: position and size in logical pixels plus a fill color.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct SwatchInstance {
    origin: [f32; 2],
    size: [f32; 2],
    color: [f32; 4],
}

impl SwatchInstance {
    pub fn new(rect: Rect, color: ColorRgba) -> Self {
        Self {
            origin: [rect.origin.x, rect.origin.y],
            size: [rect.size.x, rect.size.y],
            color: color.to_array(),
        }
    }

    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        1 => Float32x2, // origin
        2 => Float32x2, // size
        3 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SwatchInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

/// Draws a batch of solid quads positioned in logical pixels.
///
/// The vertex shader converts to NDC using a viewport uniform, so callers
/// never deal with clip-space math. The instance buffer grows on demand.
pub struct SwatchRenderer {
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    viewport_ubo: wgpu::Buffer,

    quad_vbo: wgpu::Buffer,
    quad_ibo: wgpu::Buffer,

    instance_vbo: Option<wgpu::Buffer>,
    instance_capacity: usize,
}

impl SwatchRenderer {
    pub fn new(ctx: &RenderCtx<'_>) -> Result<Self, ShaderError> {
        let vertex = shader::compile(
            ctx.device,
            ShaderStage::Vertex,
            "swatch vs",
            include_str!("shaders/swatch.vert.wgsl"),
        )?;
        let fragment = shader::compile(
            ctx.device,
            ShaderStage::Fragment,
            "swatch fs",
            include_str!("shaders/swatch.frag.wgsl"),
        )?;

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("swatch viewport bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: Some(uniform_min_binding_size::<ViewportUniform>()),
                        },
                        count: None,
                    }],
                });

        let pipeline = shader::link(
            ctx.device,
            LinkDesc {
                label: "swatch pipeline",
                vertex: &vertex,
                fragment: &fragment,
                vertex_layouts: &[QuadVertex::layout(), SwatchInstance::layout()],
                bind_group_layouts: &[&bind_group_layout],
                format: ctx.surface_format,
            },
        )?;

        let quad_vbo = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("swatch quad vbo"),
                contents: bytemuck::cast_slice(&QUAD_VERTICES),
                usage: wgpu::BufferUsages::VERTEX,
            });

        let quad_ibo = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("swatch quad ibo"),
                contents: bytemuck::cast_slice(&QUAD_INDICES),
                usage: wgpu::BufferUsages::INDEX,
            });

        let viewport_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("swatch viewport ubo"),
            size: std::mem::size_of::<ViewportUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("swatch bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: viewport_ubo.as_entire_binding(),
            }],
        });

        Ok(Self {
            pipeline,
            bind_group,
            viewport_ubo,
            quad_vbo,
            quad_ibo,
            instance_vbo: None,
            instance_capacity: 0,
        })
    }

    /// Records one instanced draw for `instances` into `target`.
    pub fn draw(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        instances: &[SwatchInstance],
    ) {
        if instances.is_empty() {
            return;
        }

        let u = ViewportUniform {
            size: [ctx.viewport.width.max(1.0), ctx.viewport.height.max(1.0)],
            _pad: [0.0; 2],
        };
        ctx.queue
            .write_buffer(&self.viewport_ubo, 0, bytemuck::bytes_of(&u));

        self.ensure_instance_capacity(ctx, instances.len());
        let Some(instance_vbo) = self.instance_vbo.as_ref() else { return };
        ctx.queue
            .write_buffer(instance_vbo, 0, bytemuck::cast_slice(instances));

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("swatch pass"),
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
        rpass.set_vertex_buffer(0, self.quad_vbo.slice(..));
        rpass.set_vertex_buffer(1, instance_vbo.slice(..));
        rpass.set_index_buffer(self.quad_ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..6, 0, 0..instances.len() as u32);
    }

    fn ensure_instance_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.instance_capacity && self.instance_vbo.is_some() {
            return;
        }

        let new_cap = required.next_power_of_two().max(16);
        let new_size = (new_cap * std::mem::size_of::<SwatchInstance>()) as u64;

        self.instance_vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("swatch instance vbo"),
            size: new_size,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.instance_capacity = new_cap;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instance_copies_rect_and_color() {
        let rect = Rect::new(10.0, 20.0, 64.0, 28.0);
        let inst = SwatchInstance::new(rect, ColorRgba::new(0.0, 1.0, 0.0, 1.0));
        assert_eq!(inst.origin, [10.0, 20.0]);
        assert_eq!(inst.size, [64.0, 28.0]);
        assert_eq!(inst.color, [0.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn instance_layout_steps_per_instance() {
        let layout = SwatchInstance::layout();
        assert_eq!(layout.array_stride, 32);
        assert_eq!(layout.step_mode, wgpu::VertexStepMode::Instance);
        assert_eq!(layout.attributes.len(), 3);
        assert_eq!(layout.attributes[0].shader_location, 1);
    }
}
