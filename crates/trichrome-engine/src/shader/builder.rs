use crate::shader::{ShaderError, ShaderStage};

/// Compiles a single WGSL module, trapping validation errors.
///
/// On failure the partially-created module is discarded and the driver log is
/// returned in the error.
pub fn compile(
    device: &wgpu::Device,
    stage: ShaderStage,
    label: &str,
    source: &str,
) -> Result<wgpu::ShaderModule, ShaderError> {
    let scope = device.push_error_scope(wgpu::ErrorFilter::Validation);

    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });

    if let Some(err) = pollster::block_on(scope.pop()) {
        drop(module);
        let log = err.to_string();
        log::error!("{stage} shader {label:?} failed to compile:\n{log}");
        return Err(ShaderError::Compile { stage, log });
    }

    Ok(module)
}

/// Inputs for linking a module pair into a render pipeline.
pub struct LinkDesc<'a> {
    pub label: &'a str,
    pub vertex: &'a wgpu::ShaderModule,
    pub fragment: &'a wgpu::ShaderModule,
    pub vertex_layouts: &'a [wgpu::VertexBufferLayout<'a>],
    pub bind_group_layouts: &'a [&'a wgpu::BindGroupLayout],
    pub format: wgpu::TextureFormat,
}

/// Links a compiled vertex/fragment pair into a triangle-list pipeline.
///
/// Entry points are fixed at `vs_main` / `fs_main`. Layout creation and
/// pipeline creation run under one validation scope, so a mismatch between
/// the modules (missing entry point, interface mismatch) is reported as a
/// link failure with the driver log attached.
pub fn link(
    device: &wgpu::Device,
    desc: LinkDesc<'_>,
) -> Result<wgpu::RenderPipeline, ShaderError> {
    let scope = device.push_error_scope(wgpu::ErrorFilter::Validation);

    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(desc.label),
        bind_group_layouts: desc.bind_group_layouts,
        // Newer wgpu uses immediate constants; keep disabled for now.
        immediate_size: 0,
    });

    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(desc.label),
        layout: Some(&layout),

        vertex: wgpu::VertexState {
            module: desc.vertex,
            entry_point: Some("vs_main"),
            compilation_options: Default::default(),
            buffers: desc.vertex_layouts,
        },

        fragment: Some(wgpu::FragmentState {
            module: desc.fragment,
            entry_point: Some("fs_main"),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: desc.format,
                blend: None,
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),

        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },

        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),

        // Newer wgpu field names:
        multiview_mask: None,
        cache: None,
    });

    if let Some(err) = pollster::block_on(scope.pop()) {
        drop(pipeline);
        let log = err.to_string();
        log::error!("pipeline {:?} failed to link:\n{log}", desc.label);
        return Err(ShaderError::Link { log });
    }

    Ok(pipeline)
}
