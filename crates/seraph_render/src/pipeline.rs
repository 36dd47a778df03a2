//! # WGPU Program Loader
//!
//! Reference [`ProgramLoader`] backed by a real device. It composes the
//! WGSL for a shader key, compiles it, and wraps the result in a
//! fullscreen post pipeline that reads the scene color and depth
//! attachments produced earlier in the frame.
//!
//! The host owns the frame graph; this module only answers "give me the
//! pipeline for this program id" plus the small resource chores around
//! it: the per-field uniform buffer, the scene sampler and the bind
//! group tying a frame's attachments to a program. Recording a pass is
//! three vertices with no vertex buffer:
//!
//! ```text
//! pass.set_pipeline(program.pipeline());
//! pass.set_bind_group(0, &bind_group, &[]);
//! pass.draw(0..3, 0..1);
//! ```

use std::sync::Arc;

use crate::error::{RenderError, RenderResult};
use crate::registry::FieldId;
use crate::selector::{ProgramId, ProgramLoader, ShaderKey};
use crate::shaders;
use crate::uniform::FieldUniforms;

/// Render target format when HDR output is enabled.
pub const HDR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;

/// Render target format when HDR output is disabled.
pub const LDR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

/// Picks the output format for the current HDR setting.
#[must_use]
pub fn target_format(hdr: bool) -> wgpu::TextureFormat {
    if hdr {
        HDR_FORMAT
    } else {
        LDR_FORMAT
    }
}

/// Composed WGSL for `key`, or the error the cache expects when the
/// family renders without a program.
fn composed_source(key: ShaderKey) -> RenderResult<String> {
    shaders::compose(key).ok_or_else(|| RenderError::MissingShaderBody(key.describe()))
}

/// One compiled field program: the pipeline plus the layout needed to
/// bind a frame's resources to it.
pub struct FieldProgram {
    id: ProgramId,
    pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    format: wgpu::TextureFormat,
}

impl FieldProgram {
    /// Identity this program was compiled under.
    #[must_use]
    pub fn id(&self) -> &ProgramId {
        &self.id
    }

    /// The compiled fullscreen pipeline.
    #[must_use]
    pub fn pipeline(&self) -> &wgpu::RenderPipeline {
        &self.pipeline
    }

    /// Color target format the pipeline was compiled against. The pass
    /// output view must match or the draw is rejected.
    #[must_use]
    pub fn target_format(&self) -> wgpu::TextureFormat {
        self.format
    }

    /// Binds one frame's resources to this program.
    ///
    /// `scene_color` and `scene_depth` are the attachments rendered
    /// before the field pass; `uniforms` is the buffer from
    /// [`create_uniform_buffer`]. Rebuild the group whenever any of the
    /// views change (resize, HDR flip), not per frame.
    #[must_use]
    pub fn create_bind_group(
        &self,
        device: &wgpu::Device,
        uniforms: &wgpu::Buffer,
        scene_color: &wgpu::TextureView,
        scene_depth: &wgpu::TextureView,
        scene_sampler: &wgpu::Sampler,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(self.id.as_str()),
            layout: &self.bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniforms.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(scene_color),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::TextureView(scene_depth),
                },
                wgpu::BindGroupEntry {
                    binding: 3,
                    resource: wgpu::BindingResource::Sampler(scene_sampler),
                },
            ],
        })
    }
}

/// Creates the 800-byte uniform buffer backing one field's pass.
#[must_use]
pub fn create_uniform_buffer(device: &wgpu::Device, field: FieldId) -> wgpu::Buffer {
    let label = format!("field {} uniforms", field.raw());
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(&label),
        size: FieldUniforms::SIZE as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

/// Uploads a packed block into a buffer from [`create_uniform_buffer`].
pub fn upload_uniforms(queue: &wgpu::Queue, buffer: &wgpu::Buffer, uniforms: &FieldUniforms) {
    queue.write_buffer(buffer, 0, uniforms.as_bytes());
}

/// Sampler for the scene color read. Depth is fetched with
/// `textureLoad`, so this never touches the depth attachment.
#[must_use]
pub fn create_scene_sampler(device: &wgpu::Device) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("field scene sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    })
}

/// [`ProgramLoader`] that compiles composed WGSL on a wgpu device.
pub struct WgpuProgramLoader {
    device: Arc<wgpu::Device>,
}

impl WgpuProgramLoader {
    /// Wraps a device. The loader is cheap to clone around; programs it
    /// produces stay valid as long as the device does.
    #[must_use]
    pub fn new(device: Arc<wgpu::Device>) -> Self {
        Self { device }
    }
}

impl ProgramLoader for WgpuProgramLoader {
    type Program = FieldProgram;

    fn load(&self, id: &ProgramId, key: ShaderKey, hdr: bool) -> RenderResult<FieldProgram> {
        let source = composed_source(key)?;
        let format = target_format(hdr);

        // Scope the whole build so naga and pipeline validation both
        // land in one recoverable error instead of the device's global
        // error handler.
        self.device.push_error_scope(wgpu::ErrorFilter::Validation);

        let module = self.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(id.as_str()),
            source: wgpu::ShaderSource::Wgsl(source.into()),
        });

        let bind_group_layout =
            self.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("field post bind layout"),
                entries: &[
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: wgpu::BufferSize::new(FieldUniforms::SIZE as u64),
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            sample_type: wgpu::TextureSampleType::Float { filterable: true },
                            view_dimension: wgpu::TextureViewDimension::D2,
                            multisampled: false,
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 2,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            sample_type: wgpu::TextureSampleType::Depth,
                            view_dimension: wgpu::TextureViewDimension::D2,
                            multisampled: false,
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 3,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                        count: None,
                    },
                ],
            });

        let layout = self.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("field post pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = self.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(id.as_str()),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &module,
                entry_point: "vs_main",
                buffers: &[],
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &module,
                entry_point: "fs_main",
                // The shader composites scene and effect itself, so the
                // target is written straight with no blend state.
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            multiview: None,
        });

        if let Some(error) = pollster::block_on(self.device.pop_error_scope()) {
            return Err(RenderError::ProgramLoad {
                program_id: id.to_string(),
                reason: error.to_string(),
            });
        }

        Ok(FieldProgram {
            id: id.clone(),
            pipeline,
            bind_group_layout,
            format,
        })
    }
}
