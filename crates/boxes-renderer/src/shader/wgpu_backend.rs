//! wgpu implementation of [`ShaderBackend`].
//!
//! Compilation runs WGSL through `naga` first for readable diagnostics and
//! reflection; module and pipeline creation then run inside a validation
//! error scope so wgpu-side failures come back as diagnostics instead of
//! device errors.

use std::borrow::Cow;

use super::backend::{ShaderBackend, ShaderDiagnostic, StageKind, UniformTable};
use super::params::{params_size, ParamBlock};
use super::program_set::ShaderProgramSet;
use super::reflect::{reflect_stage, StageReflection};
use crate::gpu::{DRAW_UNIFORMS_SIZE, CUBE_FORMAT, DEPTH_FORMAT};
use crate::mesh::BoxVertex;

/// Program set backed by real pipelines.
pub type GpuProgramSet = ShaderProgramSet<WgpuStage, WgpuProgram>;

/// Bind group layouts shared by every program, and the pipeline layout
/// built from them.
pub struct SceneLayouts {
    pub draw: wgpu::BindGroupLayout,
    pub params: wgpu::BindGroupLayout,
    pub material: wgpu::BindGroupLayout,
    pub cube: wgpu::BindGroupLayout,
    pub pipeline: wgpu::PipelineLayout,
}

impl SceneLayouts {
    pub fn new(device: &wgpu::Device) -> Self {
        let draw = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("draw uniforms layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: true,
                    min_binding_size: wgpu::BufferSize::new(DRAW_UNIFORMS_SIZE),
                },
                count: None,
            }],
        });

        let params = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("program params layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let material = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("material layout"),
            entries: &[
                texture_entry(0, wgpu::TextureViewDimension::D2),
                texture_entry(1, wgpu::TextureViewDimension::D3),
                sampler_entry(2),
            ],
        });

        let cube = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("cube input layout"),
            entries: &[
                texture_entry(0, wgpu::TextureViewDimension::Cube),
                sampler_entry(1),
            ],
        });

        let pipeline = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene pipeline layout"),
            bind_group_layouts: &[&draw, &params, &material, &cube],
            push_constant_ranges: &[],
        });

        Self {
            draw,
            params,
            material,
            cube,
            pipeline,
        }
    }
}

fn texture_entry(binding: u32, view_dimension: wgpu::TextureViewDimension) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Texture {
            sample_type: wgpu::TextureSampleType::Float { filterable: true },
            view_dimension,
            multisampled: false,
        },
        count: None,
    }
}

fn sampler_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
        count: None,
    }
}

/// A compiled WGSL module and what reflection found in it.
pub struct WgpuStage {
    pub module: wgpu::ShaderModule,
    pub reflection: StageReflection,
}

/// Pipelines for drawing a program to the window and into cube faces,
/// plus its parameter block on the GPU.
pub struct WgpuProgram {
    pub screen: wgpu::RenderPipeline,
    pub cube: wgpu::RenderPipeline,
    pub params_buffer: wgpu::Buffer,
    pub params_bind_group: wgpu::BindGroup,
}

impl WgpuProgram {
    /// Upload the parameter block if it changed since the last upload.
    pub fn sync_params(&self, queue: &wgpu::Queue, block: &mut ParamBlock) {
        if block.take_dirty() {
            queue.write_buffer(&self.params_buffer, 0, block.bytes());
        }
    }
}

pub struct WgpuShaderBackend<'a> {
    device: &'a wgpu::Device,
    layouts: &'a SceneLayouts,
    screen_format: wgpu::TextureFormat,
    cull_mode: Option<wgpu::Face>,
}

impl<'a> WgpuShaderBackend<'a> {
    pub fn new(device: &'a wgpu::Device, layouts: &'a SceneLayouts, screen_format: wgpu::TextureFormat) -> Self {
        Self {
            device,
            layouts,
            screen_format,
            cull_mode: Some(wgpu::Face::Back),
        }
    }

    /// Culling for programs linked from now on. The background is seen
    /// from inside, so it links with `None`.
    pub fn set_cull_mode(&mut self, cull_mode: Option<wgpu::Face>) {
        self.cull_mode = cull_mode;
    }

    fn pipeline(
        &self,
        label: &str,
        base: &WgpuStage,
        fragment: &WgpuStage,
        format: wgpu::TextureFormat,
        front_face: wgpu::FrontFace,
    ) -> wgpu::RenderPipeline {
        self.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(&self.layouts.pipeline),
            vertex: wgpu::VertexState {
                module: &base.module,
                entry_point: Some(&base.reflection.entry_point),
                buffers: &[BoxVertex::LAYOUT],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &fragment.module,
                entry_point: Some(&fragment.reflection.entry_point),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face,
                cull_mode: self.cull_mode,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        })
    }

    fn pop_scope(&self) -> Option<String> {
        pollster::block_on(self.device.pop_error_scope()).map(|e| e.to_string())
    }
}

impl ShaderBackend for WgpuShaderBackend<'_> {
    type Stage = WgpuStage;
    type Program = WgpuProgram;

    fn compile(&mut self, kind: StageKind, label: &str, source: &str) -> Result<WgpuStage, ShaderDiagnostic> {
        let reflection =
            reflect_stage(label, source, kind).map_err(|log| ShaderDiagnostic::compile(kind, log))?;

        self.device.push_error_scope(wgpu::ErrorFilter::Validation);
        let module = self.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Wgsl(Cow::Borrowed(source)),
        });
        if let Some(log) = self.pop_scope() {
            return Err(ShaderDiagnostic::compile(kind, log));
        }

        Ok(WgpuStage { module, reflection })
    }

    fn link(
        &mut self,
        label: &str,
        base: &WgpuStage,
        fragment: &WgpuStage,
        uniforms: &UniformTable,
    ) -> Result<WgpuProgram, ShaderDiagnostic> {
        self.device.push_error_scope(wgpu::ErrorFilter::Validation);
        let screen = self.pipeline(label, base, fragment, self.screen_format, wgpu::FrontFace::Ccw);
        // Cube projections flip y, which mirrors winding.
        let cube = self.pipeline(label, base, fragment, CUBE_FORMAT, wgpu::FrontFace::Cw);
        if let Some(log) = self.pop_scope() {
            return Err(ShaderDiagnostic::link(log));
        }

        let params_buffer = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: params_size(uniforms) as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let params_bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: &self.layouts.params,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: params_buffer.as_entire_binding(),
            }],
        });

        Ok(WgpuProgram {
            screen,
            cube,
            params_buffer,
            params_bind_group,
        })
    }

    fn uses_binding(&self, stage: &WgpuStage, name: &str) -> bool {
        stage.reflection.used_globals.contains(name)
    }

    fn uniform_table(&self, stage: &WgpuStage) -> UniformTable {
        stage.reflection.uniforms.clone()
    }
}
