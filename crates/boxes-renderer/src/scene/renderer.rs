use std::time::Instant;

use boxes_common::Action;
use boxes_config::BoxesConfig;
use tracing::{debug, info};

use super::assets::SceneAssets;
use super::camera::{main_projection, main_view};
use super::compose::{CubeInput, DrawProgram, ScenePose};
use super::matrices::Matrices;
use super::plan::{plan_frame, PassTarget, PlannedPass};
use super::resources::{DepthTarget, SceneResources};
use super::state::SceneState;
use crate::gpu::{DrawUniforms, GpuContext, PhysicalSize, RendererError, UniformArena};
use crate::reflection::{Occupant, ReflectionTarget};
use crate::shader::{
    GpuProgramSet, SceneLayouts, ShaderBackend, StageKind, WgpuProgram, WgpuShaderBackend, WgpuStage,
    CUBE_GROUP, DRAW_GROUP, ENVIRONMENT_FRAGMENT, MATERIAL_GROUP, PARAMS_GROUP,
};

const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Program drawing the sky box. Fields drop in order, program first.
struct EnvironmentProgram {
    program: WgpuProgram,
    _stage: WgpuStage,
}

/// Owns every GPU object of the scene and draws it each frame.
///
/// Built with [`create`](Self::create) once a device exists and torn down
/// with [`destroy`](Self::destroy).
pub struct SceneRenderer {
    state: SceneState,
    matrices: Matrices,
    environment: EnvironmentProgram,
    programs: GpuProgramSet,
    ring_targets: Vec<Option<ReflectionTarget>>,
    main_target: ReflectionTarget,
    resources: SceneResources,
    arena: UniformArena,
    depth: DepthTarget,
    layouts: SceneLayouts,
    size: PhysicalSize,
}

impl SceneRenderer {
    /// Build programs, textures and reflection targets.
    ///
    /// Fails only when the shared vertex stage or a built-in program does
    /// not build. Broken variants and textures are skipped.
    pub fn create(gpu: &GpuContext, assets: &SceneAssets, config: &BoxesConfig) -> Result<Self, RendererError> {
        let device = &gpu.device;
        let layouts = SceneLayouts::new(device);

        let (programs, environment) = {
            let mut backend = WgpuShaderBackend::new(device, &layouts, gpu.format());
            let mut programs = GpuProgramSet::build_base(&mut backend, &assets.base.name, &assets.base.source)?;
            for variant in &assets.variants {
                programs.add_variant(&mut backend, &variant.name, &variant.source, &config.assets.reflection_uniform);
            }
            programs.finalize(&mut backend)?;

            backend.set_cull_mode(None);
            let environment = build_environment(&mut backend, &programs)?;
            (programs, environment)
        };

        let max_extent = device.limits().max_texture_dimension_2d;
        let textures = assets.usable_textures(max_extent);
        let resources = SceneResources::new(
            device,
            &gpu.queue,
            &layouts,
            &textures,
            &assets.usable_environment(max_extent),
            &assets.usable_noise(),
        );

        let ring_targets: Vec<Option<ReflectionTarget>> = programs
            .iter()
            .enumerate()
            .map(|(i, program)| {
                program.needs_reflection_input.then(|| {
                    ReflectionTarget::new(
                        device,
                        &layouts.cube,
                        &resources.cube_sampler,
                        Occupant::Ring(i),
                        config.reflections.ring_resolution,
                    )
                })
            })
            .collect();
        let main_target = ReflectionTarget::new(
            device,
            &layouts.cube,
            &resources.cube_sampler,
            Occupant::Main,
            config.reflections.main_resolution,
        );

        let state = SceneState::new(config, programs.len(), resources.texture_count());
        let arena = UniformArena::new(device, &layouts.draw, gpu.uniform_alignment());
        let depth = DepthTarget::new(device, gpu.size.width, gpu.size.height);

        info!(
            programs = programs.len(),
            reflective = ring_targets.iter().flatten().count(),
            textures = resources.texture_count(),
            "scene created"
        );

        Ok(Self {
            state,
            matrices: Matrices::default(),
            environment,
            programs,
            ring_targets,
            main_target,
            resources,
            arena,
            depth,
            layouts,
            size: gpu.size,
        })
    }

    pub fn state(&self) -> &SceneState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SceneState {
        &mut self.state
    }

    pub fn program_names(&self) -> impl Iterator<Item = &str> {
        self.programs.names()
    }

    /// Route a host notification. Returns whether anything changed.
    pub fn apply(&mut self, action: &Action) -> bool {
        match action {
            Action::SetColorParameter { name, color } => {
                self.programs.set_color_parameter(name, color.to_rgba_f32()) > 0
            }
            Action::SetFloatParameter { name, value } => self.programs.set_float_parameter(name, *value) > 0,
            other => self.state.apply(other),
        }
    }

    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.size = PhysicalSize {
            width: width.max(1),
            height: height.max(1),
        };
        if !self.depth.matches(width, height) {
            self.depth = DepthTarget::new(device, width, height);
        }
    }

    /// Record the whole frame into `encoder`, drawing the window pass into
    /// `view`.
    pub fn encode(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
    ) {
        let now = Instant::now();
        let pose = self.pose(now);
        let main = Matrices {
            projection: main_projection(self.state.field_of_view(), self.size.aspect()),
            view: main_view(self.state.camera.rotation_at(now), self.state.zoom()),
        };

        let frame = self.state.frame();
        self.arena.clear();
        let arena = &mut self.arena;
        let passes = plan_frame(
            &pose,
            &mut self.state.reflections,
            frame,
            &mut self.matrices,
            main,
            |item, projection| arena.push(&DrawUniforms::new(item.model, item.view, projection)),
        );

        self.arena.upload(device, queue, &self.layouts.draw);
        for program in self.programs.iter_mut() {
            program.program.sync_params(queue, &mut program.params);
        }

        for pass in &passes {
            self.encode_pass(encoder, view, pass);
        }
    }

    /// Count a frame as shown. Call after its commands were submitted.
    pub fn finish_frame(&mut self) {
        self.state.advance_frame();
    }

    /// Release programs, then the shared stage, then targets and textures.
    pub fn destroy(self) {
        let Self {
            environment,
            programs,
            ring_targets,
            main_target,
            resources,
            ..
        } = self;
        drop(environment);
        programs.destroy();
        drop(ring_targets);
        drop(main_target);
        drop(resources);
        info!("scene destroyed");
    }

    fn pose(&self, now: Instant) -> ScenePose {
        ScenePose {
            central_rotation: self.state.central.rotation_at(now),
            ring_rotation: self.state.ring.rotation_at(now),
            ring: self.state.ring_layout(),
            background_scale: self.state.background_scale(),
            current_shader: self.state.current_shader(),
            reflections: self.state.reflections_enabled(),
            ring_targets: self.ring_targets.iter().map(Option::is_some).collect(),
        }
    }

    fn encode_pass(&self, encoder: &mut wgpu::CommandEncoder, window: &wgpu::TextureView, pass: &PlannedPass) {
        let materials = &self.resources.materials;
        let Some(material) = materials.get(self.state.current_texture()).or(materials.first()) else {
            return;
        };
        let (color, depth, to_cube) = match pass.target {
            PassTarget::Window => (window, self.depth.view(), false),
            PassTarget::Face(occupant, face) => {
                let Some(target) = self.target(occupant) else {
                    debug!(?occupant, "no reflection target, skipping face");
                    return;
                };
                (target.face_view(face), target.depth_view(), true)
            }
        };

        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("boxes scene pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: color,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: depth,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        rpass.set_vertex_buffer(0, self.resources.mesh.vertex_buffer.slice(..));
        rpass.set_bind_group(MATERIAL_GROUP, material, &[]);

        for draw in &pass.draws {
            let Some(program) = self.program(draw.program) else {
                continue;
            };
            rpass.set_pipeline(if to_cube { &program.cube } else { &program.screen });
            rpass.set_bind_group(DRAW_GROUP, self.arena.bind_group(), &[draw.slot]);
            rpass.set_bind_group(PARAMS_GROUP, &program.params_bind_group, &[]);
            rpass.set_bind_group(CUBE_GROUP, self.cube_input(draw.cube), &[]);
            rpass.draw(0..self.resources.mesh.vertex_count, 0..1);
        }
    }

    fn program(&self, program: DrawProgram) -> Option<&WgpuProgram> {
        match program {
            DrawProgram::Environment => Some(&self.environment.program),
            DrawProgram::Variant(i) => self.programs.get(i).map(|p| &p.program),
        }
    }

    fn target(&self, occupant: Occupant) -> Option<&ReflectionTarget> {
        match occupant {
            Occupant::Ring(i) => self.ring_targets.get(i).and_then(Option::as_ref),
            Occupant::Main => Some(&self.main_target),
        }
    }

    fn cube_input(&self, cube: CubeInput) -> &wgpu::BindGroup {
        match cube {
            CubeInput::Environment => &self.resources.environment,
            CubeInput::Target(occupant) => self
                .target(occupant)
                .map(ReflectionTarget::bind_group)
                .unwrap_or(&self.resources.environment),
        }
    }
}

fn build_environment(
    backend: &mut WgpuShaderBackend<'_>,
    programs: &GpuProgramSet,
) -> Result<EnvironmentProgram, RendererError> {
    let build_error = |log: String| RendererError::ShaderBuild {
        name: "environment".to_string(),
        log,
    };
    let stage = backend
        .compile(StageKind::Fragment, "environment", ENVIRONMENT_FRAGMENT)
        .map_err(|d| build_error(d.log))?;
    let uniforms = backend.uniform_table(&stage);
    let program = backend
        .link("environment", programs.base(), &stage, &uniforms)
        .map_err(|d| build_error(d.log))?;
    Ok(EnvironmentProgram { program, _stage: stage })
}
