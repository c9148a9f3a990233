use tracing::{debug, info, warn};

use super::backend::{ShaderBackend, StageKind, UniformTable};
use super::builtin::PASS_THROUGH_FRAGMENT;
use super::params::{ParamBlock, ParamValue};
use crate::gpu::RendererError;

/// Name of the program synthesized when no variant links.
pub const DEFAULT_PROGRAM_NAME: &str = "default";

/// One linked variant.
pub struct ShaderProgram<S, P> {
    pub name: String,
    pub stage: S,
    pub program: P,
    pub uniforms: UniformTable,
    pub params: ParamBlock,
    /// The program samples the cube input, so it gets its own reflection target.
    pub needs_reflection_input: bool,
}

/// The shared vertex stage plus every variant that linked against it.
///
/// Programs are declared before the base stage so they are dropped first.
pub struct ShaderProgramSet<S, P> {
    programs: Vec<ShaderProgram<S, P>>,
    base: S,
    base_name: String,
}

impl<S, P> ShaderProgramSet<S, P> {
    /// Compile the shared vertex stage. Failure is fatal.
    pub fn build_base<B>(backend: &mut B, name: &str, source: &str) -> Result<Self, RendererError>
    where
        B: ShaderBackend<Stage = S, Program = P>,
    {
        let base = backend
            .compile(StageKind::Vertex, name, source)
            .map_err(|diag| {
                tracing::error!(shader = name, "base stage failed:\n{}", diag.log);
                RendererError::ShaderBuild {
                    name: name.to_string(),
                    log: diag.log,
                }
            })?;
        debug!(shader = name, "compiled base stage");
        Ok(Self {
            programs: Vec::new(),
            base,
            base_name: name.to_string(),
        })
    }

    /// Compile and link a fragment variant.
    ///
    /// Failures are logged with the full diagnostic and the variant is
    /// skipped. Returns whether it was added.
    pub fn add_variant<B>(
        &mut self,
        backend: &mut B,
        name: &str,
        source: &str,
        reflection_uniform: &str,
    ) -> bool
    where
        B: ShaderBackend<Stage = S, Program = P>,
    {
        let stage = match backend.compile(StageKind::Fragment, name, source) {
            Ok(stage) => stage,
            Err(diag) => {
                warn!(variant = name, base = %self.base_name, "skipping shader variant: {diag}");
                return false;
            }
        };

        let uniforms = backend.uniform_table(&stage);
        let program = match backend.link(name, &self.base, &stage, &uniforms) {
            Ok(program) => program,
            Err(diag) => {
                warn!(variant = name, base = %self.base_name, "skipping shader variant: {diag}");
                return false;
            }
        };

        let needs_reflection_input = backend.uses_binding(&stage, reflection_uniform);
        info!(
            variant = name,
            reflective = needs_reflection_input,
            parameters = uniforms.names().count(),
            "linked shader variant"
        );

        self.programs.push(ShaderProgram {
            name: name.to_string(),
            stage,
            program,
            params: ParamBlock::for_table(&uniforms),
            uniforms,
            needs_reflection_input,
        });
        true
    }

    /// Guarantee at least one program by adding the built-in pass-through
    /// when every variant failed.
    pub fn finalize<B>(&mut self, backend: &mut B) -> Result<(), RendererError>
    where
        B: ShaderBackend<Stage = S, Program = P>,
    {
        if !self.programs.is_empty() {
            return Ok(());
        }

        warn!("no shader variant linked, using the built-in pass-through program");
        if self.add_variant(backend, DEFAULT_PROGRAM_NAME, PASS_THROUGH_FRAGMENT, "") {
            Ok(())
        } else {
            Err(RendererError::ShaderBuild {
                name: DEFAULT_PROGRAM_NAME.to_string(),
                log: "built-in pass-through program failed to link".to_string(),
            })
        }
    }

    /// Set a color parameter on every program that declares it.
    /// Returns how many programs took the value.
    pub fn set_color_parameter(&mut self, name: &str, rgba: [f32; 4]) -> usize {
        self.write_parameter(name, ParamValue::Color(rgba))
    }

    /// Set a scalar parameter on every program that declares it.
    pub fn set_float_parameter(&mut self, name: &str, value: f32) -> usize {
        self.write_parameter(name, ParamValue::Float(value))
    }

    fn write_parameter(&mut self, name: &str, value: ParamValue) -> usize {
        let mut updated = 0;
        for program in &mut self.programs {
            if program.params.write(&program.uniforms, name, value) {
                updated += 1;
            }
        }
        debug!(parameter = name, programs = updated, "parameter set");
        updated
    }

    pub fn base(&self) -> &S {
        &self.base
    }

    pub fn get(&self, index: usize) -> Option<&ShaderProgram<S, P>> {
        self.programs.get(index)
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.programs.iter().map(|p| p.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShaderProgram<S, P>> {
        self.programs.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ShaderProgram<S, P>> {
        self.programs.iter_mut()
    }

    /// Release every program, then the base stage.
    pub fn destroy(self) {
        let Self {
            programs,
            base,
            base_name,
        } = self;
        let count = programs.len();
        drop(programs);
        drop(base);
        debug!(programs = count, base = %base_name, "shader programs released");
    }
}
