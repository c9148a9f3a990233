use std::collections::BTreeMap;
use std::fmt;

/// Which pipeline stage a source compiles to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageKind {
    Vertex,
    Fragment,
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageKind::Vertex => f.write_str("vertex"),
            StageKind::Fragment => f.write_str("fragment"),
        }
    }
}

/// Compiler or linker output for a failed build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderDiagnostic {
    pub step: BuildStep,
    pub log: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStep {
    Compile(StageKind),
    Link,
}

impl ShaderDiagnostic {
    pub fn compile(kind: StageKind, log: impl Into<String>) -> Self {
        Self {
            step: BuildStep::Compile(kind),
            log: log.into(),
        }
    }

    pub fn link(log: impl Into<String>) -> Self {
        Self {
            step: BuildStep::Link,
            log: log.into(),
        }
    }
}

impl fmt::Display for ShaderDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.step {
            BuildStep::Compile(kind) => write!(f, "{kind} stage failed to compile:\n{}", self.log),
            BuildStep::Link => write!(f, "program failed to link:\n{}", self.log),
        }
    }
}

/// Value type of a named parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniformKind {
    Float,
    Vec3,
    Vec4,
}

/// Where a named parameter lives inside a program's parameter block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformSlot {
    pub offset: u32,
    pub kind: UniformKind,
}

/// Named parameters of one program, with the byte size of their block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniformTable {
    slots: BTreeMap<String, UniformSlot>,
    size: u32,
}

impl UniformTable {
    pub fn new(size: u32) -> Self {
        Self {
            slots: BTreeMap::new(),
            size,
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, slot: UniformSlot) {
        self.slots.insert(name.into(), slot);
    }

    pub fn get(&self, name: &str) -> Option<UniformSlot> {
        self.slots.get(name).copied()
    }

    /// Block size in bytes as declared by the shader.
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }
}

/// Compiles stages and links them into programs.
pub trait ShaderBackend {
    type Stage;
    type Program;

    fn compile(&mut self, kind: StageKind, label: &str, source: &str)
        -> Result<Self::Stage, ShaderDiagnostic>;

    /// Combine the shared vertex stage with a fragment stage. The parameter
    /// block is sized from `uniforms`.
    fn link(
        &mut self,
        label: &str,
        base: &Self::Stage,
        fragment: &Self::Stage,
        uniforms: &UniformTable,
    ) -> Result<Self::Program, ShaderDiagnostic>;

    /// Whether the stage declares and actually uses a global named `name`.
    fn uses_binding(&self, stage: &Self::Stage, name: &str) -> bool;

    /// Parameter block layout of a fragment stage.
    fn uniform_table(&self, stage: &Self::Stage) -> UniformTable;
}
