use super::*;

// -----------------------------------------------------------------------------
// Fake backend: "sources" are plain text, failures are requested by marker.
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
struct FakeStage {
    source: String,
}

#[derive(Debug, Clone, PartialEq)]
struct FakeProgram {
    label: String,
    params_size: u32,
}

#[derive(Default)]
struct FakeBackend {
    compiled: usize,
    linked: usize,
}

impl ShaderBackend for FakeBackend {
    type Stage = FakeStage;
    type Program = FakeProgram;

    fn compile(&mut self, kind: StageKind, _label: &str, source: &str) -> Result<FakeStage, ShaderDiagnostic> {
        if source.contains("COMPILE_ERROR") {
            return Err(ShaderDiagnostic::compile(kind, "1:1: unexpected token"));
        }
        self.compiled += 1;
        Ok(FakeStage {
            source: source.to_string(),
        })
    }

    fn link(
        &mut self,
        label: &str,
        _base: &FakeStage,
        fragment: &FakeStage,
        uniforms: &UniformTable,
    ) -> Result<FakeProgram, ShaderDiagnostic> {
        if fragment.source.contains("LINK_ERROR") {
            return Err(ShaderDiagnostic::link("interface mismatch at location 3"));
        }
        self.linked += 1;
        Ok(FakeProgram {
            label: label.to_string(),
            params_size: params_size(uniforms),
        })
    }

    fn uses_binding(&self, stage: &FakeStage, name: &str) -> bool {
        !name.is_empty() && stage.source.contains(name)
    }

    // `param <name> <offset> <float|vec4>` lines declare parameters.
    fn uniform_table(&self, stage: &FakeStage) -> UniformTable {
        let slots: Vec<(&str, UniformSlot)> = stage
            .source
            .lines()
            .filter_map(|line| {
                let parts: Vec<&str> = line.split_whitespace().collect();
                let ["param", name, offset, kind] = parts.as_slice() else {
                    return None;
                };
                let kind = if *kind == "float" {
                    UniformKind::Float
                } else {
                    UniformKind::Vec4
                };
                Some((*name, UniformSlot {
                    offset: offset.parse().ok()?,
                    kind,
                }))
            })
            .collect();

        let size = slots.iter().map(|(_, s)| s.offset + 16).max().unwrap_or(0);
        let mut table = UniformTable::new(size);
        for (name, slot) in slots {
            table.insert(name, slot);
        }
        table
    }
}

type FakeSet = ShaderProgramSet<FakeStage, FakeProgram>;

fn base_set(backend: &mut FakeBackend) -> FakeSet {
    FakeSet::build_base(backend, "basic.wgsl", "vertex").unwrap()
}

#[test]
fn base_stage_failure_is_fatal() {
    let mut backend = FakeBackend::default();
    let err = FakeSet::build_base(&mut backend, "basic.wgsl", "COMPILE_ERROR").err().unwrap();
    match err {
        crate::gpu::RendererError::ShaderBuild { name, log } => {
            assert_eq!(name, "basic.wgsl");
            assert!(log.contains("unexpected token"));
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn broken_variants_are_skipped() {
    let mut backend = FakeBackend::default();
    let mut set = base_set(&mut backend);
    assert!(set.add_variant(&mut backend, "glass", "uses env", "env"));
    assert!(!set.add_variant(&mut backend, "broken", "COMPILE_ERROR", "env"));
    assert!(!set.add_variant(&mut backend, "mismatch", "LINK_ERROR", "env"));
    assert!(set.add_variant(&mut backend, "wood", "plain", "env"));
    set.finalize(&mut backend).unwrap();

    assert_eq!(set.names().collect::<Vec<_>>(), ["glass", "wood"]);
}

#[test]
fn all_variants_failing_yields_single_default() {
    let mut backend = FakeBackend::default();
    let mut set = base_set(&mut backend);
    for name in ["a", "b", "c"] {
        set.add_variant(&mut backend, name, "LINK_ERROR", "env");
    }
    assert!(set.is_empty());
    set.finalize(&mut backend).unwrap();

    assert_eq!(set.len(), 1);
    let program = set.get(0).unwrap();
    assert_eq!(program.name, DEFAULT_PROGRAM_NAME);
    assert_eq!(program.stage.source, PASS_THROUGH_FRAGMENT);
    assert!(!program.needs_reflection_input);
}

#[test]
fn finalize_keeps_existing_programs() {
    let mut backend = FakeBackend::default();
    let mut set = base_set(&mut backend);
    set.add_variant(&mut backend, "glass", "plain", "env");
    set.finalize(&mut backend).unwrap();
    set.finalize(&mut backend).unwrap();
    assert_eq!(set.len(), 1);
    assert_eq!(set.get(0).unwrap().name, "glass");
}

#[test]
fn reflection_input_detected_by_name() {
    let mut backend = FakeBackend::default();
    let mut set = base_set(&mut backend);
    set.add_variant(&mut backend, "mirror", "samples env here", "env");
    set.add_variant(&mut backend, "matte", "no cube", "env");
    assert!(set.get(0).unwrap().needs_reflection_input);
    assert!(!set.get(1).unwrap().needs_reflection_input);
}

#[test]
fn parameters_reach_only_declaring_programs() {
    let mut backend = FakeBackend::default();
    let mut set = base_set(&mut backend);
    set.add_variant(&mut backend, "a", "param baseColor 0 vec4\nparam noiseScale 16 float", "env");
    set.add_variant(&mut backend, "b", "param baseColor 0 vec4", "env");
    set.add_variant(&mut backend, "c", "nothing", "env");

    assert_eq!(set.set_color_parameter("baseColor", [1.0, 0.5, 0.0, 1.0]), 2);
    assert_eq!(set.set_float_parameter("noiseScale", 3.0), 1);
    assert_eq!(set.set_float_parameter("unknown", 3.0), 0);
    // Wrong kind is ignored.
    assert_eq!(set.set_float_parameter("baseColor", 3.0), 0);

    assert_eq!(set.get(0).unwrap().program.params_size, 32);
    assert_eq!(set.get(2).unwrap().program.params_size, MIN_PARAMS_SIZE);
}

#[test]
fn destroy_consumes_the_set() {
    let mut backend = FakeBackend::default();
    let mut set = base_set(&mut backend);
    set.add_variant(&mut backend, "a", "plain", "env");
    assert_eq!(backend.compiled, 2);
    assert_eq!(backend.linked, 1);
    set.destroy();
}

// -----------------------------------------------------------------------------
// naga reflection of the real sources
// -----------------------------------------------------------------------------

const BASIC: &str = include_str!("../../../../assets/shaders/basic.wgsl");
const GLASS: &str = include_str!("../../../../assets/shaders/glass.wgsl");
const GRANITE: &str = include_str!("../../../../assets/shaders/granite.wgsl");
const MARBLE: &str = include_str!("../../../../assets/shaders/marble.wgsl");
const REFLECTION: &str = include_str!("../../../../assets/shaders/reflection.wgsl");
const WOOD: &str = include_str!("../../../../assets/shaders/wood.wgsl");

#[test]
fn base_stage_reflects_vertex_entry() {
    let r = reflect_stage("basic.wgsl", BASIC, StageKind::Vertex).unwrap();
    assert_eq!(r.entry_point, "vs_main");
    assert!(r.used_globals.contains("draw"));
    assert!(r.uniforms.is_empty());
}

#[test]
fn shipped_variants_validate() {
    for (name, source) in [
        ("glass", GLASS),
        ("granite", GRANITE),
        ("marble", MARBLE),
        ("reflection", REFLECTION),
        ("wood", WOOD),
        ("pass_through", PASS_THROUGH_FRAGMENT),
        ("environment", ENVIRONMENT_FRAGMENT),
    ] {
        let r = reflect_stage(name, source, StageKind::Fragment)
            .unwrap_or_else(|e| panic!("{name} failed:\n{e}"));
        assert_eq!(r.entry_point, "fs_main");
    }
}

#[test]
fn reflective_variants_use_env() {
    let uses_env = |src| {
        reflect_stage("v", src, StageKind::Fragment)
            .unwrap()
            .used_globals
            .contains("env")
    };
    assert!(uses_env(GLASS));
    assert!(uses_env(MARBLE));
    assert!(uses_env(REFLECTION));
    assert!(!uses_env(GRANITE));
    assert!(!uses_env(WOOD));
    assert!(!uses_env(PASS_THROUGH_FRAGMENT));
}

#[test]
fn declared_but_unused_global_does_not_count() {
    let src = r#"
@group(3) @binding(0) var env: texture_cube<f32>;
@group(3) @binding(1) var env_sampler: sampler;

@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return vec4<f32>(1.0);
}
"#;
    let r = reflect_stage("unused", src, StageKind::Fragment).unwrap();
    assert!(!r.used_globals.contains("env"));
}

#[test]
fn use_through_helper_function_counts() {
    let src = r#"
@group(3) @binding(0) var env: texture_cube<f32>;
@group(3) @binding(1) var env_sampler: sampler;

fn look(dir: vec3<f32>) -> vec4<f32> {
    return textureSample(env, env_sampler, dir);
}

@fragment
fn fs_main(@location(1) dir: vec3<f32>) -> @location(0) vec4<f32> {
    return look(dir);
}
"#;
    let r = reflect_stage("helper", src, StageKind::Fragment).unwrap();
    assert!(r.used_globals.contains("env"));
}

#[test]
fn params_table_from_marble() {
    let r = reflect_stage("marble", MARBLE, StageKind::Fragment).unwrap();
    let t = &r.uniforms;
    assert_eq!(
        t.get("baseColor"),
        Some(UniformSlot {
            offset: 0,
            kind: UniformKind::Vec4
        })
    );
    assert_eq!(t.get("specularColor").unwrap().offset, 16);
    assert_eq!(
        t.get("noiseScale"),
        Some(UniformSlot {
            offset: 32,
            kind: UniformKind::Float
        })
    );
    assert_eq!(t.get("reflectionFactor").unwrap().offset, 36);
    assert_eq!(t.size(), 48);
}

#[test]
fn syntax_error_has_diagnostic_text() {
    let err = reflect_stage("bad", "fn fs_main( {", StageKind::Fragment).unwrap_err();
    assert!(err.contains("error"), "{err}");
}

#[test]
fn missing_entry_point_is_reported() {
    let err = reflect_stage("vertex-only", BASIC, StageKind::Fragment).unwrap_err();
    assert!(err.contains("no @fragment entry point"));
}

#[test]
fn diagnostic_display_names_step() {
    let d = ShaderDiagnostic::compile(StageKind::Fragment, "oops");
    assert!(d.to_string().starts_with("fragment stage failed to compile"));
    let d = ShaderDiagnostic::link("bad interface");
    assert!(d.to_string().contains("failed to link"));
}
