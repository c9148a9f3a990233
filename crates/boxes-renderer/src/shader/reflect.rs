//! WGSL validation and reflection through `naga`.
//!
//! Gives compiler diagnostics with source spans, the globals an entry
//! point actually touches, and the layout of the `Params` block.

use std::collections::BTreeSet;

use naga::valid::{Capabilities, ValidationFlags, Validator};

use super::backend::{StageKind, UniformKind, UniformSlot, UniformTable};
use super::PARAMS_GROUP;

/// What a validated stage exposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageReflection {
    pub entry_point: String,
    /// Named globals used by the entry point, including through calls.
    pub used_globals: BTreeSet<String>,
    pub uniforms: UniformTable,
}

/// Parse and validate `source`, then reflect its first entry point of `kind`.
///
/// The error string is the formatted diagnostic, ready to log.
pub fn reflect_stage(label: &str, source: &str, kind: StageKind) -> Result<StageReflection, String> {
    let module = naga::front::wgsl::parse_str(source).map_err(|e| e.emit_to_string(source))?;

    let info = Validator::new(ValidationFlags::all(), Capabilities::all())
        .validate(&module)
        .map_err(|e| e.emit_to_string(source))?;

    let wanted = match kind {
        StageKind::Vertex => naga::ShaderStage::Vertex,
        StageKind::Fragment => naga::ShaderStage::Fragment,
    };
    let (index, entry) = module
        .entry_points
        .iter()
        .enumerate()
        .find(|(_, ep)| ep.stage == wanted)
        .ok_or_else(|| format!("{label}: no @{kind} entry point"))?;

    let function_info = info.get_entry_point(index);
    let used_globals = module
        .global_variables
        .iter()
        .filter(|(handle, _)| !function_info[*handle].is_empty())
        .filter_map(|(_, var)| var.name.clone())
        .collect();

    Ok(StageReflection {
        entry_point: entry.name.clone(),
        used_globals,
        uniforms: params_table(&module),
    })
}

/// Layout of the uniform struct bound at `@group(1) @binding(0)`.
///
/// Members that are not `f32`, `vec3<f32>` or `vec4<f32>` are left out;
/// they keep their space in the block but cannot be set by name.
fn params_table(module: &naga::Module) -> UniformTable {
    let params = module.global_variables.iter().find(|(_, var)| {
        var.space == naga::AddressSpace::Uniform
            && var
                .binding
                .as_ref()
                .is_some_and(|b| b.group == PARAMS_GROUP && b.binding == 0)
    });
    let Some((_, var)) = params else {
        return UniformTable::default();
    };

    let naga::TypeInner::Struct { members, span } = &module.types[var.ty].inner else {
        return UniformTable::default();
    };

    let mut table = UniformTable::new(*span);
    for member in members {
        let Some(name) = member.name.as_deref() else {
            continue;
        };
        let kind = match module.types[member.ty].inner {
            naga::TypeInner::Scalar(scalar) if scalar == naga::Scalar::F32 => UniformKind::Float,
            naga::TypeInner::Vector {
                size: naga::VectorSize::Tri,
                scalar,
            } if scalar == naga::Scalar::F32 => UniformKind::Vec3,
            naga::TypeInner::Vector {
                size: naga::VectorSize::Quad,
                scalar,
            } if scalar == naga::Scalar::F32 => UniformKind::Vec4,
            _ => continue,
        };
        table.insert(
            name,
            UniformSlot {
                offset: member.offset,
                kind,
            },
        );
    }
    table
}
