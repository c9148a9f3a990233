use super::backend::{UniformKind, UniformTable};

/// Smallest parameter block bound for a program, even one without parameters.
pub const MIN_PARAMS_SIZE: u32 = 16;

/// CPU copy of a program's parameter block, uploaded when dirty.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamBlock {
    bytes: Vec<u8>,
    dirty: bool,
}

impl ParamBlock {
    /// A zeroed block large enough for `table`, rounded up to 16 bytes.
    pub fn for_table(table: &UniformTable) -> Self {
        Self {
            bytes: vec![0; params_size(table) as usize],
            dirty: true,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Return whether an upload is pending and clear the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    /// Write `values` at the named slot if its kind accepts them.
    ///
    /// Colors go into `Vec3` or `Vec4` slots, scalars into `Float` slots.
    pub(crate) fn write(&mut self, table: &UniformTable, name: &str, value: ParamValue) -> bool {
        let Some(slot) = table.get(name) else {
            return false;
        };
        let components: &[f32] = match (slot.kind, &value) {
            (UniformKind::Float, ParamValue::Float(v)) => std::slice::from_ref(v),
            (UniformKind::Vec3, ParamValue::Color(c)) => &c[..3],
            (UniformKind::Vec4, ParamValue::Color(c)) => &c[..],
            _ => {
                tracing::debug!(name, ?slot.kind, "parameter type mismatch, skipped");
                return false;
            }
        };
        let start = slot.offset as usize;
        let end = start + components.len() * 4;
        let Some(dst) = self.bytes.get_mut(start..end) else {
            return false;
        };
        dst.copy_from_slice(bytemuck::cast_slice(components));
        self.dirty = true;
        true
    }
}

/// A value sent to a named parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ParamValue {
    Float(f32),
    Color([f32; 4]),
}

/// GPU buffer size for a table's block.
pub fn params_size(table: &UniformTable) -> u32 {
    table.size().max(MIN_PARAMS_SIZE).div_ceil(16) * 16
}
