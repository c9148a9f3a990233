//! Per-draw uniforms and the arena that holds a whole frame of them.
//!
//! Every draw of every pass writes one `DrawUniforms` slot. Slots are
//! collected on the CPU while the frame is planned, uploaded with a single
//! `write_buffer`, and bound at group 0 through a dynamic offset.

use glam::Mat4;

/// GPU-side block matching the WGSL `DrawUniforms` struct.
///
/// Layout: 5 × mat4x4<f32> = 320 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DrawUniforms {
    pub model: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub inv_view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    /// Inverse transpose of `view * model`, for normals under non-uniform scale.
    pub normal_matrix: [[f32; 4]; 4],
}

impl DrawUniforms {
    pub fn new(model: Mat4, view: Mat4, projection: Mat4) -> Self {
        let normal = (view * model).inverse().transpose();
        Self {
            model: model.to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            inv_view: view.inverse().to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            normal_matrix: normal.to_cols_array_2d(),
        }
    }
}

/// Size of one `DrawUniforms` block in bytes.
pub const DRAW_UNIFORMS_SIZE: u64 = std::mem::size_of::<DrawUniforms>() as u64;

/// Round `size` up to the next multiple of `alignment`.
pub fn align_up(size: u64, alignment: u64) -> u64 {
    if alignment == 0 {
        return size;
    }
    size.div_ceil(alignment) * alignment
}

/// Growable uniform buffer addressed by slot index.
pub struct UniformArena {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    stride: u64,
    capacity: u32,
    staging: Vec<u8>,
}

impl UniformArena {
    /// Initial number of slots; grows by doubling.
    const INITIAL_SLOTS: u32 = 256;

    pub fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, alignment: u32) -> Self {
        let stride = align_up(DRAW_UNIFORMS_SIZE, alignment as u64);
        let (buffer, bind_group) = Self::allocate(device, layout, stride, Self::INITIAL_SLOTS);
        Self {
            buffer,
            bind_group,
            stride,
            capacity: Self::INITIAL_SLOTS,
            staging: Vec::new(),
        }
    }

    /// Forget the previous frame's slots.
    pub fn clear(&mut self) {
        self.staging.clear();
    }

    /// Append a slot and return its dynamic offset.
    pub fn push(&mut self, uniforms: &DrawUniforms) -> u32 {
        let offset = self.staging.len();
        self.staging.extend_from_slice(bytemuck::bytes_of(uniforms));
        self.staging.resize(offset + self.stride as usize, 0);
        offset as u32
    }

    /// Number of slots written since the last `clear`.
    pub fn len(&self) -> u32 {
        (self.staging.len() as u64 / self.stride) as u32
    }

    pub fn is_empty(&self) -> bool {
        self.staging.is_empty()
    }

    /// Upload staged slots, reallocating the buffer if the frame outgrew it.
    pub fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, layout: &wgpu::BindGroupLayout) {
        let needed = self.len();
        if needed > self.capacity {
            let capacity = needed.next_power_of_two();
            tracing::debug!(from = self.capacity, to = capacity, "growing uniform arena");
            let (buffer, bind_group) = Self::allocate(device, layout, self.stride, capacity);
            self.buffer = buffer;
            self.bind_group = bind_group;
            self.capacity = capacity;
        }
        if !self.staging.is_empty() {
            queue.write_buffer(&self.buffer, 0, &self.staging);
        }
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }

    fn allocate(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        stride: u64,
        slots: u32,
    ) -> (wgpu::Buffer, wgpu::BindGroup) {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("draw uniform arena"),
            size: stride * slots as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("draw uniform bind group"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &buffer,
                    offset: 0,
                    size: wgpu::BufferSize::new(DRAW_UNIFORMS_SIZE),
                }),
            }],
        });
        (buffer, bind_group)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Quat, Vec3};

    #[test]
    fn draw_uniforms_size_is_320_bytes() {
        assert_eq!(DRAW_UNIFORMS_SIZE, 320);
    }

    #[test]
    fn align_up_rounds_to_alignment() {
        assert_eq!(align_up(320, 256), 512);
        assert_eq!(align_up(256, 256), 256);
        assert_eq!(align_up(1, 16), 16);
        assert_eq!(align_up(7, 0), 7);
    }

    #[test]
    fn inv_view_inverts_view() {
        let view = Mat4::from_translation(Vec3::new(0.0, 0.0, -3.0))
            * Mat4::from_quat(Quat::from_rotation_y(0.4));
        let u = DrawUniforms::new(Mat4::IDENTITY, view, Mat4::IDENTITY);
        let product = Mat4::from_cols_array_2d(&u.inv_view) * view;
        assert!(product.abs_diff_eq(Mat4::IDENTITY, 1e-5));
    }

    #[test]
    fn normal_matrix_undoes_non_uniform_scale() {
        let model = Mat4::from_scale(Vec3::new(0.3, 0.6, 0.6));
        let u = DrawUniforms::new(model, Mat4::IDENTITY, Mat4::IDENTITY);
        let n = Mat4::from_cols_array_2d(&u.normal_matrix);
        let scaled = n.transform_vector3(Vec3::X);
        assert!((scaled.x - 1.0 / 0.3).abs() < 1e-4);
    }
}
