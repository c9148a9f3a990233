//! Box mesh vertex type and buffer layout.

/// A single vertex of the rounded box.
///
/// Layout: position(vec3) + normal(vec3) + texcoord(vec2) = 32 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BoxVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub texcoord: [f32; 2],
}

impl BoxVertex {
    /// wgpu vertex buffer layout for `BoxVertex`.
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<BoxVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &wgpu::vertex_attr_array![
            0 => Float32x3,
            1 => Float32x3,
            2 => Float32x2,
        ],
    };
}

/// Shape of the generated box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxShape {
    /// Radius of the rounded edges and corners.
    pub corner_radius: f32,
    /// Edge length of the box.
    pub size: f32,
    /// Grid cells along each face edge.
    pub subdivisions: u32,
}

impl Default for BoxShape {
    fn default() -> Self {
        Self {
            corner_radius: 0.25,
            size: 1.0,
            subdivisions: 10,
        }
    }
}
