use super::{CubeFace, Occupant};
use crate::gpu::{CUBE_FORMAT, DEPTH_FORMAT};

/// A cube texture one object's reflection is rendered into, with a view
/// per face for rendering and a cube view bound for sampling.
pub struct ReflectionTarget {
    occupant: Occupant,
    resolution: u32,
    _texture: wgpu::Texture,
    face_views: Vec<wgpu::TextureView>,
    depth_view: wgpu::TextureView,
    bind_group: wgpu::BindGroup,
}

impl ReflectionTarget {
    /// `resolution` is clamped to what the device can render.
    pub fn new(
        device: &wgpu::Device,
        cube_layout: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        occupant: Occupant,
        resolution: u32,
    ) -> Self {
        let resolution = clamp_resolution(resolution, device.limits().max_texture_dimension_2d);
        let label = format!("reflection target {occupant:?}");
        let extent = wgpu::Extent3d {
            width: resolution,
            height: resolution,
            depth_or_array_layers: 6,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(&label),
            size: extent,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: CUBE_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });

        let face_views = CubeFace::ALL
            .iter()
            .map(|face| {
                texture.create_view(&wgpu::TextureViewDescriptor {
                    label: Some(&label),
                    dimension: Some(wgpu::TextureViewDimension::D2),
                    base_array_layer: face.layer(),
                    array_layer_count: Some(1),
                    ..Default::default()
                })
            })
            .collect();

        // Faces render one after another, so one depth buffer serves all six.
        let depth = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(&label),
            size: wgpu::Extent3d {
                depth_or_array_layers: 1,
                ..extent
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let depth_view = depth.create_view(&wgpu::TextureViewDescriptor::default());

        let cube_view = texture.create_view(&wgpu::TextureViewDescriptor {
            label: Some(&label),
            dimension: Some(wgpu::TextureViewDimension::Cube),
            ..Default::default()
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&label),
            layout: cube_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&cube_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        });

        tracing::debug!(?occupant, resolution, "created reflection target");

        Self {
            occupant,
            resolution,
            _texture: texture,
            face_views,
            depth_view,
            bind_group,
        }
    }

    pub fn occupant(&self) -> Occupant {
        self.occupant
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    pub fn face_view(&self, face: CubeFace) -> &wgpu::TextureView {
        &self.face_views[face.layer() as usize]
    }

    pub fn depth_view(&self) -> &wgpu::TextureView {
        &self.depth_view
    }

    /// Cube input bind group for objects sampling this target.
    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}

/// Face edge length within `1..=max_extent`.
fn clamp_resolution(requested: u32, max_extent: u32) -> u32 {
    let clamped = requested.clamp(1, max_extent.max(1));
    if clamped != requested {
        tracing::warn!(requested, clamped, "reflection resolution out of range, clamping");
    }
    clamped
}
