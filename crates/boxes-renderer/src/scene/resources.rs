//! GPU copies of the scene assets and the bind groups that expose them.

use wgpu::util::DeviceExt;

use super::assets::{CubeFaces, NoiseVolume, TextureData};
use crate::gpu::{CUBE_FORMAT, DEPTH_FORMAT};
use crate::mesh::{generate_rounded_box, BoxShape};
use crate::shader::SceneLayouts;

/// The rounded box every object is drawn with.
pub struct BoxMesh {
    pub vertex_buffer: wgpu::Buffer,
    pub vertex_count: u32,
}

impl BoxMesh {
    pub fn new(device: &wgpu::Device) -> Self {
        let vertices = generate_rounded_box(BoxShape::default());
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("rounded box vertices"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        Self {
            vertex_buffer,
            vertex_count: vertices.len() as u32,
        }
    }
}

/// Depth attachment for the window pass.
pub struct DepthTarget {
    view: wgpu::TextureView,
    width: u32,
    height: u32,
}

impl DepthTarget {
    pub fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("window depth"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        Self {
            view: texture.create_view(&wgpu::TextureViewDescriptor::default()),
            width,
            height,
        }
    }

    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    pub fn matches(&self, width: u32, height: u32) -> bool {
        self.width == width.max(1) && self.height == height.max(1)
    }
}

/// Textures, samplers and the bind groups built from them.
pub struct SceneResources {
    pub mesh: BoxMesh,
    /// One material group per 2D texture, each paired with the noise volume.
    pub materials: Vec<wgpu::BindGroup>,
    pub environment: wgpu::BindGroup,
    /// Sampler shared by every cube input, reflection targets included.
    pub cube_sampler: wgpu::Sampler,
    _textures: Vec<wgpu::Texture>,
}

impl SceneResources {
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layouts: &SceneLayouts,
        textures: &[TextureData],
        sky: &CubeFaces,
        noise: &NoiseVolume,
    ) -> Self {
        let material_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("material sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let cube_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("cube sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let mut owned = Vec::with_capacity(textures.len() + 2);

        let noise_texture = upload_noise(device, queue, noise);
        let noise_view = noise_texture.create_view(&wgpu::TextureViewDescriptor::default());
        owned.push(noise_texture);

        let mut materials = Vec::with_capacity(textures.len());
        for data in textures {
            let texture = upload_texture(device, queue, data);
            let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
            materials.push(device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(&data.name),
                layout: &layouts.material,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(&view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::TextureView(&noise_view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 2,
                        resource: wgpu::BindingResource::Sampler(&material_sampler),
                    },
                ],
            }));
            owned.push(texture);
        }

        let env_texture = upload_cube(device, queue, sky);
        let env_view = env_texture.create_view(&wgpu::TextureViewDescriptor {
            label: Some("environment"),
            dimension: Some(wgpu::TextureViewDimension::Cube),
            ..Default::default()
        });
        let environment = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("environment"),
            layout: &layouts.cube,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&env_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&cube_sampler),
                },
            ],
        });
        owned.push(env_texture);

        tracing::info!(
            textures = textures.len(),
            environment = sky.size,
            noise = noise.size,
            "scene resources uploaded"
        );

        Self {
            mesh: BoxMesh::new(device),
            materials,
            environment,
            cube_sampler,
            _textures: owned,
        }
    }

    pub fn texture_count(&self) -> usize {
        self.materials.len()
    }
}

fn upload_texture(device: &wgpu::Device, queue: &wgpu::Queue, data: &TextureData) -> wgpu::Texture {
    let size = wgpu::Extent3d {
        width: data.width,
        height: data.height,
        depth_or_array_layers: 1,
    };
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(&data.name),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    write_layers(queue, &texture, &data.rgba, data.width, data.height, size);
    texture
}

fn upload_noise(device: &wgpu::Device, queue: &wgpu::Queue, noise: &NoiseVolume) -> wgpu::Texture {
    let size = wgpu::Extent3d {
        width: noise.size,
        height: noise.size,
        depth_or_array_layers: noise.size,
    };
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("noise volume"),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D3,
        format: wgpu::TextureFormat::Rgba8Unorm,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    write_layers(queue, &texture, &noise.rgba, noise.size, noise.size, size);
    texture
}

fn upload_cube(device: &wgpu::Device, queue: &wgpu::Queue, faces: &CubeFaces) -> wgpu::Texture {
    let size = wgpu::Extent3d {
        width: faces.size,
        height: faces.size,
        depth_or_array_layers: 6,
    };
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("environment"),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: CUBE_FORMAT,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    let bytes: Vec<u8> = faces.faces.concat();
    write_layers(queue, &texture, &bytes, faces.size, faces.size, size);
    texture
}

/// Copy tightly packed RGBA8 rows covering every layer or slice of `size`.
fn write_layers(queue: &wgpu::Queue, texture: &wgpu::Texture, rgba: &[u8], width: u32, height: u32, size: wgpu::Extent3d) {
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        rgba,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(width * 4),
            rows_per_image: Some(height),
        },
        size,
    );
}
