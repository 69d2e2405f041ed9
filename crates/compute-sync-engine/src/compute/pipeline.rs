use anyhow::Result;
use bytemuck::{Pod, Zeroable};

use super::ParticleStorage;

/// Invocations per workgroup. Must match `@workgroup_size` in `particles.wgsl`.
pub const WORKGROUP_SIZE: u32 = 256;

/// Number of workgroups needed to cover `count` items.
pub const fn workgroup_count(count: u32, workgroup_size: u32) -> u32 {
    count.div_ceil(workgroup_size)
}

/// Uniform block consumed by the compute shader (16 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct SimParams {
    pub delta_time: f32,
    pub count: u32,
    pub _pad: [u32; 2],
}

/// Compute pipeline advancing particle state.
///
/// Two bind groups mirror the storage ping-pong: bind group `i` reads buffer
/// `i` and writes buffer `1 - i`.
pub struct ParticleCompute {
    pipeline: wgpu::ComputePipeline,
    params_ubo: wgpu::Buffer,
    bind_groups: [wgpu::BindGroup; 2],
    workgroups: u32,
}

impl ParticleCompute {
    pub fn new(device: &wgpu::Device, storage: &ParticleStorage) -> Result<Self> {
        let workgroups = workgroup_count(storage.count(), WORKGROUP_SIZE);
        anyhow::ensure!(
            workgroups <= device.limits().max_compute_workgroups_per_dimension,
            "{} particles need {workgroups} workgroups, above the device limit",
            storage.count(),
        );

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("particle compute shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/particles.wgsl").into()),
        });

        let storage_entry = |binding: u32, read_only: bool| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::COMPUTE,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Storage { read_only },
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        };

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("particle compute bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::COMPUTE,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: wgpu::BufferSize::new(
                            std::mem::size_of::<SimParams>() as u64,
                        ),
                    },
                    count: None,
                },
                storage_entry(1, true),
                storage_entry(2, false),
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("particle compute pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_compute_pipeline(&wgpu::ComputePipelineDescriptor {
            label: Some("particle compute pipeline"),
            layout: Some(&pipeline_layout),
            module: &shader,
            entry_point: Some("cs_main"),
            compilation_options: Default::default(),
            cache: None,
        });

        let params_ubo = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("particle sim params ubo"),
            size: std::mem::size_of::<SimParams>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let make_bind_group = |read: usize| {
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(&format!("particle compute bind group {read}")),
                layout: &bind_group_layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: params_ubo.as_entire_binding(),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: storage.buffer(read).as_entire_binding(),
                    },
                    wgpu::BindGroupEntry {
                        binding: 2,
                        resource: storage.buffer(1 - read).as_entire_binding(),
                    },
                ],
            })
        };
        let bind_groups = [make_bind_group(0), make_bind_group(1)];

        log::info!("particle compute ready: {workgroups} workgroups of {WORKGROUP_SIZE}");

        Ok(Self {
            pipeline,
            params_ubo,
            bind_groups,
            workgroups,
        })
    }

    /// Records one simulation step and flips `storage` to the written buffer.
    ///
    /// The uniform write is queued ahead of the next submit, so it lands
    /// before this frame's compute command buffer executes.
    pub fn record_dispatch(
        &self,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        storage: &mut ParticleStorage,
        delta_time: f32,
    ) {
        let params = SimParams {
            delta_time,
            count: storage.count(),
            _pad: [0; 2],
        };
        queue.write_buffer(&self.params_ubo, 0, bytemuck::bytes_of(&params));

        {
            let mut cpass = encoder.begin_compute_pass(&wgpu::ComputePassDescriptor {
                label: Some("particle compute pass"),
                timestamp_writes: None,
            });
            cpass.set_pipeline(&self.pipeline);
            cpass.set_bind_group(0, &self.bind_groups[storage.ping_pong().read()], &[]);
            cpass.dispatch_workgroups(self.workgroups, 1, 1);
        }

        storage.swap();
    }
}
