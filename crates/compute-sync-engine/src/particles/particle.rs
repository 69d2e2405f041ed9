use bytemuck::{Pod, Zeroable};

/// GPU particle record.
///
/// Layout (32 bytes), shared by the compute storage buffer and the vertex
/// stream of the graphics pipeline:
///
///  offset  0  position [f32; 2]   loc 0
///  offset  8  velocity [f32; 2]   (compute only)
///  offset 16  color    [f32; 4]   loc 1
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Particle {
    pub position: [f32; 2],
    pub velocity: [f32; 2],
    pub color: [f32; 4],
}

impl Particle {
    const ATTRS: [wgpu::VertexAttribute; 2] = [
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x2,
            offset: 0,
            shader_location: 0,
        },
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x4,
            offset: 16,
            shader_location: 1,
        },
    ];

    /// Byte size of one particle.
    pub const SIZE: u64 = std::mem::size_of::<Particle>() as u64;

    /// Vertex layout for drawing the particle buffer directly as points.
    pub fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: Self::SIZE,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Fixed particle counts.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ParticlePreset {
    /// Small set for eyeballing individual points.
    Preview,
    /// 256K particles.
    #[default]
    Full,
}

impl ParticlePreset {
    pub const fn count(self) -> u32 {
        match self {
            ParticlePreset::Preview => 200,
            ParticlePreset::Full => 256 * 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_32_bytes() {
        assert_eq!(Particle::SIZE, 32);
        assert_eq!(std::mem::align_of::<Particle>(), 4);
    }

    #[test]
    fn vertex_attributes_match_field_offsets() {
        let p = Particle::default();
        let base = &p as *const Particle as usize;
        let pos = &p.position as *const _ as usize - base;
        let color = &p.color as *const _ as usize - base;

        let layout = Particle::vertex_layout();
        assert_eq!(layout.array_stride, 32);
        assert_eq!(layout.attributes[0].offset, pos as u64);
        assert_eq!(layout.attributes[1].offset, color as u64);
    }

    #[test]
    fn preset_counts() {
        assert_eq!(ParticlePreset::Preview.count(), 200);
        assert_eq!(ParticlePreset::Full.count(), 262_144);
        assert_eq!(ParticlePreset::default(), ParticlePreset::Full);
    }
}
