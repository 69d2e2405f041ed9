/// Represents a single acquired frame.
///
/// Compute and graphics work are recorded into separate encoders so they end
/// up in separate command buffers. `sync::FrameSync` submits them in order,
/// compute first.
///
/// This object is short-lived and must be finalized promptly. Holding the surface
/// texture prevents acquisition of subsequent frames.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub compute_encoder: wgpu::CommandEncoder,
    pub graphics_encoder: wgpu::CommandEncoder,
}
