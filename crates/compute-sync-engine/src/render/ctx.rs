/// Renderer-facing context (device/queue + surface format).
///
/// This is intentionally small and stable.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    /// Drawable width / height.
    pub aspect: f32,
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        aspect: f32,
    ) -> Self {
        Self {
            device,
            queue,
            surface_format,
            aspect,
        }
    }
}

/// Target for one frame: the compute and graphics encoders + the color view.
///
/// Compute work goes into `compute_encoder`, drawing into `graphics_encoder`.
/// The two become separate command buffers submitted compute first.
pub struct RenderTarget<'a> {
    pub compute_encoder: &'a mut wgpu::CommandEncoder,
    pub graphics_encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}

impl<'a> RenderTarget<'a> {
    #[inline]
    pub fn new(
        compute_encoder: &'a mut wgpu::CommandEncoder,
        graphics_encoder: &'a mut wgpu::CommandEncoder,
        color_view: &'a wgpu::TextureView,
    ) -> Self {
        Self {
            compute_encoder,
            graphics_encoder,
            color_view,
        }
    }
}
