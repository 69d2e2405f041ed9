/// Initialization parameters for the GPU layer.
///
/// Keep this structure stable and minimal. Add configuration flags only when a
/// concrete platform or backend requirement exists.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format when available.
    pub prefer_srgb: bool,

    /// Present mode (swap behavior).
    ///
    /// FIFO is broadly supported and keeps the frame rate tied to the display.
    pub present_mode: wgpu::PresentMode,

    /// Optional alpha mode preference for the surface.
    ///
    /// If provided but unsupported on the current surface, a supported mode is selected.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Required wgpu features.
    ///
    /// Compute shaders and storage buffers are core features, so the
    /// particle sample runs with an empty set.
    pub required_features: wgpu::Features,

    /// Limits requested from the adapter/device.
    pub required_limits: wgpu::Limits,

    /// Desired maximum frame latency for the surface.
    ///
    /// This value is a hint; support depends on platform/backend.
    pub desired_maximum_frame_latency: u32,

    /// Enables the backend debug + validation layers.
    pub validation: bool,
}

impl GpuInit {
    /// Instance flags matching the `validation` setting.
    pub fn instance_flags(&self) -> wgpu::InstanceFlags {
        if self.validation {
            wgpu::InstanceFlags::debugging()
        } else {
            wgpu::InstanceFlags::empty()
        }
    }
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
            validation: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_disabled_by_default() {
        let init = GpuInit::default();
        assert!(!init.validation);
        assert_eq!(init.instance_flags(), wgpu::InstanceFlags::empty());
    }

    #[test]
    fn validation_enables_debug_flags() {
        let init = GpuInit { validation: true, ..GpuInit::default() };
        let flags = init.instance_flags();
        assert!(flags.contains(wgpu::InstanceFlags::VALIDATION));
        assert!(flags.contains(wgpu::InstanceFlags::DEBUG));
    }
}
