use anyhow::Result;
use clap::{Parser, ValueEnum};
use winit::dpi::LogicalSize;

use compute_sync_engine::device::GpuInit;
use compute_sync_engine::particles::ParticlePreset;
use compute_sync_engine::sync::MAX_FRAMES_IN_FLIGHT;
use compute_sync_engine::window::RuntimeConfig;

/// Seed used when none is given, so runs are reproducible by default.
pub const DEFAULT_SEED: u64 = 0x5eed_cafe;

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum PresetArg {
    /// 200 particles
    Preview,
    /// 256K particles
    Full,
}

impl From<PresetArg> for ParticlePreset {
    fn from(p: PresetArg) -> Self {
        match p {
            PresetArg::Preview => ParticlePreset::Preview,
            PresetArg::Full => ParticlePreset::Full,
        }
    }
}

/// GPU particles advanced by a compute pass and drawn by a graphics pass.
#[derive(Debug, Parser)]
#[command(name = "compute-sync-test", version)]
pub struct Args {
    /// Particle count preset.
    #[arg(long, value_enum, default_value_t = PresetArg::Full)]
    pub preset: PresetArg,

    /// Seed for the initial particle distribution.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Frames the CPU may record ahead of the GPU.
    #[arg(long, default_value_t = 2)]
    pub frames_in_flight: usize,

    /// Enable backend debug + validation layers.
    #[arg(long)]
    pub validation: bool,

    /// Initial window width in logical pixels.
    #[arg(long, default_value_t = 1280.0)]
    pub width: f64,

    /// Initial window height in logical pixels.
    #[arg(long, default_value_t = 720.0)]
    pub height: f64,
}

/// Everything the sample needs to start.
#[derive(Debug, Clone)]
pub struct SampleConfig {
    pub preset: ParticlePreset,
    pub seed: u64,
    pub frames_in_flight: usize,
    pub clear_color: wgpu::Color,
    pub runtime: RuntimeConfig,
    pub gpu: GpuInit,
}

impl SampleConfig {
    pub fn from_args(args: Args) -> Result<Self> {
        anyhow::ensure!(
            (1..=MAX_FRAMES_IN_FLIGHT).contains(&args.frames_in_flight),
            "--frames-in-flight must be within 1..={MAX_FRAMES_IN_FLIGHT}",
        );
        anyhow::ensure!(
            args.width >= 1.0 && args.height >= 1.0,
            "window size must be at least 1x1, got {}x{}",
            args.width,
            args.height,
        );

        Ok(Self {
            preset: args.preset.into(),
            seed: args.seed,
            frames_in_flight: args.frames_in_flight,
            clear_color: wgpu::Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 },
            runtime: RuntimeConfig {
                initial_size: LogicalSize::new(args.width, args.height),
                ..RuntimeConfig::default()
            },
            gpu: GpuInit {
                validation: args.validation,
                ..GpuInit::default()
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<SampleConfig> {
        let argv = std::iter::once("compute-sync-test").chain(args.iter().copied());
        SampleConfig::from_args(Args::try_parse_from(argv)?)
    }

    #[test]
    fn defaults() {
        let cfg = parse(&[]).unwrap();
        assert_eq!(cfg.preset, ParticlePreset::Full);
        assert_eq!(cfg.seed, DEFAULT_SEED);
        assert_eq!(cfg.frames_in_flight, 2);
        assert!(!cfg.gpu.validation);
        assert_eq!(cfg.runtime.title, "Compute Shader Sync Test");
    }

    #[test]
    fn preview_preset_and_seed() {
        let cfg = parse(&["--preset", "preview", "--seed", "7", "--validation"]).unwrap();
        assert_eq!(cfg.preset.count(), 200);
        assert_eq!(cfg.seed, 7);
        assert!(cfg.gpu.validation);
    }

    #[test]
    fn frames_in_flight_out_of_range() {
        assert!(parse(&["--frames-in-flight", "0"]).is_err());
        assert!(parse(&["--frames-in-flight", "4"]).is_err());
        assert!(parse(&["--frames-in-flight", "3"]).is_ok());
    }

    #[test]
    fn unknown_preset_rejected() {
        assert!(parse(&["--preset", "huge"]).is_err());
    }

    #[test]
    fn degenerate_window_rejected() {
        assert!(parse(&["--width", "0"]).is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
