use anyhow::Result;
use winit::window::WindowId;

use compute_sync_engine::compute::{ParticleCompute, ParticleStorage};
use compute_sync_engine::core::{App, AppControl, FrameCtx};
use compute_sync_engine::device::Gpu;
use compute_sync_engine::input::Key;
use compute_sync_engine::particles::{seeded_particles, Particle};
use compute_sync_engine::render::ParticleRenderer;
use compute_sync_engine::sync::FrameSync;
use compute_sync_engine::time::{FrameStats, StatsReport};

use crate::config::SampleConfig;

/// Simulated milliseconds per real millisecond.
const SIM_RATE: f32 = 2.0;

/// GPU state created by `prepare`.
struct Simulation {
    initial: Vec<Particle>,
    storage: ParticleStorage,
    compute: ParticleCompute,
}

/// The sample: compute advances the particles, graphics draws them, every frame.
pub struct ComputeSyncTest {
    config: SampleConfig,
    sim: Option<Simulation>,
    renderer: ParticleRenderer,
    sync: FrameSync,
    stats: FrameStats,
    paused: bool,
}

impl ComputeSyncTest {
    pub fn new(config: SampleConfig) -> Result<Self> {
        let sync = FrameSync::new(config.frames_in_flight)?;
        Ok(Self {
            config,
            sim: None,
            renderer: ParticleRenderer::new(),
            sync,
            stats: FrameStats::default(),
            paused: false,
        })
    }

    fn handle_keys(&mut self, ctx: &mut FrameCtx<'_, '_>) {
        let frame = ctx.input_frame;

        if frame.pressed(Key::Escape) || frame.pressed(Key::Q) {
            log::info!("exit requested");
            ctx.runtime.exit();
            return;
        }

        if frame.pressed(Key::Space) || frame.pressed(Key::P) {
            self.paused = !self.paused;
            log::info!("simulation {}", if self.paused { "paused" } else { "resumed" });
        }

        if frame.pressed(Key::R) {
            if let Some(sim) = self.sim.as_mut() {
                match sim.storage.reset(ctx.gpu.queue(), &sim.initial) {
                    Ok(()) => log::info!("particles reset to initial state"),
                    Err(e) => log::warn!("reset failed: {e:#}"),
                }
            }
        }
    }

    fn title(&self, report: &StatsReport) -> String {
        format!(
            "{} - {} particles - {:.0} fps{}",
            self.config.runtime.title,
            self.config.preset.count(),
            report.fps,
            if self.paused { " (paused)" } else { "" },
        )
    }
}

impl App for ComputeSyncTest {
    fn prepare(&mut self, _window_id: WindowId, gpu: &Gpu<'_>) -> Result<()> {
        let size = gpu.size();
        let aspect = size.width.max(1) as f32 / size.height.max(1) as f32;
        let count = self.config.preset.count();

        let initial = seeded_particles(count, aspect, self.config.seed);
        let storage = ParticleStorage::new(gpu.device(), gpu.queue(), &initial)?;
        let compute = ParticleCompute::new(gpu.device(), &storage)?;

        log::info!(
            "prepared {count} particles (seed {:#x}, {} frames in flight)",
            self.config.seed,
            self.sync.frames_in_flight(),
        );

        self.sim = Some(Simulation { initial, storage, compute });
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.handle_keys(ctx);

        let Some(sim) = self.sim.as_mut() else {
            return AppControl::Continue;
        };

        let delta_time = ctx.time.dt * 1000.0 * SIM_RATE;
        let paused = self.paused;
        let renderer = &mut self.renderer;

        let control = ctx.render(&mut self.sync, self.config.clear_color, |rctx, target| {
            if !paused {
                sim.compute.record_dispatch(rctx.queue, target.compute_encoder, &mut sim.storage, delta_time);
            }
            renderer.render(rctx, target, &sim.storage);
        });

        if let Some(report) = self.stats.record(ctx.time.dt) {
            log::info!(
                "{:.1} fps ({:.2} ms/frame), {} frames submitted",
                report.fps,
                report.frame_ms,
                self.sync.frames_submitted(),
            );
            ctx.window.set_title(&self.title(&report));
        }

        control
    }

    fn on_window_closed(&mut self, _window_id: WindowId, gpu: &Gpu<'_>) {
        self.sync.wait_idle(gpu.device());
        self.sim = None;
        log::debug!("simulation resources released");
    }
}
