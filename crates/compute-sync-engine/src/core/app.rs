use anyhow::Result;
use winit::event::WindowEvent;
use winit::window::WindowId;

use crate::device::Gpu;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the sample.
pub trait App {
    /// Called once per window after its GPU context exists, before the first frame.
    ///
    /// One-time GPU setup (buffers, pipelines) belongs here. An error ends the run.
    fn prepare(&mut self, window_id: WindowId, gpu: &Gpu<'_>) -> Result<()> {
        let _ = (window_id, gpu);
        Ok(())
    }

    /// Called for window events.
    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = (window_id, event);
        AppControl::Continue
    }

    /// Called once per rendered frame per window.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;

    /// Called before the GPU context of a window is destroyed.
    fn on_window_closed(&mut self, window_id: WindowId, gpu: &Gpu<'_>) {
        let _ = (window_id, gpu);
    }
}
