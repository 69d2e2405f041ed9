use winit::window::{Window, WindowId};

use crate::device::Gpu;
use crate::input::InputFrame;
use crate::render::{RenderCtx, RenderTarget};
use crate::sync::FrameSync;
use crate::time::FrameTime;
use crate::window::RuntimeCtx;

use super::app::AppControl;

/// Per-window handles and immutable window metadata.
pub struct WindowCtx<'a> {
    pub id:     WindowId,
    pub window: &'a Window,
}

impl<'a> WindowCtx<'a> {
    /// Returns the drawable aspect ratio (width / height), `1.0` when minimized.
    pub fn aspect(&self) -> f32 {
        let size = self.window.inner_size();
        if size.width == 0 || size.height == 0 {
            1.0
        } else {
            size.width as f32 / size.height as f32
        }
    }

    pub fn set_title(&self, title: &str) {
        self.window.set_title(title);
    }
}

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window:       WindowCtx<'a>,
    pub gpu:          &'a mut Gpu<'w>,
    pub input_frame:  &'a InputFrame,
    pub time:         FrameTime,
    pub runtime:      &'a mut RuntimeCtx,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Runs one synchronized frame.
    ///
    /// Waits for the frame slot in `sync`, acquires the surface, clears it,
    /// calls `record` with a ready [`RenderCtx`] and [`RenderTarget`], then
    /// submits compute before graphics and presents.
    pub fn render<F>(&mut self, sync: &mut FrameSync, clear: wgpu::Color, record: F) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        sync.wait_for_slot(self.gpu.device());

        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                let action = self.gpu.handle_surface_error(err);
                if action.is_fatal() {
                    log::error!("unrecoverable surface error, exiting");
                    return AppControl::Exit;
                }
                return AppControl::Continue;
            }
        };

        // Clear pass; dropped before the encoders are moved into submit().
        {
            let _rpass = frame.graphics_encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("compute-sync clear"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view:           &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load:  wgpu::LoadOp::Clear(clear),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes:         None,
                occlusion_query_set:      None,
                multiview_mask:           None,
            });
        }

        let rctx = RenderCtx::new(
            self.gpu.device(),
            self.gpu.queue(),
            self.gpu.surface_format(),
            self.window.aspect(),
        );

        // RenderTarget borrows the encoders; dropped before submit() takes frame.
        {
            let mut target = RenderTarget::new(
                &mut frame.compute_encoder,
                &mut frame.graphics_encoder,
                &frame.view,
            );
            record(&rctx, &mut target);
        }

        self.window.window.pre_present_notify();
        self.gpu.submit(frame, sync);

        AppControl::Continue
    }
}
