use anyhow::Result;

use super::FrameRing;

/// Upper bound for frames in flight.
pub const MAX_FRAMES_IN_FLIGHT: usize = 3;

/// Orders compute and graphics submissions and bounds CPU run-ahead.
pub struct FrameSync {
    ring: FrameRing<wgpu::SubmissionIndex>,
    frames_submitted: u64,
}

impl FrameSync {
    /// Creates the frame ring.
    ///
    /// `frames_in_flight` must be within `1..=MAX_FRAMES_IN_FLIGHT`.
    pub fn new(frames_in_flight: usize) -> Result<Self> {
        anyhow::ensure!(
            (1..=MAX_FRAMES_IN_FLIGHT).contains(&frames_in_flight),
            "frames in flight must be within 1..={MAX_FRAMES_IN_FLIGHT}, got {frames_in_flight}",
        );
        Ok(Self {
            ring: FrameRing::new(frames_in_flight),
            frames_submitted: 0,
        })
    }

    pub fn frames_in_flight(&self) -> usize {
        self.ring.len()
    }

    /// Total number of frames submitted so far.
    pub fn frames_submitted(&self) -> u64 {
        self.frames_submitted
    }

    /// Blocks until the submission that last used the current slot has finished.
    pub fn wait_for_slot(&mut self, device: &wgpu::Device) {
        let Some(index) = self.ring.take_current() else { return };

        log::trace!("waiting on frame slot {}", self.ring.current_index());
        if let Err(e) = device.poll(wgpu::PollType::Wait {
            submission_index: Some(index),
            timeout: None,
        }) {
            log::warn!("frame slot wait failed: {e}");
        }
    }

    /// Submits the compute command buffer followed by the graphics one.
    ///
    /// A single submit keeps the order: everything the compute pass writes is
    /// visible to the graphics pass that reads it.
    pub fn submit(
        &mut self,
        queue: &wgpu::Queue,
        compute: wgpu::CommandBuffer,
        graphics: wgpu::CommandBuffer,
    ) -> wgpu::SubmissionIndex {
        let index = queue.submit([compute, graphics]);
        self.ring.complete_current(index.clone());
        self.frames_submitted += 1;
        index
    }

    /// Waits for every outstanding frame. Used before tearing resources down.
    pub fn wait_idle(&mut self, device: &wgpu::Device) {
        let outstanding = self.ring.drain().last();
        if let Some(index) = outstanding {
            if let Err(e) = device.poll(wgpu::PollType::Wait {
                submission_index: Some(index),
                timeout: None,
            }) {
                log::warn!("idle wait failed: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_in_flight_range_enforced() {
        assert!(FrameSync::new(0).is_err());
        assert!(FrameSync::new(MAX_FRAMES_IN_FLIGHT + 1).is_err());
        for n in 1..=MAX_FRAMES_IN_FLIGHT {
            let sync = FrameSync::new(n).unwrap();
            assert_eq!(sync.frames_in_flight(), n);
            assert_eq!(sync.frames_submitted(), 0);
        }
    }
}
