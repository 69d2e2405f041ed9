use anyhow::Result;

use crate::particles::Particle;

use super::upload_via_staging;

/// Read/write index pair over two buffers.
///
/// `read()` holds the latest particle state; a compute dispatch reads it and
/// writes `write()`, then `swap()` makes the freshly written buffer current.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct PingPong {
    current: usize,
}

impl PingPong {
    #[inline]
    pub fn read(self) -> usize {
        self.current
    }

    #[inline]
    pub fn write(self) -> usize {
        1 - self.current
    }

    #[inline]
    pub fn swap(&mut self) {
        self.current = self.write();
    }

    /// Back to reading the first buffer.
    #[inline]
    pub fn rewind(&mut self) {
        *self = Self::default();
    }
}

/// Rejects a reset whose particle count differs from the uploaded one.
fn check_reset_count(stored: u32, len: usize) -> Result<()> {
    anyhow::ensure!(
        u32::try_from(len).is_ok_and(|n| n == stored),
        "reset with {len} particles, storage holds {stored}",
    );
    Ok(())
}

/// Device-local particle state: two storage buffers, both seeded with the
/// initial particles.
///
/// The buffers are also vertex buffers so the graphics pass can draw them
/// without a copy, and copy sources for readback. The particle count is fixed
/// at construction.
pub struct ParticleStorage {
    buffers: [wgpu::Buffer; 2],
    count: u32,
    index: PingPong,
}

impl ParticleStorage {
    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue, particles: &[Particle]) -> Result<Self> {
        anyhow::ensure!(!particles.is_empty(), "particle set is empty");
        let count = u32::try_from(particles.len())?;

        let mut uploaded = upload_via_staging(
            device,
            queue,
            "particle storage",
            bytemuck::cast_slice(particles),
            wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_SRC,
            2,
        )?;

        let (Some(b), Some(a)) = (uploaded.pop(), uploaded.pop()) else {
            anyhow::bail!("staging upload returned fewer than two buffers");
        };

        log::info!("uploaded {count} particles ({} bytes each buffer)", a.size());

        Ok(Self {
            buffers: [a, b],
            count,
            index: PingPong::default(),
        })
    }

    /// Number of particles. Never changes after upload.
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn ping_pong(&self) -> PingPong {
        self.index
    }

    /// Buffer holding the latest particle state.
    pub fn current(&self) -> &wgpu::Buffer {
        &self.buffers[self.index.read()]
    }

    pub fn buffer(&self, i: usize) -> &wgpu::Buffer {
        &self.buffers[i]
    }

    /// Rewrites both buffers with `particles` and rewinds the ping-pong.
    ///
    /// The count must match the uploaded count.
    pub fn reset(&mut self, queue: &wgpu::Queue, particles: &[Particle]) -> Result<()> {
        check_reset_count(self.count, particles.len())?;
        for buffer in &self.buffers {
            queue.write_buffer(buffer, 0, bytemuck::cast_slice(particles));
        }
        self.index.rewind();
        Ok(())
    }

    /// Makes the buffer written by the last dispatch current.
    pub fn swap(&mut self) {
        self.index.swap();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ping_pong_starts_reading_first_buffer() {
        let pp = PingPong::default();
        assert_eq!(pp.read(), 0);
        assert_eq!(pp.write(), 1);
    }

    #[test]
    fn ping_pong_alternates() {
        let mut pp = PingPong::default();
        pp.swap();
        assert_eq!((pp.read(), pp.write()), (1, 0));
        pp.swap();
        assert_eq!((pp.read(), pp.write()), (0, 1));
    }

    #[test]
    fn rewind_returns_to_first_buffer() {
        let mut pp = PingPong::default();
        pp.swap();
        pp.rewind();
        assert_eq!(pp, PingPong::default());

        pp.rewind();
        assert_eq!(pp.read(), 0);
    }

    #[test]
    fn reset_requires_the_uploaded_count() {
        assert!(check_reset_count(200, 200).is_ok());
        assert!(check_reset_count(200, 199).is_err());
        assert!(check_reset_count(200, 201).is_err());
        assert!(check_reset_count(200, 0).is_err());
        assert!(check_reset_count(0, usize::MAX).is_err());
    }
}
