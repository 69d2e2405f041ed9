use anyhow::{Context, Result};
use wgpu::util::DeviceExt;

/// Checks that `len` bytes can be copied buffer-to-buffer.
///
/// Copies must be non-empty and a multiple of `wgpu::COPY_BUFFER_ALIGNMENT`.
pub fn validate_upload_size(len: usize) -> Result<u64> {
    anyhow::ensure!(len > 0, "refusing to upload an empty buffer");
    let size = u64::try_from(len).context("upload size does not fit in u64")?;
    anyhow::ensure!(
        size % wgpu::COPY_BUFFER_ALIGNMENT == 0,
        "upload size {size} is not a multiple of {}",
        wgpu::COPY_BUFFER_ALIGNMENT,
    );
    Ok(size)
}

/// Uploads `contents` into `copies` device-local buffers through one staging buffer.
///
/// The staging buffer is host-visible and filled while mapped at creation. Each
/// destination gets `COPY_DST | usage`. The copy is submitted immediately; later
/// submissions on the same queue observe the uploaded data.
pub fn upload_via_staging(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    label: &str,
    contents: &[u8],
    usage: wgpu::BufferUsages,
    copies: usize,
) -> Result<Vec<wgpu::Buffer>> {
    let size = validate_upload_size(contents.len())?;
    anyhow::ensure!(copies > 0, "upload needs at least one destination");
    anyhow::ensure!(
        size <= device.limits().max_buffer_size,
        "upload of {size} bytes exceeds the device buffer limit",
    );

    // `create_buffer_init` fills the buffer while it is mapped at creation.
    let staging = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(&format!("{label} staging")),
        contents,
        usage: wgpu::BufferUsages::COPY_SRC,
    });

    let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
        label: Some(&format!("{label} upload encoder")),
    });

    let destinations: Vec<wgpu::Buffer> = (0..copies)
        .map(|i| {
            let dst = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(&format!("{label} {i}")),
                size,
                usage: usage | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            encoder.copy_buffer_to_buffer(&staging, 0, &dst, 0, size);
            dst
        })
        .collect();

    queue.submit(std::iter::once(encoder.finish()));
    log::debug!("uploaded {size} bytes into {copies} x {label}");

    Ok(destinations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_upload_rejected() {
        assert!(validate_upload_size(0).is_err());
    }

    #[test]
    fn unaligned_upload_rejected() {
        assert!(validate_upload_size(6).is_err());
    }

    #[test]
    fn aligned_upload_accepted() {
        assert_eq!(validate_upload_size(32 * 200).unwrap(), 6400);
    }
}
