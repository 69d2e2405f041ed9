//! Graphics side of the particle sample.
//!
//! The particle renderer draws the storage buffer last written by the compute
//! pass directly as a point-list vertex stream.

mod ctx;
mod particles;

pub use ctx::{RenderCtx, RenderTarget};
pub use particles::ParticleRenderer;
