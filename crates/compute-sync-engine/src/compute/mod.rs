//! Compute side of the particle simulation.
//!
//! - `upload`: staging buffer -> device-local copies
//! - `storage`: the ping-pong pair of particle storage buffers
//! - `pipeline`: compute pipeline, bind groups and dispatch recording
//! - `step`: host-side mirror of the shader's integration step

mod pipeline;
mod step;
mod storage;
mod upload;

pub use pipeline::{workgroup_count, ParticleCompute, SimParams, WORKGROUP_SIZE};
pub use step::step_particle;
pub use storage::{ParticleStorage, PingPong};
pub use upload::{upload_via_staging, validate_upload_size};
