//! Particle data model.
//!
//! Particles are generated once on the CPU and uploaded to device-local
//! storage. The count never changes after upload.

mod distribution;
mod particle;

pub use distribution::{generate_particles, seeded_particles, INITIAL_SPEED, SPAWN_RADIUS};
pub use particle::{Particle, ParticlePreset};
