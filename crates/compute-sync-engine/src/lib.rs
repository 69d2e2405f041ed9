//! Compute sync engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the sample, plus
//! the particle simulation resources shared between the compute and graphics
//! passes.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod particles;
pub mod compute;
pub mod render;
pub mod sync;
