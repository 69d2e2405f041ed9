//! Frame-level synchronization between the compute and graphics passes.
//!
//! Per frame the compute pass advances particle state in its own command
//! buffer and the graphics pass draws the result from a second one. Both go
//! through a single ordered submit, compute first; wgpu tracks the
//! storage-write -> vertex-read hazard on the shared particle buffer and
//! inserts the pipeline barrier between the two.
//!
//! CPU run-ahead is bounded by a ring of frame slots (frames in flight). Each
//! slot remembers the submission that last used it and the CPU waits on that
//! submission before recording into the slot again.

mod frame_sync;
mod ring;

pub use frame_sync::{FrameSync, MAX_FRAMES_IN_FLIGHT};
pub use ring::FrameRing;
