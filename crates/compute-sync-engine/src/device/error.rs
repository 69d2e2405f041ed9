/// What the frame loop does after a failed surface acquire.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured (lost/outdated); the next frame retries.
    Reconfigured,
    /// Transient error (timeout); this frame is dropped.
    SkipFrame,
    /// Out of memory; the sample exits.
    Fatal,
}

impl SurfaceErrorAction {
    pub fn is_fatal(self) -> bool {
        self == SurfaceErrorAction::Fatal
    }
}
