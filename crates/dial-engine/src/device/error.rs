/// What the caller should do after a failed surface acquire.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; the next frame should succeed.
    Reconfigured,
    /// Transient failure; drop this frame and try again later.
    SkipFrame,
    /// Unrecoverable (out of memory). Shut down.
    Fatal,
}
