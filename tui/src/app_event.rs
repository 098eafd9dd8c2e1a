use gimnasio_protocol::OverlayConfig;

/// Requests from views and the hub, applied by the app loop in the order
/// they were sent.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum AppEvent {
    /// Open an overlay on top of the current one.
    PushOverlay(OverlayConfig),

    /// Close the top overlay.
    PopOverlay,

    /// Swap the top overlay for another, e.g. a finished activity for its
    /// results, so going back skips the finished screen.
    ReplaceOverlay(OverlayConfig),

    /// Close every overlay and return to the hub.
    ClearOverlays,

    /// Request to exit the application gracefully.
    ExitRequest,
}
