use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OverlayError {
    /// The overlay stack handle was requested while no provider is mounted.
    #[error(
        "overlay stack requested outside of an OverlayProvider; \
         mount a provider before opening overlays"
    )]
    MissingProvider,

    #[error(
        "an OverlayProvider is already mounted on this thread; nested providers are not supported"
    )]
    ProviderAlreadyMounted,

    #[error("invalid key binding `{0}`")]
    InvalidKeyBinding(String),
}
