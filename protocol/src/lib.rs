//! Data types shared between the overlay navigation core and the screens
//! that open overlays.

mod actor;
mod overlay;

pub use actor::ActorSummary;
pub use overlay::GradientTheme;
pub use overlay::OverlayConfig;
pub use overlay::OverlayKind;
pub use overlay::OverlayMetadata;
pub use overlay::ProtocolError;
pub use overlay::RenderStyle;
