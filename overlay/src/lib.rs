//! Depth-aware overlay stack navigation.
//!
//! An [`OverlayProvider`] owns one [`OverlayStack`] of [`OverlayConfig`]s
//! pushed on top of a hub screen. Around the stack it wires:
//!
//! - a [`CancellationBinder`] that pops the stack when the cancel key is
//!   pressed and the stack is non-empty,
//! - a [`ScrollLockCoordinator`] that locks the hub's scrolling while any
//!   overlay is open,
//! - and, for renderers, an [`OverlayRegistry`] resolving each config to a
//!   component plus [`OverlayMetadata`], and [`depth_transform`] giving the
//!   visual recession of entries below the top.
//!
//! Nothing here depends on a particular rendering layer; the terminal host
//! lives in `gimnasio-tui`.

mod backdrop;
mod cancel;
mod depth;
mod error;
mod keys;
mod provider;
mod registry;
mod scroll_lock;
mod stack;

pub use backdrop::backdrop_click;
pub use cancel::CancellationBinder;
pub use depth::DepthTransform;
pub use depth::depth_transform;
pub use error::OverlayError;
pub use keys::KeyBinding;
pub use keys::KeyDispatch;
pub use keys::KeyListeners;
pub use keys::ListenerRegistration;
pub use provider::OverlayProvider;
pub use provider::overlay_stack;
pub use registry::OverlayRegistry;
pub use registry::OverlayRegistryBuilder;
pub use registry::Resolved;
pub use registry::default_metadata;
pub use scroll_lock::ScrollLockCoordinator;
pub use scroll_lock::ScrollSurface;
pub use scroll_lock::SharedScrollFlag;
pub use stack::OverlayStack;
pub use stack::StackOp;
pub use stack::StackSnapshot;
pub use stack::StackTransition;
pub use stack::Subscription;

pub use gimnasio_protocol::OverlayConfig;
pub use gimnasio_protocol::OverlayKind;
pub use gimnasio_protocol::OverlayMetadata;
pub use gimnasio_protocol::RenderStyle;
