use std::cell::RefCell;

use tracing::debug;
use tracing::info;

use crate::cancel::CancellationBinder;
use crate::error::OverlayError;
use crate::keys::KeyBinding;
use crate::keys::KeyListeners;
use crate::scroll_lock::ScrollLockCoordinator;
use crate::scroll_lock::ScrollSurface;
use crate::stack::OverlayStack;
use crate::stack::WeakOverlayStack;

thread_local! {
    static MOUNTED: RefCell<Option<WeakOverlayStack>> = const { RefCell::new(None) };
}

/// Owns the overlay stack for one navigable region and the side effects
/// around it.
///
/// At most one provider is mounted per thread; [`overlay_stack`] hands out
/// handles to its stack. Dropping the provider unbinds the cancel key,
/// unlocks scrolling and empties the stack.
#[derive(Debug)]
pub struct OverlayProvider {
    stack: OverlayStack,
    binder: Option<CancellationBinder>,
    scroll_lock: Option<ScrollLockCoordinator>,
}

impl OverlayProvider {
    pub fn mount(
        surface: Box<dyn ScrollSurface>,
        listeners: &KeyListeners,
        cancel_key: KeyBinding,
    ) -> Result<Self, OverlayError> {
        let stack = OverlayStack::new();
        MOUNTED.with(|slot| {
            let mut slot = slot.borrow_mut();
            if slot.as_ref().and_then(WeakOverlayStack::upgrade).is_some() {
                return Err(OverlayError::ProviderAlreadyMounted);
            }
            *slot = Some(stack.downgrade());
            Ok(())
        })?;

        let scroll_lock = ScrollLockCoordinator::attach(&stack, surface);
        let binder = CancellationBinder::bind(listeners, stack.clone(), cancel_key);
        info!(cancel_key = %cancel_key, "overlay provider mounted");
        Ok(Self {
            stack,
            binder: Some(binder),
            scroll_lock: Some(scroll_lock),
        })
    }

    pub fn stack(&self) -> &OverlayStack {
        &self.stack
    }

    /// A handle sharing this provider's stack.
    pub fn handle(&self) -> OverlayStack {
        self.stack.clone()
    }

    pub fn cancel_key(&self) -> Option<KeyBinding> {
        self.binder.as_ref().map(CancellationBinder::binding)
    }
}

impl Drop for OverlayProvider {
    fn drop(&mut self) {
        self.binder.take();
        self.scroll_lock.take();
        self.stack.clear();
        let _ = MOUNTED.try_with(|slot| slot.borrow_mut().take());
        debug!("overlay provider unmounted");
    }
}

/// Handle to the mounted provider's stack.
///
/// Fails with [`OverlayError::MissingProvider`] when called outside a
/// provider's lifetime.
pub fn overlay_stack() -> Result<OverlayStack, OverlayError> {
    MOUNTED.with(|slot| {
        slot.borrow()
            .as_ref()
            .and_then(WeakOverlayStack::upgrade)
            .ok_or(OverlayError::MissingProvider)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll_lock::SharedScrollFlag;
    use gimnasio_protocol::OverlayConfig;
    use pretty_assertions::assert_eq;

    fn mount_with_esc(listeners: &KeyListeners) -> Result<OverlayProvider, OverlayError> {
        OverlayProvider::mount(Box::new(SharedScrollFlag::new()), listeners, KeyBinding::esc())
    }

    #[test]
    fn handle_requires_a_mounted_provider() -> anyhow::Result<()> {
        assert_eq!(Err(OverlayError::MissingProvider), overlay_stack().map(|_| ()));

        let listeners = KeyListeners::new();
        let provider = mount_with_esc(&listeners)?;
        overlay_stack()?.push(OverlayConfig::Tienda);
        assert_eq!(1, provider.stack().depth());

        drop(provider);
        assert_eq!(Err(OverlayError::MissingProvider), overlay_stack().map(|_| ()));
        Ok(())
    }

    #[test]
    fn second_mount_is_rejected_until_the_first_drops() -> anyhow::Result<()> {
        let listeners = KeyListeners::new();
        let first = mount_with_esc(&listeners)?;
        let second = mount_with_esc(&listeners);
        assert_eq!(Some(OverlayError::ProviderAlreadyMounted), second.err());
        assert_eq!(1, listeners.len());

        drop(first);
        assert_eq!(0, listeners.len());
        let _third = mount_with_esc(&listeners)?;
        assert_eq!(1, listeners.len());
        Ok(())
    }

    #[test]
    fn unmount_unlocks_and_empties_the_stack() -> anyhow::Result<()> {
        let listeners = KeyListeners::new();
        let flag = SharedScrollFlag::new();
        let provider =
            OverlayProvider::mount(Box::new(flag.clone()), &listeners, KeyBinding::esc())?;
        let handle = provider.handle();
        handle.push(OverlayConfig::MiGrupo);
        handle.push(OverlayConfig::MisCursos);
        assert!(flag.is_locked());

        drop(provider);
        assert!(!flag.is_locked());
        assert_eq!(0, handle.depth());
        Ok(())
    }
}
