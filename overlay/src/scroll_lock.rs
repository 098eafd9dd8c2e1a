use std::cell::Cell;
use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::stack::OverlayStack;
use crate::stack::Subscription;

/// The page (or hub) scroll state the coordinator is the sole writer of.
pub trait ScrollSurface {
    fn set_scroll_locked(&mut self, locked: bool);
}

/// A cloneable boolean flag surface. The hub keeps one clone to read from;
/// the coordinator writes through another.
#[derive(Debug, Clone, Default)]
pub struct SharedScrollFlag(Rc<Cell<bool>>);

impl SharedScrollFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked(&self) -> bool {
        self.0.get()
    }
}

impl ScrollSurface for SharedScrollFlag {
    fn set_scroll_locked(&mut self, locked: bool) {
        self.0.set(locked);
    }
}

type SharedSurface = Rc<RefCell<Box<dyn ScrollSurface>>>;

/// Held while scrolling is locked; unlocks on drop.
struct ScrollLockGuard {
    surface: SharedSurface,
}

impl ScrollLockGuard {
    fn acquire(surface: &SharedSurface) -> Self {
        debug!("locking hub scroll");
        surface.borrow_mut().set_scroll_locked(true);
        Self {
            surface: Rc::clone(surface),
        }
    }
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        debug!("unlocking hub scroll");
        self.surface.borrow_mut().set_scroll_locked(false);
    }
}

/// Locks scrolling while the stack holds at least one overlay.
///
/// Only crossings of the empty/non-empty boundary touch the surface;
/// pushing a second overlay on an already locked page does nothing.
/// Dropping the coordinator unlocks the surface whatever the stack holds,
/// even when the lock was taken by another writer.
pub struct ScrollLockCoordinator {
    surface: SharedSurface,
    guard: Rc<RefCell<Option<ScrollLockGuard>>>,
    subscription: Option<Subscription>,
}

impl ScrollLockCoordinator {
    pub fn attach(stack: &OverlayStack, surface: Box<dyn ScrollSurface>) -> Self {
        let surface: SharedSurface = Rc::new(RefCell::new(surface));
        let guard = Rc::new(RefCell::new(None));
        if stack.can_go_back() {
            *guard.borrow_mut() = Some(ScrollLockGuard::acquire(&surface));
        }

        let subscription = stack.subscribe({
            let guard = Rc::clone(&guard);
            let surface = Rc::clone(&surface);
            move |transition| match transition.occupancy_changed() {
                Some(true) => {
                    let mut held = guard.borrow_mut();
                    if held.is_none() {
                        *held = Some(ScrollLockGuard::acquire(&surface));
                    }
                }
                Some(false) => {
                    let released = guard.borrow_mut().take();
                    drop(released);
                }
                None => {}
            }
        });

        Self {
            surface,
            guard,
            subscription: Some(subscription),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.guard.borrow().is_some()
    }
}

impl Drop for ScrollLockCoordinator {
    fn drop(&mut self) {
        // Stop listening first so a later clear() cannot re-lock.
        self.subscription.take();
        let released = self.guard.borrow_mut().take();
        if released.is_none() {
            debug!("unlocking hub scroll on teardown");
            self.surface.borrow_mut().set_scroll_locked(false);
        }
        drop(released);
    }
}

impl std::fmt::Debug for ScrollLockCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollLockCoordinator")
            .field("locked", &self.is_locked())
            .finish()
    }
}
