use tracing::debug;

use crate::keys::KeyBinding;
use crate::keys::KeyDispatch;
use crate::keys::KeyListeners;
use crate::keys::ListenerRegistration;
use crate::stack::OverlayStack;

/// Pops the stack when the cancel key is pressed.
///
/// Binding registers exactly one listener; dropping the binder removes it.
/// With an empty stack the key is reported as [`KeyDispatch::Ignored`] so
/// the host can route it to whatever else wants it.
#[derive(Debug)]
pub struct CancellationBinder {
    binding: KeyBinding,
    _registration: ListenerRegistration,
}

impl CancellationBinder {
    pub fn bind(listeners: &KeyListeners, stack: OverlayStack, binding: KeyBinding) -> Self {
        let registration = listeners.register(move |event| {
            if !binding.is_press(*event) || !stack.can_go_back() {
                return KeyDispatch::Ignored;
            }
            debug!(key = %binding, depth = stack.depth(), "cancel key pops overlay");
            stack.pop();
            KeyDispatch::Handled
        });
        Self {
            binding,
            _registration: registration,
        }
    }

    pub fn binding(&self) -> KeyBinding {
        self.binding
    }
}
