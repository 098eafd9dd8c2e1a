use std::cell::RefCell;
use std::rc::Rc;

use gimnasio_overlay::KeyBinding;
use gimnasio_overlay::KeyListeners;
use gimnasio_overlay::OverlayConfig;
use gimnasio_overlay::OverlayError;
use gimnasio_overlay::OverlayProvider;
use gimnasio_overlay::ScrollSurface;
use gimnasio_overlay::SharedScrollFlag;
use gimnasio_overlay::overlay_stack;
use pretty_assertions::assert_eq;

fn mount_with_esc(listeners: &KeyListeners) -> Result<OverlayProvider, OverlayError> {
    OverlayProvider::mount(Box::new(SharedScrollFlag::new()), listeners, KeyBinding::esc())
}

#[derive(Clone, Default)]
struct Recorder(Rc<RefCell<Vec<bool>>>);

impl ScrollSurface for Recorder {
    fn set_scroll_locked(&mut self, locked: bool) {
        self.0.borrow_mut().push(locked);
    }
}

#[test]
fn requesting_the_stack_without_a_provider_fails_loudly() {
    let err = overlay_stack().err();
    assert_eq!(Some(OverlayError::MissingProvider), err);
    let message = OverlayError::MissingProvider.to_string();
    assert!(message.contains("OverlayProvider"));
}

#[test]
fn nested_provider_is_rejected() -> anyhow::Result<()> {
    let listeners = KeyListeners::new();
    let outer = mount_with_esc(&listeners)?;
    outer.stack().push(OverlayConfig::MiGrupo);

    let inner = mount_with_esc(&listeners);
    assert_eq!(Some(OverlayError::ProviderAlreadyMounted), inner.err());
    assert_eq!(1, overlay_stack()?.depth());
    Ok(())
}

#[test]
fn scroll_lock_toggles_only_on_the_empty_boundary() -> anyhow::Result<()> {
    let listeners = KeyListeners::new();
    let recorder = Recorder::default();
    let provider =
        OverlayProvider::mount(Box::new(recorder.clone()), &listeners, KeyBinding::esc())?;
    let stack = overlay_stack()?;

    stack.push(OverlayConfig::MiGrupo);
    stack.push(OverlayConfig::Tienda);
    stack.replace(OverlayConfig::Animaciones);
    stack.pop();
    stack.pop();
    stack.replace(OverlayConfig::MiProgreso);
    assert_eq!(vec![true, false, true], *recorder.0.borrow());

    drop(provider);
    assert_eq!(vec![true, false, true, false], *recorder.0.borrow());
    Ok(())
}

#[test]
fn unmount_with_empty_stack_still_unlocks_scroll() -> anyhow::Result<()> {
    let listeners = KeyListeners::new();
    let recorder = Recorder::default();
    let provider =
        OverlayProvider::mount(Box::new(recorder.clone()), &listeners, KeyBinding::esc())?;
    drop(provider);
    assert_eq!(vec![false], *recorder.0.borrow());
    Ok(())
}

#[test]
fn unmount_unlocks_a_page_locked_elsewhere() -> anyhow::Result<()> {
    let listeners = KeyListeners::new();
    let flag = SharedScrollFlag::new();
    let provider = OverlayProvider::mount(Box::new(flag.clone()), &listeners, KeyBinding::esc())?;

    let mut writer = flag.clone();
    writer.set_scroll_locked(true);
    assert_eq!(0, provider.stack().depth());

    drop(provider);
    assert!(!flag.is_locked());
    Ok(())
}

#[test]
fn handles_outlive_the_provider_but_are_not_handed_out_again() -> anyhow::Result<()> {
    let listeners = KeyListeners::new();
    let provider = mount_with_esc(&listeners)?;
    let handle = overlay_stack()?;
    handle.push(OverlayConfig::Tienda);
    drop(provider);

    assert_eq!(0, handle.depth());
    assert_eq!(Some(OverlayError::MissingProvider), overlay_stack().err());
    Ok(())
}
