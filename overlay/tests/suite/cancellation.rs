use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;
use gimnasio_overlay::KeyBinding;
use gimnasio_overlay::KeyDispatch;
use gimnasio_overlay::KeyListeners;
use gimnasio_overlay::OverlayConfig;
use gimnasio_overlay::OverlayError;
use gimnasio_overlay::OverlayProvider;
use gimnasio_overlay::SharedScrollFlag;
use pretty_assertions::assert_eq;

fn mount_with_esc(listeners: &KeyListeners) -> Result<OverlayProvider, OverlayError> {
    OverlayProvider::mount(Box::new(SharedScrollFlag::new()), listeners, KeyBinding::esc())
}

fn esc() -> KeyEvent {
    KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)
}

#[test]
fn planificacion_then_actividad_then_escape() -> anyhow::Result<()> {
    let listeners = KeyListeners::new();
    let flag = SharedScrollFlag::new();
    let provider = OverlayProvider::mount(Box::new(flag.clone()), &listeners, KeyBinding::esc())?;
    let stack = provider.handle();

    let planificacion = OverlayConfig::Planificacion {
        codigo: "2025-11-mes-ciencia".to_string(),
        tema: "astronomia".to_string(),
    };
    stack.push(planificacion.clone());
    assert!(flag.is_locked());
    stack.push(OverlayConfig::Actividad {
        semana_id: "semana-1".to_string(),
    });
    assert_eq!(2, stack.depth());

    assert_eq!(KeyDispatch::Handled, listeners.dispatch(&esc()));
    assert_eq!(Some(planificacion), stack.current_overlay());
    assert!(flag.is_locked());

    stack.clear();
    assert!(!flag.is_locked());
    assert_eq!(KeyDispatch::Ignored, listeners.dispatch(&esc()));
    Ok(())
}

#[test]
fn escape_pops_one_level_per_press_until_empty() -> anyhow::Result<()> {
    let listeners = KeyListeners::new();
    let provider = mount_with_esc(&listeners)?;
    let stack = provider.handle();
    stack.push(OverlayConfig::MiGrupo);
    stack.push(OverlayConfig::MisCursos);
    stack.push(OverlayConfig::MiProgreso);

    let mut depths = Vec::new();
    for _ in 0..4 {
        listeners.dispatch(&esc());
        depths.push(stack.depth());
    }
    assert_eq!(vec![2, 1, 0, 0], depths);
    Ok(())
}

#[test]
fn remounting_never_duplicates_the_cancel_listener() -> anyhow::Result<()> {
    let listeners = KeyListeners::new();
    for _ in 0..3 {
        let provider = mount_with_esc(&listeners)?;
        assert_eq!(1, listeners.len());
        drop(provider);
    }
    assert!(listeners.is_empty());

    let provider = mount_with_esc(&listeners)?;
    let stack = provider.handle();
    stack.push(OverlayConfig::Tienda);
    stack.push(OverlayConfig::Animaciones);
    listeners.dispatch(&esc());
    assert_eq!(Some(OverlayConfig::Tienda), stack.current_overlay());
    Ok(())
}

#[test]
fn configured_cancel_key_replaces_escape() -> anyhow::Result<()> {
    let listeners = KeyListeners::new();
    let cancel_key: KeyBinding = "ctrl-w".parse()?;
    let provider =
        OverlayProvider::mount(Box::new(SharedScrollFlag::new()), &listeners, cancel_key)?;
    let stack = provider.handle();
    stack.push(OverlayConfig::MiGrupo);

    assert_eq!(KeyDispatch::Ignored, listeners.dispatch(&esc()));
    assert_eq!(
        KeyDispatch::Handled,
        listeners.dispatch(&KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL))
    );
    assert_eq!(0, stack.depth());
    Ok(())
}

#[test]
fn shifted_letter_cancel_key_fires() -> anyhow::Result<()> {
    let listeners = KeyListeners::new();
    let cancel_key: KeyBinding = "shift-q".parse()?;
    let provider =
        OverlayProvider::mount(Box::new(SharedScrollFlag::new()), &listeners, cancel_key)?;
    let stack = provider.handle();
    stack.push(OverlayConfig::Tienda);
    stack.push(OverlayConfig::Animaciones);

    assert_eq!(
        KeyDispatch::Ignored,
        listeners.dispatch(&KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE))
    );
    assert_eq!(
        KeyDispatch::Handled,
        listeners.dispatch(&KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT))
    );
    assert_eq!(1, stack.depth());
    Ok(())
}
