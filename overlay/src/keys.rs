use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::rc::Weak;
use std::str::FromStr;

use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;

use crate::error::OverlayError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    code: KeyCode,
    modifiers: KeyModifiers,
}

impl KeyBinding {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub const fn esc() -> Self {
        Self::plain(KeyCode::Esc)
    }

    pub fn code(self) -> KeyCode {
        self.code
    }

    pub fn modifiers(self) -> KeyModifiers {
        self.modifiers
    }

    /// True for press (and auto-repeat) events of exactly this key chord.
    ///
    /// Uppercase letters count as shifted whether or not the terminal
    /// reports `SHIFT` with them.
    pub fn is_press(self, event: KeyEvent) -> bool {
        self.code == event.code
            && self.modifiers == shifted_letter_modifiers(event.code, event.modifiers)
            && matches!(event.kind, KeyEventKind::Press | KeyEventKind::Repeat)
    }
}

fn shifted_letter_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyModifiers {
    match code {
        KeyCode::Char(c) if c.is_ascii_uppercase() => modifiers | KeyModifiers::SHIFT,
        _ => modifiers,
    }
}

impl Default for KeyBinding {
    fn default() -> Self {
        Self::esc()
    }
}

impl FromStr for KeyBinding {
    type Err = OverlayError;

    /// Parses `esc`, `q`, `ctrl-w`, `alt-backspace`, `f2`, ...
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || OverlayError::InvalidKeyBinding(raw.to_string());
        let mut parts: Vec<&str> = raw.trim().split(['-', '+']).collect();
        let Some(raw_key) = parts.pop().filter(|key| !key.is_empty()) else {
            return Err(invalid());
        };
        // Single characters keep their case; `Q` means shift-q.
        let key = if raw_key.chars().count() == 1 {
            raw_key.to_string()
        } else {
            raw_key.to_ascii_lowercase()
        };

        let mut modifiers = KeyModifiers::NONE;
        for part in parts {
            modifiers |= match part.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => KeyModifiers::CONTROL,
                "alt" | "meta" => KeyModifiers::ALT,
                "shift" => KeyModifiers::SHIFT,
                _ => return Err(invalid()),
            };
        }

        let code = match key.as_str() {
            "esc" | "escape" => KeyCode::Esc,
            "enter" | "return" => KeyCode::Enter,
            "backspace" => KeyCode::Backspace,
            "tab" => KeyCode::Tab,
            "space" => KeyCode::Char(' '),
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            other => match other.strip_prefix('f').filter(|n| !n.is_empty()) {
                Some(number) => number
                    .parse::<u8>()
                    .ok()
                    .filter(|n| (1..=12).contains(n))
                    .map(KeyCode::F)
                    .ok_or_else(invalid)?,
                None => {
                    let mut chars = other.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) if modifiers.contains(KeyModifiers::SHIFT) => {
                            KeyCode::Char(c.to_ascii_uppercase())
                        }
                        (Some(c), None) => KeyCode::Char(c),
                        _ => return Err(invalid()),
                    }
                }
            },
        };

        Ok(Self::new(code, shifted_letter_modifiers(code, modifiers)))
    }
}

impl fmt::Display for KeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            f.write_str("ctrl-")?;
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            f.write_str("alt-")?;
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            f.write_str("shift-")?;
        }
        match self.code {
            KeyCode::Esc => f.write_str("esc"),
            KeyCode::Enter => f.write_str("enter"),
            KeyCode::Backspace => f.write_str("backspace"),
            KeyCode::Tab => f.write_str("tab"),
            KeyCode::Char(' ') => f.write_str("space"),
            KeyCode::Char(c) if self.modifiers.contains(KeyModifiers::SHIFT) => {
                write!(f, "{}", c.to_ascii_lowercase())
            }
            KeyCode::Char(c) => write!(f, "{c}"),
            KeyCode::F(n) => write!(f, "f{n}"),
            KeyCode::Left => f.write_str("left"),
            KeyCode::Right => f.write_str("right"),
            KeyCode::Up => f.write_str("up"),
            KeyCode::Down => f.write_str("down"),
            other => write!(f, "{other:?}"),
        }
    }
}

/// What a key listener did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDispatch {
    Handled,
    /// Not consumed; the host should route the key elsewhere.
    Ignored,
}

type Listener = Rc<RefCell<dyn FnMut(&KeyEvent) -> KeyDispatch>>;

#[derive(Default)]
struct ListenersInner {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Global key-press target. Listeners are offered each event newest first
/// until one handles it.
#[derive(Clone, Default)]
pub struct KeyListeners {
    inner: Rc<RefCell<ListenersInner>>,
}

impl KeyListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&self, listener: F) -> ListenerRegistration
    where
        F: FnMut(&KeyEvent) -> KeyDispatch + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Rc::new(RefCell::new(listener))));
        ListenerRegistration {
            id,
            registry: Rc::downgrade(&self.inner),
        }
    }

    pub fn dispatch(&self, event: &KeyEvent) -> KeyDispatch {
        let listeners: Vec<Listener> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .rev()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            if (*listener.borrow_mut())(event) == KeyDispatch::Handled {
                return KeyDispatch::Handled;
            }
        }
        KeyDispatch::Ignored
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for KeyListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyListeners")
            .field("len", &self.len())
            .finish()
    }
}

/// Keeps a listener registered; deregisters on drop.
#[must_use = "dropping the registration removes the listener immediately"]
#[derive(Debug)]
pub struct ListenerRegistration {
    id: u64,
    registry: Weak<RefCell<ListenersInner>>,
}

impl Drop for ListenerRegistration {
    fn drop(&mut self) {
        if let Some(inner) = self.registry.upgrade() {
            inner
                .borrow_mut()
                .listeners
                .retain(|(id, _)| *id != self.id);
        }
    }
}
