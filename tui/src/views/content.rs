use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use gimnasio_overlay::KeyBinding;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Widget;
use ratatui::widgets::Wrap;

use super::OverlayView;
use crate::app_event::AppEvent;
use crate::app_event_sender::AppEventSender;
use crate::key_hint;

const KEY_UP: KeyBinding = key_hint::plain(KeyCode::Up);
const KEY_DOWN: KeyBinding = key_hint::plain(KeyCode::Down);
const KEY_K: KeyBinding = key_hint::plain(KeyCode::Char('k'));
const KEY_J: KeyBinding = key_hint::plain(KeyCode::Char('j'));
const KEY_ENTER: KeyBinding = key_hint::plain(KeyCode::Enter);

/// A selectable entry that sends `event` when activated.
#[derive(Clone, Debug)]
pub(crate) struct ViewAction {
    label: String,
    event: AppEvent,
}

impl ViewAction {
    pub(crate) fn new(label: impl Into<String>, event: AppEvent) -> Self {
        Self {
            label: label.into(),
            event,
        }
    }
}

/// Static header text followed by a numbered list of actions.
pub(crate) struct ContentView {
    header: Vec<Line<'static>>,
    actions: Vec<ViewAction>,
    selected: usize,
    app_event_tx: AppEventSender,
}

impl ContentView {
    pub(crate) fn new(
        header: Vec<Line<'static>>,
        actions: Vec<ViewAction>,
        app_event_tx: AppEventSender,
    ) -> Self {
        Self {
            header,
            actions,
            selected: 0,
            app_event_tx,
        }
    }

    /// Start with `index` selected; out-of-range indices keep the first.
    pub(crate) fn with_selected(mut self, index: usize) -> Self {
        if index < self.actions.len() {
            self.selected = index;
        }
        self
    }

    fn move_selection(&mut self, delta: isize) {
        if self.actions.is_empty() {
            return;
        }
        let len = self.actions.len() as isize;
        self.selected = (self.selected as isize + delta).rem_euclid(len) as usize;
    }

    fn activate(&mut self, index: usize) -> bool {
        let Some(action) = self.actions.get(index) else {
            return false;
        };
        self.selected = index;
        tracing::debug!(label = %action.label, "view action");
        self.app_event_tx.send(action.event.clone());
        true
    }

    fn action_lines(&self) -> Vec<Line<'static>> {
        self.actions
            .iter()
            .enumerate()
            .map(|(i, action)| {
                let marker = if i == self.selected { "› " } else { "  " };
                let spans: Vec<Span<'static>> = vec![
                    marker.into(),
                    format!("{}. ", i + 1).dim(),
                    action.label.clone().into(),
                ];
                if i == self.selected {
                    Line::from(spans).cyan().bold()
                } else {
                    Line::from(spans)
                }
            })
            .collect()
    }
}

impl OverlayView for ContentView {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let show_hints = !self.actions.is_empty() && area.height > 2;
        let body = Rect {
            height: area.height - u16::from(show_hints),
            ..area
        };

        let mut lines = self.header.clone();
        if !self.actions.is_empty() {
            lines.push(Line::default());
            lines.extend(self.action_lines());
        }
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(body, buf);

        if show_hints {
            let hints = Rect {
                y: area.bottom() - 1,
                height: 1,
                ..area
            };
            key_hint::render_key_hints(
                hints,
                buf,
                &[(&[KEY_UP, KEY_DOWN], "to select"), (&[KEY_ENTER], "to open")],
            );
        }
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        match key_event {
            e if KEY_UP.is_press(e) || KEY_K.is_press(e) => {
                self.move_selection(-1);
                true
            }
            e if KEY_DOWN.is_press(e) || KEY_J.is_press(e) => {
                self.move_selection(1);
                true
            }
            e if KEY_ENTER.is_press(e) => self.activate(self.selected),
            KeyEvent {
                code: KeyCode::Char(c @ '1'..='9'),
                kind: KeyEventKind::Press,
                ..
            } => self.activate(c as usize - '1' as usize),
            _ => false,
        }
    }
}
